//! Hexbloom Session
//!
//! The boundary between the diffusion core and whatever draws it.
//!
//! # Architecture
//!
//! - **Session**: owns the grid; one method per user intent
//! - **Snapshots**: the full cell set, pushed to observers after each mutation
//! - **Dispatch**: per-redraw table from renderer ids back to addresses
//! - **Config**: radius, default color and reflow mode, loadable from JSON
//!
//! # Usage
//!
//! ```
//! use hexbloom_session::{Session, SessionConfig};
//! use hexbloom_lattice::{Address, Rgb};
//!
//! let mut session = Session::new(SessionConfig { radius: 2, ..SessionConfig::default() });
//! session.set_color(Address::ORIGIN, Rgb::new(255, 0, 0)).unwrap();
//! let report = session.reflow_to_convergence();
//! assert!(report.converged());
//! ```

mod config;
mod dispatch;
mod error;
mod events;
mod session;

pub use config::SessionConfig;
pub use dispatch::{DispatchTable, Intent};
pub use error::{Error, Result};
pub use events::{GridEvent, GridObserver, GridSnapshot};
pub use session::Session;
