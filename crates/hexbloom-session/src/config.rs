//! Session configuration.

use hexbloom_grid::StepBudget;
use hexbloom_lattice::Rgb;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Construction parameters for a [`Session`](crate::Session).
///
/// Every field has a default, so a JSON document only needs the fields it
/// overrides:
///
/// ```
/// use hexbloom_session::SessionConfig;
/// use hexbloom_grid::StepBudget;
///
/// let config = SessionConfig::from_json_str(r#"{"radius": 3, "reflow_mode": {"steps": 1}}"#).unwrap();
/// assert_eq!(config.radius, 3);
/// assert_eq!(config.reflow_mode, StepBudget::Steps(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Rings grown around the origin at startup.
    pub radius: u32,
    /// Color of freshly created cells.
    pub default_color: Rgb,
    /// Budget used by [`Session::reflow_default`](crate::Session::reflow_default).
    pub reflow_mode: StepBudget,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            radius: 10,
            default_color: Rgb::WHITE,
            reflow_mode: StepBudget::Unbounded,
        }
    }
}

impl SessionConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
