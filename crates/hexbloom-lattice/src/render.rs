//! Plane geometry used only to draw the tiling.

/// √3, the vertical spacing factor between rows.
pub const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// The six vertices of a pointy-top hexagon centered at `center` with
/// circumradius `radius`, starting at 30° and stepping 60°.
pub fn hex_corners(center: (f64, f64), radius: f64) -> [(f64, f64); 6] {
    let (cx, cy) = center;
    std::array::from_fn(|i| {
        let angle = (30.0 + 60.0 * i as f64).to_radians();
        (cx + radius * angle.cos(), cy + radius * angle.sin())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqrt_3_constant() {
        assert!((SQRT_3 * SQRT_3 - 3.0).abs() < 1e-12);
    }

    #[test]
    fn corners_lie_on_circumcircle() {
        let corners = hex_corners((2.0, -1.0), 3.0);
        for (x, y) in corners {
            let d = ((x - 2.0).powi(2) + (y + 1.0).powi(2)).sqrt();
            assert!((d - 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn pointy_top_has_vertex_straight_down() {
        // 90° is the second vertex; with screen-space y growing downwards
        // this is the bottom point of a pointy-top hexagon.
        let corners = hex_corners((0.0, 0.0), 1.0);
        assert!(corners[1].0.abs() < 1e-12);
        assert!((corners[1].1 - 1.0).abs() < 1e-12);
    }
}
