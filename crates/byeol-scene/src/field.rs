//! The static starfield: fixed points created once, rotated as a whole.

use crate::rng::Rng;

/// One immobile background star.
#[derive(Debug, Clone)]
pub struct FieldPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Create the field in bulk, uniform inside the cube `[-extent, extent]^3`.
pub fn init_points(count: usize, extent: f32, rng: &mut Rng) -> Vec<FieldPoint> {
    (0..count)
        .map(|_| FieldPoint {
            x: rng.next_range(-extent, extent),
            y: rng.next_range(-extent, extent),
            z: rng.next_range(-extent, extent),
        })
        .collect()
}

/// Rotate a point about the y axis.
pub fn rotate_y(p: &FieldPoint, angle: f32) -> (f32, f32, f32) {
    let (sin, cos) = angle.sin_cos();
    (p.x * cos + p.z * sin, p.y, p.z * cos - p.x * sin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_points_count_and_bounds() {
        let mut rng = Rng::new(1);
        let points = init_points(500, 10.0, &mut rng);
        assert_eq!(points.len(), 500);
        for p in &points {
            assert!((-10.0..10.0).contains(&p.x));
            assert!((-10.0..10.0).contains(&p.y));
            assert!((-10.0..10.0).contains(&p.z));
        }
    }

    #[test]
    fn test_rotate_y_quarter_turn() {
        let p = FieldPoint {
            x: 1.0,
            y: 2.0,
            z: 0.0,
        };
        let (x, y, z) = rotate_y(&p, std::f32::consts::FRAC_PI_2);
        assert!(x.abs() < 1e-5);
        assert_eq!(y, 2.0);
        assert!((z + 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_rotate_y_zero_is_identity() {
        let p = FieldPoint {
            x: 3.0,
            y: -4.0,
            z: 5.0,
        };
        let (x, y, z) = rotate_y(&p, 0.0);
        assert_eq!((x, y, z), (3.0, -4.0, 5.0));
    }
}
