use crate::{Matrix22, Multiply, Real, Vector2};

#[derive(Debug, Copy, Clone)]
pub struct Rotation<T> {
    pub s: T,
    pub c: T,
}

impl<T: Real> Rotation<T> {
    pub fn new(angle: T) -> Rotation<T> {
        Rotation {
            s: angle.sin(),
            c: angle.cos(),
        }
    }

    pub fn rotate_about(&self, point: Vector2<T>, pivot: Vector2<T>) -> Vector2<T> {
        self.multiply(point - pivot) + pivot
    }
}

impl<T: Real> Multiply<Vector2<T>> for Rotation<T> {
    type Output = Vector2<T>;

    fn multiply(self, rhs: Vector2<T>) -> Self::Output {
        let q = self;
        let v = rhs;
        Vector2::new(q.c * v.x - q.s * v.y, q.s * v.x + q.c * v.y)
    }
}

pub fn rotate_points<T: Real>(
    theta: T,
    points: &[Vector2<T>],
    pivot: Vector2<T>,
) -> Vec<Vector2<T>> {
    let m = Matrix22::rotation(theta);
    points
        .iter()
        .map(|&p| m.multiply(p - pivot) + pivot)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn assert_points_eq(a: &[Vector2<f64>], b: &[Vector2<f64>], eps: f64) {
        assert_eq!(a.len(), b.len());
        for (p, q) in a.iter().zip(b) {
            assert_abs_diff_eq!(p.x, q.x, epsilon = eps);
            assert_abs_diff_eq!(p.y, q.y, epsilon = eps);
        }
    }

    #[test]
    fn quarter_turn_about_pivot() {
        let pivot = Vector2::new(1.0, 0.0);
        let out = rotate_points(FRAC_PI_2, &[Vector2::new(0.0, 0.0), pivot], pivot);
        assert_points_eq(&out, &[Vector2::new(1.0, -1.0), pivot], 1e-12);
    }

    #[test]
    fn empty_input() {
        assert!(rotate_points(PI, &[], Vector2::new(3.0, 4.0)).is_empty());
    }

    #[test]
    fn rotate_about_agrees_with_matrix() {
        let q = Rotation::new(0.3);
        let pivot = Vector2::new(-1.0, 4.0);
        let pts = [Vector2::new(2.0, 7.0), Vector2::new(0.5, -3.0)];
        let one_by_one: Vec<_> = pts.iter().map(|&p| q.rotate_about(p, pivot)).collect();
        assert_points_eq(&one_by_one, &rotate_points(0.3, &pts, pivot), 1e-12);
    }

    #[test]
    fn nan_propagates() {
        let out = rotate_points(std::f64::NAN, &[Vector2::new(1.0, 1.0)], Vector2::zero());
        assert!(!out[0].is_valid());
    }

    fn point() -> impl Strategy<Value = Vector2<f64>> {
        (-1e3..1e3f64, -1e3..1e3f64).prop_map(Vector2::from)
    }

    proptest! {
        #[test]
        fn zero_angle_is_identity(pts in prop::collection::vec(point(), 0..32), pivot in point()) {
            let out = rotate_points(0.0, &pts, pivot);
            assert_points_eq(&out, &pts, 1e-9);
        }

        #[test]
        fn pivot_is_fixed(theta in -10.0..10.0f64, pivot in point()) {
            let out = rotate_points(theta, &[pivot], pivot);
            assert_points_eq(&out, &[pivot], 1e-9);
        }

        #[test]
        fn round_trip(
            theta in -10.0..10.0f64,
            pts in prop::collection::vec(point(), 1..32),
            pivot in point()
        ) {
            let there = rotate_points(theta, &pts, pivot);
            let back = rotate_points(-theta, &there, pivot);
            assert_points_eq(&back, &pts, 1e-8);
        }

        #[test]
        fn preserves_distance_to_pivot(theta in -10.0..10.0f64, p in point(), pivot in point()) {
            let out = Rotation::new(theta).rotate_about(p, pivot);
            prop_assert!((out.distance(&pivot) - p.distance(&pivot)).abs() < 1e-8);
        }
    }
}
