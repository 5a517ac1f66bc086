use crate::{Multiply, Real, Vector2};

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Matrix22<T> {
    pub ex: Vector2<T>,
    pub ey: Vector2<T>,
}

impl<T: Real> Matrix22<T> {
    /// `[[cos, -sin], [sin, cos]]`: iHat = (cos, sin), jHat = (-sin, cos).
    pub fn rotation(angle: T) -> Matrix22<T> {
        let (s, c) = (angle.sin(), angle.cos());
        Matrix22 {
            ex: Vector2 { x: c, y: s },
            ey: Vector2 { x: -s, y: c },
        }
    }
}

impl<T: Real> Multiply<Vector2<T>> for Matrix22<T> {
    type Output = Vector2<T>;

    fn multiply(self, rhs: Vector2<T>) -> Self::Output {
        let m = self;
        let v = rhs;
        Vector2 {
            x: m.ex.x * v.x + m.ey.x * v.y,
            y: m.ex.y * v.x + m.ey.y * v.y,
        }
    }
}
