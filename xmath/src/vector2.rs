use crate::real::Real;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

impl<T: Real> Vector2<T> {
    pub fn new(x: T, y: T) -> Vector2<T> {
        Vector2 { x, y }
    }

    pub fn zero() -> Vector2<T> {
        Vector2::new(T::zero(), T::zero())
    }

    pub fn length(&self) -> T {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn is_valid(&self) -> bool {
        self.x.is_valid() && self.y.is_valid()
    }

    pub fn max(self, rhs: Vector2<T>) -> Vector2<T> {
        Vector2::new(self.x.max(rhs.x), self.y.max(rhs.y))
    }

    pub fn min(self, rhs: Vector2<T>) -> Vector2<T> {
        Vector2::new(self.x.min(rhs.x), self.y.min(rhs.y))
    }

    pub fn distance(&self, other: &Vector2<T>) -> T {
        (*self - *other).length()
    }
}

impl<T: Real> Neg for Vector2<T> {
    type Output = Vector2<T>;

    fn neg(self) -> Self::Output {
        Vector2::new(-self.x, -self.y)
    }
}

macro_rules! impl_componentwise {
    ($op:ident, $method:ident, $op_assign:ident, $method_assign:ident, $sym:tt) => {
        impl<T: Real> $op for Vector2<T> {
            type Output = Vector2<T>;

            fn $method(self, rhs: Vector2<T>) -> Self::Output {
                Vector2::new(self.x $sym rhs.x, self.y $sym rhs.y)
            }
        }

        impl<T: Real> $op_assign for Vector2<T> {
            fn $method_assign(&mut self, rhs: Vector2<T>) {
                *self = *self $sym rhs;
            }
        }
    };
}

impl_componentwise!(Add, add, AddAssign, add_assign, +);
impl_componentwise!(Sub, sub, SubAssign, sub_assign, -);

impl<T: Real> Mul<T> for Vector2<T> {
    type Output = Vector2<T>;

    fn mul(self, scale: T) -> Self::Output {
        Vector2::new(self.x * scale, self.y * scale)
    }
}

impl<T> From<(T, T)> for Vector2<T> {
    fn from((x, y): (T, T)) -> Self {
        Vector2 { x, y }
    }
}
