use std::fmt::Debug;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

pub trait Real:
    'static
    + Debug
    + Copy
    + Clone
    + Default
    + RealConstants
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + PartialOrd
{
    fn is_valid(&self) -> bool;

    fn sqrt(self) -> Self;

    fn sin(self) -> Self;

    fn cos(self) -> Self;

    fn max(self, other: Self) -> Self;

    fn min(self, other: Self) -> Self;
}

pub trait RealConstants {
    fn zero() -> Self;
}

macro_rules! impl_real {
    ($ty:ident) => {
        impl Real for $ty {
            fn is_valid(&self) -> bool {
                $ty::is_finite(*self)
            }

            fn sqrt(self) -> Self {
                $ty::sqrt(self)
            }

            fn sin(self) -> Self {
                $ty::sin(self)
            }

            fn cos(self) -> Self {
                $ty::cos(self)
            }

            fn max(self, other: Self) -> Self {
                $ty::max(self, other)
            }

            fn min(self, other: Self) -> Self {
                $ty::min(self, other)
            }
        }

        impl RealConstants for $ty {
            fn zero() -> Self {
                0.0
            }
        }
    };
}

impl_real!(f32);
impl_real!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn clamp_non_negative<T: Real>(value: T) -> T {
        value.max(T::zero())
    }

    #[test]
    fn generic_over_both_widths() {
        assert_eq!(clamp_non_negative(-2.5f32), 0.0);
        assert_eq!(clamp_non_negative(2.5f64), 2.5);
        assert_eq!(Real::sqrt(16.0f64), 4.0);
        assert_eq!(Real::min(3.0f32, -1.0), -1.0);
    }

    #[test]
    fn validity() {
        assert!(Real::is_valid(&1.0f64));
        assert!(!Real::is_valid(&std::f32::NAN));
        assert!(!Real::is_valid(&std::f64::NEG_INFINITY));
    }
}
