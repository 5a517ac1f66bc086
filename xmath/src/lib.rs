mod aabb;
mod matrix22;
mod real;
mod rotation;
mod vector2;

pub use aabb::*;
pub use matrix22::*;
pub use real::*;
pub use rotation::*;
pub use vector2::*;

pub trait Multiply<Rhs> {
    type Output;
    fn multiply(self, rhs: Rhs) -> Self::Output;
}
