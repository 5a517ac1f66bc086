use crate::{Real, Vector2};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AABB<T> {
    pub lower_bound: Vector2<T>,
    pub upper_bound: Vector2<T>,
}

impl<T: Real> AABB<T> {
    pub fn new(lower_bound: Vector2<T>, upper_bound: Vector2<T>) -> AABB<T> {
        AABB {
            lower_bound,
            upper_bound,
        }
    }

    pub fn from_points(points: &[Vector2<T>]) -> Option<AABB<T>> {
        let (first, rest) = points.split_first()?;
        Some(rest.iter().fold(AABB::new(*first, *first), |aabb, p| AABB {
            lower_bound: aabb.lower_bound.min(*p),
            upper_bound: aabb.upper_bound.max(*p),
        }))
    }

    pub fn is_valid(&self) -> bool {
        let d = self.upper_bound - self.lower_bound;
        self.lower_bound.is_valid()
            && self.upper_bound.is_valid()
            && d.x >= T::zero()
            && d.y >= T::zero()
    }
}
