use crate::draw::Point;
use crate::error::{DragonError, Result};
use std::ops::Deref;
use xmath::{Rotation, AABB};

pub const MAX_DEPTH: u32 = 24;

#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    points: Vec<Point>,
    depth: u32,
}

impl Curve {
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn start(&self) -> Point {
        self.points[0]
    }

    pub fn end(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    pub fn bounds(&self) -> AABB<f64> {
        AABB::from_points(&self.points).unwrap_or_default()
    }
}

impl Deref for Curve {
    type Target = [Point];

    fn deref(&self) -> &[Point] {
        &self.points
    }
}

pub fn point_count(depth: u32) -> Option<usize> {
    1usize.checked_shl(depth)?.checked_add(1)
}

pub fn generate(depth: u32, theta: f64, start: Point, segment_length: f64) -> Result<Curve> {
    if !(segment_length.is_finite() && segment_length > 0.0) {
        return Err(DragonError::InvalidSegmentLength(segment_length));
    }
    if depth > MAX_DEPTH {
        return Err(DragonError::DepthTooLarge {
            depth,
            max: MAX_DEPTH,
        });
    }

    let mut points = Vec::with_capacity(point_count(depth).unwrap_or(2));
    points.push(start);
    points.push(Point::new(start.x + segment_length, start.y));

    let q = Rotation::new(theta);
    for _ in 0..depth {
        let n = points.len();
        let pivot = points[n - 1];
        for i in (0..n - 1).rev() {
            let p = q.rotate_about(points[i], pivot);
            points.push(p);
        }
    }

    Ok(Curve { points, depth })
}
