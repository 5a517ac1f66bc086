#[macro_use]
extern crate bitflags;

mod curve;
mod draw;
mod driver;
mod error;
mod scheduler;
mod settings;
mod window;

pub use curve::{generate, point_count, Curve, MAX_DEPTH};
pub use draw::{reconcile_size, Color, DrawFlags, DrawSurface, Point};
pub use driver::{Animation, AnimationDriver, AnimationState, FrameStatus, BASE_ANGLES};
pub use error::{DragonError, Result};
pub use scheduler::{FixedRateScheduler, FrameScheduler, StopHandle};
pub use settings::*;
pub use window::{compute_window, Window};
pub use xmath::{rotate_points, Rotation, Vector2, AABB};
