use crate::curve::{generate, Curve};
use crate::draw::{reconcile_size, DrawFlags, DrawSurface, Point};
use crate::error::{DragonError, Result};
use crate::scheduler::{FrameScheduler, StopHandle};
use crate::settings::{DragonSettings, Palette};
use crate::window::{compute_window, Window};
use std::f64::consts::{FRAC_PI_2, PI};
use std::time::Instant;
use tracing::{debug, error, info, trace, warn};
use xmath::rotate_points;

pub const BASE_ANGLES: [f64; 4] = [0.0, FRAC_PI_2, PI, 3.0 * FRAC_PI_2];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FrameStatus {
    Drawn,
    Stopped,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationState {
    pub last_timestamp: Option<f64>,
    pub theta: f64,
    pub progress: f64,
    pub cycle_started_at: Option<f64>,
    pub cycles: u64,
    pub frames: u64,
}

impl AnimationState {
    pub fn is_running(&self) -> bool {
        self.last_timestamp.is_some()
    }
}

pub struct AnimationDriver {
    curve: Curve,
    pivot: Point,
    palette: Palette,
    flags: DrawFlags,
    angular_rate: f64,
    segment_rate: f64,
    state: AnimationState,
    stop: StopHandle,
}

impl AnimationDriver {
    pub fn new(settings: &DragonSettings, origin: Point) -> Result<AnimationDriver> {
        settings.validate()?;
        let started = Instant::now();
        let curve = generate(
            settings.depth,
            settings.theta,
            origin,
            settings.segment_length,
        )?;
        let bounds = curve.bounds();
        info!(
            depth = settings.depth,
            points = curve.len(),
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            min_x = bounds.lower_bound.x,
            min_y = bounds.lower_bound.y,
            max_x = bounds.upper_bound.x,
            max_y = bounds.upper_bound.y,
            "generated dragon curve"
        );
        AnimationDriver::with_curve(curve, origin, settings)
    }

    pub fn with_curve(
        curve: Curve,
        pivot: Point,
        settings: &DragonSettings,
    ) -> Result<AnimationDriver> {
        let duration = settings.cycle_duration_ms;
        if !(duration.is_finite() && duration > 0.0) {
            return Err(DragonError::InvalidDuration(duration));
        }
        let cycle_len = 2.0 * curve.len() as f64;
        Ok(AnimationDriver {
            curve,
            pivot,
            palette: settings.palette,
            flags: settings.draw_flags(),
            angular_rate: 2.0 * PI / duration,
            segment_rate: cycle_len / duration,
            state: AnimationState::default(),
            stop: StopHandle::new(),
        })
    }

    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    pub fn pivot(&self) -> Point {
        self.pivot
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn cycle_len(&self) -> f64 {
        2.0 * self.curve.len() as f64
    }

    pub fn angular_rate(&self) -> f64 {
        self.angular_rate
    }

    pub fn segment_rate(&self) -> f64 {
        self.segment_rate
    }

    pub fn windows(&self) -> (Window, Window) {
        let n = self.curve.len();
        (
            compute_window(n, self.state.progress, 0.0),
            compute_window(n, self.state.progress, 1.0),
        )
    }

    pub fn on_frame<F, S>(
        &mut self,
        timestamp: f64,
        scheduler: &mut F,
        surface: &mut S,
    ) -> FrameStatus
    where
        F: FrameScheduler + ?Sized,
        S: DrawSurface + ?Sized,
    {
        if self.stop.is_stopped() {
            debug!(frames = self.state.frames, "animation stopped");
            return FrameStatus::Stopped;
        }
        scheduler.request_frame();

        if reconcile_size(surface) {
            debug!(
                width = surface.width(),
                height = surface.height(),
                "resized drawing surface"
            );
        }
        let (width, height) = (surface.width() as f64, surface.height() as f64);
        surface.clear_rect(0.0, 0.0, width, height);

        self.advance(timestamp);
        self.draw(surface);

        self.state.last_timestamp = Some(timestamp);
        self.state.frames += 1;
        surface.end_frame();
        FrameStatus::Drawn
    }

    fn advance(&mut self, timestamp: f64) {
        let last = match self.state.last_timestamp {
            Some(last) => last,
            None => {
                self.state.cycle_started_at = Some(timestamp);
                timestamp
            }
        };
        let mut time_delta = timestamp - last;
        if time_delta < 0.0 {
            warn!(timestamp, last, "frame timestamp went backwards");
            time_delta = 0.0;
        }

        let cycle_len = self.cycle_len();
        let prev_step = self.state.progress.rem_euclid(cycle_len);
        self.state.theta += self.angular_rate * time_delta;
        self.state.progress += self.segment_rate * time_delta;
        let step = self.state.progress.rem_euclid(cycle_len);

        if time_delta > 0.0 && step <= prev_step {
            self.state.cycles += 1;
            debug!(
                cycle = self.state.cycles,
                duration_ms = ?self.state.cycle_started_at.map(|t| timestamp - t),
                "started new cycle"
            );
            self.state.cycle_started_at = Some(timestamp);
        }
        trace!(
            time_delta,
            theta = self.state.theta,
            progress = self.state.progress,
            "advanced animation"
        );
    }

    fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        let (main, phase) = self.windows();
        let main = main.slice(self.curve.points());
        let phase = phase.slice(self.curve.points());

        for (copy, base) in BASE_ANGLES.iter().enumerate() {
            let angle = self.state.theta + base;
            if self.flags.contains(DrawFlags::MAIN) && main.len() > 1 {
                let points = rotate_points(angle, main, self.pivot);
                surface.stroke_path(&points, self.palette.main_color(copy));
            }
            if self.flags.contains(DrawFlags::PHASE) && phase.len() > 1 {
                let points = rotate_points(angle, phase, self.pivot);
                surface.stroke_path(&points, self.palette.phase_color(copy));
            }
        }
    }
}

pub struct Animation<S> {
    driver: AnimationDriver,
    surface: S,
}

impl<S: DrawSurface> Animation<S> {
    pub fn setup<A>(settings: &DragonSettings, acquire: A) -> Result<Animation<S>>
    where
        A: FnOnce() -> Result<S>,
    {
        let mut surface = match acquire() {
            Ok(surface) => surface,
            Err(err) => {
                error!(error = %err, "failed to acquire drawing surface, animation not started");
                return Err(err);
            }
        };
        reconcile_size(&mut surface);

        let origin = settings.origin_point().unwrap_or_else(|| {
            Point::new(
                surface.width() as f64 / 2.0,
                surface.height() as f64 / 2.0,
            )
        });
        let driver = AnimationDriver::new(settings, origin)?;
        Ok(Animation { driver, surface })
    }

    pub fn run<F: FrameScheduler + ?Sized>(&mut self, scheduler: &mut F) -> u64 {
        scheduler.request_frame();
        let mut frames = 0;
        while let Some(timestamp) = scheduler.next_frame() {
            match self.driver.on_frame(timestamp, scheduler, &mut self.surface) {
                FrameStatus::Drawn => frames += 1,
                FrameStatus::Stopped => break,
            }
        }
        info!(frames, cycles = self.driver.state().cycles, "animation loop finished");
        frames
    }

    pub fn driver(&self) -> &AnimationDriver {
        &self.driver
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.driver.stop_handle()
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
