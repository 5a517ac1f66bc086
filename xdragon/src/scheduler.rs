use std::cell::Cell;
use std::rc::Rc;

/// Host-side frame callback source.
///
/// `request_frame` arms exactly one callback; `next_frame` hands out the timestamp (in
/// milliseconds) of the armed callback and disarms it. A loop stops once nothing is armed.
pub trait FrameScheduler {
    fn request_frame(&mut self);

    fn next_frame(&mut self) -> Option<f64>;
}

#[derive(Debug, Clone, Default)]
pub struct StopHandle(Rc<Cell<bool>>);

impl StopHandle {
    pub fn new() -> StopHandle {
        StopHandle::default()
    }

    pub fn stop(&self) {
        self.0.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }
}

#[derive(Debug, Clone)]
pub struct FixedRateScheduler {
    now: f64,
    interval_ms: f64,
    pending: bool,
    remaining: Option<u64>,
}

impl FixedRateScheduler {
    pub fn new(start_ms: f64, interval_ms: f64) -> FixedRateScheduler {
        FixedRateScheduler {
            now: start_ms,
            interval_ms,
            pending: false,
            remaining: None,
        }
    }

    pub fn with_frame_limit(mut self, frames: u64) -> FixedRateScheduler {
        self.remaining = Some(frames);
        self
    }

    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

impl FrameScheduler for FixedRateScheduler {
    fn request_frame(&mut self) {
        self.pending = true;
    }

    fn next_frame(&mut self) -> Option<f64> {
        if !self.pending {
            return None;
        }
        if let Some(remaining) = &mut self.remaining {
            if *remaining == 0 {
                return None;
            }
            *remaining -= 1;
        }
        self.pending = false;
        let ts = self.now;
        self.now += self.interval_ms;
        Some(ts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_fires_when_requested() {
        let mut s = FixedRateScheduler::new(100.0, 16.0);
        assert_eq!(s.next_frame(), None);
        s.request_frame();
        s.request_frame();
        assert_eq!(s.next_frame(), Some(100.0));
        assert_eq!(s.next_frame(), None);
        s.request_frame();
        assert_eq!(s.next_frame(), Some(116.0));
        assert_eq!(s.now(), 132.0);
    }

    #[test]
    fn frame_limit() {
        let mut s = FixedRateScheduler::new(0.0, 10.0).with_frame_limit(2);
        s.request_frame();
        assert!(s.next_frame().is_some());
        s.request_frame();
        assert!(s.next_frame().is_some());
        s.request_frame();
        assert_eq!(s.next_frame(), None);
        assert!(s.is_pending());
    }

    #[test]
    fn stop_handle_is_shared() {
        let a = StopHandle::new();
        let b = a.clone();
        assert!(!a.is_stopped());
        b.stop();
        assert!(a.is_stopped());
    }
}
