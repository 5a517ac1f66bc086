use std::time::{Duration, Instant};
use xdragon::FrameScheduler;

pub struct RealtimeScheduler {
    start: Instant,
    interval: Duration,
    next_due: Duration,
    pending: bool,
    remaining: Option<u64>,
}

impl RealtimeScheduler {
    pub fn new(interval: Duration) -> RealtimeScheduler {
        RealtimeScheduler {
            start: Instant::now(),
            interval,
            next_due: Duration::from_secs(0),
            pending: false,
            remaining: None,
        }
    }

    pub fn with_frame_limit(mut self, frames: u64) -> RealtimeScheduler {
        self.remaining = Some(frames);
        self
    }

    fn elapsed(&self) -> Duration {
        Instant::now() - self.start
    }
}

impl FrameScheduler for RealtimeScheduler {
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

        let elapsed = self.elapsed();
        if elapsed < self.next_due {
            std::thread::sleep(self.next_due - elapsed);
        }
        let now = self.elapsed();
        // a slow frame skips ahead instead of bursting to catch up
        self.next_due = self.next_due.max(now) + self.interval;
        Some(now.as_secs_f64() * 1000.0)
    }
}
