/// Visible index range into a curve: `behind` inclusive, `ahead` exclusive.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Window {
    pub behind: usize,
    pub ahead: usize,
}

impl Window {
    pub fn is_empty(&self) -> bool {
        self.behind >= self.ahead
    }

    pub fn len(&self) -> usize {
        self.ahead.saturating_sub(self.behind)
    }

    /// `path[behind..ahead]`, empty when the range is inverted or out of bounds.
    pub fn slice<'a, T>(&self, path: &'a [T]) -> &'a [T] {
        let ahead = self.ahead.min(path.len());
        if self.behind >= ahead {
            &[]
        } else {
            &path[self.behind..ahead]
        }
    }
}

/// Maps `progress` onto a ping-pong sweep over a cycle of `2 * path_len` steps.
///
/// During the first half the window grows from index 0 toward the end of the path, during
/// the second half its tail retreats toward the end. `phase_offset` shifts the sweep by
/// whole path lengths, so an offset of 1 runs half a cycle ahead.
pub fn compute_window(path_len: usize, progress: f64, phase_offset: f64) -> Window {
    if path_len == 0 {
        return Window::default();
    }
    let n = path_len as f64;
    let cycle = 2.0 * n;
    let mut draw_step = (progress + n * phase_offset).rem_euclid(cycle);
    if draw_step >= cycle {
        // rem_euclid rounds tiny negative remainders up to the modulus
        draw_step = 0.0;
    }
    let difference = n - 1.0 - draw_step;
    let behind = (-difference).max(0.0);
    let ahead = n - 1.0 - difference.max(0.0);

    // NaN progress casts to 0.
    Window {
        behind: behind as usize,
        ahead: ahead as usize,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn w(behind: usize, ahead: usize) -> Window {
        Window { behind, ahead }
    }

    #[test]
    fn boundaries() {
        assert_eq!(compute_window(10, 0.0, 0.0), w(0, 0));
        assert_eq!(compute_window(10, 9.0, 0.0), w(0, 9));
        assert_eq!(compute_window(10, 10.0, 0.0), w(1, 9));
        assert_eq!(compute_window(10, 19.0, 0.0), w(10, 9));
        assert_eq!(compute_window(10, 20.0, 0.0), w(0, 0));
    }

    #[test]
    fn reveal_then_retreat() {
        let path: Vec<usize> = (0..10).collect();
        assert!(compute_window(10, 0.0, 0.0).slice(&path).is_empty());
        assert_eq!(compute_window(10, 4.5, 0.0).slice(&path), &[0, 1, 2, 3]);
        assert_eq!(compute_window(10, 9.0, 0.0).slice(&path), &path[..9]);
        assert_eq!(compute_window(10, 13.0, 0.0).slice(&path), &[4, 5, 6, 7, 8]);
        assert!(compute_window(10, 18.0, 0.0).slice(&path).is_empty());
        assert!(compute_window(10, 19.9, 0.0).slice(&path).is_empty());
    }

    #[test]
    fn phase_window_runs_half_a_cycle_ahead() {
        for &progress in &[0.0, 3.0, 9.5, 14.0, 19.0, 27.25] {
            assert_eq!(
                compute_window(10, progress, 1.0),
                compute_window(10, progress + 10.0, 0.0)
            );
        }
        assert_eq!(compute_window(10, 0.0, 1.0), w(1, 9));
    }

    #[test]
    fn wraps_and_handles_negative_progress() {
        assert_eq!(compute_window(10, 43.0, 0.0), compute_window(10, 3.0, 0.0));
        assert_eq!(compute_window(10, -17.0, 0.0), compute_window(10, 3.0, 0.0));
    }

    #[test]
    fn degenerate_paths() {
        assert_eq!(compute_window(0, 5.0, 0.0), w(0, 0));
        assert!(compute_window(0, 5.0, 1.0).slice::<u8>(&[]).is_empty());

        // Depth 0 curve: two points.
        assert_eq!(compute_window(2, 0.5, 0.0), w(0, 0));
        assert_eq!(compute_window(2, 1.0, 0.0), w(0, 1));
        assert_eq!(compute_window(2, 2.5, 0.0), w(1, 1));
        assert_eq!(compute_window(2, 1.0, 0.0).slice(&['a', 'b']), &['a']);
    }

    #[test]
    fn slice_clamps_to_path() {
        let path = [1, 2, 3];
        assert_eq!(w(1, 10).slice(&path), &[2, 3]);
        assert!(w(5, 10).slice(&path).is_empty());
        assert_eq!(w(2, 1).len(), 0);
        assert!(w(2, 1).is_empty());
    }

    proptest! {
        #[test]
        fn always_inside_path(len in 1usize..20_000, progress in -1e7..1e7f64, phase in 0.0..2.0f64) {
            let win = compute_window(len, progress, phase);
            prop_assert!(win.behind <= len);
            prop_assert!(win.ahead < len);
        }

        #[test]
        fn periodic_in_twice_the_length(len in 1usize..1000, step in 0u32..4000, k in -3i32..3) {
            let progress = step as f64;
            let shifted = progress + (2 * len) as f64 * k as f64;
            prop_assert_eq!(compute_window(len, progress, 0.0), compute_window(len, shifted, 0.0));
        }
    }
}
