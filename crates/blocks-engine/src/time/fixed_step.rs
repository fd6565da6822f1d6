/// Fixed-rate update scheduler.
///
/// Frame deltas are accumulated and drained in whole `step` intervals, so the
/// simulation advances at the same rate regardless of display refresh. At most
/// `max_steps` updates run per frame; time beyond that is dropped.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step: f32,
    max_steps: u32,
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(step: f32, max_steps: u32) -> Self {
        debug_assert!(step > 0.0, "FixedTimestep step must be positive");
        Self {
            step,
            max_steps: max_steps.max(1),
            accumulator: 0.0,
        }
    }

    /// Accumulates `dt` seconds and returns how many updates are due.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.max(0.0);

        let mut due = 0;
        while self.accumulator >= self.step && due < self.max_steps {
            self.accumulator -= self.step;
            due += 1;
        }

        if due == self.max_steps && self.accumulator >= self.step {
            log::trace!(
                "fixed step fell behind; dropping {:.3}s",
                self.accumulator - self.accumulator % self.step
            );
            self.accumulator %= self.step;
        }

        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_deltas_accumulate() {
        let mut fs = FixedTimestep::new(0.25, 8);
        assert_eq!(fs.advance(0.125), 0);
        assert_eq!(fs.advance(0.125), 1);
        assert_eq!(fs.advance(0.125), 0);
    }

    #[test]
    fn large_delta_runs_multiple_steps_and_keeps_remainder() {
        let mut fs = FixedTimestep::new(0.25, 8);
        assert_eq!(fs.advance(0.875), 3);
        assert_eq!(fs.advance(0.125), 1);
    }

    #[test]
    fn catch_up_is_capped_and_backlog_dropped() {
        let mut fs = FixedTimestep::new(0.25, 2);
        assert_eq!(fs.advance(10.0), 2);
        assert_eq!(fs.advance(0.0), 0);
        assert_eq!(fs.advance(0.25), 1);
    }

    #[test]
    fn negative_delta_is_ignored() {
        let mut fs = FixedTimestep::new(0.5, 4);
        assert_eq!(fs.advance(-3.0), 0);
        assert_eq!(fs.advance(0.5), 1);
    }
}
