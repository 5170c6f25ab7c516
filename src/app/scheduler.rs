use std::time::Duration;

/// Longest frame delta fed to the accumulator.
const MAX_FRAME_DELTA_SECS: f32 = 0.25;

/// Fixed-rate tick source fed by variable frame deltas.
pub(super) struct TickScheduler {
    interval_secs: f32,
    accumulator_secs: f32,
    max_ticks_per_frame: u32,
}

impl TickScheduler {
    pub(super) fn new(interval: Duration, max_ticks_per_frame: u32) -> Self {
        Self {
            interval_secs: interval.as_secs_f32().max(0.001),
            accumulator_secs: 0.0,
            max_ticks_per_frame: max_ticks_per_frame.max(1),
        }
    }

    pub(super) fn interval(&self) -> Duration {
        Duration::from_secs_f32(self.interval_secs)
    }

    /// Number of ticks owed after a frame of `frame_delta_secs`.
    pub(super) fn due_ticks(&mut self, frame_delta_secs: f32) -> u32 {
        self.accumulator_secs += frame_delta_secs.clamp(0.0, MAX_FRAME_DELTA_SECS);

        let mut ticks = 0;
        while self.accumulator_secs >= self.interval_secs && ticks < self.max_ticks_per_frame {
            self.accumulator_secs -= self.interval_secs;
            ticks += 1;
        }

        if ticks == self.max_ticks_per_frame {
            // Drop the backlog instead of spiralling.
            self.accumulator_secs = self.accumulator_secs.min(self.interval_secs);
        }
        ticks
    }

    pub(super) fn reset(&mut self) {
        self.accumulator_secs = 0.0;
    }
}
