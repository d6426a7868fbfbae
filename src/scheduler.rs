//! Frame throttle for full heightfield resamples.

/// Converts resamples-per-second into the throttle period.
///
/// Zero, negative and non-finite rates mean "every frame" and map to the
/// smallest positive normal `f32`, so the period is never used as a zero
/// divisor.
pub fn interval_for_rate(rate: f32) -> f32 {
    if rate > 0.0 && rate.is_finite() {
        (1.0 / rate).max(f32::MIN_POSITIVE)
    } else {
        f32::MIN_POSITIVE
    }
}

/// Accumulates frame time and fires once per throttle period.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateScheduler {
    accumulated_time: f32,
    update_interval: f32,
}

impl UpdateScheduler {
    pub fn new(update_rate: f32) -> Self {
        Self {
            accumulated_time: 0.0,
            update_interval: interval_for_rate(update_rate),
        }
    }

    /// Seconds since the last resample.
    pub fn accumulated_time(&self) -> f32 {
        self.accumulated_time
    }

    /// Throttle period in seconds; always positive.
    pub fn update_interval(&self) -> f32 {
        self.update_interval
    }

    /// Changes the rate without touching the accumulator.
    pub fn set_update_rate(&mut self, update_rate: f32) {
        self.update_interval = interval_for_rate(update_rate);
    }

    /// Adds `dt` and returns `true` when a full resample is due, restarting
    /// the period.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.accumulated_time += dt;
        if self.accumulated_time >= self.update_interval {
            self.accumulated_time = 0.0;
            true
        } else {
            false
        }
    }

    /// Restarts the period after an out-of-band resample.
    pub fn reset(&mut self) {
        self.accumulated_time = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rate_never_yields_zero_interval() {
        assert!(interval_for_rate(0.0) > 0.0);
        assert!(interval_for_rate(-4.0) > 0.0);
        assert!(interval_for_rate(f32::NAN) > 0.0);
        assert!(interval_for_rate(f32::INFINITY) > 0.0);
        assert!(interval_for_rate(f32::MAX) > 0.0);
    }

    #[test]
    fn sixty_per_second() {
        assert_eq!(interval_for_rate(60.0), 1.0 / 60.0);
    }
}
