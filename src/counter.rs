pub const DEFAULT_COUNT_DURATION_MS: f64 = 2_000.0;

pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 || !elapsed_ms.is_finite() {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

pub fn value_at(target: u32, duration_ms: f64, elapsed_ms: f64) -> u32 {
    (progress(elapsed_ms, duration_ms) * f64::from(target)).floor() as u32
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountSample {
    pub value: u32,
    pub finished: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountUp {
    target: u32,
    duration_ms: f64,
    started_at: Option<f64>,
}

impl CountUp {
    pub fn new(target: u32, duration_ms: f64) -> Self {
        Self {
            target,
            duration_ms,
            started_at: None,
        }
    }

    pub fn sample(&mut self, timestamp_ms: f64) -> CountSample {
        let started_at = *self.started_at.get_or_insert(timestamp_ms);
        let elapsed = timestamp_ms - started_at;

        CountSample {
            value: value_at(self.target, self.duration_ms, elapsed),
            finished: progress(elapsed, self.duration_ms) >= 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_from_zero_to_target_monotonically() {
        let mut count_up = CountUp::new(50, DEFAULT_COUNT_DURATION_MS);
        let mut previous = 0;
        let mut last = None;

        for frame in 0..=130 {
            let sample = count_up.sample(1_000.0 + f64::from(frame) * 16.0);
            if frame == 0 {
                assert_eq!(sample.value, 0);
            }
            assert!(sample.value >= previous);
            previous = sample.value;
            last = Some(sample);
        }

        assert_eq!(
            last,
            Some(CountSample {
                value: 50,
                finished: true
            })
        );
    }

    #[test]
    fn midpoint_is_floored() {
        assert_eq!(value_at(5, 2_000.0, 1_000.0), 2);
        assert_eq!(value_at(100, 2_000.0, 999.0), 49);
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let mut count_up = CountUp::new(30, 0.0);

        assert_eq!(
            count_up.sample(5.0),
            CountSample {
                value: 30,
                finished: true
            }
        );
    }

    #[test]
    fn clock_going_backwards_does_not_underflow() {
        let mut count_up = CountUp::new(10, 1_000.0);
        count_up.sample(500.0);

        assert_eq!(count_up.sample(100.0).value, 0);
    }
}
