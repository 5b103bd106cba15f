use crate::Easing;

/// Duration of a stat count-up.
pub const COUNT_UP_MS: u64 = 1_500;

/// A count-up animation from 0 to `target`.
///
/// Samples floor the eased value so the digits tick upward through the run,
/// then land exactly on `target` once the duration elapses. The curve is a
/// fast-start ease-out, so most of the counting happens early.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CountUp {
    pub target: u64,
    pub start_ms: u64,
    pub duration_ms: u64,
}

impl CountUp {
    pub fn new(target: u64, start_ms: u64) -> Self {
        Self {
            target,
            start_ms,
            duration_ms: COUNT_UP_MS,
        }
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms.max(1);
        self
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    pub fn sample(&self, now_ms: u64) -> u64 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if elapsed >= self.duration_ms {
            return self.target;
        }
        let t = elapsed as f32 / self.duration_ms as f32;
        let eased = Easing::EaseOutQuint.sample(t);
        (self.target as f32 * eased) as u64
    }
}
