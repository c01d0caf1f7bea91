use carousel::{Easing, Transition};

/// Plays one carousel [`Transition`] for hosts that animate the track themselves.
///
/// Offsets are track offsets in pixels (usually negative).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub start_ms: u64,
    /// Never zero.
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    /// A tween from the on-screen offset `from` to `to`, timed and eased like `transition`.
    pub fn from_transition(from: f32, to: f32, start_ms: u64, transition: Transition) -> Self {
        Self::new(from, to, start_ms, transition.duration_ms, transition.easing)
    }

    pub fn end_ms(&self) -> u64 {
        self.start_ms.saturating_add(self.duration_ms)
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms >= self.end_ms()
    }

    /// Linear progress in `[0, 1]`.
    fn progress(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// The offset at `now_ms`. Exactly `to` once the tween is done.
    pub fn sample(&self, now_ms: u64) -> f32 {
        if self.is_done(now_ms) {
            return self.to;
        }
        let eased = self.easing.sample(self.progress(now_ms));
        self.from + (self.to - self.from) * eased
    }

    /// Restarts towards `to` from wherever the tween is at `now_ms`.
    pub fn retarget(&mut self, now_ms: u64, to: f32, duration_ms: u64) {
        let here = self.sample(now_ms);
        *self = Self::new(here, to, now_ms, duration_ms, self.easing);
    }
}
