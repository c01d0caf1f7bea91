use alloc::sync::Arc;

use crate::carousel::Carousel;
use crate::{CardWidthPolicy, Easing};

/// A callback fired when the carousel's visible state changes.
pub type OnChangeCallback = Arc<dyn Fn(&Carousel) + Send + Sync>;

/// Durations driving the timer, the animations and the deferred resets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timing {
    pub auto_advance_interval_ms: u64,
    /// Duration of the transition to a newly committed index (timer, programmatic, drag commit).
    pub settle_duration_ms: u64,
    /// Duration of the transition back to the drag start when a drag does not commit.
    pub snap_back_duration_ms: u64,
    /// How long after a drag ends the drag distance is still used to suppress clicks.
    pub drag_distance_reset_delay_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            auto_advance_interval_ms: 3000,
            settle_duration_ms: 350,
            snap_back_duration_ms: 300,
            drag_distance_reset_delay_ms: 100,
        }
    }
}

impl Timing {
    /// Delay between reaching a boundary index and the silent jump back into the real range.
    ///
    /// Derived from the settle duration so the jump can never land before the slide-in finishes.
    pub fn reset_delay_ms(&self) -> u64 {
        self.settle_duration_ms
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragConfig {
    /// A release moving the track strictly more than this commits a slide change.
    pub commit_threshold: f32,
    /// Clicks are genuine activations only if the drag distance is at most this.
    pub click_slop: f32,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            commit_threshold: 40.0,
            click_slop: 5.0,
        }
    }
}

/// Configuration for [`crate::Carousel`].
pub struct CarouselOptions {
    /// Slides duplicated on each side of the canonical list (`K`). Also the number of cards
    /// visible at once on wide viewports. Values below 1 are treated as 1.
    pub padding: usize,
    /// Enables the auto-advance timer.
    pub autoplay: bool,
    pub timing: Timing,
    pub drag: DragConfig,
    pub card_width: CardWidthPolicy,
    /// Easing attached to animated transitions.
    pub easing: Easing,
    /// Optional callback fired when the carousel's visible state changes.
    pub on_change: Option<OnChangeCallback>,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CarouselOptions {
    fn clone(&self) -> Self {
        Self {
            padding: self.padding,
            autoplay: self.autoplay,
            timing: self.timing,
            drag: self.drag,
            card_width: self.card_width,
            easing: self.easing,
            on_change: self.on_change.clone(),
        }
    }
}

impl CarouselOptions {
    pub fn new() -> Self {
        Self {
            padding: 3,
            autoplay: true,
            timing: Timing::default(),
            drag: DragConfig::default(),
            card_width: CardWidthPolicy::default(),
            easing: Easing::default(),
            on_change: None,
        }
    }

    /// Sets `K`, clamped to at least 1 so the head always has a slot to reset from.
    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding.max(1);
        self
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    pub fn with_auto_advance_interval_ms(mut self, interval_ms: u64) -> Self {
        self.timing.auto_advance_interval_ms = interval_ms;
        self
    }

    pub fn with_settle_duration_ms(mut self, duration_ms: u64) -> Self {
        self.timing.settle_duration_ms = duration_ms;
        self
    }

    pub fn with_drag(mut self, drag: DragConfig) -> Self {
        self.drag = drag;
        self
    }

    pub fn with_commit_threshold(mut self, threshold: f32) -> Self {
        self.drag.commit_threshold = threshold;
        self
    }

    pub fn with_card_width(mut self, policy: CardWidthPolicy) -> Self {
        self.card_width = policy;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Carousel) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("padding", &self.padding)
            .field("autoplay", &self.autoplay)
            .field("timing", &self.timing)
            .field("drag", &self.drag)
            .field("card_width", &self.card_width)
            .field("easing", &self.easing)
            .finish_non_exhaustive()
    }
}
