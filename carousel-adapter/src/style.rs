use alloc::format;
use alloc::string::String;

use carousel::{Easing, Motion};

/// CSS for the carousel track, for hosts that let the browser animate transitions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackStyle {
    /// e.g. `translateX(-900px)`
    pub transform: String,
    /// e.g. `transform 350ms ease-out`, or `none` while dragging and after resets.
    pub transition: String,
}

impl TrackStyle {
    pub fn from_motion(motion: Motion) -> Self {
        let transition = match motion.transition {
            Some(t) => format!("transform {}ms {}", t.duration_ms, css_easing(t.easing)),
            None => String::from("none"),
        };
        Self {
            transform: format!("translateX({}px)", motion.offset),
            transition,
        }
    }
}

pub fn css_easing(easing: Easing) -> &'static str {
    match easing {
        Easing::Linear => "linear",
        Easing::EaseOut => "ease-out",
        Easing::SmoothStep => "ease-in-out",
        Easing::EaseInOutCubic => "cubic-bezier(0.65, 0, 0.35, 1)",
    }
}
