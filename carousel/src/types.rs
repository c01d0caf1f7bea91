use alloc::string::String;

pub type SlideId = u64;

/// A single card shown by the carousel.
///
/// Slides are supplied by the host and never mutated by the engine. Identity is `id`; the same
/// slide may appear more than once in the extended buffer (head/tail padding).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slide {
    pub id: SlideId,
    pub title: String,
    /// Image URL.
    pub image: String,
    /// URL opened in a new browsing context when the card is activated.
    pub landing_page: String,
}

impl Slide {
    pub fn new(
        id: SlideId,
        title: impl Into<String>,
        image: impl Into<String>,
        landing_page: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            image: image.into(),
            landing_page: landing_page.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// At rest; auto-advance is eligible.
    Idle,
    /// A pointer/touch drag is in progress.
    Dragging,
    /// An animated transition to a committed position is in flight.
    Settling,
    /// A silent boundary jump is scheduled.
    Resetting,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    #[default]
    EaseOut,
    SmoothStep,
    EaseInOutCubic,
}

impl Easing {
    pub fn sample(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOut => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }
}

/// How the renderer should reach the current offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    pub duration_ms: u64,
    pub easing: Easing,
}

/// What the track should display right now.
///
/// `transition == None` means "jump there instantly" (animation disabled). This is the state
/// during a drag, after a resize and after a boundary reset.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Motion {
    pub offset: f32,
    pub transition: Option<Transition>,
}

/// Result of releasing a drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragRelease {
    /// Dragged left past the threshold: the index moved forward by one.
    Advanced,
    /// Dragged right past the threshold: the index moved back by one.
    Retreated,
    /// Below the threshold: the track animates back to where the drag started.
    SnappedBack,
}

/// A card to render, borrowed from the extended buffer.
#[derive(Clone, Copy, Debug)]
pub struct CardView<'a> {
    pub buffer_index: usize,
    pub slide: &'a Slide,
    /// Left edge of the card on the (untranslated) track.
    pub start: f32,
    pub width: f32,
}

impl CardView<'_> {
    /// Stable render key; unique per buffer position even when a slide is duplicated.
    pub fn key(&self) -> (SlideId, usize) {
        (self.slide.id, self.buffer_index)
    }
}
