//! A headless, infinitely looping carousel engine.
//!
//! For adapter-level utilities (tween playback, input dispatch, side effects), see the
//! `carousel-adapter` crate.
//!
//! The engine covers the parts of a carousel that are easy to get subtly wrong:
//! - a padded slide buffer that makes a finite list look endless
//! - a position state machine mapping a logical index to a pixel offset, with silent resets at
//!   the padded boundaries
//! - arbitration between the auto-advance timer, pointer/touch drags and viewport resizes
//!
//! It is UI-agnostic. A TUI/GUI/web layer is expected to provide:
//! - the viewport width (on mount and on resize)
//! - pointer/touch positions and hover state
//! - a clock, by calling `tick(now_ms)` at or after [`Carousel::next_deadline_ms`]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod buffer;
mod carousel;
mod options;
mod state;
mod types;
mod width;


pub use buffer::{ExtendedBuffer, build_extended};
pub use carousel::Carousel;
pub use options::{CarouselOptions, DragConfig, OnChangeCallback, Timing};
pub use state::{FrameState, InteractionState, PositionState};
pub use types::{CardView, DragRelease, Easing, Motion, Phase, Slide, SlideId, Transition};
pub use width::{CardWidthPolicy, card_width};
