//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on the position state machine. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - Unified mouse/pointer/touch event dispatch ([`InputEvent`])
//! - Tween playback of carousel transitions for hosts without CSS animations
//! - Host side effects: image prefetching and opening landing pages
//! - CSS strings for the track (`transform` / `transition`)
//!
//! With the `web` feature on `wasm32`, `WebImagePrefetcher` and `WebLinkOpener` implement
//! the side effects on top of `web-sys`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod event;
mod host;
mod style;
mod tween;
#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(test)]
mod tests;

pub use controller::{Controller, FRAME_INTERVAL_MS};
pub use event::{InputEvent, Response};
pub use host::{HostError, ImagePrefetcher, LinkOpener, NoopPrefetcher};
pub use style::{TrackStyle, css_easing};
pub use tween::Tween;
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::{WebImagePrefetcher, WebLinkOpener};

pub use carousel::{Easing, Transition};
