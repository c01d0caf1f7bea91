use alloc::sync::Arc;

use carousel::{Carousel, CarouselOptions, Slide};

use crate::{ImagePrefetcher, InputEvent, LinkOpener, Response, TrackStyle, Tween};

/// Suggested wake-up interval while a tween is playing.
pub const FRAME_INTERVAL_MS: u64 = 16;

/// A framework-neutral controller that wraps a [`carousel::Carousel`] and provides the common
/// adapter workflows: input dispatch, tween playback and host side effects.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `handle(event, now_ms)` for every input event
/// - `tick(now_ms)` from a timer or frame loop (see [`Controller::next_wakeup_ms`])
///
/// Hosts that animate with CSS can read [`Controller::track_style`] instead of the displayed
/// offset.
#[derive(Debug)]
pub struct Controller<P, L> {
    carousel: Carousel,
    prefetcher: P,
    opener: L,
    tween: Option<Tween>,
    displayed: f32,
    seen_revision: u64,
    seen_generation: u64,
}

impl<P: ImagePrefetcher, L: LinkOpener> Controller<P, L> {
    /// Mounts a carousel and prefetches every image of its extended buffer.
    pub fn new(
        slides: impl Into<Arc<[Slide]>>,
        options: CarouselOptions,
        viewport_width: f32,
        now_ms: u64,
        prefetcher: P,
        opener: L,
    ) -> Self {
        Self::from_carousel(
            Carousel::new(slides, options, viewport_width, now_ms),
            prefetcher,
            opener,
        )
    }

    pub fn from_carousel(carousel: Carousel, prefetcher: P, opener: L) -> Self {
        let mut c = Self {
            displayed: carousel.pixel_offset(),
            seen_revision: carousel.revision(),
            seen_generation: carousel.buffer_generation(),
            carousel,
            prefetcher,
            opener,
            tween: None,
        };
        c.prefetch_buffer();
        c
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// Direct access for programmatic navigation. Changes are picked up on the next `tick` or
    /// `handle`.
    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }

    pub fn into_carousel(self) -> Carousel {
        self.carousel
    }

    pub fn prefetcher(&self) -> &P {
        &self.prefetcher
    }

    pub fn opener(&self) -> &L {
        &self.opener
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// The offset to draw, as of the last `tick`/`handle`.
    pub fn displayed_offset(&self) -> f32 {
        self.displayed
    }

    pub fn track_style(&self) -> TrackStyle {
        TrackStyle::from_motion(self.carousel.motion())
    }

    /// When the host should call `tick` next.
    pub fn next_wakeup_ms(&self, now_ms: u64) -> Option<u64> {
        let deadline = self.carousel.next_deadline_ms();
        if self.tween.is_none() {
            return deadline;
        }
        let frame = now_ms.saturating_add(FRAME_INTERVAL_MS);
        Some(deadline.map_or(frame, |d| d.min(frame)))
    }

    /// Cancels the carousel's timers and any tween. Later events are ignored.
    pub fn unmount(&mut self) {
        self.carousel.unmount();
        self.tween = None;
    }

    /// Replaces the slide list; prefetches the new buffer when it was rebuilt.
    pub fn set_slides(&mut self, slides: impl Into<Arc<[Slide]>>, now_ms: u64) -> bool {
        let rebuilt = self.carousel.set_slides(slides, now_ms);
        self.sync(now_ms);
        rebuilt
    }

    /// Fires due carousel deadlines and advances the tween.
    ///
    /// Returns the offset to draw.
    pub fn tick(&mut self, now_ms: u64) -> f32 {
        self.carousel.tick(now_ms);
        self.sync(now_ms);

        if let Some(tween) = self.tween {
            self.displayed = tween.sample(now_ms);
            if tween.is_done(now_ms) {
                atrace!(offset = self.displayed, "tween done");
                self.tween = None;
            }
        }
        self.displayed
    }

    pub fn handle(&mut self, event: InputEvent, now_ms: u64) -> Response {
        let before = self.fingerprint();
        let response = match event {
            InputEvent::PointerDown { x } | InputEvent::TouchStart { x } => {
                self.carousel.drag_start(x);
                None
            }
            InputEvent::PointerMove { x } | InputEvent::TouchMove { x } => {
                self.carousel.drag_move(x);
                None
            }
            InputEvent::PointerUp | InputEvent::TouchEnd | InputEvent::PointerLeave => self
                .carousel
                .drag_end(now_ms)
                .map(Response::DragReleased),
            InputEvent::HoverEnter => {
                self.carousel.set_hovered(true, now_ms);
                None
            }
            InputEvent::HoverLeave => {
                self.carousel.set_hovered(false, now_ms);
                None
            }
            InputEvent::Resize { viewport_width } => {
                self.carousel.set_viewport_width(viewport_width);
                None
            }
            InputEvent::Click { buffer_index } => Some(self.click(buffer_index)),
        };
        self.sync(now_ms);

        response.unwrap_or_else(|| {
            if self.fingerprint() != before {
                Response::Changed
            } else {
                Response::Ignored
            }
        })
    }

    fn fingerprint(&self) -> (u64, bool, bool) {
        (
            self.carousel.revision(),
            self.carousel.is_hovered(),
            self.carousel.is_dragging(),
        )
    }

    fn click(&mut self, buffer_index: usize) -> Response {
        if !self.carousel.is_mounted() {
            return Response::Ignored;
        }
        if self.carousel.drag_distance() > self.carousel.options().drag.click_slop {
            return Response::ClickSuppressed;
        }
        let Some(slide) = self.carousel.activate(buffer_index) else {
            return Response::Ignored;
        };
        match self.opener.open_in_new_context(&slide.landing_page) {
            Ok(()) => {
                adebug!(slide = slide.id, url = %slide.landing_page, "landing page opened");
                Response::LinkOpened { slide: slide.id }
            }
            Err(err) => {
                log_open_failure(&slide.landing_page, &err);
                Response::Ignored
            }
        }
    }

    /// Picks up buffer rebuilds and motion changes made since the last call.
    fn sync(&mut self, now_ms: u64) {
        if self.carousel.buffer_generation() != self.seen_generation {
            self.seen_generation = self.carousel.buffer_generation();
            self.prefetch_buffer();
        }

        let revision = self.carousel.revision();
        if revision == self.seen_revision {
            return;
        }
        self.seen_revision = revision;

        let motion = self.carousel.motion();
        match motion.transition {
            Some(transition) => {
                // Start from what is on screen, which may be mid-tween.
                let from = match self.tween {
                    Some(t) => t.sample(now_ms),
                    None => self.displayed,
                };
                self.displayed = from;
                self.tween = Some(Tween::from_transition(
                    from,
                    motion.offset,
                    now_ms,
                    transition,
                ));
            }
            None => {
                self.tween = None;
                self.displayed = motion.offset;
            }
        }
    }

    fn prefetch_buffer(&mut self) {
        for slide in self.carousel.buffer() {
            if let Err(err) = self.prefetcher.prefetch(&slide.image) {
                log_prefetch_failure(&slide.image, &err);
            }
        }
    }
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn log_prefetch_failure(url: &str, err: &crate::HostError) {
    adebug!(url, error = %err, "image prefetch failed; ignoring");
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn log_open_failure(url: &str, err: &crate::HostError) {
    awarn!(url, error = %err, "could not open landing page");
}
