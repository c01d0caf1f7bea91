/// Host input, unified across mouse, pointer and touch sources.
///
/// Positions are client-space x coordinates (e.g. `clientX`, or `touches[0].clientX`).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputEvent {
    PointerDown { x: f32 },
    PointerMove { x: f32 },
    PointerUp,
    /// The pointer left the drag surface. Ends an active drag.
    PointerLeave,
    TouchStart { x: f32 },
    TouchMove { x: f32 },
    TouchEnd,
    /// The pointer entered the viewport.
    HoverEnter,
    /// The pointer left the viewport.
    HoverLeave,
    Resize { viewport_width: f32 },
    /// A click on the card at `buffer_index` of the extended buffer.
    Click { buffer_index: usize },
}

/// What [`crate::Controller::handle`] did with an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Response {
    /// Nothing changed (e.g. a move without an active drag).
    Ignored,
    /// Carousel state changed.
    Changed,
    DragReleased(carousel::DragRelease),
    /// A genuine tap opened the slide's landing page.
    LinkOpened { slide: carousel::SlideId },
    /// The click belonged to a drag gesture.
    ClickSuppressed,
}
