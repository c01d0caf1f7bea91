use alloc::sync::Arc;
use core::cell::Cell;

use crate::buffer::ExtendedBuffer;
use crate::{
    CardView, CarouselOptions, DragRelease, FrameState, InteractionState, Motion, Phase,
    PositionState, Slide, Transition,
};

// `f32::abs` is not available in `core` on our MSRV.
fn abs(v: f32) -> f32 {
    if v < 0.0 { -v } else { v }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct DragAnchor {
    start_pointer_x: f32,
    base_offset: f32,
}

/// Deferred work, ordered so that equal timestamps fire in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Deadline {
    SettleDone,
    Reset,
    ClearDragDistance,
    AutoAdvance,
}

#[derive(Clone, Copy, Debug, Default)]
struct Deadlines {
    settle_done: Option<u64>,
    reset: Option<u64>,
    clear_drag_distance: Option<u64>,
    auto_advance: Option<u64>,
}

impl Deadlines {
    fn earliest(&self) -> Option<(u64, Deadline)> {
        [
            (self.settle_done, Deadline::SettleDone),
            (self.reset, Deadline::Reset),
            (self.clear_drag_distance, Deadline::ClearDragDistance),
            (self.auto_advance, Deadline::AutoAdvance),
        ]
        .into_iter()
        .filter_map(|(at, d)| at.map(|at| (at, d)))
        .min()
    }

    fn next_due(&self, now_ms: u64) -> Option<(u64, Deadline)> {
        self.earliest().filter(|&(at, _)| at <= now_ms)
    }

    fn take(&mut self, deadline: Deadline) {
        match deadline {
            Deadline::SettleDone => self.settle_done = None,
            Deadline::Reset => self.reset = None,
            Deadline::ClearDragDistance => self.clear_drag_distance = None,
            Deadline::AutoAdvance => self.auto_advance = None,
        }
    }
}

/// A headless, infinitely looping carousel.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects or timers.
/// - Your adapter drives it with input events and `tick(now_ms)`.
/// - Rendering reads [`Carousel::motion`] and [`Carousel::for_each_card`].
///
/// Looping is faked with a padded buffer (see [`crate::build_extended`]): after the track slides
/// onto a padded duplicate at either end, a deferred reset silently jumps the logical index back
/// into the real range, where the same slides are shown.
///
/// For tween playback and input dispatch, see the `carousel-adapter` crate.
#[derive(Clone, Debug)]
pub struct Carousel {
    options: CarouselOptions,
    buffer: ExtendedBuffer,
    viewport_width: f32,
    card_width: f32,

    logical_index: usize,
    pixel_offset: f32,
    transition: Option<Transition>,

    is_hovered: bool,
    drag: Option<DragAnchor>,
    drag_distance: f32,

    deadlines: Deadlines,
    mounted: bool,
    revision: u64,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl Carousel {
    /// Mounts a carousel over `slides`.
    ///
    /// The logical index starts at the first real slide (`padding`), and the auto-advance timer
    /// is armed relative to `now_ms` when autoplay is enabled.
    pub fn new(
        slides: impl Into<Arc<[Slide]>>,
        options: CarouselOptions,
        viewport_width: f32,
        now_ms: u64,
    ) -> Self {
        let buffer = ExtendedBuffer::new(slides.into(), options.padding);
        let card_width = options.card_width.card_width(viewport_width);
        let logical_index = buffer.padding();
        cdebug!(
            canonical_len = buffer.canonical_len(),
            padding = buffer.padding(),
            card_width,
            "Carousel::new"
        );
        if buffer.is_empty() {
            cwarn!("Carousel::new: empty slide list, carousel is inert");
        }
        let mut c = Self {
            options,
            buffer,
            viewport_width,
            card_width,
            logical_index,
            pixel_offset: -(logical_index as f32) * card_width,
            transition: None,
            is_hovered: false,
            drag: None,
            drag_distance: 0.0,
            deadlines: Deadlines::default(),
            mounted: true,
            revision: 0,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        };
        c.arm_auto_advance(now_ms);
        c
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Cancels every pending timer, settle and reset. Later calls are no-ops.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        cdebug!("Carousel::unmount");
        self.mounted = false;
        self.deadlines = Deadlines::default();
        self.drag = None;
    }

    fn is_live(&self) -> bool {
        self.mounted && !self.buffer.is_empty()
    }

    /// Replaces the canonical slide list.
    ///
    /// Nothing happens if `slides` is the same list (pointer identity). Otherwise the buffer is
    /// rebuilt, pending settle/reset work is cancelled, any drag is abandoned, the index returns
    /// to the first real slide and the auto-advance window restarts.
    ///
    /// Returns `true` when the buffer was rebuilt.
    pub fn set_slides(&mut self, slides: impl Into<Arc<[Slide]>>, now_ms: u64) -> bool {
        if !self.mounted {
            return false;
        }
        if !self.buffer.rebuild_if_changed(slides.into()) {
            return false;
        }
        self.batch_update(|c| {
            c.deadlines.settle_done = None;
            c.deadlines.reset = None;
            c.deadlines.clear_drag_distance = None;
            c.drag = None;
            c.drag_distance = 0.0;
            c.logical_index = c.buffer.padding();
            c.apply_motion(c.offset_for(c.logical_index), None);
            c.disarm_auto_advance();
            c.arm_auto_advance(now_ms);
            c.notify();
        });
        true
    }

    pub fn slides(&self) -> &Arc<[Slide]> {
        self.buffer.canonical()
    }

    /// The extended (padded) buffer, in render order.
    pub fn buffer(&self) -> &[Slide] {
        self.buffer.slides()
    }

    pub fn extended_buffer(&self) -> &ExtendedBuffer {
        &self.buffer
    }

    pub fn buffer_generation(&self) -> u64 {
        self.buffer.generation()
    }

    pub fn logical_index(&self) -> usize {
        self.logical_index
    }

    /// The authoritative track offset (target offset while a transition plays).
    pub fn pixel_offset(&self) -> f32 {
        self.pixel_offset
    }

    pub fn card_width(&self) -> f32 {
        self.card_width
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn transition(&self) -> Option<Transition> {
        self.transition
    }

    pub fn motion(&self) -> Motion {
        Motion {
            offset: self.pixel_offset,
            transition: self.transition,
        }
    }

    /// Incremented whenever [`Carousel::motion`] changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn phase(&self) -> Phase {
        if self.drag.is_some() {
            Phase::Dragging
        } else if self.deadlines.reset.is_some() {
            Phase::Resetting
        } else if self.deadlines.settle_done.is_some() {
            Phase::Settling
        } else {
            Phase::Idle
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_hovered(&self) -> bool {
        self.is_hovered
    }

    pub fn drag_distance(&self) -> f32 {
        self.drag_distance
    }

    /// Whether the auto-advance timer is currently armed.
    pub fn is_auto_advancing(&self) -> bool {
        self.deadlines.auto_advance.is_some()
    }

    /// The earliest pending deadline, if any. Adapters can schedule a single wake-up for it and
    /// call [`Carousel::tick`] then.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.deadlines.earliest().map(|(at, _)| at)
    }

    /// Canonical index of the slide under the logical index.
    pub fn current_slide(&self) -> Option<usize> {
        self.buffer.canonical_index(self.logical_index)
    }

    /// Total track length (all buffer cards laid out side by side).
    pub fn track_length(&self) -> f32 {
        self.buffer.len() as f32 * self.card_width
    }

    pub fn position_state(&self) -> PositionState {
        PositionState {
            logical_index: self.logical_index,
            pixel_offset: self.pixel_offset,
            card_width: self.card_width,
        }
    }

    pub fn interaction_state(&self) -> InteractionState {
        InteractionState {
            is_dragging: self.is_dragging(),
            is_hovered: self.is_hovered,
            drag_distance: self.drag_distance,
        }
    }

    pub fn frame_state(&self) -> FrameState {
        FrameState {
            phase: self.phase(),
            position: self.position_state(),
            interaction: self.interaction_state(),
            motion: self.motion(),
            current_slide: self.current_slide(),
        }
    }

    pub fn for_each_card<'a>(&'a self, mut f: impl FnMut(CardView<'a>)) {
        let width = self.card_width;
        for (buffer_index, slide) in self.buffer.slides().iter().enumerate() {
            f(CardView {
                buffer_index,
                slide,
                start: buffer_index as f32 * width,
                width,
            });
        }
    }

    fn offset_for(&self, index: usize) -> f32 {
        -(index as f32) * self.card_width
    }

    fn apply_motion(&mut self, offset: f32, transition: Option<Transition>) {
        if self.pixel_offset == offset && self.transition == transition {
            return;
        }
        self.pixel_offset = offset;
        self.transition = transition;
        self.revision = self.revision.wrapping_add(1);
        self.notify();
    }

    fn animated(&self, duration_ms: u64) -> Option<Transition> {
        Some(Transition {
            duration_ms,
            easing: self.options.easing,
        })
    }

    /// Restores `pixel_offset == -logical_index * card_width` when no drag is active.
    ///
    /// Idempotent; returns the reconciled offset.
    pub fn reconcile(&mut self) -> f32 {
        if self.drag.is_none() {
            let target = self.offset_for(self.logical_index);
            if self.pixel_offset != target {
                ctrace!(from = self.pixel_offset, to = target, "reconcile");
                self.apply_motion(target, self.transition);
            }
        }
        self.pixel_offset
    }

    /// Indexes that need a silent reset once their settle completes: the first head slot and
    /// anything from the first tail slot on.
    fn is_boundary(&self, index: usize) -> bool {
        let n = self.buffer.canonical_len();
        index == 0 || index >= n + self.buffer.padding()
    }

    /// The index showing the same content inside the real range `[K, K + N)`, for boundary
    /// indexes. Other indexes are returned unchanged.
    fn normalized(&self, index: usize) -> usize {
        let n = self.buffer.canonical_len();
        let k = self.buffer.padding();
        if n == 0 {
            return index;
        }
        if index >= n + k {
            k + (index - k) % n
        } else if index == 0 {
            k + (n - k % n) % n
        } else {
            index
        }
    }

    fn commit(&mut self, index: usize, now_ms: u64) {
        let duration_ms = self.options.timing.settle_duration_ms;
        self.logical_index = index;
        self.deadlines.settle_done = Some(now_ms.saturating_add(duration_ms));
        self.apply_motion(self.offset_for(index), self.animated(duration_ms));

        // A pending reset always waits for the newest settle.
        if self.is_boundary(index) || self.deadlines.reset.is_some() {
            let at = now_ms.saturating_add(self.options.timing.reset_delay_ms());
            ctrace!(index, at, "reset scheduled");
            self.deadlines.reset = Some(at);
        }
        cdebug!(index, now_ms, "commit");
    }

    /// Jumps to the equivalent real position without animation.
    ///
    /// Runs against the index current at fire time. During a drag the anchor moves with the jump,
    /// so the pointer keeps the same content under it.
    fn jump_to_normalized(&mut self) {
        let from = self.logical_index;
        let to = self.normalized(from);
        if to == from {
            ctrace!(index = from, "reset: already in range");
            return;
        }
        cdebug!(from, to, "reset");
        self.logical_index = to;
        let base = self.offset_for(to);
        match self.drag.as_mut() {
            Some(anchor) => {
                let delta = self.pixel_offset - anchor.base_offset;
                anchor.base_offset = base;
                self.apply_motion(base + delta, None);
            }
            None => {
                self.deadlines.settle_done = None;
                self.apply_motion(base, None);
            }
        }
    }

    fn step(&mut self, forward: bool, now_ms: u64) -> bool {
        if !self.is_live() {
            return false;
        }
        let last = self.buffer.len();
        let leaves_domain = if forward {
            self.logical_index >= last
        } else {
            self.logical_index == 0
        };
        if leaves_domain {
            self.jump_to_normalized();
        }
        let next = if forward {
            Some(self.logical_index + 1)
        } else {
            self.logical_index.checked_sub(1)
        };
        let Some(next) = next else {
            cwarn!("step: no slide before index 0");
            return false;
        };
        self.commit(next, now_ms);
        true
    }

    /// Moves one slide forward with a settle animation.
    ///
    /// Ignored while dragging.
    pub fn advance(&mut self, now_ms: u64) -> bool {
        if self.drag.is_some() {
            return false;
        }
        let mut moved = false;
        self.batch_update(|c| moved = c.step(true, now_ms));
        moved
    }

    /// Moves one slide back with a settle animation.
    ///
    /// Ignored while dragging.
    pub fn retreat(&mut self, now_ms: u64) -> bool {
        if self.drag.is_some() {
            return false;
        }
        let mut moved = false;
        self.batch_update(|c| moved = c.step(false, now_ms));
        moved
    }

    /// Commits an arbitrary buffer index with a settle animation.
    pub fn go_to(&mut self, index: usize, now_ms: u64) -> bool {
        if !self.is_live() || self.drag.is_some() {
            return false;
        }
        if index >= self.buffer.len() {
            cwarn!(index, len = self.buffer.len(), "go_to: index out of range");
            return false;
        }
        if index == self.logical_index {
            return false;
        }
        self.batch_update(|c| c.commit(index, now_ms));
        true
    }

    /// Commits the real (unpadded) position of a canonical slide.
    pub fn go_to_slide(&mut self, canonical_index: usize, now_ms: u64) -> bool {
        if canonical_index >= self.buffer.canonical_len() {
            cwarn!(
                canonical_index,
                len = self.buffer.canonical_len(),
                "go_to_slide: index out of range"
            );
            return false;
        }
        self.go_to(self.buffer.padding() + canonical_index, now_ms)
    }

    /// Fires every deferred callback due at or before `now_ms`, in timestamp order.
    ///
    /// Each callback runs at its own scheduled time, so a late `tick` replays settles and resets
    /// as if it had been called on time. Auto-advance is the exception: however many windows
    /// were missed, only the latest one fires.
    pub fn tick(&mut self, now_ms: u64) {
        if !self.mounted {
            return;
        }
        self.batch_update(|c| {
            c.collapse_missed_auto_advances(now_ms);
            while let Some((at, deadline)) = c.deadlines.next_due(now_ms) {
                c.deadlines.take(deadline);
                c.fire(deadline, at);
            }
        });
    }

    /// Keeps only the latest auto-advance window that elapsed before `now_ms`, so a long gap
    /// between ticks moves the carousel by one slide.
    fn collapse_missed_auto_advances(&mut self, now_ms: u64) {
        let Some(at) = self.deadlines.auto_advance else {
            return;
        };
        let interval = self.options.timing.auto_advance_interval_ms.max(1);
        if now_ms < at.saturating_add(interval) {
            return;
        }
        let missed = (now_ms - at) / interval;
        ctrace!(at, missed, "collapsing missed auto-advances");
        self.deadlines.auto_advance = Some(at + missed * interval);
    }

    fn fire(&mut self, deadline: Deadline, at: u64) {
        match deadline {
            Deadline::SettleDone => {
                ctrace!(at, "settle done");
                self.notify();
            }
            Deadline::Reset => self.jump_to_normalized(),
            Deadline::ClearDragDistance => {
                self.drag_distance = 0.0;
                self.notify();
            }
            Deadline::AutoAdvance => {
                let interval = self.options.timing.auto_advance_interval_ms.max(1);
                self.deadlines.auto_advance = Some(at.saturating_add(interval));
                ctrace!(at, "auto advance");
                self.step(true, at);
            }
        }
    }

    fn auto_advance_eligible(&self) -> bool {
        self.is_live() && self.options.autoplay && !self.is_hovered && self.drag.is_none()
    }

    /// Starts a fresh interval window if the timer may run and is not already armed.
    fn arm_auto_advance(&mut self, now_ms: u64) {
        if !self.auto_advance_eligible() || self.deadlines.auto_advance.is_some() {
            return;
        }
        let interval = self.options.timing.auto_advance_interval_ms.max(1);
        self.deadlines.auto_advance = Some(now_ms.saturating_add(interval));
    }

    fn disarm_auto_advance(&mut self) {
        self.deadlines.auto_advance = None;
    }

    pub fn set_autoplay(&mut self, autoplay: bool, now_ms: u64) {
        if self.options.autoplay == autoplay {
            return;
        }
        self.options.autoplay = autoplay;
        if autoplay {
            self.arm_auto_advance(now_ms);
        } else {
            self.disarm_auto_advance();
        }
        self.notify();
    }

    /// Pointer entered (`true`) or left (`false`) the viewport.
    ///
    /// Hovering stops the auto-advance timer; leaving restarts a full interval unless a drag is
    /// still active.
    pub fn set_hovered(&mut self, hovered: bool, now_ms: u64) {
        if !self.mounted || self.is_hovered == hovered {
            return;
        }
        self.is_hovered = hovered;
        if hovered {
            self.disarm_auto_advance();
        } else {
            self.arm_auto_advance(now_ms);
        }
        self.notify();
    }

    /// Applies a new viewport width.
    ///
    /// The logical index is kept and the offset is recomputed for the new card width without
    /// animation. An active drag keeps its pointer delta relative to the rebased anchor.
    pub fn set_viewport_width(&mut self, viewport_width: f32) {
        if !self.mounted {
            return;
        }
        self.viewport_width = viewport_width;
        let width = self.options.card_width.card_width(viewport_width);
        if width == self.card_width {
            return;
        }
        ctrace!(from = self.card_width, to = width, "card width changed");
        self.card_width = width;
        let base = self.offset_for(self.logical_index);
        match self.drag.as_mut() {
            Some(anchor) => {
                let delta = self.pixel_offset - anchor.base_offset;
                anchor.base_offset = base;
                self.apply_motion(base + delta, None);
            }
            None => {
                self.deadlines.settle_done = None;
                self.apply_motion(base, None);
            }
        }
    }

    /// Begins a pointer or touch drag at `pointer_x`.
    ///
    /// Preempts any settle animation and stops the auto-advance timer. A pending boundary reset
    /// stays scheduled.
    pub fn drag_start(&mut self, pointer_x: f32) -> bool {
        if !self.is_live() {
            return false;
        }
        if self.drag.is_some() {
            ctrace!("drag_start ignored: already dragging");
            return false;
        }
        let base_offset = self.offset_for(self.logical_index);
        self.batch_update(|c| {
            c.drag = Some(DragAnchor {
                start_pointer_x: pointer_x,
                base_offset,
            });
            c.drag_distance = 0.0;
            c.deadlines.settle_done = None;
            c.deadlines.clear_drag_distance = None;
            c.disarm_auto_advance();
            c.apply_motion(base_offset, None);
            c.notify();
        });
        true
    }

    /// Follows the pointer. Ignored unless a drag is active.
    pub fn drag_move(&mut self, pointer_x: f32) -> bool {
        let Some(anchor) = self.drag else {
            return false;
        };
        let delta = pointer_x - anchor.start_pointer_x;
        self.drag_distance = abs(delta);
        self.apply_motion(anchor.base_offset + delta, None);
        true
    }

    /// Ends the drag (pointer up, touch end, or the pointer leaving the drag surface).
    ///
    /// A release beyond the commit threshold moves one slide in the drag direction; anything
    /// shorter snaps back. Returns `None` if no drag was active.
    pub fn drag_end(&mut self, now_ms: u64) -> Option<DragRelease> {
        let anchor = self.drag?;
        // Read the live cell written by the last move, never a stale copy.
        let moved_by = self.pixel_offset - anchor.base_offset;
        let release = if abs(moved_by) > self.options.drag.commit_threshold {
            if moved_by < 0.0 {
                DragRelease::Advanced
            } else {
                DragRelease::Retreated
            }
        } else {
            DragRelease::SnappedBack
        };
        cdebug!(moved_by, ?release, "drag_end");

        self.batch_update(|c| {
            c.drag = None;
            match release {
                DragRelease::Advanced => {
                    c.step(true, now_ms);
                }
                DragRelease::Retreated => {
                    c.step(false, now_ms);
                }
                DragRelease::SnappedBack => {
                    let duration_ms = c.options.timing.snap_back_duration_ms;
                    let settled_at = now_ms.saturating_add(duration_ms);
                    c.deadlines.settle_done = Some(settled_at);
                    // A pending reset must not cut the snap-back short.
                    if let Some(reset_at) = c.deadlines.reset {
                        c.deadlines.reset = Some(reset_at.max(settled_at));
                    }
                    c.apply_motion(c.offset_for(c.logical_index), c.animated(duration_ms));
                }
            }
            c.deadlines.clear_drag_distance = Some(
                now_ms.saturating_add(c.options.timing.drag_distance_reset_delay_ms),
            );
            c.arm_auto_advance(now_ms);
            c.notify();
        });
        Some(release)
    }

    /// Resolves a click on the card at `buffer_index`.
    ///
    /// Returns the slide to open when the click is a genuine tap, or `None` when it was part of a
    /// drag gesture (or the index is out of range).
    pub fn activate(&self, buffer_index: usize) -> Option<&Slide> {
        if !self.mounted {
            return None;
        }
        if self.drag_distance > self.options.drag.click_slop {
            ctrace!(
                buffer_index,
                drag_distance = self.drag_distance,
                "click suppressed after drag"
            );
            return None;
        }
        self.buffer.get(buffer_index)
    }
}
