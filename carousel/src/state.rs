use crate::{Motion, Phase};

/// A lightweight, serializable snapshot of the carousel position.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionState {
    pub logical_index: usize,
    pub pixel_offset: f32,
    pub card_width: f32,
}

/// Interaction flags gating the auto-advance timer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InteractionState {
    pub is_dragging: bool,
    pub is_hovered: bool,
    pub drag_distance: f32,
}

/// A combined snapshot of everything a renderer or debugger typically wants per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameState {
    pub phase: Phase,
    pub position: PositionState,
    pub interaction: InteractionState,
    pub motion: Motion,
    /// Canonical slide under the current logical index.
    pub current_slide: Option<usize>,
}
