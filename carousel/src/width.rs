/// Responsive card width policy.
///
/// Wide viewports get a fixed card width. Narrow viewports divide the width so that exactly
/// `narrow_cards_per_view` cards are visible, which leaves a partial next card peeking in.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardWidthPolicy {
    /// Viewport widths at or above this use `wide_card_width`.
    pub breakpoint: f32,
    pub wide_card_width: f32,
    pub narrow_cards_per_view: f32,
}

impl Default for CardWidthPolicy {
    fn default() -> Self {
        Self {
            breakpoint: 750.0,
            wide_card_width: 300.0,
            narrow_cards_per_view: 2.5,
        }
    }
}

impl CardWidthPolicy {
    pub fn card_width(&self, viewport_width: f32) -> f32 {
        let viewport_width = if viewport_width.is_finite() {
            viewport_width.max(0.0)
        } else {
            0.0
        };
        if viewport_width >= self.breakpoint {
            return self.wide_card_width;
        }
        if self.narrow_cards_per_view <= 0.0 {
            cwarn!(
                narrow_cards_per_view = self.narrow_cards_per_view,
                "CardWidthPolicy: non-positive cards per view, using wide width"
            );
            return self.wide_card_width;
        }
        viewport_width / self.narrow_cards_per_view
    }
}

/// Card width for `viewport_width` under the default policy (300px at 750px and wider, otherwise
/// 2.5 cards per viewport).
pub fn card_width(viewport_width: f32) -> f32 {
    CardWidthPolicy::default().card_width(viewport_width)
}
