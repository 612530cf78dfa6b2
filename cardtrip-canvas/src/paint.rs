//! Paint settings for the two card drawing passes.

use cardtrip_rs::{CardColor, CardSpec};

/// Vertical offset of the card shadow.
pub const CARD_SHADOW_OFFSET_Y: f32 = 5.0;

/// A drop shadow cast by the fill pass.
///
/// Cards use a blur radius of 0.01, which is below one device pixel, so the
/// shadow is drawn hard-edged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowLayer {
    pub offset_x: f32,
    pub offset_y: f32,
    pub color: CardColor,
}

/// How a card outline is filled and stroked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPaint {
    /// Color of the fill pass.
    pub fill: CardColor,
    /// Color of the stroke pass.
    pub border: CardColor,
    /// Width of the stroke pass.
    pub stroke_width: f32,
    /// Shadow drawn under the fill pass only.
    pub shadow: Option<ShadowLayer>,
    pub anti_alias: bool,
}

impl CardPaint {
    /// White card, bordered and shadowed in the spec's border color.
    pub fn for_spec(spec: &CardSpec) -> Self {
        Self {
            fill: CardColor::WHITE,
            border: spec.border_color(),
            stroke_width: spec.kind().stroke_width(),
            shadow: Some(ShadowLayer {
                offset_x: 0.0,
                offset_y: CARD_SHADOW_OFFSET_Y,
                color: spec.border_color(),
            }),
            anti_alias: true,
        }
    }

    pub fn without_shadow(mut self) -> Self {
        self.shadow = None;
        self
    }
}

pub(crate) fn skia_color(c: CardColor) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(c.r, c.g, c.b, c.a)
}
