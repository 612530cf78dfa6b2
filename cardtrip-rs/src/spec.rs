//! Fully resolved card descriptions.

use crate::corner::{Corner, CornerStyle, CornerValues};
use crate::error::{CardError, CardResult};
use crate::geometry::{CardColor, Insets, Rect};
use crate::path::CardPath;
use crate::{special, trip};
use std::fmt;
use std::str::FromStr;

/// Radius and notch size used by both trip card halves.
pub const TRIP_CORNER_VALUE: f32 = 40.0;

/// Which of the three card outlines to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardKind {
    /// Four independently styled corners.
    #[default]
    Special,
    /// Rounded top, ticket tab along the bottom edge.
    TripHeader,
    /// Ticket tab along the top edge, rounded bottom.
    TripContent,
}

impl CardKind {
    pub const fn insets(self) -> Insets {
        match self {
            CardKind::Special => Insets::SPECIAL_CARD,
            CardKind::TripHeader | CardKind::TripContent => Insets::TRIP_CARD,
        }
    }

    pub const fn default_border_color(self) -> CardColor {
        match self {
            CardKind::Special => CardColor::BLACK,
            CardKind::TripHeader | CardKind::TripContent => CardColor::TRIP_BORDER,
        }
    }

    /// Width of the border stroke drawn over the filled outline.
    pub const fn stroke_width(self) -> f32 {
        match self {
            CardKind::Special => 5.0,
            CardKind::TripHeader | CardKind::TripContent => 1.0,
        }
    }

    /// Corner styles a trip half always uses; `None` for the special card.
    pub const fn fixed_styles(self) -> Option<CornerValues<CornerStyle>> {
        match self {
            CardKind::Special => None,
            CardKind::TripHeader => Some(CornerValues {
                top_left: CornerStyle::Rounded,
                top_right: CornerStyle::Rounded,
                bottom_right: CornerStyle::Curve,
                bottom_left: CornerStyle::Curve,
            }),
            CardKind::TripContent => Some(CornerValues {
                top_left: CornerStyle::Curve,
                top_right: CornerStyle::Curve,
                bottom_right: CornerStyle::Rounded,
                bottom_left: CornerStyle::Rounded,
            }),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            CardKind::Special => "special",
            CardKind::TripHeader => "trip-header",
            CardKind::TripContent => "trip-content",
        }
    }
}

impl FromStr for CardKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "special" => Ok(CardKind::Special),
            "trip-header" => Ok(CardKind::TripHeader),
            "trip-content" => Ok(CardKind::TripContent),
            _ => Err(format!(
                "Unknown card kind: {s} (expected special, trip-header or trip-content)"
            )),
        }
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything an outline builder needs, with no fallbacks left to apply.
///
/// `bounds` always matches the kind's insets, and every radius has passed
/// validation.
#[derive(Debug, Clone, PartialEq)]
pub struct CardSpec {
    kind: CardKind,
    width: f32,
    height: f32,
    insets: Insets,
    bounds: Rect,
    radii: CornerValues<f32>,
    styles: CornerValues<CornerStyle>,
    border_color: CardColor,
}

impl CardSpec {
    /// A card of `kind` with that kind's defaults.
    ///
    /// The special card starts with square rounded corners; trip halves carry
    /// their fixed radius and styles.
    pub fn new(kind: CardKind, width: f32, height: f32) -> CardResult<Self> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(CardError::InvalidDimensions { width, height });
        }

        let insets = kind.insets();
        let (radii, styles) = match kind.fixed_styles() {
            Some(styles) => (CornerValues::uniform(TRIP_CORNER_VALUE), styles),
            None => (CornerValues::uniform(0.0), CornerValues::uniform(CornerStyle::Rounded)),
        };

        Ok(Self {
            kind,
            width,
            height,
            insets,
            bounds: Rect::inset_from_size(width, height, insets),
            radii,
            styles,
            border_color: kind.default_border_color(),
        })
    }

    pub fn kind(&self) -> CardKind {
        self.kind
    }

    /// View width the bounds were computed from.
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn insets(&self) -> Insets {
        self.insets
    }

    /// Outline rectangle: the view size minus the kind's insets.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn radii(&self) -> CornerValues<f32> {
        self.radii
    }

    pub fn styles(&self) -> CornerValues<CornerStyle> {
        self.styles
    }

    pub fn border_color(&self) -> CardColor {
        self.border_color
    }

    /// Replace the corner radii. Ignored by trip halves when building.
    pub fn with_radii(mut self, radii: CornerValues<f32>) -> CardResult<Self> {
        for (corner, value) in radii.iter() {
            validate_radius(corner, value)?;
        }
        self.radii = radii;
        Ok(self)
    }

    /// Replace the corner styles. Ignored by trip halves when building.
    pub fn with_styles(mut self, styles: CornerValues<CornerStyle>) -> Self {
        self.styles = styles;
        self
    }

    pub fn with_border_color(mut self, color: CardColor) -> Self {
        self.border_color = color;
        self
    }

    /// Bottom stroke inset; the tab height is derived from it.
    pub fn bottom_inset(&self) -> f32 {
        self.insets.bottom
    }

    /// Build the outline for this card.
    pub fn build_path(&self) -> CardPath {
        match self.kind {
            CardKind::Special => special::build_special_card_path(self),
            CardKind::TripHeader => trip::build_trip_header_path(&self.bounds, self.bottom_inset()),
            CardKind::TripContent => {
                trip::build_trip_content_path(&self.bounds, self.bottom_inset())
            }
        }
    }
}

pub(crate) fn validate_radius(corner: Corner, value: f32) -> CardResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CardError::InvalidRadius { corner, value })
    }
}
