//! Plain geometry values shared by the outline builders.
//!
//! All coordinates are in host pixels with the y axis pointing down.

use crate::error::{CardError, CardResult};

/// A point in card space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// An axis-aligned rectangle given by its edges.
///
/// Edges are not normalized: a rectangle whose insets exceed its size has
/// `min_x > max_x` and the outline built from it crosses itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Rect {
    pub const fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Bounds of a `width` x `height` view after removing the stroke insets.
    pub fn inset_from_size(width: f32, height: f32, insets: Insets) -> Self {
        Self {
            min_x: insets.start,
            min_y: insets.top,
            max_x: width - insets.end,
            max_y: height - insets.bottom,
        }
    }

    /// Rectangle centred on `center` with the given half extents.
    pub fn centered(center: Point, half_width: f32, half_height: f32) -> Self {
        Self {
            min_x: center.x - half_width,
            min_y: center.y - half_height,
            max_x: center.x + half_width,
            max_y: center.y + half_height,
        }
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.max_x, self.min_y)
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.max_x, self.max_y)
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.min_x, self.max_y)
    }

    /// Grow the rectangle so that it contains `p`.
    pub(crate) fn include(&mut self, p: Point) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    /// Degenerate rectangle holding a single point.
    pub(crate) fn from_point(p: Point) -> Self {
        Self::new(p.x, p.y, p.x, p.y)
    }
}

/// Per-edge stroke insets applied to the raw view size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Insets {
    pub start: f32,
    pub top: f32,
    pub end: f32,
    pub bottom: f32,
}

impl Insets {
    /// Insets used by the four-corner special card.
    pub const SPECIAL_CARD: Insets = Insets::new(1.0, 1.0, 1.0, 5.0);

    /// Insets shared by the trip card header and content halves.
    pub const TRIP_CARD: Insets = Insets::new(0.0, 0.0, 0.0, 5.0);

    pub const fn new(start: f32, top: f32, end: f32, bottom: f32) -> Self {
        Self {
            start,
            top,
            end,
            bottom,
        }
    }
}

/// A backend-neutral RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl CardColor {
    pub const BLACK: CardColor = CardColor::from_rgba8(0, 0, 0, 255);
    pub const WHITE: CardColor = CardColor::from_rgba8(255, 255, 255, 255);

    /// Default border of the trip card halves (`#E0E5E5`).
    pub const TRIP_BORDER: CardColor = CardColor::from_rgba8(0xE0, 0xE5, 0xE5, 255);

    /// Create a color from 8-bit RGBA components.
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from floating-point RGBA components (each in 0.0..=1.0).
    pub fn from_rgba_f32(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: (r.clamp(0.0, 1.0) * 255.0).round() as u8,
            g: (g.clamp(0.0, 1.0) * 255.0).round() as u8,
            b: (b.clamp(0.0, 1.0) * 255.0).round() as u8,
            a: (a.clamp(0.0, 1.0) * 255.0).round() as u8,
        }
    }

    /// Parse a CSS color string (`#E0E5E5`, `gray`, `rgb(...)`).
    pub fn parse(s: &str) -> CardResult<Self> {
        let parsed = csscolorparser::parse(s)
            .map_err(|e| CardError::ColorParseError(format!("{}: {}", s, e)))?;

        let [r, g, b, a] = parsed.to_array();
        Ok(Self::from_rgba_f32(r, g, b, a))
    }

    /// `#rrggbb` form, used for SVG attributes.
    pub fn to_hex_rgb(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Alpha as a 0.0..=1.0 opacity.
    pub fn opacity(&self) -> f32 {
        self.a as f32 / 255.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inset_from_size() {
        let rect = Rect::inset_from_size(200.0, 120.0, Insets::SPECIAL_CARD);
        assert_eq!(rect, Rect::new(1.0, 1.0, 199.0, 115.0));

        let rect = Rect::inset_from_size(300.0, 100.0, Insets::TRIP_CARD);
        assert_eq!(rect, Rect::new(0.0, 0.0, 300.0, 95.0));
    }

    #[test]
    fn test_centered() {
        let rect = Rect::centered(Point::new(10.0, 20.0), 5.0, 5.0);
        assert_eq!(rect, Rect::new(5.0, 15.0, 15.0, 25.0));
        assert_eq!(rect.center(), Point::new(10.0, 20.0));
        assert_eq!(rect.width(), 10.0);
        assert_eq!(rect.height(), 10.0);
    }

    #[test]
    fn test_parse_hex_color() {
        let color = CardColor::parse("#E0E5E5").unwrap();
        assert_eq!(color, CardColor::TRIP_BORDER);
        assert_eq!(color.to_hex_rgb(), "#e0e5e5");
    }

    #[test]
    fn test_parse_named_color() {
        assert_eq!(CardColor::parse("black").unwrap(), CardColor::BLACK);
        let gray = CardColor::parse("rgba(128, 128, 128, 0.5)").unwrap();
        assert_eq!((gray.r, gray.g, gray.b), (128, 128, 128));
        assert_eq!(gray.a, 128);
    }

    #[test]
    fn test_parse_invalid_color() {
        let err = CardColor::parse("not-a-color").unwrap_err();
        assert!(matches!(err, CardError::ColorParseError(_)));
    }
}
