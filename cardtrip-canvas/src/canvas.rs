//! Raster drawing surface for card outlines.

use crate::convert::to_skia_path;
use crate::error::{CanvasError, CanvasResult};
use crate::paint::{skia_color, CardPaint};
use cardtrip_rs::{CardColor, CardPath, CardSpec};
use tiny_skia::{FillRule, Pixmap, Transform};

/// Maximum canvas dimension (same as Chrome).
const MAX_DIMENSION: u32 = 32767;

/// A pixel buffer that card outlines are drawn onto.
pub struct CardCanvas {
    width: u32,
    height: u32,
    pixmap: Pixmap,
}

impl CardCanvas {
    /// Create a transparent canvas with the specified dimensions.
    pub fn new(width: u32, height: u32) -> CanvasResult<Self> {
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(CanvasError::InvalidDimensions { width, height });
        }
        let pixmap =
            Pixmap::new(width, height).ok_or(CanvasError::InvalidDimensions { width, height })?;
        Ok(Self {
            width,
            height,
            pixmap,
        })
    }

    /// Render `spec` onto a canvas of the card's size.
    pub fn render(spec: &CardSpec) -> CanvasResult<Self> {
        let mut canvas = Self::new(spec.width().ceil() as u32, spec.height().ceil() as u32)?;
        canvas.draw_card(&spec.build_path(), &CardPaint::for_spec(spec))?;
        Ok(canvas)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fill the whole canvas with `color`.
    pub fn clear(&mut self, color: CardColor) {
        self.pixmap.fill(skia_color(color));
    }

    /// Draw a card: the fill pass with its shadow, then the border stroke.
    ///
    /// The stroke lands on top of both the shadow and the fill.
    pub fn draw_card(&mut self, path: &CardPath, paint: &CardPaint) -> CanvasResult<()> {
        let path = to_skia_path(path).ok_or(CanvasError::EmptyPath)?;
        self.fill_pass(&path, paint);
        self.stroke_pass(&path, paint);
        Ok(())
    }

    fn fill_pass(&mut self, path: &tiny_skia::Path, paint: &CardPaint) {
        log::debug!(target: "canvas", "fill {:?} shadow={:?}", paint.fill, paint.shadow);

        if let Some(shadow) = paint.shadow {
            let shadow_paint = solid_paint(shadow.color, paint.anti_alias);
            self.pixmap.fill_path(
                path,
                &shadow_paint,
                FillRule::Winding,
                Transform::from_translate(shadow.offset_x, shadow.offset_y),
                None,
            );
        }

        let fill_paint = solid_paint(paint.fill, paint.anti_alias);
        self.pixmap.fill_path(
            path,
            &fill_paint,
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    fn stroke_pass(&mut self, path: &tiny_skia::Path, paint: &CardPaint) {
        log::debug!(target: "canvas", "stroke {:?} width={}", paint.border, paint.stroke_width);

        let stroke = tiny_skia::Stroke {
            width: paint.stroke_width,
            ..Default::default()
        };
        let stroke_paint = solid_paint(paint.border, paint.anti_alias);
        self.pixmap
            .stroke_path(path, &stroke_paint, &stroke, Transform::identity(), None);
    }

    /// Straight-alpha color of the pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<CardColor> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(CardColor::from_rgba8(c.red(), c.green(), c.blue(), c.alpha()))
    }

    /// Non-premultiplied RGBA bytes, row-major.
    pub fn get_image_data(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.pixmap.data().len());
        for pixel in self.pixmap.pixels() {
            let c = pixel.demultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        data
    }

    /// Export the canvas as PNG data.
    ///
    /// # Arguments
    /// * `ppi` - Optional pixels per inch for PNG metadata. Defaults to 72 if not specified.
    pub fn to_png(&self, ppi: Option<f32>) -> CanvasResult<Vec<u8>> {
        let ppi = ppi.unwrap_or(72.0);

        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            // Set pixel density metadata (pixels per meter)
            let ppm = (ppi.max(0.0) / 0.0254).round() as u32;
            encoder.set_pixel_dims(Some(png::PixelDimensions {
                xppu: ppm,
                yppu: ppm,
                unit: png::Unit::Meter,
            }));

            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.get_image_data())?;
        }
        Ok(buf)
    }
}

fn solid_paint(color: CardColor, anti_alias: bool) -> tiny_skia::Paint<'static> {
    let mut paint = tiny_skia::Paint {
        anti_alias,
        ..Default::default()
    };
    paint.set_color(skia_color(color));
    paint
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas_is_transparent() {
        let canvas = CardCanvas::new(10, 10).unwrap();
        assert_eq!(canvas.pixel(5, 5), Some(CardColor::from_rgba8(0, 0, 0, 0)));
        assert_eq!(canvas.get_image_data().len(), 10 * 10 * 4);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(
            CardCanvas::new(0, 10),
            Err(CanvasError::InvalidDimensions { .. })
        ));
        assert!(CardCanvas::new(10, MAX_DIMENSION + 1).is_err());
    }

    #[test]
    fn test_empty_path_is_an_error() {
        let mut canvas = CardCanvas::new(10, 10).unwrap();
        let spec = CardSpec::new(cardtrip_rs::CardKind::Special, 10.0, 10.0).unwrap();
        let err = canvas
            .draw_card(&CardPath::default(), &CardPaint::for_spec(&spec))
            .unwrap_err();
        assert!(matches!(err, CanvasError::EmptyPath));
    }

    #[test]
    fn test_clear() {
        let mut canvas = CardCanvas::new(4, 4).unwrap();
        canvas.clear(CardColor::WHITE);
        assert_eq!(canvas.pixel(0, 0), Some(CardColor::WHITE));
    }

    #[test]
    fn test_pixel_out_of_range() {
        let canvas = CardCanvas::new(4, 4).unwrap();
        assert!(canvas.pixel(4, 0).is_none());
    }
}
