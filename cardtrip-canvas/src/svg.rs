//! SVG document export.
//!
//! Produces the same three layers as [`crate::CardCanvas::draw_card`]: the
//! shadow, the fill, then the border stroke.

use crate::paint::CardPaint;
use cardtrip_rs::CardPath;

/// Render `path` as a standalone SVG document of `width` x `height`.
pub fn card_document(path: &CardPath, paint: &CardPaint, width: f32, height: f32) -> String {
    let d = path.to_svg_path_data();

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    svg.push('\n');

    if let Some(shadow) = paint.shadow {
        let shadow_d = path
            .translated(shadow.offset_x, shadow.offset_y)
            .to_svg_path_data();
        svg.push_str(&format!(
            r#"  <path class="shadow" d="{}" fill="{}" fill-opacity="{}"/>"#,
            shadow_d,
            shadow.color.to_hex_rgb(),
            shadow.color.opacity()
        ));
        svg.push('\n');
    }

    svg.push_str(&format!(
        r#"  <path class="fill" d="{}" fill="{}" fill-opacity="{}"/>"#,
        d,
        paint.fill.to_hex_rgb(),
        paint.fill.opacity()
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r#"  <path class="border" d="{}" fill="none" stroke="{}" stroke-opacity="{}" stroke-width="{}"/>"#,
        d,
        paint.border.to_hex_rgb(),
        paint.border.opacity(),
        paint.stroke_width
    ));
    svg.push_str("\n</svg>\n");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardtrip_rs::{CardKind, CardSpec};

    #[test]
    fn test_layers_in_draw_order() {
        let spec = CardSpec::new(CardKind::TripContent, 300.0, 100.0).unwrap();
        let svg = card_document(&spec.build_path(), &CardPaint::for_spec(&spec), 300.0, 100.0);

        let shadow = svg.find(r#"class="shadow""#).unwrap();
        let fill = svg.find(r#"class="fill""#).unwrap();
        let border = svg.find(r#"class="border""#).unwrap();
        assert!(shadow < fill && fill < border);
        assert!(svg.contains(r##"stroke="#e0e5e5""##));
        assert!(svg.contains(r#"stroke-width="1""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_no_shadow_layer() {
        let spec = CardSpec::new(CardKind::Special, 100.0, 80.0).unwrap();
        let paint = CardPaint::for_spec(&spec).without_shadow();
        let svg = card_document(&spec.build_path(), &paint, 100.0, 80.0);
        assert!(!svg.contains("shadow"));
        assert!(svg.contains(r##"fill="#ffffff""##));
    }

    #[test]
    fn test_one_element_per_line() {
        let spec = CardSpec::new(CardKind::Special, 100.0, 80.0).unwrap();
        let svg = card_document(&spec.build_path(), &CardPaint::for_spec(&spec), 100.0, 80.0);
        let lines: Vec<&str> = svg.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("<svg") && lines[0].ends_with('>'));
        assert!(lines[1..4].iter().all(|l| l.starts_with("  <path") && l.ends_with("/>")));
        assert_eq!(lines[4], "</svg>");
        assert!(svg.ends_with('\n'));
    }
}
