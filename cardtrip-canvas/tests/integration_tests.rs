//! Integration tests for cardtrip-canvas.

use cardtrip_canvas::{svg, CardCanvas, CardPaint};
use cardtrip_rs::{CardAttributes, CardColor, CardKind, CardSpec, CornerStyle, CornerValues};
use rstest::rstest;

const RED: CardColor = CardColor::from_rgba8(255, 0, 0, 255);

fn red_rounded_card() -> CardSpec {
    CardSpec::new(CardKind::Special, 200.0, 120.0)
        .unwrap()
        .with_radii(CornerValues::uniform(20.0))
        .unwrap()
        .with_border_color(RED)
}

/// Interior is white, the border and the shadow carry the border color.
#[test]
fn test_two_pass_card() {
    let canvas = CardCanvas::render(&red_rounded_card()).unwrap();

    assert_eq!(canvas.pixel(100, 60), Some(CardColor::WHITE));
    // Left border at x=1 with a 5px stroke.
    assert_eq!(canvas.pixel(1, 60), Some(RED));
    // Below the bottom edge (y=115) only the shadow reaches.
    assert_eq!(canvas.pixel(100, 118), Some(RED));
}

#[test]
fn test_no_shadow_leaves_gap_below_card() {
    let spec = red_rounded_card();
    let mut canvas = CardCanvas::new(200, 120).unwrap();
    canvas
        .draw_card(&spec.build_path(), &CardPaint::for_spec(&spec).without_shadow())
        .unwrap();

    assert_eq!(canvas.pixel(100, 118).map(|c| c.a), Some(0));
    assert_eq!(canvas.pixel(100, 60), Some(CardColor::WHITE));
}

/// Rounded corners leave the rectangle corner itself uncovered.
#[test]
fn test_rounded_corner_is_open() {
    let spec = red_rounded_card().with_radii(CornerValues::uniform(40.0)).unwrap();
    let paint = CardPaint::for_spec(&spec).without_shadow();
    let mut canvas = CardCanvas::new(200, 120).unwrap();
    canvas.draw_card(&spec.build_path(), &paint).unwrap();

    assert_eq!(canvas.pixel(5, 5).map(|c| c.a), Some(0));
}

/// The half circle notch is cut out of the card.
#[test]
fn test_trip_header_notch_is_transparent() {
    let spec = CardSpec::new(CardKind::TripHeader, 300.0, 100.0).unwrap();
    let canvas = CardCanvas::render(&spec).unwrap();

    assert_eq!(canvas.pixel(150, 50), Some(CardColor::WHITE));
    assert_eq!(canvas.pixel(5, 95).map(|c| c.a), Some(0));
}

#[rstest]
#[case(CornerStyle::Rounded)]
#[case(CornerStyle::Curve)]
#[case(CornerStyle::Cut)]
fn test_every_style_renders(#[case] style: CornerStyle) {
    let spec = red_rounded_card().with_styles(CornerValues::uniform(style));
    let canvas = CardCanvas::render(&spec).unwrap();
    assert_eq!(canvas.pixel(100, 60), Some(CardColor::WHITE));
}

#[test]
fn test_png_round_trip() {
    let attrs = CardAttributes::from_json(r#"{"cornerValue": 16, "borderColor": "gray"}"#).unwrap();
    let spec = attrs.resolve(CardKind::Special, 160.0, 90.0).unwrap();
    let png_data = CardCanvas::render(&spec).unwrap().to_png(Some(144.0)).unwrap();

    assert_eq!(&png_data[..8], b"\x89PNG\r\n\x1a\n");
    let img = image::load_from_memory(&png_data).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (160, 90));
    assert_eq!(img.get_pixel(80, 45).0, [255, 255, 255, 255]);
}

#[test]
fn test_svg_document_for_special_card() {
    let spec = red_rounded_card();
    let doc = svg::card_document(&spec.build_path(), &CardPaint::for_spec(&spec), 200.0, 120.0);
    assert!(doc.starts_with("<svg"));
    assert!(doc.contains(r##"stroke="#ff0000""##));
    assert!(doc.contains(r#"stroke-width="5""#));
    assert_eq!(doc.matches("<path").count(), 3);
}
