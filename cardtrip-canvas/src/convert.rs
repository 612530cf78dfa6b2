//! Conversion of card outlines into tiny-skia paths.
//!
//! tiny-skia does not support arc primitives directly, so arcs are
//! approximated with cubic bezier curves from `kurbo`.

use cardtrip_rs::{ArcSegment, CardPath, PathCommand};
use kurbo::PathEl;
use tiny_skia::PathBuilder;

/// Maximum distance between an arc and its cubic approximation.
const ARC_TOLERANCE: f64 = 0.01;

/// Convert an outline into a tiny-skia path.
/// Returns None if the outline has no drawable geometry.
pub fn to_skia_path(path: &CardPath) -> Option<tiny_skia::Path> {
    let mut builder = PathBuilder::new();
    for command in path.commands() {
        match *command {
            PathCommand::MoveTo(p) => builder.move_to(p.x, p.y),
            PathCommand::LineTo(p) => builder.line_to(p.x, p.y),
            PathCommand::QuadTo { ctrl, to } => builder.quad_to(ctrl.x, ctrl.y, to.x, to.y),
            PathCommand::ArcTo(arc) => append_arc(&mut builder, &arc),
            PathCommand::Close => builder.close(),
        }
    }
    builder.finish()
}

/// Line to the arc start, then the arc itself.
fn append_arc(builder: &mut PathBuilder, arc: &ArcSegment) {
    let start = arc.start_point();
    builder.line_to(start.x, start.y);

    // A collapsed oval only contributes the joining line.
    if arc.radius_x() <= 0.0 || arc.radius_y() <= 0.0 {
        return;
    }

    let center = arc.center();
    let approx = kurbo::Arc {
        center: kurbo::Point::new(center.x as f64, center.y as f64),
        radii: kurbo::Vec2::new(arc.radius_x() as f64, arc.radius_y() as f64),
        start_angle: (arc.start_angle as f64).to_radians(),
        sweep_angle: (arc.sweep_angle as f64).to_radians(),
        x_rotation: 0.0,
    };

    for el in approx.append_iter(ARC_TOLERANCE) {
        match el {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => builder.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(p1, p2) => {
                builder.quad_to(p1.x as f32, p1.y as f32, p2.x as f32, p2.y as f32)
            }
            PathEl::CurveTo(p1, p2, p3) => builder.cubic_to(
                p1.x as f32,
                p1.y as f32,
                p2.x as f32,
                p2.y as f32,
                p3.x as f32,
                p3.y as f32,
            ),
            PathEl::ClosePath => {}
        }
    }
}
