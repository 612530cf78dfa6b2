//! Outlines of the two trip card halves.
//!
//! The header sits above the content. The header's bottom tab and the
//! content's top tab use the same notch radius and tab inset, so both halves
//! line up when stacked.

use crate::geometry::Rect;
use crate::path::{CardPath, PathRecorder};
use crate::spec::TRIP_CORNER_VALUE;
use crate::tab::{self, LEFT_NOTCH_START, RIGHT_NOTCH_START, TAB_RISE_FACTOR};

/// Radius of the fillets on the rounded edge.
const CORNER_VALUE: f32 = TRIP_CORNER_VALUE;

/// Radius of the notches on the ticket edge.
const ARC_RADIUS: f32 = TRIP_CORNER_VALUE;

/// Header half: rounded top corners, notches and a tab on the bottom edge.
pub fn build_trip_header_path(b: &Rect, bottom_inset: f32) -> CardPath {
    log::debug!(target: "outline", "trip header {:?}", b);

    let mut rec = PathRecorder::new();
    rec.move_to(b.min_x + CORNER_VALUE, b.max_y + TAB_RISE_FACTOR * bottom_inset);

    tab::notch(&mut rec, b.bottom_left(), ARC_RADIUS, LEFT_NOTCH_START);
    rec.line_to(b.min_x, b.max_y - ARC_RADIUS / 2.0);
    rec.line_to(b.min_x, b.min_y + CORNER_VALUE);
    rec.quad_to(b.min_x, b.min_y, b.min_x + CORNER_VALUE, b.min_y);
    rec.line_to(b.max_x - ARC_RADIUS, b.min_y);
    rec.quad_to(b.max_x, b.min_y, b.max_x, b.min_y + ARC_RADIUS);
    rec.line_to(b.max_x, b.max_y - ARC_RADIUS / 2.0);
    tab::notch(&mut rec, b.bottom_right(), ARC_RADIUS, RIGHT_NOTCH_START);
    tab::bottom_tab(&mut rec, b, ARC_RADIUS, ARC_RADIUS, bottom_inset);

    rec.close();
    rec.finish()
}

/// Content half: notches and a tab on the top edge, rounded bottom corners.
pub fn build_trip_content_path(b: &Rect, bottom_inset: f32) -> CardPath {
    log::debug!(target: "outline", "trip content {:?}", b);

    let mut rec = PathRecorder::new();
    rec.move_to(b.min_x + CORNER_VALUE, b.max_y);

    rec.quad_to(b.min_x, b.max_y, b.min_x, b.max_y - CORNER_VALUE);
    rec.line_to(b.min_x, b.min_y + CORNER_VALUE);
    tab::notch(&mut rec, b.top_left(), ARC_RADIUS, LEFT_NOTCH_START);
    tab::top_tab(&mut rec, b, ARC_RADIUS, ARC_RADIUS, bottom_inset);
    tab::notch(&mut rec, b.top_right(), ARC_RADIUS, RIGHT_NOTCH_START);
    rec.line_to(b.max_x, b.max_y - ARC_RADIUS);
    rec.quad_to(b.max_x, b.max_y, b.max_x - CORNER_VALUE, b.max_y);
    rec.line_to(b.max_x - ARC_RADIUS, b.max_y);

    rec.close();
    rec.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Insets, Point};
    use crate::path::PathCommand;

    fn bounds() -> Rect {
        Rect::inset_from_size(300.0, 100.0, Insets::TRIP_CARD)
    }

    #[test]
    fn test_header_shape() {
        let path = build_trip_header_path(&bounds(), 5.0);
        assert_eq!(path.subpath_count(), 1);
        assert!(path.is_closed());
        assert_eq!(path.quad_count(), 2);
        assert_eq!(path.arc_count(), 2);
        assert_eq!(path.start_point(), Some(Point::new(40.0, 110.0)));
        assert!(path.contains_vertex(Point::new(40.0, 0.0)));
        assert!(path.contains_vertex(Point::new(300.0, 75.0)));
    }

    #[test]
    fn test_content_shape() {
        let path = build_trip_content_path(&bounds(), 5.0);
        assert_eq!(path.subpath_count(), 1);
        assert!(path.is_closed());
        assert_eq!(path.quad_count(), 2);
        assert_eq!(path.arc_count(), 2);
        assert_eq!(path.start_point(), Some(Point::new(40.0, 95.0)));
        assert_eq!(path.end_point(), Some(Point::new(260.0, 95.0)));
    }

    #[test]
    fn test_content_notches_sit_on_top_corners() {
        let path = build_trip_content_path(&bounds(), 5.0);
        let centers: Vec<Point> = path.arcs().map(|a| a.center()).collect();
        assert_eq!(centers, vec![Point::new(0.0, 0.0), Point::new(300.0, 0.0)]);
        for arc in path.arcs() {
            assert_eq!(arc.radius_x(), 20.0);
            assert_eq!(arc.sweep_angle, -180.0);
        }
    }

    #[test]
    fn test_header_notches_sit_on_bottom_corners() {
        let path = build_trip_header_path(&bounds(), 5.0);
        let starts: Vec<f32> = path
            .commands()
            .iter()
            .filter_map(|c| match c {
                PathCommand::ArcTo(arc) => Some(arc.start_angle),
                _ => None,
            })
            .collect();
        assert_eq!(starts, vec![90.0, -90.0]);
        let centers: Vec<Point> = path.arcs().map(|a| a.center()).collect();
        assert_eq!(centers, vec![Point::new(0.0, 95.0), Point::new(300.0, 95.0)]);
    }
}
