//! Ticket-stub geometry shared by the special card's `Curve` corners and the
//! trip card halves.
//!
//! A notch is a half circle centred on a rectangle corner. A tab is the
//! stepped strip that follows a notch along the top or bottom edge.

use crate::geometry::{Point, Rect};
use crate::path::PathRecorder;

/// Horizontal distance between a tab step and the notch radius.
pub const TAB_INSET: f32 = 8.0;

/// Vertical offset of the inner tab step from the edge.
pub const TAB_STEP: f32 = 3.0;

/// The outer tab step sits this many bottom insets away from the edge.
pub const TAB_RISE_FACTOR: f32 = 3.0;

/// Start angle of a notch on a left corner.
pub(crate) const LEFT_NOTCH_START: f32 = 90.0;

/// Start angle of a notch on a right corner.
pub(crate) const RIGHT_NOTCH_START: f32 = -90.0;

/// Every notch sweeps half a turn counter-clockwise on screen.
pub(crate) const NOTCH_SWEEP: f32 = -180.0;

/// Bounding oval of a notch of `radius` on `corner`.
pub fn notch_oval(corner: Point, radius: f32) -> Rect {
    Rect::centered(corner, radius / 2.0, radius / 2.0)
}

pub(crate) fn notch(rec: &mut PathRecorder, corner: Point, radius: f32, start_angle: f32) {
    rec.arc_to(notch_oval(corner, radius), start_angle, NOTCH_SWEEP);
}

/// Tab above the top edge, walked left to right.
pub(crate) fn top_tab(
    rec: &mut PathRecorder,
    bounds: &Rect,
    left_radius: f32,
    right_radius: f32,
    bottom_inset: f32,
) {
    let outer_y = bounds.min_y - TAB_RISE_FACTOR * bottom_inset;
    let inner_y = bounds.min_y - TAB_STEP;
    let left_x = bounds.min_x + (left_radius + TAB_INSET);
    let right_x = bounds.max_x - (right_radius + TAB_INSET);

    rec.line_to(left_x, outer_y);
    rec.line_to(left_x, inner_y);
    rec.line_to(right_x, inner_y);
    rec.line_to(right_x, outer_y);
}

/// Tab below the bottom edge, walked right to left.
pub(crate) fn bottom_tab(
    rec: &mut PathRecorder,
    bounds: &Rect,
    right_radius: f32,
    left_radius: f32,
    bottom_inset: f32,
) {
    let outer_y = bounds.max_y + TAB_RISE_FACTOR * bottom_inset;
    let inner_y = bounds.max_y + TAB_STEP;
    let right_x = bounds.max_x - (right_radius + TAB_INSET);
    let left_x = bounds.min_x + (left_radius + TAB_INSET);

    rec.line_to(right_x, outer_y);
    rec.line_to(right_x, inner_y);
    rec.line_to(left_x, inner_y);
    rec.line_to(left_x, outer_y);
}
