//! Outline of the four-corner special card.
//!
//! The outline starts on the bottom edge next to the bottom-left corner and
//! walks up the left edge, along the top, down the right edge and back along
//! the bottom. Each corner step finishes the incoming edge and runs the
//! following edge up to where the *next* corner begins, so it reads the next
//! corner's radius as well as its own.

use crate::corner::CornerStyle;
use crate::path::{CardPath, PathRecorder};
use crate::spec::CardSpec;
use crate::tab::{self, LEFT_NOTCH_START, RIGHT_NOTCH_START, TAB_RISE_FACTOR};

/// Build the closed outline for `spec`.
///
/// Never fails. Radii larger than the edges they sit on produce a
/// self-intersecting outline rather than an error.
pub fn build_special_card_path(spec: &CardSpec) -> CardPath {
    let b = spec.bounds();
    let sb = spec.bottom_inset();
    let r = spec.radii();
    let s = spec.styles();

    log::debug!(
        target: "outline",
        "special card {}x{} styles={:?} radii={:?}",
        spec.width(),
        spec.height(),
        s,
        r
    );

    let mut rec = PathRecorder::new();

    let start_y = if s.bottom_left == CornerStyle::Curve {
        b.max_y + TAB_RISE_FACTOR * sb
    } else {
        b.max_y
    };
    rec.move_to(b.min_x + r.bottom_left, start_y);

    // Bottom-left corner, then up the left edge.
    match s.bottom_left {
        CornerStyle::Rounded => {
            rec.quad_to(b.min_x, b.max_y, b.min_x, b.max_y - r.bottom_left);
        }
        CornerStyle::Curve => {
            tab::notch(&mut rec, b.bottom_left(), r.bottom_left, LEFT_NOTCH_START);
            rec.line_to(b.min_x, b.max_y - r.bottom_left / 2.0);
        }
        CornerStyle::Cut => {
            rec.line_to(b.min_x, b.max_y - r.bottom_left);
        }
    }
    rec.line_to(b.min_x, b.min_y + r.top_left);

    // Top-left corner, then along the top edge.
    match s.top_left {
        CornerStyle::Rounded => {
            rec.quad_to(b.min_x, b.min_y, b.min_x + r.top_left, b.min_y);
            rec.line_to(b.max_x - r.top_right, b.min_y);
        }
        CornerStyle::Curve => {
            tab::notch(&mut rec, b.top_left(), r.top_left, LEFT_NOTCH_START);
            tab::top_tab(&mut rec, &b, r.top_left, r.top_right, sb);
        }
        CornerStyle::Cut => {
            rec.line_to(b.min_x + r.top_left, b.min_y);
            rec.line_to(b.max_x - r.top_right, b.min_y);
        }
    }

    // Top-right corner, then down the right edge.
    match s.top_right {
        CornerStyle::Rounded => {
            rec.quad_to(b.max_x, b.min_y, b.max_x, b.min_y + r.top_right);
        }
        CornerStyle::Curve => {
            tab::notch(&mut rec, b.top_right(), r.top_right, RIGHT_NOTCH_START);
        }
        CornerStyle::Cut => {
            rec.line_to(b.max_x, b.min_y + r.top_right);
        }
    }
    rec.line_to(b.max_x, b.max_y - r.bottom_right);

    // Bottom-right corner, then back along the bottom edge.
    match s.bottom_right {
        CornerStyle::Rounded => {
            rec.quad_to(b.max_x, b.max_y, b.max_x - r.bottom_right, b.max_y);
            // Measured from the right edge; close() runs the rest of the bottom.
            rec.line_to(b.max_x - r.bottom_left, b.max_y);
        }
        CornerStyle::Curve => {
            tab::notch(&mut rec, b.bottom_right(), r.bottom_right, RIGHT_NOTCH_START);
            tab::bottom_tab(&mut rec, &b, r.bottom_right, r.bottom_left, sb);
        }
        CornerStyle::Cut => {
            rec.line_to(b.max_x - r.bottom_right, b.max_y);
            rec.line_to(b.min_x + r.bottom_left, b.max_y);
        }
    }

    rec.close();
    rec.finish()
}
