//! SVG path data export.

use crate::path::{ArcSegment, CardPath, PathCommand};

impl CardPath {
    /// Encode the outline as SVG path data (`M`, `L`, `Q`, `A`, `Z`).
    ///
    /// Each arc is preceded by a line to its start point. Arcs sweeping more
    /// than half a turn are split, since a single SVG arc cannot describe
    /// them unambiguously.
    pub fn to_svg_path_data(&self) -> String {
        self.commands()
            .iter()
            .map(|command| match command {
                PathCommand::MoveTo(p) => format!("M{} {}", p.x, p.y),
                PathCommand::LineTo(p) => format!("L{} {}", p.x, p.y),
                PathCommand::QuadTo { ctrl, to } => {
                    format!("Q{} {} {} {}", ctrl.x, ctrl.y, to.x, to.y)
                }
                PathCommand::ArcTo(arc) => arc_path_data(arc),
                PathCommand::Close => "Z".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn arc_path_data(arc: &ArcSegment) -> String {
    let start = arc.start_point();
    let mut d = format!("L{} {}", start.x, start.y);

    let pieces = (arc.sweep_angle.abs() / 180.0).ceil().max(1.0) as usize;
    let step = arc.sweep_angle / pieces as f32;
    let sweep_flag = if arc.sweep_angle > 0.0 { 1 } else { 0 };

    for i in 1..=pieces {
        let end = arc.point_at(arc.start_angle + step * i as f32);
        d.push_str(&format!(
            " A{} {} 0 0 {} {} {}",
            arc.radius_x(),
            arc.radius_y(),
            sweep_flag,
            end.x,
            end.y
        ));
    }
    d
}
