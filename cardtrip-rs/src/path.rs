//! The outline command list produced by the builders.
//!
//! A [`CardPath`] is an immutable record of drawing commands. Renderers walk
//! [`CardPath::commands`] and translate each command into their own path
//! primitive; arcs stay symbolic so that every backend can flatten them with
//! its own tolerance.

use crate::geometry::{Point, Rect};

/// Tolerance used when matching vertices.
const VERTEX_EPSILON: f32 = 1e-3;

/// An elliptical arc on the bounding `oval`.
///
/// Angles are in degrees, measured from the positive x axis with the y axis
/// pointing down, so a positive sweep runs clockwise on screen. When it is
/// appended to a path, a straight segment joins the current point to the
/// arc's start point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    pub oval: Rect,
    pub start_angle: f32,
    pub sweep_angle: f32,
}

impl ArcSegment {
    pub fn center(&self) -> Point {
        self.oval.center()
    }

    pub fn radius_x(&self) -> f32 {
        self.oval.width() / 2.0
    }

    pub fn radius_y(&self) -> f32 {
        self.oval.height() / 2.0
    }

    /// Point on the oval at `degrees`.
    pub fn point_at(&self, degrees: f32) -> Point {
        let (cos, sin) = unit_vector(degrees);
        let c = self.center();
        Point::new(c.x + self.radius_x() * cos, c.y + self.radius_y() * sin)
    }

    pub fn start_point(&self) -> Point {
        self.point_at(self.start_angle)
    }

    pub fn end_point(&self) -> Point {
        self.point_at(self.start_angle + self.sweep_angle)
    }

    /// Start, end and every axis-aligned extreme point the arc passes.
    pub fn extrema(&self) -> Vec<Point> {
        let end = self.start_angle + self.sweep_angle;
        let lo = self.start_angle.min(end);
        let hi = self.start_angle.max(end);

        let mut points = vec![self.start_point(), self.end_point()];
        let mut k = (lo / 90.0).ceil() as i32;
        while (k as f32) * 90.0 <= hi {
            points.push(self.point_at(k as f32 * 90.0));
            k += 1;
        }
        points
    }
}

/// cos/sin of an angle in degrees; axis angles resolve exactly.
fn unit_vector(degrees: f32) -> (f32, f32) {
    let normalized = degrees.rem_euclid(360.0);
    if normalized == 0.0 {
        (1.0, 0.0)
    } else if normalized == 90.0 {
        (0.0, 1.0)
    } else if normalized == 180.0 {
        (-1.0, 0.0)
    } else if normalized == 270.0 {
        (0.0, -1.0)
    } else {
        let radians = normalized.to_radians();
        (radians.cos(), radians.sin())
    }
}

/// A single outline drawing command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Quadratic Bézier with control point `ctrl`.
    QuadTo { ctrl: Point, to: Point },
    ArcTo(ArcSegment),
    Close,
}

/// A closed card outline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CardPath {
    commands: Vec<PathCommand>,
}

impl CardPath {
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of subpaths (one per `MoveTo`).
    pub fn subpath_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::MoveTo(_)))
            .count()
    }

    /// True when the outline ends with a `Close`.
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    pub fn start_point(&self) -> Option<Point> {
        self.commands.iter().find_map(|c| match c {
            PathCommand::MoveTo(p) => Some(*p),
            _ => None,
        })
    }

    /// The current point just before the path is closed.
    pub fn end_point(&self) -> Option<Point> {
        self.vertices().last().copied()
    }

    /// On-curve points in traversal order. Arcs contribute their start and
    /// end points.
    pub fn vertices(&self) -> Vec<Point> {
        let mut points = Vec::with_capacity(self.commands.len() + 4);
        for command in &self.commands {
            match command {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => points.push(*p),
                PathCommand::QuadTo { to, .. } => points.push(*to),
                PathCommand::ArcTo(arc) => {
                    points.push(arc.start_point());
                    points.push(arc.end_point());
                }
                PathCommand::Close => {}
            }
        }
        points
    }

    /// Vertices with consecutive duplicates and the closing repeat of the
    /// start point removed.
    pub fn distinct_vertices(&self) -> Vec<Point> {
        let mut points: Vec<Point> = Vec::new();
        for p in self.vertices() {
            if points
                .last()
                .is_none_or(|last| last.distance(p) > VERTEX_EPSILON)
            {
                points.push(p);
            }
        }
        if points.len() > 1 && points[0].distance(points[points.len() - 1]) <= VERTEX_EPSILON {
            points.pop();
        }
        points
    }

    pub fn contains_vertex(&self, point: Point) -> bool {
        self.vertices()
            .iter()
            .any(|v| v.distance(point) <= VERTEX_EPSILON)
    }

    pub fn line_count(&self) -> usize {
        self.count(|c| matches!(c, PathCommand::LineTo(_)))
    }

    pub fn quad_count(&self) -> usize {
        self.count(|c| matches!(c, PathCommand::QuadTo { .. }))
    }

    pub fn arc_count(&self) -> usize {
        self.count(|c| matches!(c, PathCommand::ArcTo(_)))
    }

    pub fn arcs(&self) -> impl Iterator<Item = &ArcSegment> {
        self.commands.iter().filter_map(|c| match c {
            PathCommand::ArcTo(arc) => Some(arc),
            _ => None,
        })
    }

    fn count(&self, pred: impl Fn(&PathCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }

    /// Bounds over on-curve points, quadratic control points and arc
    /// extrema. `None` for an empty path.
    pub fn bounds(&self) -> Option<Rect> {
        let mut bounds: Option<Rect> = None;
        let mut include = |p: Point| match bounds.as_mut() {
            Some(b) => b.include(p),
            None => bounds = Some(Rect::from_point(p)),
        };

        for command in &self.commands {
            match command {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => include(*p),
                PathCommand::QuadTo { ctrl, to } => {
                    include(*ctrl);
                    include(*to);
                }
                PathCommand::ArcTo(arc) => arc.extrema().into_iter().for_each(&mut include),
                PathCommand::Close => {}
            }
        }
        bounds
    }

    /// Copy of the outline moved by `(dx, dy)`.
    pub fn translated(&self, dx: f32, dy: f32) -> CardPath {
        let shift = |p: Point| Point::new(p.x + dx, p.y + dy);
        let commands = self
            .commands
            .iter()
            .map(|command| match *command {
                PathCommand::MoveTo(p) => PathCommand::MoveTo(shift(p)),
                PathCommand::LineTo(p) => PathCommand::LineTo(shift(p)),
                PathCommand::QuadTo { ctrl, to } => PathCommand::QuadTo {
                    ctrl: shift(ctrl),
                    to: shift(to),
                },
                PathCommand::ArcTo(arc) => PathCommand::ArcTo(ArcSegment {
                    oval: Rect::new(
                        arc.oval.min_x + dx,
                        arc.oval.min_y + dy,
                        arc.oval.max_x + dx,
                        arc.oval.max_y + dy,
                    ),
                    ..arc
                }),
                PathCommand::Close => PathCommand::Close,
            })
            .collect();
        CardPath { commands }
    }
}

/// Records commands while tracking the current point.
#[derive(Debug, Default)]
pub(crate) struct PathRecorder {
    commands: Vec<PathCommand>,
}

impl PathRecorder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
    }

    pub(crate) fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
    }

    pub(crate) fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        self.commands.push(PathCommand::QuadTo {
            ctrl: Point::new(cx, cy),
            to: Point::new(x, y),
        });
    }

    pub(crate) fn arc_to(&mut self, oval: Rect, start_angle: f32, sweep_angle: f32) {
        self.commands.push(PathCommand::ArcTo(ArcSegment {
            oval,
            start_angle,
            sweep_angle,
        }));
    }

    pub(crate) fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    pub(crate) fn finish(self) -> CardPath {
        CardPath {
            commands: self.commands,
        }
    }
}
