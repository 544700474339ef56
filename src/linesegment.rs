//! Points, line segments and the few formulas everything else is built from.

use nalgebra::Vector2;

use crate::split::Side;

/// A point (or vector) in the plane.
pub type Point = Vector2<f64>;

/// Below this absolute determinant two segments are considered parallel.
pub const PARALLEL_EPSILON: f64 = 1e-7;

/// Linearly interpolate between `a` and `b`.
///
/// `t` outside of `[0, 1]` extrapolates along the line through `a` and `b`.
pub fn lerp(a: &Point, b: &Point, t: f64) -> Point {
    a * (1.0 - t) + b * t
}

/// Third component of the 3d cross product of `u` and `v` extended by `z = 0`.
///
/// Positive if `v` is counterclockwise of `u` (in a y-up coordinate system).
pub fn cross(u: &Point, v: &Point) -> f64 {
    u.x * v.y - u.y * v.x
}

/// A directed line segment from `a` to `b`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineSegment {
    /// Start point
    pub a: Point,

    /// End point
    pub b: Point,
}

impl LineSegment {
    /// Construct a segment from two points.
    pub fn new(a: Point, b: Point) -> Self {
        LineSegment { a, b }
    }

    /// The segment's direction `b - a`.
    ///
    /// *The resulting vector is not normalized!*
    pub fn direction(&self) -> Point {
        self.b - self.a
    }

    /// Cross product of the segment's direction and `p - a`.
    ///
    /// This isn't an euclidean distance. Only its sign is meaningful on its own:
    /// it tells on which side of the segment's supporting line `p` lies.
    pub fn signed_distance(&self, p: &Point) -> f64 {
        cross(&self.direction(), &(p - self.a))
    }

    /// On which side of the segment's supporting line `p` lies.
    pub fn side(&self, p: &Point) -> Side {
        Side::of(self.signed_distance(p))
    }

    /// Get the point on the segment at position `t`.
    pub fn at(&self, t: f64) -> Point {
        lerp(&self.a, &self.b, t)
    }
}

impl From<(Point, Point)> for LineSegment {
    fn from((a, b): (Point, Point)) -> Self {
        LineSegment::new(a, b)
    }
}

impl From<[[f64; 2]; 2]> for LineSegment {
    fn from([a, b]: [[f64; 2]; 2]) -> Self {
        LineSegment::new(Point::from(a), Point::from(b))
    }
}

/// Intersect two segments.
///
/// Solves `ls0.at(t) == ls1.at(u)` using Cramer's rule.
/// Returns `None` if the segments are (almost) parallel or if the intersection lies outside
/// either segment. Both parameters have to lie in the half-open `[0, 1)` so that a shared
/// endpoint of two consecutive segments is only reported once.
pub fn intersection(ls0: &LineSegment, ls1: &LineSegment) -> Option<Point> {
    let (x1, y1) = (ls0.a.x, ls0.a.y);
    let (x2, y2) = (ls0.b.x, ls0.b.y);
    let (x3, y3) = (ls1.a.x, ls1.a.y);
    let (x4, y4) = (ls1.b.x, ls1.b.y);

    let d = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if d.abs() < PARALLEL_EPSILON {
        return None;
    }

    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / d;
    let u = ((x2 - x1) * (y1 - y3) - (y2 - y1) * (x1 - x3)) / d;
    if !(0.0..1.0).contains(&t) || !(0.0..1.0).contains(&u) {
        return None;
    }

    Some(ls0.at(t))
}
