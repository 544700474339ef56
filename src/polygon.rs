//! Simple polygons stored as their ordered vertices.

use nalgebra::Rotation2;
use smallvec::SmallVec;
use std::ops::Index;

use crate::bounding_box::BoundingBox;
use crate::error::{Error, Result};
use crate::linesegment::{cross, LineSegment, Point};

/// Vertex storage; cells and most fragments fit without allocating.
pub type Vertices = SmallVec<[Point; 8]>;

/// A simple polygon.
///
/// The last vertex implicitly connects back to the first one.
/// Self intersecting polygons are not supported by any of the algorithms in this crate.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon(Vertices);

impl Polygon {
    /// Construct a polygon from its vertices.
    ///
    /// Fails with [`Error::InvalidPolygon`] if there are less than three.
    pub fn new<I: IntoIterator<Item = Point>>(vertices: I) -> Result<Polygon> {
        let vertices: Vertices = vertices.into_iter().collect();
        if vertices.len() < 3 {
            return Err(Error::InvalidPolygon {
                vertices: vertices.len(),
            });
        }
        Ok(Polygon(vertices))
    }

    /// Construct a polygon from `[x, y]` pairs.
    pub fn from_coords(coords: &[[f64; 2]]) -> Result<Polygon> {
        Polygon::new(coords.iter().map(|&c| Point::from(c)))
    }

    /// Callers guarantee at least three vertices.
    pub(crate) fn from_vertices_unchecked(vertices: Vertices) -> Polygon {
        debug_assert!(vertices.len() >= 3);
        Polygon(vertices)
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`, a polygon has at least three vertices.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The vertices in order.
    pub fn vertices(&self) -> &[Point] {
        &self.0
    }

    /// Iterate over the polygon's edges including the closing one from the last vertex to the
    /// first.
    pub fn edges(&self) -> impl Iterator<Item = LineSegment> + '_ {
        self.0
            .iter()
            .zip(self.0.iter().cycle().skip(1))
            .map(|(&a, &b)| LineSegment::new(a, b))
    }

    /// Signed area using the shoelace formula.
    ///
    /// Positive for counterclockwise polygons in a y-up coordinate system, i.e. clockwise on a
    /// y-down canvas.
    pub fn signed_area(&self) -> f64 {
        self.edges().map(|e| cross(&e.a, &e.b)).sum::<f64>() / 2.0
    }

    /// Absolute area.
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Center of mass of the polygon's area.
    ///
    /// Degenerates to the vertex average if the polygon has no area.
    pub fn centroid(&self) -> Point {
        let area = self.signed_area();
        if area.abs() < f64::EPSILON {
            return self.0.iter().sum::<Point>() / self.0.len() as f64;
        }
        let weighted = self
            .edges()
            .map(|e| (e.a + e.b) * cross(&e.a, &e.b))
            .sum::<Point>();
        weighted / (6.0 * area)
    }

    /// Smallest axis aligned box containing the polygon.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_slice(&self.0).expect("a polygon has at least three vertices")
    }

    /// Apply `f` to every vertex.
    pub fn map(&self, f: impl FnMut(&Point) -> Point) -> Polygon {
        Polygon(self.0.iter().map(f).collect())
    }

    /// Move the polygon by `offset`.
    pub fn translate(&self, offset: &Point) -> Polygon {
        self.map(|p| p + offset)
    }

    /// Rotate the polygon by `angle` radians around `center`.
    pub fn rotate_around(&self, center: &Point, angle: f64) -> Polygon {
        let rotation = Rotation2::new(angle);
        self.map(|p| center + rotation * (p - center))
    }

    /// Same polygon with its vertices in reverse order.
    pub fn reversed(&self) -> Polygon {
        Polygon(self.0.iter().rev().copied().collect())
    }
}

impl Index<usize> for Polygon {
    type Output = Point;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Polygon {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Polygon> for Vec<Point> {
    fn from(polygon: Polygon) -> Self {
        polygon.0.into_vec()
    }
}

/// Total absolute area of several polygons.
pub fn total_area<'a, I: IntoIterator<Item = &'a Polygon>>(polygons: I) -> f64 {
    polygons.into_iter().map(Polygon::area).sum()
}
