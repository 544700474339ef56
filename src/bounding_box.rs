//! Axis aligned bounding boxes around point sets.

use crate::linesegment::Point;

/// Axis aligned box spanned by its two extreme corners.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    /// Corner with the smallest coordinates
    pub min: Point,

    /// Corner with the largest coordinates
    pub max: Point,
}

impl BoundingBox {
    /// Smallest box containing all `points`.
    ///
    /// Returns `None` for an empty iterator.
    pub fn from_points<I: IntoIterator<Item = Point>>(points: I) -> Option<BoundingBox> {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(
            BoundingBox {
                min: first,
                max: first,
            },
            |bb, p| BoundingBox {
                min: bb.min.inf(&p),
                max: bb.max.sup(&p),
            },
        ))
    }

    /// Smallest box containing all `points`.
    pub fn from_slice(points: &[Point]) -> Option<BoundingBox> {
        BoundingBox::from_points(points.iter().copied())
    }

    /// Width and height of the box.
    pub fn size(&self) -> Point {
        self.max - self.min
    }

    /// Is `point` inside or on the border of the box?
    pub fn contains(&self, point: &Point) -> bool {
        self.min.x <= point.x
            && point.x <= self.max.x
            && self.min.y <= point.y
            && point.y <= self.max.y
    }

    /// Do the two boxes overlap with a positive area?
    pub fn intersects(&self, other: &Self) -> bool {
        self.intersecting_interval::<0>(other) && self.intersecting_interval::<1>(other)
    }

    fn intersecting_interval<const I: usize>(&self, other: &Self) -> bool {
        self.min[I] < other.max[I] && other.min[I] < self.max[I]
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &Self) -> BoundingBox {
        BoundingBox {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }
}

impl From<[Point; 2]> for BoundingBox {
    fn from([min, max]: [Point; 2]) -> Self {
        BoundingBox { min, max }
    }
}

impl From<BoundingBox> for [Point; 2] {
    fn from(bb: BoundingBox) -> Self {
        [bb.min, bb.max]
    }
}
