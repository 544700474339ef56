//! Fitting artwork into the canvas.

use crate::bounding_box::BoundingBox;
use crate::grid::Resolution;
use crate::linesegment::Point;
use crate::polygon::Polygon;

/// Uniform scale followed by a translation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Zoom {
    /// Scale factor applied first
    pub scale: f64,

    /// Translation applied after scaling
    pub offset: Point,
}

impl Zoom {
    /// Transform a point.
    pub fn transform(&self, point: &Point) -> Point {
        point * self.scale + self.offset
    }

    /// Transform every vertex of a polygon.
    pub fn apply(&self, polygon: &Polygon) -> Polygon {
        polygon.map(|p| self.transform(p))
    }
}

/// The zoom fitting `bounds` into `resolution`, centered, leaving at least `padding` pixels on
/// every side.
///
/// The aspect ratio is kept, so one axis usually has more space left than the padding.
/// Bounds without width or height only constrain the other axis.
pub fn zoom_to(bounds: &BoundingBox, resolution: Resolution, padding: f64) -> Zoom {
    let size = bounds.size();
    let width = f64::from(resolution.width);
    let height = f64::from(resolution.height);
    let available = Point::new(width - 2.0 * padding, height - 2.0 * padding);

    let sx = if size.x > 0.0 { available.x / size.x } else { f64::INFINITY };
    let sy = if size.y > 0.0 { available.y / size.y } else { f64::INFINITY };
    let scale = match sx.min(sy) {
        s if s.is_finite() => s,
        _ => 1.0,
    };

    let offset = Point::new(
        -bounds.min.x * scale + 0.5 * (width - size.x * scale),
        -bounds.min.y * scale + 0.5 * (height - size.y * scale),
    );
    Zoom { scale, offset }
}

/// Bounds of several polygons.
pub fn bounds_of<'a, I: IntoIterator<Item = &'a Polygon>>(polygons: I) -> Option<BoundingBox> {
    polygons
        .into_iter()
        .map(Polygon::bounding_box)
        .reduce(|a, b| a.union(&b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fits_and_centers() {
        let bounds = BoundingBox::from([Point::new(10.0, 10.0), Point::new(30.0, 20.0)]);
        let zoom = zoom_to(&bounds, Resolution::new(100, 100), 10.0);
        assert_eq!(zoom.scale, 4.0);

        // wide artwork touches the padding left and right and is centered vertically
        assert_eq!(zoom.transform(&bounds.min), Point::new(10.0, 30.0));
        assert_eq!(zoom.transform(&bounds.max), Point::new(90.0, 70.0));
    }

    #[test]
    fn bounds_of_polygons() {
        let a = Polygon::from_coords(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]).unwrap();
        let b = Polygon::from_coords(&[[5.0, 5.0], [6.0, 5.0], [5.0, -2.0]]).unwrap();
        let bounds = bounds_of([&a, &b]).unwrap();
        assert_eq!(bounds.min, Point::new(0.0, -2.0));
        assert_eq!(bounds.max, Point::new(6.0, 5.0));
        assert_eq!(bounds_of(&Vec::<Polygon>::new()), None);
    }
}
