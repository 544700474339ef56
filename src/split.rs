//! Splitting polygons along a line.
//!
//! The cutting segment's direction `b - a` divides the plane in two halves. A point `p` is
//! [`Side::Inside`] if the cross product of `b - a` and `p - a` is negative (right of the
//! segment in a y-up coordinate system) and [`Side::Outside`] otherwise. Points exactly on the
//! line count as outside, unless the boundary merely touches the line from the inside.

use smallvec::SmallVec;
use tracing::trace;

use crate::linesegment::{cross, lerp, LineSegment, Point};
use crate::polygon::{Polygon, Vertices};

/// The two half planes of a cutting line.
///
/// Computed from the sign of a [`LineSegment::signed_distance`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    /// Negative signed distance
    Inside,

    /// Zero or positive signed distance
    Outside,
}

impl Side {
    /// Classify a signed distance.
    pub fn of(signed_distance: f64) -> Side {
        if signed_distance < 0.0 {
            Side::Inside
        } else {
            Side::Outside
        }
    }
}

/// How the boundary passes the cutting line at an augmented vertex.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Crossing {
    /// An original vertex of the polygon
    None,

    /// Crossing from outside to inside
    Entering,

    /// Crossing from inside to outside
    Exiting,
}

#[derive(Copy, Clone, Debug)]
struct Vertex {
    point: Point,
    crossing: Crossing,
}

/// Splits a polygon along the line through `segment`.
///
/// Returns the fragments on the inside and on the outside of the line (see [`Side`]).
/// A polygon which lies completely on one side is returned as it is.
///
/// Otherwise every fragment starts at a crossing point and follows the polygon's boundary
/// until the boundary crosses the line again. Crossing points are paired along the line, each
/// pair being a chord through the polygon's interior, and a fragment continues across the
/// chord until it is closed. This keeps the fragments simple for concave polygons which are
/// cut more than twice. For a convex polygon there is exactly one inside and one outside
/// fragment.
///
/// Fragments keep the orientation of the input polygon.
pub fn split(polygon: &Polygon, segment: &LineSegment) -> (Vec<Polygon>, Vec<Polygon>) {
    let lsv = segment.direction();
    let signed_distances: SmallVec<[f64; 8]> = polygon
        .vertices()
        .iter()
        .map(|v| cross(&lsv, &(v - segment.a)))
        .collect();

    let sides = classify(&signed_distances);

    if sides.iter().all(|&side| side == Side::Inside) {
        return (vec![polygon.clone()], Vec::new());
    }
    if sides.iter().all(|&side| side == Side::Outside) {
        return (Vec::new(), vec![polygon.clone()]);
    }

    let vertices = augment(polygon, &signed_distances, &sides);
    let partners = pair_crossings(&vertices, segment);
    let entering = vertices
        .iter()
        .position(|v| v.crossing == Crossing::Entering)
        .expect("a polygon on both sides crosses into the inside");
    trace!(
        vertices = polygon.len(),
        crossings = vertices.len() - polygon.len(),
        "splitting polygon"
    );

    let n = vertices.len();
    let mut used = vec![false; n];
    let mut inside = Vec::new();
    let mut outside = Vec::new();
    for k in 0..n {
        let start = (entering + k) % n;
        if vertices[start].crossing == Crossing::None || used[start] {
            continue;
        }
        let side = match vertices[start].crossing {
            Crossing::Entering => Side::Inside,
            _ => Side::Outside,
        };
        let fragment = trace_fragment(&vertices, &partners, &mut used, start);
        if let Some(fragment) = fragment {
            match side {
                Side::Inside => inside.push(fragment),
                Side::Outside => outside.push(fragment),
            }
        }
    }

    (inside, outside)
}

/// The side of every vertex, for deciding where the boundary crosses the line.
///
/// Vertices on the line count as outside, except for runs of them between two inside vertices.
/// There the boundary only touches the line, and crossing out and straight back in would pair
/// up two zero length crossings with chords elsewhere on the line.
fn classify(signed_distances: &[f64]) -> SmallVec<[Side; 8]> {
    let n = signed_distances.len();
    (0..n)
        .map(|i| {
            if signed_distances[i] != 0.0 {
                return Side::of(signed_distances[i]);
            }
            let before = (1..n)
                .map(|k| signed_distances[(i + n - k) % n])
                .find(|&d| d != 0.0);
            let after = (1..n)
                .map(|k| signed_distances[(i + k) % n])
                .find(|&d| d != 0.0);
            match (before, after) {
                (Some(b), Some(a)) if b < 0.0 && a < 0.0 => Side::Inside,
                _ => Side::Outside,
            }
        })
        .collect()
}

/// The polygon's vertices interleaved with the points where its edges cross the line.
fn augment(polygon: &Polygon, signed_distances: &[f64], sides: &[Side]) -> Vec<Vertex> {
    let n = polygon.len();
    let mut vertices = Vec::with_capacity(n + 4);
    for i in 0..n {
        let j = (i + 1) % n;
        let (pa, pb) = (polygon[i], polygon[j]);
        let (da, db) = (signed_distances[i], signed_distances[j]);

        vertices.push(Vertex {
            point: pa,
            crossing: Crossing::None,
        });

        let crossing = match (sides[i], sides[j]) {
            (Side::Outside, Side::Inside) => Crossing::Entering,
            (Side::Inside, Side::Outside) => Crossing::Exiting,
            _ => continue,
        };
        // Vertices on the line next to another side keep their own side, so da != db
        let point = lerp(&pa, &pb, da / (da - db));
        vertices.push(Vertex { point, crossing });
    }
    vertices
}

/// Pairs up crossing points in order of their position along the cutting line.
///
/// The line enters and leaves a simple polygon alternately, so the segment between the
/// first and second crossing, third and fourth crossing and so on lies inside the polygon.
fn pair_crossings(vertices: &[Vertex], segment: &LineSegment) -> Vec<Option<usize>> {
    let lsv = segment.direction();
    let mut crossings: Vec<(f64, usize)> = vertices
        .iter()
        .enumerate()
        .filter(|(_, v)| v.crossing != Crossing::None)
        .map(|(i, v)| ((v.point - segment.a).dot(&lsv), i))
        .collect();
    crossings.sort_by(|x, y| x.0.total_cmp(&y.0));

    let mut partners = vec![None; vertices.len()];
    for pair in crossings.chunks_exact(2) {
        let (i, j) = (pair[0].1, pair[1].1);
        debug_assert_ne!(
            vertices[i].crossing, vertices[j].crossing,
            "a chord joins an entering and an exiting crossing"
        );
        partners[i] = Some(j);
        partners[j] = Some(i);
    }
    partners
}

/// Walks the boundary from the crossing `start`, jumping across chords, until it returns.
fn trace_fragment(
    vertices: &[Vertex],
    partners: &[Option<usize>],
    used: &mut [bool],
    start: usize,
) -> Option<Polygon> {
    let n = vertices.len();
    let mut points = Vertices::new();
    let mut current = start;

    // Every vertex is visited at most once per fragment, chords add one extra point each.
    for _ in 0..2 * n {
        used[current] = true;
        points.push(vertices[current].point);

        // follow the boundary up to the next crossing
        let mut k = (current + 1) % n;
        while vertices[k].crossing == Crossing::None {
            points.push(vertices[k].point);
            k = (k + 1) % n;
        }
        points.push(vertices[k].point);

        // cross the chord
        match partners[k] {
            Some(partner) if partner != start && !used[partner] => current = partner,
            _ => break,
        }
    }

    finish(points)
}

/// Removes repeated points and drops fragments without area.
fn finish(mut points: Vertices) -> Option<Polygon> {
    points.dedup();
    while points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    if points.len() < 3 {
        return None;
    }
    Some(Polygon::from_vertices_unchecked(points))
}

/// Intersects a simple polygon with a convex one.
///
/// The polygon is split successively along every edge of `convex`, keeping the fragments on
/// the side of its interior.
pub fn clip(polygon: &Polygon, convex: &Polygon) -> Vec<Polygon> {
    // Counterclockwise (y-up) polygons have their interior left of each edge
    let keep = if convex.signed_area() > 0.0 {
        Side::Outside
    } else {
        Side::Inside
    };

    let mut pieces = vec![polygon.clone()];
    for edge in convex.edges() {
        pieces = pieces
            .iter()
            .flat_map(|piece| {
                let (inside, outside) = split(piece, &edge);
                match keep {
                    Side::Inside => inside,
                    Side::Outside => outside,
                }
            })
            .collect();
        if pieces.is_empty() {
            break;
        }
    }
    pieces
}
