//! Cutting the canvas into a jittered grid of template cells and cutting artwork with them.

use rand::Rng;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::{Error, Result};
use crate::linesegment::{LineSegment, Point};
use crate::polygon::Polygon;
use crate::split::{clip, split};

/// Size of the canvas in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resolution {
    /// Width in pixels
    pub width: u32,

    /// Height in pixels
    pub height: u32,
}

impl Resolution {
    /// Construct a resolution.
    pub fn new(width: u32, height: u32) -> Self {
        Resolution { width, height }
    }
}

impl FromStr for Resolution {
    type Err = Error;

    /// Parses `"<width>x<height>"`, e.g. `"720x720"`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidResolution(s.to_string());
        let (width, height) = s.trim().split_once('x').ok_or_else(invalid)?;
        let width = width.parse().map_err(|_| invalid())?;
        let height = height.parse().map_err(|_| invalid())?;
        Ok(Resolution { width, height })
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl From<(u32, u32)> for Resolution {
    fn from((width, height): (u32, u32)) -> Self {
        Resolution { width, height }
    }
}

/// Number of cutting lines in each direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    /// Number of (roughly) vertical lines, i.e. columns minus one
    pub vertical: u32,

    /// Number of (roughly) horizontal lines, i.e. rows minus one
    pub horizontal: u32,
}

impl Grid {
    /// Construct a grid.
    pub fn new(vertical: u32, horizontal: u32) -> Self {
        Grid {
            vertical,
            horizontal,
        }
    }
}

impl From<(u32, u32)> for Grid {
    fn from((vertical, horizontal): (u32, u32)) -> Self {
        Grid {
            vertical,
            horizontal,
        }
    }
}

/// Number of cells the grid's lines divide the canvas into.
pub fn cell_count(grid: Grid) -> usize {
    (grid.vertical as usize + 1) * (grid.horizontal as usize + 1)
}

/// The lines dividing `resolution` into `grid`'s cells.
///
/// First yields the vertical lines from left to right, each running from the top border to the
/// bottom border, then the horizontal lines from top to bottom, each running from the left
/// border to the right one. Every endpoint is moved along its border by up to half of
/// `jitter` times the cell size, independently of the line's other endpoint.
///
/// Two random numbers are drawn from `rng` per line in the order the lines are yielded.
/// Nothing is drawn if `jitter` is zero.
pub fn grid_lines<'r, R: Rng>(
    resolution: Resolution,
    grid: Grid,
    jitter: f64,
    rng: &'r mut R,
) -> impl Iterator<Item = LineSegment> + 'r {
    let width = f64::from(resolution.width);
    let height = f64::from(resolution.height);
    let columns = f64::from(grid.vertical + 1);
    let rows = f64::from(grid.horizontal + 1);

    let offset = move |rng: &mut R, index: u32| {
        let noise = if jitter == 0.0 {
            0.0
        } else {
            jitter * (rng.gen::<f64>() - 0.5)
        };
        f64::from(index + 1) + noise
    };

    let mut gx = 0;
    let mut gy = 0;
    std::iter::from_fn(move || {
        if gx < grid.vertical {
            let x0 = width * offset(&mut *rng, gx) / columns;
            let x1 = width * offset(&mut *rng, gx) / columns;
            gx += 1;
            Some(LineSegment::new(Point::new(x0, 0.0), Point::new(x1, height)))
        } else if gy < grid.horizontal {
            let y0 = height * offset(&mut *rng, gy) / rows;
            let y1 = height * offset(&mut *rng, gy) / rows;
            gy += 1;
            Some(LineSegment::new(Point::new(0.0, y0), Point::new(width, y1)))
        } else {
            None
        }
    })
}

/// The whole canvas as a polygon.
pub fn rectangle(resolution: Resolution) -> Polygon {
    let width = f64::from(resolution.width);
    let height = f64::from(resolution.height);
    Polygon::from_coords(&[[0.0, 0.0], [width, 0.0], [width, height], [0.0, height]])
        .expect("a rectangle has four vertices")
}

/// Cuts every polygon by every line.
///
/// Each line splits all pieces produced by the previous lines. A piece is replaced by its inside
/// fragments followed by its outside fragments.
pub fn cut_by_lines<I>(polygons: Vec<Polygon>, lines: I) -> Vec<Polygon>
where
    I: IntoIterator<Item = LineSegment>,
{
    lines.into_iter().fold(polygons, |pieces, line| {
        pieces
            .iter()
            .flat_map(|piece| {
                let (mut inside, outside) = split(piece, &line);
                inside.extend(outside);
                inside
            })
            .collect()
    })
}

/// Cuts the canvas into template cells along jittered grid lines.
///
/// See [`grid_lines`] for how `jitter` and `rng` are used.
/// For a jitter below `1` neighbouring lines can't cross, so there are [`cell_count`] cells.
pub fn create_templates<R: Rng>(
    resolution: Resolution,
    grid: Grid,
    jitter: f64,
    rng: &mut R,
) -> Vec<Polygon> {
    let lines = grid_lines(resolution, grid, jitter, rng);
    let templates = cut_by_lines(vec![rectangle(resolution)], lines);
    debug!(
        %resolution,
        cells = templates.len(),
        "created templates"
    );
    templates
}

/// Cuts artwork into pieces, one entry per template cell.
///
/// Each entry holds the parts of `polygons` lying inside the corresponding (convex) template,
/// which is empty if the artwork doesn't reach into that cell. The entries keep the order of
/// `templates`.
pub fn cut(polygons: &[Polygon], templates: &[Polygon]) -> Vec<Vec<Polygon>> {
    let bounds: Vec<_> = polygons.iter().map(Polygon::bounding_box).collect();
    let pieces: Vec<Vec<Polygon>> = templates
        .iter()
        .map(|template| {
            let cell = template.bounding_box();
            polygons
                .iter()
                .zip(&bounds)
                .filter(|(_, bb)| bb.intersects(&cell))
                .flat_map(|(polygon, _)| clip(polygon, template))
                .collect()
        })
        .collect();
    debug!(
        polygons = polygons.len(),
        templates = templates.len(),
        pieces = pieces.iter().map(Vec::len).sum::<usize>(),
        "cut artwork"
    );
    pieces
}
