//! Moving cut pieces of artwork along a timeline.
//!
//! Artwork is cut with the same templates for every layer, so piece `i` of every layer belongs
//! to template cell `i` and shares that cell's phase. Each frame a piece is shifted vertically
//! by its layer's tween sequence, evaluated at the frame time plus the cell's phase, and
//! optionally rotated around its own centroid in proportion to that shift.

use rand::Rng;
use tracing::debug;

use crate::error::{Error, Result};
use crate::linesegment::Point;
use crate::polygon::Polygon;
use crate::timeline::Timeline;
use crate::tween::{Tween, TweenSequence};

/// Tag of the heart layer in [`valentine_timeline`].
pub const HEART_TAG: &str = "heart.y";

/// Tag of the logo layer in [`valentine_timeline`].
pub const LOGO_TAG: &str = "logo.y";

/// Pieces of one artwork, animated by one timeline tag.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    tag: String,
    pieces: Vec<Vec<Polygon>>,
    spin: Option<f64>,
}

impl Layer {
    /// A layer whose pieces follow `tag`'s vertical offset.
    ///
    /// `pieces` holds one (possibly empty) entry per template cell, as returned by
    /// [`cut`](crate::grid::cut).
    pub fn new(tag: impl Into<String>, pieces: Vec<Vec<Polygon>>) -> Self {
        Layer {
            tag: tag.into(),
            pieces,
            spin: None,
        }
    }

    /// Rotate pieces by `offset / spin` radians around their centroid.
    pub fn with_spin(mut self, spin: f64) -> Self {
        self.spin = Some(spin);
        self
    }

    /// The timeline tag driving this layer.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Pieces per template cell.
    pub fn pieces(&self) -> &[Vec<Polygon>] {
        &self.pieces
    }
}

/// A piece moved into place for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    /// Index of the layer the piece belongs to
    pub layer: usize,

    /// Index of the template cell the piece was cut with
    pub cell: usize,

    /// The piece's polygons after moving it
    pub polygons: Vec<Polygon>,
}

/// Layers of cut artwork animated by a shared timeline.
#[derive(Clone, Debug)]
pub struct Choreography {
    timeline: Timeline,
    phases: Vec<f64>,
    phase_scale: f64,
    layers: Vec<Layer>,
}

impl Choreography {
    /// A choreography without layers.
    ///
    /// Cell `i` is shifted in time by `phases[i] * phase_scale`.
    pub fn new(timeline: Timeline, phases: Vec<f64>, phase_scale: f64) -> Self {
        Choreography {
            timeline,
            phases,
            phase_scale,
            layers: Vec::new(),
        }
    }

    /// Add a layer painted on top of all previous ones.
    ///
    /// Fails if the layer's tag isn't part of the timeline or if it doesn't have a piece entry
    /// for every phase.
    pub fn with_layer(mut self, layer: Layer) -> Result<Self> {
        self.timeline.tag(&layer.tag)?;
        if layer.pieces.len() != self.phases.len() {
            return Err(Error::PieceCountMismatch {
                expected: self.phases.len(),
                found: layer.pieces.len(),
            });
        }
        debug!(
            tag = %layer.tag,
            pieces = layer.pieces.iter().filter(|p| !p.is_empty()).count(),
            "adding layer"
        );
        self.layers.push(layer);
        Ok(self)
    }

    /// The timeline driving all layers.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Length of one loop of the animation.
    pub fn duration(&self) -> Result<f64> {
        self.timeline.duration()
    }

    /// All non empty pieces placed at time `t`.
    ///
    /// Placements are ordered by cell and, within a cell, by layer. This is the order they
    /// should be painted in.
    pub fn frame(&self, t: f64) -> Result<Vec<Placement>> {
        let mut placements = Vec::new();
        for (cell, phase) in self.phases.iter().enumerate() {
            let time = t + phase * self.phase_scale;
            for (index, layer) in self.layers.iter().enumerate() {
                let piece = &layer.pieces[cell];
                if piece.is_empty() {
                    continue;
                }

                let y = self.timeline.evaluate_looped(&layer.tag, time)?;
                let offset = Point::new(0.0, y);
                let polygons = match layer.spin {
                    Some(spin) => {
                        let center = centroid(piece);
                        piece
                            .iter()
                            .map(|p| p.rotate_around(&center, y / spin).translate(&offset))
                            .collect()
                    }
                    None => piece.iter().map(|p| p.translate(&offset)).collect(),
                };
                placements.push(Placement {
                    layer: index,
                    cell,
                    polygons,
                });
            }
        }
        Ok(placements)
    }
}

/// One uniformly random phase in `[0, 1)` per cell.
pub fn random_phases<R: Rng>(cells: usize, rng: &mut R) -> Vec<f64> {
    (0..cells).map(|_| rng.gen()).collect()
}

/// Area weighted centroid of several polygons.
pub fn centroid(polygons: &[Polygon]) -> Point {
    let area: f64 = polygons.iter().map(Polygon::area).sum();
    if area < f64::EPSILON {
        let count: usize = polygons.iter().map(Polygon::len).sum();
        let sum: Point = polygons.iter().flat_map(|p| p.vertices()).sum();
        return sum / count.max(1) as f64;
    }
    polygons
        .iter()
        .map(|p| p.centroid() * p.area())
        .sum::<Point>()
        / area
}

/// The timeline of the 2024 sketch for a canvas `height` pixels high.
///
/// Heart pieces wait above the canvas, drop in, rest and fall out below. The logo follows
/// once three quarters of the heart's sequence have passed.
pub fn valentine_timeline(height: f64) -> Timeline {
    let heart = TweenSequence::new([
        Tween::constant(-height, 3.0),
        Tween::ease_in_quad(-height, 0.0, 0.5),
        Tween::constant(0.0, 3.0),
        Tween::ease_out_quad(0.0, height, 0.8),
        Tween::constant(height, 2.0),
    ]);
    let heart_duration = heart.duration();
    let logo = TweenSequence::new([
        Tween::constant(-height, 0.75 * heart_duration),
        Tween::ease_in_quad(-height, 0.0, 0.5),
        Tween::constant(0.0, 3.0),
        Tween::ease_out_quad(0.0, height, 0.8),
        Tween::constant(height, 0.5),
    ]);
    Timeline::new().with(HEART_TAG, heart).with(LOGO_TAG, logo)
}
