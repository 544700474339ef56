//! Errors raised while composing a sketch.
//!
//! Everything in here is a setup mistake: a polygon with too few vertices, a timeline queried
//! for a tag nobody registered, a malformed resolution string. None of them happen per frame
//! once a sketch has been composed successfully.

use thiserror::Error;

/// Error type of this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A polygon needs at least three vertices.
    #[error("a polygon needs at least 3 vertices, got {vertices}")]
    InvalidPolygon {
        /// Number of vertices that were given
        vertices: usize,
    },

    /// The timeline has no sequence registered under this tag.
    #[error("no tween sequence registered for tag `{0}`")]
    UnknownTag(String),

    /// The timeline has no sequences at all, so it has no duration.
    #[error("timeline is empty")]
    EmptyTimeline,

    /// A resolution string wasn't of the form `<width>x<height>`.
    #[error("invalid resolution `{0}`, expected <width>x<height>")]
    InvalidResolution(String),

    /// A layer's pieces don't line up with the choreography's phases.
    #[error("layer has {found} pieces but the choreography has {expected} phases")]
    PieceCountMismatch {
        /// Number of phases
        expected: usize,
        /// Number of pieces in the layer
        found: usize,
    },
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
