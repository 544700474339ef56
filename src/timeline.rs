//! Named tween sequences sharing one clock.

use std::collections::BTreeMap;
use tracing::debug;

use crate::error::{Error, Result};
use crate::tween::TweenSequence;

/// Maps tags to tween sequences.
///
/// Every frame the renderer queries the tags it animates at the same time value (optionally
/// shifted per animated piece).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timeline {
    tags: BTreeMap<String, TweenSequence>,
}

impl Timeline {
    /// An empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `sequence` under `tag`, replacing any sequence registered before.
    pub fn add(&mut self, tag: impl Into<String>, sequence: TweenSequence) {
        let tag = tag.into();
        debug!(%tag, duration = sequence.duration(), "adding tween sequence");
        self.tags.insert(tag, sequence);
    }

    /// Builder style [`Timeline::add`].
    pub fn with(mut self, tag: impl Into<String>, sequence: TweenSequence) -> Self {
        self.add(tag, sequence);
        self
    }

    /// The sequence registered under `tag`.
    pub fn tag(&self, tag: &str) -> Result<&TweenSequence> {
        self.tags
            .get(tag)
            .ok_or_else(|| Error::UnknownTag(tag.to_string()))
    }

    /// All registered tags in lexicographic order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.keys().map(String::as_str)
    }

    /// Length of the longest sequence.
    pub fn duration(&self) -> Result<f64> {
        self.tags
            .values()
            .map(TweenSequence::duration)
            .reduce(f64::max)
            .ok_or(Error::EmptyTimeline)
    }

    /// Value of `tag`'s sequence at time `t`.
    pub fn evaluate(&self, tag: &str, t: f64) -> Result<f64> {
        Ok(self.tag(tag)?.evaluate(t))
    }

    /// Value of `tag`'s sequence at time `t` wrapped into the timeline's duration.
    ///
    /// Used for looping animations where pieces are shifted in time by different phases.
    pub fn evaluate_looped(&self, tag: &str, t: f64) -> Result<f64> {
        let sequence = self.tag(tag)?;
        let duration = self.duration()?;
        if duration <= 0.0 {
            return Ok(sequence.evaluate(0.0));
        }
        Ok(sequence.evaluate(t.rem_euclid(duration)))
    }
}
