#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod bounding_box;
pub mod choreography;
pub mod config;
pub mod error;
pub mod grid;
pub mod linesegment;
pub mod polygon;
pub mod split;
pub mod timeline;
pub mod tween;
pub mod zoom;

pub use crate::error::{Error, Result};
pub use crate::linesegment::{intersection, LineSegment, Point};
pub use crate::polygon::Polygon;
pub use crate::split::split;
pub use crate::timeline::Timeline;
pub use crate::tween::{Easing, Tween, TweenSequence};
