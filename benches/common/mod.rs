pub mod samples;
pub mod split;
