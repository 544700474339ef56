//!
//! Profiles the split benches with pprof and writes `profile.pb` per benchmark,
//! e.g. `go tool pprof -http 127.0.0.1:8000 target/criterion/split/profile/profile.pb`.
//!
//! Needs to be called with `--profile-time=<seconds>`
//!

use criterion::{criterion_group, criterion_main, Criterion};
use pprof::criterion::{PProfProfiler, Output};
mod common;

criterion_group!{
    name = benches;
    config = Criterion::default()
    .with_profiler(PProfProfiler::new(100, Output::Protobuf))
    ;
    targets = common::split::all
}
criterion_main!(benches);