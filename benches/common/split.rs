use criterion::{black_box, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use valentine::grid::{create_templates, cut, Grid};
use valentine::split::{clip, split as split_polygon};
use crate::common::samples::{LINES, POLYGONS, RESOLUTION, TEMPLATES, TIMELINE};

pub fn split(c: &mut Criterion) {
    c.bench_function("split", |b| {
        b.iter(|| {
            for polygon in POLYGONS.iter() {
                for line in LINES.iter() {
                    black_box(split_polygon(polygon, line));
                }
            }
        })
    });
}

pub fn clip_cells(c: &mut Criterion) {
    c.bench_function("clip", |b| {
        b.iter(|| {
            for template in TEMPLATES.iter() {
                black_box(clip(&POLYGONS[2], template));
            }
        })
    });
}

pub fn templates(c: &mut Criterion) {
    c.bench_function("templates", |b| {
        b.iter(|| {
            black_box(create_templates(
                RESOLUTION,
                Grid::new(7, 7),
                0.4,
                &mut StdRng::seed_from_u64(1337),
            ))
        })
    });
}

pub fn cut_artwork(c: &mut Criterion) {
    c.bench_function("cut", |b| {
        b.iter(|| black_box(cut(&POLYGONS, &TEMPLATES)))
    });
}

pub fn evaluate(c: &mut Criterion) {
    c.bench_function("evaluate", |b| {
        b.iter(|| {
            for i in 0..100 {
                let t = i as f64 * 0.1;
                black_box(TIMELINE.evaluate_looped("a", t).unwrap());
                black_box(TIMELINE.evaluate_looped("b", t).unwrap());
            }
        })
    });
}

pub fn all(c: &mut Criterion) {
    split(c);
    clip_cells(c);
    templates(c);
    cut_artwork(c);
    evaluate(c);
}
