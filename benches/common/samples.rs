use once_cell::sync::Lazy;
use std::f64::consts::TAU;
use valentine::grid::{create_templates, Grid, Resolution};
use valentine::{LineSegment, Point, Polygon, Timeline, Tween, TweenSequence};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub static RESOLUTION: Resolution = Resolution { width: 720, height: 720 };

/// Spiky star around the canvas center
fn star(spikes: usize) -> Polygon {
    let center = Point::new(360.0, 360.0);
    Polygon::new((0..2 * spikes).map(|i| {
        let angle = TAU * i as f64 / (2 * spikes) as f64;
        let radius = if i % 2 == 0 { 300.0 } else { 120.0 };
        center + Point::new(radius * angle.cos(), radius * angle.sin())
    }))
    .unwrap()
}

pub static POLYGONS: Lazy<Vec<Polygon>> = Lazy::new(|| {
    vec![
        Polygon::from_coords(&[[60.0, 60.0], [660.0, 60.0], [660.0, 660.0], [60.0, 660.0]]).unwrap(),
        Polygon::from_coords(&[
            [60.0, 60.0],
            [660.0, 60.0],
            [660.0, 660.0],
            [460.0, 660.0],
            [460.0, 260.0],
            [260.0, 260.0],
            [260.0, 660.0],
            [60.0, 660.0],
        ])
        .unwrap(),
        star(5),
        star(24),
    ]
});

pub static LINES: Lazy<Vec<LineSegment>> = Lazy::new(|| {
    vec![
        LineSegment::from([[0.0, 360.0], [720.0, 360.0]]),
        LineSegment::from([[360.0, 0.0], [340.0, 720.0]]),
        LineSegment::from([[0.0, 0.0], [720.0, 700.0]]),
        LineSegment::from([[0.0, 500.0], [720.0, 420.0]]),
    ]
});

pub static TEMPLATES: Lazy<Vec<Polygon>> = Lazy::new(|| {
    create_templates(RESOLUTION, Grid::new(7, 7), 0.4, &mut StdRng::seed_from_u64(1337))
});

pub static TIMELINE: Lazy<Timeline> = Lazy::new(|| {
    Timeline::new()
        .with(
            "a",
            TweenSequence::new([
                Tween::constant(-720.0, 3.0),
                Tween::ease_in_quad(-720.0, 0.0, 0.5),
                Tween::constant(0.0, 3.0),
                Tween::ease_out_quad(0.0, 720.0, 0.8),
            ]),
        )
        .with("b", TweenSequence::new([Tween::linear(0.0, 1.0, 2.0)]))
});
