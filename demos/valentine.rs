//! Renders the valentine sketch as raw RGBA frames on stdout.
//!
//! ```sh
//! cargo run --release --example valentine | \
//!     ffmpeg -f rawvideo -pix_fmt rgba -s 720x720 -r 60 -i - valentine.mp4
//! ```

use std::f64::consts::TAU;
use std::io::{self, Write};

use anyhow::{anyhow, Context};
use tiny_skia::{
    Color, FillRule, GradientStop, LinearGradient, Paint, PathBuilder, Pixmap, Rect, Shader,
    SpreadMode, Transform,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use valentine::choreography::{
    random_phases, valentine_timeline, Choreography, Layer, Placement, HEART_TAG, LOGO_TAG,
};
use valentine::config::SketchConfig;
use valentine::grid::{cell_count, create_templates, cut};
use valentine::zoom::{bounds_of, zoom_to};
use valentine::{Point, Polygon};

const BACKGROUND: [[u8; 3]; 2] = [[0xec, 0xe9, 0xe6], [0xff, 0xff, 0xff]];
const PIECES: [[u8; 3]; 2] = [[0xec, 0x00, 0x8c], [0xfc, 0x67, 0x67]];

/// Vertical gradient from the top to the bottom of the canvas
fn gradient(height: f32, [top, bottom]: [[u8; 3]; 2]) -> anyhow::Result<Shader<'static>> {
    LinearGradient::new(
        tiny_skia::Point::from_xy(0.0, 0.0),
        tiny_skia::Point::from_xy(0.0, height),
        vec![
            GradientStop::new(0.0, Color::from_rgba8(top[0], top[1], top[2], 0xff)),
            GradientStop::new(1.0, Color::from_rgba8(bottom[0], bottom[1], bottom[2], 0xff)),
        ],
        SpreadMode::Pad,
        Transform::identity(),
    )
    .context("degenerate gradient")
}

/// The classic parametric heart, pointing down in image coordinates
fn heart(samples: usize) -> anyhow::Result<Polygon> {
    Ok(Polygon::new((0..samples).map(|i| {
        let t = TAU * i as f64 / samples as f64;
        let x = 16.0 * t.sin().powi(3);
        let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
        Point::new(x, -y)
    }))?)
}

/// An eight pointed star
fn logo() -> anyhow::Result<Polygon> {
    Ok(Polygon::new((0..16).map(|i| {
        let angle = TAU * i as f64 / 16.0;
        let radius = if i % 2 == 0 { 1.0 } else { 0.45 };
        Point::new(radius * angle.cos(), radius * angle.sin())
    }))?)
}

fn fill(pixmap: &mut Pixmap, polygon: &Polygon, paint: &Paint) {
    let mut builder = PathBuilder::new();
    let mut vertices = polygon.vertices().iter();
    if let Some(first) = vertices.next() {
        builder.move_to(first.x as f32, first.y as f32);
    }
    for p in vertices {
        builder.line_to(p.x as f32, p.y as f32);
    }
    builder.close();
    let Some(path) = builder.finish() else {
        return;
    };
    pixmap.fill_path(&path, paint, FillRule::Winding, Transform::identity(), None);
}

struct Painter {
    canvas: Rect,
    background: Paint<'static>,
    pieces: Paint<'static>,
}

impl Painter {
    fn new(width: u32, height: u32) -> anyhow::Result<Painter> {
        let canvas = Rect::from_xywh(0.0, 0.0, width as f32, height as f32)
            .context("empty canvas")?;
        Ok(Painter {
            canvas,
            background: Paint {
                shader: gradient(height as f32, BACKGROUND)?,
                ..Paint::default()
            },
            pieces: Paint {
                shader: gradient(height as f32, PIECES)?,
                anti_alias: true,
                ..Paint::default()
            },
        })
    }

    fn render(&self, pixmap: &mut Pixmap, placements: &[Placement]) {
        pixmap.fill_rect(self.canvas, &self.background, Transform::identity(), None);
        for polygon in placements.iter().flat_map(|p| &p.polygons) {
            fill(pixmap, polygon, &self.pieces);
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = SketchConfig::from_env()?;
    let resolution = config.resolution;
    let mut rng = config.rng();

    let templates = create_templates(resolution, config.grid, config.jitter, &mut rng);
    info!(cells = templates.len(), expected = cell_count(config.grid), "templates");

    let heart = heart(256)?;
    let heart_zoom = zoom_to(
        &bounds_of([&heart]).context("heart without bounds")?,
        resolution,
        config.padding,
    );
    let heart = heart_zoom.apply(&heart);

    let logo = logo()?;
    let logo_zoom = zoom_to(
        &bounds_of([&logo]).context("logo without bounds")?,
        resolution,
        4.0 * config.padding,
    );
    let logo = logo_zoom.apply(&logo);

    let phases = random_phases(templates.len(), &mut rng);
    let choreography = Choreography::new(
        valentine_timeline(f64::from(resolution.height)),
        phases,
        3.0,
    )
    .with_layer(Layer::new(HEART_TAG, cut(&[heart], &templates)).with_spin(200.0))?
    .with_layer(Layer::new(LOGO_TAG, cut(&[logo], &templates)))?;

    let mut pixmap = Pixmap::new(resolution.width, resolution.height)
        .ok_or_else(|| anyhow!("can't allocate a {resolution} canvas"))?;
    let painter = Painter::new(resolution.width, resolution.height)?;
    let duration = choreography.duration()?;
    let frame_time = config.frame_time();
    info!(%resolution, duration, "rendering");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut frames = 0usize;
    let mut t = 0.0;
    while t < duration {
        painter.render(&mut pixmap, &choreography.frame(t)?);
        out.write_all(pixmap.data())?;
        frames += 1;
        t += frame_time;
    }
    out.flush()?;
    info!(frames, "done");
    Ok(())
}
