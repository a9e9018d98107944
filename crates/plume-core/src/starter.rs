//! Decorative starter scene: mountains, a smiling sun, and flowers.
//!
//! Purely cosmetic initial content for a fresh sketchpad. The generator
//! only builds strokes; feeding them through
//! [`Sketchpad::seed_starter`](crate::sketchpad::Sketchpad::seed_starter)
//! commits the whole scene as one undoable history entry, the same way a
//! finished gesture commits. Geometry is deterministic for a given seed.

use std::f64::consts::PI;

use kurbo::Point;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::stroke::{Color, Stroke, StrokeKind};

/// Width of every starter stroke, in logical units.
const STARTER_WIDTH: f64 = 2.0;

/// Generate the starter scene for a surface of the given size.
///
/// The layout scales with the smaller surface dimension and sits around
/// the surface center: two jagged mountain ranges, a wobbly sun with rays
/// and a face in the upper right, and three flowers along the bottom.
pub fn generate(width: f64, height: f64, seed: u64) -> Vec<Stroke> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut strokes = Vec::new();

    let center = Point::new(width / 2.0, height / 2.0);
    let base_size = width.min(height) * 0.2;

    mountains(&mut strokes, &mut rng, center, base_size);
    sun(&mut strokes, &mut rng, center, base_size);
    flowers(&mut strokes, &mut rng, center, base_size);

    strokes
}

fn pencil(first: Point) -> Stroke {
    Stroke::begin(StrokeKind::Pencil, Color::INK, STARTER_WIDTH, first)
}

/// Build one pencil stroke through a non-empty point list.
fn pencil_polyline(points: &[Point]) -> Stroke {
    let mut stroke = pencil(points[0]);
    for &point in &points[1..] {
        stroke.push_point(point);
    }
    stroke
}

fn mountains(strokes: &mut Vec<Stroke>, rng: &mut SmallRng, center: Point, base_size: f64) {
    // (baseline y, peak height, peak count)
    let ranges = [
        (center.y + base_size * 0.3, base_size * 0.35, 2usize),
        (center.y + base_size * 0.35, base_size * 0.25, 3usize),
    ];

    for (base_y, height, peaks) in ranges {
        let segments_per_peak = 6;
        let total_points = peaks * segments_per_peak;
        let width = base_size * 1.5;
        let start_x = center.x - width / 2.0;

        let mut stroke = pencil(Point::new(start_x, base_y));

        for i in 0..=total_points {
            let x = start_x + width * i as f64 / total_points as f64;
            let progress = i as f64 / segments_per_peak as f64;
            let within_peak = progress - progress.floor();

            let height_variation = rng.gen_range(0.85..1.0) * height;
            // Triangular peaks: linear up to the midpoint, linear down.
            let y = if within_peak < 0.5 {
                base_y - within_peak * 2.0 * height_variation
            } else {
                base_y - (1.0 - within_peak) * 2.0 * height_variation
            };

            let noise_x = rng.gen_range(-1.0..1.0);
            let noise_y = rng.gen_range(-1.0..1.0);
            stroke.push_point(Point::new(x + noise_x, y + noise_y));
        }

        stroke.push_point(Point::new(start_x + width, base_y));
        strokes.push(stroke);
    }
}

fn sun(strokes: &mut Vec<Stroke>, rng: &mut SmallRng, center: Point, base_size: f64) {
    let sun_center = Point::new(center.x + base_size * 0.8, center.y - base_size * 0.4);
    let radius = base_size * 0.15;

    // Wobbly outline.
    let outline: Vec<Point> = (0..=32)
        .map(|i| {
            let angle = i as f64 / 32.0 * PI * 2.0;
            let wobble = rng.gen_range(-2.5..2.5);
            Point::new(
                sun_center.x + angle.cos() * (radius + wobble),
                sun_center.y + angle.sin() * (radius + wobble),
            )
        })
        .collect();
    strokes.push(pencil_polyline(&outline));

    // Uneven rays.
    for i in 0..8 {
        let angle = i as f64 / 8.0 * PI * 2.0;
        let ray_length = radius * rng.gen_range(0.6..1.0);
        let wobble_x = rng.gen_range(-2.0..2.0);
        let wobble_y = rng.gen_range(-2.0..2.0);

        let mut ray = pencil(Point::new(
            sun_center.x + angle.cos() * radius + wobble_x,
            sun_center.y + angle.sin() * radius + wobble_y,
        ));
        ray.push_point(Point::new(
            sun_center.x + angle.cos() * (radius + ray_length) + wobble_x,
            sun_center.y + angle.sin() * (radius + ray_length) + wobble_y,
        ));
        strokes.push(ray);
    }

    // Slightly asymmetric smile.
    let smile: Vec<Point> = (0..=16)
        .map(|i| {
            let angle = PI * 0.2 + i as f64 / 16.0 * PI * 0.6;
            let wobble = rng.gen_range(-1.5..1.5);
            Point::new(
                sun_center.x + angle.cos() * (radius * 0.5) + wobble,
                sun_center.y + angle.sin() * (radius * 0.5) + radius * 0.2 + wobble,
            )
        })
        .collect();
    strokes.push(pencil_polyline(&smile));

    // Uneven eyes.
    let mut left_eye = pencil(Point::new(
        sun_center.x - radius * 0.2,
        sun_center.y - radius * 0.2,
    ));
    left_eye.push_point(Point::new(
        sun_center.x - radius * 0.1,
        sun_center.y - radius * 0.2 + rng.gen_range(-1.0..1.0),
    ));
    strokes.push(left_eye);

    let mut right_eye = pencil(Point::new(
        sun_center.x + radius * 0.1,
        sun_center.y - radius * 0.2,
    ));
    right_eye.push_point(Point::new(
        sun_center.x + radius * 0.2,
        sun_center.y - radius * 0.2 + rng.gen_range(-1.0..1.0),
    ));
    strokes.push(right_eye);
}

fn flowers(strokes: &mut Vec<Stroke>, rng: &mut SmallRng, center: Point, base_size: f64) {
    let positions = [
        Point::new(center.x - base_size, center.y + base_size * 0.4),
        Point::new(center.x - base_size * 0.3, center.y + base_size * 0.5),
        Point::new(center.x + base_size * 0.4, center.y + base_size * 0.45),
    ];

    for pos in positions {
        // Slightly curved stem.
        let stem_height = base_size * rng.gen_range(0.2..0.3);
        let stem_curve = rng.gen_range(-5.0..5.0);

        let stem: Vec<Point> = (0..=8)
            .map(|i| {
                let t = i as f64 / 8.0;
                Point::new(pos.x + (t * PI).sin() * stem_curve, pos.y - stem_height * t)
            })
            .collect();
        strokes.push(pencil_polyline(&stem));

        // Uneven petals fanning out from the stem top.
        let petal_count = rng.gen_range(6..9);
        let flower_y = pos.y - stem_height;

        for i in 0..petal_count {
            let angle = i as f64 / petal_count as f64 * PI * 2.0;
            let petal_length = base_size * rng.gen_range(0.06..0.1);
            let wobble_x = rng.gen_range(-2.0..2.0);
            let wobble_y = rng.gen_range(-2.0..2.0);

            let mut petal = pencil(Point::new(pos.x + wobble_x, flower_y + wobble_y));
            petal.push_point(Point::new(
                pos.x + angle.cos() * petal_length + wobble_x,
                flower_y + angle.sin() * petal_length + wobble_y,
            ));
            strokes.push(petal);
        }
    }
}
