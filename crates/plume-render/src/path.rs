//! Path smoothing for stroke rendering.
//!
//! Captured strokes are polylines; drawing them raw looks jagged at pointer
//! sampling rates. This module runs a cardinal spline through the points
//! (tension 0.5, the Catmull-Rom case) and emits cubic Béziers that pass
//! through every captured point, so smoothing never moves the data, only
//! rounds the corners between samples.

use kurbo::{BezPath, Point, Vec2};

/// Spline tension used for stroke smoothing.
pub const SMOOTHING_TENSION: f64 = 0.5;

/// Build a smooth path through `points`.
///
/// Two points degenerate to a straight line, one point to a bare `MoveTo`
/// (the renderer draws a dot for those), and an empty slice to an empty
/// path. The curve interpolates every input point.
pub fn smooth_path(points: &[Point], tension: f64) -> BezPath {
    let mut path = BezPath::new();

    match points {
        [] => path,
        [single] => {
            path.move_to(*single);
            path
        }
        [a, b] => {
            path.move_to(*a);
            path.line_to(*b);
            path
        }
        _ => {
            path.move_to(points[0]);
            for i in 0..points.len() - 1 {
                let start = points[i];
                let end = points[i + 1];
                let c1 = start + tangent(points, i, tension) / 3.0;
                let c2 = end - tangent(points, i + 1, tension) / 3.0;
                path.curve_to(c1, c2, end);
            }
            path
        }
    }
}

/// Spline tangent at point `i`, one-sided at the ends.
fn tangent(points: &[Point], i: usize, tension: f64) -> Vec2 {
    let n = points.len();
    if i == 0 {
        (points[1] - points[0]) * tension
    } else if i == n - 1 {
        (points[n - 1] - points[n - 2]) * tension
    } else {
        (points[i + 1] - points[i - 1]) * tension
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_empty_and_single() {
        assert!(smooth_path(&[], SMOOTHING_TENSION).elements().is_empty());

        let dot = smooth_path(&pts(&[(3.0, 4.0)]), SMOOTHING_TENSION);
        assert_eq!(dot.elements(), &[PathEl::MoveTo(Point::new(3.0, 4.0))]);
    }

    #[test]
    fn test_two_points_is_a_line() {
        let path = smooth_path(&pts(&[(0.0, 0.0), (10.0, 5.0)]), SMOOTHING_TENSION);
        assert_eq!(
            path.elements(),
            &[
                PathEl::MoveTo(Point::new(0.0, 0.0)),
                PathEl::LineTo(Point::new(10.0, 5.0)),
            ]
        );
    }

    #[test]
    fn test_interpolates_every_point() {
        let points = pts(&[(0.0, 0.0), (4.0, 8.0), (9.0, 3.0), (15.0, 6.0)]);
        let path = smooth_path(&points, SMOOTHING_TENSION);

        // One MoveTo plus a curve per segment.
        assert_eq!(path.elements().len(), points.len());

        let mut visited = vec![match path.elements()[0] {
            PathEl::MoveTo(p) => p,
            other => panic!("expected MoveTo, got {other:?}"),
        }];
        for el in &path.elements()[1..] {
            match el {
                PathEl::CurveTo(_, _, end) => visited.push(*end),
                other => panic!("expected CurveTo, got {other:?}"),
            }
        }
        assert_eq!(visited, points);
    }

    #[test]
    fn test_colinear_points_stay_on_the_line() {
        let points = pts(&[(0.0, 2.0), (3.0, 2.0), (7.0, 2.0), (12.0, 2.0)]);
        let path = smooth_path(&points, SMOOTHING_TENSION);

        for el in path.elements() {
            match el {
                PathEl::MoveTo(p) => assert_eq!(p.y, 2.0),
                PathEl::CurveTo(c1, c2, end) => {
                    assert_eq!(c1.y, 2.0);
                    assert_eq!(c2.y, 2.0);
                    assert_eq!(end.y, 2.0);
                }
                other => panic!("unexpected element {other:?}"),
            }
        }
    }
}
