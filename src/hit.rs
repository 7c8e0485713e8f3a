//! Pointer hit testing against a point series.

use crate::geom::ScreenPoint;
use crate::range::Range;
use crate::series::PointSeries;
use crate::transform::Transform;

/// Default pick radius in pixels, before scaling by the UI pixel scale.
pub const HIT_RADIUS: f32 = 4.0;

/// Find the series point nearest the pointer, within a pixel radius.
///
/// Distances are compared squared; the strict comparison means the lowest
/// index wins when two points are equally close. Returns `None` when no
/// point is within `radius` pixels.
pub fn find_nearest(
    series: &PointSeries,
    transform: &Transform,
    range_x: Range,
    pointer: ScreenPoint,
    radius: f32,
) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (index, point) in series.points(range_x).iter().enumerate() {
        let Some(screen) = transform.data_to_screen(*point) else {
            continue;
        };
        let distance_sq = screen.distance_sq(pointer);
        if best.is_none_or(|(_, best_sq)| distance_sq < best_sq) {
            best = Some((index, distance_sq));
        }
    }
    match best {
        Some((index, distance_sq)) if distance_sq < radius * radius => Some(index),
        _ => None,
    }
}

/// Find the index at which a point under the pointer would be inserted.
///
/// Scans in ascending-X order and returns the index of the first point whose
/// pixel X is at or past the pointer; past the last point, returns the
/// series length (append).
pub fn find_insertion_index(
    series: &PointSeries,
    transform: &Transform,
    range_x: Range,
    pointer: ScreenPoint,
) -> usize {
    let points = series.points(range_x);
    for (index, point) in points.iter().enumerate() {
        if let Some(screen_x) = transform.x_to_screen(point.x)
            && screen_x >= pointer.x
        {
            return index;
        }
    }
    points.len()
}
