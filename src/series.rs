//! Point series storage and the ordered mutation protocol.
//!
//! A series is either *explicit* (stored `(x, y)` pairs, kept sorted
//! ascending by X) or *implicit* (stored Y values whose X is derived from
//! the index). The shape is resolved once when a value arrives and never
//! mixed; consumers read through [`PointSeries::points`], which always
//! yields the canonical pair form.
//!
//! Index-based mutations never fail: an out-of-bounds index is a silent
//! no-op, because stale indices are routine during rapid pointer sequences
//! and must not break interaction.

use crate::geom::Point;
use crate::range::Range;

/// Series storage shape.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesData {
    /// Stored `(x, y)` pairs, sorted ascending by X.
    Explicit(Vec<Point>),
    /// Stored Y values with index-derived X. Fixed length under editing.
    Implicit(Vec<f64>),
}

/// An ordered series of editable 2-D points.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSeries {
    data: SeriesData,
}

impl PointSeries {
    /// Create an explicit series from `(x, y)` pairs.
    ///
    /// The pairs are stored as given; supplying them sorted ascending by X
    /// is the caller's contract, as with the host-facing value input.
    pub fn explicit(points: Vec<Point>) -> Self {
        Self {
            data: SeriesData::Explicit(points),
        }
    }

    /// Create an implicit series from Y values.
    pub fn implicit(values: Vec<f64>) -> Self {
        Self {
            data: SeriesData::Implicit(values),
        }
    }

    /// Access the underlying storage.
    pub fn data(&self) -> &SeriesData {
        &self.data
    }

    /// Number of points in the series.
    pub fn len(&self) -> usize {
        match &self.data {
            SeriesData::Explicit(points) => points.len(),
            SeriesData::Implicit(values) => values.len(),
        }
    }

    /// Check whether the series is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check whether the series stores explicit pairs.
    pub fn is_explicit(&self) -> bool {
        matches!(self.data, SeriesData::Explicit(_))
    }

    /// A single point in canonical pair form.
    ///
    /// Implicit X values are the index mapped across `range_x`.
    pub fn point_at(&self, index: usize, range_x: Range) -> Option<Point> {
        match &self.data {
            SeriesData::Explicit(points) => points.get(index).copied(),
            SeriesData::Implicit(values) => {
                let y = *values.get(index)?;
                Some(Point::new(implicit_x(index, values.len(), range_x), y))
            }
        }
    }

    /// All points in canonical pair form, regardless of storage shape.
    pub fn points(&self, range_x: Range) -> Vec<Point> {
        match &self.data {
            SeriesData::Explicit(points) => points.clone(),
            SeriesData::Implicit(values) => values
                .iter()
                .enumerate()
                .map(|(index, y)| Point::new(implicit_x(index, values.len(), range_x), *y))
                .collect(),
        }
    }

    /// Insert a point, keeping ascending-X order. Returns the landing index.
    ///
    /// Implicit series have a fixed length and return `None`.
    pub fn insert(&mut self, x: f64, y: f64, range_x: Range, range_y: Range) -> Option<usize> {
        let x = range_x.clamp(x);
        let index = match &self.data {
            SeriesData::Explicit(points) => points.partition_point(|point| point.x < x),
            SeriesData::Implicit(_) => return None,
        };
        self.insert_at(index, x, y, range_x, range_y)
    }

    /// Insert a point at a precomputed index, clamping it into place.
    ///
    /// The coordinates are clamped to the axis ranges and X additionally to
    /// the would-be neighbors at `index`, so ascending-X order is preserved
    /// for any index produced by a monotonic scan. Implicit series return
    /// `None`; an index past the end appends.
    pub fn insert_at(
        &mut self,
        index: usize,
        x: f64,
        y: f64,
        range_x: Range,
        range_y: Range,
    ) -> Option<usize> {
        let SeriesData::Explicit(points) = &mut self.data else {
            return None;
        };
        let index = index.min(points.len());
        let mut x = range_x.clamp(x);
        if index > 0 {
            x = x.max(points[index - 1].x);
        }
        if index < points.len() {
            x = x.min(points[index].x);
        }
        points.insert(index, Point::new(x, range_y.clamp(y)));
        Some(index)
    }

    /// Delete one point. No-op when the index is out of bounds.
    pub fn remove_at(&mut self, index: usize) {
        match &mut self.data {
            SeriesData::Explicit(points) => {
                if index < points.len() {
                    points.remove(index);
                }
            }
            SeriesData::Implicit(values) => {
                if index < values.len() {
                    values.remove(index);
                }
            }
        }
    }

    /// Update one point in place, clamped to the axis ranges.
    ///
    /// Explicit X is further clamped between the immediate neighbors so the
    /// series stays sorted no matter what the caller passes. Implicit series
    /// only take the Y value. No-op when the index is out of bounds.
    pub fn update_at(&mut self, index: usize, x: f64, y: f64, range_x: Range, range_y: Range) {
        match &mut self.data {
            SeriesData::Explicit(points) => {
                if index >= points.len() {
                    return;
                }
                let mut x = range_x.clamp(x);
                if index > 0 {
                    x = x.max(points[index - 1].x);
                }
                if index + 1 < points.len() {
                    x = x.min(points[index + 1].x);
                }
                points[index] = Point::new(x, range_y.clamp(y));
            }
            SeriesData::Implicit(values) => {
                if let Some(value) = values.get_mut(index) {
                    *value = range_y.clamp(y);
                }
            }
        }
    }

    /// X bounds the point at `index` may move within.
    ///
    /// Interior points are bounded by their neighbors' X values (open side);
    /// series ends fall back to the axis bounds (closed side). The flags
    /// report whether each bound is a neighbor rather than an axis bound.
    pub(crate) fn drag_bounds(&self, index: usize, range_x: Range) -> (f64, f64, bool, bool) {
        let SeriesData::Explicit(points) = &self.data else {
            return (range_x.min, range_x.max, false, false);
        };
        let (min, min_is_neighbor) = if index > 0 {
            match points.get(index - 1) {
                Some(left) => (left.x, true),
                None => (range_x.min, false),
            }
        } else {
            (range_x.min, false)
        };
        let (max, max_is_neighbor) = match points.get(index + 1) {
            Some(right) => (right.x, true),
            None => (range_x.max, false),
        };
        (min, max, min_is_neighbor, max_is_neighbor)
    }
}

impl Default for PointSeries {
    fn default() -> Self {
        Self::explicit(Vec::new())
    }
}

fn implicit_x(index: usize, len: usize, range_x: Range) -> f64 {
    if len < 2 {
        return range_x.min;
    }
    range_x.lerp(index as f64 / (len - 1) as f64)
}
