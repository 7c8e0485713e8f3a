//! Coordinate transforms between data and screen space.
//!
//! Transforms are cheap value types recomputed from the current ranges and
//! plot rectangle on every use; nothing is cached across a resize or a range
//! change. A zero-span axis range yields an undefined mapping — callers own
//! that precondition.

use crate::axis::AxisScale;
use crate::geom::{Point, ScreenPoint, ScreenRect};
use crate::range::Range;

/// One affine axis mapping in scaled value space.
///
/// The domain-to-unit and unit-to-pixel maps are collapsed into a single
/// multiply-add, since two affine maps compose into one.
#[derive(Debug, Clone, Copy)]
struct AxisMap {
    scale: f64,
    offset: f64,
    value_scale: AxisScale,
}

impl AxisMap {
    fn new(domain: Range, target_min: f64, target_max: f64, value_scale: AxisScale) -> Option<Self> {
        let d0 = value_scale.map_value(domain.min)?;
        let d1 = value_scale.map_value(domain.max)?;
        let scale = (target_max - target_min) / (d1 - d0);
        let offset = target_min - d0 * scale;
        Some(Self {
            scale,
            offset,
            value_scale,
        })
    }

    fn forward(&self, value: f64) -> Option<f64> {
        Some(self.value_scale.map_value(value)? * self.scale + self.offset)
    }

    fn inverse(&self, pixel: f64) -> Option<f64> {
        self.value_scale.invert_value((pixel - self.offset) / self.scale)
    }
}

/// Transform from data coordinates into screen coordinates.
#[derive(Debug, Clone)]
pub struct Transform {
    x: AxisMap,
    y: AxisMap,
    rect: ScreenRect,
}

impl Transform {
    /// Create a transform mapping the given ranges onto a plot rectangle.
    ///
    /// Returns `None` if the rectangle has no area or an axis range is not
    /// representable under its scale (log scale with non-positive bounds).
    /// The Y target interval is reversed: the range maximum maps to the top
    /// edge because pixel Y grows downward.
    pub fn new(
        x_range: Range,
        y_range: Range,
        x_scale: AxisScale,
        y_scale: AxisScale,
        rect: ScreenRect,
    ) -> Option<Self> {
        if !rect.is_valid() {
            return None;
        }
        let x = AxisMap::new(x_range, rect.min.x as f64, rect.max.x as f64, x_scale)?;
        let y = AxisMap::new(y_range, rect.max.y as f64, rect.min.y as f64, y_scale)?;
        Some(Self { x, y, rect })
    }

    /// Access the plot rectangle this transform maps onto.
    pub fn rect(&self) -> ScreenRect {
        self.rect
    }

    /// Map a data X value into screen space.
    pub fn x_to_screen(&self, x: f64) -> Option<f32> {
        self.x.forward(x).map(|pixel| pixel as f32)
    }

    /// Map a data Y value into screen space.
    pub fn y_to_screen(&self, y: f64) -> Option<f32> {
        self.y.forward(y).map(|pixel| pixel as f32)
    }

    /// Map a data point into screen space.
    pub fn data_to_screen(&self, point: Point) -> Option<ScreenPoint> {
        Some(ScreenPoint::new(
            self.x_to_screen(point.x)?,
            self.y_to_screen(point.y)?,
        ))
    }

    /// Map a screen point into data space.
    pub fn screen_to_data(&self, point: ScreenPoint) -> Option<Point> {
        Some(Point::new(
            self.x.inverse(point.x as f64)?,
            self.y.inverse(point.y as f64)?,
        ))
    }
}
