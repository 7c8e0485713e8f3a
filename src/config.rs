//! Editor configuration supplied by the host.

use crate::axis::AxisScale;
use crate::geom::ScreenRect;
use crate::range::Range;
use crate::style::Theme;
use crate::transform::Transform;

/// Read-only editor configuration.
///
/// Ranges follow the `min < max` caller contract of [`Range`]. `px_scale` is
/// the UI pixel scale (device pixel ratio); it is explicit per instance so
/// editors on differently scaled surfaces can coexist in one process.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    range_x: Range,
    range_y: Range,
    scale_x: AxisScale,
    scale_y: AxisScale,
    origin: Option<f64>,
    pips: bool,
    px_scale: f32,
}

impl EditorConfig {
    /// Create a configuration with unit ranges and linear axes.
    pub fn new() -> Self {
        Self {
            range_x: Range::default(),
            range_y: Range::default(),
            scale_x: AxisScale::Linear,
            scale_y: AxisScale::Linear,
            origin: Some(0.0),
            pips: true,
            px_scale: 1.0,
        }
    }

    /// Set the logical X range.
    pub fn with_range_x(mut self, range: Range) -> Self {
        self.range_x = range;
        self
    }

    /// Set the logical Y range.
    pub fn with_range_y(mut self, range: Range) -> Self {
        self.range_y = range;
        self
    }

    /// Set the X axis scale.
    pub fn with_scale_x(mut self, scale: AxisScale) -> Self {
        self.scale_x = scale;
        self
    }

    /// Set the Y axis scale.
    pub fn with_scale_y(mut self, scale: AxisScale) -> Self {
        self.scale_y = scale;
        self
    }

    /// Set the baseline Y value the path fills against, or `None` to disable.
    pub fn with_origin(mut self, origin: Option<f64>) -> Self {
        self.origin = origin;
        self
    }

    /// Toggle the min/max axis labels.
    pub fn with_pips(mut self, pips: bool) -> Self {
        self.pips = pips;
        self
    }

    /// Set the UI pixel scale.
    pub fn with_px_scale(mut self, px_scale: f32) -> Self {
        self.px_scale = px_scale;
        self
    }

    /// Access the logical X range.
    pub fn range_x(&self) -> Range {
        self.range_x
    }

    /// Access the logical Y range.
    pub fn range_y(&self) -> Range {
        self.range_y
    }

    /// Access the X axis scale.
    pub fn scale_x(&self) -> AxisScale {
        self.scale_x
    }

    /// Access the Y axis scale.
    pub fn scale_y(&self) -> AxisScale {
        self.scale_y
    }

    /// Access the fill baseline.
    pub fn origin(&self) -> Option<f64> {
        self.origin
    }

    /// Check whether pips are shown.
    pub fn pips(&self) -> bool {
        self.pips
    }

    /// Access the UI pixel scale.
    pub fn px_scale(&self) -> f32 {
        self.px_scale
    }

    /// The plot rectangle inside a client area of the given size.
    ///
    /// Horizontal margin is the theme padding; the vertical margin adds a
    /// hairline band for the path stroke and pip labels.
    pub fn plot_rect(&self, theme: &Theme, width: f32, height: f32) -> ScreenRect {
        ScreenRect::plot_area(
            width,
            height,
            theme.padding,
            theme.padding + 2.0 * self.px_scale,
        )
    }

    /// Build the transform for a client area of the given size.
    ///
    /// Recomputed on every call so the mapping always reflects the current
    /// ranges and size.
    pub fn transform(&self, theme: &Theme, width: f32, height: f32) -> Option<Transform> {
        Transform::new(
            self.range_x,
            self.range_y,
            self.scale_x,
            self.scale_y,
            self.plot_rect(theme, width, height),
        )
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::new()
    }
}
