//! Visual theme for the editor.

use crate::render::Color;

/// Colors and metrics used by the frame builder.
///
/// Lengths are logical pixels; the frame builder multiplies stroke widths
/// and marker radii by the configured pixel scale.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Plot margin inside the client area.
    pub padding: f32,
    /// Pip label font size.
    pub font_size: f32,
    /// Path stroke width.
    pub line_width: f32,
    /// Point marker radius.
    pub point_radius: f32,
    /// Path and marker color.
    pub widget_color: Color,
    /// Baseline fill color.
    pub fill_color: Color,
    /// Pip label color.
    pub text_color: Color,
    /// Background color, used as the marker outline.
    pub background_color: Color,
    /// Opacity of the baseline fill.
    pub fill_alpha: f32,
    /// Opacity of the pip labels.
    pub pips_alpha: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            padding: 10.0,
            font_size: 12.0,
            line_width: 2.0,
            point_radius: 2.0,
            widget_color: Color::new(0.33, 0.58, 0.88, 1.0),
            fill_color: Color::new(0.33, 0.58, 0.88, 1.0),
            text_color: Color::WHITE,
            background_color: Color::new(0.12, 0.12, 0.14, 1.0),
            fill_alpha: 0.25,
            pips_alpha: 0.5,
        }
    }
}

impl Theme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self::default()
    }
}
