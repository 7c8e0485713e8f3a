//! Rendering primitives and the frame builder.
//!
//! The editor draws by emitting a backend-agnostic command list; a host
//! backend (canvas, GPU, terminal) replays the commands in order. Every
//! frame starts with [`RenderCommand::Clear`].

use crate::axis::pip_label;
use crate::config::EditorConfig;
use crate::geom::ScreenPoint;
use crate::range::Range;
use crate::series::{PointSeries, SeriesData};
use crate::style::Theme;
use crate::transform::Transform;

/// RGBA color in linear space.
///
/// All components are expected to be in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// The same color with a different alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
}

/// Line stroke styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Point marker styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    /// Marker fill color.
    pub fill: Color,
    /// Marker outline color.
    pub stroke: Color,
    /// Marker outline width in pixels.
    pub stroke_width: f32,
    /// Marker radius in pixels.
    pub radius: f32,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            fill: Color::BLACK,
            stroke: Color::WHITE,
            stroke_width: 1.0,
            radius: 2.0,
        }
    }
}

/// Text styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Text color.
    pub color: Color,
    /// Font size in pixels.
    pub size: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            size: 12.0,
        }
    }
}

/// Horizontal text anchoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    /// Anchor at the left edge.
    Left,
    /// Anchor at the center.
    Center,
    /// Anchor at the right edge.
    Right,
}

/// One drawing instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Clear the previous frame.
    Clear,
    /// Stroke a polyline through the points in order.
    Path {
        /// Path vertices.
        points: Vec<ScreenPoint>,
        /// Stroke styling.
        style: LineStyle,
    },
    /// Fill a closed polygon.
    Polygon {
        /// Polygon vertices.
        points: Vec<ScreenPoint>,
        /// Fill color, alpha included.
        color: Color,
    },
    /// Draw circular point markers.
    Markers {
        /// Marker centers.
        points: Vec<ScreenPoint>,
        /// Marker styling.
        style: MarkerStyle,
    },
    /// Draw a text label.
    Text {
        /// Anchor position.
        position: ScreenPoint,
        /// Text content.
        text: String,
        /// Horizontal anchoring.
        align: TextAlign,
        /// Text styling.
        style: TextStyle,
    },
}

/// Aggregated render commands for one frame.
#[derive(Debug, Default, Clone)]
pub struct RenderList {
    commands: Vec<RenderCommand>,
}

impl RenderList {
    /// Create an empty render list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Access all render commands.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }
}

/// Build the frame for the current series and configuration.
pub(crate) fn build_frame(
    series: &PointSeries,
    config: &EditorConfig,
    theme: &Theme,
    width: f32,
    height: f32,
) -> RenderList {
    let mut list = RenderList::new();
    list.push(RenderCommand::Clear);

    let Some(transform) = config.transform(theme, width, height) else {
        return list;
    };
    let range_x = config.range_x();
    let points = path_points(series, &transform, range_x);

    if points.len() >= 2 {
        if let Some(origin) = config.origin()
            && let Some(origin_y) = transform.y_to_screen(config.range_y().clamp(origin))
        {
            let rect = transform.rect();
            let mut polygon = points.clone();
            polygon.push(ScreenPoint::new(rect.max.x, origin_y));
            polygon.push(ScreenPoint::new(rect.min.x, origin_y));
            list.push(RenderCommand::Polygon {
                points: polygon,
                color: theme.fill_color.with_alpha(theme.fill_alpha),
            });
        }
        list.push(RenderCommand::Path {
            points: points.clone(),
            style: LineStyle {
                color: theme.widget_color,
                width: theme.line_width * config.px_scale(),
            },
        });
    }

    if series.is_explicit() {
        // markers track the stored points, not the collapsed path
        let markers: Vec<ScreenPoint> = series
            .points(range_x)
            .iter()
            .filter_map(|point| transform.data_to_screen(*point))
            .collect();
        if !markers.is_empty() {
            list.push(RenderCommand::Markers {
                points: markers,
                style: MarkerStyle {
                    fill: theme.widget_color,
                    stroke: theme.background_color,
                    stroke_width: theme.line_width * config.px_scale(),
                    radius: theme.point_radius * config.px_scale(),
                },
            });
        }
    }

    if config.pips() {
        push_pips(&mut list, config, theme, width, height);
    }

    list
}

/// Map the series into a screen-space polyline.
///
/// Implicit series collapse interior runs of identical values and drop
/// consecutive duplicate pixel positions; this only trims redundant path
/// vertices and never changes the drawn shape.
pub(crate) fn path_points(
    series: &PointSeries,
    transform: &Transform,
    range_x: Range,
) -> Vec<ScreenPoint> {
    match series.data() {
        SeriesData::Explicit(points) => points
            .iter()
            .filter_map(|point| transform.data_to_screen(*point))
            .collect(),
        SeriesData::Implicit(values) => {
            let len = values.len();
            let mut out = Vec::new();
            let mut previous: Option<f64> = None;
            let mut last_pixel: Option<ScreenPoint> = None;
            for (index, &value) in values.iter().enumerate() {
                if index + 2 < len && previous == Some(value) && values[index + 1] == value {
                    previous = Some(value);
                    continue;
                }
                previous = Some(value);
                let Some(point) = series.point_at(index, range_x) else {
                    continue;
                };
                let Some(pixel) = transform.data_to_screen(point) else {
                    continue;
                };
                if last_pixel != Some(pixel) {
                    out.push(pixel);
                    last_pixel = Some(pixel);
                }
            }
            out
        }
    }
}

fn push_pips(list: &mut RenderList, config: &EditorConfig, theme: &Theme, width: f32, height: f32) {
    let margin = theme.padding;
    if margin < theme.font_size * 1.5 {
        return;
    }
    let style = TextStyle {
        color: theme.text_color.with_alpha(theme.pips_alpha),
        size: theme.font_size,
    };
    let range_x = config.range_x();
    let range_y = config.range_y();

    list.push(RenderCommand::Text {
        position: ScreenPoint::new(margin, height - margin / 2.0),
        text: pip_label(range_x.min),
        align: TextAlign::Center,
        style,
    });
    list.push(RenderCommand::Text {
        position: ScreenPoint::new(width - margin, height - margin / 2.0),
        text: pip_label(range_x.max),
        align: TextAlign::Center,
        style,
    });
    list.push(RenderCommand::Text {
        position: ScreenPoint::new(margin / 2.0 + theme.font_size / 2.0, height - margin),
        text: pip_label(range_y.min),
        align: TextAlign::Right,
        style,
    });
    list.push(RenderCommand::Text {
        position: ScreenPoint::new(margin / 2.0 + theme.font_size / 2.0, margin),
        text: pip_label(range_y.max),
        align: TextAlign::Right,
        style,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::AxisScale;
    use crate::geom::{Point, ScreenRect};

    const UNIT: Range = Range { min: 0.0, max: 1.0 };

    fn unit_transform() -> Transform {
        let rect = ScreenRect::plot_area(100.0, 100.0, 0.0, 0.0);
        Transform::new(UNIT, UNIT, AxisScale::Linear, AxisScale::Linear, rect)
            .expect("valid transform")
    }

    fn config() -> EditorConfig {
        // padding 20 keeps the pips visible under the default font size
        EditorConfig::new()
    }

    fn theme() -> Theme {
        Theme {
            padding: 20.0,
            ..Theme::default()
        }
    }

    fn frame(series: &PointSeries) -> RenderList {
        build_frame(series, &config(), &theme(), 100.0, 100.0)
    }

    fn count<F: Fn(&RenderCommand) -> bool>(list: &RenderList, predicate: F) -> usize {
        list.commands().iter().filter(|c| predicate(c)).count()
    }

    #[test]
    fn frame_starts_with_clear() {
        let series = PointSeries::default();
        let list = frame(&series);
        assert_eq!(list.commands().first(), Some(&RenderCommand::Clear));
    }

    #[test]
    fn single_point_draws_marker_but_no_path() {
        let series = PointSeries::explicit(vec![Point::new(0.5, 0.5)]);
        let list = frame(&series);
        assert_eq!(count(&list, |c| matches!(c, RenderCommand::Path { .. })), 0);
        assert_eq!(
            count(&list, |c| matches!(c, RenderCommand::Markers { .. })),
            1
        );
    }

    #[test]
    fn explicit_series_draws_path_fill_and_markers() {
        let series = PointSeries::explicit(vec![
            Point::new(0.0, 0.0),
            Point::new(0.5, 0.8),
            Point::new(1.0, 0.2),
        ]);
        let list = frame(&series);
        assert_eq!(count(&list, |c| matches!(c, RenderCommand::Path { .. })), 1);
        assert_eq!(
            count(&list, |c| matches!(c, RenderCommand::Polygon { .. })),
            1
        );
        assert_eq!(
            count(&list, |c| matches!(c, RenderCommand::Markers { .. })),
            1
        );
    }

    #[test]
    fn disabled_origin_skips_the_fill() {
        let series = PointSeries::explicit(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        let list = build_frame(&series, &config().with_origin(None), &theme(), 100.0, 100.0);
        assert_eq!(
            count(&list, |c| matches!(c, RenderCommand::Polygon { .. })),
            0
        );
    }

    #[test]
    fn implicit_series_draws_no_markers() {
        let series = PointSeries::implicit(vec![0.0, 0.5, 1.0]);
        let list = frame(&series);
        assert_eq!(
            count(&list, |c| matches!(c, RenderCommand::Markers { .. })),
            0
        );
        assert_eq!(count(&list, |c| matches!(c, RenderCommand::Path { .. })), 1);
    }

    #[test]
    fn implicit_runs_collapse_to_segment_ends() {
        let series = PointSeries::implicit(vec![0.2, 0.5, 0.5, 0.5, 0.5, 0.8]);
        let points = path_points(&series, &unit_transform(), UNIT);
        // run interior drops, endpoints stay
        assert_eq!(points.len(), 4);
    }

    #[test]
    fn pips_render_all_four_labels() {
        let series = PointSeries::default();
        let list = frame(&series);
        assert_eq!(count(&list, |c| matches!(c, RenderCommand::Text { .. })), 4);
    }

    #[test]
    fn pips_are_suppressed_when_padding_is_tight() {
        let series = PointSeries::default();
        let tight = Theme {
            padding: 10.0,
            font_size: 12.0,
            ..Theme::default()
        };
        let list = build_frame(&series, &config(), &tight, 100.0, 100.0);
        assert_eq!(count(&list, |c| matches!(c, RenderCommand::Text { .. })), 0);
    }

    #[test]
    fn pips_labels_abbreviate_thousands() {
        let series = PointSeries::default();
        let config = config().with_range_x(Range::new(0.0, 1500.0));
        let list = build_frame(&series, &config, &theme(), 100.0, 100.0);
        let labels: Vec<&str> = list
            .commands()
            .iter()
            .filter_map(|c| match c {
                RenderCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert!(labels.contains(&"1.5k"));
        assert!(labels.contains(&"0"));
    }
}
