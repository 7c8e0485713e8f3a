//! The curve editor widget core.
//!
//! [`CurveEditor`] owns the point series and realizes the pointer gesture
//! protocol: down hits or inserts or deletes, move drags under neighbor
//! constraints, up commits the series to the host through [`ValueSync`].
//! Everything runs synchronously inside the host's pointer handlers; a
//! gesture can never raise, because a dropped frame must not leave the
//! widget broken. Redraws are coalesced behind a dirty flag the host drains
//! once per frame.

use crate::config::EditorConfig;
use crate::geom::ScreenRect;
use crate::hit::{self, HIT_RADIUS};
use crate::interaction::{DragSession, PointerEvent, clamp_dragged_x};
use crate::render::{self, RenderList};
use crate::series::PointSeries;
use crate::style::Theme;
use crate::transform::Transform;
use crate::value::{ParseError, ValueInput};

/// Host boundary for committing an edited value.
///
/// Both operations receive the full current series, never a diff. They are
/// called on gesture end only; intermediate drag states stay local.
pub trait ValueSync {
    /// Transmit the committed series outward (message dispatch).
    fn send_value(&mut self, series: &PointSeries);
    /// Mark the widget's displayed value as changed (host bookkeeping).
    fn value_changed(&mut self, series: &PointSeries);
}

/// Interactive editor for an ordered series of 2-D points.
#[derive(Debug)]
pub struct CurveEditor {
    config: EditorConfig,
    theme: Theme,
    series: PointSeries,
    size: (f32, f32),
    drag: Option<DragSession>,
    needs_redraw: bool,
}

impl CurveEditor {
    /// Create an editor with the given configuration and an empty series.
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            theme: Theme::default(),
            series: PointSeries::default(),
            size: (0.0, 0.0),
            drag: None,
            needs_redraw: false,
        }
    }

    /// Replace the theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Access the configuration.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Access the theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Access the current series.
    pub fn series(&self) -> &PointSeries {
        &self.series
    }

    /// Update the widget client size in pixels.
    pub fn set_size(&mut self, width: f32, height: f32) {
        if self.size != (width, height) {
            self.size = (width, height);
            self.request_redraw();
        }
    }

    /// The plot rectangle for the current size.
    pub fn plot_rect(&self) -> ScreenRect {
        self.config.plot_rect(&self.theme, self.size.0, self.size.1)
    }

    /// The transform for the current size, if one exists.
    ///
    /// Recomputed on every call; never cached across a resize or range
    /// change.
    pub fn transform(&self) -> Option<Transform> {
        self.config.transform(&self.theme, self.size.0, self.size.1)
    }

    /// Replace or patch the series from a host value.
    ///
    /// Wholesale forms replace the series and fix its storage shape; the
    /// partial form updates matching indices only, clamped like any other
    /// in-place update.
    pub fn set_value(&mut self, input: ValueInput) {
        let range_x = self.config.range_x();
        let range_y = self.config.range_y();
        match input {
            ValueInput::Implicit(values) => {
                self.series = PointSeries::implicit(values);
            }
            ValueInput::Explicit(pairs) => {
                self.series = PointSeries::explicit(
                    pairs
                        .into_iter()
                        .map(|(x, y)| crate::geom::Point::new(x, y))
                        .collect(),
                );
            }
            ValueInput::Partial(updates) => {
                for (index, (x, y)) in updates {
                    self.series.update_at(index, x, y, range_x, range_y);
                }
            }
        }
        self.request_redraw();
    }

    /// Parse and apply a textual host value.
    ///
    /// On parse failure the previous series is retained unchanged and the
    /// error is returned; hosts that prefer the original fire-and-forget
    /// semantics can ignore it.
    pub fn set_value_text(&mut self, text: &str) -> Result<(), ParseError> {
        match ValueInput::parse(text) {
            Ok(input) => {
                self.set_value(input);
                Ok(())
            }
            Err(err) => {
                log::debug!("retaining series, value payload rejected: {err}");
                Err(err)
            }
        }
    }

    /// Begin a gesture.
    ///
    /// Insert modifier: with no point in pick range, inserts a clamped point
    /// at the pointer and grabs it, so insert-then-drag is one gesture
    /// (explicit series only). Delete modifier: removes the hit point and
    /// leaves the gesture hitless, so no drag follows. Otherwise the hit
    /// point, if any, becomes the drag target.
    pub fn pointer_down(&mut self, event: PointerEvent) {
        let Some(transform) = self.transform() else {
            self.drag = None;
            return;
        };
        let range_x = self.config.range_x();
        let range_y = self.config.range_y();
        let radius = HIT_RADIUS * self.config.px_scale();
        let hit = hit::find_nearest(&self.series, &transform, range_x, event.position, radius);

        if event.insert_modifier && !event.delete_modifier {
            if hit.is_none()
                && self.series.is_explicit()
                && let Some(logical) = transform.screen_to_data(event.position)
            {
                let index =
                    hit::find_insertion_index(&self.series, &transform, range_x, event.position);
                let inserted =
                    self.series
                        .insert_at(index, logical.x, logical.y, range_x, range_y);
                self.drag = Some(DragSession {
                    hit: inserted,
                    anchor: event.position,
                });
                self.request_redraw();
                return;
            }
        } else if event.delete_modifier && !event.insert_modifier {
            if let Some(index) = hit {
                self.series.remove_at(index);
                self.request_redraw();
            }
            self.drag = Some(DragSession {
                hit: None,
                anchor: event.position,
            });
            return;
        }

        self.drag = Some(DragSession {
            hit,
            anchor: event.position,
        });
    }

    /// Continue a gesture.
    ///
    /// Translates the active point by the pixel delta since the anchor, so
    /// the drag feels identical under any transform, then clamps Y to the
    /// axis range and X between the neighbors' X values (axis bounds at the
    /// series ends). The anchor advances with every applied move. Without an
    /// active point, or with a stale index, this is a no-op.
    pub fn pointer_move(&mut self, event: PointerEvent) {
        let Some(session) = self.drag else {
            return;
        };
        let Some(index) = session.hit else {
            return;
        };
        let Some(transform) = self.transform() else {
            return;
        };
        let range_x = self.config.range_x();
        let range_y = self.config.range_y();
        let Some(current) = self.series.point_at(index, range_x) else {
            return;
        };
        let Some(screen) = transform.data_to_screen(current) else {
            return;
        };
        let dx = event.position.x - session.anchor.x;
        let dy = event.position.y - session.anchor.y;
        let Some(logical) = transform.screen_to_data(screen.translated(dx, dy)) else {
            return;
        };

        let (min_x, max_x, min_open, max_open) = self.series.drag_bounds(index, range_x);
        let x = clamp_dragged_x(range_x.clamp(logical.x), min_x, max_x, min_open, max_open);
        let y = range_y.clamp(logical.y);
        self.series.update_at(index, x, y, range_x, range_y);
        self.drag = Some(DragSession {
            hit: Some(index),
            anchor: event.position,
        });
        self.request_redraw();
    }

    /// End a gesture and commit the series to the host.
    ///
    /// The full series is handed to [`ValueSync`] exactly once per gesture;
    /// moves never commit.
    pub fn pointer_up(&mut self, sync: &mut dyn ValueSync) {
        if self.drag.take().is_some() {
            sync.send_value(&self.series);
            sync.value_changed(&self.series);
        }
    }

    /// Build the render commands for the current frame.
    pub fn render(&self) -> RenderList {
        render::build_frame(&self.series, &self.config, &self.theme, self.size.0, self.size.1)
    }

    /// Drain the coalesced redraw request.
    ///
    /// Mutations set a dirty flag instead of repainting eagerly; the host
    /// calls this once per frame and repaints when it returns true, so a
    /// burst of same-frame mutations produces a single paint.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{Point, ScreenPoint};
    use crate::range::Range;

    #[derive(Default)]
    struct RecordingSync {
        sent: Vec<Vec<Point>>,
        changed: usize,
    }

    impl ValueSync for RecordingSync {
        fn send_value(&mut self, series: &PointSeries) {
            self.sent.push(series.points(Range::default()));
        }

        fn value_changed(&mut self, _series: &PointSeries) {
            self.changed += 1;
        }
    }

    /// 100x100 widget, unit ranges, padding 10: logical X 0.5 sits at
    /// pixel X 50 and the plot X band is [10, 90].
    fn editor() -> CurveEditor {
        let mut editor = CurveEditor::new(EditorConfig::new());
        editor.set_size(100.0, 100.0);
        editor.set_value(ValueInput::Explicit(vec![
            (0.0, 0.0),
            (0.5, 0.8),
            (1.0, 0.2),
        ]));
        editor.take_redraw_request();
        editor
    }

    fn screen_of(editor: &CurveEditor, index: usize) -> ScreenPoint {
        let transform = editor.transform().unwrap();
        let point = editor
            .series()
            .point_at(index, editor.config().range_x())
            .unwrap();
        transform.data_to_screen(point).unwrap()
    }

    #[test]
    fn midpoint_sits_at_pixel_fifty() {
        let editor = editor();
        assert!((screen_of(&editor, 1).x - 50.0).abs() < 1e-4);
    }

    #[test]
    fn drag_cannot_cross_the_right_neighbor() {
        let mut editor = editor();
        let start = screen_of(&editor, 1);
        editor.pointer_down(PointerEvent::at(start));
        // each +20px is +0.25 logical; three moves would overshoot x = 1
        let mut position = start;
        for _ in 0..3 {
            position = position.translated(20.0, 0.0);
            editor.pointer_move(PointerEvent::at(position));
        }
        let dragged = editor.series().point_at(1, Range::default()).unwrap();
        assert!(dragged.x < 1.0);
        assert!(dragged.x > 0.99);
        let points = editor.series().points(Range::default());
        assert!(points.windows(2).all(|pair| pair[0].x <= pair[1].x));
    }

    #[test]
    fn drag_clamps_y_to_the_axis_range() {
        let mut editor = editor();
        let start = screen_of(&editor, 1);
        editor.pointer_down(PointerEvent::at(start));
        editor.pointer_move(PointerEvent::at(start.translated(0.0, 500.0)));
        let dragged = editor.series().point_at(1, Range::default()).unwrap();
        assert_eq!(dragged.y, 0.0);
    }

    #[test]
    fn insert_gesture_adds_one_point_at_the_pointer() {
        let mut editor = editor();
        // between the points at x=0 and x=0.5; pixel (30, 50) is (0.25, 0.5)
        let position = ScreenPoint::new(30.0, 50.0);
        editor.pointer_down(PointerEvent::at(position).with_insert());
        assert_eq!(editor.series().len(), 4);
        let inserted = editor.series().point_at(1, Range::default()).unwrap();
        assert!((inserted.x - 0.25).abs() < 1e-4);
        assert!((inserted.y - 0.5).abs() < 1e-4);
        // the new point is grabbed: insert-then-drag is one gesture
        editor.pointer_move(PointerEvent::at(position.translated(0.0, -10.0)));
        let dragged = editor.series().point_at(1, Range::default()).unwrap();
        assert!(dragged.y > 0.5);
    }

    #[test]
    fn insert_near_an_existing_point_grabs_it_instead() {
        let mut editor = editor();
        let position = screen_of(&editor, 1).translated(1.0, 1.0);
        editor.pointer_down(PointerEvent::at(position).with_insert());
        assert_eq!(editor.series().len(), 3);
        editor.pointer_move(PointerEvent::at(position.translated(-8.0, 0.0)));
        let grabbed = editor.series().point_at(1, Range::default()).unwrap();
        assert!(grabbed.x < 0.5);
    }

    #[test]
    fn insert_is_rejected_on_implicit_series() {
        let mut editor = editor();
        editor.set_value(ValueInput::Implicit(vec![0.0, 0.5, 1.0]));
        editor.pointer_down(PointerEvent::at(ScreenPoint::new(30.0, 50.0)).with_insert());
        assert_eq!(editor.series().len(), 3);
    }

    #[test]
    fn delete_gesture_removes_the_hit_and_skips_the_move_phase() {
        let mut editor = editor();
        let position = screen_of(&editor, 1);
        editor.pointer_down(PointerEvent::at(position).with_delete());
        assert_eq!(editor.series().len(), 2);
        let before = editor.series().clone();
        editor.pointer_move(PointerEvent::at(position.translated(15.0, 15.0)));
        assert_eq!(editor.series(), &before);
    }

    #[test]
    fn delete_without_a_hit_removes_nothing() {
        let mut editor = editor();
        editor.pointer_down(PointerEvent::at(ScreenPoint::new(30.0, 30.0)).with_delete());
        assert_eq!(editor.series().len(), 3);
    }

    #[test]
    fn gesture_commits_once_on_pointer_up() {
        let mut editor = editor();
        let mut sync = RecordingSync::default();
        let start = screen_of(&editor, 1);
        editor.pointer_down(PointerEvent::at(start));
        editor.pointer_move(PointerEvent::at(start.translated(5.0, 5.0)));
        editor.pointer_move(PointerEvent::at(start.translated(10.0, 10.0)));
        assert!(sync.sent.is_empty());
        editor.pointer_up(&mut sync);
        assert_eq!(sync.sent.len(), 1);
        assert_eq!(sync.changed, 1);
        assert_eq!(sync.sent[0].len(), 3);
    }

    #[test]
    fn inert_gesture_still_commits_the_unchanged_series() {
        let mut editor = editor();
        let mut sync = RecordingSync::default();
        editor.pointer_down(PointerEvent::at(ScreenPoint::new(30.0, 30.0)));
        editor.pointer_move(PointerEvent::at(ScreenPoint::new(40.0, 40.0)));
        editor.pointer_up(&mut sync);
        assert_eq!(sync.sent.len(), 1);
        assert_eq!(sync.sent[0], editor.series().points(Range::default()));
    }

    #[test]
    fn pointer_up_without_a_gesture_commits_nothing() {
        let mut editor = editor();
        let mut sync = RecordingSync::default();
        editor.pointer_up(&mut sync);
        assert!(sync.sent.is_empty());
        assert_eq!(sync.changed, 0);
    }

    #[test]
    fn mutation_burst_coalesces_into_one_redraw() {
        let mut editor = editor();
        let position = ScreenPoint::new(30.0, 50.0);
        editor.pointer_down(PointerEvent::at(position).with_insert());
        editor.pointer_move(PointerEvent::at(position.translated(3.0, 0.0)));
        editor.pointer_move(PointerEvent::at(position.translated(6.0, 0.0)));
        assert!(editor.take_redraw_request());
        assert!(!editor.take_redraw_request());
    }

    #[test]
    fn rejected_payload_retains_the_series() {
        let mut editor = editor();
        let before = editor.series().clone();
        assert!(editor.set_value_text("[[0, 0], [0.5]").is_err());
        assert_eq!(editor.series(), &before);
        assert!(!editor.take_redraw_request());
    }

    #[test]
    fn textual_payload_replaces_the_series() {
        let mut editor = editor();
        editor.set_value_text("[0.1, 0.9]").unwrap();
        assert!(!editor.series().is_explicit());
        assert_eq!(editor.series().len(), 2);
    }

    #[test]
    fn partial_update_patches_matching_indices_only() {
        let mut editor = editor();
        editor
            .set_value_text(r#"{"1": [0.4, 0.1], "9": [0.9, 0.9]}"#)
            .unwrap();
        let points = editor.series().points(Range::default());
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], Point::new(0.0, 0.0));
        assert_eq!(points[1], Point::new(0.4, 0.1));
        assert_eq!(points[2], Point::new(1.0, 0.2));
    }

    #[test]
    fn degenerate_size_makes_gestures_inert() {
        let mut editor = editor();
        editor.set_size(5.0, 5.0);
        let mut sync = RecordingSync::default();
        editor.pointer_down(PointerEvent::at(ScreenPoint::new(2.0, 2.0)));
        editor.pointer_up(&mut sync);
        assert!(sync.sent.is_empty());
    }
}
