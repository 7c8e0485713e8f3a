//! curvedit is an interactive curve/point-series editor core.
//! It maps a logical point series onto widget pixels, realizes pointer
//! add/remove/drag gestures, and emits backend-agnostic render commands.

#![forbid(unsafe_code)]

pub mod axis;
pub mod config;
pub mod editor;
pub mod geom;
pub mod hit;
pub mod interaction;
pub mod range;
pub mod render;
pub mod series;
pub mod style;
pub mod transform;
pub mod value;

pub use axis::{AxisScale, pip_label};
pub use config::EditorConfig;
pub use editor::{CurveEditor, ValueSync};
pub use geom::{Point, ScreenPoint, ScreenRect};
pub use hit::{HIT_RADIUS, find_insertion_index, find_nearest};
pub use interaction::PointerEvent;
pub use range::Range;
pub use render::{
    Color, LineStyle, MarkerStyle, RenderCommand, RenderList, TextAlign, TextStyle,
};
pub use series::{PointSeries, SeriesData};
pub use style::Theme;
pub use transform::Transform;
pub use value::{ParseError, ValueInput};
