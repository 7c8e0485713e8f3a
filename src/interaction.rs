//! Pointer gesture types and drag clamping.

use crate::geom::ScreenPoint;

/// A pointer event in widget-local pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Pointer position relative to the widget.
    pub position: ScreenPoint,
    /// Insert modifier held (shift-equivalent).
    pub insert_modifier: bool,
    /// Delete modifier held (ctrl-equivalent).
    pub delete_modifier: bool,
}

impl PointerEvent {
    /// A plain pointer event with no modifiers.
    pub fn at(position: ScreenPoint) -> Self {
        Self {
            position,
            insert_modifier: false,
            delete_modifier: false,
        }
    }

    /// Set the insert modifier.
    pub fn with_insert(mut self) -> Self {
        self.insert_modifier = true;
        self
    }

    /// Set the delete modifier.
    pub fn with_delete(mut self) -> Self {
        self.delete_modifier = true;
        self
    }
}

/// Transient state of one pointer gesture, pointer-down to pointer-up.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DragSession {
    /// Index of the point under manipulation, if any.
    pub(crate) hit: Option<usize>,
    /// Pointer position the next move delta is measured from.
    pub(crate) anchor: ScreenPoint,
}

/// Clamp a dragged X into its neighbor interval.
///
/// Open bounds are neighbor X values and the result stays one ULP inside
/// them, so a drag can never land a point exactly on its neighbor. Closed
/// bounds (the axis limits at the series ends) are reachable.
pub(crate) fn clamp_dragged_x(x: f64, min: f64, max: f64, min_open: bool, max_open: bool) -> f64 {
    let mut x = x.clamp(min, max);
    if max > min {
        if min_open && x <= min {
            x = min.next_up();
        }
        if max_open && x >= max {
            x = max.next_down();
        }
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_bounds_are_reachable() {
        assert_eq!(clamp_dragged_x(-2.0, 0.0, 1.0, false, false), 0.0);
        assert_eq!(clamp_dragged_x(2.0, 0.0, 1.0, false, false), 1.0);
        assert_eq!(clamp_dragged_x(0.5, 0.0, 1.0, false, false), 0.5);
    }

    #[test]
    fn open_bounds_stay_strictly_inside() {
        let clamped = clamp_dragged_x(2.0, 0.0, 1.0, true, true);
        assert!(clamped < 1.0);
        assert!(clamped > 0.99999);
        let clamped = clamp_dragged_x(-2.0, 0.0, 1.0, true, true);
        assert!(clamped > 0.0);
    }

    #[test]
    fn collapsed_interval_degrades_to_the_bound() {
        assert_eq!(clamp_dragged_x(0.7, 0.5, 0.5, true, true), 0.5);
    }
}
