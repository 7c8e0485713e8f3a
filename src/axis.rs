//! Axis scaling and pip label formatting.

use crate::range::Range;

/// Axis scale type.
///
/// The verified editing contract is [`AxisScale::Linear`]; logarithmic
/// mapping is a separate value-space layer composed by the transform and
/// carries its own domain restriction (strictly positive values).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisScale {
    /// Linear scaling.
    Linear,
    /// Logarithmic scaling with an arbitrary base.
    Log {
        /// Logarithm base, must be finite and greater than 1.
        base: f64,
    },
}

impl AxisScale {
    /// Base-10 logarithmic scale.
    pub fn log10() -> Self {
        Self::Log { base: 10.0 }
    }

    /// Map a value into axis space.
    pub fn map_value(self, value: f64) -> Option<f64> {
        if !value.is_finite() {
            return None;
        }
        match self {
            Self::Linear => Some(value),
            Self::Log { base } => {
                if value <= 0.0 {
                    None
                } else {
                    Some(value.ln() / base.ln())
                }
            }
        }
    }

    /// Invert a value from axis space back into data space.
    pub fn invert_value(self, value: f64) -> Option<f64> {
        if !value.is_finite() {
            return None;
        }
        match self {
            Self::Linear => Some(value),
            Self::Log { base } => Some(base.powf(value)),
        }
    }

    /// Check whether a data range is valid for this scale.
    pub fn is_range_valid(self, range: Range) -> bool {
        if !range.is_finite() {
            return false;
        }
        match self {
            Self::Linear => true,
            Self::Log { .. } => range.min > 0.0 && range.max > 0.0,
        }
    }
}

impl Default for AxisScale {
    fn default() -> Self {
        Self::Linear
    }
}

/// Format an axis bound for the pip labels.
///
/// Magnitudes of 1000 and above are divided by 1000 and suffixed with `k`.
pub fn pip_label(value: f64) -> String {
    if value.abs() >= 1000.0 {
        format!("{}k", value / 1000.0)
    } else {
        format!("{value}")
    }
}
