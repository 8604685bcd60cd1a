use crate::error::UiError;
use std::f64::consts::{FRAC_PI_2, TAU};

/// 12 o'clock on a canvas (angles grow clockwise).
pub const START_ANGLE: f64 = -FRAC_PI_2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceArc {
    pub start: f64,
    pub end: f64,
}

impl SliceArc {
    pub fn sweep(&self) -> f64 {
        self.end - self.start
    }
}

/// Centre and radius of the pie on a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieGeometry {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

impl PieGeometry {
    pub fn for_surface(width: f64, height: f64, inset: f64) -> Self {
        Self {
            cx: width / 2.0,
            cy: height / 2.0,
            radius: (width.min(height) / 2.0 - inset).max(0.0),
        }
    }
}

/// Splits a full turn into consecutive arcs proportional to each magnitude.
/// Empty when the total is zero.
pub fn slice_arcs(magnitudes: &[f64]) -> Result<Vec<SliceArc>, UiError> {
    if let Some((index, &value)) = magnitudes
        .iter()
        .enumerate()
        .find(|(_, m)| !m.is_finite() || **m < 0.0)
    {
        return Err(UiError::InvalidMagnitude { index, value });
    }
    let total: f64 = magnitudes.iter().sum();
    if total <= 0.0 {
        return Ok(Vec::new());
    }
    let mut angle = START_ANGLE;
    Ok(magnitudes
        .iter()
        .map(|m| {
            let sweep = m / total * TAU;
            let arc = SliceArc {
                start: angle,
                end: angle + sweep,
            };
            angle += sweep;
            arc
        })
        .collect())
}
