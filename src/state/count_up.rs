use crate::error::UiError;
use crate::model::{COUNT_UP_DURATION_MS, FRAME_INTERVAL_MS};
use crate::util::format_tenths;

// Upper bound on steps, so the increment never vanishes next to `current`.
const MAX_FRAMES: f64 = 1_000_000.0;

// Count-up of a displayed number from 0 to its target, one step per frame.
// The increment is fixed from the nominal frame interval, not measured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CountUp {
    Running {
        current: f64,
        target: f64,
        increment: f64,
    },
    Done {
        target: f64,
    },
}

impl CountUp {
    pub fn new(target: f64) -> Result<Self, UiError> {
        Self::with_timing(target, COUNT_UP_DURATION_MS, FRAME_INTERVAL_MS)
    }

    pub fn with_timing(target: f64, duration_ms: f64, frame_ms: f64) -> Result<Self, UiError> {
        if !target.is_finite() {
            return Err(UiError::NonFiniteTarget);
        }
        if target < 0.0 {
            return Err(UiError::NegativeTarget { value: target });
        }
        if !(duration_ms.is_finite() && duration_ms > 0.0 && frame_ms.is_finite() && frame_ms > 0.0)
        {
            return Err(UiError::InvalidTiming {
                duration_ms,
                frame_ms,
            });
        }
        let frames = (duration_ms / frame_ms).clamp(1.0, MAX_FRAMES);
        Ok(CountUp::Running {
            current: 0.0,
            target,
            increment: target / frames,
        })
    }

    /// Reads the target from an element's text, e.g. `" 85.5 "`.
    pub fn parse(text: &str, duration_ms: f64, frame_ms: f64) -> Result<Self, UiError> {
        let trimmed = text.trim();
        let target: f64 = trimmed.parse().map_err(|_| UiError::InvalidNumber {
            text: trimmed.to_string(),
        })?;
        Self::with_timing(target, duration_ms, frame_ms)
    }

    /// Runs one frame. Returns the text to show, or `None` once finished.
    pub fn advance(&mut self) -> Option<String> {
        match *self {
            CountUp::Done { .. } => None,
            CountUp::Running {
                current,
                target,
                increment,
            } => {
                let next = current + increment;
                // `next > current` ends a count whose increment underflowed
                if next < target && next > current {
                    *self = CountUp::Running {
                        current: next,
                        target,
                        increment,
                    };
                    Some(format_tenths(next))
                } else {
                    *self = CountUp::Done { target };
                    Some(format_tenths(target))
                }
            }
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, CountUp::Done { .. })
    }

    pub fn target(&self) -> f64 {
        match *self {
            CountUp::Running { target, .. } | CountUp::Done { target } => target,
        }
    }
}
