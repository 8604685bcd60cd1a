//! Plain data shared by the page utilities.
//! Nothing in here touches the DOM.

use crate::error::UiError;
use serde::{Deserialize, Serialize};

/// Total duration of a count-up animation.
pub const COUNT_UP_DURATION_MS: f64 = 1000.0;
/// Nominal frame interval used to derive the per-frame increment (~60Hz).
pub const FRAME_INTERVAL_MS: f64 = 16.0;
/// Delay between page-ready and the start of the results count-up.
pub const COUNT_UP_DELAY_MS: i32 = 100;
/// Lifetime of a toast notification.
pub const NOTIFICATION_LIFETIME_MS: i32 = 3000;
/// Gap between the pie and the edge of its surface.
pub const CHART_INSET: f64 = 10.0;

pub const CORRECT_COLOR: &str = "#22c55e";
pub const INCORRECT_COLOR: &str = "#ef4444";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Unknown tags style as `Info`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "success" => Severity::Success,
            "warning" => Severity::Warning,
            "error" => Severity::Error,
            _ => Severity::Info,
        }
    }

    pub fn background_class(self) -> &'static str {
        match self {
            Severity::Success => "bg-green-500",
            Severity::Error => "bg-red-500",
            Severity::Warning => "bg-yellow-500",
            Severity::Info => "bg-blue-500",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Option<&str>) -> Self {
        Self {
            message: message.into(),
            severity: severity.map(Severity::from_tag).unwrap_or_default(),
        }
    }

    /// Class list of the banner: fixed top-right, colored by severity.
    pub fn class_list(&self) -> String {
        format!(
            "fixed top-20 right-4 z-50 p-4 rounded-lg shadow-lg {} text-white",
            self.severity.background_class()
        )
    }
}

/// One pie slice. Slices are drawn in input order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartSlice {
    pub magnitude: f64,
    pub color: String,
}

impl ChartSlice {
    /// Pairs index-aligned magnitudes and colors.
    pub fn zip(magnitudes: &[f64], colors: &[String]) -> Result<Vec<ChartSlice>, UiError> {
        if magnitudes.len() != colors.len() {
            return Err(UiError::LengthMismatch {
                magnitudes: magnitudes.len(),
                colors: colors.len(),
            });
        }
        Ok(magnitudes
            .iter()
            .zip(colors)
            .map(|(&magnitude, color)| ChartSlice {
                magnitude,
                color: color.clone(),
            })
            .collect())
    }
}

/// Outcome of a finished test, as shown on the results page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub correct: u32,
    pub total: u32,
}

impl ScoreBreakdown {
    pub fn new(correct: u32, total: u32) -> Result<Self, UiError> {
        if correct > total {
            return Err(UiError::ScoreOutOfRange { correct, total });
        }
        Ok(Self { correct, total })
    }

    pub fn incorrect(&self) -> u32 {
        self.total - self.correct
    }

    /// Score out of 100; an empty test scores 0.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64 * 100.0
    }

    pub fn slices(&self) -> Vec<ChartSlice> {
        vec![
            ChartSlice {
                magnitude: self.correct as f64,
                color: CORRECT_COLOR.to_string(),
            },
            ChartSlice {
                magnitude: self.incorrect() as f64,
                color: INCORRECT_COLOR.to_string(),
            },
        ]
    }
}
