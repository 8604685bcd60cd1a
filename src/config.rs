//! Runtime configuration, read once from an inline JSON block on the page.
//! Every field falls back to the built-in constant.

use crate::model::{
    CHART_INSET, COUNT_UP_DELAY_MS, COUNT_UP_DURATION_MS, FRAME_INTERVAL_MS,
    NOTIFICATION_LIFETIME_MS,
};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use web_sys::Document;

pub const CONFIG_ELEMENT_ID: &str = "simulacros-ui-config";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UiConfig {
    pub count_up_duration_ms: f64,
    pub frame_interval_ms: f64,
    pub count_up_delay_ms: i32,
    pub notification_lifetime_ms: i32,
    pub chart_inset: f64,
    pub timer_selector: String,
    pub results_marker_selector: String,
    pub animated_number_selector: String,
    pub log_level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            count_up_duration_ms: COUNT_UP_DURATION_MS,
            frame_interval_ms: FRAME_INTERVAL_MS,
            count_up_delay_ms: COUNT_UP_DELAY_MS,
            notification_lifetime_ms: NOTIFICATION_LIFETIME_MS,
            chart_inset: CHART_INSET,
            timer_selector: "#timer".to_string(),
            results_marker_selector: ".result-card".to_string(),
            animated_number_selector: ".animate-number".to_string(),
            log_level: "info".to_string(),
        }
    }
}

thread_local! {
    static ACTIVE: RefCell<UiConfig> = RefCell::new(UiConfig::default());
}

impl UiConfig {
    /// Parses a JSON object; malformed input falls back to defaults.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<Self>(raw) {
            Ok(cfg) => cfg.sanitized(),
            Err(e) => {
                log::warn!("ignoring malformed ui config: {e}");
                Self::default()
            }
        }
    }

    /// Replaces timings the count-up cannot run with, and negative delays.
    pub fn sanitized(mut self) -> Self {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        if !usable(self.count_up_duration_ms) || !usable(self.frame_interval_ms) {
            log::warn!(
                "ignoring count-up timing {}ms / {}ms",
                self.count_up_duration_ms,
                self.frame_interval_ms
            );
            self.count_up_duration_ms = COUNT_UP_DURATION_MS;
            self.frame_interval_ms = FRAME_INTERVAL_MS;
        }
        if self.count_up_delay_ms < 0 {
            self.count_up_delay_ms = COUNT_UP_DELAY_MS;
        }
        if self.notification_lifetime_ms < 0 {
            self.notification_lifetime_ms = NOTIFICATION_LIFETIME_MS;
        }
        if !self.chart_inset.is_finite() {
            self.chart_inset = CHART_INSET;
        }
        self
    }

    pub fn load(document: &Document) -> Self {
        document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
            .map(|raw| Self::from_json(&raw))
            .unwrap_or_default()
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// Makes this config the one used by the exported entry points.
    pub fn activate(self) {
        log::set_max_level(self.level_filter());
        ACTIVE.with(|c| *c.borrow_mut() = self);
    }

    pub fn active() -> Self {
        ACTIVE.with(|c| c.borrow().clone())
    }
}
