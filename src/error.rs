use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised at the boundary of the page utilities.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UiError {
    #[error("not a number: {text:?}")]
    InvalidNumber { text: String },

    #[error("count-up target must be non-negative, got {value}")]
    NegativeTarget { value: f64 },

    #[error("count-up target must be finite")]
    NonFiniteTarget,

    #[error("count-up needs a positive duration and frame interval, got {duration_ms}ms / {frame_ms}ms")]
    InvalidTiming { duration_ms: f64, frame_ms: f64 },

    #[error("slice {index} has invalid magnitude {value}")]
    InvalidMagnitude { index: usize, value: f64 },

    #[error("{magnitudes} magnitudes but {colors} colors")]
    LengthMismatch { magnitudes: usize, colors: usize },

    #[error("{correct} correct answers out of {total}")]
    ScoreOutOfRange { correct: u32, total: u32 },

    #[error("no {what} available")]
    MissingHost { what: &'static str },

    #[error("DOM call failed: {message}")]
    Dom { message: String },
}

impl UiError {
    pub fn dom(err: JsValue) -> Self {
        let message = err
            .as_string()
            .unwrap_or_else(|| format!("{:?}", err));
        UiError::Dom { message }
    }
}

impl From<UiError> for JsValue {
    fn from(err: UiError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let e = UiError::InvalidNumber { text: "abc".into() };
        assert_eq!(e.to_string(), "not a number: \"abc\"");
        let e = UiError::LengthMismatch { magnitudes: 3, colors: 2 };
        assert_eq!(e.to_string(), "3 magnitudes but 2 colors");
    }
}
