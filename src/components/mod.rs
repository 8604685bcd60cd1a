pub mod toast;

pub use toast::{Toast, show_notification};
