//! Status LED indicator drivers

pub mod led;

pub use led::{IndicatorPanel, LedBank};
