//! EASEL - interactive cubic-bezier easing curve editor
//!
//! Re-exports all modules for use by the binary target.

pub mod app;
pub mod cli;
pub mod config;
pub mod utils;
pub mod widgets;

// Re-export commonly used types
pub use widgets::curve_editor::{CurvePoint, CurveState};
pub use widgets::preview::{CubicTiming, PreviewState};
