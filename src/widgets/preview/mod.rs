//! Preview widget - animates a box across a track using the authored
//! curve as its easing function, CSS-transition style.

mod preview;
mod preview_ui;

pub use preview::{CubicTiming, PreviewAnim, PreviewState, BOX_SIZE, DURATION_MS};
pub use preview_ui::render_preview;
