//! Curve editor widget - 300x300 canvas with grid, bezier curve and draggable handles
//!
//! Endpoints are pinned at (0,0) and (1,1); only the two interior
//! control points can be dragged.

mod curve_editor;
mod curve_editor_ui;

pub use curve_editor::{
    CurvePoint,
    CurveState,
    grid_offsets,
    GRID_STEP,
    HANDLE_RADIUS,
    SURFACE_SIZE,
};
pub use curve_editor_ui::render_curve_editor;
