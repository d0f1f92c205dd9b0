//! UI Widgets - modular, reusable UI components

pub mod curve_editor;
pub mod preview;
