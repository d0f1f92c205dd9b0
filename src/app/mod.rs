//! Application module - EaselApp state and the frame loop.
//!
//! - `mod.rs` - app state struct and persisted settings
//! - `run` - eframe::App implementation (per-frame update, save)

mod run;

use serde::{Deserialize, Serialize};

use crate::widgets::curve_editor::CurveState;
use crate::widgets::preview::PreviewState;

/// Persisted application settings
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub dark_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

/// Main application state.
///
/// Curve and preview state are runtime-only: curve data deliberately
/// does not persist between sessions. Settings and window geometry go
/// through eframe storage.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct EaselApp {
    #[serde(skip)]
    pub curve: CurveState,
    #[serde(skip)]
    pub preview: PreviewState,
    pub settings: AppSettings,
}

impl Default for EaselApp {
    fn default() -> Self {
        Self {
            curve: CurveState::default(),
            preview: PreviewState::new(),
            settings: AppSettings::default(),
        }
    }
}
