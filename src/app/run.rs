//! Main application loop - eframe::App implementation.
//!
//! One panel, one widget: the curve editor canvas with its readout,
//! then the preview button/track. egui repaints every frame, so each
//! pointer move fully updates state before that frame paints.

use eframe::egui;
use log::trace;

use crate::app::EaselApp;
use crate::widgets::curve_editor::render_curve_editor;
use crate::widgets::preview::render_preview;

impl eframe::App for EaselApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply theme based on settings
        if self.settings.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Curve Editor");
            });
            ui.add_space(5.0);

            render_curve_editor(ui, &mut self.curve);

            ui.add_space(10.0);
            render_preview(ui, &mut self.preview, &self.curve);

            ui.add_space(10.0);
            ui.separator();
            ui.checkbox(&mut self.settings.dark_mode, "Dark mode");
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        // Serialize and save app settings (curve state is skipped)
        if let Ok(json) = serde_json::to_string(self) {
            storage.set_string(eframe::APP_KEY, json);
            trace!("Saved app settings");
        }
    }
}
