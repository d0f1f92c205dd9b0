//! Preview widget - button, track and box rendering.

use eframe::egui::{Color32, Pos2, Rect, Sense, Stroke, Ui, Vec2};
use eframe::egui::epaint::StrokeKind;

use crate::widgets::curve_editor::CurveState;
use super::preview::{PreviewState, BOX_SIZE};

const BOX_COLOR: Color32 = Color32::from_gray(0xcc);

/// Render the Preview button, the track with the animated box, and the
/// current transition description.
///
/// The track spans the available panel width; a trigger sends the box
/// to the opposite resting position (0 or track width - 20px) over
/// 500ms, eased by the curve as it stands at trigger time.
pub fn render_preview(ui: &mut Ui, state: &mut PreviewState, curve: &CurveState) {
    let now = ui.input(|i| i.time);
    let track_width = ui.available_width();

    if ui.button("Preview").clicked() {
        state.trigger(track_width, curve.timing_params(), now);
    }

    let (rect, _response) =
        ui.allocate_exact_size(Vec2::new(track_width, BOX_SIZE + 6.0), Sense::hover());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();

        // Track background
        painter.rect_filled(rect, 2.0, Color32::from_gray(30));
        painter.rect_stroke(rect, 2.0, Stroke::new(1.0, Color32::from_gray(60)), StrokeKind::Inside);

        // The box, offset from the track's left edge
        let offset = state.current_offset(now);
        let box_rect = Rect::from_min_size(
            Pos2::new(rect.min.x + offset, rect.center().y - BOX_SIZE / 2.0),
            Vec2::splat(BOX_SIZE),
        );
        painter.rect_filled(box_rect, 0.0, BOX_COLOR);
    }

    if !state.transition.is_empty() {
        ui.monospace(&state.transition);
    }

    // Keep repainting until the transition has played out
    if state.is_animating() {
        ui.ctx().request_repaint();
    }
    state.tick(now);
}
