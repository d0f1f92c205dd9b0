//! Curve editor widget - painting and pointer input.
//!
//! Drawing order matches the readout below the canvas: grid first, then
//! the bezier curve, then the control-polygon edges, then the handle
//! circles. Endpoints get no marker - only the two interior handles do.

use eframe::egui::{self, Color32, Pos2, Sense, Stroke, Ui, Vec2};
use eframe::egui::epaint::{CubicBezierShape, StrokeKind};
use log::debug;

use crate::utils::format_fixed;
use super::curve_editor::{grid_offsets, CurveState, GRID_STEP, HANDLE_RADIUS, SURFACE_SIZE};

const GRID_COLOR: Color32 = Color32::from_gray(0x55);
const CURVE_COLOR: Color32 = Color32::YELLOW;
const POLYGON_COLOR: Color32 = Color32::RED;
const HANDLE_COLOR: Color32 = Color32::WHITE;

/// Render the curve editor canvas plus the numeric readout.
///
/// Handles the whole drag lifecycle on the returned response: primary
/// button press on a handle starts a drag, every pointer move while
/// dragging rewrites that handle's normalized coordinates (unclamped),
/// release ends the drag.
pub fn render_curve_editor(ui: &mut Ui, state: &mut CurveState) {
    let (rect, response) =
        ui.allocate_exact_size(Vec2::splat(SURFACE_SIZE), Sense::click_and_drag());

    let w = rect.width();
    let h = rect.height();

    // Drag start: pick the handle under the pointer, if any.
    // press_origin() is the exact press position; interact_pointer_pos()
    // is offset by the drag threshold and would shrink the 4px hit box.
    if response.drag_started_by(egui::PointerButton::Primary) {
        if let Some(pos) = ui.input(|i| i.pointer.press_origin()) {
            let local = pos - rect.min;
            state.dragging = state.hit_test(w, h, local.x, local.y);
            if let Some(idx) = state.dragging {
                debug!("[curve] drag start: handle {} at ({:.1}, {:.1})", idx, local.x, local.y);
            }
        }
    }

    // Drag move: state is updated before this same frame paints
    if let Some(idx) = state.dragging {
        if response.dragged_by(egui::PointerButton::Primary) {
            if let Some(pos) = response.interact_pointer_pos() {
                let local = pos - rect.min;
                state.drag_to(idx, w, h, local.x, local.y);
            }
        }
    }

    if response.drag_stopped_by(egui::PointerButton::Primary) {
        if let Some(idx) = state.dragging.take() {
            let p = state.points[idx];
            debug!("[curve] drag end: handle {} -> ({:.3}, {:.3})", idx, p.x, p.y);
        }
    }

    // Cursor feedback: grab over a handle, grabbing while dragging
    if state.dragging.is_some() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
    } else if let Some(pos) = response.hover_pos() {
        let local = pos - rect.min;
        if state.hit_test(w, h, local.x, local.y).is_some() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
        }
    }

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();

        // Canvas background + 1px border
        painter.rect_filled(rect, 0.0, Color32::from_gray(20));
        painter.rect_stroke(rect, 0.0, Stroke::new(1.0, Color32::BLACK), StrokeKind::Inside);

        draw_grid(painter, rect);
        draw_curve(painter, rect, state);
    }

    draw_readout(ui, state);
}

/// Grid lines every GRID_STEP logical units, offset by 0.5px so the
/// 1px strokes land on pixel centers and stay crisp.
fn draw_grid(painter: &egui::Painter, rect: egui::Rect) {
    let stroke = Stroke::new(1.0, GRID_COLOR);

    for x in grid_offsets(rect.width(), GRID_STEP) {
        painter.line_segment(
            [
                Pos2::new(rect.min.x + x + 0.5, rect.min.y + 0.5),
                Pos2::new(rect.min.x + x + 0.5, rect.max.y + 0.5),
            ],
            stroke,
        );
    }

    for y in grid_offsets(rect.height(), GRID_STEP) {
        painter.line_segment(
            [
                Pos2::new(rect.min.x + 0.5, rect.min.y + y + 0.5),
                Pos2::new(rect.max.x + 0.5, rect.min.y + y + 0.5),
            ],
            stroke,
        );
    }
}

/// Bezier curve, control-polygon edges and handle circles, all in the
/// canvas' pixel space (normalized y=0 maps to the bottom edge).
fn draw_curve(painter: &egui::Painter, rect: egui::Rect, state: &CurveState) {
    let to_screen = |i: usize| -> Pos2 {
        let (px, py) = state.points[i].to_pixel(rect.width(), rect.height());
        Pos2::new(rect.min.x + px, rect.min.y + py)
    };

    let c1 = to_screen(0);
    let c2 = to_screen(1);
    let c3 = to_screen(2);
    let c4 = to_screen(3);

    painter.add(CubicBezierShape::from_points_stroke(
        [c1, c2, c3, c4],
        false,
        Color32::TRANSPARENT,
        Stroke::new(1.0, CURVE_COLOR),
    ));

    painter.line_segment([c1, c2], Stroke::new(1.0, POLYGON_COLOR));
    painter.line_segment([c3, c4], Stroke::new(1.0, POLYGON_COLOR));

    // No markers on the pinned endpoints
    painter.circle_stroke(c2, HANDLE_RADIUS, Stroke::new(1.0, HANDLE_COLOR));
    painter.circle_stroke(c3, HANDLE_RADIUS, Stroke::new(1.0, HANDLE_COLOR));
}

/// Numeric readout of all four control points, 2 decimal places.
fn draw_readout(ui: &mut Ui, state: &CurveState) {
    for (i, p) in state.points.iter().enumerate() {
        ui.monospace(format!(
            "c{}: [{}, {}]",
            i + 1,
            format_fixed(p.x, 2),
            format_fixed(p.y, 2)
        ));
    }
}
