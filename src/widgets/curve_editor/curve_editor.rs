//! Curve editor widget - state and math.
//! The UI layer reads `CurveState` to paint and feeds pointer events back
//! through `hit_test`/`drag_to`. Everything here is pure: normalized
//! coordinates in, normalized coordinates out, no egui types.

/// Logical drawing surface size in pixels (both axes)
pub const SURFACE_SIZE: f32 = 300.0;

/// Grid line spacing in logical pixels
pub const GRID_STEP: f32 = 10.0;

/// Pick radius around a handle, in pixels
pub const HANDLE_RADIUS: f32 = 4.0;

/// One control point in normalized coordinates.
///
/// x and y are intended to stay in [0,1] but are not clamped; dragging a
/// handle off the canvas produces out-of-range values on purpose.
/// Normalized y=0 is the *bottom* of the surface (pixel y axis is flipped).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurvePoint {
    pub x: f32,
    pub y: f32,
}

impl CurvePoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Normalized -> pixel space (y flipped: normalized y=0 is bottom)
    pub fn to_pixel(self, w: f32, h: f32) -> (f32, f32) {
        (self.x * w, h - self.y * h)
    }

    /// Pixel -> normalized space, unclamped
    pub fn from_pixel(px: f32, py: f32, w: f32, h: f32) -> Self {
        Self {
            x: px / w,
            y: (h - py) / h,
        }
    }
}

/// Curve editor state.
///
/// `points[0]` and `points[3]` are the pinned endpoints (0,0) and (1,1);
/// `points[1]` and `points[2]` are the draggable handles. Index order is
/// curve order. Only one handle can be dragged at a time.
#[derive(Clone, Debug)]
pub struct CurveState {
    pub points: [CurvePoint; 4],
    /// Index of the handle currently being dragged (1 or 2)
    pub dragging: Option<usize>,
}

impl Default for CurveState {
    fn default() -> Self {
        Self {
            points: [
                CurvePoint::new(0.0, 0.0),
                CurvePoint::new(0.5, 0.1),
                CurvePoint::new(0.5, 0.9),
                CurvePoint::new(1.0, 1.0),
            ],
            dragging: None,
        }
    }
}

impl CurveState {
    /// Find the handle under pixel position (x, y), if any.
    ///
    /// Checks handle 1 first, then handle 2; a hit is a squared pixel
    /// distance <= HANDLE_RADIUS^2. Handle 1 wins when both overlap -
    /// the check order is the only tie-break and is kept deterministic.
    pub fn hit_test(&self, w: f32, h: f32, x: f32, y: f32) -> Option<usize> {
        for idx in [1, 2] {
            let (px, py) = self.points[idx].to_pixel(w, h);
            let dx = px - x;
            let dy = py - y;

            if dx * dx + dy * dy <= HANDLE_RADIUS * HANDLE_RADIUS {
                return Some(idx);
            }
        }

        None
    }

    /// Move a handle to pixel position (offset_x, offset_y).
    ///
    /// The new normalized coordinates are unclamped and may leave [0,1];
    /// the curve then simply renders outside the visible grid.
    pub fn drag_to(&mut self, idx: usize, w: f32, h: f32, offset_x: f32, offset_y: f32) {
        debug_assert!(idx == 1 || idx == 2, "only interior handles are draggable");
        self.points[idx] = CurvePoint::from_pixel(offset_x, offset_y, w, h);
    }

    /// The four cubic-bezier timing parameters: handle 1 then handle 2,
    /// the standard two-parameter-pair encoding of `cubic-bezier(...)`.
    pub fn timing_params(&self) -> (f32, f32, f32, f32) {
        let c2 = self.points[1];
        let c3 = self.points[2];
        (c2.x, c2.y, c3.x, c3.y)
    }
}

/// Interior grid line offsets for one axis: step, 2*step, ... < size.
///
/// The surface edges are not grid lines; a 300-unit axis with a 10-unit
/// step yields 29 offsets (10..=290).
pub fn grid_offsets(size: f32, step: f32) -> Vec<f32> {
    let mut offsets = Vec::new();
    let mut v = step;
    while v < size {
        offsets.push(v);
        v += step;
    }
    offsets
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f32 = SURFACE_SIZE;
    const H: f32 = SURFACE_SIZE;

    #[test]
    fn test_default_points() {
        let state = CurveState::default();
        assert_eq!(state.points[0], CurvePoint::new(0.0, 0.0));
        assert_eq!(state.points[1], CurvePoint::new(0.5, 0.1));
        assert_eq!(state.points[2], CurvePoint::new(0.5, 0.9));
        assert_eq!(state.points[3], CurvePoint::new(1.0, 1.0));
        assert!(state.dragging.is_none());
    }

    #[test]
    fn test_pixel_conversion_flips_y() {
        // Normalized y=0.1 is near the bottom of the surface
        let (px, py) = CurvePoint::new(0.5, 0.1).to_pixel(W, H);
        assert_eq!((px, py), (150.0, 270.0));

        let p = CurvePoint::from_pixel(150.0, 270.0, W, H);
        assert_eq!(p, CurvePoint::new(0.5, 0.1));
    }

    #[test]
    fn test_hit_test_within_radius() {
        let state = CurveState::default();

        // Default handle 1 sits at pixel (150, 270)
        assert_eq!(state.hit_test(W, H, 150.0, 270.0), Some(1));
        assert_eq!(state.hit_test(W, H, 150.0, 267.0), Some(1));
        // Exactly on the 4px boundary still hits (<=)
        assert_eq!(state.hit_test(W, H, 154.0, 270.0), Some(1));
        // Default handle 2 sits at pixel (150, 30)
        assert_eq!(state.hit_test(W, H, 152.0, 32.0), Some(2));
    }

    #[test]
    fn test_hit_test_misses_beyond_radius() {
        let state = CurveState::default();

        assert_eq!(state.hit_test(W, H, 150.0, 265.0), None); // 5px above handle 1
        assert_eq!(state.hit_test(W, H, 155.0, 270.0), None);
        assert_eq!(state.hit_test(W, H, 0.0, 0.0), None);
    }

    #[test]
    fn test_hit_test_handle_1_wins_overlap() {
        // Put both handles on the same spot; check order makes handle 1 win
        let mut state = CurveState::default();
        state.points[2] = state.points[1];

        assert_eq!(state.hit_test(W, H, 150.0, 270.0), Some(1));
    }

    #[test]
    fn test_drag_to_center() {
        let mut state = CurveState::default();
        state.drag_to(1, W, H, 150.0, 150.0);
        assert_eq!(state.points[1], CurvePoint::new(0.5, 0.5));
    }

    #[test]
    fn test_drag_is_unclamped() {
        let mut state = CurveState::default();

        state.drag_to(1, W, H, 330.0, -30.0);
        assert_eq!(state.points[1], CurvePoint::new(1.1, 1.1));

        state.drag_to(2, W, H, -30.0, 330.0);
        assert_eq!(state.points[2], CurvePoint::new(-0.1, -0.1));
    }

    #[test]
    fn test_drag_keeps_last_position() {
        // A drag is just the last move event; endpoints stay pinned
        let mut state = CurveState::default();
        state.drag_to(1, W, H, 30.0, 60.0);
        state.drag_to(1, W, H, 90.0, 240.0);

        assert_eq!(state.points[1], CurvePoint::new(0.3, 0.2));
        assert_eq!(state.points[0], CurvePoint::new(0.0, 0.0));
        assert_eq!(state.points[3], CurvePoint::new(1.0, 1.0));
    }

    #[test]
    fn test_timing_params_use_both_handles() {
        let state = CurveState::default();
        assert_eq!(state.timing_params(), (0.5, 0.1, 0.5, 0.9));
    }

    #[test]
    fn test_grid_offsets_interior_lines() {
        let offsets = grid_offsets(300.0, 10.0);
        assert_eq!(offsets.len(), 29);
        assert_eq!(offsets[0], 10.0);
        assert_eq!(*offsets.last().unwrap(), 290.0);
        // Edges are not grid lines
        assert!(!offsets.contains(&0.0));
        assert!(!offsets.contains(&300.0));
    }
}
