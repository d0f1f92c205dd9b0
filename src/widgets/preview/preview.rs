//! Preview widget - state and timing math.
//!
//! A trigger toggles the box between its left (0px) and right
//! (track width - box width) resting positions and starts a 500ms
//! animation eased by the current curve. The transition description
//! string mirrors the CSS form `left 500ms cubic-bezier(x1, y1, x2, y2)`
//! and is the widget's observable contract; the actual motion is
//! computed by `CubicTiming` since there is no CSS engine to hand it to.

use log::debug;

/// Preview box size in pixels (square)
pub const BOX_SIZE: f32 = 20.0;

/// Fixed transition duration in milliseconds
pub const DURATION_MS: f64 = 500.0;

/// CSS-style cubic-bezier timing function.
///
/// The curve runs from (0,0) to (1,1) with (x1,y1) and (x2,y2) as the
/// interior control points. `ease` maps input progress (time fraction)
/// to output progress by solving bezier_x(t) = u for t, then sampling
/// bezier_y(t). Output may overshoot [0,1] when the y parameters do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicTiming {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicTiming {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Ease input progress `u` in [0,1] through the timing curve.
    pub fn ease(self, u: f32) -> f32 {
        if u <= 0.0 {
            return 0.0;
        }
        if u >= 1.0 {
            return 1.0;
        }
        sample_axis(self.y1, self.y2, self.solve_t(u))
    }

    /// Solve bezier_x(t) = u for t: Newton iterations, bisection fallback.
    fn solve_t(self, u: f32) -> f32 {
        let mut t = u;
        for _ in 0..8 {
            let x = sample_axis(self.x1, self.x2, t) - u;
            if x.abs() < 1e-6 {
                return t;
            }
            let dx = sample_axis_derivative(self.x1, self.x2, t);
            if dx.abs() < 1e-6 {
                break;
            }
            t -= x / dx;
        }

        // Newton ran away (flat or out-of-range x parameters): bisect
        let (mut lo, mut hi) = (0.0f32, 1.0f32);
        t = u;
        while hi - lo > 1e-6 {
            if sample_axis(self.x1, self.x2, t) < u {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }
}

/// Evaluate one axis of the unit bezier at t (endpoints 0 and 1).
fn sample_axis(c1: f32, c2: f32, t: f32) -> f32 {
    // Horner form of 3*c1*t*(1-t)^2 + 3*c2*t^2*(1-t) + t^3
    ((1.0 - 3.0 * c2 + 3.0 * c1) * t * t * t)
        + ((3.0 * c2 - 6.0 * c1) * t * t)
        + (3.0 * c1 * t)
}

fn sample_axis_derivative(c1: f32, c2: f32, t: f32) -> f32 {
    3.0 * (1.0 - 3.0 * c2 + 3.0 * c1) * t * t + 2.0 * (3.0 * c2 - 6.0 * c1) * t + 3.0 * c1
}

/// An in-flight preview animation
#[derive(Clone, Copy, Debug)]
pub struct PreviewAnim {
    pub start_time: f64,
    pub from: f32,
    pub to: f32,
    pub timing: CubicTiming,
}

/// Preview track state (resting offset, transition string, animation)
#[derive(Clone, Debug, Default)]
pub struct PreviewState {
    /// Resting `left` offset of the box in pixels (0 = left edge)
    pub left_px: f32,
    /// Last transition description, CSS form. Empty until first trigger.
    pub transition: String,
    pub anim: Option<PreviewAnim>,
}

impl PreviewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the resting position and start a new animation.
    ///
    /// From the left resting position the box travels to
    /// `track_width - BOX_SIZE`, otherwise back to 0. The timing
    /// parameters are frozen at trigger time; editing the curve
    /// mid-flight does not bend the running animation.
    pub fn trigger(&mut self, track_width: f32, params: (f32, f32, f32, f32), now: f64) {
        let (x1, y1, x2, y2) = params;

        let from = self.left_px;
        let to = if self.left_px == 0.0 {
            track_width - BOX_SIZE
        } else {
            0.0
        };

        self.left_px = to;
        self.transition = format!(
            "left {}ms cubic-bezier({}, {}, {}, {})",
            DURATION_MS as u32, x1, y1, x2, y2
        );
        self.anim = Some(PreviewAnim {
            start_time: now,
            from,
            to,
            timing: CubicTiming::new(x1, y1, x2, y2),
        });

        debug!("[preview] trigger: {} -> {} ({})", from, to, self.transition);
    }

    /// Drawn offset of the box at UI time `now`.
    pub fn current_offset(&self, now: f64) -> f32 {
        match self.anim {
            Some(anim) => {
                let u = ((now - anim.start_time) * 1000.0 / DURATION_MS) as f32;
                anim.from + (anim.to - anim.from) * anim.timing.ease(u)
            }
            None => self.left_px,
        }
    }

    /// Drop the animation once it has run its full duration.
    pub fn tick(&mut self, now: f64) {
        if let Some(anim) = self.anim {
            if (now - anim.start_time) * 1000.0 >= DURATION_MS {
                self.anim = None;
                self.left_px = anim.to;
            }
        }
    }

    pub fn is_animating(&self) -> bool {
        self.anim.is_some()
    }
}
