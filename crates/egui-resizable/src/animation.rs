use egui::lerp;

// control points of the ease-in timing curve
const X1: f32 = 0.42;
const X2: f32 = 1.0;
const Y1: f32 = 0.0;
const Y2: f32 = 1.0;

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 24;
const EPSILON: f32 = 1e-6;

/// Ease-in timing curve: cubic Bézier through (0.42, 0) and (1, 1).
///
/// `t` is the elapsed fraction of the animation and is clamped to `[0, 1]`.
/// The result is the interpolation factor at that point.
pub fn ease_in(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t <= 0.0 || t >= 1.0 {
        return t;
    }
    bezier(Y1, Y2, solve_curve_x(t))
}

#[inline]
fn bezier(p1: f32, p2: f32, s: f32) -> f32 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    ((a * s + b) * s + c) * s
}

#[inline]
fn bezier_slope(p1: f32, p2: f32, s: f32) -> f32 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    (3.0 * a * s + 2.0 * b) * s + c
}

/// Finds the curve parameter whose x coordinate equals `x`.
fn solve_curve_x(x: f32) -> f32 {
    let mut s = x;
    for _ in 0..NEWTON_ITERATIONS {
        let err = bezier(X1, X2, s) - x;
        if err.abs() < EPSILON {
            return s;
        }
        let slope = bezier_slope(X1, X2, s);
        if slope.abs() < EPSILON {
            break;
        }
        s -= err / slope;
    }

    // newton stalled, x(s) is monotonic so bisection always converges
    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = x;
    for _ in 0..BISECTION_ITERATIONS {
        let value = bezier(X1, X2, s);
        if (value - x).abs() < EPSILON {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) * 0.5;
    }
    s
}

/// Presentation of the drag handle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct HandleVisual {
    pub opacity: f32,
    pub scale: f32,
}

impl HandleVisual {
    pub const RESTING: HandleVisual = HandleVisual {
        opacity: 1.0,
        scale: 1.0,
    };

    pub const DRAGGING: HandleVisual = HandleVisual {
        opacity: 0.1,
        scale: 2.0,
    };

    pub fn lerp(self, to: HandleVisual, factor: f32) -> HandleVisual {
        HandleVisual {
            opacity: lerp(self.opacity..=to.opacity, factor),
            scale: lerp(self.scale..=to.scale, factor),
        }
    }
}

impl Default for HandleVisual {
    fn default() -> Self {
        Self::RESTING
    }
}

/// Time-driven transition between two [`HandleVisual`]s, sampled once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleTween {
    from: HandleVisual,
    to: HandleVisual,
    start_time: f64,
    duration: f32,
}

impl Default for HandleTween {
    fn default() -> Self {
        Self::settled(HandleVisual::RESTING)
    }
}

impl HandleTween {
    /// A tween that already sits at `visual`.
    pub fn settled(visual: HandleVisual) -> Self {
        Self {
            from: visual,
            to: visual,
            start_time: 0.0,
            duration: 0.0,
        }
    }

    pub fn target(&self) -> HandleVisual {
        self.to
    }

    pub fn sample(&self, now: f64) -> HandleVisual {
        if self.duration <= 0.0 {
            return self.to;
        }
        let elapsed = ((now - self.start_time) / self.duration as f64) as f32;
        self.from.lerp(self.to, ease_in(elapsed))
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.duration > 0.0 && now < self.start_time + self.duration as f64
    }

    /// Starts a new transition towards `target` from wherever the handle is at `now`.
    pub fn retarget(&mut self, target: HandleVisual, now: f64, duration: f32) {
        let current = self.sample(now);
        *self = Self {
            from: current,
            to: target,
            start_time: now,
            duration: duration.max(0.0),
        };
    }
}
