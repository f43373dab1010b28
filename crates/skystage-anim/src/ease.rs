//! Easing curves. Input and output are both in [0, 1].

/// Quadratic ease-out: fast start, decelerating finish.
pub fn out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Linear passthrough (clamped).
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}
