/// Round to `places` decimals, halves toward positive infinity.
pub(crate) fn round_to(v: f64, places: i32) -> f64 {
    let f = 10f64.powi(places);
    let r = (v * f + 0.5).floor() / f;
    // Collapse -0.0 so cached values compare and print cleanly.
    if r == 0.0 { 0.0 } else { r }
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Frame-rate independent exponential approach of `a` toward `b`.
pub(crate) fn damp(a: f64, b: f64, lambda: f64, dt_s: f64) -> f64 {
    lerp(a, b, 1.0 - (-lambda * dt_s).exp())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
