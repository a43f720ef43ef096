use crate::foundation::{core::Distance, error::StackResult};

/// Resolve a percentage-or-pixel string against `container_size`.
///
/// Fails with [`crate::StackError::InvalidConfiguration`] when the value is neither.
pub fn resolve_distance(value: &str, container_size: f64) -> StackResult<f64> {
    Ok(Distance::parse(value)?.resolve(container_size))
}

/// Clamped linear progress of `current` through `[start, end]`.
///
/// A window that collapsed to a point (`end <= start`, e.g. at very large offsets where the span
/// is below f64 resolution) degrades to a step at `start`.
pub fn progress(current: f64, start: f64, end: f64) -> f64 {
    if current < start {
        return 0.0;
    }
    if current >= end {
        return 1.0;
    }
    (current - start) / (end - start)
}

/// Closed scroll-offset interval bracketing one item's stacking phase.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TriggerWindow {
    /// First offset inside the window.
    pub start: f64,
    /// Last offset inside the window.
    pub end: f64,
}

impl TriggerWindow {
    /// Whether `offset` lies inside the closed window.
    pub fn contains(self, offset: f64) -> bool {
        self.start <= offset && offset <= self.end
    }
}

#[cfg(test)]
#[path = "../../tests/unit/progress/calc.rs"]
mod tests;
