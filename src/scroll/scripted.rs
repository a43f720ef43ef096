use crate::scroll::source::ScrollSource;

/// Deterministic substrate that emits a prepared list of offsets, one per frame.
#[derive(Clone, Debug)]
pub struct ScriptedScroll {
    offsets: Vec<f64>,
    cursor: usize,
    current: f64,
    active: bool,
}

impl ScriptedScroll {
    /// Script the given offsets. The initial offset is the first entry (or 0).
    pub fn new(offsets: impl IntoIterator<Item = f64>) -> Self {
        let offsets: Vec<f64> = offsets.into_iter().collect();
        let current = offsets.first().copied().unwrap_or(0.0);
        Self {
            offsets,
            cursor: 0,
            current,
            active: false,
        }
    }

    /// Inclusive sweep from `from` to `to` in increments of `step` (either direction).
    pub fn sweep(from: f64, to: f64, step: f64) -> Self {
        Self::new(sweep_offsets(from, to, step))
    }

    /// Append another script after this one.
    pub fn then(mut self, next: ScriptedScroll) -> Self {
        self.offsets.extend(next.offsets);
        self
    }

    /// Frames left before the script runs dry.
    pub fn remaining(&self) -> usize {
        self.offsets.len().saturating_sub(self.cursor)
    }
}

fn sweep_offsets(from: f64, to: f64, step: f64) -> Vec<f64> {
    if !(step.is_finite() && step > 0.0) || from == to {
        return vec![from];
    }
    let dir = if to >= from { 1.0 } else { -1.0 };
    let n = ((to - from).abs() / step).floor() as usize;
    let mut out: Vec<f64> = (0..=n).map(|k| from + dir * step * k as f64).collect();
    if out.last().is_some_and(|&v| v != to) {
        out.push(to);
    }
    out
}

impl ScrollSource for ScriptedScroll {
    fn start(&mut self) {
        self.active = true;
    }

    fn raf(&mut self, _time_ms: f64) -> Option<f64> {
        if !self.active {
            return None;
        }
        let v = *self.offsets.get(self.cursor)?;
        self.cursor += 1;
        self.current = v;
        Some(v)
    }

    fn offset(&self) -> f64 {
        self.current
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn dispose(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/scripted.rs"]
mod tests;
