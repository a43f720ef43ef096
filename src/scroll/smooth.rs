use crate::{
    foundation::{
        error::{StackError, StackResult},
        math::{damp, lerp},
    },
    scroll::{ease::Ease, source::ScrollSource},
};

/// Snap distance (px) below which an animation settles on its target.
const SETTLE_PX: f64 = 0.5;

/// Options of the page-level smooth scrolling substrate.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SmoothScrollOptions {
    /// Per-frame (at 60 fps) damping factor in `(0, 1]`. Takes precedence over `duration`.
    pub lerp: Option<f64>,
    /// Tween length in seconds when `lerp` is unset.
    pub duration: f64,
    /// Tween curve when `lerp` is unset.
    pub easing: Ease,
    /// Wheel delta multiplier.
    pub wheel_multiplier: f64,
    /// Touch delta multiplier.
    pub touch_multiplier: f64,
    /// Disable clamping to `[0, limit]`.
    pub infinite: bool,
}

impl Default for SmoothScrollOptions {
    fn default() -> Self {
        Self {
            lerp: Some(0.1),
            duration: 1.2,
            easing: Ease::OutExpo,
            wheel_multiplier: 1.0,
            touch_multiplier: 2.0,
            infinite: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Motion {
    Idle,
    Damping,
    Tween { from: f64, start_ms: Option<f64> },
}

/// Smooth scrolling substrate: normalizes wheel and touch input into one animated offset.
#[derive(Clone, Debug)]
pub struct SmoothScroller {
    opts: SmoothScrollOptions,
    limit: f64,
    target: f64,
    animated: f64,
    motion: Motion,
    last_time_ms: Option<f64>,
    active: bool,
    emit_next: bool,
}

impl SmoothScroller {
    /// Create an idle substrate scrolling over `[0, limit]`.
    pub fn new(opts: SmoothScrollOptions, limit: f64) -> StackResult<Self> {
        if let Some(l) = opts.lerp
            && !(l > 0.0 && l <= 1.0)
        {
            return Err(StackError::invalid_configuration(
                "smooth scroll lerp must be in (0, 1]",
            ));
        }
        if !(opts.duration.is_finite() && opts.duration > 0.0) {
            return Err(StackError::invalid_configuration(
                "smooth scroll duration must be finite and > 0",
            ));
        }
        if !opts.wheel_multiplier.is_finite() || !opts.touch_multiplier.is_finite() {
            return Err(StackError::invalid_configuration(
                "smooth scroll multipliers must be finite",
            ));
        }
        if !(limit.is_finite() && limit >= 0.0) {
            return Err(StackError::invalid_configuration(
                "scroll limit must be finite and >= 0",
            ));
        }
        Ok(Self {
            opts,
            limit,
            target: 0.0,
            animated: 0.0,
            motion: Motion::Idle,
            last_time_ms: None,
            active: false,
            emit_next: false,
        })
    }

    /// Maximum offset (document height minus viewport height).
    pub fn limit(&self) -> f64 {
        self.limit
    }

    /// Update the scrollable extent after a layout change.
    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit.max(0.0);
        self.target = self.clamp(self.target);
        self.animated = self.clamp(self.animated);
    }

    /// Offset the animation is heading toward.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Feed a wheel delta (positive scrolls down).
    pub fn on_wheel(&mut self, delta_y: f64) {
        self.push_target(delta_y * self.opts.wheel_multiplier);
    }

    /// Feed a touch drag delta (positive scrolls down).
    pub fn on_touch(&mut self, delta_y: f64) {
        self.push_target(delta_y * self.opts.touch_multiplier);
    }

    /// Scroll to an absolute offset, animated or immediately.
    pub fn scroll_to(&mut self, offset: f64, immediate: bool) {
        if !self.active {
            return;
        }
        if immediate {
            self.target = self.clamp(offset);
            self.animated = self.target;
            self.motion = Motion::Idle;
            self.emit_next = true;
            return;
        }
        let delta = offset - self.target;
        self.push_target(delta);
    }

    fn push_target(&mut self, delta: f64) {
        if !self.active || !delta.is_finite() || delta == 0.0 {
            return;
        }
        self.target = self.clamp(self.target + delta);
        self.motion = match self.opts.lerp {
            Some(_) => Motion::Damping,
            None => Motion::Tween {
                from: self.animated,
                start_ms: None,
            },
        };
    }

    fn clamp(&self, v: f64) -> f64 {
        if self.opts.infinite {
            v
        } else {
            v.clamp(0.0, self.limit)
        }
    }

    fn advance(&mut self, time_ms: f64, dt_s: f64) {
        match self.motion {
            Motion::Idle => {}
            Motion::Damping => {
                let lambda = 60.0 * self.opts.lerp.unwrap_or(1.0);
                self.animated = damp(self.animated, self.target, lambda, dt_s);
                if (self.target - self.animated).abs() < SETTLE_PX {
                    self.animated = self.target;
                    self.motion = Motion::Idle;
                }
            }
            Motion::Tween { from, start_ms } => {
                let start = start_ms.unwrap_or(time_ms);
                let t = ((time_ms - start) / 1000.0 / self.opts.duration).clamp(0.0, 1.0);
                self.animated = lerp(from, self.target, self.opts.easing.apply(t));
                self.motion = if t >= 1.0 {
                    self.animated = self.target;
                    Motion::Idle
                } else {
                    Motion::Tween {
                        from,
                        start_ms: Some(start),
                    }
                };
            }
        }
    }
}

impl ScrollSource for SmoothScroller {
    fn start(&mut self) {
        self.active = true;
        self.emit_next = true;
        self.last_time_ms = None;
    }

    fn raf(&mut self, time_ms: f64) -> Option<f64> {
        if !self.active {
            return None;
        }
        let dt_s = self
            .last_time_ms
            .map_or(0.0, |last| ((time_ms - last) / 1000.0).max(0.0));
        self.last_time_ms = Some(time_ms);

        let before = self.animated;
        self.advance(time_ms, dt_s);
        let moved = self.animated != before;
        if moved || std::mem::take(&mut self.emit_next) {
            Some(self.animated)
        } else {
            None
        }
    }

    fn offset(&self) -> f64 {
        self.animated
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn dispose(&mut self) {
        self.active = false;
        self.motion = Motion::Idle;
        self.target = self.animated;
        self.last_time_ms = None;
        self.emit_next = false;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/smooth.rs"]
mod tests;
