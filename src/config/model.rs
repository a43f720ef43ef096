use std::{fmt, rc::Rc};

use crate::foundation::{
    core::Distance,
    error::{StackError, StackResult},
};

/// Shared completion hook, invoked when the last item enters its stacking window.
#[derive(Clone)]
pub struct StackCompleteHook(Rc<dyn Fn()>);

impl StackCompleteHook {
    /// Wrap a closure.
    pub fn new(f: impl Fn() + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub(crate) fn call(&self) {
        (self.0)()
    }
}

impl fmt::Debug for StackCompleteHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StackCompleteHook(..)")
    }
}

/// Immutable per-engine configuration.
///
/// JSON keys are camelCase; every field is optional and falls back to its default.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct StackConfig {
    /// Trailing space reserved after every item but the last, and the trigger stagger base (px).
    pub item_distance: f64,
    /// Additional target scale per index.
    pub item_scale: f64,
    /// Additional pinned offset per index (px).
    pub item_stack_distance: f64,
    /// Where stacked items settle within the viewport.
    pub stack_position: Distance,
    /// Accepted for interface compatibility; no formula reads it.
    pub scale_end_position: Distance,
    /// Target scale of item 0 once fully stacked.
    pub base_scale: f64,
    /// Accepted for interface compatibility; no formula reads it.
    pub scale_duration: f64,
    /// Degrees per index at full scale progress.
    pub rotation_amount: f64,
    /// Blur radius (px) at full scale progress.
    pub blur_amount: f64,
    /// Fired on the false -> true completion edge.
    #[serde(skip)]
    pub on_stack_complete: Option<StackCompleteHook>,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            item_distance: 100.0,
            item_scale: 0.03,
            item_stack_distance: 30.0,
            stack_position: Distance::Percent(20.0),
            scale_end_position: Distance::Percent(10.0),
            base_scale: 0.85,
            scale_duration: 0.5,
            rotation_amount: 0.0,
            blur_amount: 0.0,
            on_stack_complete: None,
        }
    }
}

impl StackConfig {
    /// Parse from JSON and validate.
    ///
    /// Malformed JSON is a [`StackError::Serde`]; well-formed JSON carrying unusable values
    /// (unparseable distances, wrong types, unknown keys) is [`StackError::InvalidConfiguration`].
    pub fn from_json(s: &str) -> StackResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| match e.classify() {
            serde_json::error::Category::Data => {
                StackError::invalid_configuration(e.to_string())
            }
            _ => StackError::from(e),
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Attach the completion hook.
    pub fn with_on_stack_complete(mut self, f: impl Fn() + 'static) -> Self {
        self.on_stack_complete = Some(StackCompleteHook::new(f));
        self
    }

    /// Reject values that cannot drive a valid pass.
    pub fn validate(&self) -> StackResult<()> {
        let numbers = [
            ("itemDistance", self.item_distance),
            ("itemScale", self.item_scale),
            ("itemStackDistance", self.item_stack_distance),
            ("baseScale", self.base_scale),
            ("scaleDuration", self.scale_duration),
            ("rotationAmount", self.rotation_amount),
            ("blurAmount", self.blur_amount),
        ];
        for (name, v) in numbers {
            if !v.is_finite() {
                return Err(StackError::invalid_configuration(format!(
                    "{name} must be finite"
                )));
            }
        }
        if !self.stack_position.is_finite() || !self.scale_end_position.is_finite() {
            return Err(StackError::invalid_configuration(
                "stackPosition and scaleEndPosition must be finite",
            ));
        }
        if self.item_distance < 0.0 {
            return Err(StackError::invalid_configuration(
                "itemDistance must be >= 0",
            ));
        }
        if self.blur_amount < 0.0 {
            return Err(StackError::invalid_configuration("blurAmount must be >= 0"));
        }
        if self.base_scale <= 0.0 {
            return Err(StackError::invalid_configuration("baseScale must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
