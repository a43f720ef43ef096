use crate::{
    config::model::StackConfig,
    progress::calc::{TriggerWindow, progress},
    stack::transform::StackTransform,
    surface::handle::z_order,
};

/// Fraction of a viewport before the section top at which stacking starts.
const ENTER_LEAD: f64 = 0.2;
/// Fraction of the index-scaled item distance each later item waits.
const STAGGER: f64 = 0.3;
/// Fraction of a viewport the end sentinel must still be below the top when stacking stops.
const EXIT_LEAD: f64 = 0.5;
/// Viewport fraction over which an item scales down.
const SCALE_SPAN: f64 = 0.8;

/// Per-tick measurements shared by every item.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TickGeometry {
    /// Current scroll offset.
    pub scroll: f64,
    /// Document-absolute section top.
    pub section_top: f64,
    /// Document-absolute end-sentinel top.
    pub end_top: f64,
    /// Viewport height, strictly positive.
    pub viewport_height: f64,
}

impl TickGeometry {
    /// Offset at which item `index` starts stacking.
    pub fn trigger_start(&self, cfg: &StackConfig, index: usize) -> f64 {
        self.section_top - ENTER_LEAD * self.viewport_height
            + index as f64 * cfg.item_distance * STAGGER
    }

    /// Offset past which every item is frozen.
    pub fn stacking_end(&self) -> f64 {
        self.end_top - EXIT_LEAD * self.viewport_height
    }

    /// Trigger window of item `index`.
    pub fn window(&self, cfg: &StackConfig, index: usize) -> TriggerWindow {
        TriggerWindow {
            start: self.trigger_start(cfg, index),
            end: self.stacking_end(),
        }
    }
}

/// Where an item sits relative to its trigger window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StackPhase {
    /// Before the window: natural layout.
    PreStack,
    /// Inside the window: pinned to its slot.
    InStack,
    /// After the window: frozen at the end position.
    PastStack,
}

/// Full result for one item on one tick.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSample {
    /// Item index.
    pub index: usize,
    /// Trigger window used this tick.
    pub window: TriggerWindow,
    /// Scale-down progress in `[0, 1]`.
    pub scale_progress: f64,
    /// Vertical placement phase.
    pub phase: StackPhase,
    /// Rounded target transform.
    pub transform: StackTransform,
}

/// Derive the target transform of item `index` of `count`, laid out at `card_top`.
pub fn compute_item(
    cfg: &StackConfig,
    geo: &TickGeometry,
    index: usize,
    count: usize,
    card_top: f64,
) -> ItemSample {
    let s = geo.scroll;
    let h = geo.viewport_height;
    let i = index as f64;
    let window = geo.window(cfg, index);

    let scale_progress = progress(s, window.start, window.start + SCALE_SPAN * h);
    let target_scale = cfg.base_scale + i * cfg.item_scale;
    let scale = 1.0 - scale_progress * (1.0 - target_scale);

    let rotation = if cfg.rotation_amount != 0.0 {
        i * cfg.rotation_amount * scale_progress
    } else {
        0.0
    };

    let blur = if cfg.blur_amount > 0.0 && scale_progress > 0.0 {
        cfg.blur_amount.min(scale_progress * cfg.blur_amount)
    } else {
        0.0
    };

    let stack_offset = cfg.stack_position.resolve(h) + i * cfg.item_stack_distance;
    let (phase, translate_y) = if window.contains(s) {
        (StackPhase::InStack, s - card_top + stack_offset)
    } else if s > window.end {
        (StackPhase::PastStack, window.end - card_top + stack_offset)
    } else {
        (StackPhase::PreStack, 0.0)
    };
    let z_index = z_order(count, index, phase != StackPhase::PreStack);

    ItemSample {
        index,
        window,
        scale_progress,
        phase,
        transform: StackTransform {
            translate_y,
            scale,
            rotation,
            blur,
            z_index,
        }
        .rounded(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stack/compute.rs"]
mod tests;
