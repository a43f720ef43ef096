//! Scroll-linked stacking engine.
//!
//! Given a vertical sequence of items and a live scroll offset, the engine derives each item's
//! scale, vertical offset, rotation, blur and stacking order so the items pile up as the page
//! scrolls past them.
//!
//! # Per-tick flow
//!
//! 1. **Source**: a [`ScrollSource`] emits an offset once per animation frame.
//! 2. **Compute**: [`compute_item`] derives each item's [`StackTransform`] from the offset, the
//!    section geometry and the [`StackConfig`].
//! 3. **Commit**: [`TransformCache`] writes only transforms that moved past tolerance.
//! 4. **Complete**: [`CompletionLatch`] fires the completion hook when the last item enters its
//!    trigger window.
//!
//! [`StackEngine`] owns that loop and its setup/teardown against the host's [`ItemHandle`],
//! [`SectionHandle`] and [`Viewport`]. [`VirtualPage`] is a headless host for tests and tooling.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Single-threaded**: a pass runs to completion; a tick arriving mid-pass is dropped.
//! - **Fail at construction**: configuration errors surface from [`StackConfig::validate`],
//!   never from a tick.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod foundation;
mod progress;
mod scroll;
mod stack;
mod surface;

pub use config::model::{StackCompleteHook, StackConfig};
pub use foundation::core::{Affine, Distance, Point, Rect, Vec2};
pub use foundation::error::{StackError, StackResult};
pub use progress::calc::{TriggerWindow, progress, resolve_distance};
pub use scroll::ease::Ease;
pub use scroll::scripted::ScriptedScroll;
pub use scroll::smooth::{SmoothScrollOptions, SmoothScroller};
pub use scroll::source::ScrollSource;
pub use stack::complete::{CompletionEdge, CompletionLatch};
pub use stack::compute::{ItemSample, StackPhase, TickGeometry, compute_item};
pub use stack::detect::{
    BLUR_TOLERANCE, ROTATION_TOLERANCE, SCALE_TOLERANCE, TRANSLATE_TOLERANCE, TransformCache,
    exceeds_tolerance,
};
pub use stack::engine::{StackEngine, TickOutcome};
pub use stack::transform::StackTransform;
pub use surface::handle::{
    BaseStyle, ItemHandle, ItemStyle, SectionHandle, StackMount, Viewport,
};
pub use surface::memory::{FixedViewport, VirtualPage};
