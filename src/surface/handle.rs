use crate::foundation::core::Affine;

/// Renderable block the engine positions. Addressed by stable index inside the engine.
pub trait ItemHandle {
    /// Document-absolute layout top (px), unaffected by applied transforms.
    fn measure_top(&self) -> f64;
    /// Commit a computed style.
    fn apply_style(&mut self, style: &ItemStyle);
    /// Reserve `px` of space after the item in natural document flow.
    fn reserve_trailing_space(&mut self, px: f64);
    /// Install compositing hints and the natural-order z-index.
    fn init_base_style(&mut self, base: &BaseStyle);
}

/// Scroll region that owns all items.
pub trait SectionHandle {
    /// Document-absolute top (px).
    fn measure_top(&self) -> f64;
    /// Height (px).
    fn measure_height(&self) -> f64;
    /// Document-absolute top of the end sentinel placed after the last item, if present.
    fn end_sentinel_top(&self) -> Option<f64>;
}

/// Visible page area.
pub trait Viewport {
    /// Height (px).
    fn height(&self) -> f64;
}

/// Handles the engine is mounted on. Returned to the caller by teardown.
pub struct StackMount {
    /// Items in stacking order.
    pub items: Vec<Box<dyn ItemHandle>>,
    /// Enclosing section; `None` leaves the engine inert.
    pub section: Option<Box<dyn SectionHandle>>,
    /// Page viewport.
    pub viewport: Box<dyn Viewport>,
}

impl std::fmt::Debug for StackMount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StackMount")
            .field("items", &self.items.len())
            .field("section", &self.section.is_some())
            .finish_non_exhaustive()
    }
}

/// Visual style written on commit.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ItemStyle {
    /// CSS transform, e.g. `translate3d(0, 12.5px, 0) scale(0.9) rotate(0deg)`.
    pub transform: String,
    /// CSS filter; empty when there is no blur.
    pub filter: String,
    /// Stacking order.
    pub z_index: i32,
    /// Same transform as a matrix about the item's top-center.
    pub matrix: Affine,
}

/// Static hints installed at setup.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct BaseStyle {
    /// `will-change` hint.
    pub will_change: &'static str,
    /// `transform-origin`.
    pub transform_origin: &'static str,
    /// `backface-visibility`.
    pub backface_visibility: &'static str,
    /// Initial transform promoting the item to its own layer.
    pub transform: &'static str,
    /// `perspective`.
    pub perspective: &'static str,
    /// `position`.
    pub position: &'static str,
    /// Natural-order z-index (`count - index`).
    pub z_index: i32,
}

impl BaseStyle {
    /// Base style for item `index` of `count`.
    pub fn for_item(index: usize, count: usize) -> Self {
        Self {
            will_change: "transform, filter, z-index",
            transform_origin: "top center",
            backface_visibility: "hidden",
            transform: "translateZ(0)",
            perspective: "1000px",
            position: "relative",
            z_index: z_order(count, index, false),
        }
    }
}

/// `count - index` for natural order, `count + index` once stacked.
pub(crate) fn z_order(count: usize, index: usize, stacked: bool) -> i32 {
    let n = i64::try_from(count).unwrap_or(i64::MAX);
    let i = i64::try_from(index).unwrap_or(i64::MAX);
    let z = if stacked {
        n.saturating_add(i)
    } else {
        n.saturating_sub(i)
    };
    i32::try_from(z).unwrap_or(if z < 0 { i32::MIN } else { i32::MAX })
}
