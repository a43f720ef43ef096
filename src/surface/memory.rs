use std::{cell::RefCell, rc::Rc};

use crate::{
    foundation::core::{Rect, Vec2},
    surface::handle::{BaseStyle, ItemHandle, ItemStyle, SectionHandle, StackMount, Viewport},
};

#[derive(Debug, Default)]
struct PageState {
    section_top: f64,
    viewport_height: f64,
    width: f64,
    heights: Vec<f64>,
    trailing: Vec<f64>,
    end_sentinel: bool,
    end_spacer: f64,
    styles: Vec<Option<ItemStyle>>,
    bases: Vec<Option<BaseStyle>>,
    writes: Vec<usize>,
}

impl PageState {
    fn item_top(&self, index: usize) -> f64 {
        let n = index.min(self.heights.len());
        self.section_top
            + self.heights[..n].iter().sum::<f64>()
            + self.trailing[..n].iter().sum::<f64>()
    }

    fn items_bottom(&self) -> f64 {
        self.item_top(self.heights.len())
    }
}

/// Headless page: one section of vertically stacked items, laid out in natural flow.
///
/// Cloning shares the same page, so a test can keep a probe while the engine owns the handles.
#[derive(Clone, Debug)]
pub struct VirtualPage {
    state: Rc<RefCell<PageState>>,
}

impl VirtualPage {
    /// Empty page with the section starting at `section_top`.
    pub fn new(section_top: f64, viewport_height: f64) -> Self {
        Self {
            state: Rc::new(RefCell::new(PageState {
                section_top,
                viewport_height,
                width: 600.0,
                end_sentinel: true,
                ..PageState::default()
            })),
        }
    }

    /// Append items with the given heights.
    pub fn with_items(self, heights: impl IntoIterator<Item = f64>) -> Self {
        {
            let mut st = self.state.borrow_mut();
            for h in heights {
                st.heights.push(h.max(0.0));
                st.trailing.push(0.0);
                st.styles.push(None);
                st.bases.push(None);
                st.writes.push(0);
            }
        }
        self
    }

    /// Item width used for visual bounds.
    pub fn with_width(self, width: f64) -> Self {
        self.state.borrow_mut().width = width.max(0.0);
        self
    }

    /// Space after the end sentinel that still belongs to the section.
    pub fn with_end_spacer(self, px: f64) -> Self {
        self.state.borrow_mut().end_spacer = px.max(0.0);
        self
    }

    /// Drop the end sentinel; the section bottom bounds stacking instead.
    pub fn without_end_sentinel(self) -> Self {
        self.state.borrow_mut().end_sentinel = false;
        self
    }

    /// Move the section, e.g. to simulate responsive content above it.
    pub fn set_section_top(&self, top: f64) {
        self.state.borrow_mut().section_top = top;
    }

    /// Handles for mounting an engine on this page.
    pub fn mount(&self) -> StackMount {
        let count = self.item_count();
        StackMount {
            items: (0..count)
                .map(|index| {
                    Box::new(VirtualItem {
                        state: self.state.clone(),
                        index,
                    }) as Box<dyn ItemHandle>
                })
                .collect(),
            section: Some(Box::new(VirtualSection {
                state: self.state.clone(),
            })),
            viewport: Box::new(FixedViewport(self.viewport_height())),
        }
    }

    /// Number of items.
    pub fn item_count(&self) -> usize {
        self.state.borrow().heights.len()
    }

    /// Viewport height.
    pub fn viewport_height(&self) -> f64 {
        self.state.borrow().viewport_height
    }

    /// Layout top of item `index`, ignoring applied transforms.
    pub fn item_top(&self, index: usize) -> f64 {
        self.state.borrow().item_top(index)
    }

    /// Total document height: the section plus one viewport of trailing page.
    pub fn document_height(&self) -> f64 {
        let st = self.state.borrow();
        st.items_bottom() + st.end_spacer + st.viewport_height
    }

    /// Largest reachable scroll offset.
    pub fn scroll_limit(&self) -> f64 {
        (self.document_height() - self.viewport_height()).max(0.0)
    }

    /// Last style committed to item `index`.
    pub fn style(&self, index: usize) -> Option<ItemStyle> {
        self.state.borrow().styles.get(index).cloned().flatten()
    }

    /// Base style installed at setup.
    pub fn base_style(&self, index: usize) -> Option<BaseStyle> {
        self.state.borrow().bases.get(index).cloned().flatten()
    }

    /// Trailing space reserved after item `index`.
    pub fn trailing_space(&self, index: usize) -> f64 {
        self.state.borrow().trailing.get(index).copied().unwrap_or(0.0)
    }

    /// Number of committed style writes for item `index`.
    pub fn write_count(&self, index: usize) -> usize {
        self.state.borrow().writes.get(index).copied().unwrap_or(0)
    }

    /// Document-space bounding box of item `index` after its committed transform.
    pub fn visual_rect(&self, index: usize) -> Option<Rect> {
        let st = self.state.borrow();
        let h = *st.heights.get(index)?;
        let half_w = st.width * 0.5;
        let local = Rect::new(-half_w, 0.0, half_w, h);
        let placed = match st.styles.get(index).cloned().flatten() {
            Some(style) => style.matrix.transform_rect_bbox(local),
            None => local,
        };
        Some(placed + Vec2::new(half_w, st.item_top(index)))
    }
}

struct VirtualItem {
    state: Rc<RefCell<PageState>>,
    index: usize,
}

impl ItemHandle for VirtualItem {
    fn measure_top(&self) -> f64 {
        self.state.borrow().item_top(self.index)
    }

    fn apply_style(&mut self, style: &ItemStyle) {
        let mut st = self.state.borrow_mut();
        st.styles[self.index] = Some(style.clone());
        st.writes[self.index] += 1;
    }

    fn reserve_trailing_space(&mut self, px: f64) {
        self.state.borrow_mut().trailing[self.index] = px.max(0.0);
    }

    fn init_base_style(&mut self, base: &BaseStyle) {
        self.state.borrow_mut().bases[self.index] = Some(base.clone());
    }
}

struct VirtualSection {
    state: Rc<RefCell<PageState>>,
}

impl SectionHandle for VirtualSection {
    fn measure_top(&self) -> f64 {
        self.state.borrow().section_top
    }

    fn measure_height(&self) -> f64 {
        let st = self.state.borrow();
        st.items_bottom() + st.end_spacer - st.section_top
    }

    fn end_sentinel_top(&self) -> Option<f64> {
        let st = self.state.borrow();
        st.end_sentinel.then(|| st.items_bottom())
    }
}

/// Viewport with a constant height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedViewport(pub f64);

impl Viewport for FixedViewport {
    fn height(&self) -> f64 {
        self.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/memory.rs"]
mod tests;
