use crate::{stack::transform::StackTransform, surface::handle::ItemHandle};

/// Smallest translate change (px) worth a write.
pub const TRANSLATE_TOLERANCE: f64 = 0.1;
/// Smallest scale change worth a write.
pub const SCALE_TOLERANCE: f64 = 0.001;
/// Smallest rotation change (deg) worth a write.
pub const ROTATION_TOLERANCE: f64 = 0.1;
/// Smallest blur change (px) worth a write.
pub const BLUR_TOLERANCE: f64 = 0.1;

/// Whether `next` differs from `prev` by more than any per-field tolerance.
pub fn exceeds_tolerance(prev: &StackTransform, next: &StackTransform) -> bool {
    (prev.translate_y - next.translate_y).abs() > TRANSLATE_TOLERANCE
        || (prev.scale - next.scale).abs() > SCALE_TOLERANCE
        || (prev.rotation - next.rotation).abs() > ROTATION_TOLERANCE
        || (prev.blur - next.blur).abs() > BLUR_TOLERANCE
        || prev.z_index != next.z_index
}

/// Last committed transform per item index. A memo for write suppression only.
#[derive(Clone, Debug, Default)]
pub struct TransformCache {
    committed: Vec<Option<StackTransform>>,
}

impl TransformCache {
    /// Last committed transform of item `index`.
    pub fn get(&self, index: usize) -> Option<&StackTransform> {
        self.committed.get(index).and_then(Option::as_ref)
    }

    /// Apply `next` to `item` unless it is within tolerance of the cached one.
    ///
    /// Returns whether a write happened.
    pub fn commit_if_changed(
        &mut self,
        index: usize,
        next: StackTransform,
        item: &mut dyn ItemHandle,
    ) -> bool {
        if let Some(prev) = self.get(index)
            && !exceeds_tolerance(prev, &next)
        {
            return false;
        }
        item.apply_style(&next.to_style());
        if self.committed.len() <= index {
            self.committed.resize(index + 1, None);
        }
        self.committed[index] = Some(next);
        tracing::trace!(index, ?next, "committed transform");
        true
    }

    /// Number of items with a committed transform.
    pub fn len(&self) -> usize {
        self.committed.iter().filter(|c| c.is_some()).count()
    }

    /// Whether nothing has been committed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.committed.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stack/detect.rs"]
mod tests;
