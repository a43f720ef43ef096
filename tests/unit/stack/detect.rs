use super::*;
use crate::surface::handle::{BaseStyle, ItemStyle};

#[derive(Default)]
struct CountingItem {
    writes: Vec<ItemStyle>,
}

impl ItemHandle for CountingItem {
    fn measure_top(&self) -> f64 {
        0.0
    }

    fn apply_style(&mut self, style: &ItemStyle) {
        self.writes.push(style.clone());
    }

    fn reserve_trailing_space(&mut self, _px: f64) {}

    fn init_base_style(&mut self, _base: &BaseStyle) {}
}

fn base() -> StackTransform {
    StackTransform {
        translate_y: 100.0,
        scale: 0.9,
        rotation: 0.0,
        blur: 0.0,
        z_index: 3,
    }
}

#[test]
fn first_commit_always_writes() {
    let mut cache = TransformCache::default();
    let mut item = CountingItem::default();
    assert!(cache.is_empty());
    assert!(cache.commit_if_changed(2, base(), &mut item));
    assert_eq!(item.writes.len(), 1);
    assert_eq!(cache.get(2), Some(&base()));
    assert_eq!(cache.get(0), None);
    assert_eq!(cache.len(), 1);
}

#[test]
fn translate_tolerance_suppresses_small_moves() {
    let mut cache = TransformCache::default();
    let mut item = CountingItem::default();
    cache.commit_if_changed(0, base(), &mut item);

    let nudged = StackTransform {
        translate_y: 100.05,
        ..base()
    };
    assert!(!cache.commit_if_changed(0, nudged, &mut item));
    assert_eq!(item.writes.len(), 1);
    assert_eq!(cache.get(0), Some(&base()));

    let moved = StackTransform {
        translate_y: 100.2,
        ..base()
    };
    assert!(cache.commit_if_changed(0, moved, &mut item));
    assert_eq!(item.writes.len(), 2);
    assert_eq!(cache.get(0), Some(&moved));
}

#[test]
fn each_field_has_its_own_tolerance() {
    let b = base();
    assert!(!exceeds_tolerance(&b, &StackTransform { scale: 0.9005, ..b }));
    assert!(exceeds_tolerance(&b, &StackTransform { scale: 0.902, ..b }));
    assert!(!exceeds_tolerance(&b, &StackTransform { rotation: 0.05, ..b }));
    assert!(exceeds_tolerance(&b, &StackTransform { rotation: 0.2, ..b }));
    assert!(!exceeds_tolerance(&b, &StackTransform { blur: 0.1, ..b }));
    assert!(exceeds_tolerance(&b, &StackTransform { blur: 0.25, ..b }));
    assert!(exceeds_tolerance(&b, &StackTransform { z_index: 4, ..b }));
    assert!(!exceeds_tolerance(&b, &b));
}

#[test]
fn clear_forces_a_fresh_write() {
    let mut cache = TransformCache::default();
    let mut item = CountingItem::default();
    cache.commit_if_changed(0, base(), &mut item);
    cache.clear();
    assert!(cache.is_empty());
    assert!(cache.commit_if_changed(0, base(), &mut item));
    assert_eq!(item.writes.len(), 2);
}
