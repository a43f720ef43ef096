use super::*;
use crate::foundation::core::Distance;

fn geo(scroll: f64) -> TickGeometry {
    TickGeometry {
        scroll,
        section_top: 1000.0,
        end_top: 3000.0,
        viewport_height: 800.0,
    }
}

fn cfg() -> StackConfig {
    StackConfig {
        item_distance: 100.0,
        item_scale: 0.05,
        item_stack_distance: 30.0,
        stack_position: Distance::Percent(20.0),
        base_scale: 0.9,
        ..StackConfig::default()
    }
}

#[test]
fn windows_stagger_by_index_and_share_the_end() {
    let g = geo(0.0);
    let c = cfg();
    assert_eq!(g.trigger_start(&c, 0), 840.0);
    assert_eq!(g.trigger_start(&c, 1), 870.0);
    assert_eq!(g.trigger_start(&c, 2), 900.0);
    assert_eq!(g.stacking_end(), 2600.0);
    assert_eq!(g.window(&c, 2).end, g.window(&c, 0).end);
}

#[test]
fn single_item_never_rotates_or_blurs_by_default() {
    let c = StackConfig::default();
    let mut s = 0.0;
    while s < 4000.0 {
        let out = compute_item(&c, &geo(s), 0, 1, 1000.0);
        assert_eq!(out.transform.rotation, 0.0);
        assert_eq!(out.transform.blur, 0.0);
        s += 37.0;
    }
}

#[test]
fn scale_is_non_increasing_and_settles_on_target() {
    let c = cfg();
    let mut last = f64::INFINITY;
    let mut s = 700.0;
    while s <= 1600.0 {
        let out = compute_item(&c, &geo(s), 1, 3, 1400.0);
        assert!(out.transform.scale <= last);
        last = out.transform.scale;
        s += 10.0;
    }
    // Item 1 settles at baseScale + itemScale.
    let done = compute_item(&c, &geo(870.0 + 640.0), 1, 3, 1400.0);
    assert_eq!(done.scale_progress, 1.0);
    assert_eq!(done.transform.scale, 0.95);
}

#[test]
fn phases_drive_translate_and_z() {
    let c = cfg();
    let card_top = 1400.0;

    let pre = compute_item(&c, &geo(800.0), 1, 3, card_top);
    assert_eq!(pre.phase, StackPhase::PreStack);
    assert_eq!(pre.transform.translate_y, 0.0);
    assert_eq!(pre.transform.z_index, 2);

    let inside = compute_item(&c, &geo(1500.0), 1, 3, card_top);
    assert_eq!(inside.phase, StackPhase::InStack);
    // s - cardTop + (20% of 800 + 1 * 30)
    assert_eq!(inside.transform.translate_y, 1500.0 - 1400.0 + 190.0);
    assert_eq!(inside.transform.z_index, 4);

    let past_a = compute_item(&c, &geo(2700.0), 1, 3, card_top);
    let past_b = compute_item(&c, &geo(5000.0), 1, 3, card_top);
    assert_eq!(past_a.phase, StackPhase::PastStack);
    assert_eq!(past_a.transform.translate_y, 2600.0 - 1400.0 + 190.0);
    assert_eq!(past_a.transform, past_b.transform);
    assert_eq!(past_a.transform.z_index, 4);
}

#[test]
fn window_boundaries_are_inclusive() {
    let c = cfg();
    let at_start = compute_item(&c, &geo(840.0), 0, 1, 1000.0);
    assert_eq!(at_start.phase, StackPhase::InStack);
    let at_end = compute_item(&c, &geo(2600.0), 0, 1, 1000.0);
    assert_eq!(at_end.phase, StackPhase::InStack);
}

#[test]
fn rotation_and_blur_follow_scale_progress() {
    let c = StackConfig {
        rotation_amount: 4.0,
        blur_amount: 5.0,
        ..cfg()
    };
    let half = compute_item(&c, &geo(870.0 + 320.0), 1, 3, 1400.0);
    assert_eq!(half.scale_progress, 0.5);
    assert_eq!(half.transform.rotation, 2.0);
    assert_eq!(half.transform.blur, 2.5);

    let before = compute_item(&c, &geo(0.0), 1, 3, 1400.0);
    assert_eq!(before.transform.blur, 0.0);
    assert_eq!(before.transform.rotation, 0.0);

    let full = compute_item(&c, &geo(9000.0), 2, 3, 1700.0);
    assert_eq!(full.transform.blur, 5.0);
    assert_eq!(full.transform.rotation, 8.0);
}

#[test]
fn absolute_stack_position_is_used_verbatim() {
    let c = StackConfig {
        stack_position: Distance::Px(64.0),
        ..cfg()
    };
    let out = compute_item(&c, &geo(1000.0), 0, 1, 1000.0);
    assert_eq!(out.transform.translate_y, 64.0);
}
