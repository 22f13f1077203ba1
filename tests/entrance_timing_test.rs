use drift_ngin::entrance::{
    Ease, StyleDelta, Tween,
    plan::{CARD_STAGGER, Role, entrance_for},
};

fn assert_close(a: f32, b: f32) {
    assert!((a - b).abs() < 1e-6, "{} != {}", a, b);
}

#[test]
fn hero_sequence_overlaps_through_staggered_delays() {
    let title = entrance_for(Role::HeroTitle, 0);
    let authors = entrance_for(Role::HeroAuthors, 0);
    let sub = entrance_for(Role::HeroSub, 0);
    let cta = entrance_for(Role::HeroCta, 0);

    // The hero block plays on load, not on scroll
    assert!(title.trigger.is_none());
    assert!(authors.trigger.is_none());
    assert!(sub.trigger.is_none());
    assert!(cta.trigger.is_none());

    assert_close(title.tween.delay, 0.0);
    assert_close(authors.tween.delay, 0.2);
    assert_close(sub.tween.delay, 0.3);
    assert_close(cta.tween.delay, 0.6);

    assert_close(title.tween.duration, 1.2);
    assert_close(authors.tween.duration, 1.2);
    assert_close(sub.tween.duration, 1.2);
    assert_close(cta.tween.duration, 1.0);

    assert_eq!(title.tween.from.dy, 80.0);
    assert_eq!(authors.tween.from.dy, 40.0);
    assert_eq!(sub.tween.from.dy, 40.0);
    assert_eq!(cta.tween.from.scale, 0.8);
    assert_eq!(cta.tween.ease, Ease::BackOut(Ease::DEFAULT_OVERSHOOT));
}

#[test]
fn card_stagger_delay_is_proportional_to_index() {
    for index in [0usize, 3, 7] {
        let entrance = entrance_for(Role::Card, index);
        assert_close(entrance.tween.delay, index as f32 * CARD_STAGGER);
    }
}

#[test]
fn timeline_items_alternate_entry_side_by_parity() {
    assert_eq!(entrance_for(Role::TimelineItem, 0).tween.from.dx, -50.0);
    assert_eq!(entrance_for(Role::TimelineItem, 1).tween.from.dx, 50.0);
    assert_eq!(entrance_for(Role::TimelineItem, 4).tween.from.dx, -50.0);
    assert_eq!(entrance_for(Role::TimelineItem, 5).tween.from.dx, 50.0);
}

#[test]
fn tween_holds_its_from_state_through_the_delay() {
    let tween = Tween::new(StyleDelta::offset_y(80.0), 1.0, 0.5, Ease::PowerOut(3));
    assert_eq!(tween.sample(0.0), tween.from);
    assert_eq!(tween.sample(0.49), tween.from);
}

#[test]
fn tween_reaches_identity_at_completion() {
    let tween = Tween::new(StyleDelta::offset_y(80.0), 1.0, 0.5, Ease::PowerOut(3));
    assert_eq!(tween.sample(1.5), StyleDelta::IDENTITY);
    assert_eq!(tween.sample(10.0), StyleDelta::IDENTITY);
    assert!(tween.finished(1.5));
    assert!(!tween.finished(1.49));
}

#[test]
fn tween_opacity_rises_monotonically_under_power_out() {
    let tween = Tween::new(StyleDelta::offset_y(50.0), 0.8, 0.0, Ease::PowerOut(2));
    let mut previous = -1.0;
    for step in 0..=20 {
        let sample = tween.sample(step as f32 * 0.04);
        assert!(sample.opacity >= previous);
        previous = sample.opacity;
    }
}

#[test]
fn back_out_overshoots_past_the_target() {
    let ease = Ease::BackOut(Ease::DEFAULT_OVERSHOOT);
    assert_close(ease.value(0.0), 0.0);
    assert_close(ease.value(1.0), 1.0);
    assert!(ease.value(0.8) > 1.0);
}

#[test]
fn power_out_families_decelerate_in_order() {
    // Higher powers cover more ground early
    assert_close(Ease::PowerOut(1).value(0.5), 0.75);
    assert_close(Ease::PowerOut(2).value(0.5), 0.875);
    assert_close(Ease::PowerOut(3).value(0.5), 0.9375);
}
