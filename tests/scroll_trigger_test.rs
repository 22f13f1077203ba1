use drift_ngin::entrance::{
    Ease, Entrance, EntranceStyle, ScrollTrigger, StyleDelta, Tween, Viewport, nav_scrolled,
    plan::{Role, entrance_for},
    trigger::ElementMetrics,
};

const VIEWPORT: Viewport = Viewport {
    height: 1000.0,
    scroll_y: 0.0,
};

fn header_entrance() -> Entrance {
    entrance_for(Role::SectionHeader, 0)
}

#[test]
fn trigger_fires_exactly_at_its_start_line() {
    let trigger = ScrollTrigger::new(0.85);
    assert!(trigger.fires(&ElementMetrics { top: 850.0 }, &VIEWPORT));
    assert!(trigger.fires(&ElementMetrics { top: 200.0 }, &VIEWPORT));
    assert!(!trigger.fires(&ElementMetrics { top: 851.0 }, &VIEWPORT));
}

#[test]
fn entrance_holds_hidden_until_the_trigger_zone_is_reached() {
    let mut entrance = header_entrance();
    let below = ElementMetrics { top: 950.0 };

    let style = entrance.tick(0.016, Some(&below), &VIEWPORT);
    assert_eq!(style, EntranceStyle::Apply(entrance.tween.from));
    assert!(!entrance.has_started());
}

#[test]
fn entrance_starts_exactly_once() {
    let mut entrance = header_entrance();
    let in_zone = ElementMetrics { top: 700.0 };
    let out_of_zone = ElementMetrics { top: 2000.0 };

    entrance.tick(0.016, Some(&in_zone), &VIEWPORT);
    assert!(entrance.has_started());

    // Scrolling the element back out does not reset a running animation
    let mid = entrance.tick(0.4, Some(&out_of_zone), &VIEWPORT);
    match mid {
        EntranceStyle::Apply(delta) => assert!(delta.opacity > 0.0),
        other => panic!("expected a running animation, got {:?}", other),
    }

    // Run to completion; the element is released back to the stylesheet
    assert_eq!(
        entrance.tick(1.0, Some(&out_of_zone), &VIEWPORT),
        EntranceStyle::Clear
    );
    assert!(entrance.is_done());

    // Re-entering the trigger zone must not restart a finished entrance
    assert_eq!(
        entrance.tick(0.016, Some(&in_zone), &VIEWPORT),
        EntranceStyle::Idle
    );
    assert_eq!(
        entrance.tick(0.016, Some(&in_zone), &VIEWPORT),
        EntranceStyle::Idle
    );
}

#[test]
fn untriggered_entrance_starts_immediately() {
    let mut entrance = Entrance::new(
        Tween::new(StyleDelta::offset_y(80.0), 1.2, 0.0, Ease::PowerOut(3)),
        None,
    );
    entrance.tick(0.0, None, &VIEWPORT);
    assert!(entrance.has_started());
}

#[test]
fn role_trigger_thresholds_match_their_zones() {
    assert_eq!(
        entrance_for(Role::SectionHeader, 0).trigger,
        Some(ScrollTrigger::new(0.85))
    );
    assert_eq!(
        entrance_for(Role::Card, 0).trigger,
        Some(ScrollTrigger::new(0.9))
    );
    assert_eq!(
        entrance_for(Role::TimelineItem, 0).trigger,
        Some(ScrollTrigger::new(0.8))
    );
}

#[test]
fn navbar_state_flips_at_50px() {
    assert!(!nav_scrolled(0.0));
    assert!(!nav_scrolled(50.0));
    assert!(nav_scrolled(50.1));
    assert!(nav_scrolled(800.0));
}

#[test]
fn navbar_state_is_idempotent_at_a_fixed_offset() {
    for _ in 0..5 {
        assert!(nav_scrolled(51.0));
        assert!(!nav_scrolled(49.0));
    }
}
