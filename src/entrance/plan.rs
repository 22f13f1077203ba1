//! The declarative entrance plan: which elements animate, and how.
//!
//! Every animated element on the page has a [`Role`]; the plan maps a role
//! (plus the element's index among its siblings, for staggering and
//! alternation) to a ready-to-run [`Entrance`]. The plan is consumed once at
//! registration, nothing here is mutated afterwards.

use crate::entrance::{
    Entrance,
    easing::Ease,
    trigger::ScrollTrigger,
    tween::{StyleDelta, Tween},
};

/// Stagger delay between sibling cards, in seconds.
pub const CARD_STAGGER: f32 = 0.1;

/// The animated element roles on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    HeroTitle,
    HeroAuthors,
    HeroSub,
    HeroCta,
    SectionHeader,
    Card,
    TimelineItem,
}

impl Role {
    /// All roles, in the order they are bound at registration.
    pub const ALL: [Role; 7] = [
        Role::HeroTitle,
        Role::HeroAuthors,
        Role::HeroSub,
        Role::HeroCta,
        Role::SectionHeader,
        Role::Card,
        Role::TimelineItem,
    ];

    /// The CSS selector locating this role's elements in the document.
    pub fn selector(&self) -> &'static str {
        match self {
            Role::HeroTitle => "#hero h1",
            Role::HeroAuthors => "#hero .hero-authors",
            Role::HeroSub => "#hero p.hero-sub",
            Role::HeroCta => "#hero .btn",
            Role::SectionHeader => ".section-header",
            Role::Card => ".glass-card",
            Role::TimelineItem => ".timeline-item",
        }
    }
}

/// The entrance for the `index`-th element of a role.
///
/// Hero entrances have no trigger: they play as soon as the page loads,
/// overlapping through their delays. Everything else waits for its scroll
/// trigger.
pub fn entrance_for(role: Role, index: usize) -> Entrance {
    match role {
        Role::HeroTitle => Entrance::new(
            Tween::new(StyleDelta::offset_y(80.0), 1.2, 0.0, Ease::PowerOut(3)),
            None,
        ),
        Role::HeroAuthors => Entrance::new(
            Tween::new(StyleDelta::offset_y(40.0), 1.2, 0.2, Ease::PowerOut(3)),
            None,
        ),
        Role::HeroSub => Entrance::new(
            Tween::new(StyleDelta::offset_y(40.0), 1.2, 0.3, Ease::PowerOut(3)),
            None,
        ),
        Role::HeroCta => Entrance::new(
            Tween::new(
                StyleDelta::scaled(0.8),
                1.0,
                0.6,
                Ease::BackOut(Ease::DEFAULT_OVERSHOOT),
            ),
            None,
        ),
        Role::SectionHeader => Entrance::new(
            Tween::new(StyleDelta::offset_x(-30.0), 0.8, 0.0, Ease::PowerOut(2)),
            Some(ScrollTrigger::new(0.85)),
        ),
        Role::Card => Entrance::new(
            Tween::new(
                StyleDelta::offset_y(50.0),
                0.8,
                index as f32 * CARD_STAGGER,
                Ease::PowerOut(2),
            ),
            Some(ScrollTrigger::new(0.9)),
        ),
        Role::TimelineItem => {
            // Timeline items slide in from alternating sides
            let dx = if index % 2 == 0 { -50.0 } else { 50.0 };
            Entrance::new(
                Tween::new(StyleDelta::offset_x(dx), 1.0, 0.0, Ease::PowerOut(3)),
                Some(ScrollTrigger::new(0.8)),
            )
        }
    }
}
