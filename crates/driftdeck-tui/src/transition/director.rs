//! Builds the two mirrored transition timelines
//!
//! `slide-in` advances: the incoming slide's wrapper panels wipe up over
//! the outgoing one while both backgrounds drift apart. `slide-out`
//! reverses: the outgoing slide wipes away, uncovering the incoming slide
//! posed underneath. Heading graphemes reveal with a randomized stagger —
//! immediately for slide-in, near the end of the wipe for slide-out.

use std::time::Duration;

use driftdeck_core::{Transition, TransitionConfig, TransitionKind};
use rand::Rng;

use super::heading::SplitHeading;
use super::timeline::{Channel, Timeline};

/// Wrapper park offset: one full screen, in percent
const WRAPPER_PARK: f64 = 100.0;

/// How long before the wipe ends the slide-out heading reveal begins
const REVEAL_LEAD: Duration = Duration::from_millis(1000);

/// Build the timeline for a decided transition. `heading` is the incoming
/// slide's split title.
pub fn build<R: Rng + ?Sized>(
    transition: Transition,
    heading: &SplitHeading,
    config: &TransitionConfig,
    rng: &mut R,
) -> Timeline {
    match transition.kind() {
        TransitionKind::SlideIn => slide_in(transition, heading, config, rng),
        TransitionKind::SlideOut => slide_out(transition, heading, config, rng),
    }
}

fn slide_in<R: Rng + ?Sized>(
    transition: Transition,
    heading: &SplitHeading,
    config: &TransitionConfig,
    rng: &mut R,
) -> Timeline {
    let wipe = Duration::from_millis(config.duration_ms);
    let ease = config.ease;
    let parallax = config.parallax_percent;
    let to = transition.to;

    let mut tl = Timeline::new();
    tl.tween(Channel::Outer(to), Duration::ZERO, wipe, ease, WRAPPER_PARK, 0.0);
    tl.tween(Channel::Inner(to), Duration::ZERO, wipe, ease, -WRAPPER_PARK, 0.0);
    tl.tween(Channel::Image(to), Duration::ZERO, wipe, ease, parallax, 0.0);
    add_heading_reveal(&mut tl, to, heading, config, Duration::ZERO, rng);

    if let Some(from) = transition.from {
        tl.tween(Channel::Image(from), Duration::ZERO, wipe, ease, 0.0, -parallax);

        // park the outgoing slide back in its resting pose once everything settled
        let end = tl.duration();
        tl.set_at(Channel::Outer(from), WRAPPER_PARK, end);
        tl.set_at(Channel::Inner(from), -WRAPPER_PARK, end);
        tl.set_at(Channel::Image(from), 0.0, end);
    }

    tl
}

fn slide_out<R: Rng + ?Sized>(
    transition: Transition,
    heading: &SplitHeading,
    config: &TransitionConfig,
    rng: &mut R,
) -> Timeline {
    let wipe = Duration::from_millis(config.duration_ms);
    let ease = config.ease;
    let parallax = config.parallax_percent;
    let to = transition.to;

    let mut tl = Timeline::new();
    // incoming slide is posed fully on screen beneath the outgoing one
    tl.set_at(Channel::Outer(to), 0.0, Duration::ZERO);
    tl.set_at(Channel::Inner(to), 0.0, Duration::ZERO);
    tl.tween(Channel::Image(to), Duration::ZERO, wipe, ease, -parallax, 0.0);

    if let Some(from) = transition.from {
        tl.tween(Channel::Outer(from), Duration::ZERO, wipe, ease, 0.0, WRAPPER_PARK);
        tl.tween(Channel::Inner(from), Duration::ZERO, wipe, ease, 0.0, -WRAPPER_PARK);
        tl.tween(Channel::Image(from), Duration::ZERO, wipe, ease, 0.0, parallax);
    }

    // heading starts one reveal lead before the wipe ends
    let reveal_at = wipe.saturating_sub(REVEAL_LEAD);
    add_heading_reveal(&mut tl, to, heading, config, reveal_at, rng);

    if let Some(from) = transition.from {
        let end = tl.duration();
        tl.set_at(Channel::Image(from), 0.0, end);
    }

    tl
}

/// Stagger the incoming heading's graphemes in randomized order
fn add_heading_reveal<R: Rng + ?Sized>(
    tl: &mut Timeline,
    slide: usize,
    heading: &SplitHeading,
    config: &TransitionConfig,
    at: Duration,
    rng: &mut R,
) {
    let stagger = Duration::from_millis(config.char_stagger_ms);
    let reveal = Duration::from_millis(config.heading_reveal_ms);
    for (position, index) in heading.shuffled_order(rng).into_iter().enumerate() {
        tl.tween(
            Channel::Char { slide, index },
            at + stagger * position as u32,
            reveal,
            config.heading_ease,
            100.0,
            0.0,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use driftdeck_core::Direction;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Instant;

    const MS: fn(u64) -> Duration = Duration::from_millis;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn advance(from: usize, to: usize) -> Transition {
        Transition {
            from: Some(from),
            to,
            direction: Direction::Down,
        }
    }

    fn reverse(from: usize, to: usize) -> Transition {
        Transition {
            from: Some(from),
            to,
            direction: Direction::Up,
        }
    }

    #[test]
    fn test_slide_in_initial_pose() {
        let heading = SplitHeading::new("Two");
        let config = TransitionConfig::default();
        let mut tl = build(advance(0, 1), &heading, &config, &mut rng());
        let now = Instant::now();
        tl.play(now);

        assert_eq!(tl.value_of(Channel::Outer(1), now), Some(100.0));
        assert_eq!(tl.value_of(Channel::Inner(1), now), Some(-100.0));
        assert_eq!(tl.value_of(Channel::Image(1), now), Some(15.0));
        assert_eq!(tl.value_of(Channel::Image(0), now), Some(0.0));
        // wrappers of the outgoing slide are untouched until the end reset
        assert_eq!(tl.value_of(Channel::Outer(0), now), Some(100.0));
    }

    #[test]
    fn test_slide_in_settles_and_resets_outgoing() {
        let heading = SplitHeading::new("Two");
        let config = TransitionConfig::default();
        let mut tl = build(advance(0, 1), &heading, &config, &mut rng());
        let now = Instant::now();
        tl.play(now);
        let end = now + tl.duration();

        assert!(tl.is_complete(end));
        assert_eq!(tl.value_of(Channel::Outer(1), end), Some(0.0));
        assert_eq!(tl.value_of(Channel::Inner(1), end), Some(0.0));
        assert_eq!(tl.value_of(Channel::Image(1), end), Some(0.0));
        // outgoing slide parked back in its resting pose
        assert_eq!(tl.value_of(Channel::Outer(0), end), Some(100.0));
        assert_eq!(tl.value_of(Channel::Inner(0), end), Some(-100.0));
        assert_eq!(tl.value_of(Channel::Image(0), end), Some(0.0));
    }

    #[test]
    fn test_slide_in_outgoing_parallax_is_mirrored() {
        let heading = SplitHeading::new("Two");
        let config = TransitionConfig::default();
        let mut tl = build(advance(0, 1), &heading, &config, &mut rng());
        let now = Instant::now();
        tl.play(now);

        // probe just before the end-of-timeline reset snaps it back
        let late = now + MS(config.duration_ms - 1);
        let v = tl.value_of(Channel::Image(0), late).unwrap();
        assert!(v < -14.5, "outgoing parallax was {}", v);
    }

    #[test]
    fn test_intro_has_no_outgoing_tracks() {
        let heading = SplitHeading::new("One");
        let config = TransitionConfig::default();
        let intro = Transition {
            from: None,
            to: 0,
            direction: Direction::Down,
        };
        let mut tl = build(intro, &heading, &config, &mut rng());
        let now = Instant::now();
        tl.play(now);

        assert_eq!(tl.value_of(Channel::Outer(0), now), Some(100.0));
        assert_eq!(tl.value_of(Channel::Image(1), now), None);
    }

    #[test]
    fn test_heading_reveal_covers_every_grapheme() {
        let heading = SplitHeading::new("Backgrounds drift");
        let config = TransitionConfig::default();
        let mut tl = build(advance(2, 3), &heading, &config, &mut rng());
        let now = Instant::now();
        tl.play(now);
        let end = now + tl.duration();

        for index in 0..heading.len() {
            let channel = Channel::Char { slide: 3, index };
            assert_eq!(tl.value_of(channel, end), Some(0.0), "grapheme {}", index);
        }
    }

    #[test]
    fn test_slide_in_reveal_starts_immediately() {
        let heading = SplitHeading::new("Backgrounds drift");
        let config = TransitionConfig::default();
        let mut tl = build(advance(2, 3), &heading, &config, &mut rng());
        let now = Instant::now();
        tl.play(now);

        // a quarter into the reveal some grapheme must already be moving
        let probe = now + MS(config.heading_reveal_ms / 4);
        let moving = (0..heading.len()).any(|index| {
            tl.value_of(Channel::Char { slide: 3, index }, probe)
                .is_some_and(|v| v < 99.0)
        });
        assert!(moving);
    }

    #[test]
    fn test_slide_out_reveal_waits_for_lead() {
        let heading = SplitHeading::new("Backgrounds drift");
        let config = TransitionConfig::default();
        let mut tl = build(reverse(3, 2), &heading, &config, &mut rng());
        let now = Instant::now();
        tl.play(now);

        // reveal begins duration − 1s into the wipe (300ms for the default 1.3s)
        let before = now + MS(299);
        for index in 0..heading.len() {
            assert_eq!(
                tl.value_of(Channel::Char { slide: 2, index }, before),
                Some(100.0)
            );
        }
        let probe = now + MS(300 + config.heading_reveal_ms / 4);
        let moving = (0..heading.len()).any(|index| {
            tl.value_of(Channel::Char { slide: 2, index }, probe)
                .is_some_and(|v| v < 99.0)
        });
        assert!(moving);
    }

    #[test]
    fn test_slide_out_reveal_lead_clamps_to_zero() {
        let heading = SplitHeading::new("Hi");
        let config = TransitionConfig {
            duration_ms: 800,
            ..Default::default()
        };
        let mut tl = build(reverse(1, 0), &heading, &config, &mut rng());
        let now = Instant::now();
        tl.play(now);

        let probe = now + MS(config.heading_reveal_ms / 4);
        let moving = (0..heading.len()).any(|index| {
            tl.value_of(Channel::Char { slide: 0, index }, probe)
                .is_some_and(|v| v < 99.0)
        });
        assert!(moving);
    }

    #[test]
    fn test_slide_out_poses_and_wipes() {
        let heading = SplitHeading::new("Two");
        let config = TransitionConfig::default();
        let mut tl = build(reverse(3, 2), &heading, &config, &mut rng());
        let now = Instant::now();
        tl.play(now);

        // incoming posed fully on screen, outgoing still in place
        assert_eq!(tl.value_of(Channel::Outer(2), now), Some(0.0));
        assert_eq!(tl.value_of(Channel::Inner(2), now), Some(0.0));
        assert_eq!(tl.value_of(Channel::Image(2), now), Some(-15.0));
        assert_eq!(tl.value_of(Channel::Outer(3), now), Some(0.0));

        let end = now + tl.duration();
        assert_eq!(tl.value_of(Channel::Outer(3), end), Some(100.0));
        assert_eq!(tl.value_of(Channel::Inner(3), end), Some(-100.0));
        // outgoing background reset at the very end
        assert_eq!(tl.value_of(Channel::Image(3), end), Some(0.0));
        assert_eq!(tl.value_of(Channel::Image(2), end), Some(0.0));
    }
}
