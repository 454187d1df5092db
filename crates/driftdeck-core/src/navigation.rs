//! Slide navigation state machine
//!
//! A `Navigator` owns the current slide index and a two-state gate:
//! `Idle` (a new transition may start) or `Animating` (all navigation
//! requests are dropped until `complete()` is called). The gate is the
//! single source of truth for whether input is accepted; there is no
//! separate in-progress flag anywhere else.

use crate::{Error, Result};

/// Logical gesture direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Which of the two mirrored transition routines plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Advancing: the incoming slide wipes in over the outgoing one
    SlideIn,
    /// Reversing: the outgoing slide wipes away, uncovering the incoming one
    SlideOut,
}

/// A decided slide change, handed to the transition director
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Outgoing slide; `None` only for the intro transition at startup
    pub from: Option<usize>,
    pub to: usize,
    pub direction: Direction,
}

impl Transition {
    pub fn kind(&self) -> TransitionKind {
        match self.direction {
            Direction::Down => TransitionKind::SlideIn,
            Direction::Up => TransitionKind::SlideOut,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavState {
    Idle,
    Animating(Transition),
}

/// Navigation controller for a deck of `len` slides
#[derive(Debug)]
pub struct Navigator {
    len: usize,
    current: Option<usize>,
    state: NavState,
}

impl Navigator {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: None,
            state: NavState::Idle,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Slide currently settled on screen; `None` until the intro completes
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, NavState::Animating(_))
    }

    /// The transition in flight, if any
    pub fn active_transition(&self) -> Option<Transition> {
        match self.state {
            NavState::Animating(t) => Some(t),
            NavState::Idle => None,
        }
    }

    /// Begin the intro transition that brings the first slide in
    pub fn start(&mut self) -> Transition {
        let transition = Transition {
            from: None,
            to: 0,
            direction: Direction::Down,
        };
        self.state = NavState::Animating(transition);
        transition
    }

    /// Request a directional slide change. Returns `None` while a
    /// transition is in flight; the index wraps at both ends.
    pub fn advance(&mut self, direction: Direction) -> Option<Transition> {
        if self.is_animating() {
            return None;
        }
        let current = self.current.unwrap_or(0);
        let to = match direction {
            Direction::Down => (current + 1) % self.len,
            Direction::Up => (current + self.len - 1) % self.len,
        };
        let transition = Transition {
            from: self.current,
            to,
            direction,
        };
        self.state = NavState::Animating(transition);
        Some(transition)
    }

    /// Request navigation to an explicit slide index. `Ok(None)` when the
    /// index is already current or a transition is in flight; direction is
    /// inferred from the index ordering.
    pub fn jump_to(&mut self, index: usize) -> Result<Option<Transition>> {
        if index >= self.len {
            return Err(Error::SlideOutOfRange {
                index,
                len: self.len,
            });
        }
        if self.is_animating() || self.current == Some(index) {
            return Ok(None);
        }
        let current = self.current.unwrap_or(0);
        let direction = if index > current {
            Direction::Down
        } else {
            Direction::Up
        };
        let transition = Transition {
            from: self.current,
            to: index,
            direction,
        };
        self.state = NavState::Animating(transition);
        Ok(Some(transition))
    }

    /// The one transition back to `Idle`: advances `current` to the
    /// finished transition's target. Safe to call when already idle.
    pub fn complete(&mut self) {
        if let NavState::Animating(t) = self.state {
            self.current = Some(t.to);
            self.state = NavState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settled(len: usize, current: usize) -> Navigator {
        let mut nav = Navigator::new(len);
        nav.start();
        nav.complete();
        while nav.current() != Some(current) {
            nav.advance(Direction::Down);
            nav.complete();
        }
        nav
    }

    #[test]
    fn test_intro_lands_on_first_slide() {
        let mut nav = Navigator::new(4);
        let intro = nav.start();
        assert_eq!(intro.from, None);
        assert_eq!(intro.to, 0);
        assert_eq!(intro.kind(), TransitionKind::SlideIn);
        assert!(nav.is_animating());
        assert_eq!(nav.current(), None);

        nav.complete();
        assert!(!nav.is_animating());
        assert_eq!(nav.current(), Some(0));
    }

    #[test]
    fn test_advance_wraps_both_directions() {
        let mut nav = settled(4, 3);
        let t = nav.advance(Direction::Down).unwrap();
        assert_eq!(t.to, 0);
        nav.complete();

        let t = nav.advance(Direction::Up).unwrap();
        assert_eq!(t.to, 3);
    }

    #[test]
    fn test_next_index_formulas() {
        for len in [1usize, 2, 4, 7] {
            for i in 0..len {
                let mut nav = settled(len, i);
                let t = nav.advance(Direction::Down).unwrap();
                assert_eq!(t.to, (i + 1) % len);

                let mut nav = settled(len, i);
                let t = nav.advance(Direction::Up).unwrap();
                assert_eq!(t.to, (i + len - 1) % len);
            }
        }
    }

    #[test]
    fn test_gate_blocks_while_animating() {
        let mut nav = settled(4, 0);
        assert!(nav.advance(Direction::Down).is_some());
        // a second request before completion is dropped, not queued
        assert!(nav.advance(Direction::Down).is_none());
        assert!(nav.advance(Direction::Up).is_none());
        assert!(nav.jump_to(3).unwrap().is_none());
        assert_eq!(nav.current(), Some(0));

        nav.complete();
        assert_eq!(nav.current(), Some(1));
        assert!(nav.advance(Direction::Down).is_some());
    }

    #[test]
    fn test_jump_to_current_is_noop() {
        let mut nav = settled(4, 2);
        assert!(nav.jump_to(2).unwrap().is_none());
        assert!(!nav.is_animating());
    }

    #[test]
    fn test_jump_to_infers_direction() {
        let mut nav = settled(4, 0);
        let t = nav.jump_to(2).unwrap().unwrap();
        assert_eq!(t.direction, Direction::Down);
        assert_eq!(t.kind(), TransitionKind::SlideIn);
        nav.complete();
        assert_eq!(nav.current(), Some(2));

        let t = nav.jump_to(1).unwrap().unwrap();
        assert_eq!(t.direction, Direction::Up);
        assert_eq!(t.kind(), TransitionKind::SlideOut);
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut nav = settled(4, 0);
        let err = nav.jump_to(4).unwrap_err();
        assert!(matches!(
            err,
            Error::SlideOutOfRange { index: 4, len: 4 }
        ));
        assert!(!nav.is_animating());
    }

    #[test]
    fn test_complete_is_idempotent() {
        let mut nav = settled(4, 1);
        nav.complete();
        nav.complete();
        assert_eq!(nav.current(), Some(1));
    }
}
