use std::sync::Arc;
use std::time::{Duration, Instant};

use driftdeck_core::{
    AppConfig, Deck, Direction, Navigator, SwipeTracker, Transition, WheelSampler,
};
use tracing::{debug, warn};

use crate::input::Action;
use crate::theme::Theme;
use crate::transition::{self, SplitHeading, Timeline};

/// Application state
///
/// Owns the navigation gate, the gesture samplers, and the timeline in
/// flight. Every mutation goes through a method here; the event loop and
/// the widgets never touch ambient state.
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Loaded theme
    pub theme: Theme,
    /// The deck being presented
    pub deck: Deck,
    /// Navigation state machine
    pub navigator: Navigator,
    /// Per-slide heading graphemes, built once at startup
    pub headings: Vec<SplitHeading>,
    /// Nav-bar cell currently highlighted
    pub active_link: usize,
    /// Status message shown in the status bar
    pub status_message: Option<String>,
    /// Pending first half of a "gg" sequence
    pub pending_g: bool,
    /// Whether the app should quit
    pub should_quit: bool,
    wheel: WheelSampler,
    swipe: SwipeTracker,
    timeline: Option<Timeline>,
}

impl App {
    /// Create the app and start the intro transition that brings the
    /// first slide in.
    pub fn new(config: Arc<AppConfig>, theme: Theme, deck: Deck, now: Instant) -> Self {
        let headings = deck
            .slides
            .iter()
            .map(|slide| SplitHeading::new(&slide.title))
            .collect();
        let wheel = WheelSampler::new(
            Duration::from_millis(config.transition.wheel_debounce_ms),
            now,
        );
        let swipe = SwipeTracker::new(config.transition.swipe_dead_zone);
        let mut app = Self {
            navigator: Navigator::new(deck.len()),
            config,
            theme,
            deck,
            headings,
            active_link: 0,
            status_message: None,
            pending_g: false,
            should_quit: false,
            wheel,
            swipe,
            timeline: None,
        };
        let intro = app.navigator.start();
        app.begin_transition(intro, now);
        app
    }

    /// The timeline in flight, if any
    pub fn timeline(&self) -> Option<&Timeline> {
        self.timeline.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.navigator.is_animating()
    }

    /// Sample a wheel event. Dropped while a transition plays, without
    /// consuming the debounce window.
    pub fn on_wheel(&mut self, delta: i32, now: Instant) {
        if self.navigator.is_animating() {
            return;
        }
        if let Some(direction) = self.wheel.accept(delta, now) {
            self.request_advance(direction, now);
        }
    }

    /// Record a press as a potential swipe start
    pub fn on_press(&mut self, column: u16, row: u16) {
        self.swipe.begin(column, row);
    }

    /// Finish a press-drag-release gesture. Returns true when the gesture
    /// was a swipe (so the caller should not treat the release as a click).
    pub fn on_release(&mut self, column: u16, row: u16, now: Instant) -> bool {
        let Some(direction) = self.swipe.finish(column, row) else {
            return false;
        };
        if !self.navigator.is_animating() {
            self.request_advance(direction, now);
        }
        true
    }

    /// Apply a key action
    pub fn on_action(&mut self, action: Action, now: Instant) {
        self.pending_g = matches!(action, Action::PendingG);
        match action {
            Action::Quit => self.should_quit = true,
            Action::NextSlide => {
                self.request_advance(Direction::Down, now);
            }
            Action::PrevSlide => {
                self.request_advance(Direction::Up, now);
            }
            Action::FirstSlide => self.request_jump(0, now),
            Action::LastSlide => self.request_jump(self.deck.len().saturating_sub(1), now),
            Action::GoToSlide(index) => self.request_jump(index, now),
            Action::PendingG | Action::None => {}
        }
    }

    /// Request a directional slide change
    pub fn request_advance(&mut self, direction: Direction, now: Instant) {
        if let Some(transition) = self.navigator.advance(direction) {
            self.begin_transition(transition, now);
        }
    }

    /// Request navigation to an explicit slide index
    pub fn request_jump(&mut self, index: usize, now: Instant) {
        match self.navigator.jump_to(index) {
            Ok(Some(transition)) => self.begin_transition(transition, now),
            Ok(None) => {}
            Err(e) => {
                warn!("navigation rejected: {}", e);
                self.status_message = Some(e.to_string());
            }
        }
    }

    /// Advance the clock: completes the active timeline and re-opens the
    /// navigation gate. Call once per event-loop iteration.
    pub fn tick(&mut self, now: Instant) {
        let done = self
            .timeline
            .as_ref()
            .is_some_and(|tl| tl.is_complete(now));
        if done {
            self.timeline = None;
            self.navigator.complete();
            debug!("transition complete, current = {:?}", self.navigator.current());
        }
    }

    fn begin_transition(&mut self, transition: Transition, now: Instant) {
        let heading = &self.headings[transition.to];
        let mut timeline = transition::build(
            transition,
            heading,
            &self.config.transition,
            &mut rand::rng(),
        );
        timeline.play(now);
        debug!(
            "transition {:?} -> {} ({:?})",
            transition.from,
            transition.to,
            transition.kind()
        );
        self.timeline = Some(timeline);
        self.active_link = transition.to;
        self.status_message = None;
    }
}
