//! Slide transition system
//!
//! Implements the animated hand-off between two stacked slides with
//! configurable easing and timing.
//!
//! - `easing` - Pure easing functions (linear, power2, cubic, quintic, slow-in-out)
//! - `timing` - Time calculation utilities (progress, interpolation)
//! - `heading` - Per-slide grapheme cache for the heading reveal
//! - `timeline` - Channel/track timeline with pull-based sampling
//! - `director` - Builds the slide-in / slide-out timelines
//!
//! # Usage
//!
//! ```ignore
//! use driftdeck_tui::transition::{self, Channel, SplitHeading};
//!
//! let heading = SplitHeading::new("Scroll down");
//! let mut tl = transition::build(decided, &heading, &config.transition, &mut rand::rng());
//! tl.play(Instant::now());
//!
//! // each frame: sample whatever the widgets need
//! let outer = tl.value_of(Channel::Outer(next), Instant::now());
//! if tl.is_complete(Instant::now()) {
//!     navigator.complete();
//! }
//! ```

pub mod director;
pub mod easing;
pub mod heading;
pub mod timeline;
pub mod timing;

// Re-exports for convenient access
pub use director::build;
pub use easing::{EasingKind, EasingKindExt};
pub use heading::SplitHeading;
pub use timeline::{Channel, Timeline};
