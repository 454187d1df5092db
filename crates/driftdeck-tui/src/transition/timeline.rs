//! Composed transition timelines
//!
//! A [`Timeline`] is a flat set of [`Track`]s, each tweening one
//! [`Channel`] (an addressable per-slide property) over its own delay,
//! duration, and easing. Sampling is pull-based: the renderer asks for a
//! channel's value at an explicit instant, and the app loop polls
//! [`Timeline::is_complete`] to drive the navigation state machine —
//! there are no completion callbacks mutating outer state.

use std::time::{Duration, Instant};

use super::easing::{EasingKind, EasingKindExt};
use super::timing::{is_complete, lerp, progress};

/// An animatable property of one slide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Outer wrapper vertical offset, in percent of the slide height
    /// (+100 = parked one full screen below)
    Outer(usize),
    /// Inner wrapper vertical offset, mirroring the outer one
    /// (−100 = content pulled one full screen up)
    Inner(usize),
    /// Background parallax offset, in percent of the slide height
    Image(usize),
    /// Heading grapheme reveal: 100 = hidden below the clip line, 0 = in place
    Char { slide: usize, index: usize },
}

/// One tween of a channel value
#[derive(Debug, Clone)]
struct Track {
    channel: Channel,
    delay: Duration,
    duration: Duration,
    easing: EasingKind,
    from: f64,
    to: f64,
}

impl Track {
    fn end(&self) -> Duration {
        self.delay + self.duration
    }
}

/// A playable set of tracks with a shared clock
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    tracks: Vec<Track>,
    start: Option<Instant>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tween for `channel` starting `delay` into the timeline
    pub fn tween(
        &mut self,
        channel: Channel,
        delay: Duration,
        duration: Duration,
        easing: EasingKind,
        from: f64,
        to: f64,
    ) -> &mut Self {
        self.tracks.push(Track {
            channel,
            delay,
            duration,
            easing,
            from,
            to,
        });
        self
    }

    /// Add an instantaneous value step at `at`. Used for posing channels
    /// before a transition and for resets at its end.
    pub fn set_at(&mut self, channel: Channel, value: f64, at: Duration) -> &mut Self {
        self.tween(channel, at, Duration::ZERO, EasingKind::Linear, value, value)
    }

    /// Total length: the latest track end
    pub fn duration(&self) -> Duration {
        self.tracks
            .iter()
            .map(Track::end)
            .max()
            .unwrap_or(Duration::ZERO)
    }

    /// Start the clock
    pub fn play(&mut self, now: Instant) {
        self.start = Some(now);
    }

    pub fn is_playing(&self) -> bool {
        self.start.is_some()
    }

    /// True once every track has reached its end
    pub fn is_complete(&self, now: Instant) -> bool {
        match self.start {
            Some(start) => is_complete(start, self.duration(), now),
            None => false,
        }
    }

    /// Sample a channel at `now`. Returns `None` when the timeline has not
    /// been started or no track targets the channel; the caller falls back
    /// to the channel's resting pose.
    ///
    /// When several tracks target one channel (a tween plus an end-of-
    /// timeline reset step), the latest one that has begun wins.
    pub fn value_of(&self, channel: Channel, now: Instant) -> Option<f64> {
        let start = self.start?;
        let elapsed = now.saturating_duration_since(start);

        let mut begun: Option<&Track> = None;
        let mut pending: Option<&Track> = None;
        for track in self.tracks.iter().filter(|t| t.channel == channel) {
            if track.delay <= elapsed {
                match begun {
                    Some(b) if track.delay < b.delay => {}
                    _ => begun = Some(track),
                }
            } else {
                match pending {
                    Some(p) if track.delay > p.delay => {}
                    _ => pending = Some(track),
                }
            }
        }

        if let Some(track) = begun {
            let t = progress(start + track.delay, track.duration, now);
            return Some(lerp(track.from, track.to, track.easing.apply(t)));
        }
        // nothing has begun yet: hold the first track's initial value
        pending.map(|track| track.from)
    }
}
