use std::time::Instant;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use driftdeck_core::TransitionKind;

use crate::app::App;
use crate::themes::parse_hex_color;
use crate::transition::{Channel, Timeline};

/// Sampled pose of one slide during rendering
struct SlidePose {
    /// Outer wrapper offset: panel top edge, percent of slide height
    outer: f64,
    /// Inner wrapper offset: content counter-shift, percent of slide height
    inner: f64,
    /// Background parallax offset, percent of slide height
    image: f64,
}

impl SlidePose {
    const SETTLED: Self = Self {
        outer: 0.0,
        inner: 0.0,
        image: 0.0,
    };
}

/// Renders the slide stack: the settled slide when idle, or the two
/// slides of the active transition in their stacking order.
pub struct StageWidget;

impl StageWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
        let buf = frame.buffer_mut();

        match app.navigator.active_transition() {
            None => {
                if let Some(current) = app.navigator.current() {
                    draw_slide(buf, area, app, current, SlidePose::SETTLED, |_| 0.0);
                }
            }
            Some(transition) => {
                let Some(tl) = app.timeline() else { return };
                match transition.kind() {
                    // incoming slide wipes in over the outgoing one
                    TransitionKind::SlideIn => {
                        if let Some(from) = transition.from {
                            draw_outgoing(buf, area, app, from, tl, now);
                        }
                        draw_incoming(buf, area, app, transition.to, tl, now);
                    }
                    // outgoing slide wipes away over the incoming one
                    TransitionKind::SlideOut => {
                        draw_incoming(buf, area, app, transition.to, tl, now);
                        if let Some(from) = transition.from {
                            draw_outgoing(buf, area, app, from, tl, now);
                        }
                    }
                }
            }
        }
    }
}

/// The incoming slide: wrappers, background, and heading reveal all come
/// from the timeline.
fn draw_incoming(buf: &mut Buffer, area: Rect, app: &App, index: usize, tl: &Timeline, now: Instant) {
    let pose = SlidePose {
        outer: tl.value_of(Channel::Outer(index), now).unwrap_or(100.0),
        inner: tl.value_of(Channel::Inner(index), now).unwrap_or(-100.0),
        image: tl.value_of(Channel::Image(index), now).unwrap_or(0.0),
    };
    draw_slide(buf, area, app, index, pose, |i| {
        tl.value_of(Channel::Char { slide: index, index: i }, now)
            .unwrap_or(100.0)
    });
}

/// The outgoing slide: its wrapper panels stay in place for the whole
/// transition (the end-of-timeline reset parks them only once the
/// incoming slide fully covers the screen), so only the background
/// parallax is sampled. Its heading stays revealed.
fn draw_outgoing(buf: &mut Buffer, area: Rect, app: &App, index: usize, tl: &Timeline, now: Instant) {
    let pose = SlidePose {
        outer: 0.0,
        inner: 0.0,
        image: tl.value_of(Channel::Image(index), now).unwrap_or(0.0),
    };
    draw_slide(buf, area, app, index, pose, |_| 0.0);
}

fn draw_slide(
    buf: &mut Buffer,
    area: Rect,
    app: &App,
    index: usize,
    pose: SlidePose,
    char_value: impl Fn(usize) -> f64,
) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let height = i32::from(area.height);
    let rows = |percent: f64| -> i32 { (percent / 100.0 * f64::from(area.height)).round() as i32 };

    // panel edge slides down from the outer offset; rows above it belong
    // to whatever was drawn underneath
    let panel_top = rows(pose.outer);
    if panel_top >= height {
        return;
    }

    let slide = &app.deck.slides[index];
    let base = slide
        .background
        .as_deref()
        .and_then(parse_hex_color)
        .unwrap_or_else(|| app.theme.slide_background(index));

    // background: horizontal bands shifted by the parallax offset
    let parallax = rows(pose.image);
    for rel_y in panel_top.max(0)..height {
        let y = area.y + rel_y as u16;
        let band_row = rel_y - parallax;
        let band = band_row.div_euclid(3).rem_euclid(2);
        let color = if band == 0 { base } else { lighten(base, 0.08) };
        buf.set_string(
            area.x,
            y,
            " ".repeat(area.width as usize),
            Style::default().bg(color),
        );
    }

    // content is counter-shifted by the inner wrapper, then clipped to the panel
    let content_shift = panel_top + rows(pose.inner);
    let heading_row = height / 3;

    let body_style = Style::default().fg(app.theme.fg1);
    for (i, line) in slide.body.iter().enumerate() {
        let row = heading_row + 2 + i as i32 + content_shift;
        if row < panel_top.max(0) || row >= height {
            continue;
        }
        let y = area.y + row as u16;
        let x = area.x + area.width.saturating_sub(line.width() as u16) / 2;
        buf.set_string(x, y, line, body_style);
    }

    // heading graphemes, individually revealed
    let heading = &app.headings[index];
    let total_width: u16 = heading.graphemes().iter().map(|g| g.width() as u16).sum();
    let row = heading_row + content_shift;
    if row >= panel_top.max(0) && row < height {
        let y = area.y + row as u16;
        let mut x = area.x + area.width.saturating_sub(total_width) / 2;
        for (i, grapheme) in heading.graphemes().iter().enumerate() {
            let value = char_value(i);
            // a grapheme more than halfway down its line box is still
            // behind the clip line; above it, it fades in
            if value < 50.0 {
                let alpha = 1.0 - value / 100.0;
                let row_bg = if (row - parallax).div_euclid(3).rem_euclid(2) == 0 {
                    base
                } else {
                    lighten(base, 0.08)
                };
                let style = Style::default()
                    .fg(blend(row_bg, app.theme.fg0, alpha))
                    .add_modifier(Modifier::BOLD);
                buf.set_string(x, y, grapheme, style);
            }
            x += grapheme.width() as u16;
        }
    }
}

/// Linear blend between two RGB colors; non-RGB colors pass through
fn blend(a: Color, b: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (a, b) {
        (Color::Rgb(ar, ag, ab), Color::Rgb(br, bg, bb)) => {
            let mix = |x: u8, y: u8| -> u8 {
                (f64::from(x) + (f64::from(y) - f64::from(x)) * t).round() as u8
            };
            Color::Rgb(mix(ar, br), mix(ag, bg), mix(ab, bb))
        }
        _ => b,
    }
}

/// Lighten an RGB color toward white by `amount` (0.0..1.0)
fn lighten(color: Color, amount: f64) -> Color {
    blend(color, Color::Rgb(0xff, 0xff, 0xff), amount)
}
