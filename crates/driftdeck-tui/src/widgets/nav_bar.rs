use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use driftdeck_core::Deck;

use crate::app::App;

/// Horizontal strip of slide links, one cell per slide
pub struct NavBarWidget;

impl NavBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        if area.height == 0 {
            return;
        }
        let buf = frame.buffer_mut();

        buf.set_string(
            area.x,
            area.y,
            " ".repeat(area.width as usize),
            Style::default().bg(app.theme.bg1),
        );

        let mut x = start_x(area, &app.deck);
        for (index, slide) in app.deck.slides.iter().enumerate() {
            let cell = format!(" {} ", slide.nav_label(index));
            let style = if index == app.active_link {
                Style::default()
                    .fg(app.theme.bg0)
                    .bg(app.theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(app.theme.dim).bg(app.theme.bg1)
            };
            buf.set_string(x, area.y, &cell, style);
            x += cell.width() as u16;
        }
    }

    /// Map a click position to a slide index
    pub fn hit(area: Rect, deck: &Deck, column: u16, row: u16) -> Option<usize> {
        if row != area.y || area.height == 0 {
            return None;
        }
        let mut x = start_x(area, deck);
        for index in 0..deck.len() {
            let cell_width = format!(" {} ", deck.slides[index].nav_label(index)).width() as u16;
            if column >= x && column < x + cell_width {
                return Some(index);
            }
            x += cell_width;
        }
        None
    }
}

fn start_x(area: Rect, deck: &Deck) -> u16 {
    let total: u16 = (0..deck.len())
        .map(|i| format!(" {} ", deck.slides[i].nav_label(i)).width() as u16)
        .sum();
    area.x + area.width.saturating_sub(total) / 2
}
