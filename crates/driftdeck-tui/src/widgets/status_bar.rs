use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let slide_str = match app.navigator.current() {
            Some(current) => format!("{}/{}", current + 1, app.deck.len()),
            None => format!("-/{}", app.deck.len()),
        };
        let mode_str = if app.is_animating() { "SLIDING" } else { "IDLE" };

        let (status_text, status_fg) = if let Some(msg) = &app.status_message {
            (format!(" {}", msg), app.theme.error)
        } else {
            (
                format!(" {} | {} | {}", mode_str, slide_str, app.deck.title),
                app.theme.fg0,
            )
        };

        let help_hint = " q:quit j/k:slides 1-9:jump ";
        let padding_len = area.width.saturating_sub(
            status_text.len() as u16 + help_hint.len() as u16,
        ) as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(status_fg).bg(app.theme.bg1),
            ),
            Span::styled(
                " ".repeat(padding_len),
                Style::default().bg(app.theme.bg1),
            ),
            Span::styled(
                help_hint,
                Style::default().fg(app.theme.dim).bg(app.theme.bg1),
            ),
        ]);

        let paragraph = Paragraph::new(line);
        frame.render_widget(paragraph, area);
    }
}
