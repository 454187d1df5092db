use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, MouseButton, MouseEvent, MouseEventKind},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};

use driftdeck_core::{config::ThemeConfig, AppConfig, Deck};
use driftdeck_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    keymap::Keymap,
    load_theme,
    widgets::{NavBarWidget, StageWidget, StatusBarWidget},
};

pub fn run(config: Arc<AppConfig>, deck_path: Option<PathBuf>) -> Result<()> {
    // Resolve the deck: command line, then config, then the built-in sample
    let deck = match deck_path.or_else(|| config.default_deck()) {
        Some(path) => Deck::from_path(&path)?,
        None => Deck::sample(),
    };
    tracing::info!("presenting '{}' ({} slides)", deck.title, deck.len());

    // A deck may name its own theme; config color overrides still apply
    let theme_config = match &deck.theme {
        Some(name) => ThemeConfig {
            name: name.clone(),
            colors: config.ui.theme.colors.clone(),
        },
        None => config.ui.theme.clone(),
    };
    let theme = load_theme(&theme_config);

    let keymap = Keymap::from_config(&config.keymap);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();

    let title = if deck.title.is_empty() {
        "Driftdeck".to_string()
    } else {
        deck.title.clone()
    };
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle(&title)
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let event_handler = EventHandler::new(config.ui.tick_rate_ms, config.ui.animation_fps);

    // Create app state; this starts the intro transition
    let mut app = App::new(config.clone(), theme, deck, Instant::now());

    let result = main_loop(&mut terminal, &mut app, &event_handler, &keymap);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
    keymap: &Keymap,
) -> Result<()> {
    loop {
        let now = Instant::now();

        // Complete a finished transition before drawing
        app.tick(now);

        terminal.draw(|frame| draw(frame, app, now))?;

        if app.should_quit {
            return Ok(());
        }

        match event_handler.next(app.is_animating())? {
            Some(AppEvent::Key(key)) => {
                let action = handle_key_event(key, keymap, app.pending_g);
                app.on_action(action, Instant::now());
            }
            Some(AppEvent::Mouse(mouse)) => {
                let size = terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                handle_mouse(app, mouse, area);
            }
            Some(AppEvent::Resize(_, _)) | Some(AppEvent::Tick) | None => {}
        }
    }
}

/// Split the screen into nav bar, stage, and status bar
fn screen_layout(area: Rect, app: &App) -> (Option<Rect>, Rect, Option<Rect>) {
    let nav = u16::from(app.config.ui.show_nav_bar);
    let status = u16::from(app.config.ui.show_status_bar);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(nav),
            Constraint::Min(0),
            Constraint::Length(status),
        ])
        .split(area);

    (
        (nav > 0).then(|| chunks[0]),
        chunks[1],
        (status > 0).then(|| chunks[2]),
    )
}

fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let (nav_area, stage_area, status_area) = screen_layout(frame.area(), app);

    StageWidget::render(frame, stage_area, app, now);
    if let Some(area) = nav_area {
        NavBarWidget::render(frame, area, app);
    }
    if let Some(area) = status_area {
        StatusBarWidget::render(frame, area, app);
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent, screen: Rect) {
    let now = Instant::now();
    match mouse.kind {
        MouseEventKind::ScrollDown => app.on_wheel(1, now),
        MouseEventKind::ScrollUp => app.on_wheel(-1, now),
        MouseEventKind::Down(MouseButton::Left) => app.on_press(mouse.column, mouse.row),
        MouseEventKind::Up(MouseButton::Left) => {
            // a release that was not a swipe may be a nav-bar click
            if !app.on_release(mouse.column, mouse.row, now) && !app.is_animating() {
                let (nav_area, _, _) = screen_layout(screen, app);
                if let Some(area) = nav_area {
                    if let Some(index) =
                        NavBarWidget::hit(area, &app.deck, mouse.column, mouse.row)
                    {
                        app.request_jump(index, now);
                    }
                }
            }
        }
        _ => {}
    }
}
