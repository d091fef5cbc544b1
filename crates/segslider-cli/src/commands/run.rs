use std::io;

use anyhow::Result;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use tracing::info;

use segslider_core::AppConfig;
use segslider_tui::{
    event::{AppEvent, EventHandler},
    input::Action,
    widgets::{EventLogWidget, SliderPanelWidget, StatusBarWidget},
    App,
};

/// Panel height: borders, readout and a four-row strip
const PANEL_HEIGHT: u16 = 7;

pub fn run(config: &AppConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange,
        SetTitle("segslider")
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let event_handler = EventHandler::new(config.ui.tick_rate_ms);
    info!(
        value = app.slider.value(),
        segments = config.slider.segment_count,
        sections = config.slider.section_count,
        "starting slider"
    );

    let result = main_loop(&mut terminal, &mut app, &event_handler);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    result
}

fn main_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_handler: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, app))?;

        match event_handler.next()? {
            Some(AppEvent::Key(key)) => {
                app.status_message = None;
                app.handle_key(key);
            }
            Some(AppEvent::Mouse(mouse)) => app.handle_mouse(mouse),
            Some(AppEvent::FocusLost) => app.apply(Action::CancelDrag),
            // The next draw resizes the strip
            Some(AppEvent::Resize(..)) | Some(AppEvent::Tick) | None => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn draw(frame: &mut Frame, app: &mut App) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(PANEL_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    SliderPanelWidget::render(frame, main_layout[0], app);
    EventLogWidget::render(frame, main_layout[1], app);
    StatusBarWidget::render(frame, main_layout[2], app);
}
