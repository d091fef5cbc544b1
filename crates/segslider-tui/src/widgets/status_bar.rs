use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let mode_str = if app.slider.is_tracking() {
            "DRAG"
        } else if app.slider.is_enabled() {
            "NORMAL"
        } else {
            "DISABLED"
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {} | {}", mode_str, msg)
        } else {
            let last = app
                .event_log
                .back()
                .map(|event| event.name())
                .unwrap_or("-");
            format!(" {} | Last event: {}", mode_str, last)
        };

        let help_hint = " q:quit h/l:scroll j/k:step e:enable v:layout ";
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.text).bg(theme.status)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.status)),
            Span::styled(help_hint, Style::default().fg(theme.muted).bg(theme.status)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use segslider_core::AppConfig;

    fn row_text(terminal: &Terminal<TestBackend>, width: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..width).map(|x| buffer[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_shows_mode_and_hint() {
        let app = App::new(&AppConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                StatusBarWidget::render(frame, area, &app)
            })
            .unwrap();

        let text = row_text(&terminal, 80);
        assert!(text.starts_with(" NORMAL | Last event: -"));
        assert!(text.trim_end().ends_with("v:layout"));
    }

    #[test]
    fn test_status_message_wins() {
        let mut app = App::new(&AppConfig::default());
        app.status_message = Some("Disabled".to_string());
        app.slider.set_enabled(false);
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                StatusBarWidget::render(frame, area, &app)
            })
            .unwrap();

        assert!(row_text(&terminal, 80).starts_with(" DISABLED | Disabled"));
    }
}
