use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::app::App;

pub struct EventLogWidget;

impl EventLogWidget {
    /// Recent control notifications, newest first
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let block = Block::default()
            .title(" Events ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.muted))
            .style(Style::default().bg(theme.background));

        let items: Vec<ListItem> = app
            .event_log
            .iter()
            .rev()
            .enumerate()
            .map(|(i, event)| {
                let fg = if i == 0 { theme.text } else { theme.muted };
                ListItem::new(format!(" {}", event.name())).style(Style::default().fg(fg))
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use segslider_core::{AppConfig, ControlEvent};

    #[test]
    fn test_newest_first() {
        let mut app = App::new(&AppConfig::default());
        app.event_log.push_back(ControlEvent::TouchDown);
        app.event_log.push_back(ControlEvent::ValueChanged);

        let mut terminal = Terminal::new(TestBackend::new(30, 4)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                EventLogWidget::render(frame, area, &app)
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let row = |y: u16| -> String { (1..29).map(|x| buffer[(x, y)].symbol()).collect() };
        assert!(row(1).starts_with(&format!(" {}", ControlEvent::ValueChanged.name())));
        assert!(row(2).starts_with(&format!(" {}", ControlEvent::TouchDown.name())));
    }
}
