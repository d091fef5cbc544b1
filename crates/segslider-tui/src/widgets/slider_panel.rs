use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::SegmentStrip;
use crate::app::App;

pub struct SliderPanelWidget;

impl SliderPanelWidget {
    /// Draws the readout and strip, and resizes the control to the strip area
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = app.theme.clone();
        let border_style = if app.slider.is_tracking() {
            Style::default().fg(theme.indicator)
        } else {
            Style::default().fg(theme.muted)
        };

        let block = Block::default()
            .title(" Segmented Slider ")
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(theme.background));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(1)])
            .split(inner);

        let slider = &app.slider;
        let readout = Line::from(vec![
            Span::styled(
                format!(" {:.3} ", slider.value()),
                Style::default().fg(theme.indicator).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    " range [{:.3}, {:.3}]  progress {:.1}%",
                    slider.minimum_value(),
                    slider.maximum_value(),
                    slider.progress() * 100.0
                ),
                Style::default().fg(theme.text),
            ),
        ]);
        frame.render_widget(Paragraph::new(readout), chunks[0]);

        app.set_slider_area(chunks[1]);
        let strip = SegmentStrip::new(&app.slider, &app.theme, app.metrics);
        frame.render_widget(strip, chunks[1]);
    }
}
