mod event_log;
mod slider_panel;
mod status_bar;
mod strip;

pub use event_log::EventLogWidget;
pub use slider_panel::SliderPanelWidget;
pub use status_bar::StatusBarWidget;
pub use strip::SegmentStrip;
