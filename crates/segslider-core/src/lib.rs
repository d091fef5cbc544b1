pub mod color;
pub mod config;
pub mod error;
pub mod gesture;
pub mod mapper;
pub mod range;
pub mod slider;
pub mod style;
pub mod tile;

pub use color::Rgba;
pub use config::{AppConfig, SliderConfig};
pub use error::{Error, Result};
pub use gesture::{ControlEvent, DragTracker, GesturePhase};
pub use mapper::{NotificationGate, ScrollGeometry, SuppressToken};
pub use range::ValueRange;
pub use slider::{SegmentedSlider, SliderGeometry};
pub use style::SegmentStyle;
pub use tile::{MarkKind, TileBitmap, TileLayout, TileVariant};
