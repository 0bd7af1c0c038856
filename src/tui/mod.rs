mod app;
pub mod board;
pub mod event;
pub mod form;
pub mod source;
pub mod widgets;

use ratatui::style::Color;

use crate::config::ThemeConfig;

pub use app::{run_loop, ActiveScreen, App, Dispatcher};
pub use board::BoardScreen;
pub use event::{Action, Msg};
pub use form::{FormPhase, FormScreen};
pub use source::{CrosstermEvents, EventSource, EventSourceError};

#[cfg(feature = "test-mocks")]
pub use source::MockEventSource;

/// Helper to convert hex color string to ratatui Color
pub(crate) fn hex_to_color(hex: &str) -> Color {
    ThemeConfig::parse_hex(hex)
        .map(|(r, g, b)| Color::Rgb(r, g, b))
        .unwrap_or(Color::White)
}
