//! Where messages come from. A trait so the run loop can be driven by a
//! mock in tests.

use thiserror::Error;

#[cfg(any(test, feature = "test-mocks"))]
use mockall::automock;

use super::event::Msg;

#[derive(Debug, Error)]
pub enum EventSourceError {
    #[error("failed to read terminal event")]
    Read(#[source] std::io::Error),
    #[error("failed to query terminal size")]
    Size(#[source] std::io::Error),
}

/// Blocking source of dispatcher messages
#[cfg_attr(any(test, feature = "test-mocks"), automock)]
pub trait EventSource {
    /// Wait for the next terminal event. `Ok(None)` means the event had no
    /// meaning for the screens and should be skipped.
    fn next_msg(&mut self) -> Result<Option<Msg>, EventSourceError>;
}

/// Real implementation reading crossterm events
#[derive(Debug, Default)]
pub struct CrosstermEvents {
    sent_initial_size: bool,
}

impl CrosstermEvents {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSource for CrosstermEvents {
    fn next_msg(&mut self) -> Result<Option<Msg>, EventSourceError> {
        // Terminals do not report a resize at startup, so synthesize one
        if !self.sent_initial_size {
            self.sent_initial_size = true;
            let (width, height) = crossterm::terminal::size().map_err(EventSourceError::Size)?;
            return Ok(Some(Msg::Resize { width, height }));
        }

        let event = crossterm::event::read().map_err(EventSourceError::Read)?;
        Ok(Msg::from_terminal(event))
    }
}
