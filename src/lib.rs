pub mod config;
pub mod logging;
pub mod task;
pub mod tui;
