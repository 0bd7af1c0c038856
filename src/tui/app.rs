use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::collections::VecDeque;
use std::io::{self, Stdout};
use tracing::{debug, info};

use crate::config::GlobalConfig;
use crate::task::TaskStatus;

use super::board::BoardScreen;
use super::event::{Action, Msg};
use super::form::FormScreen;
use super::source::EventSource;

type Terminal = ratatui::Terminal<CrosstermBackend<Stdout>>;

/// Which screen currently receives messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveScreen {
    Board,
    Form,
}

/// Owns both screens and hands control (and created tasks) between them.
///
/// Only the active screen is ever updated; the other keeps its state
/// untouched until it becomes active again.
#[derive(Debug)]
pub struct Dispatcher {
    board: BoardScreen,
    form: FormScreen,
    active: ActiveScreen,
    /// Follow-up messages produced while handling another one
    pending: VecDeque<Msg>,
    quitting: bool,
}

impl Dispatcher {
    pub fn new(board: BoardScreen, form: FormScreen) -> Self {
        Self {
            board,
            form,
            active: ActiveScreen::Board,
            pending: VecDeque::new(),
            quitting: false,
        }
    }

    pub fn from_config(config: &GlobalConfig) -> Self {
        Self::new(
            BoardScreen::new(config.theme.clone()),
            FormScreen::new(TaskStatus::Todo, config.theme.clone()),
        )
    }

    pub fn active(&self) -> ActiveScreen {
        self.active
    }

    pub fn board(&self) -> &BoardScreen {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut BoardScreen {
        &mut self.board
    }

    pub fn form(&self) -> &FormScreen {
        &self.form
    }

    pub fn is_quitting(&self) -> bool {
        self.quitting
    }

    /// Handle one message and every follow-up it produces. Messages that
    /// arrive after a quit request are dropped.
    pub fn dispatch(&mut self, msg: Msg) {
        self.pending.push_back(msg);
        while let Some(msg) = self.pending.pop_front() {
            if self.quitting {
                self.pending.clear();
                break;
            }
            let action = self.route(&msg);
            self.apply(action, &msg);
        }
    }

    fn route(&mut self, msg: &Msg) -> Action {
        match self.active {
            ActiveScreen::Board => self.board.update(msg),
            ActiveScreen::Form => self.form.update(msg),
        }
    }

    fn apply(&mut self, action: Action, msg: &Msg) {
        match action {
            Action::None => {}
            Action::Quit => {
                info!(screen = ?self.active, "quit requested");
                self.quitting = true;
            }
            Action::OpenForm => {
                debug!("switching to form");
                self.active = ActiveScreen::Form;
                // The key that opened the form is replayed to it
                let action = self.form.update(msg);
                self.apply(action, msg);
            }
            Action::TaskCreated(task) => {
                debug!("switching to board");
                self.active = ActiveScreen::Board;
                self.pending.push_front(Msg::TaskCreated(task));
            }
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        match self.active {
            ActiveScreen::Board => self.board.render(frame, area),
            ActiveScreen::Form => self.form.render(frame, area),
        }
    }
}

/// Draw, read one message, dispatch it; repeat until a quit is requested.
pub fn run_loop<B: Backend>(
    terminal: &mut ratatui::Terminal<B>,
    dispatcher: &mut Dispatcher,
    source: &mut dyn EventSource,
) -> Result<()> {
    while !dispatcher.is_quitting() {
        terminal
            .draw(|frame| dispatcher.render(frame))
            .map_err(|e| anyhow::anyhow!("failed to draw frame: {}", e))?;

        if let Some(msg) = source.next_msg()? {
            dispatcher.dispatch(msg);
        }
    }

    // Final frame: the board renders nothing once quitting
    terminal
        .draw(|frame| dispatcher.render(frame))
        .map_err(|e| anyhow::anyhow!("failed to draw frame: {}", e))?;
    Ok(())
}

/// Terminal session running the dispatcher
pub struct App {
    terminal: Terminal,
    dispatcher: Dispatcher,
}

impl App {
    pub fn new(config: &GlobalConfig) -> Result<Self> {
        // Setup terminal
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).context("failed to initialize terminal")?;

        Ok(Self {
            terminal,
            dispatcher: Dispatcher::from_config(config),
        })
    }

    pub fn run(&mut self, source: &mut dyn EventSource) -> Result<()> {
        run_loop(&mut self.terminal, &mut self.dispatcher, source)
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
