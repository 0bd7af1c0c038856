use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};
use tracing::debug;

use crate::config::ThemeConfig;
use crate::task::{Task, TaskStatus};

use super::event::{key_name, Action, Msg};
use super::hex_to_color;
use super::widgets::{TextArea, TextInput};

/// Which field of the form is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    EditingTitle,
    EditingDescription,
}

/// Two-step entry form producing a new task
#[derive(Debug)]
pub struct FormScreen {
    target_status: TaskStatus,
    title: TextInput,
    description: TextArea,
    theme: ThemeConfig,
}

impl FormScreen {
    /// New form with the title field focused
    pub fn new(target_status: TaskStatus, theme: ThemeConfig) -> Self {
        let mut title = TextInput::new().with_placeholder("Task title");
        title.focus();
        Self {
            target_status,
            title,
            description: TextArea::new().with_placeholder("Description (alt+enter for a new line)"),
            theme,
        }
    }

    pub fn target_status(&self) -> TaskStatus {
        self.target_status
    }

    pub fn phase(&self) -> FormPhase {
        if self.title.focused() {
            FormPhase::EditingTitle
        } else {
            FormPhase::EditingDescription
        }
    }

    pub fn title(&self) -> &TextInput {
        &self.title
    }

    pub fn description(&self) -> &TextArea {
        &self.description
    }

    /// Build the task from the current buffers
    pub fn create_task(&self) -> Task {
        Task::new(self.target_status, self.title.value(), self.description.value())
    }

    pub fn update(&mut self, msg: &Msg) -> Action {
        let Msg::Key(key) = msg else {
            return match msg {
                Msg::Interrupt => Action::Quit,
                _ => Action::None,
            };
        };

        match key_name(key).as_str() {
            "q" | "ctrl+c" => return Action::Quit,
            "enter" => {
                if self.title.focused() {
                    self.title.blur();
                    self.description.focus();
                    debug!("form: editing description");
                    return Action::None;
                }
                return Action::TaskCreated(self.create_task());
            }
            _ => {}
        }

        if self.title.focused() {
            self.title.update(key);
        } else {
            self.description.update(key);
        }
        Action::None
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let text_color = hex_to_color(&self.theme.color_title);
        let placeholder_color = hex_to_color(&self.theme.color_description);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let block = Block::default()
            .title(format!(" New task: {} ", self.target_status.title()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(hex_to_color(&self.theme.color_focused_border)))
            .padding(Padding::horizontal(1));
        let inner = block.inner(chunks[0]);
        frame.render_widget(block, chunks[0]);

        let fields = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
            .split(inner);

        self.title.render(frame, fields[0], text_color, placeholder_color);
        self.description.render(frame, fields[2], text_color, placeholder_color);

        let help = match self.phase() {
            FormPhase::EditingTitle => " enter next field • q quit",
            FormPhase::EditingDescription => " alt+enter new line • enter save • q quit",
        };
        frame.render_widget(
            Paragraph::new(help).style(Style::default().fg(hex_to_color(&self.theme.color_help))),
            chunks[1],
        );
    }
}
