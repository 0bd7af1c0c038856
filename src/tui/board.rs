use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};
use tracing::{debug, info};

use crate::config::ThemeConfig;
use crate::task::{seed_tasks, Task, TaskStatus};

use super::event::{key_name, Action, Msg};
use super::hex_to_color;
use super::widgets::TaskList;

/// Terminal width is split into this many parts; three go to columns
pub const DIVISOR: u16 = 4;

const HELP_TEXT: &str = " ←/h →/l focus • ↑/k ↓/j select • / filter • enter advance • n new • q quit";

/// The three-column kanban board
#[derive(Debug)]
pub struct BoardScreen {
    focused: TaskStatus,
    lists: [TaskList; 3],
    loaded: bool,
    quitting: bool,
    /// Column box size, fixed by the first resize
    column_size: Option<(u16, u16)>,
    theme: ThemeConfig,
}

impl BoardScreen {
    pub fn new(theme: ThemeConfig) -> Self {
        Self {
            focused: TaskStatus::Todo,
            lists: empty_lists(),
            loaded: false,
            quitting: false,
            column_size: None,
            theme,
        }
    }

    pub fn focused(&self) -> TaskStatus {
        self.focused
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_quitting(&self) -> bool {
        self.quitting
    }

    pub fn column_size(&self) -> Option<(u16, u16)> {
        self.column_size
    }

    pub fn list(&self, status: TaskStatus) -> &TaskList {
        &self.lists[status.index()]
    }

    pub fn list_mut(&mut self, status: TaskStatus) -> &mut TaskList {
        &mut self.lists[status.index()]
    }

    /// Tasks of one column in display order
    pub fn tasks(&self, status: TaskStatus) -> &[Task] {
        self.lists[status.index()].items()
    }

    /// True when every task sits in the column matching its status
    pub fn statuses_consistent(&self) -> bool {
        TaskStatus::columns()
            .iter()
            .all(|&s| self.tasks(s).iter().all(|t| t.status == s))
    }

    /// Rebuild every column for the new terminal size.
    ///
    /// Columns are reseeded from the sample tasks each time, so moves made
    /// since the previous resize are lost.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        let list_width = width / DIVISOR;
        let list_height = height.saturating_sub(DIVISOR / 2);

        self.lists = empty_lists();
        for &status in TaskStatus::columns() {
            let list = &mut self.lists[status.index()];
            list.set_size(list_width, list_height);
            list.set_items(seed_tasks(status));
        }

        if !self.loaded {
            self.column_size = Some((list_width, height.saturating_sub(DIVISOR)));
            self.loaded = true;
            info!(width, height, "board loaded");
        } else {
            debug!(width, height, "board reseeded after resize");
        }
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
        debug!(column = self.focused.as_str(), "focus");
    }

    pub fn focus_previous(&mut self) {
        self.focused = self.focused.previous();
        debug!(column = self.focused.as_str(), "focus");
    }

    /// Advance the selected task of the focused column and append it to the
    /// column of its new status. Returns false when nothing is selected.
    pub fn promote_selected(&mut self) -> bool {
        let source = &mut self.lists[self.focused.index()];
        let Some(index) = source.selected_index() else {
            return false;
        };
        let Some(mut task) = source.remove_item(index) else {
            return false;
        };

        let from = task.status;
        task.advance();
        info!(title = %task.title, from = from.as_str(), to = task.status.as_str(), "task promoted");
        self.lists[task.status.index()].push_item(task);
        true
    }

    /// Append a task handed over by the form to the column its status names
    pub fn accept_created_task(&mut self, task: Task) {
        info!(title = %task.title, column = task.status.as_str(), "task created");
        self.lists[task.status.index()].push_item(task);
    }

    pub fn update(&mut self, msg: &Msg) -> Action {
        if self.quitting {
            return Action::None;
        }

        match msg {
            Msg::Resize { width, height } => self.handle_resize(*width, *height),
            Msg::Interrupt => return self.quit(),
            Msg::TaskCreated(task) => self.accept_created_task(task.clone()),
            Msg::Key(key) => match key_name(key).as_str() {
                "q" | "ctrl+c" => return self.quit(),
                "left" | "h" => self.focus_previous(),
                "right" | "l" => self.focus_next(),
                "enter" => {
                    self.promote_selected();
                }
                "n" => return Action::OpenForm,
                _ => self.lists[self.focused.index()].update(key),
            },
        }
        Action::None
    }

    fn quit(&mut self) -> Action {
        self.quitting = true;
        Action::Quit
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if self.quitting {
            return;
        }
        if !self.loaded {
            frame.render_widget(Paragraph::new("Loading ..."), area);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        // Border plus padding on the focused column equals padding alone
        // on plain ones, so focus never shifts the layout
        let (list_width, list_height) = self.column_size.unwrap_or((area.width / DIVISOR, area.height));
        let column_width = list_width + 6;
        let column_height = (list_height + 4).min(chunks[0].height);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(column_width),
                Constraint::Length(column_width),
                Constraint::Length(column_width),
                Constraint::Min(0),
            ])
            .split(chunks[0]);

        for &status in TaskStatus::columns() {
            let is_focused = status == self.focused;
            let rect = Rect {
                height: column_height,
                ..columns[status.index()]
            };

            let block = if is_focused {
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(hex_to_color(&self.theme.color_focused_border)))
                    .padding(Padding::new(2, 2, 1, 1))
            } else {
                Block::default().padding(Padding::new(3, 3, 2, 2))
            };
            let inner = block.inner(rect);
            frame.render_widget(block, rect);
            self.lists[status.index()].render(frame, inner, is_focused, &self.theme);
        }

        let help = Paragraph::new(HELP_TEXT).style(Style::default().fg(hex_to_color(&self.theme.color_help)));
        frame.render_widget(help, chunks[1]);
    }
}

impl Default for BoardScreen {
    fn default() -> Self {
        Self::new(ThemeConfig::default())
    }
}

fn empty_lists() -> [TaskList; 3] {
    [
        TaskList::new(TaskStatus::Todo.title()),
        TaskList::new(TaskStatus::InProgress.title()),
        TaskList::new(TaskStatus::Done.title()),
    ]
}
