use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::config::ThemeConfig;
use crate::task::Task;
use crate::tui::hex_to_color;

/// Rows taken by one item: title, description, gap
const ITEM_HEIGHT: u16 = 3;
/// Rows above the items: title and status/filter line
const HEADER_HEIGHT: u16 = 2;

/// Ordered, selectable, filterable list of tasks backing one column
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    pub title: String,
    items: Vec<Task>,
    /// Position within the visible (filtered) items
    cursor: usize,
    filter: String,
    filtering: bool,
    width: u16,
    height: u16,
}

impl TaskList {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Replace every item and reset the cursor
    pub fn set_items(&mut self, items: Vec<Task>) {
        self.items = items;
        self.cursor = 0;
    }

    pub fn items(&self) -> &[Task] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Insert at `index`, clamped to the end of the list
    pub fn insert_item(&mut self, index: usize, task: Task) {
        let index = index.min(self.items.len());
        self.items.insert(index, task);
        self.clamp_cursor();
    }

    /// Append to the end of the list
    pub fn push_item(&mut self, task: Task) {
        self.insert_item(self.items.len(), task);
    }

    /// Remove the item at `index` in the full collection, handing it back
    pub fn remove_item(&mut self, index: usize) -> Option<Task> {
        if index >= self.items.len() {
            return None;
        }
        let task = self.items.remove(index);
        self.clamp_cursor();
        Some(task)
    }

    pub fn selected_item(&self) -> Option<&Task> {
        self.selected_index().map(|i| &self.items[i])
    }

    /// Cursor position among the visible items
    pub fn index(&self) -> usize {
        self.cursor
    }

    /// Position of the selected item in the full collection
    pub fn selected_index(&self) -> Option<usize> {
        self.visible_indices().get(self.cursor).copied()
    }

    pub fn select(&mut self, cursor: usize) {
        self.cursor = cursor;
        self.clamp_cursor();
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn is_filtering(&self) -> bool {
        self.filtering
    }

    /// Indices into `items` that pass the current filter
    pub fn visible_indices(&self) -> Vec<usize> {
        let needle = self.filter.to_lowercase();
        self.items
            .iter()
            .enumerate()
            .filter(|(_, t)| needle.is_empty() || t.title.to_lowercase().contains(&needle))
            .map(|(i, _)| i)
            .collect()
    }

    /// Items that fit the viewport at once
    fn page_size(&self) -> usize {
        (self.height.saturating_sub(HEADER_HEIGHT) / ITEM_HEIGHT).max(1) as usize
    }

    fn clamp_cursor(&mut self) {
        let count = self.visible_indices().len();
        if count == 0 {
            self.cursor = 0;
        } else if self.cursor >= count {
            self.cursor = count - 1;
        }
    }

    /// Navigation and filtering for every key the board does not claim
    pub fn update(&mut self, key: &KeyEvent) {
        if self.filtering {
            self.update_filter(key);
            return;
        }

        let count = self.visible_indices().len();
        let last = count.saturating_sub(1);
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.cursor = (self.cursor + 1).min(last),
            KeyCode::Home | KeyCode::Char('g') => self.cursor = 0,
            KeyCode::End | KeyCode::Char('G') => self.cursor = last,
            KeyCode::PageUp => self.cursor = self.cursor.saturating_sub(self.page_size()),
            KeyCode::PageDown => self.cursor = (self.cursor + self.page_size()).min(last),
            KeyCode::Char('/') => self.filtering = true,
            KeyCode::Esc => {
                self.filter.clear();
                self.clamp_cursor();
            }
            _ => {}
        }
    }

    fn update_filter(&mut self, key: &KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.filtering = false;
                self.filter.clear();
            }
            KeyCode::Tab => self.filtering = false,
            KeyCode::Backspace => {
                self.filter.pop();
            }
            KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down => self.cursor += 1,
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                self.filter.push(c);
                self.cursor = 0;
            }
            _ => {}
        }
        self.clamp_cursor();
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool, theme: &ThemeConfig) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let width = area.width as usize;
        let selected_color = hex_to_color(&theme.color_selected);
        let title_color = hex_to_color(&theme.color_title);
        let description_color = hex_to_color(&theme.color_description);
        let dim_color = hex_to_color(&theme.color_help);

        let visible = self.visible_indices();
        let mut lines: Vec<Line> = Vec::new();

        lines.push(Line::from(Span::styled(
            format!(" {} ", self.title),
            Style::default().fg(Color::White).bg(hex_to_color(&theme.color_focused_border)),
        )));

        let status = if self.filtering || !self.filter.is_empty() {
            let cursor = if self.filtering { "_" } else { "" };
            format!("Filter: {}{}", self.filter, cursor)
        } else if visible.len() == 1 {
            "1 item".to_string()
        } else {
            format!("{} items", visible.len())
        };
        lines.push(Line::from(Span::styled(status, Style::default().fg(dim_color))));

        let page = self.page_size();
        let start = (self.cursor / page) * page;
        for (pos, &idx) in visible.iter().enumerate().skip(start).take(page) {
            let task = &self.items[idx];
            let is_selected = focused && pos == self.cursor;
            let (marker, title_style, desc_style) = if is_selected {
                (
                    Span::styled("│ ", Style::default().fg(selected_color)),
                    Style::default().fg(selected_color).bold(),
                    Style::default().fg(selected_color),
                )
            } else {
                (
                    Span::raw("  "),
                    Style::default().fg(title_color),
                    Style::default().fg(description_color),
                )
            };
            lines.push(Line::from(vec![marker.clone(), Span::styled(truncate(&task.title, width.saturating_sub(2)), title_style)]));
            lines.push(Line::from(vec![marker, Span::styled(truncate(&task.description, width.saturating_sub(2)), desc_style)]));
            lines.push(Line::default());
        }

        if visible.is_empty() {
            lines.push(Line::from(Span::styled("  No items.", Style::default().fg(dim_color))));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}

/// Char-safe truncation with a trailing ellipsis
fn truncate(text: &str, max: usize) -> String {
    // Only the first line of a multi-line description is shown
    let text = text.lines().next().unwrap_or("");
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}
