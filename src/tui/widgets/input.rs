//! Single-line and multi-line text entry.
//!
//! Cursor positions are char indices, never byte offsets, so multi-byte
//! input edits cleanly.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// One editable line with a cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct LineEditor {
    chars: Vec<char>,
    cursor: usize,
}

impl LineEditor {
    fn from_text(s: &str) -> Self {
        let chars: Vec<char> = s.chars().collect();
        let cursor = chars.len();
        Self { chars, cursor }
    }

    fn text(&self) -> String {
        self.chars.iter().collect()
    }

    fn len(&self) -> usize {
        self.chars.len()
    }

    /// Apply an editing key. Returns false if the key is not a line edit.
    fn handle(&mut self, key: &KeyEvent) -> bool {
        let has_alt = key.modifiers.contains(KeyModifiers::ALT);
        let has_ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Left if has_alt => self.cursor = word_boundary_left(&self.chars, self.cursor),
            KeyCode::Right if has_alt => self.cursor = word_boundary_right(&self.chars, self.cursor),
            // macOS: Option+Left/Right sends Alt+b / Alt+f
            KeyCode::Char('b') if has_alt => self.cursor = word_boundary_left(&self.chars, self.cursor),
            KeyCode::Char('f') if has_alt => self.cursor = word_boundary_right(&self.chars, self.cursor),
            KeyCode::Char('a') if has_ctrl => self.cursor = 0,
            KeyCode::Char('e') if has_ctrl => self.cursor = self.len(),
            KeyCode::Char('u') if has_ctrl => {
                self.chars.drain(..self.cursor);
                self.cursor = 0;
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.len(),
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.chars.remove(self.cursor);
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.len() {
                    self.chars.remove(self.cursor);
                }
            }
            KeyCode::Char(c) if !has_ctrl && !has_alt => {
                self.chars.insert(self.cursor, c);
                self.cursor += 1;
            }
            _ => return false,
        }
        true
    }

    /// Visible slice and cursor column for a viewport `width` chars wide
    fn viewport(&self, width: usize) -> (String, usize) {
        if width == 0 {
            return (String::new(), 0);
        }
        let start = self.cursor.saturating_sub(width - 1);
        let visible: String = self.chars.iter().skip(start).take(width).collect();
        (visible, self.cursor - start)
    }
}

/// Find the previous word boundary (for Option+Left)
fn word_boundary_left(chars: &[char], pos: usize) -> usize {
    if pos == 0 {
        return 0;
    }
    let mut i = pos - 1;
    // Skip whitespace/punctuation
    while i > 0 && !chars[i].is_alphanumeric() {
        i -= 1;
    }
    // Skip word characters
    while i > 0 && chars[i - 1].is_alphanumeric() {
        i -= 1;
    }
    i
}

/// Find the next word boundary (for Option+Right)
fn word_boundary_right(chars: &[char], pos: usize) -> usize {
    let len = chars.len();
    let mut i = pos.min(len);
    while i < len && chars[i].is_alphanumeric() {
        i += 1;
    }
    while i < len && !chars[i].is_alphanumeric() {
        i += 1;
    }
    i
}

/// Single-line text field
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    line: LineEditor,
    focused: bool,
    pub placeholder: String,
    pub prompt: String,
}

impl TextInput {
    pub fn new() -> Self {
        Self {
            prompt: "> ".to_string(),
            ..Self::default()
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    pub fn value(&self) -> String {
        self.line.text()
    }

    pub fn set_value(&mut self, value: &str) {
        self.line = LineEditor::from_text(value);
    }

    pub fn cursor(&self) -> usize {
        self.line.cursor
    }

    /// Edit the buffer. Ignored while blurred.
    pub fn update(&mut self, key: &KeyEvent) {
        if self.focused {
            self.line.handle(key);
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, text_color: Color, placeholder_color: Color) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let prompt_width = self.prompt.chars().count() as u16;
        let avail = area.width.saturating_sub(prompt_width) as usize;

        let line = if self.line.len() == 0 && !self.placeholder.is_empty() {
            Line::from(vec![
                Span::styled(self.prompt.clone(), Style::default().fg(text_color)),
                Span::styled(self.placeholder.clone(), Style::default().fg(placeholder_color)),
            ])
        } else {
            let (visible, _) = self.line.viewport(avail);
            Line::from(vec![
                Span::styled(self.prompt.clone(), Style::default().fg(text_color)),
                Span::styled(visible, Style::default().fg(text_color)),
            ])
        };
        frame.render_widget(Paragraph::new(line), area);

        if self.focused {
            let (_, col) = self.line.viewport(avail);
            frame.set_cursor_position((area.x + prompt_width + col as u16, area.y));
        }
    }
}

/// Multi-line text area. Plain Enter is left to the owner; Alt+Enter or
/// Ctrl+J breaks the line.
#[derive(Debug, Clone)]
pub struct TextArea {
    lines: Vec<LineEditor>,
    row: usize,
    focused: bool,
    pub placeholder: String,
}

impl Default for TextArea {
    fn default() -> Self {
        Self {
            lines: vec![LineEditor::default()],
            row: 0,
            focused: false,
            placeholder: String::new(),
        }
    }
}

impl TextArea {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    pub fn value(&self) -> String {
        self.lines.iter().map(LineEditor::text).collect::<Vec<_>>().join("\n")
    }

    pub fn set_value(&mut self, value: &str) {
        self.lines = value.split('\n').map(LineEditor::from_text).collect();
        self.row = self.lines.len() - 1;
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Cursor as (row, column)
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.lines[self.row].cursor)
    }

    /// Edit the buffer. Ignored while blurred.
    pub fn update(&mut self, key: &KeyEvent) {
        if !self.focused {
            return;
        }
        let has_alt = key.modifiers.contains(KeyModifiers::ALT);
        let has_ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let col = self.lines[self.row].cursor;

        match key.code {
            KeyCode::Enter if has_alt => self.break_line(),
            KeyCode::Char('j') if has_ctrl => self.break_line(),
            KeyCode::Up => {
                if self.row > 0 {
                    self.row -= 1;
                    self.clamp_col(col);
                }
            }
            KeyCode::Down => {
                if self.row + 1 < self.lines.len() {
                    self.row += 1;
                    self.clamp_col(col);
                }
            }
            KeyCode::Backspace if col == 0 && self.row > 0 => {
                let current = self.lines.remove(self.row);
                self.row -= 1;
                let prev = &mut self.lines[self.row];
                prev.cursor = prev.len();
                prev.chars.extend(current.chars);
            }
            KeyCode::Delete if col == self.lines[self.row].len() && self.row + 1 < self.lines.len() => {
                let next = self.lines.remove(self.row + 1);
                self.lines[self.row].chars.extend(next.chars);
            }
            _ => {
                self.lines[self.row].handle(key);
            }
        }
    }

    fn break_line(&mut self) {
        let line = &mut self.lines[self.row];
        let tail: Vec<char> = line.chars.split_off(line.cursor);
        self.row += 1;
        self.lines.insert(self.row, LineEditor { chars: tail, cursor: 0 });
    }

    fn clamp_col(&mut self, col: usize) {
        let line = &mut self.lines[self.row];
        line.cursor = col.min(line.len());
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, text_color: Color, placeholder_color: Color) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let width = area.width as usize;
        let height = area.height as usize;

        if self.value().is_empty() && !self.placeholder.is_empty() {
            let placeholder = Paragraph::new(self.placeholder.clone()).style(Style::default().fg(placeholder_color));
            frame.render_widget(placeholder, area);
        } else {
            // Keep the cursor row in view
            let top = self.row.saturating_sub(height - 1);
            let lines: Vec<Line> = self
                .lines
                .iter()
                .enumerate()
                .skip(top)
                .take(height)
                .map(|(i, l)| {
                    let text = if i == self.row {
                        l.viewport(width).0
                    } else {
                        l.chars.iter().take(width).collect()
                    };
                    Line::from(text)
                })
                .collect();
            frame.render_widget(Paragraph::new(lines).style(Style::default().fg(text_color)), area);
        }

        if self.focused {
            let top = self.row.saturating_sub(height - 1);
            let (_, col) = self.lines[self.row].viewport(width);
            frame.set_cursor_position((area.x + col as u16, area.y + (self.row - top) as u16));
        }
    }
}
