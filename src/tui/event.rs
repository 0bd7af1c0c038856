use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::task::Task;

/// Messages routed through the screen dispatcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Terminal dimensions became known or changed
    Resize { width: u16, height: u16 },
    Key(KeyEvent),
    /// Ctrl+C or an external interrupt
    Interrupt,
    /// A task produced by the form, delivered to the board
    TaskCreated(Task),
}

impl Msg {
    /// Translate a raw terminal event. Returns `None` for events the
    /// screens have no use for (mouse, focus, paste, key releases).
    pub fn from_terminal(event: Event) -> Option<Self> {
        match event {
            Event::Resize(width, height) => Some(Msg::Resize { width, height }),
            Event::Key(key) if key.kind == KeyEventKind::Release => None,
            Event::Key(key)
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                Some(Msg::Interrupt)
            }
            Event::Key(key) => Some(Msg::Key(key)),
            _ => None,
        }
    }

    /// Shorthand for a plain key press
    pub fn key(code: KeyCode) -> Self {
        Msg::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    /// Key press for a literal character
    pub fn char(c: char) -> Self {
        Msg::key(KeyCode::Char(c))
    }
}

/// What a screen asks the dispatcher to do after handling a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    /// Stop the program; no further messages are processed
    Quit,
    /// Switch to the form and replay the triggering message to it
    OpenForm,
    /// Switch to the board and deliver the task as the next message
    TaskCreated(Task),
}

/// Symbolic name of a key press, e.g. `"left"`, `"enter"`, `"q"`,
/// `"ctrl+c"` or `"alt+enter"`.
pub fn key_name(key: &KeyEvent) -> String {
    let base = match key.code {
        KeyCode::Char(' ') => "space".to_string(),
        // Shifted letters already arrive uppercase
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Delete => "delete".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::BackTab => "shift+tab".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pgup".to_string(),
        KeyCode::PageDown => "pgdown".to_string(),
        KeyCode::Insert => "insert".to_string(),
        KeyCode::F(n) => format!("f{}", n),
        _ => "unknown".to_string(),
    };

    let mut name = String::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        name.push_str("ctrl+");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        name.push_str("alt+");
    }
    name.push_str(&base);
    name
}
