//! Widgets the screens drive: a selectable task list and text entry fields.

mod input;
mod list;

pub use input::{TextArea, TextInput};
pub use list::TaskList;
