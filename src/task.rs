/// Task status in the kanban board.
///
/// The status doubles as the column index: a task with status `s` always
/// lives in the column at `s.index()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Done => "done",
        }
    }

    /// Column heading shown above the list
    pub fn title(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In progress",
            TaskStatus::Done => "Done",
        }
    }

    pub fn columns() -> &'static [TaskStatus] {
        &[TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done]
    }

    pub fn index(&self) -> usize {
        match self {
            TaskStatus::Todo => 0,
            TaskStatus::InProgress => 1,
            TaskStatus::Done => 2,
        }
    }

    /// Successor in the cycle todo -> in-progress -> done -> todo
    pub fn next(&self) -> Self {
        match self {
            TaskStatus::Todo => TaskStatus::InProgress,
            TaskStatus::InProgress => TaskStatus::Done,
            TaskStatus::Done => TaskStatus::Todo,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            TaskStatus::Todo => TaskStatus::Done,
            TaskStatus::InProgress => TaskStatus::Todo,
            TaskStatus::Done => TaskStatus::InProgress,
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::Todo
    }
}

/// A task on the kanban board. Tasks carry no identity; two tasks with the
/// same fields are indistinguishable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub status: TaskStatus,
    pub title: String,
    pub description: String,
}

impl Task {
    pub fn new(status: TaskStatus, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            status,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Move the task to the next status. Relocating it between columns is
    /// the caller's job.
    pub fn advance(&mut self) {
        self.status = self.status.next();
    }
}

/// Sample tasks every column is (re)seeded with on resize
pub fn seed_tasks(status: TaskStatus) -> Vec<Task> {
    let (title, description) = match status {
        TaskStatus::Todo => {
            return vec![
                Task::new(status, "buy milk", "strawberry milk"),
                Task::new(status, "eat sushi", "miso soup"),
                Task::new(status, "cleaning", "do laundry"),
            ]
        }
        TaskStatus::InProgress => ("write code", "finish the kanban project"),
        TaskStatus::Done => ("learn algebra", "repeat finite fields"),
    };
    (0..3).map(|_| Task::new(status, title, description)).collect()
}
