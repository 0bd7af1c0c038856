use crossterm::event::KeyCode;
use kanban_tui::task::{Task, TaskStatus};
use kanban_tui::tui::{Action, BoardScreen, Msg};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn loaded_board() -> BoardScreen {
    let mut board = BoardScreen::default();
    board.handle_resize(120, 40);
    board
}

fn snapshot(board: &BoardScreen) -> Vec<Vec<Task>> {
    TaskStatus::columns().iter().map(|&s| board.tasks(s).to_vec()).collect()
}

fn titles(board: &BoardScreen, status: TaskStatus) -> Vec<String> {
    board.tasks(status).iter().map(|t| t.title.clone()).collect()
}

fn render(board: &BoardScreen, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| board.render(frame, frame.area())).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

// === Construction and resize ===

#[test]
fn test_board_new() {
    let board = BoardScreen::default();

    assert!(!board.is_loaded());
    assert!(!board.is_quitting());
    assert_eq!(board.focused(), TaskStatus::Todo);
    for &s in TaskStatus::columns() {
        assert!(board.tasks(s).is_empty());
    }
}

#[test]
fn test_resize_loads_and_seeds() {
    let board = loaded_board();

    assert!(board.is_loaded());
    assert_eq!(titles(&board, TaskStatus::Todo), vec!["buy milk", "eat sushi", "cleaning"]);
    assert_eq!(board.tasks(TaskStatus::InProgress).len(), 3);
    assert_eq!(board.tasks(TaskStatus::Done).len(), 3);
    assert!(board.statuses_consistent());
    assert_eq!(board.list(TaskStatus::Todo).title, "To Do");
    assert_eq!(board.list(TaskStatus::InProgress).title, "In progress");
}

#[test]
fn test_resize_sizes_lists_each_time_but_style_once() {
    let mut board = BoardScreen::default();
    board.handle_resize(120, 40);
    assert_eq!(board.list(TaskStatus::Todo).size(), (30, 38));
    assert_eq!(board.column_size(), Some((30, 36)));

    board.handle_resize(200, 50);
    assert_eq!(board.list(TaskStatus::Done).size(), (50, 48));
    // Column styling keeps the first size
    assert_eq!(board.column_size(), Some((30, 36)));
}

#[test]
fn test_resize_reseeds_and_discards_moves() {
    let mut board = loaded_board();
    board.promote_selected();
    assert_eq!(board.tasks(TaskStatus::Todo).len(), 2);

    board.handle_resize(120, 40);
    assert_eq!(board.tasks(TaskStatus::Todo).len(), 3);
    assert_eq!(board.tasks(TaskStatus::InProgress).len(), 3);
}

// === Focus ===

#[test]
fn test_focus_next_wraps_after_three() {
    let mut board = loaded_board();
    for _ in 0..3 {
        let start = board.focused();
        board.focus_next();
        assert_ne!(board.focused(), start);
        board.focus_next();
        board.focus_next();
        assert_eq!(board.focused(), start);
        board.focus_next(); // next starting column
    }
}

#[test]
fn test_focus_previous_wraps_after_three() {
    let mut board = loaded_board();
    board.focus_previous();
    assert_eq!(board.focused(), TaskStatus::Done);
    board.focus_previous();
    assert_eq!(board.focused(), TaskStatus::InProgress);
    board.focus_previous();
    assert_eq!(board.focused(), TaskStatus::Todo);
}

#[test]
fn test_focus_keys() {
    let mut board = loaded_board();
    assert_eq!(board.update(&Msg::key(KeyCode::Right)), Action::None);
    assert_eq!(board.focused(), TaskStatus::InProgress);
    board.update(&Msg::char('l'));
    assert_eq!(board.focused(), TaskStatus::Done);
    board.update(&Msg::char('h'));
    assert_eq!(board.focused(), TaskStatus::InProgress);
    board.update(&Msg::key(KeyCode::Left));
    board.update(&Msg::key(KeyCode::Left));
    assert_eq!(board.focused(), TaskStatus::Done);
}

// === Promote ===

#[test]
fn test_promote_on_empty_column_is_noop() {
    let mut board = loaded_board();
    board.list_mut(TaskStatus::Todo).set_items(vec![]);
    let before = snapshot(&board);

    assert!(!board.promote_selected());
    assert_eq!(board.update(&Msg::key(KeyCode::Enter)), Action::None);

    assert_eq!(snapshot(&board), before);
    assert_eq!(board.focused(), TaskStatus::Todo);
}

#[test]
fn test_promote_before_load_is_noop() {
    let mut board = BoardScreen::default();
    assert!(!board.promote_selected());
    assert!(snapshot(&board).iter().all(Vec::is_empty));
}

#[test]
fn test_end_to_end_scenario() {
    let mut board = loaded_board();

    // Promote T1 from Todo
    board.update(&Msg::key(KeyCode::Enter));
    assert_eq!(titles(&board, TaskStatus::Todo), vec!["eat sushi", "cleaning"]);
    let in_progress = board.tasks(TaskStatus::InProgress);
    assert_eq!(in_progress.len(), 4);
    assert_eq!(in_progress[3].title, "buy milk");
    assert_eq!(in_progress[3].status, TaskStatus::InProgress);

    // Focus In progress, select T1 and promote it again
    board.update(&Msg::key(KeyCode::Right));
    for _ in 0..3 {
        board.update(&Msg::key(KeyCode::Down));
    }
    assert_eq!(board.list(TaskStatus::InProgress).selected_item().unwrap().title, "buy milk");
    board.update(&Msg::key(KeyCode::Enter));

    assert_eq!(board.tasks(TaskStatus::InProgress).len(), 3);
    assert!(board.tasks(TaskStatus::InProgress).iter().all(|t| t.title == "write code"));
    let done = board.tasks(TaskStatus::Done);
    assert_eq!(done.len(), 4);
    assert_eq!(done[3], Task::new(TaskStatus::Done, "buy milk", "strawberry milk"));
    assert!(board.statuses_consistent());
}

#[test]
fn test_promote_from_done_wraps_to_todo() {
    let mut board = loaded_board();
    board.focus_previous();
    assert!(board.promote_selected());

    assert_eq!(board.tasks(TaskStatus::Done).len(), 2);
    let todo = board.tasks(TaskStatus::Todo);
    assert_eq!(todo.len(), 4);
    assert_eq!(todo[3].title, "learn algebra");
    assert_eq!(todo[3].status, TaskStatus::Todo);
}

#[test]
fn test_promote_with_filter_moves_selected_item() {
    let mut board = loaded_board();
    board.update(&Msg::char('/'));
    // 'h' and 'l' stay board bindings, so filter on a fragment without them
    for c in "sus".chars() {
        board.update(&Msg::char(c));
    }
    assert_eq!(board.list(TaskStatus::Todo).visible_indices(), vec![1]);

    board.update(&Msg::key(KeyCode::Enter));
    assert_eq!(titles(&board, TaskStatus::Todo), vec!["buy milk", "cleaning"]);
    assert_eq!(board.tasks(TaskStatus::InProgress)[3].title, "eat sushi");
}

#[test]
fn test_invariant_holds_under_mixed_operations() {
    let mut board = loaded_board();
    let keys = [
        Msg::key(KeyCode::Enter),
        Msg::key(KeyCode::Down),
        Msg::key(KeyCode::Enter),
        Msg::key(KeyCode::Right),
        Msg::key(KeyCode::End),
        Msg::key(KeyCode::Enter),
        Msg::key(KeyCode::Right),
        Msg::key(KeyCode::Enter),
        Msg::key(KeyCode::Enter),
        Msg::key(KeyCode::Left),
        Msg::key(KeyCode::Up),
        Msg::key(KeyCode::Enter),
    ];
    for _ in 0..5 {
        for msg in &keys {
            board.update(msg);
            assert!(board.statuses_consistent());
            let total: usize = TaskStatus::columns().iter().map(|&s| board.tasks(s).len()).sum();
            assert_eq!(total, 9);
        }
    }
}

// === Hand-off and quit ===

#[test]
fn test_accept_created_task_uses_status_verbatim() {
    let mut board = loaded_board();
    board.focus_next();

    board.accept_created_task(Task::new(TaskStatus::Done, "ship it", ""));
    assert_eq!(board.tasks(TaskStatus::Done)[3].title, "ship it");

    board.update(&Msg::TaskCreated(Task::new(TaskStatus::Todo, "plan", "week")));
    assert_eq!(board.tasks(TaskStatus::Todo)[3].title, "plan");
    assert_eq!(board.focused(), TaskStatus::InProgress);
}

#[test]
fn test_n_requests_form() {
    let mut board = loaded_board();
    assert_eq!(board.update(&Msg::char('n')), Action::OpenForm);
    assert!(!board.is_quitting());
}

#[test]
fn test_quit_stops_mutation() {
    let mut board = loaded_board();
    assert_eq!(board.update(&Msg::char('q')), Action::Quit);
    assert!(board.is_quitting());

    let before = snapshot(&board);
    board.update(&Msg::key(KeyCode::Enter));
    board.update(&Msg::key(KeyCode::Right));
    assert_eq!(snapshot(&board), before);
    assert_eq!(board.focused(), TaskStatus::Todo);
}

#[test]
fn test_interrupt_quits() {
    let mut board = loaded_board();
    assert_eq!(board.update(&Msg::Interrupt), Action::Quit);
    assert!(board.is_quitting());
}

// === Render ===

#[test]
fn test_render_loading_before_resize() {
    let board = BoardScreen::default();
    let text = render(&board, 80, 24);
    assert!(text.starts_with("Loading ..."));
}

#[test]
fn test_render_columns_with_focus_border() {
    let board = loaded_board();
    let text = render(&board, 120, 40);
    assert!(text.contains("To Do"));
    assert!(text.contains("In progress"));
    assert!(text.contains("Done"));
    assert!(text.contains("eat sushi"));
    assert!(text.contains("write code"));
    assert!(text.contains("learn algebra"));
    // Exactly one rounded box: the focused column
    assert_eq!(text.matches('╭').count(), 1);
}

#[test]
fn test_render_nothing_when_quitting() {
    let mut board = loaded_board();
    board.update(&Msg::char('q'));
    let text = render(&board, 80, 24);
    assert!(text.trim().is_empty());
}
