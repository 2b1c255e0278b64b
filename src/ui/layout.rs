use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub list_area: Rect,
    pub input_box: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Vertical split: task list | input box | status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Task list
            Constraint::Length(3), // Input box
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        list_area: chunks[0],
        input_box: chunks[1],
        status_bar: chunks[2],
    }
}
