use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const KEY_HINTS: &str = " Enter add | Space done | Del remove | Esc quit ";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    if let Some(ref msg) = state.status_message {
        parts.push(Span::styled(format!(" {} ", msg), Theme::status_error()));
    } else {
        let total = state.todos.len();
        let done = state.todos.completed_count();
        let summary = match total {
            0 => " empty list ".to_string(),
            1 => format!(" 1 task, {} done ", done),
            n => format!(" {} tasks, {} done ", n, done),
        };
        parts.push(Span::styled(summary, Theme::status_bar()));

        if let Some(ref at) = state.last_saved {
            parts.push(Span::styled(format!("| saved {} ", at), Theme::status_bar()));
        }
    }

    // Pad so the key hints sit on the right edge.
    let used: usize = parts.iter().map(|s| s.content.chars().count()).sum();
    let remaining = (area.width as usize).saturating_sub(used + KEY_HINTS.chars().count());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(KEY_HINTS, Theme::key_hint()));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
