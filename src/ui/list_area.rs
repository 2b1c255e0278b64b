use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

/// Rebuild one row per item, in list order, from the current state. Row
/// bindings are positional and re-derived on every draw, so a row always
/// operates on the index it is displayed at.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let title = if state.config.ui.show_completed_count && !state.todos.is_empty() {
        format!(" Tasks ({}/{}) ", state.todos.completed_count(), state.todos.len())
    } else {
        " Tasks ".to_string()
    };

    let block = Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.todos.is_empty() {
        let placeholder = ListItem::new(Span::styled(
            " No tasks yet. Type one below and press Enter.",
            Theme::placeholder(),
        ));
        frame.render_widget(List::new(vec![placeholder]), inner);
        return;
    }

    // Window the list so the selected row stays visible.
    let visible = inner.height as usize;
    let offset = scroll_offset(state.selected, state.todos.len(), visible);

    let items: Vec<ListItem> = state
        .todos
        .items()
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(i, item)| {
            let (mark, mark_style) = if item.completed {
                ("[x] ", Theme::mark_done())
            } else {
                ("[ ] ", Theme::mark_pending())
            };
            let text_style = if item.completed {
                Theme::item_done()
            } else {
                Theme::item_text()
            };
            let mut line = Line::from(vec![
                Span::raw(" "),
                Span::styled(mark, mark_style),
                Span::styled(item.text.as_str(), text_style),
            ]);
            if i == state.selected {
                line = line.style(Theme::item_selected());
            }
            ListItem::new(line)
        })
        .collect();

    frame.render_widget(List::new(items), inner);
}

/// First visible index such that `selected` falls inside the window.
fn scroll_offset(selected: usize, len: usize, visible: usize) -> usize {
    if visible == 0 || len <= visible {
        return 0;
    }
    // Keep the selection on the last visible row when scrolling down.
    let max_offset = len - visible;
    selected.saturating_sub(visible - 1).min(max_offset)
}
