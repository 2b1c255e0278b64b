use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" New task ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = Line::from(vec![
        Span::styled("❯ ", Style::default().fg(Theme::ACCENT)),
        Span::styled(state.input.text.as_str(), Theme::input_text()),
    ]);
    frame.render_widget(Paragraph::new(line), inner);

    // Cursor offset: chevron "❯ " plus the chars left of the byte cursor.
    let prompt_offset = 2u16;
    let cursor_cols = state.input.text[..state.input.cursor].chars().count() as u16;
    let cursor_x = inner.x + prompt_offset + cursor_cols;
    frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), inner.y));
}
