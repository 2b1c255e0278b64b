mod input_box;
mod layout;
mod list_area;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

/// Draw the whole frame from the current state. Called after every state
/// change; nothing is cached between draws.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    list_area::render(frame, app_layout.list_area, state);
    input_box::render(frame, app_layout.input_box, state);
    status_bar::render(frame, app_layout.status_bar, state);
}
