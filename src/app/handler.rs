use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};

/// Apply one event to the state and return the follow-up actions for the
/// main loop. Every mutation of the list yields an [`Action::Save`] so the
/// snapshot is rewritten before the next event is processed.
pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Tick => {
            state.tick();
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

/// Printable keys always go into the input line so task text is never
/// shadowed by shortcuts. List operations use Space / Delete on an empty
/// input line, or control chords that work at any time.
fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => vec![Action::Quit],
            KeyCode::Char('d') => delete_selected(state),
            KeyCode::Char(' ') => toggle_selected(state),
            _ => vec![],
        };
    }

    match key.code {
        KeyCode::Enter => submit(state),
        KeyCode::Esc => vec![Action::Quit],

        KeyCode::Up => {
            state.select_prev();
            vec![]
        }
        KeyCode::Down => {
            state.select_next();
            vec![]
        }

        // A leading space would be trimmed away on submit anyway, so on an
        // empty input line Space toggles the selected task instead.
        KeyCode::Char(' ') if state.input.is_empty() => toggle_selected(state),
        KeyCode::Delete if state.input.is_empty() => delete_selected(state),

        KeyCode::Char(c) => {
            state.input.insert_char(c);
            vec![]
        }
        KeyCode::Backspace => {
            state.input.delete_back();
            vec![]
        }
        KeyCode::Delete => {
            state.input.delete_forward();
            vec![]
        }
        KeyCode::Left => {
            state.input.move_left();
            vec![]
        }
        KeyCode::Right => {
            state.input.move_right();
            vec![]
        }
        KeyCode::Home => {
            state.input.move_home();
            vec![]
        }
        KeyCode::End => {
            state.input.move_end();
            vec![]
        }
        _ => vec![],
    }
}

/// Submit whatever is in the input field. The field clears regardless of
/// whether the trimmed text was empty; only a real addition is persisted.
fn submit(state: &mut AppState) -> Vec<Action> {
    let text = state.input.take_text();
    if state.todos.add(&text) {
        state.selected = state.todos.len() - 1;
        vec![Action::Save]
    } else {
        vec![]
    }
}

fn toggle_selected(state: &mut AppState) -> Vec<Action> {
    if state.todos.toggle(state.selected) {
        vec![Action::Save]
    } else {
        vec![]
    }
}

fn delete_selected(state: &mut AppState) -> Vec<Action> {
    if state.todos.remove(state.selected).is_some() {
        state.clamp_selection();
        vec![Action::Save]
    } else {
        vec![]
    }
}
