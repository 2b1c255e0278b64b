use crate::config::AppConfig;
use crate::store::TodoList;
use chrono::Local;

/// Status-line messages disappear after this many ticks (50 ms each).
const STATUS_TTL_TICKS: u64 = 100;

/// Single-line text input with a byte-indexed cursor.
#[derive(Debug)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Take the current text and clear the field. The field clears even
    /// when the text is blank; whether anything gets added is decided by
    /// the caller.
    pub fn take_text(&mut self) -> String {
        let text = std::mem::take(&mut self.text);
        self.cursor = 0;
        text
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub todos: TodoList,
    pub input: InputState,
    /// Index of the highlighted row. Meaningless while the list is empty;
    /// always within bounds otherwise.
    pub selected: usize,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<String>,
    status_deadline: Option<u64>,
    pub last_saved: Option<String>,
    pub tick_count: u64,
    timestamp_format: String,
}

impl AppState {
    pub fn new(config: AppConfig, todos: TodoList) -> Self {
        let timestamp_format = config.ui.timestamp_format.clone();
        Self {
            config,
            todos,
            input: InputState::new(),
            selected: 0,
            should_quit: false,
            dirty: true,
            status_message: None,
            status_deadline: None,
            last_saved: None,
            tick_count: 0,
            timestamp_format,
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.dirty = true;
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.todos.len() {
            self.selected += 1;
            self.dirty = true;
        }
    }

    /// Pull the selection back inside the list after a removal.
    pub fn clamp_selection(&mut self) {
        if self.selected >= self.todos.len() {
            self.selected = self.todos.len().saturating_sub(1);
        }
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_deadline = Some(self.tick_count + STATUS_TTL_TICKS);
        self.dirty = true;
    }

    pub fn mark_saved(&mut self) {
        self.last_saved = Some(Local::now().format(&self.timestamp_format).to_string());
        self.status_message = None;
        self.status_deadline = None;
        self.dirty = true;
    }

    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if let Some(deadline) = self.status_deadline {
            if self.tick_count >= deadline {
                self.status_message = None;
                self.status_deadline = None;
                self.dirty = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_editing_moves_cursor_over_chars() {
        let mut input = InputState::new();
        for c in "héllo".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.text, "héllo");
        input.move_left();
        input.move_left();
        input.delete_back();
        assert_eq!(input.text, "hélo");
        input.move_home();
        input.delete_forward();
        assert_eq!(input.text, "élo");
    }

    #[test]
    fn take_text_clears_even_when_blank() {
        let mut input = InputState::new();
        input.insert_char(' ');
        input.insert_char(' ');
        assert_eq!(input.take_text(), "  ");
        assert!(input.is_empty());
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn selection_stays_within_bounds() {
        let mut state = AppState::new(AppConfig::default(), TodoList::new());
        state.todos.add("a");
        state.todos.add("b");
        state.select_prev();
        assert_eq!(state.selected, 0);
        state.select_next();
        assert_eq!(state.selected, 1);
        state.select_next();
        assert_eq!(state.selected, 1);

        state.todos.remove(1);
        state.clamp_selection();
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn status_message_expires_after_ttl() {
        let mut state = AppState::new(AppConfig::default(), TodoList::new());
        state.set_status("Save failed".to_string());
        assert!(state.status_message.is_some());
        for _ in 0..STATUS_TTL_TICKS {
            state.tick();
        }
        assert!(state.status_message.is_none());
    }
}
