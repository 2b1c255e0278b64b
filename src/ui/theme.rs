use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub const ACCENT: Color = Color::Cyan;

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn item_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn item_done() -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    pub fn item_selected() -> Style {
        Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
    }

    pub fn mark_done() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn mark_pending() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn placeholder() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_error() -> Style {
        Style::default().fg(Color::Red).bg(Color::DarkGray)
    }

    pub fn key_hint() -> Style {
        Style::default().fg(Color::Cyan).bg(Color::DarkGray)
    }
}
