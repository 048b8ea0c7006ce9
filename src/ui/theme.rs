use crate::timer::mode::{Accent, Mode};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const ACCENT_RED: Color = Color::Rgb(220, 60, 60);
    pub const ACCENT_GRAY: Color = Color::Rgb(120, 120, 130);
    pub const ACCENT_AMBER: Color = Color::Rgb(230, 170, 60);
    pub const BG_SURFACE: Color = Color::Rgb(28, 28, 34);
    pub const TEXT_PRIMARY: Color = Color::White;
    pub const TEXT_SECONDARY: Color = Color::Gray;
    pub const BORDER_DIM: Color = Color::DarkGray;

    pub fn accent(mode: Mode) -> Color {
        match mode.accent() {
            Accent::Red => Self::ACCENT_RED,
            Accent::Gray => Self::ACCENT_GRAY,
        }
    }

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn tab_active(mode: Mode) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Self::accent(mode))
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_inactive() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn clock(running: bool) -> Style {
        let style = Style::default().add_modifier(Modifier::BOLD);
        if running {
            style.fg(Self::TEXT_PRIMARY)
        } else {
            style.fg(Self::TEXT_SECONDARY)
        }
    }

    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint_text() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn selected_row() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }
}
