//! TUI theme and styles

use ratatui::style::{Color, Modifier, Style};

/// Application color theme
pub struct Theme;

impl Theme {
    /// Primary accent color, used for audience names
    pub const PRIMARY: Color = Color::LightBlue;

    /// Secondary accent color
    pub const SECONDARY: Color = Color::Yellow;

    /// Error color
    pub const ERROR: Color = Color::Red;

    /// Muted text color
    pub const MUTED: Color = Color::DarkGray;

    /// Header style
    pub fn header() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Status bar style
    pub fn status_bar() -> Style {
        Style::default().bg(Color::DarkGray)
    }

    /// Selected item style
    pub fn selected() -> Style {
        Style::default().bg(Self::PRIMARY).fg(Color::Black)
    }

    /// Border of the pane or card that has focus
    pub fn focused_border() -> Style {
        Style::default().fg(Self::SECONDARY)
    }

    /// Normal text style
    pub fn normal() -> Style {
        Style::default()
    }

    /// Muted text style
    pub fn muted() -> Style {
        Style::default().fg(Self::MUTED)
    }

    /// Audience name on cards and page titles
    pub fn audience_name() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// `AND` separator between attribute clauses
    pub fn clause_separator() -> Style {
        Style::default()
            .fg(Self::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Load errors
    pub fn error() -> Style {
        Style::default().fg(Self::ERROR)
    }
}
