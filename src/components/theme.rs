// ABOUTME: Color palette shared by every component

use ratatui::style::{Color, Modifier, Style};

use crate::notify::NotificationType;

pub const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
pub const GOLD: Color = Color::Rgb(255, 215, 0);
pub const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
pub const WARNING_ORANGE: Color = Color::Rgb(255, 165, 0);
pub const ERROR_RED: Color = Color::Rgb(230, 100, 100);
pub const DARK_BG: Color = Color::Rgb(25, 25, 35);
pub const PANEL_BG: Color = Color::Rgb(30, 30, 40);
pub const LIST_HIGHLIGHT_BG: Color = Color::Rgb(40, 40, 60);
pub const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
pub const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
pub const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);

pub fn title_style() -> Style {
    Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
}

pub fn notification_color(kind: NotificationType) -> Color {
    match kind {
        NotificationType::Success => SELECTION_GREEN,
        NotificationType::Error => ERROR_RED,
        NotificationType::Warning => WARNING_ORANGE,
        NotificationType::Info => CORNFLOWER_BLUE,
    }
}
