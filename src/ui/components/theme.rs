//! Shared UI color constants.

use ratatui::style::Color;

use crate::game::Team;

pub const VISITOR: Color = Color::Rgb(64, 156, 255);
pub const HOME: Color = Color::Rgb(255, 149, 0);

pub const CURRENT_CELL_BG: Color = Color::Rgb(40, 60, 80);
pub const SELECTED_BG: Color = Color::Rgb(40, 60, 80);

pub const FOOTER_BG: Color = Color::Rgb(25, 25, 25);
pub const KEY_HINT_BG: Color = Color::Rgb(60, 60, 60);

pub const TEXT_PRIMARY: Color = Color::Rgb(230, 230, 230);
pub const TEXT_SECONDARY: Color = Color::Rgb(180, 180, 180);
pub const TEXT_MUTED: Color = Color::Rgb(130, 130, 130);
pub const TEXT_FAINT: Color = Color::Rgb(90, 90, 90);

pub const ACCENT_PRIMARY: Color = Color::Cyan;
pub const ACCENT_RECORDING: Color = Color::Rgb(255, 69, 58);
pub const ACCENT_ERROR: Color = Color::Red;

pub const OUT_FILLED: Color = Color::Rgb(255, 214, 10);

pub fn team_color(team: Team) -> Color {
    match team {
        Team::Visitor => VISITOR,
        Team::Home => HOME,
    }
}
