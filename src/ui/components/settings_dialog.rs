//! Game settings form: run cap, game length, recording toggle

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use super::dialog::{render_instructions, render_line, DialogFrame};
use super::theme::{ACCENT_PRIMARY, SELECTED_BG, TEXT_MUTED, TEXT_PRIMARY};
use crate::game::GameSettings;

const MAX_DIGITS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsField {
    #[default]
    RunCap,
    GameLength,
    Recording,
}

impl SettingsField {
    fn next(self) -> Self {
        match self {
            SettingsField::RunCap => SettingsField::GameLength,
            SettingsField::GameLength => SettingsField::Recording,
            SettingsField::Recording => SettingsField::RunCap,
        }
    }

    fn prev(self) -> Self {
        match self {
            SettingsField::RunCap => SettingsField::Recording,
            SettingsField::GameLength => SettingsField::RunCap,
            SettingsField::Recording => SettingsField::GameLength,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SettingsDialogState {
    pub visible: bool,
    pub run_cap: String,
    pub game_length: String,
    pub recording_enabled: bool,
    pub focus: SettingsField,
}

impl SettingsDialogState {
    /// Open pre-filled with the current values
    pub fn show(&mut self, current: GameSettings) {
        self.visible = true;
        self.run_cap = current.run_cap.to_string();
        self.game_length = current.game_length_minutes.to_string();
        self.recording_enabled = current.recording_enabled;
        self.focus = SettingsField::RunCap;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focus {
            SettingsField::RunCap => Some(&mut self.run_cap),
            SettingsField::GameLength => Some(&mut self.game_length),
            SettingsField::Recording => None,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if self.focus == SettingsField::Recording {
            if c == ' ' {
                self.recording_enabled = !self.recording_enabled;
            }
            return;
        }
        if let Some(text) = self.focused_text() {
            if c.is_ascii_digit() && text.len() < MAX_DIGITS {
                text.push(c);
            }
        }
    }

    pub fn backspace(&mut self) {
        if let Some(text) = self.focused_text() {
            text.pop();
        }
    }

    /// Step the focused number up or down; toggles the recording flag
    pub fn adjust(&mut self, delta: i64) {
        if self.focus == SettingsField::Recording {
            self.recording_enabled = !self.recording_enabled;
            return;
        }
        if let Some(text) = self.focused_text() {
            let current = i64::from(text.trim().parse::<u32>().unwrap_or(0));
            *text = (current + delta).clamp(0, 9999).to_string();
        }
    }

    /// Settings as entered, with invalid numbers read as 0
    pub fn to_settings(&self) -> GameSettings {
        GameSettings::from_input(&self.run_cap, &self.game_length, self.recording_enabled)
    }
}

pub struct SettingsDialog<'a> {
    state: &'a SettingsDialogState,
}

impl<'a> SettingsDialog<'a> {
    pub fn new(state: &'a SettingsDialogState) -> Self {
        Self { state }
    }

    fn field_line(
        &self,
        label: &'a str,
        value: String,
        hint: &'a str,
        field: SettingsField,
    ) -> Line<'a> {
        let focused = self.state.focus == field;
        let value_style = if focused {
            Style::default()
                .fg(TEXT_PRIMARY)
                .bg(SELECTED_BG)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_PRIMARY)
        };
        let marker = if focused { "▸ " } else { "  " };
        Line::from(vec![
            Span::styled(marker, Style::default().fg(ACCENT_PRIMARY)),
            Span::styled(format!("{:<16}", label), Style::default().fg(TEXT_PRIMARY)),
            Span::styled(format!(" {:>4} ", value), value_style),
            Span::styled(format!(" {}", hint), Style::default().fg(TEXT_MUTED)),
        ])
    }
}

impl Widget for SettingsDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.state.visible {
            return;
        }

        let inner = DialogFrame::new("Game Settings", 52, 10).render(area, buf);
        if inner.height < 5 {
            return;
        }

        let recording = if self.state.recording_enabled { "on" } else { "off" };
        let lines = [
            self.field_line(
                "Run cap",
                self.state.run_cap.clone(),
                "0 = no cap",
                SettingsField::RunCap,
            ),
            self.field_line(
                "Game length",
                self.state.game_length.clone(),
                "minutes, 0 = no timer",
                SettingsField::GameLength,
            ),
            self.field_line(
                "Recording",
                recording.to_string(),
                "space to toggle",
                SettingsField::Recording,
            ),
        ];
        for (i, line) in lines.into_iter().enumerate() {
            render_line(line, Alignment::Left, inner, inner.y + 1 + i as u16, buf);
        }

        render_instructions(
            &[("Tab", "Next"), ("←/→", "Adjust"), ("Enter", "Save")],
            inner,
            buf,
        );
    }
}
