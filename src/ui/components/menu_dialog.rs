//! Game menu

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Widget,
};

use super::dialog::{render_instructions, render_line, DialogFrame};
use super::theme::{SELECTED_BG, TEXT_FAINT, TEXT_PRIMARY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Settings,
    Undo,
    NewGame,
    Close,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        MenuItem::Settings,
        MenuItem::Undo,
        MenuItem::NewGame,
        MenuItem::Close,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Settings => "Game settings",
            MenuItem::Undo => "Undo last play",
            MenuItem::NewGame => "New game",
            MenuItem::Close => "Close",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MenuState {
    pub visible: bool,
    pub selected: usize,
    /// Whether undo has anything to act on
    pub can_undo: bool,
}

impl MenuState {
    pub fn show(&mut self, can_undo: bool) {
        self.visible = true;
        self.selected = 0;
        self.can_undo = can_undo;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % MenuItem::ALL.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = (self.selected + MenuItem::ALL.len() - 1) % MenuItem::ALL.len();
    }

    pub fn selected_item(&self) -> MenuItem {
        MenuItem::ALL[self.selected % MenuItem::ALL.len()]
    }
}

pub struct MenuDialog<'a> {
    state: &'a MenuState,
}

impl<'a> MenuDialog<'a> {
    pub fn new(state: &'a MenuState) -> Self {
        Self { state }
    }
}

impl Widget for MenuDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.state.visible {
            return;
        }

        let inner = DialogFrame::new("Menu", 34, 10).render(area, buf);

        for (i, item) in MenuItem::ALL.iter().enumerate() {
            let mut style = Style::default().fg(TEXT_PRIMARY);
            if *item == MenuItem::Undo && !self.state.can_undo {
                style = style.fg(TEXT_FAINT);
            }
            if i == self.state.selected {
                style = style.bg(SELECTED_BG).add_modifier(Modifier::BOLD);
            }
            let y = inner.y + 1 + i as u16;
            if y + 1 >= inner.y + inner.height {
                break;
            }
            render_line(
                Line::styled(format!("  {}  ", item.label()), style),
                Alignment::Left,
                inner,
                y,
                buf,
            );
        }

        render_instructions(
            &[("↑/↓", "Move"), ("Enter", "Select"), ("Esc", "Close")],
            inner,
            buf,
        );
    }
}
