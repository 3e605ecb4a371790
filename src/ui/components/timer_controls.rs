//! Game timer and recording controls
//!
//! Lists the clock actions available right now, with the recording clock
//! beside them once it runs.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::dialog::button;
use super::theme::{ACCENT_PRIMARY, ACCENT_RECORDING, TEXT_FAINT};
use crate::ui::view::ScoreboardView;

pub const TIMER_CONTROLS_HEIGHT: u16 = 3;

/// One row of buttons for whatever the game currently allows
pub struct TimerControls<'a> {
    view: &'a ScoreboardView,
}

impl<'a> TimerControls<'a> {
    pub fn new(view: &'a ScoreboardView) -> Self {
        Self { view }
    }

    fn spans(&self) -> Vec<Span<'static>> {
        let affordances = self.view.affordances;
        let mut spans = Vec::new();

        if affordances.start_game_timer {
            spans.push(button("g  Start game timer", false, ACCENT_PRIMARY));
            spans.push(Span::raw("  "));
        }
        if affordances.start_recording {
            spans.push(button("c  Start recording", false, ACCENT_RECORDING));
            spans.push(Span::raw("  "));
        }
        if let Some(elapsed) = &self.view.recording_elapsed {
            spans.push(Span::styled(
                format!("● REC {}  ", elapsed),
                Style::default()
                    .fg(ACCENT_RECORDING)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        if affordances.mark {
            spans.push(button("t  Mark", true, ACCENT_RECORDING));
        }
        spans
    }
}

impl Widget for TimerControls<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.view.controls_shown() {
            return;
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(TEXT_FAINT));
        Paragraph::new(Line::from(self.spans()))
            .block(block)
            .render(area, buf);
    }
}
