use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::key_hints::{HintPlacement, KeyHints};
use crate::ui::events::InputMode;

/// Footer listing the keys that work in the current mode
pub struct GlobalFooter {
    hints: &'static [(&'static str, &'static str)],
}

impl GlobalFooter {
    pub fn for_mode(mode: InputMode) -> Self {
        Self {
            hints: Self::hints_for(mode),
        }
    }

    pub fn hints_for(mode: InputMode) -> &'static [(&'static str, &'static str)] {
        match mode {
            InputMode::Scoreboard => &[
                ("r", "run"),
                ("o", "out"),
                ("u", "undo"),
                ("g", "game timer"),
                ("c", "record"),
                ("t", "mark"),
                ("m", "menu"),
                ("q", "quit"),
            ],
            InputMode::Menu => &[("↑↓", "navigate"), ("enter", "select"), ("esc", "close")],
            InputMode::Settings => &[
                ("tab", "next field"),
                ("←→", "adjust"),
                ("enter", "save"),
                ("esc", "cancel"),
            ],
            InputMode::Confirming => &[("←→", "choose"), ("y", "yes"), ("n", "no")],
        }
    }
}

impl Widget for GlobalFooter {
    fn render(self, area: Rect, buf: &mut Buffer) {
        KeyHints::new(self.hints, HintPlacement::Footer).render(area, buf);
    }
}
