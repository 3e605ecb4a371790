//! Key hint rows used by dialogs and the footer.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::theme::{ACCENT_PRIMARY, FOOTER_BG, KEY_HINT_BG, TEXT_FAINT, TEXT_MUTED, TEXT_SECONDARY};

/// Where a hint row is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintPlacement {
    /// Centered, separated by bars, inside a dialog
    Dialog,
    /// Left-aligned keycaps on the footer background
    Footer,
}

/// A row of `key action` pairs
pub struct KeyHints<'a> {
    hints: &'a [(&'a str, &'a str)],
    placement: HintPlacement,
}

impl<'a> KeyHints<'a> {
    pub fn new(hints: &'a [(&'a str, &'a str)], placement: HintPlacement) -> Self {
        Self { hints, placement }
    }

    fn spans(&self) -> Vec<Span<'a>> {
        let mut spans = Vec::with_capacity(self.hints.len() * 3);
        for (i, (key, action)) in self.hints.iter().enumerate() {
            match self.placement {
                HintPlacement::Dialog => {
                    if i > 0 {
                        spans.push(Span::styled(" │ ", Style::default().fg(TEXT_FAINT)));
                    }
                    spans.push(Span::styled(*key, Style::default().fg(ACCENT_PRIMARY)));
                    spans.push(Span::styled(
                        format!(" {}", action),
                        Style::default().fg(TEXT_SECONDARY),
                    ));
                }
                HintPlacement::Footer => {
                    spans.push(Span::raw(if i == 0 { " " } else { "  " }));
                    spans.push(Span::styled(
                        format!(" {} ", key),
                        Style::default().fg(TEXT_SECONDARY).bg(KEY_HINT_BG),
                    ));
                    spans.push(Span::styled(
                        format!(" {}", action),
                        Style::default().fg(TEXT_MUTED),
                    ));
                }
            }
        }
        spans
    }
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let paragraph = Paragraph::new(Line::from(self.spans()));
        let paragraph = match self.placement {
            HintPlacement::Dialog => paragraph.alignment(Alignment::Center),
            HintPlacement::Footer => paragraph
                .alignment(Alignment::Left)
                .style(Style::default().bg(FOOTER_BG)),
        };
        paragraph.render(area, buf);
    }
}
