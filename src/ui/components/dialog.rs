//! Shared pieces for the modal dialogs

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use super::key_hints::{HintPlacement, KeyHints};
use super::theme::ACCENT_PRIMARY;

/// Bordered box centered over the scoreboard
pub struct DialogFrame<'a> {
    title: &'a str,
    size: (u16, u16),
    accent: Color,
}

impl<'a> DialogFrame<'a> {
    pub fn new(title: &'a str, width: u16, height: u16) -> Self {
        Self {
            title,
            size: (width, height),
            accent: ACCENT_PRIMARY,
        }
    }

    /// Border and title color
    pub fn accent(mut self, color: Color) -> Self {
        self.accent = color;
        self
    }

    /// Where the frame lands inside `outer`, shrunk to fit small terminals
    pub fn area(&self, outer: Rect) -> Rect {
        let width = self.size.0.min(outer.width.saturating_sub(2));
        let height = self.size.1.min(outer.height);
        Rect::new(
            outer.x + (outer.width - width) / 2,
            outer.y + (outer.height - height) / 2,
            width,
            height,
        )
    }

    /// Clear the area, draw the border, and return the content area
    pub fn render(&self, outer: Rect, buf: &mut Buffer) -> Rect {
        let area = self.area(outer);
        Clear.render(area, buf);

        let block = Block::default()
            .title(Line::styled(
                format!(" {} ", self.title),
                Style::default().fg(self.accent),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.accent));
        let inner = block.inner(area);
        block.render(area, buf);
        inner
    }
}

/// Key hints on the last row of a dialog's inner area
pub fn render_instructions(hints: &[(&str, &str)], inner: Rect, buf: &mut Buffer) {
    if inner.height == 0 {
        return;
    }
    KeyHints::new(hints, HintPlacement::Dialog).render(
        Rect {
            x: inner.x,
            y: inner.y + inner.height - 1,
            width: inner.width,
            height: 1,
        },
        buf,
    );
}

/// A single line of text inside a dialog, one row tall
pub fn render_line(line: Line<'_>, alignment: Alignment, area: Rect, y: u16, buf: &mut Buffer) {
    if y >= area.y + area.height {
        return;
    }
    Paragraph::new(line).alignment(alignment).render(
        Rect {
            x: area.x,
            y,
            width: area.width,
            height: 1,
        },
        buf,
    );
}

/// Highlighted button label
pub fn button<'a>(label: &'a str, selected: bool, color: Color) -> Span<'a> {
    let style = if selected {
        Style::default().fg(Color::Black).bg(color)
    } else {
        Style::default().fg(color)
    };
    Span::styled(format!(" {} ", label), style)
}
