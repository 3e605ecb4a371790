//! Recorded timestamps, newest last

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::theme::{ACCENT_RECORDING, TEXT_FAINT, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY};
use crate::ui::view::MarkRow;

/// Most rows the list asks for in the layout
pub const MAX_VISIBLE_MARKS: usize = 6;

pub fn marks_list_height(marks: usize) -> u16 {
    if marks == 0 {
        0
    } else {
        marks.min(MAX_VISIBLE_MARKS) as u16 + 2
    }
}

pub struct MarksList<'a> {
    marks: &'a [MarkRow],
}

impl<'a> MarksList<'a> {
    pub fn new(marks: &'a [MarkRow]) -> Self {
        Self { marks }
    }
}

impl Widget for MarksList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.marks.is_empty() {
            return;
        }

        let block = Block::default()
            .title(format!(" Timestamps ({}) ", self.marks.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(TEXT_FAINT))
            .title_style(Style::default().fg(ACCENT_RECORDING));
        let capacity = block.inner(area).height as usize;
        let skip = self.marks.len().saturating_sub(capacity);

        let lines: Vec<Line> = self.marks[skip..]
            .iter()
            .map(|mark| {
                Line::from(vec![
                    Span::styled(
                        format!(" {:>8}", mark.elapsed),
                        Style::default().fg(TEXT_PRIMARY),
                    ),
                    Span::styled(
                        format!("  {:<10}", mark.context),
                        Style::default().fg(TEXT_SECONDARY),
                    ),
                    Span::styled(mark.wall_clock.clone(), Style::default().fg(TEXT_MUTED)),
                ])
            })
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_is_bounded() {
        assert_eq!(marks_list_height(0), 0);
        assert_eq!(marks_list_height(2), 4);
        assert_eq!(marks_list_height(40), MAX_VISIBLE_MARKS as u16 + 2);
    }
}
