//! Yes/no confirmation dialog

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::dialog::{button, render_instructions, render_line, DialogFrame};
use super::theme::{ACCENT_ERROR, TEXT_PRIMARY};

/// What the dialog is asking about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationContext {
    NewGame,
}

impl ConfirmationContext {
    pub fn title(self) -> &'static str {
        match self {
            ConfirmationContext::NewGame => "New Game",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ConfirmationContext::NewGame => {
                "Start a new game? This will clear the current scoreboard."
            }
        }
    }

    /// Label on the destructive button
    pub fn confirm_label(self) -> &'static str {
        match self {
            ConfirmationContext::NewGame => "New Game",
        }
    }
}

/// Open question, if any, and which button is highlighted
#[derive(Debug, Clone, Default)]
pub struct ConfirmationDialogState {
    pub visible: bool,
    /// Cancel is highlighted unless this is set
    pub confirm_selected: bool,
    pub context: Option<ConfirmationContext>,
}

impl ConfirmationDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, context: ConfirmationContext) {
        self.visible = true;
        self.confirm_selected = false;
        self.context = Some(context);
    }

    pub fn show_new_game(&mut self) {
        self.show(ConfirmationContext::NewGame);
    }

    /// Close the dialog and hand back what it was asking about
    pub fn hide(&mut self) -> Option<ConfirmationContext> {
        self.visible = false;
        self.confirm_selected = false;
        self.context.take()
    }

    pub fn toggle_selection(&mut self) {
        self.confirm_selected = !self.confirm_selected;
    }
}

/// Confirmation dialog widget
pub struct ConfirmationDialog<'a> {
    state: &'a ConfirmationDialogState,
}

impl<'a> ConfirmationDialog<'a> {
    pub fn new(state: &'a ConfirmationDialogState) -> Self {
        Self { state }
    }
}

impl Widget for ConfirmationDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(context) = self.state.context.filter(|_| self.state.visible) else {
            return;
        };

        let frame = DialogFrame::new(context.title(), 50, 10).accent(ACCENT_ERROR);
        let inner = frame.render(area, buf);
        if inner.height < 5 {
            return;
        }

        Paragraph::new(context.message())
            .style(Style::default().fg(TEXT_PRIMARY))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(
                Rect {
                    x: inner.x + 1,
                    y: inner.y + 1,
                    width: inner.width.saturating_sub(2),
                    height: 2,
                },
                buf,
            );

        let buttons = Line::from(vec![
            button("Cancel", !self.state.confirm_selected, Color::Gray),
            Span::raw("    "),
            button(context.confirm_label(), self.state.confirm_selected, ACCENT_ERROR),
        ]);
        render_line(
            buttons,
            Alignment::Center,
            inner,
            inner.y + inner.height.saturating_sub(3),
            buf,
        );

        render_instructions(
            &[("←/→", "Select"), ("Enter", "Confirm"), ("y/n", "Quick")],
            inner,
            buf,
        );
    }
}
