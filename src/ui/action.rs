//! Actions that can be triggered by keybindings
//!
//! Each action is a single operation on the UI. Keys are resolved against the
//! current [`InputMode`] so the same key can mean different things in a form
//! and on the scoreboard.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::events::InputMode;

/// All mappable UI actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // ========== Global ==========
    Quit,

    // ========== Scoreboard ==========
    RecordRun,
    RecordOut,
    Undo,
    OpenMenu,
    OpenSettings,
    /// Ask before clearing the scoreboard
    NewGame,
    StartGameTimer,
    StartRecording,
    MarkTimestamp,

    // ========== Lists and forms ==========
    SelectNext,
    SelectPrev,
    Confirm,
    Cancel,
    NextField,
    PrevField,
    Increment,
    Decrement,
    Backspace,
    InsertChar(char),

    // ========== Confirmation Dialog ==========
    ConfirmYes,
    ConfirmNo,
    ConfirmToggle,
}

impl Action {
    /// Resolve a key press in the given mode
    pub fn from_key(mode: InputMode, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
                .then_some(Action::Quit);
        }

        match mode {
            InputMode::Scoreboard => match key.code {
                KeyCode::Char('r') => Some(Action::RecordRun),
                KeyCode::Char('o') => Some(Action::RecordOut),
                KeyCode::Char('u') | KeyCode::Backspace => Some(Action::Undo),
                KeyCode::Char('m') | KeyCode::Esc => Some(Action::OpenMenu),
                KeyCode::Char('s') => Some(Action::OpenSettings),
                KeyCode::Char('n') => Some(Action::NewGame),
                KeyCode::Char('g') => Some(Action::StartGameTimer),
                KeyCode::Char('c') => Some(Action::StartRecording),
                KeyCode::Char('t') => Some(Action::MarkTimestamp),
                KeyCode::Char('q') => Some(Action::Quit),
                _ => None,
            },
            InputMode::Menu => match key.code {
                KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNext),
                KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrev),
                KeyCode::Enter => Some(Action::Confirm),
                KeyCode::Esc | KeyCode::Char('m') => Some(Action::Cancel),
                _ => None,
            },
            InputMode::Settings => match key.code {
                KeyCode::Tab | KeyCode::Down => Some(Action::NextField),
                KeyCode::BackTab => Some(Action::PrevField),
                KeyCode::Up => Some(Action::PrevField),
                KeyCode::Right | KeyCode::Char('+') => Some(Action::Increment),
                KeyCode::Left | KeyCode::Char('-') => Some(Action::Decrement),
                KeyCode::Backspace => Some(Action::Backspace),
                KeyCode::Enter => Some(Action::Confirm),
                KeyCode::Esc => Some(Action::Cancel),
                KeyCode::Char(c) => Some(Action::InsertChar(c)),
                _ => None,
            },
            InputMode::Confirming => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => Some(Action::ConfirmYes),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::ConfirmNo),
                KeyCode::Left | KeyCode::Right | KeyCode::Tab => Some(Action::ConfirmToggle),
                KeyCode::Enter => Some(Action::Confirm),
                _ => None,
            },
        }
    }
}
