mod confirmation_dialog;
mod dialog;
mod global_footer;
mod key_hints;
mod marks_list;
mod menu_dialog;
mod scoreboard;
mod settings_dialog;
pub mod theme;
mod timer_controls;

pub use confirmation_dialog::{ConfirmationContext, ConfirmationDialog, ConfirmationDialogState};
pub use dialog::{button, render_instructions, render_line, DialogFrame};
pub use global_footer::GlobalFooter;
pub use key_hints::{HintPlacement, KeyHints};
pub use marks_list::{marks_list_height, MarksList, MAX_VISIBLE_MARKS};
pub use menu_dialog::{MenuDialog, MenuItem, MenuState};
pub use scoreboard::{InningsGrid, ScoreHeader, Scoreboard, HEADER_HEIGHT};
pub use settings_dialog::{SettingsDialog, SettingsDialogState, SettingsField};
pub use timer_controls::{TimerControls, TIMER_CONTROLS_HEIGHT};
