/// Application-level events
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Terminal input event
    Input(crossterm::event::Event),

    /// Periodic redraw for the clocks
    Tick,

    /// The mark cooldown has run out
    CooldownElapsed,
}

/// Input mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Scoring keys act on the game
    #[default]
    Scoreboard,
    /// Game menu is open
    Menu,
    /// Settings form is open
    Settings,
    /// Showing a confirmation dialog
    Confirming,
}
