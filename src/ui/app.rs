use std::io;

use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use crate::core::{Command, Effect, Scorekeeper};
use crate::game::{GameState, Play};
use crate::ui::action::Action;
use crate::ui::components::{
    marks_list_height, ConfirmationContext, ConfirmationDialog, ConfirmationDialogState,
    GlobalFooter, MarksList, MenuDialog, MenuItem, MenuState, Scoreboard, SettingsDialog,
    SettingsDialogState, TimerControls, TIMER_CONTROLS_HEIGHT,
};
use crate::ui::events::{AppEvent, InputMode};
use crate::ui::scheduler::CooldownTimer;
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::view::ScoreboardView;

/// Main application state
pub struct App {
    /// Owner of the game record
    keeper: Scorekeeper,
    /// Whether the app should quit
    should_quit: bool,
    /// Current input mode
    input_mode: InputMode,
    menu: MenuState,
    settings: SettingsDialogState,
    confirm: ConfirmationDialogState,
    /// Pending redraw for the end of the mark cooldown
    cooldown: CooldownTimer,
    /// Events raised off the input stream, such as the cooldown redraw
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl App {
    pub fn new(keeper: Scorekeeper) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            keeper,
            should_quit: false,
            input_mode: InputMode::Scoreboard,
            menu: MenuState::default(),
            settings: SettingsDialogState::default(),
            confirm: ConfirmationDialogState::new(),
            cooldown: CooldownTimer::new(event_tx),
            event_rx,
        }
    }

    pub fn state(&self) -> &GameState {
        self.keeper.state()
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// What the screen shows at the current instant
    pub fn view(&self) -> ScoreboardView {
        ScoreboardView::new(self.state(), self.keeper.now_ms())
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut guard = TerminalGuard::enter()?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        self.boot();
        let result = self.event_loop(&mut terminal).await;

        guard.cleanup()?;
        terminal.show_cursor()?;
        result
    }

    /// Apply the startup effects of the loaded record.
    pub fn boot(&mut self) {
        let effects = self.keeper.boot();
        self.apply_effects(effects);
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut input = EventStream::new();
        let mut tick = tokio::time::interval(self.keeper.config().tick_interval);
        tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            terminal.draw(|f| self.draw(f))?;

            tokio::select! {
                maybe_event = input.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_app_event(AppEvent::Input(event)),
                        Some(Err(e)) => return Err(e.into()),
                        None => self.should_quit = true,
                    }
                }
                _ = tick.tick() => self.handle_app_event(AppEvent::Tick),
                Some(event) = self.event_rx.recv() => self.handle_app_event(event),
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Every event is followed by a redraw, which recomputes the clocks and
    /// control availability from the current instant.
    pub fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(Event::Key(key)) => self.handle_key_event(key),
            AppEvent::Input(Event::FocusGained) => {
                tracing::debug!("Focus regained, refreshing clocks");
            }
            AppEvent::Input(_) | AppEvent::Tick => {}
            AppEvent::CooldownElapsed => {
                tracing::debug!("Mark cooldown elapsed");
            }
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        if let Some(action) = Action::from_key(self.input_mode, key) {
            self.execute_action(action);
        }
    }

    pub fn execute_action(&mut self, action: Action) {
        match self.input_mode {
            InputMode::Scoreboard => self.scoreboard_action(action),
            InputMode::Menu => self.menu_action(action),
            InputMode::Settings => self.settings_action(action),
            InputMode::Confirming => self.confirm_action(action),
        }
    }

    fn scoreboard_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::RecordRun => self.dispatch(Command::Play(Play::Run)),
            Action::RecordOut => self.dispatch(Command::Play(Play::Out)),
            Action::Undo => self.dispatch(Command::Play(Play::Undo)),
            Action::OpenMenu => {
                self.menu.show(self.view().can_undo);
                self.input_mode = InputMode::Menu;
            }
            Action::OpenSettings => self.open_settings(),
            Action::NewGame => self.ask_new_game(),
            Action::StartGameTimer => self.dispatch(Command::StartGameTimer),
            Action::StartRecording => self.dispatch(Command::StartRecording),
            Action::MarkTimestamp => self.dispatch(Command::MarkTimestamp),
            _ => {}
        }
    }

    fn menu_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::SelectNext => self.menu.select_next(),
            Action::SelectPrev => self.menu.select_prev(),
            Action::Cancel => self.close_menu(),
            Action::Confirm => {
                let item = self.menu.selected_item();
                self.close_menu();
                match item {
                    MenuItem::Settings => self.open_settings(),
                    MenuItem::Undo => self.dispatch(Command::Play(Play::Undo)),
                    MenuItem::NewGame => self.ask_new_game(),
                    MenuItem::Close => {}
                }
            }
            _ => {}
        }
    }

    fn settings_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::NextField => self.settings.focus_next(),
            Action::PrevField => self.settings.focus_prev(),
            Action::Increment => self.settings.adjust(1),
            Action::Decrement => self.settings.adjust(-1),
            Action::Backspace => self.settings.backspace(),
            Action::InsertChar(c) => self.settings.insert_char(c),
            Action::Confirm => {
                let settings = self.settings.to_settings();
                self.settings.hide();
                self.input_mode = InputMode::Scoreboard;
                self.dispatch(Command::Configure(settings));
            }
            Action::Cancel => {
                self.settings.hide();
                self.input_mode = InputMode::Scoreboard;
            }
            _ => {}
        }
    }

    fn confirm_action(&mut self, action: Action) {
        let accepted = match action {
            Action::Quit => {
                self.should_quit = true;
                return;
            }
            Action::ConfirmToggle => {
                self.confirm.toggle_selection();
                return;
            }
            Action::ConfirmYes => true,
            Action::ConfirmNo => false,
            Action::Confirm => self.confirm.confirm_selected,
            _ => return,
        };

        let context = self.confirm.hide();
        self.input_mode = InputMode::Scoreboard;
        if accepted && context == Some(ConfirmationContext::NewGame) {
            self.dispatch(Command::NewGame);
        }
    }

    fn close_menu(&mut self) {
        self.menu.hide();
        self.input_mode = InputMode::Scoreboard;
    }

    fn open_settings(&mut self) {
        self.settings.show(self.state().settings());
        self.input_mode = InputMode::Settings;
    }

    fn ask_new_game(&mut self) {
        self.confirm.show_new_game();
        self.input_mode = InputMode::Confirming;
    }

    fn dispatch(&mut self, command: Command) {
        let effects = self.keeper.handle(command);
        self.apply_effects(effects);
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ScheduleCooldownRedraw(delay) => self.cooldown.schedule(delay),
                Effect::CancelCooldownRedraw => self.cooldown.cancel(),
                Effect::OpenSettings => self.open_settings(),
            }
        }
    }

    pub fn draw(&self, f: &mut Frame) {
        let view = self.view();
        let area = f.area();

        let controls_height = if view.controls_shown() {
            TIMER_CONTROLS_HEIGHT
        } else {
            0
        };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(8),
                Constraint::Length(controls_height),
                Constraint::Length(marks_list_height(view.marks.len())),
                Constraint::Length(1),
            ])
            .split(area);

        f.render_widget(Scoreboard::new(&view), chunks[0]);
        f.render_widget(TimerControls::new(&view), chunks[1]);
        f.render_widget(MarksList::new(&view.marks), chunks[2]);
        f.render_widget(GlobalFooter::for_mode(self.input_mode), chunks[3]);

        match self.input_mode {
            InputMode::Scoreboard => {}
            InputMode::Menu => f.render_widget(MenuDialog::new(&self.menu), area),
            InputMode::Settings => f.render_widget(SettingsDialog::new(&self.settings), area),
            InputMode::Confirming => {
                f.render_widget(ConfirmationDialog::new(&self.confirm), area)
            }
        }
    }
}
