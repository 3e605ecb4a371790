pub mod action;
pub mod app;
pub mod components;
pub mod events;
pub mod scheduler;
pub mod terminal_guard;
pub mod view;

pub use action::Action;
pub use app::App;
pub use events::{AppEvent, InputMode};
pub use view::ScoreboardView;
