mod controller;
mod hotkey;
mod input;
mod runtime;
mod state;

pub use controller::{FilterController, FilterState};
pub use hotkey::Hotkey;
pub use runtime::run;
pub use state::{AppState, InputMode};
