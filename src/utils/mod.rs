mod theme_state;
mod ui_state;
pub mod dom;
pub mod links;

pub use theme_state::{ Theme, DARK_MARKER };
pub use ui_state::UiState;
