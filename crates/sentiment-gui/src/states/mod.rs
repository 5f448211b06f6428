mod ui;

pub use ui::{InputTab, UiState};
