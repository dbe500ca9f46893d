//! App-State-Module: Haupt-State und Teilzustände.

mod app_state;
mod editor;
mod selection;
mod ui;
mod view;

pub use app_state::AppState;
pub use editor::{EditorTool, EditorToolState};
pub use selection::SelectionState;
pub use ui::UiState;
pub use view::ViewState;
