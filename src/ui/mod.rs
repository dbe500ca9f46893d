//! UI-Komponenten: Menü, Toolbar, Powerline-Panel, Viewport, Status-Bar.
//!
//! Alle Komponenten erzeugen `AppIntent`s statt direkt zu mutieren.
//! Keyboard-Shortcuts sind in eine eigene Datei extrahiert.

mod keyboard;
pub mod menu;
pub mod powerline_panel;
pub mod status;
pub mod toolbar;
pub mod viewport;

pub use menu::render_menu;
pub use powerline_panel::render_powerline_panel;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
pub use viewport::{draw_scene, InputState};
