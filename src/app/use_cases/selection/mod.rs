//! Use-Cases für Selektion und Verschieben.

pub mod move_objects;
pub mod pick;
pub mod rect;

pub use move_objects::{begin_move, move_selected};
pub use pick::select_nearest;
pub use rect::{clear, select_all, select_in_rect};
