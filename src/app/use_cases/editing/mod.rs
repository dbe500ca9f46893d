//! Use-Cases für Platzieren und Löschen von Objekten.

pub mod delete_objects;
pub mod place_object;

pub use delete_objects::delete_selected;
pub use place_object::place_object_at_position;
