//! Feature-Handler: dünne Schicht zwischen Controller und Use-Cases.

pub mod editing;
pub mod history;
pub mod powerline;
pub mod selection;
pub mod view;
