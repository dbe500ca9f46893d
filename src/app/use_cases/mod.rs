//! Use-Cases: fachliche Operationen auf dem AppState.

pub mod camera;
pub mod editing;
pub mod powerline;
pub mod selection;
