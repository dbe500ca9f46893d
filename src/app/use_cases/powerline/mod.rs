//! Use-Cases rund um Powerline-Planung und -Generierung.

pub mod generate;
pub mod plan;
pub mod regenerate;

pub use generate::generate_for_selection;
pub use plan::{plan_powerline, CablePlan};
pub use regenerate::regenerate_selected;
