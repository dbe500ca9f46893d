//! Geteilte Bausteine: Optionen und reine Kabel-Geometrie.

pub mod cable_geometry;
pub mod options;

pub use options::EditorOptions;
