//! Powerline-Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditorTool, EditorToolState, SelectionState,
    UiState, ViewState,
};
pub use core::{
    CableAssembly, CableSegment, CableSpan, Camera2D, MeshAsset, MeshKind, MeshLibrary, ObjectHit,
    PowerlineSettings, Scene, SceneObject, Socket, SpatialIndex, SplinePoint,
};
pub use shared::EditorOptions;
