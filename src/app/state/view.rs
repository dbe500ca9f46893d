//! View-Zustand: Kamera und Viewport-Größe.

use crate::core::Camera2D;

/// Kamera- und Viewport-Zustand.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Aktuelle 2D-Kamera
    pub camera: Camera2D,
    /// Letzte bekannte Viewport-Größe in Pixeln
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den View-Zustand mit Standard-Kamera.
    pub fn new() -> Self {
        Self {
            camera: Camera2D::new(),
            viewport_size: [1280.0, 720.0],
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
