//! 2D-Kamera für Pan und Zoom im Top-Down-Viewport.

use glam::Vec2;

use crate::shared::options;

/// 2D-Kamera mit Pan und Zoom
#[derive(Debug, Clone)]
pub struct Camera2D {
    /// Position der Kamera in Welt-Koordinaten
    pub position: Vec2,
    /// Zoom-Level (1.0 = normal, 2.0 = doppelt so groß)
    pub zoom: f32,
}

impl Camera2D {
    /// Sichtbare Welt-Halbbreite bei Zoom 1.0.
    pub const BASE_WORLD_EXTENT: f32 = options::CAMERA_BASE_WORLD_EXTENT;
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f32 = options::CAMERA_ZOOM_MIN;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f32 = options::CAMERA_ZOOM_MAX;

    /// Erstellt eine neue Kamera
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Zentriert die Kamera auf einen Punkt
    pub fn look_at(&mut self, target: Vec2) {
        self.position = target;
    }

    /// Verschiebt die Kamera (Pan)
    pub fn pan(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Ändert den Zoom-Level
    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Konvertiert Screen-Koordinaten zu Welt-Koordinaten.
    /// Berücksichtigt BASE_WORLD_EXTENT, Zoom und Aspekt-Ratio.
    pub fn screen_to_world(&self, screen_pos: Vec2, screen_size: Vec2) -> Vec2 {
        // Screen-Koordinaten zentrieren (-1 bis 1)
        let ndc = (screen_pos / screen_size) * 2.0 - Vec2::ONE;
        let aspect = screen_size.x / screen_size.y;
        Vec2::new(
            ndc.x * Self::BASE_WORLD_EXTENT * aspect / self.zoom,
            ndc.y * Self::BASE_WORLD_EXTENT / self.zoom,
        ) + self.position
    }

    /// Konvertiert Welt-Koordinaten zu Screen-Koordinaten (Inverse von `screen_to_world`).
    pub fn world_to_screen(&self, world_pos: Vec2, screen_size: Vec2) -> Vec2 {
        let aspect = screen_size.x / screen_size.y;
        let relative = world_pos - self.position;
        let ndc = Vec2::new(
            relative.x * self.zoom / (Self::BASE_WORLD_EXTENT * aspect),
            relative.y * self.zoom / Self::BASE_WORLD_EXTENT,
        );
        (ndc + Vec2::ONE) * 0.5 * screen_size
    }

    /// Berechnet den Umrechnungsfaktor von Screen-Pixeln zu Welt-Einheiten.
    pub fn world_per_pixel(&self, viewport_height: f32) -> f32 {
        2.0 * Self::BASE_WORLD_EXTENT / (self.zoom * viewport_height)
    }

    /// Berechnet den Pick-Radius in Welt-Einheiten für die Objekt-Selektion.
    ///
    /// Konvertiert den Pixel-Radius in Welt-Koordinaten
    /// basierend auf aktuellem Zoom und Viewport-Höhe.
    pub fn pick_radius_world(&self, viewport_height: f32, pick_radius_px: f32) -> f32 {
        let vh = viewport_height.max(1.0);
        (pick_radius_px * 2.0 * Self::BASE_WORLD_EXTENT) / (self.zoom * vh)
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}
