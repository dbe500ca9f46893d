//! Zentrale Konfiguration für den Powerline-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kamera ──────────────────────────────────────────────────────────

/// Sichtbare Welt-Halbbreite bei Zoom 1.0 (Einheiten = Meter).
pub const CAMERA_BASE_WORLD_EXTENT: f32 = 256.0;
/// Minimaler Zoom-Faktor.
pub const CAMERA_ZOOM_MIN: f32 = 0.1;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f32 = 50.0;
/// Zoom-Schritt bei stufenweisem Zoom (Menü-Buttons / Shortcuts).
pub const CAMERA_ZOOM_STEP: f32 = 1.2;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f32 = 1.1;

// ── Selektion ───────────────────────────────────────────────────────

/// Pick-Radius in Screen-Pixeln.
pub const SELECTION_PICK_RADIUS_PX: f32 = 12.0;
/// Größenfaktor für selektierte Objekte (Hitbox und Darstellung).
pub const SELECTION_SIZE_FACTOR: f32 = 1.8;

// ── Objekt-Rendering ────────────────────────────────────────────────

/// Darstellungsradius eines Mast-Objekts in Welteinheiten.
pub const OBJECT_RADIUS_WORLD: f32 = 1.5;
/// Darstellungsradius eines Sockets in Welteinheiten.
pub const SOCKET_RADIUS_WORLD: f32 = 0.4;
/// Standard-Farbe platzierter Objekte (RGBA: Cyan).
pub const OBJECT_COLOR_DEFAULT: [f32; 4] = [0.0, 0.8, 1.0, 1.0];
/// Farbe für selektierte Objekte (RGBA: Magenta).
pub const OBJECT_COLOR_SELECTED: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
/// Farbe für Socket-Markierungen (RGBA: Gelb).
pub const SOCKET_COLOR: [f32; 4] = [1.0, 1.0, 0.0, 1.0];

// ── Kabel-Rendering ─────────────────────────────────────────────────

/// Linienstärke der Kabel in Welteinheiten.
pub const CABLE_THICKNESS_WORLD: f32 = 0.3;
/// Farbe generierter Kabel (RGBA: Grün).
pub const CABLE_COLOR_DEFAULT: [f32; 4] = [0.2, 0.9, 0.2, 1.0];
/// Farbe selektierter Kabel (RGBA: Magenta).
pub const CABLE_COLOR_SELECTED: [f32; 4] = [1.0, 0.0, 1.0, 1.0];

// ── Powerline-Defaults ──────────────────────────────────────────────

/// Standard-Segmentanzahl pro Span.
pub const POWERLINE_SEGMENT_COUNT: u32 = 10;
/// Standard-Durchhang in Welteinheiten.
pub const POWERLINE_SAG: f32 = 2.0;
/// Maximale Segmentanzahl im Slider.
pub const POWERLINE_SEGMENT_COUNT_MAX: u32 = 64;
/// Maximaler Durchhang im Slider.
pub const POWERLINE_SAG_MAX: f32 = 50.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `powerline_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Objekte ─────────────────────────────────────────────────
    /// Darstellungsradius eines Objekts in Welteinheiten
    pub object_radius_world: f32,
    /// Darstellungsradius eines Sockets in Welteinheiten
    pub socket_radius_world: f32,
    /// Standard-Farbe platzierter Objekte (RGBA)
    pub object_color_default: [f32; 4],
    /// Farbe für selektierte Objekte
    pub object_color_selected: [f32; 4],
    /// Farbe für Socket-Markierungen
    pub socket_color: [f32; 4],

    // ── Selektion ───────────────────────────────────────────────
    /// Vergrößerungsfaktor für selektierte Objekte (Hitbox und Darstellung)
    pub selection_size_factor: f32,
    /// Pick-Radius für Klick-Selektion in Screen-Pixeln
    pub selection_pick_radius_px: f32,

    // ── Kabel ───────────────────────────────────────────────────
    /// Linienstärke der Kabel in Welteinheiten
    pub cable_thickness_world: f32,
    /// Farbe generierter Kabel
    pub cable_color_default: [f32; 4],
    /// Farbe selektierter Kabel
    pub cable_color_selected: [f32; 4],

    // ── Kamera ──────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_min: f32,
    /// Maximaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_max: f32,
    /// Zoom-Schritt bei Menü-Buttons / Shortcuts
    pub camera_zoom_step: f32,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f32,

    // ── Powerline ───────────────────────────────────────────────
    /// Standard-Segmentanzahl für neue Powerlines
    #[serde(default = "default_powerline_segment_count")]
    pub powerline_segment_count: u32,
    /// Standard-Durchhang für neue Powerlines
    #[serde(default = "default_powerline_sag")]
    pub powerline_sag: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            object_radius_world: OBJECT_RADIUS_WORLD,
            socket_radius_world: SOCKET_RADIUS_WORLD,
            object_color_default: OBJECT_COLOR_DEFAULT,
            object_color_selected: OBJECT_COLOR_SELECTED,
            socket_color: SOCKET_COLOR,

            selection_size_factor: SELECTION_SIZE_FACTOR,
            selection_pick_radius_px: SELECTION_PICK_RADIUS_PX,

            cable_thickness_world: CABLE_THICKNESS_WORLD,
            cable_color_default: CABLE_COLOR_DEFAULT,
            cable_color_selected: CABLE_COLOR_SELECTED,

            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,

            powerline_segment_count: POWERLINE_SEGMENT_COUNT,
            powerline_sag: POWERLINE_SAG,
        }
    }
}

/// Serde-Default für `powerline_segment_count` (Abwärtskompatibilität).
fn default_powerline_segment_count() -> u32 {
    POWERLINE_SEGMENT_COUNT
}

/// Serde-Default für `powerline_sag` (Abwärtskompatibilität).
fn default_powerline_sag() -> f32 {
    POWERLINE_SAG
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("powerline_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("powerline_editor.toml")
    }
}
