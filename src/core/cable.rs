//! Generierte Kabel-Baugruppen: Spans, Segmente und Einstellungen.

use glam::Vec3;

use crate::shared::{cable_geometry, options};

/// Steuerpunkt eines Spans mit Tangente.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplinePoint {
    /// Weltposition des Steuerpunkts
    pub position: Vec3,
    /// Tangente (zentrale Differenz der Nachbarn)
    pub tangent: Vec3,
}

/// Platzierung eines Kabel-Meshes zwischen zwei Steuerpunkten.
#[derive(Debug, Clone, PartialEq)]
pub struct CableSegment {
    /// Start des Segments (Weltkoordinaten)
    pub start: Vec3,
    /// Ende des Segments (Weltkoordinaten)
    pub end: Vec3,
    /// ID des Kabel-Mesh-Assets
    pub mesh_id: String,
}

/// Ein durchgehender Kabelbogen zwischen zwei Ankerpunkten.
#[derive(Debug, Clone, PartialEq)]
pub struct CableSpan {
    /// Steuerpunkte inklusive Endpunkte, mit Durchhang
    pub points: Vec<SplinePoint>,
    /// Ein Segment pro aufeinanderfolgendem Punktpaar
    pub segments: Vec<CableSegment>,
}

impl CableSpan {
    /// Gesamtlänge des Spans entlang der Steuerpunkte.
    pub fn length(&self) -> f32 {
        let positions: Vec<Vec3> = self.points.iter().map(|p| p.position).collect();
        cable_geometry::polyline_length(&positions)
    }
}

/// Einstellungen für die Powerline-Generierung.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerlineSettings {
    /// Anzahl der Segmente pro Span (mindestens 1)
    pub segment_count: u32,
    /// Durchhang in Welteinheiten (0 = straff gespannt)
    pub sag: f32,
    /// Spans zwischen Socket-Paaren statt Objektpositionen spannen
    pub attach_to_sockets: bool,
    /// ID des Kabel-Mesh-Assets für alle Segmente
    pub cable_mesh_id: String,
}

impl Default for PowerlineSettings {
    fn default() -> Self {
        Self {
            segment_count: options::POWERLINE_SEGMENT_COUNT,
            sag: options::POWERLINE_SAG,
            attach_to_sockets: false,
            cable_mesh_id: "kabel_standard".to_string(),
        }
    }
}

/// Eine generierte Kabel-Baugruppe zwischen zwei Quellobjekten.
#[derive(Debug, Clone, PartialEq)]
pub struct CableAssembly {
    /// Eindeutige Baugruppen-ID
    pub id: u64,
    /// Ursprung der Baugruppe (Position des ersten Quellobjekts)
    pub origin: Vec3,
    /// ID des ersten Quellobjekts
    pub source_a: u64,
    /// ID des zweiten Quellobjekts
    pub source_b: u64,
    /// Einstellungen, mit denen die Baugruppe generiert wurde
    pub settings: PowerlineSettings,
    /// Alle Spans der Baugruppe (einer pro Ankerpaar)
    pub spans: Vec<CableSpan>,
}

impl CableAssembly {
    /// Gibt `true` zurück, wenn die Baugruppe eines der Objekte referenziert.
    pub fn references_object(&self, object_id: u64) -> bool {
        self.source_a == object_id || self.source_b == object_id
    }

    /// Summierte Länge aller Spans.
    pub fn total_length(&self) -> f32 {
        self.spans.iter().map(CableSpan::length).sum()
    }

    /// Anzahl aller Segmente über alle Spans.
    pub fn segment_count(&self) -> usize {
        self.spans.iter().map(|span| span.segments.len()).sum()
    }
}
