//! Use-Case: Powerline-Planung zwischen zwei Objekten.
//!
//! Die Planung ist seiteneffektfrei: Positionen und Einstellungen gehen rein,
//! eine Beschreibung der zu erzeugenden Geometrie kommt raus. Schlägt ein
//! Schritt fehl, bleibt die Szene unberührt — der Aufrufer entscheidet, ob
//! und wie der Plan eingefügt wird.

use anyhow::bail;
use glam::Vec3;

use crate::core::{
    CableSegment, CableSpan, MeshKind, MeshLibrary, PowerlineSettings, Scene, SceneObject,
    SplinePoint,
};
use crate::shared::cable_geometry;

/// Ergebnis einer erfolgreichen Powerline-Planung.
#[derive(Debug, Clone, PartialEq)]
pub struct CablePlan {
    /// Ursprung der Baugruppe (Position des ersten Objekts)
    pub origin: Vec3,
    /// ID des ersten Quellobjekts
    pub source_a: u64,
    /// ID des zweiten Quellobjekts
    pub source_b: u64,
    /// Verwendete Einstellungen
    pub settings: PowerlineSettings,
    /// Geplante Spans, einer pro Ankerpaar
    pub spans: Vec<CableSpan>,
}

/// Plant eine Powerline zwischen zwei Objekten.
///
/// Fehlerfälle (kein Plan, Szene unberührt):
/// - eines der Objekte existiert nicht
/// - das Kabel-Mesh ist unbekannt oder kein Kabel-Asset
/// - die Segmentanzahl ist 0
/// - Socket-Modus: ein Objekt hat keine Sockets oder die Anzahlen passen nicht
pub fn plan_powerline(
    scene: &Scene,
    meshes: &MeshLibrary,
    object_a: u64,
    object_b: u64,
    settings: &PowerlineSettings,
) -> anyhow::Result<CablePlan> {
    let Some(a) = scene.objects.get(&object_a) else {
        bail!("Objekt {} existiert nicht", object_a);
    };
    let Some(b) = scene.objects.get(&object_b) else {
        bail!("Objekt {} existiert nicht", object_b);
    };

    if settings.segment_count == 0 {
        bail!("Segmentanzahl muss mindestens 1 sein");
    }

    match meshes.get(&settings.cable_mesh_id) {
        None => bail!("Kabel-Mesh '{}' ist nicht im Katalog", settings.cable_mesh_id),
        Some(asset) if asset.kind != MeshKind::Cable => {
            bail!("Mesh '{}' ist kein Kabel-Asset", settings.cable_mesh_id)
        }
        Some(_) => {}
    }

    let pairs = anchor_pairs(meshes, a, b, settings.attach_to_sockets)?;

    let spans = pairs
        .into_iter()
        .map(|(start, end)| build_span(start, end, settings))
        .collect();

    Ok(CablePlan {
        origin: a.position,
        source_a: object_a,
        source_b: object_b,
        settings: settings.clone(),
        spans,
    })
}

/// Ermittelt die Ankerpaare in Weltkoordinaten.
///
/// Ohne Socket-Modus gibt es genau ein Paar aus den Objektpositionen.
/// Mit Socket-Modus werden die Sockets beider Objekte Index-für-Index
/// gepaart; die Socket-Anzahlen müssen exakt übereinstimmen.
fn anchor_pairs(
    meshes: &MeshLibrary,
    a: &SceneObject,
    b: &SceneObject,
    attach_to_sockets: bool,
) -> anyhow::Result<Vec<(Vec3, Vec3)>> {
    if !attach_to_sockets {
        return Ok(vec![(a.position, b.position)]);
    }

    let sockets_a = socket_positions(meshes, a)?;
    let sockets_b = socket_positions(meshes, b)?;

    if sockets_a.len() != sockets_b.len() {
        bail!(
            "Socket-Anzahlen passen nicht: '{}' hat {}, '{}' hat {}",
            a.name,
            sockets_a.len(),
            b.name,
            sockets_b.len()
        );
    }

    Ok(sockets_a.into_iter().zip(sockets_b).collect())
}

/// Socket-Weltpositionen eines Objekts; Fehler bei fehlendem Mesh oder ohne Sockets.
fn socket_positions(meshes: &MeshLibrary, object: &SceneObject) -> anyhow::Result<Vec<Vec3>> {
    let Some(asset) = meshes.get(&object.mesh_id) else {
        bail!("Mesh '{}' von '{}' ist nicht im Katalog", object.mesh_id, object.name);
    };

    if asset.sockets.is_empty() {
        bail!("'{}' hat keine Sockets für den Socket-Modus", object.name);
    }

    Ok(object.socket_world_positions(asset))
}

/// Baut einen Span: Punkte interpolieren, Durchhang anwenden, Tangenten ableiten.
fn build_span(start: Vec3, end: Vec3, settings: &PowerlineSettings) -> CableSpan {
    let mut positions = cable_geometry::span_points(start, end, settings.segment_count);
    cable_geometry::apply_sag(&mut positions, settings.sag);
    let tangents = cable_geometry::span_tangents(&positions);

    let points: Vec<SplinePoint> = positions
        .iter()
        .zip(&tangents)
        .map(|(position, tangent)| SplinePoint {
            position: *position,
            tangent: *tangent,
        })
        .collect();

    let segments = positions
        .windows(2)
        .map(|pair| CableSegment {
            start: pair[0],
            end: pair[1],
            mesh_id: settings.cable_mesh_id.clone(),
        })
        .collect();

    CableSpan { points, segments }
}
