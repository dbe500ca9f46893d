//! Szenen-Modell: platzierte Objekte und generierte Kabel-Baugruppen.

use std::collections::{HashMap, HashSet};

use glam::{Vec2, Vec3};

use crate::shared::cable_geometry;

use super::cable::{CableAssembly, CableSpan, PowerlineSettings};
use super::object::SceneObject;
use super::spatial::{ObjectHit, SpatialIndex};

/// Vollständige Editor-Szene.
///
/// Der Spatial-Index wird bei jeder Objekt-Mutation neu aufgebaut und ist
/// damit immer konsistent zu `objects`.
#[derive(Debug, Clone)]
pub struct Scene {
    /// Alle platzierten Objekte nach ID
    pub objects: HashMap<u64, SceneObject>,
    /// Alle generierten Baugruppen nach ID
    pub assemblies: HashMap<u64, CableAssembly>,
    next_object_id: u64,
    next_assembly_id: u64,
    spatial_index: SpatialIndex,
}

impl Scene {
    /// Erstellt eine leere Szene.
    pub fn new() -> Self {
        Self {
            objects: HashMap::new(),
            assemblies: HashMap::new(),
            next_object_id: 1,
            next_assembly_id: 1,
            spatial_index: SpatialIndex::empty(),
        }
    }

    /// Gibt die Anzahl der Objekte zurück.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Gibt die Anzahl der Baugruppen zurück.
    pub fn assembly_count(&self) -> usize {
        self.assemblies.len()
    }

    /// Platziert ein neues Objekt und gibt seine ID zurück.
    pub fn spawn_object(&mut self, mesh_id: &str, position: Vec3) -> u64 {
        let id = self.next_object_id;
        self.next_object_id += 1;

        let name = format!("Mast {}", id);
        self.objects
            .insert(id, SceneObject::new(id, &name, mesh_id, position));
        self.rebuild_spatial_index();
        id
    }

    /// Entfernt Objekte samt aller Baugruppen, die sie referenzieren.
    ///
    /// Gibt `(gelöschte Objekte, kaskadiert gelöschte Baugruppen)` zurück.
    pub fn remove_objects(&mut self, ids: &HashSet<u64>) -> (usize, usize) {
        let removed_objects = ids
            .iter()
            .filter(|id| self.objects.remove(id).is_some())
            .count();

        let orphaned: Vec<u64> = self
            .assemblies
            .values()
            .filter(|assembly| ids.iter().any(|id| assembly.references_object(*id)))
            .map(|assembly| assembly.id)
            .collect();
        for assembly_id in &orphaned {
            self.assemblies.remove(assembly_id);
        }

        if removed_objects > 0 {
            self.rebuild_spatial_index();
        }
        (removed_objects, orphaned.len())
    }

    /// Entfernt Baugruppen anhand ihrer IDs.
    pub fn remove_assemblies(&mut self, ids: &HashSet<u64>) -> usize {
        ids.iter()
            .filter(|id| self.assemblies.remove(id).is_some())
            .count()
    }

    /// Verschiebt Objekte auf der Bodenebene. Baugruppen bleiben unverändert,
    /// Regenerieren ist ein expliziter Schritt.
    pub fn translate_objects(&mut self, ids: &HashSet<u64>, delta: Vec2) {
        let mut moved = false;
        for id in ids {
            if let Some(object) = self.objects.get_mut(id) {
                object.position.x += delta.x;
                object.position.y += delta.y;
                moved = true;
            }
        }
        if moved {
            self.rebuild_spatial_index();
        }
    }

    /// Fügt eine neue Baugruppe ein und gibt ihre ID zurück.
    pub fn add_assembly(
        &mut self,
        origin: Vec3,
        source_a: u64,
        source_b: u64,
        settings: PowerlineSettings,
        spans: Vec<CableSpan>,
    ) -> u64 {
        let id = self.next_assembly_id;
        self.next_assembly_id += 1;

        self.assemblies.insert(
            id,
            CableAssembly {
                id,
                origin,
                source_a,
                source_b,
                settings,
                spans,
            },
        );
        id
    }

    /// Findet das nächste Objekt zur Weltposition (Bodenebene).
    pub fn nearest_object(&self, query: Vec2) -> Option<ObjectHit> {
        self.spatial_index.nearest(query)
    }

    /// Findet alle Objekte innerhalb eines Rechtecks (Bodenebene).
    pub fn objects_in_rect(&self, min: Vec2, max: Vec2) -> Vec<u64> {
        self.spatial_index.within_rect(min, max)
    }

    /// Findet die nächste Baugruppe zur Weltposition über ihre Span-Polygonzüge.
    ///
    /// Lineare Suche über alle Spans; die Baugruppen-Anzahl bleibt klein.
    pub fn nearest_assembly(&self, query: Vec2) -> Option<(u64, f32)> {
        let mut best: Option<(u64, f32)> = None;

        for assembly in self.assemblies.values() {
            for span in &assembly.spans {
                let positions: Vec<Vec3> = span.points.iter().map(|p| p.position).collect();
                let distance = cable_geometry::distance_to_polyline_xy(query, &positions);
                if best.map_or(true, |(_, d)| distance < d) {
                    best = Some((assembly.id, distance));
                }
            }
        }

        best
    }

    fn rebuild_spatial_index(&mut self) {
        self.spatial_index = SpatialIndex::from_objects(&self.objects);
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cable::SplinePoint;

    fn scene_with_two_masts() -> (Scene, u64, u64) {
        let mut scene = Scene::new();
        let a = scene.spawn_object("mast_holz", Vec3::new(0.0, 0.0, 0.0));
        let b = scene.spawn_object("mast_holz", Vec3::new(40.0, 0.0, 0.0));
        (scene, a, b)
    }

    fn dummy_span(points: &[Vec3]) -> CableSpan {
        CableSpan {
            points: points
                .iter()
                .map(|p| SplinePoint {
                    position: *p,
                    tangent: Vec3::ZERO,
                })
                .collect(),
            segments: Vec::new(),
        }
    }

    #[test]
    fn spawn_allocates_increasing_ids() {
        let (scene, a, b) = scene_with_two_masts();
        assert_eq!(a, 1);
        assert_eq!(b, 2);
        assert_eq!(scene.object_count(), 2);
    }

    #[test]
    fn nearest_object_uses_spatial_index() {
        let (scene, _, b) = scene_with_two_masts();
        let hit = scene
            .nearest_object(Vec2::new(39.0, 1.0))
            .expect("Treffer erwartet");
        assert_eq!(hit.object_id, b);
    }

    #[test]
    fn removing_object_cascades_to_assemblies() {
        let (mut scene, a, b) = scene_with_two_masts();
        let c = scene.spawn_object("mast_holz", Vec3::new(80.0, 0.0, 0.0));

        scene.add_assembly(
            Vec3::ZERO,
            a,
            b,
            PowerlineSettings::default(),
            vec![dummy_span(&[Vec3::ZERO, Vec3::new(40.0, 0.0, 0.0)])],
        );
        scene.add_assembly(
            Vec3::new(40.0, 0.0, 0.0),
            b,
            c,
            PowerlineSettings::default(),
            vec![dummy_span(&[
                Vec3::new(40.0, 0.0, 0.0),
                Vec3::new(80.0, 0.0, 0.0),
            ])],
        );

        let mut to_remove = HashSet::new();
        to_remove.insert(a);
        let (objects_removed, assemblies_removed) = scene.remove_objects(&to_remove);

        assert_eq!(objects_removed, 1);
        assert_eq!(assemblies_removed, 1);
        assert_eq!(scene.assembly_count(), 1);
        // Die verbliebene Baugruppe referenziert a nicht
        assert!(scene
            .assemblies
            .values()
            .all(|assembly| !assembly.references_object(a)));
    }

    #[test]
    fn translate_rebuilds_spatial_index() {
        let (mut scene, a, _) = scene_with_two_masts();

        let mut ids = HashSet::new();
        ids.insert(a);
        scene.translate_objects(&ids, Vec2::new(100.0, 100.0));

        let hit = scene
            .nearest_object(Vec2::new(99.0, 99.0))
            .expect("Treffer erwartet");
        assert_eq!(hit.object_id, a);
        assert!(hit.distance < 2.0);
    }

    #[test]
    fn nearest_assembly_matches_span_polyline() {
        let (mut scene, a, b) = scene_with_two_masts();
        let assembly_id = scene.add_assembly(
            Vec3::ZERO,
            a,
            b,
            PowerlineSettings::default(),
            vec![dummy_span(&[
                Vec3::new(0.0, 0.0, 9.0),
                Vec3::new(40.0, 0.0, 9.0),
            ])],
        );

        let (found, distance) = scene
            .nearest_assembly(Vec2::new(20.0, 2.0))
            .expect("Treffer erwartet");
        assert_eq!(found, assembly_id);
        assert!((distance - 2.0).abs() < 1e-4);
    }
}
