//! Spatial-Index (KD-Tree) für schnelle Objekt-Abfragen.

use std::collections::HashMap;

use glam::Vec2;
use kiddo::{KdTree, SquaredEuclidean};

use crate::core::SceneObject;

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectHit {
    /// ID des gefundenen Objekts
    pub object_id: u64,
    /// Euklidische Distanz zum Suchpunkt (auf der Bodenebene)
    pub distance: f32,
}

/// Read-only Spatial-Index über den Bodenpositionen aller Szenen-Objekte.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 2>,
    object_ids: Vec<u64>,
    positions: HashMap<u64, Vec2>,
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            object_ids: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Baut einen neuen Index aus den übergebenen Objekten.
    pub fn from_objects(objects: &HashMap<u64, SceneObject>) -> Self {
        let mut object_ids: Vec<u64> = objects.keys().copied().collect();
        object_ids.sort_unstable();

        let entries: Vec<[f64; 2]> = object_ids
            .iter()
            .filter_map(|id| {
                objects
                    .get(id)
                    .map(|object| [object.position.x as f64, object.position.y as f64])
            })
            .collect();

        let tree: KdTree<f64, 2> = (&entries).into();

        let positions = objects
            .iter()
            .map(|(id, object)| (*id, object.ground_position()))
            .collect();

        Self {
            tree,
            object_ids,
            positions,
        }
    }

    /// Gibt die Anzahl indexierter Objekte zurück.
    pub fn len(&self) -> usize {
        self.object_ids.len()
    }

    /// Gibt `true` zurück, wenn keine Objekte im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.object_ids.is_empty()
    }

    /// Findet das nächste Objekt zur gegebenen Weltposition.
    pub fn nearest(&self, query: Vec2) -> Option<ObjectHit> {
        if self.is_empty() {
            return None;
        }

        let result = self
            .tree
            .nearest_one::<SquaredEuclidean>(&[query.x as f64, query.y as f64]);
        let object_id = *self.object_ids.get(result.item as usize)?;

        Some(ObjectHit {
            object_id,
            distance: (result.distance as f32).sqrt(),
        })
    }

    /// Findet alle Objekte innerhalb eines axis-aligned Rechtecks.
    ///
    /// Nutzt den KD-Tree mit einer umschließenden Kreisabfrage + Nachfilterung,
    /// statt O(n) über alle Positionen zu iterieren.
    pub fn within_rect(&self, min: Vec2, max: Vec2) -> Vec<u64> {
        if self.is_empty() {
            return Vec::new();
        }

        let center_x = (min.x + max.x) as f64 * 0.5;
        let center_y = (min.y + max.y) as f64 * 0.5;
        let half_w = (max.x - min.x) as f64 * 0.5;
        let half_h = (max.y - min.y) as f64 * 0.5;
        // Radius des umschließenden Kreises (Diagonale / 2)
        let radius_sq = half_w * half_w + half_h * half_h;

        self.tree
            .within::<SquaredEuclidean>(&[center_x, center_y], radius_sq)
            .into_iter()
            .filter_map(|entry| {
                let object_id = *self.object_ids.get(entry.item as usize)?;
                let pos = self.positions.get(&object_id)?;
                // Exakte Rechteck-Prüfung nach dem KD-Tree-Vorfilter
                if pos.x >= min.x && pos.x <= max.x && pos.y >= min.y && pos.y <= max.y {
                    Some(object_id)
                } else {
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn sample_objects() -> HashMap<u64, SceneObject> {
        let mut objects = HashMap::new();
        objects.insert(
            1,
            SceneObject::new(1, "Mast 1", "mast_holz", Vec3::new(0.0, 0.0, 0.0)),
        );
        objects.insert(
            2,
            SceneObject::new(2, "Mast 2", "mast_holz", Vec3::new(10.0, 0.0, 0.0)),
        );
        objects.insert(
            3,
            SceneObject::new(3, "Mast 3", "mast_stahl", Vec3::new(4.0, 3.0, 0.0)),
        );
        objects
    }

    #[test]
    fn nearest_returns_expected_object() {
        let index = SpatialIndex::from_objects(&sample_objects());
        let nearest = index
            .nearest(Vec2::new(3.9, 2.9))
            .expect("Treffer erwartet");

        assert_eq!(nearest.object_id, 3);
        assert!(nearest.distance < 0.2);
    }

    #[test]
    fn nearest_ignores_height() {
        let mut objects = sample_objects();
        objects.get_mut(&2).expect("Objekt erwartet").position.z = 30.0;

        let index = SpatialIndex::from_objects(&objects);
        let nearest = index
            .nearest(Vec2::new(10.0, 0.1))
            .expect("Treffer erwartet");

        assert_eq!(nearest.object_id, 2);
        assert!(nearest.distance < 0.2);
    }

    #[test]
    fn rect_query_returns_objects_inside_bounds() {
        let index = SpatialIndex::from_objects(&sample_objects());
        let mut ids = index.within_rect(Vec2::new(-1.0, -1.0), Vec2::new(5.0, 3.5));
        ids.sort_unstable();

        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn empty_index_has_no_entries() {
        let index = SpatialIndex::empty();

        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.nearest(Vec2::new(0.0, 0.0)).is_none());
    }
}
