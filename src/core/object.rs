//! Platzierte Szenen-Objekte (Masten).

use glam::{Quat, Vec2, Vec3};

use super::mesh_library::{MeshAsset, Socket};

/// Ein in der Szene platziertes Objekt mit Mesh-Referenz.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    /// Eindeutige Objekt-ID
    pub id: u64,
    /// Anzeigename im UI
    pub name: String,
    /// ID des Mesh-Assets im Katalog
    pub mesh_id: String,
    /// Weltposition (Z = oben)
    pub position: Vec3,
    /// Rotation um die Z-Achse in Radiant
    pub yaw: f32,
}

impl SceneObject {
    /// Erstellt ein neues Objekt ohne Rotation.
    pub fn new(id: u64, name: &str, mesh_id: &str, position: Vec3) -> Self {
        Self {
            id,
            name: name.to_string(),
            mesh_id: mesh_id.to_string(),
            position,
            yaw: 0.0,
        }
    }

    /// Projektion der Objektposition auf die Bodenebene (XY).
    pub fn ground_position(&self) -> Vec2 {
        Vec2::new(self.position.x, self.position.y)
    }

    /// Weltposition eines Sockets: Objektposition plus rotierter Offset.
    pub fn socket_world_position(&self, socket: &Socket) -> Vec3 {
        self.position + Quat::from_rotation_z(self.yaw) * socket.offset
    }

    /// Weltpositionen aller Sockets des übergebenen Assets, in Katalog-Reihenfolge.
    pub fn socket_world_positions(&self, asset: &MeshAsset) -> Vec<Vec3> {
        asset
            .sockets
            .iter()
            .map(|socket| self.socket_world_position(socket))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mesh_library::{MeshKind, MeshLibrary};
    use approx::assert_relative_eq;

    #[test]
    fn socket_position_without_rotation_is_offset_sum() {
        let object = SceneObject::new(1, "Mast 1", "mast_holz", Vec3::new(10.0, 20.0, 0.0));
        let socket = Socket::new("traverse_links", Vec3::new(-1.2, 0.0, 9.0));

        let world = object.socket_world_position(&socket);
        assert_relative_eq!(world.x, 8.8);
        assert_relative_eq!(world.y, 20.0);
        assert_relative_eq!(world.z, 9.0);
    }

    #[test]
    fn yaw_rotates_socket_offset_around_z() {
        let mut object = SceneObject::new(1, "Mast 1", "mast_holz", Vec3::ZERO);
        object.yaw = std::f32::consts::FRAC_PI_2;
        let socket = Socket::new("s", Vec3::new(2.0, 0.0, 5.0));

        // 90° um Z: +X wird zu +Y, Z bleibt unverändert
        let world = object.socket_world_position(&socket);
        assert_relative_eq!(world.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(world.y, 2.0, epsilon = 1e-5);
        assert_relative_eq!(world.z, 5.0);
    }

    #[test]
    fn socket_world_positions_keep_catalog_order() {
        let library = MeshLibrary::builtin();
        let asset = library.get("mast_beton").expect("Asset erwartet");
        assert_eq!(asset.kind, MeshKind::Support);

        let object = SceneObject::new(7, "Mast 7", "mast_beton", Vec3::new(5.0, 0.0, 0.0));
        let positions = object.socket_world_positions(asset);

        assert_eq!(positions.len(), 3);
        assert_relative_eq!(positions[0].x, 3.5);
        assert_relative_eq!(positions[1].x, 5.0);
        assert_relative_eq!(positions[2].x, 6.5);
    }
}
