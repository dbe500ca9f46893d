//! In-Memory-Katalog der platzierbaren Mesh-Assets.
//!
//! Assets sind reine Beschreibungen (Name, Art, Socket-Offsets) — kein
//! 3D-Loader. Masten tragen benannte Sockets als lokale Offsets relativ
//! zur Objektposition, Kabel-Assets haben keine Sockets.

use std::collections::BTreeMap;

use glam::Vec3;

/// Art eines Mesh-Assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshKind {
    /// Trägerobjekt (Mast), platzierbar im Viewport
    Support,
    /// Kabelstück, referenziert von generierten Segmenten
    Cable,
}

/// Benannter Befestigungspunkt eines Mesh-Assets (lokaler Offset).
#[derive(Debug, Clone, PartialEq)]
pub struct Socket {
    /// Anzeigename des Sockets
    pub name: String,
    /// Offset relativ zur Objektposition (vor Yaw-Rotation)
    pub offset: Vec3,
}

impl Socket {
    /// Erstellt einen Socket mit Name und lokalem Offset.
    pub fn new(name: &str, offset: Vec3) -> Self {
        Self {
            name: name.to_string(),
            offset,
        }
    }
}

/// Beschreibung eines platzierbaren Assets.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshAsset {
    /// Eindeutige Asset-ID (Katalog-Schlüssel)
    pub id: String,
    /// Anzeigename im UI
    pub display_name: String,
    /// Art des Assets
    pub kind: MeshKind,
    /// Sockets in fester Reihenfolge (leer bei Kabel-Assets)
    pub sockets: Vec<Socket>,
}

impl MeshAsset {
    /// Erstellt ein Asset ohne Sockets.
    pub fn new(id: &str, display_name: &str, kind: MeshKind) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            kind,
            sockets: Vec::new(),
        }
    }

    /// Erstellt ein Asset mit Sockets.
    pub fn with_sockets(id: &str, display_name: &str, kind: MeshKind, sockets: Vec<Socket>) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            kind,
            sockets,
        }
    }
}

/// Katalog aller bekannten Mesh-Assets, sortiert nach ID.
#[derive(Debug, Clone)]
pub struct MeshLibrary {
    assets: BTreeMap<String, MeshAsset>,
}

impl MeshLibrary {
    /// Erstellt einen leeren Katalog.
    pub fn new() -> Self {
        Self {
            assets: BTreeMap::new(),
        }
    }

    /// Baut den eingebauten Katalog mit Masten und Kabeltypen auf.
    pub fn builtin() -> Self {
        let mut library = Self::new();

        library.insert(MeshAsset::with_sockets(
            "mast_holz",
            "Holzmast",
            MeshKind::Support,
            vec![
                Socket::new("traverse_links", Vec3::new(-1.2, 0.0, 9.0)),
                Socket::new("traverse_rechts", Vec3::new(1.2, 0.0, 9.0)),
            ],
        ));

        library.insert(MeshAsset::with_sockets(
            "mast_beton",
            "Betonmast",
            MeshKind::Support,
            vec![
                Socket::new("traverse_links", Vec3::new(-1.5, 0.0, 12.0)),
                Socket::new("traverse_mitte", Vec3::new(0.0, 0.0, 13.0)),
                Socket::new("traverse_rechts", Vec3::new(1.5, 0.0, 12.0)),
            ],
        ));

        library.insert(MeshAsset::with_sockets(
            "mast_stahl",
            "Stahlgittermast",
            MeshKind::Support,
            vec![
                Socket::new("ebene1_links", Vec3::new(-3.0, 0.0, 18.0)),
                Socket::new("ebene1_rechts", Vec3::new(3.0, 0.0, 18.0)),
                Socket::new("ebene2_links", Vec3::new(-2.4, 0.0, 22.0)),
                Socket::new("ebene2_rechts", Vec3::new(2.4, 0.0, 22.0)),
                Socket::new("ebene3_links", Vec3::new(-1.8, 0.0, 26.0)),
                Socket::new("ebene3_rechts", Vec3::new(1.8, 0.0, 26.0)),
            ],
        ));

        library.insert(MeshAsset::new(
            "kabel_standard",
            "Standardkabel",
            MeshKind::Cable,
        ));
        library.insert(MeshAsset::new(
            "kabel_stark",
            "Starkstromkabel",
            MeshKind::Cable,
        ));

        library
    }

    /// Fügt ein Asset hinzu oder ersetzt ein bestehendes mit gleicher ID.
    pub fn insert(&mut self, asset: MeshAsset) {
        self.assets.insert(asset.id.clone(), asset);
    }

    /// Liefert das Asset zur ID.
    pub fn get(&self, id: &str) -> Option<&MeshAsset> {
        self.assets.get(id)
    }

    /// Iteriert über alle Assets einer Art in stabiler ID-Reihenfolge.
    pub fn assets_of_kind(&self, kind: MeshKind) -> impl Iterator<Item = &MeshAsset> {
        self.assets.values().filter(move |asset| asset.kind == kind)
    }

    /// Gibt die Anzahl aller Assets zurück.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Gibt `true` zurück, wenn der Katalog leer ist.
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl Default for MeshLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}
