//! Kern-Datenmodell: Szene, Objekte, Kabel, Katalog, Kamera, Spatial-Index.

pub mod cable;
pub mod camera;
pub mod mesh_library;
pub mod object;
pub mod scene;
pub mod spatial;

pub use cable::{CableAssembly, CableSegment, CableSpan, PowerlineSettings, SplinePoint};
pub use camera::Camera2D;
pub use mesh_library::{MeshAsset, MeshKind, MeshLibrary, Socket};
pub use object::SceneObject;
pub use scene::Scene;
pub use spatial::{ObjectHit, SpatialIndex};
