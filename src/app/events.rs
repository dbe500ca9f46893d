//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use super::state::EditorTool;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Anwendung beenden
    ExitRequested,
    /// Kamera auf Standard zurücksetzen
    ResetCameraRequested,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Kamera auf den Mittelpunkt der Selektion zentrieren
    FocusSelectionRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera um Delta verschieben (Welt-Einheiten)
    CameraPan { delta: glam::Vec2 },
    /// Kamera zoomen (optional auf einen Fokuspunkt)
    CameraZoom {
        factor: f32,
        focus_world: Option<glam::Vec2>,
    },

    /// Objekt oder Kabel per Klick selektieren (Nearest-Pick)
    ObjectPickRequested {
        world_pos: glam::Vec2,
        additive: bool,
    },
    /// Objekte innerhalb eines Rechtecks selektieren (Shift + Drag)
    SelectObjectsInRectRequested {
        min: glam::Vec2,
        max: glam::Vec2,
        additive: bool,
    },
    /// Selektion aufheben
    ClearSelectionRequested,
    /// Alle Objekte selektieren
    SelectAllRequested,

    /// Move-Lifecycle Start: Drag-Verschieben selektierter Objekte beginnen
    BeginMoveSelectedRequested,
    /// Move-Lifecycle Update: Selektierte Objekte um Delta verschieben
    MoveSelectedRequested { delta_world: glam::Vec2 },
    /// Move-Lifecycle Ende: Drag-Verschieben abgeschlossen
    EndMoveSelectedRequested,

    /// Editor-Werkzeug wechseln
    SetEditorToolRequested { tool: EditorTool },
    /// Neues Objekt an Weltposition platzieren
    PlaceObjectRequested { world_pos: glam::Vec2 },
    /// Selektierte Objekte und Baugruppen löschen
    DeleteSelectedRequested,

    /// Segmentanzahl im Powerline-Panel geändert
    SegmentCountChanged { count: u32 },
    /// Durchhang im Powerline-Panel geändert
    SagAmountChanged { sag: f32 },
    /// Socket-Modus umgeschaltet
    AttachToSocketsToggled { enabled: bool },
    /// Kabel-Mesh im Panel gewählt
    CableMeshSelected { mesh_id: String },
    /// Platzierungs-Mesh im Panel gewählt
    PlacementMeshSelected { mesh_id: String },
    /// Powerline zwischen den zwei selektierten Objekten generieren
    GeneratePowerlineRequested,
    /// Selektierte Baugruppen mit aktuellen Positionen/Einstellungen neu generieren
    RegenerateSelectedRequested,

    /// Undo: Letzte Aktion rückgängig machen
    UndoRequested,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    RedoRequested,
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Anwendung kontrolliert beenden
    RequestExit,
    /// Kamera auf Standard zurücksetzen
    ResetCamera,
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Kamera auf den Mittelpunkt der Selektion zentrieren
    FocusSelection,
    /// Viewport-Größe im State aktualisieren
    SetViewportSize { size: [f32; 2] },
    /// Kamera um Delta verschieben
    PanCamera { delta: glam::Vec2 },
    /// Kamera zoomen (optional auf einen Fokuspunkt)
    ZoomCamera {
        factor: f32,
        focus_world: Option<glam::Vec2>,
    },

    /// Nächstes Objekt/Kabel zur Weltposition selektieren
    SelectNearestObject {
        world_pos: glam::Vec2,
        max_distance: f32,
        additive: bool,
    },
    /// Objekte innerhalb eines Rechtecks selektieren
    SelectObjectsInRect {
        min: glam::Vec2,
        max: glam::Vec2,
        additive: bool,
    },
    /// Selektion aufheben
    ClearSelection,
    /// Alle Objekte selektieren
    SelectAllObjects,

    /// Move-Lifecycle Start (legt den Undo-Snapshot an)
    BeginMoveSelected,
    /// Selektierte Objekte um Delta verschieben
    MoveSelected { delta_world: glam::Vec2 },
    /// Move-Lifecycle Ende
    EndMoveSelected,

    /// Editor-Werkzeug wechseln
    SetEditorTool { tool: EditorTool },
    /// Neues Objekt an Weltposition platzieren
    PlaceObjectAtPosition { world_pos: glam::Vec2 },
    /// Selektierte Objekte und Baugruppen löschen
    DeleteSelected,

    /// Segmentanzahl setzen (mindestens 1)
    SetSegmentCount { count: u32 },
    /// Durchhang setzen (mindestens 0)
    SetSagAmount { sag: f32 },
    /// Socket-Modus setzen
    SetAttachToSockets { enabled: bool },
    /// Kabel-Mesh setzen
    SetCableMesh { mesh_id: String },
    /// Platzierungs-Mesh setzen
    SetPlacementMesh { mesh_id: String },
    /// Powerline zwischen den zwei selektierten Objekten generieren
    GeneratePowerline,
    /// Selektierte Baugruppen neu generieren
    RegenerateSelectedAssemblies,

    /// Letzte Aktion rückgängig machen
    Undo,
    /// Rückgängig gemachte Aktion wiederherstellen
    Redo,
}
