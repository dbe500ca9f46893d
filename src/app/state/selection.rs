//! Selektionszustand für Objekte und Kabel-Baugruppen.

use std::collections::HashSet;

/// Aktuelle Selektion im Viewport.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// IDs der selektierten Objekte
    pub selected_object_ids: HashSet<u64>,
    /// IDs der selektierten Baugruppen
    pub selected_assembly_ids: HashSet<u64>,
    /// Zuletzt angeklicktes Objekt (Anker für Folgeoperationen)
    pub anchor_object_id: Option<u64>,
}

impl SelectionState {
    /// Erstellt eine leere Selektion.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hebt die komplette Selektion auf.
    pub fn clear(&mut self) {
        self.selected_object_ids.clear();
        self.selected_assembly_ids.clear();
        self.anchor_object_id = None;
    }

    /// Gibt `true` zurück, wenn weder Objekte noch Baugruppen selektiert sind.
    pub fn is_empty(&self) -> bool {
        self.selected_object_ids.is_empty() && self.selected_assembly_ids.is_empty()
    }
}
