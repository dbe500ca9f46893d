//! UI-Zustand: Statusmeldungen für die Status-Bar.

/// Zustand der UI-Oberfläche außerhalb des Viewports.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Aktuelle Statusnachricht (z.B. Warnung bei fehlgeschlagener Generierung)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt einen leeren UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
