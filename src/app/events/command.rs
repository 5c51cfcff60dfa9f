use crate::core::{InsertionPolicy, SplineTarget};
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Neuen Node an Viewport-Position einfügen
    AddNode { position: glam::Vec2 },
    /// Node oder Handle greifen
    Grab { target: SplineTarget },
    /// Gegriffenes Ziel auf (geklemmte) Position ziehen
    DragGrabbed { position: glam::Vec2 },
    /// Greif-Zustand aufheben
    ReleaseGrab,
    /// Alle Nodes entfernen
    ResetSpline,
    /// Viewport-Größe (Klemm-Grenzen) aktualisieren
    SetViewportSize { size: [f32; 2] },
    /// Einfüge-Regel setzen
    SetInsertionPolicy { policy: InsertionPolicy },
    /// Konstruktionslinien umschalten
    ToggleConstructionLines,
    /// Optionen übernehmen
    ApplyOptions { options: EditorOptions },
    /// Options-Dialog ein-/ausblenden
    SetOptionsDialogVisible { visible: bool },
    /// Optionen speichern
    SaveOptions,
    /// Anwendung beenden
    RequestExit,
}
