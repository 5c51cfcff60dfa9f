use crate::core::InsertionPolicy;
use crate::shared::EditorOptions;

/// App-Intents: Eingaben aus UI/System ohne direkte Mutationslogik.
///
/// Alle Positionen liegen im Viewport-Raum (Ursprung unten links).
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Primäre Maustaste im Viewport gedrückt
    PointerPressed { position: glam::Vec2 },
    /// Mauszeiger bewegt
    PointerMoved { position: glam::Vec2 },
    /// Primäre Maustaste losgelassen
    PointerReleased,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Alle Nodes verwerfen
    ResetRequested,
    /// Einfüge-Regel wechseln
    InsertionPolicyChanged { policy: InsertionPolicy },
    /// Konstruktionslinien ein-/ausblenden
    ToggleConstructionLinesRequested,
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Aktuelle Optionen in die TOML-Datei schreiben
    SaveOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}
