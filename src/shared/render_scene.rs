//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.
//! Alle Positionen liegen im Viewport-Raum (Ursprung unten links).

use super::options::EditorOptions;
use crate::core::HandleKind;
use glam::Vec2;

/// Handle-Marker für die Darstellung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleMarker {
    pub position: Vec2,
    pub kind: HandleKind,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Eine abgetastete Polyline pro Bézier-Segment
    pub curves: Vec<Vec<Vec2>>,
    /// Node-Positionen in Spline-Reihenfolge
    pub nodes: Vec<Vec2>,
    /// Alle vorhandenen Handles
    pub handles: Vec<HandleMarker>,
    /// Konstruktionslinien Node → Handle (leer wenn ausgeblendet)
    pub construction_lines: Vec<[Vec2; 2]>,
    /// Position des aktuell gegriffenen Punkts (zur Hervorhebung)
    pub grabbed: Option<Vec2>,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Laufzeit-Optionen für Farben und Größen
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob überhaupt etwas zu zeichnen ist.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
