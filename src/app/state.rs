//! Application State: zentrale Datenhaltung.

use super::CommandLog;
use crate::core::{Spline, SplineTarget};
use crate::shared::launch::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::shared::EditorOptions;
use std::path::PathBuf;

/// Transienter Greif-Zustand (höchstens ein Node oder ein Handle).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GrabState {
    /// Aktuell gegriffenes Ziel
    pub target: Option<SplineTarget>,
}

impl GrabState {
    /// Gibt `true` zurück, wenn gerade etwas gezogen wird.
    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    /// Hebt den Greif-Zustand auf.
    pub fn release(&mut self) {
        self.target = None;
    }
}

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Aktuelle Viewport-Größe in Pixel (bestimmt die Klemm-Grenzen)
    pub viewport_size: [f32; 2],
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand (Standard-Fenstergröße).
    pub fn new() -> Self {
        Self {
            viewport_size: [DEFAULT_WINDOW_WIDTH as f32, DEFAULT_WINDOW_HEIGHT as f32],
        }
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Die editierte Spline
    pub spline: Spline,
    /// Greif-Zustand (Drag)
    pub grab: GrabState,
    /// View-State
    pub view: ViewState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Zielpfad für `SaveOptions`
    pub options_path: PathBuf,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State; die Spline übernimmt die (begrenzten) Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        let options = options.sanitized();
        Self {
            spline: Spline::with_policy(options.insertion_policy, options.handle_offset),
            grab: GrabState::default(),
            view: ViewState::new(),
            command_log: CommandLog::new(),
            options,
            show_options_dialog: false,
            options_path: EditorOptions::config_path(),
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Nodes zurück (für UI-Anzeige)
    pub fn node_count(&self) -> usize {
        self.spline.len()
    }

    /// Gibt die Anzahl der darstellbaren Segmente zurück (für UI-Anzeige)
    pub fn segment_count(&self) -> usize {
        self.spline.segments().count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
