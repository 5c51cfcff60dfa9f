//! Zentrale Konfiguration für den Bézier-Spline-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{InsertionPolicy, DEFAULT_HANDLE_OFFSET};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

// ── Interaktion ─────────────────────────────────────────────────────

/// Halbbreite des quadratischen Greif-Bereichs um Nodes und Handles.
pub const GRAB_HALF_WIDTH: f32 = 11.0;
/// Mindestabstand verschobener Punkte zum Viewport-Rand.
pub const CLAMP_INSET: f32 = 5.0;

// ── Kurve ───────────────────────────────────────────────────────────

/// Abtastschritte pro Bézier-Segment.
pub const CURVE_SEGMENTS: usize = 200;
/// Linienstärke der Kurve in Pixeln.
pub const CURVE_WIDTH_PX: f32 = 2.0;

// ── Darstellung ─────────────────────────────────────────────────────

/// Kantenlänge der Punkt-Marker in Pixeln.
pub const POINT_SIZE_PX: f32 = 10.0;
/// Strichlänge der Konstruktionslinien.
pub const DASH_LENGTH_PX: f32 = 6.0;
/// Lückenlänge der Konstruktionslinien.
pub const DASH_GAP_PX: f32 = 4.0;

/// Hintergrundfarbe (RGBA: fast Schwarz).
pub const BACKGROUND_COLOR: [f32; 4] = [0.06, 0.06, 0.06, 1.0];
/// Kurvenfarbe (RGBA: Weiß).
pub const CURVE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Node-Farbe (RGBA: Blau).
pub const NODE_COLOR: [f32; 4] = [0.0, 0.3, 1.0, 1.0];
/// Handle-Farbe (RGBA: Orange-Rot).
pub const HANDLE_COLOR: [f32; 4] = [1.0, 0.2, 0.0, 1.0];
/// Farbe der Konstruktionslinien (RGBA: Grau).
pub const CONSTRUCTION_LINE_COLOR: [f32; 4] = [0.6, 0.6, 0.6, 1.0];
/// Farbe des gegriffenen Punkts (RGBA: Gelb).
pub const GRABBED_COLOR: [f32; 4] = [1.0, 0.9, 0.1, 1.0];

// ── Zulässige Wertebereiche (Dialog und geladene Dateien) ──────────

/// Bereich für den Handle-Versatz.
pub const HANDLE_OFFSET_RANGE: RangeInclusive<f32> = -500.0..=500.0;
/// Bereich für die Greif-Halbbreite.
pub const GRAB_HALF_WIDTH_RANGE: RangeInclusive<f32> = 1.0..=50.0;
/// Bereich für den Randabstand.
pub const CLAMP_INSET_RANGE: RangeInclusive<f32> = 0.0..=100.0;
/// Bereich für die Abtastschritte pro Segment.
pub const CURVE_SEGMENTS_RANGE: RangeInclusive<usize> = 1..=2000;
/// Bereich für die Kurvenbreite.
pub const CURVE_WIDTH_RANGE: RangeInclusive<f32> = 0.5..=10.0;
/// Bereich für die Punktgröße.
pub const POINT_SIZE_RANGE: RangeInclusive<f32> = 2.0..=40.0;
/// Bereich für Strich- und Lückenlänge der Konstruktionslinien.
pub const DASH_RANGE: RangeInclusive<f32> = 1.0..=100.0;

fn clamp_f32(value: f32, range: &RangeInclusive<f32>, fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(*range.start(), *range.end())
    } else {
        fallback
    }
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `bezier_spline_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Spline ──────────────────────────────────────────────────
    /// y-Versatz neu erzeugter Handles
    pub handle_offset: f32,
    /// Einfüge-Regel ab zwei Nodes
    pub insertion_policy: InsertionPolicy,

    // ── Interaktion ─────────────────────────────────────────────
    /// Halbbreite des Greif-Quadrats
    pub grab_half_width: f32,
    /// Randabstand beim Verschieben
    pub clamp_inset: f32,

    // ── Kurve ───────────────────────────────────────────────────
    /// Abtastschritte pro Segment
    pub curve_segments: usize,
    /// Linienstärke der Kurve
    pub curve_width_px: f32,

    // ── Darstellung ─────────────────────────────────────────────
    pub point_size_px: f32,
    pub dash_length_px: f32,
    pub dash_gap_px: f32,
    /// Gestrichelte Linien Node → Handle anzeigen
    pub show_construction_lines: bool,
    pub background_color: [f32; 4],
    pub curve_color: [f32; 4],
    pub node_color: [f32; 4],
    pub handle_color: [f32; 4],
    pub construction_line_color: [f32; 4],
    pub grabbed_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            handle_offset: DEFAULT_HANDLE_OFFSET,
            insertion_policy: InsertionPolicy::NearestEnd,

            grab_half_width: GRAB_HALF_WIDTH,
            clamp_inset: CLAMP_INSET,

            curve_segments: CURVE_SEGMENTS,
            curve_width_px: CURVE_WIDTH_PX,

            point_size_px: POINT_SIZE_PX,
            dash_length_px: DASH_LENGTH_PX,
            dash_gap_px: DASH_GAP_PX,
            show_construction_lines: true,
            background_color: BACKGROUND_COLOR,
            curve_color: CURVE_COLOR,
            node_color: NODE_COLOR,
            handle_color: HANDLE_COLOR,
            construction_line_color: CONSTRUCTION_LINE_COLOR,
            grabbed_color: GRABBED_COLOR,
        }
    }
}

impl EditorOptions {
    /// Begrenzt alle Zahlenwerte auf ihre zulässigen Bereiche.
    ///
    /// Nicht-endliche Werte fallen auf den Standardwert zurück.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        self.handle_offset = clamp_f32(
            self.handle_offset,
            &HANDLE_OFFSET_RANGE,
            defaults.handle_offset,
        );
        self.grab_half_width = clamp_f32(
            self.grab_half_width,
            &GRAB_HALF_WIDTH_RANGE,
            defaults.grab_half_width,
        );
        self.clamp_inset = clamp_f32(self.clamp_inset, &CLAMP_INSET_RANGE, defaults.clamp_inset);
        self.curve_segments = self
            .curve_segments
            .clamp(*CURVE_SEGMENTS_RANGE.start(), *CURVE_SEGMENTS_RANGE.end());
        self.curve_width_px = clamp_f32(
            self.curve_width_px,
            &CURVE_WIDTH_RANGE,
            defaults.curve_width_px,
        );
        self.point_size_px = clamp_f32(
            self.point_size_px,
            &POINT_SIZE_RANGE,
            defaults.point_size_px,
        );
        self.dash_length_px = clamp_f32(self.dash_length_px, &DASH_RANGE, defaults.dash_length_px);
        self.dash_gap_px = clamp_f32(self.dash_gap_px, &DASH_RANGE, defaults.dash_gap_px);
        self
    }

    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    ///
    /// Werte außerhalb der zulässigen Bereiche werden begrenzt.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    let sanitized = opts.clone().sanitized();
                    if sanitized != opts {
                        log::warn!("Optionen außerhalb der zulässigen Bereiche wurden begrenzt");
                    }
                    sanitized
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_spline_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_spline_editor.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let opts = EditorOptions::default();
        assert_eq!(opts.handle_offset, 50.0);
        assert_eq!(opts.grab_half_width, 11.0);
        assert_eq!(opts.clamp_inset, 5.0);
        assert_eq!(opts.curve_segments, 200);
        assert_eq!(opts.insertion_policy, InsertionPolicy::NearestEnd);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let opts: EditorOptions = toml::from_str(
            "insertion_policy = \"AppendBack\"\ncurve_segments = 32\n",
        )
        .expect("Teil-TOML muss parsebar sein");

        assert_eq!(opts.insertion_policy, InsertionPolicy::AppendBack);
        assert_eq!(opts.curve_segments, 32);
        assert_eq!(opts.handle_offset, DEFAULT_HANDLE_OFFSET);
        assert!(opts.show_construction_lines);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = std::env::temp_dir().join(format!(
            "bezier_spline_editor_opts_{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).expect("Temp-Verzeichnis anlegen");
        let path = dir.join("options.toml");

        let opts = EditorOptions {
            grab_half_width: 8.0,
            show_construction_lines: false,
            ..EditorOptions::default()
        };
        opts.save_to_file(&path).expect("Speichern muss klappen");
        let loaded = EditorOptions::load_from_file(&path);

        assert_eq!(loaded, opts);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_out_of_range_values_are_clamped_on_load() {
        let dir = std::env::temp_dir().join(format!(
            "bezier_spline_editor_range_{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).expect("Temp-Verzeichnis anlegen");
        let path = dir.join("range.toml");
        std::fs::write(
            &path,
            "curve_segments = 9223372036854775807\n\
             grab_half_width = -3.0\n\
             clamp_inset = 1000.0\n\
             point_size_px = 0.0\n\
             curve_width_px = 99.0\n\
             dash_length_px = 0.0\n",
        )
        .expect("Schreiben");

        let opts = EditorOptions::load_from_file(&path);

        assert_eq!(opts.curve_segments, 2000);
        assert_eq!(opts.grab_half_width, 1.0);
        assert_eq!(opts.clamp_inset, 100.0);
        assert_eq!(opts.point_size_px, 2.0);
        assert_eq!(opts.curve_width_px, 10.0);
        assert_eq!(opts.dash_length_px, 1.0);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_sanitized_keeps_valid_values_and_replaces_non_finite() {
        assert_eq!(EditorOptions::default().sanitized(), EditorOptions::default());

        let opts = EditorOptions {
            handle_offset: f32::NAN,
            curve_segments: 0,
            ..EditorOptions::default()
        }
        .sanitized();

        assert_eq!(opts.handle_offset, DEFAULT_HANDLE_OFFSET);
        assert_eq!(opts.curve_segments, 1);
    }

    #[test]
    fn test_load_missing_or_broken_file_gives_defaults() {
        let missing = std::env::temp_dir().join("bezier_spline_editor_gibt_es_nicht.toml");
        assert_eq!(
            EditorOptions::load_from_file(&missing),
            EditorOptions::default()
        );

        let dir = std::env::temp_dir().join(format!(
            "bezier_spline_editor_broken_{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).expect("Temp-Verzeichnis anlegen");
        let path = dir.join("broken.toml");
        std::fs::write(&path, "curve_segments = \"viele\"").expect("Schreiben");
        assert_eq!(EditorOptions::load_from_file(&path), EditorOptions::default());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
