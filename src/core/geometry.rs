//! Geometrie-Kernel: kubische Bézier-Auswertung, Distanzen, Spiegelpunkte.
//!
//! Reine Funktionen ohne Seiteneffekte. Alle Koordinaten liegen im
//! Viewport-Raum (Ursprung unten links).

use glam::Vec2;

/// B(t) = (1-t)³·a + 3(1-t)²t·c1 + 3(1-t)t²·c2 + t³·b
///
/// Skalare Variante, wird pro Kanal (x, y) angewendet.
/// `t` außerhalb von [0, 1] ist erlaubt (Extrapolation).
pub fn cubic_bezier(a: f32, b: f32, c1: f32, c2: f32, t: f32) -> f32 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * a + 3.0 * inv2 * t * c1 + 3.0 * inv * t2 * c2 + t2 * t * b
}

/// Wertet die kubische Bézier-Kurve für beide Kanäle aus.
pub fn cubic_bezier_point(a: Vec2, b: Vec2, c1: Vec2, c2: Vec2, t: f32) -> Vec2 {
    Vec2::new(
        cubic_bezier(a.x, b.x, c1.x, c2.x, t),
        cubic_bezier(a.y, b.y, c1.y, c2.y, t),
    )
}

/// Euklidischer Abstand zweier Punkte.
pub fn euclid_distance(p1: Vec2, p2: Vec2) -> f32 {
    p1.distance(p2)
}

/// Spiegelt `point` am Punkt `root`.
///
/// Ergebnis liegt auf der Geraden durch `point` und `root`, im gleichen
/// Abstand auf der Gegenseite. Zweimal angewendet ergibt sich `point`.
pub fn colinear_mirror(root: Vec2, point: Vec2) -> Vec2 {
    root - (point - root)
}

/// Quadratischer Hit-Test: liegt `point` innerhalb der Halbbreite um `center`?
pub fn within_square(point: Vec2, center: Vec2, half_width: f32) -> bool {
    let d = (point - center).abs();
    d.x <= half_width && d.y <= half_width
}

/// Begrenzt einen Punkt auf `[inset, size - inset]` je Achse.
///
/// Ist der Viewport kleiner als `2 * inset`, gewinnt die Untergrenze.
pub fn clamp_to_viewport(point: Vec2, size: Vec2, inset: f32) -> Vec2 {
    let lo = Vec2::splat(inset);
    let hi = (size - lo).max(lo);
    point.max(lo).min(hi)
}
