//! Spline-Modell: geordnete Nodes mit Bézier-Handles.
//!
//! Zwei benachbarte Nodes bilden ein kubisches Bézier-Segment:
//! Primary-Handle des ersten Nodes = CP1, Secondary-Handle des zweiten = CP2.
//!
//! Handles gehören per Wert zu ihrem Node. Referenzen von außen (Grab)
//! laufen über Indizes (`SplineTarget`), nie über Zeiger.

use super::geometry::{colinear_mirror, cubic_bezier_point, euclid_distance, within_square};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Standard-Versatz neuer Handles in y-Richtung.
pub const DEFAULT_HANDLE_OFFSET: f32 = 50.0;

/// Seite eines Handles am Node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    /// Ausgehender Kontrollpunkt (Node ist Segment-Start)
    Primary,
    /// Eingehender Kontrollpunkt (Node ist Segment-Ende)
    Secondary,
}

impl HandleKind {
    /// Liefert die gegenüberliegende Seite.
    pub fn opposite(self) -> Self {
        match self {
            HandleKind::Primary => HandleKind::Secondary,
            HandleKind::Secondary => HandleKind::Primary,
        }
    }
}

/// Kontrollpunkt eines Nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    pub position: Vec2,
    pub kind: HandleKind,
}

/// Anker-Punkt der Spline mit bis zu zwei Handles.
#[derive(Debug, Clone, PartialEq)]
pub struct SplineNode {
    pub position: Vec2,
    pub primary: Option<Handle>,
    pub secondary: Option<Handle>,
}

impl SplineNode {
    /// Erstellt einen Node ohne Handles.
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            primary: None,
            secondary: None,
        }
    }

    /// Gibt das Handle der angegebenen Seite zurück (falls vorhanden).
    pub fn handle(&self, kind: HandleKind) -> Option<&Handle> {
        match kind {
            HandleKind::Primary => self.primary.as_ref(),
            HandleKind::Secondary => self.secondary.as_ref(),
        }
    }

    fn slot_mut(&mut self, kind: HandleKind) -> &mut Option<Handle> {
        match kind {
            HandleKind::Primary => &mut self.primary,
            HandleKind::Secondary => &mut self.secondary,
        }
    }

    /// Setzt (oder überschreibt) das Handle der angegebenen Seite.
    pub fn set_handle(&mut self, kind: HandleKind, position: Vec2) {
        *self.slot_mut(kind) = Some(Handle { position, kind });
    }

    /// Gibt `true` zurück, wenn das Handle der Seite existiert.
    pub fn has_handle(&self, kind: HandleKind) -> bool {
        self.handle(kind).is_some()
    }

    /// Iteriert über alle vorhandenen Handles (Primary zuerst).
    pub fn handles(&self) -> impl Iterator<Item = &Handle> {
        self.primary.iter().chain(self.secondary.iter())
    }

    /// Verschiebt den Node samt Handles um `delta`.
    fn translate(&mut self, delta: Vec2) {
        self.position += delta;
        for slot in [&mut self.primary, &mut self.secondary] {
            if let Some(handle) = slot {
                handle.position += delta;
            }
        }
    }

    /// Erzwingt das Handle auf `kind` als Spiegel des Gegen-Handles.
    ///
    /// Fehlt das Gegen-Handle, bleibt der Node unverändert.
    fn mirror_into(&mut self, kind: HandleKind) {
        if let Some(source) = self.handle(kind.opposite()).copied() {
            let mirrored = colinear_mirror(self.position, source.position);
            self.set_handle(kind, mirrored);
        }
    }
}

/// Referenz auf einen verschiebbaren Punkt der Spline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplineTarget {
    /// Der Node selbst
    Node(usize),
    /// Ein Handle des Nodes
    Handle { node: usize, kind: HandleKind },
}

impl SplineTarget {
    /// Index des betroffenen Nodes.
    pub fn node_index(&self) -> usize {
        match *self {
            SplineTarget::Node(index) => index,
            SplineTarget::Handle { node, .. } => node,
        }
    }

    /// Verschiebt den Node-Index (nach Einfügen am Anfang).
    pub fn shifted(self, by: usize) -> Self {
        match self {
            SplineTarget::Node(index) => SplineTarget::Node(index + by),
            SplineTarget::Handle { node, kind } => SplineTarget::Handle {
                node: node + by,
                kind,
            },
        }
    }
}

/// Regel, an welchem Ende neue Nodes eingefügt werden (ab zwei Nodes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InsertionPolicy {
    /// Am näheren Ende einfügen, Gleichstand → vorne
    #[default]
    NearestEnd,
    /// Immer hinten anhängen
    AppendBack,
}

/// Ein kubisches Bézier-Segment zwischen zwei benachbarten Nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierSegment {
    pub start: Vec2,
    pub control1: Vec2,
    pub control2: Vec2,
    pub end: Vec2,
}

impl BezierSegment {
    /// Punkt auf dem Segment bei Parameter `t`.
    pub fn point_at(&self, t: f32) -> Vec2 {
        cubic_bezier_point(self.start, self.end, self.control1, self.control2, t)
    }

    /// Tastet das Segment in `samples` Abschnitten ab (`samples + 1` Punkte).
    ///
    /// Der letzte Punkt ist exakt der End-Node.
    pub fn polyline(&self, samples: usize) -> Vec<Vec2> {
        let samples = samples.max(1);
        let mut points = Vec::with_capacity(samples + 1);
        for i in 0..samples {
            points.push(self.point_at(i as f32 / samples as f32));
        }
        points.push(self.end);
        points
    }
}

/// Geordnete Node-Folge mit Einfüge- und Verschiebe-Regeln.
#[derive(Debug, Clone)]
pub struct Spline {
    nodes: Vec<SplineNode>,
    /// Einfüge-Regel ab zwei Nodes
    pub policy: InsertionPolicy,
    /// y-Versatz neuer Handles
    pub handle_offset: f32,
}

impl Default for Spline {
    fn default() -> Self {
        Self::new()
    }
}

impl Spline {
    /// Erstellt eine leere Spline mit Standard-Regeln.
    pub fn new() -> Self {
        Self::with_policy(InsertionPolicy::default(), DEFAULT_HANDLE_OFFSET)
    }

    /// Erstellt eine leere Spline mit expliziter Einfüge-Regel.
    pub fn with_policy(policy: InsertionPolicy, handle_offset: f32) -> Self {
        Self {
            nodes: Vec::new(),
            policy,
            handle_offset,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Read-only Sicht auf alle Nodes in Reihenfolge.
    pub fn nodes(&self) -> &[SplineNode] {
        &self.nodes
    }

    pub fn node(&self, index: usize) -> Option<&SplineNode> {
        self.nodes.get(index)
    }

    /// Entfernt alle Nodes.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Fügt einen Node an `position` ein und gibt seinen Index zurück.
    ///
    /// - leer: Primary-Handle, anhängen
    /// - ein Node: Secondary-Handle, hinten anhängen
    /// - ab zwei Nodes: je nach `policy` vorne oder hinten; das bisherige
    ///   End-Node erhält das fehlende Handle als Spiegel des vorhandenen
    pub fn add_node(&mut self, position: Vec2) -> usize {
        let handle_pos = position + Vec2::new(0.0, self.handle_offset);
        let mut node = SplineNode::new(position);

        match self.nodes.len() {
            0 => {
                node.set_handle(HandleKind::Primary, handle_pos);
                self.nodes.push(node);
                0
            }
            1 => {
                node.set_handle(HandleKind::Secondary, handle_pos);
                self.nodes.push(node);
                1
            }
            _ if self.inserts_at_front(position) => {
                node.set_handle(HandleKind::Primary, handle_pos);
                self.nodes[0].mirror_into(HandleKind::Secondary);
                self.nodes.insert(0, node);
                0
            }
            len => {
                node.set_handle(HandleKind::Secondary, handle_pos);
                self.nodes[len - 1].mirror_into(HandleKind::Primary);
                self.nodes.push(node);
                len
            }
        }
    }

    fn inserts_at_front(&self, position: Vec2) -> bool {
        match self.policy {
            InsertionPolicy::AppendBack => false,
            InsertionPolicy::NearestEnd => {
                let (Some(front), Some(back)) = (self.nodes.first(), self.nodes.last()) else {
                    return false;
                };
                euclid_distance(position, front.position) <= euclid_distance(position, back.position)
            }
        }
    }

    /// Verschiebt einen Node; seine Handles wandern starr mit.
    ///
    /// Gibt `false` zurück, wenn der Index nicht existiert.
    pub fn move_node(&mut self, index: usize, position: Vec2) -> bool {
        let Some(node) = self.nodes.get_mut(index) else {
            return false;
        };
        let delta = position - node.position;
        node.translate(delta);
        true
    }

    /// Verschiebt ein Handle; ein vorhandenes Gegen-Handle wird gespiegelt.
    ///
    /// Gibt `false` zurück, wenn Node oder Handle nicht existieren.
    pub fn move_handle(&mut self, index: usize, kind: HandleKind, position: Vec2) -> bool {
        let Some(node) = self.nodes.get_mut(index) else {
            return false;
        };
        if !node.has_handle(kind) {
            return false;
        }
        node.set_handle(kind, position);
        if node.has_handle(kind.opposite()) {
            node.mirror_into(kind.opposite());
        }
        true
    }

    /// Verschiebt das Ziel auf `position`.
    pub fn move_target(&mut self, target: SplineTarget, position: Vec2) -> bool {
        match target {
            SplineTarget::Node(index) => self.move_node(index, position),
            SplineTarget::Handle { node, kind } => self.move_handle(node, kind, position),
        }
    }

    /// Sucht den ersten Treffer in Node-Reihenfolge.
    ///
    /// Pro Node: Position, dann Primary, dann Secondary.
    pub fn hit_test(&self, position: Vec2, half_width: f32) -> Option<SplineTarget> {
        self.nodes.iter().enumerate().find_map(|(index, node)| {
            if within_square(position, node.position, half_width) {
                return Some(SplineTarget::Node(index));
            }
            node.handles()
                .find(|h| within_square(position, h.position, half_width))
                .map(|h| SplineTarget::Handle {
                    node: index,
                    kind: h.kind,
                })
        })
    }

    /// Aktuelle Position eines Ziels (falls es noch existiert).
    pub fn target_position(&self, target: SplineTarget) -> Option<Vec2> {
        match target {
            SplineTarget::Node(index) => self.node(index).map(|n| n.position),
            SplineTarget::Handle { node, kind } => self
                .node(node)
                .and_then(|n| n.handle(kind))
                .map(|h| h.position),
        }
    }

    /// Alle darstellbaren Segmente in Reihenfolge.
    ///
    /// Paare ohne Primary (links) oder Secondary (rechts) werden übersprungen.
    pub fn segments(&self) -> impl Iterator<Item = BezierSegment> + '_ {
        self.nodes.windows(2).filter_map(|pair| {
            let control1 = pair[0].primary?.position;
            let control2 = pair[1].secondary?.position;
            Some(BezierSegment {
                start: pair[0].position,
                control1,
                control2,
                end: pair[1].position,
            })
        })
    }
}
