//! Begrenztes Command-Log für Debugging und Tests.

use super::AppCommand;

/// Speichert ausgeführte Commands in Reihenfolge.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Fügt einen ausgeführten Command hinzu.
    /// Begrenzt auf MAX_ENTRIES, ältere Einträge werden verworfen.
    ///
    /// Drag-Commands fallen bei jeder Mausbewegung an; aufeinanderfolgende
    /// `DragGrabbed` werden zu einem Eintrag zusammengefasst.
    pub fn record(&mut self, command: &AppCommand) {
        if let (Some(AppCommand::DragGrabbed { position: last }), AppCommand::DragGrabbed { position }) =
            (self.entries.last_mut(), command)
        {
            *last = *position;
            return;
        }
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command.clone());
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_consecutive_drags_are_merged() {
        let mut log = CommandLog::new();
        log.record(&AppCommand::ReleaseGrab);
        log.record(&AppCommand::DragGrabbed {
            position: Vec2::new(1.0, 1.0),
        });
        log.record(&AppCommand::DragGrabbed {
            position: Vec2::new(2.0, 3.0),
        });

        assert_eq!(log.len(), 2);
        assert_eq!(
            log.entries().last(),
            Some(&AppCommand::DragGrabbed {
                position: Vec2::new(2.0, 3.0)
            })
        );
    }

    #[test]
    fn test_log_is_bounded() {
        let mut log = CommandLog::new();
        for i in 0..(CommandLog::MAX_ENTRIES + 10) {
            log.record(&AppCommand::AddNode {
                position: Vec2::splat(i as f32),
            });
        }
        assert!(log.len() <= CommandLog::MAX_ENTRIES);
        assert!(!log.is_empty());
    }
}
