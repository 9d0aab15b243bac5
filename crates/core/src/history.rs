//! Linear undo/redo history over canvas snapshots.
//!
//! Standard editor semantics: a log of snapshots plus a cursor. Recording
//! after an undo discards the abandoned redo tail. Out-of-range undo/redo
//! are silent no-ops, never errors; the UI disables the buttons via
//! [`HistoryLog::can_undo`] / [`HistoryLog::can_redo`].
//!
//! All operations are pure: they return a new log and never mutate the
//! receiver, so callers may keep references to earlier logs (e.g. for a
//! previous render's button state).

use crate::canvas::CanvasSnapshot;

/// An ordered sequence of canvas snapshots plus a cursor.
///
/// Invariant: `cursor` is `None` iff the log is empty, otherwise it is a
/// valid index into `snapshots`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HistoryLog {
    snapshots: Vec<CanvasSnapshot>,
    cursor: Option<usize>,
}

impl HistoryLog {
    /// An empty log (nothing loaded yet).
    pub fn new() -> Self {
        Self::default()
    }

    /// A log seeded with the initial canvas state, cursor at 0.
    pub fn with_initial(snapshot: CanvasSnapshot) -> Self {
        Self {
            snapshots: vec![snapshot],
            cursor: Some(0),
        }
    }

    /// Record a new snapshot: truncate any redo tail beyond the cursor,
    /// append, and move the cursor to the last index. Always succeeds.
    ///
    /// The discarded "future" entries are permanently lost, matching
    /// standard editor undo behaviour.
    pub fn record(&self, snapshot: CanvasSnapshot) -> Self {
        let keep = match self.cursor {
            Some(cursor) => cursor + 1,
            None => 0,
        };
        let mut snapshots: Vec<CanvasSnapshot> = self.snapshots[..keep].to_vec();
        snapshots.push(snapshot);
        let cursor = Some(snapshots.len() - 1);
        Self { snapshots, cursor }
    }

    /// Step the cursor back one entry. No-op at the floor (or on an empty
    /// log).
    pub fn undo(&self) -> Self {
        match self.cursor {
            Some(cursor) if cursor > 0 => Self {
                snapshots: self.snapshots.clone(),
                cursor: Some(cursor - 1),
            },
            _ => self.clone(),
        }
    }

    /// Step the cursor forward one entry. No-op at the last index (or on an
    /// empty log).
    pub fn redo(&self) -> Self {
        match self.cursor {
            Some(cursor) if cursor + 1 < self.snapshots.len() => Self {
                snapshots: self.snapshots.clone(),
                cursor: Some(cursor + 1),
            },
            _ => self.clone(),
        }
    }

    /// The snapshot at the cursor, or an empty snapshot for an empty log.
    pub fn current(&self) -> CanvasSnapshot {
        match self.cursor {
            Some(cursor) => self.snapshots[cursor].clone(),
            None => CanvasSnapshot::default(),
        }
    }

    pub fn can_undo(&self) -> bool {
        matches!(self.cursor, Some(cursor) if cursor > 0)
    }

    pub fn can_redo(&self) -> bool {
        matches!(self.cursor, Some(cursor) if cursor + 1 < self.snapshots.len())
    }

    /// Number of snapshots in the log.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Current cursor position; `None` iff the log is empty.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{CanvasElement, Position, Size};

    fn snapshot(tag: &str) -> CanvasSnapshot {
        CanvasSnapshot::new(vec![CanvasElement {
            id: tag.to_string(),
            element_type: "button".to_string(),
            props: serde_json::json!({ "text": tag }),
            position: Position { x: 0.0, y: 0.0 },
            size: Size {
                width: 120.0,
                height: 40.0,
            },
        }])
    }

    #[test]
    fn test_empty_log_has_no_cursor_and_empty_current() {
        let log = HistoryLog::new();
        assert!(log.is_empty());
        assert_eq!(log.cursor(), None);
        assert!(log.current().is_empty());
        assert!(!log.can_undo());
        assert!(!log.can_redo());
    }

    #[test]
    fn test_current_after_n_records_is_nth_snapshot() {
        let mut log = HistoryLog::new();
        for tag in ["a", "b", "c", "d"] {
            log = log.record(snapshot(tag));
            assert_eq!(log.current(), snapshot(tag));
        }
        assert_eq!(log.len(), 4);
        assert_eq!(log.cursor(), Some(3));
    }

    #[test]
    fn test_undo_redo_round_trip_is_idempotent() {
        let log = HistoryLog::new()
            .record(snapshot("a"))
            .record(snapshot("b"))
            .record(snapshot("c"))
            .undo();
        assert_eq!(log.current(), snapshot("b"));

        let round_trip = log.undo().redo();
        assert_eq!(round_trip.current(), snapshot("b"));
        assert_eq!(round_trip.cursor(), log.cursor());
    }

    #[test]
    fn test_record_after_undo_discards_future() {
        let log = HistoryLog::new()
            .record(snapshot("a"))
            .record(snapshot("b"))
            .record(snapshot("c"))
            .undo()
            .undo();
        assert_eq!(log.current(), snapshot("a"));

        let log = log.record(snapshot("x"));
        assert_eq!(log.len(), 2);
        assert_eq!(log.current(), snapshot("x"));

        // The pre-undo future ("b", "c") is unreachable.
        let redone = log.redo();
        assert_eq!(redone.current(), snapshot("x"));
        assert!(!log.can_redo());
    }

    #[test]
    fn test_undo_at_floor_is_noop() {
        let log = HistoryLog::with_initial(snapshot("a"));
        let after = log.undo();
        assert_eq!(after, log);
        assert_eq!(after.current(), snapshot("a"));
    }

    #[test]
    fn test_redo_at_ceiling_is_noop() {
        let log = HistoryLog::new().record(snapshot("a")).record(snapshot("b"));
        let after = log.redo();
        assert_eq!(after, log);
        assert_eq!(after.current(), snapshot("b"));
    }

    #[test]
    fn test_operations_do_not_mutate_receiver() {
        let original = HistoryLog::new().record(snapshot("a")).record(snapshot("b"));
        let _ = original.undo();
        let _ = original.record(snapshot("c"));
        assert_eq!(original.len(), 2);
        assert_eq!(original.current(), snapshot("b"));
    }

    #[test]
    fn test_record_from_interior_cursor_keeps_prefix() {
        let log = HistoryLog::new()
            .record(snapshot("a"))
            .record(snapshot("b"))
            .record(snapshot("c"))
            .undo()
            .record(snapshot("d"));
        assert_eq!(log.len(), 3);
        assert_eq!(log.undo().current(), snapshot("b"));
        assert_eq!(log.undo().undo().current(), snapshot("a"));
    }

    #[test]
    fn test_can_undo_can_redo_track_cursor() {
        let log = HistoryLog::new().record(snapshot("a")).record(snapshot("b"));
        assert!(log.can_undo());
        assert!(!log.can_redo());

        let log = log.undo();
        assert!(!log.can_undo());
        assert!(log.can_redo());
    }
}
