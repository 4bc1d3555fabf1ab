//! Linear snapshot history for undo/redo.
//!
//! Every entry is a full, immutable copy of the canvas content. Pushing after
//! an undo discards the redo branch.

use log::debug;
use serde::{Deserialize, Serialize};

use super::model::{CanvasElement, DrawingPath, StickerElement, TextElement};

/// One immutable copy of all canvas content, in `get_all_elements` order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot(Vec<CanvasElement>);

impl Snapshot {
    pub fn new(elements: Vec<CanvasElement>) -> Self {
        Self(elements)
    }

    pub fn elements(&self) -> &[CanvasElement] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Splits the snapshot back into the three content collections,
    /// preserving each kind's relative order.
    pub fn restore(&self) -> (Vec<TextElement>, Vec<StickerElement>, Vec<DrawingPath>) {
        let mut texts = Vec::new();
        let mut stickers = Vec::new();
        let mut paths = Vec::new();
        for element in &self.0 {
            match element {
                CanvasElement::Text(el) => texts.push(el.clone()),
                CanvasElement::Sticker(el) => stickers.push(el.clone()),
                CanvasElement::Drawing(path) => paths.push(path.clone()),
            }
        }
        (texts, stickers, paths)
    }
}

/// Ordered snapshots plus a cursor.
///
/// The cursor is `None` exactly when there are no snapshots; otherwise it
/// points at a valid entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    snapshots: Vec<Snapshot>,
    index: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Position of the cursor (`None` before the first snapshot).
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Snapshot under the cursor.
    pub fn current(&self) -> Option<&Snapshot> {
        self.index.and_then(|i| self.snapshots.get(i))
    }

    /// Drops everything after the cursor, appends `snapshot` and moves the
    /// cursor onto it.
    pub fn push(&mut self, snapshot: Snapshot) {
        let keep = self.index.map_or(0, |i| i + 1);
        if keep < self.snapshots.len() {
            debug!(
                "history: discarding {} redo snapshot(s)",
                self.snapshots.len() - keep
            );
        }
        self.snapshots.truncate(keep);
        self.snapshots.push(snapshot);
        self.index = Some(self.snapshots.len() - 1);
    }

    /// True when the cursor can move back; index 0 is the floor.
    pub fn can_undo(&self) -> bool {
        matches!(self.index, Some(i) if i > 0)
    }

    pub fn can_redo(&self) -> bool {
        matches!(self.index, Some(i) if i + 1 < self.snapshots.len())
    }

    /// Moves the cursor back one step and returns the snapshot it lands on.
    pub fn step_back(&mut self) -> Option<&Snapshot> {
        if !self.can_undo() {
            return None;
        }
        let i = self.index? - 1;
        self.index = Some(i);
        self.snapshots.get(i)
    }

    /// Moves the cursor forward one step and returns the snapshot it lands on.
    pub fn step_forward(&mut self) -> Option<&Snapshot> {
        if !self.can_redo() {
            return None;
        }
        let i = self.index? + 1;
        self.index = Some(i);
        self.snapshots.get(i)
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.index = None;
    }
}
