// Memento: capture an originator's state so it can be put back later,
// without the caretaker ever looking inside the snapshot.

use crate::error::{PatternError, Result};

/// An object whose state can be snapshotted and restored wholesale.
pub trait Originator {
    type Snapshot;

    fn save(&self) -> Self::Snapshot;
    fn restore(&mut self, snapshot: &Self::Snapshot);
}

/// Text editor whose content is the saved state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Editor {
    content: String,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `words` to the current content.
    pub fn type_text(&mut self, words: &str) {
        self.content.push_str(words);
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Immutable copy of an [`Editor`]'s content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorMemento {
    content: String,
}

impl Originator for Editor {
    type Snapshot = EditorMemento;

    fn save(&self) -> EditorMemento {
        EditorMemento {
            content: self.content.clone(),
        }
    }

    fn restore(&mut self, snapshot: &EditorMemento) {
        self.content.clone_from(&snapshot.content);
    }
}

/// Caretaker: keeps snapshots in the order they were pushed.
#[derive(Debug, Clone)]
pub struct History<M> {
    mementos: Vec<M>,
}

impl<M> History<M> {
    pub fn new() -> Self {
        Self {
            mementos: Vec::new(),
        }
    }

    /// Stores `memento` and returns the index it can be retrieved with.
    pub fn push(&mut self, memento: M) -> usize {
        self.mementos.push(memento);
        self.mementos.len() - 1
    }

    pub fn get(&self, index: usize) -> Result<&M> {
        self.mementos
            .get(index)
            .ok_or(PatternError::InvalidHistoryIndex {
                index,
                len: self.mementos.len(),
            })
    }

    pub fn latest(&self) -> Option<&M> {
        self.mementos.last()
    }

    pub fn len(&self) -> usize {
        self.mementos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mementos.is_empty()
    }
}

impl<M> Default for History<M> {
    fn default() -> Self {
        Self::new()
    }
}
