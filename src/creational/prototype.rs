// Prototype: new objects are copied from existing ones, and a copy never
// shares mutable state with its source.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PatternError, Result};

pub trait Prototype: Sized {
    /// An independent deep copy of `self`.
    fn clone_prototype(&self) -> Result<Self>;
}

/// Deep copy through a serde round-trip.
///
/// Shared pointers (`Rc`, `Arc`) come back as fresh allocations, so the copy
/// is detached from the source even where `Clone` would share.
pub fn deep_copy<T: Serialize + DeserializeOwned>(value: &T) -> Result<T> {
    let encoded = serde_json::to_value(value).map_err(|err| PatternError::CloneFailed {
        reason: err.to_string(),
    })?;
    serde_json::from_value(encoded).map_err(|err| PatternError::CloneFailed {
        reason: err.to_string(),
    })
}

// ============================================================================
// Owned fields: derived Clone is already deep
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    id: u32,
    name: String,
    tags: Vec<String>,
}

impl Profile {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            tags: Vec::new(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn add_tag(&mut self, tag: impl Into<String>) {
        self.tags.push(tag.into());
    }
}

impl Prototype for Profile {
    fn clone_prototype(&self) -> Result<Self> {
        Ok(self.clone())
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Profile{{id={}, name='{}'}}", self.id, self.name)
    }
}

// ============================================================================
// Shared fields: derived Clone is shallow
// ============================================================================

/// Profile whose notes sit behind `Rc<RefCell<_>>`.
///
/// `Clone` shares the notes between copies; `clone_prototype` does not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedProfile {
    id: u32,
    name: String,
    notes: Rc<RefCell<Vec<String>>>,
}

impl SharedProfile {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            notes: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_note(&self, note: impl Into<String>) {
        self.notes.borrow_mut().push(note.into());
    }

    pub fn notes(&self) -> Vec<String> {
        self.notes.borrow().clone()
    }

    pub fn shares_notes_with(&self, other: &SharedProfile) -> bool {
        Rc::ptr_eq(&self.notes, &other.notes)
    }
}

impl Prototype for SharedProfile {
    fn clone_prototype(&self) -> Result<Self> {
        deep_copy(self)
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Named prototypes that new instances are spawned from.
pub struct PrototypeRegistry<P> {
    prototypes: HashMap<String, P>,
}

impl<P: Prototype> PrototypeRegistry<P> {
    pub fn new() -> Self {
        Self {
            prototypes: HashMap::new(),
        }
    }

    /// Registers `prototype` under `name`, returning the one it replaced.
    pub fn register(&mut self, name: impl Into<String>, prototype: P) -> Option<P> {
        self.prototypes.insert(name.into(), prototype)
    }

    pub fn spawn(&self, name: &str) -> Result<P> {
        let prototype = self
            .prototypes
            .get(name)
            .ok_or_else(|| PatternError::unknown_variant("prototype", name))?;
        debug!(name, "spawning from prototype");
        prototype.clone_prototype()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.prototypes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }
}

impl<P: Prototype> Default for PrototypeRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}
