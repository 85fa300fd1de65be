// Iterator: an aggregate hands out cursors that walk its elements without
// exposing how they are stored.

use crate::error::{PatternError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate<T> {
    items: Vec<T>,
}

impl<T> Aggregate<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// A fresh cursor positioned before the first element.
    ///
    /// The cursor borrows the aggregate, so `add` cannot be called while
    /// any cursor is alive.
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor {
            items: &self.items,
            position: 0,
        }
    }
}

impl<T> Default for Aggregate<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Aggregate<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Aggregate<T> {
    type Item = &'a T;
    type IntoIter = Cursor<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor()
    }
}

#[derive(Debug, Clone)]
pub struct Cursor<'a, T> {
    items: &'a [T],
    position: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub fn has_next(&self) -> bool {
        self.position < self.items.len()
    }

    /// Returns the next element, or [`PatternError::Exhausted`] once every
    /// element has been visited.
    pub fn try_next(&mut self) -> Result<&'a T> {
        let item = self
            .items
            .get(self.position)
            .ok_or(PatternError::Exhausted)?;
        self.position += 1;
        Ok(item)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.items.len() - self.position
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

impl<T> ExactSizeIterator for Cursor<'_, T> {}
