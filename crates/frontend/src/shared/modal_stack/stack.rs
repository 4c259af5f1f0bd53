//! Plain LIFO container behind `ModalStackService`.
//!
//! Holds no reactive state and never touches the DOM, so the ordering rules
//! can be exercised natively:
//!
//! - entries are only appended at the tail or removed from the tail;
//! - `pop()` on an empty stack returns `None` and changes nothing;
//! - the stacking index of an entry strictly increases with its position.

use std::sync::atomic::{AtomicU64, Ordering};

/// Stacking index of the bottom-most entry.
pub const BASE_Z_INDEX: i32 = 1000;

/// Stacking index gap between neighbouring entries (room for layers inside a frame).
pub const Z_INDEX_STEP: i32 = 10;

static NEXT_MODAL_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identity of one pushed dialog. Never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModalId(u64);

impl ModalId {
    fn next() -> Self {
        Self(NEXT_MODAL_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

/// One dialog on the stack. `content` is never inspected here.
#[derive(Debug, Clone)]
pub struct StackEntry<C> {
    pub id: ModalId,
    pub content: C,
}

/// Stacking index for the entry at `position` (0 = bottom).
pub fn z_index_for(position: usize) -> i32 {
    let position = i32::try_from(position).unwrap_or(i32::MAX / Z_INDEX_STEP);
    BASE_Z_INDEX.saturating_add(position.saturating_mul(Z_INDEX_STEP))
}

#[derive(Debug, Clone)]
pub struct ModalStack<C> {
    entries: Vec<StackEntry<C>>,
}

impl<C> Default for ModalStack<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> ModalStack<C> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append `content` as a new top entry. Identical content pushed twice
    /// yields two independent entries.
    pub fn push(&mut self, content: C) -> ModalId {
        let id = ModalId::next();
        self.entries.push(StackEntry { id, content });
        id
    }

    /// Remove the most recently pushed entry.
    pub fn pop(&mut self) -> Option<StackEntry<C>> {
        self.entries.pop()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top(&self) -> Option<&StackEntry<C>> {
        self.entries.last()
    }

    /// Whether `id` is the entry a `pop()` would remove.
    pub fn is_top(&self, id: ModalId) -> bool {
        self.top().is_some_and(|entry| entry.id == id)
    }

    /// Entries bottom-to-top paired with their stacking index.
    pub fn layers(&self) -> impl Iterator<Item = (i32, &StackEntry<C>)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(position, entry)| (z_index_for(position), entry))
    }
}
