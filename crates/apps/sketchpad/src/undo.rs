use std::collections::VecDeque;

/// Undo history that keeps at most `capacity` snapshots, dropping the oldest when full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedUndoStack<T> {
    capacity: usize,
    entries: VecDeque<T>,
}

impl<T> BoundedUndoStack<T> {
    /// Creates an empty stack. A zero capacity is treated as one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Pushes a snapshot, evicting the oldest one if the stack is full.
    pub fn push(&mut self, snapshot: T) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(snapshot);
    }

    /// Removes and returns the most recent snapshot.
    pub fn pop(&mut self) -> Option<T> {
        self.entries.pop_back()
    }

    /// Number of stored snapshots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there is nothing to undo.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of stored snapshots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
