//! Held-state store for key highlights
//!
//! One flag per white key, addressed by sequential index. Sized once at
//! creation and never resized.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightStateStore {
    held: Vec<bool>,
}

impl HighlightStateStore {
    /// Create a store with every key released
    pub fn new(key_count: usize) -> Self {
        Self {
            held: vec![false; key_count],
        }
    }

    pub fn len(&self) -> usize {
        self.held.len()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    /// Set the held state of a key
    ///
    /// Returns `None` when the index is out of range (nothing is touched),
    /// otherwise whether the stored value changed.
    pub fn set(&mut self, index: usize, held: bool) -> Option<bool> {
        let slot = self.held.get_mut(index)?;
        let changed = *slot != held;
        *slot = held;
        Some(changed)
    }

    /// Held state of a key; out of range keys are never held
    pub fn is_held(&self, index: usize) -> bool {
        self.held.get(index).copied().unwrap_or(false)
    }

    /// Indices of all currently held keys, ascending
    pub fn held_keys(&self) -> Vec<usize> {
        self.held
            .iter()
            .enumerate()
            .filter_map(|(i, &held)| held.then_some(i))
            .collect()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.held
    }
}
