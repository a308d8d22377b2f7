use std::collections::HashMap;

use crate::types::TransactionId;

/// Set of transaction ids with O(1) insert, remove and random-index access.
///
/// Ordering depends only on the sequence of operations applied, never on hashing, so a seeded
/// run picks the same elements every time.
#[derive(Debug, Clone, Default)]
pub(crate) struct TransactionSet {
    items: Vec<TransactionId>,
    positions: HashMap<TransactionId, usize>
}

impl TransactionSet {
    pub fn insert(&mut self, transaction_id: TransactionId) -> bool {
        if self.positions.contains_key(&transaction_id) {
            return false;
        }

        self.positions.insert(transaction_id, self.items.len());
        self.items.push(transaction_id);

        true
    }

    pub fn remove(&mut self, transaction_id: TransactionId) -> bool {
        let Some(position) = self.positions.remove(&transaction_id) else {
            return false;
        };

        self.items.swap_remove(position);

        if let Some(&moved) = self.items.get(position) {
            self.positions.insert(moved, position);
        }

        true
    }

    #[cfg(test)]
    pub fn contains(&self, transaction_id: TransactionId) -> bool {
        self.positions.contains_key(&transaction_id)
    }

    pub fn as_slice(&self) -> &[TransactionId] {
        &self.items
    }
}
