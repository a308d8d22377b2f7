use std::collections::HashSet;

use crate::ledger::transaction_set::TransactionSet;
use crate::types::TransactionId;

/// Lifecycle bookkeeping for the deposits of a single client.
///
/// Every deposit is in exactly one of three states: eligible for dispute, disputed, or charged
/// back. Resolving a dispute returns the deposit to eligible; a chargeback is terminal.
#[derive(Debug, Clone, Default)]
pub struct ClientLedgerState {
    /// Deposits in emission order.
    deposits: Vec<TransactionId>,
    /// `deposits - disputed - chargedback`, kept in step with every mutation.
    eligible: TransactionSet,
    disputed: TransactionSet,
    chargedback: HashSet<TransactionId>
}

impl ClientLedgerState {
    pub fn deposits(&self) -> &[TransactionId] {
        &self.deposits
    }

    pub fn eligible_for_dispute(&self) -> &[TransactionId] {
        self.eligible.as_slice()
    }

    pub fn disputed(&self) -> &[TransactionId] {
        self.disputed.as_slice()
    }

    pub fn charged_back_count(&self) -> usize {
        self.chargedback.len()
    }

    pub(crate) fn record_deposit(&mut self, transaction_id: TransactionId) {
        let inserted = self.eligible.insert(transaction_id);
        debug_assert!(inserted, "deposit [{transaction_id}] recorded twice");

        self.deposits.push(transaction_id);
    }

    pub(crate) fn mark_disputed(&mut self, transaction_id: TransactionId) {
        let was_eligible = self.eligible.remove(transaction_id);
        debug_assert!(was_eligible, "transaction [{transaction_id}] is not eligible for dispute");

        self.disputed.insert(transaction_id);
    }

    pub(crate) fn mark_resolved(&mut self, transaction_id: TransactionId) {
        let was_disputed = self.disputed.remove(transaction_id);
        debug_assert!(was_disputed, "transaction [{transaction_id}] is not under dispute");

        self.eligible.insert(transaction_id);
    }

    pub(crate) fn mark_chargedback(&mut self, transaction_id: TransactionId) {
        let was_disputed = self.disputed.remove(transaction_id);
        debug_assert!(was_disputed, "transaction [{transaction_id}] is not under dispute");

        self.chargedback.insert(transaction_id);
    }

    #[cfg(test)]
    pub(crate) fn holds_invariants(&self) -> bool {
        let tracked = self.eligible.as_slice().len() + self.disputed.as_slice().len() + self.chargedback.len();
        let partitioned = tracked == self.deposits.len();

        partitioned && self.deposits.iter().all(|&transaction_id| {
            let states = [
                self.eligible.contains(transaction_id),
                self.disputed.contains(transaction_id),
                self.chargedback.contains(&transaction_id)
            ];

            states.iter().filter(|&&state| state).count() == 1
        })
    }
}
