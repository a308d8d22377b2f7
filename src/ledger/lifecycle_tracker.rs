use std::collections::HashMap;

use tracing::trace;

use crate::ledger::ClientLedgerState;
use crate::types::{ClientId, TransactionId};

/// Authoritative per-client lifecycle state consulted before every dispute, resolve and chargeback.
///
/// Queries return the candidate slice (possibly empty) rather than failing; callers branch on
/// emptiness. Mutations assume the caller picked from the matching query, violating that is a
/// bug in the caller and is only checked in debug builds.
#[derive(Debug, Default)]
pub struct LifecycleTracker {
    clients: HashMap<ClientId, ClientLedgerState>
}

impl LifecycleTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_deposit(&mut self, client_id: ClientId, transaction_id: TransactionId) {
        self.clients.entry(client_id).or_default().record_deposit(transaction_id);
    }

    pub fn eligible_for_dispute(&self, client_id: ClientId) -> &[TransactionId] {
        self.clients.get(&client_id)
            .map(ClientLedgerState::eligible_for_dispute)
            .unwrap_or_default()
    }

    pub fn eligible_for_resolve_or_chargeback(&self, client_id: ClientId) -> &[TransactionId] {
        self.clients.get(&client_id)
            .map(ClientLedgerState::disputed)
            .unwrap_or_default()
    }

    pub fn mark_disputed(&mut self, client_id: ClientId, transaction_id: TransactionId) {
        trace!("Transaction [{transaction_id}] for client [{client_id}] disputed");
        self.state_mut(client_id).mark_disputed(transaction_id);
    }

    pub fn mark_resolved(&mut self, client_id: ClientId, transaction_id: TransactionId) {
        trace!("Transaction [{transaction_id}] for client [{client_id}] resolved");
        self.state_mut(client_id).mark_resolved(transaction_id);
    }

    pub fn mark_chargedback(&mut self, client_id: ClientId, transaction_id: TransactionId) {
        trace!("Transaction [{transaction_id}] for client [{client_id}] charged back");
        self.state_mut(client_id).mark_chargedback(transaction_id);
    }

    #[cfg(test)]
    pub fn client(&self, client_id: ClientId) -> Option<&ClientLedgerState> {
        self.clients.get(&client_id)
    }

    pub fn clients(&self) -> impl Iterator<Item = &ClientLedgerState> {
        self.clients.values()
    }

    /// Number of clients that have deposited at least once.
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    fn state_mut(&mut self, client_id: ClientId) -> &mut ClientLedgerState {
        debug_assert!(self.clients.contains_key(&client_id), "client [{client_id}] has no deposits");
        self.clients.entry(client_id).or_default()
    }
}
