#[cfg(test)]
use serde::Deserialize;
use serde::Serialize;

use crate::models::EventType;
use crate::types::{Amount, ClientId, TransactionId};

/// A single row of the generated ledger stream.
///
/// For deposits and withdrawals `transaction_id` is freshly minted and `amount` is set.
/// Disputes, resolves and chargebacks reference an earlier deposit of the same client
/// and leave `amount` empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
pub struct Event {
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(rename = "client")]
    pub client_id: ClientId,
    #[serde(rename = "tx")]
    pub transaction_id: TransactionId,
    pub amount: Option<Amount>
}

impl Event {
    pub fn deposit(client_id: ClientId, transaction_id: TransactionId, amount: Amount) -> Self {
        Self::with_amount(EventType::Deposit, client_id, transaction_id, amount)
    }

    pub fn withdrawal(client_id: ClientId, transaction_id: TransactionId, amount: Amount) -> Self {
        Self::with_amount(EventType::Withdrawal, client_id, transaction_id, amount)
    }

    pub fn dispute(client_id: ClientId, transaction_id: TransactionId) -> Self {
        Self::referencing(EventType::Dispute, client_id, transaction_id)
    }

    pub fn resolve(client_id: ClientId, transaction_id: TransactionId) -> Self {
        Self::referencing(EventType::Resolve, client_id, transaction_id)
    }

    pub fn chargeback(client_id: ClientId, transaction_id: TransactionId) -> Self {
        Self::referencing(EventType::Chargeback, client_id, transaction_id)
    }

    fn with_amount(event_type: EventType, client_id: ClientId, transaction_id: TransactionId, amount: Amount) -> Self {
        debug_assert!(event_type.mints_transaction(), "[{event_type}] does not carry an amount");
        Self { event_type, client_id, transaction_id, amount: Some(amount) }
    }

    fn referencing(event_type: EventType, client_id: ClientId, transaction_id: TransactionId) -> Self {
        debug_assert!(!event_type.mints_transaction(), "[{event_type}] must reference an existing deposit");
        Self { event_type, client_id, transaction_id, amount: None }
    }
}
