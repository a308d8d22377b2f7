mod event;

use std::fmt;
use std::fmt::{Display, Formatter};

#[cfg(test)]
use serde::Deserialize;
use serde::Serialize;

pub use event::Event;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Deposit,
    Withdrawal,
    Dispute,
    Resolve,
    Chargeback
}

impl EventType {
    pub const ALL: [EventType; 5] = [
        EventType::Deposit,
        EventType::Withdrawal,
        EventType::Dispute,
        EventType::Resolve,
        EventType::Chargeback
    ];

    /// Deposits and withdrawals mint a fresh transaction id and carry an amount.
    pub fn mints_transaction(&self) -> bool {
        matches!(self, EventType::Deposit | EventType::Withdrawal)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Deposit => "deposit",
            EventType::Withdrawal => "withdrawal",
            EventType::Dispute => "dispute",
            EventType::Resolve => "resolve",
            EventType::Chargeback => "chargeback"
        }
    }
}

impl Display for EventType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
