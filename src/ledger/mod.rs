mod client_ledger;
mod lifecycle_tracker;
#[cfg(test)]
mod tests;
mod transaction_set;

pub use client_ledger::ClientLedgerState;
pub use lifecycle_tracker::LifecycleTracker;
