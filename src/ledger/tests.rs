use super::{ClientLedgerState, LifecycleTracker};
use super::transaction_set::TransactionSet;

fn sorted(transaction_ids: &[u32]) -> Vec<u32> {
    let mut transaction_ids = transaction_ids.to_vec();
    transaction_ids.sort_unstable();
    transaction_ids
}

#[test]
fn test_transaction_set_keeps_positions_consistent_after_removal() {
    let mut set = TransactionSet::default();

    assert!(set.insert(1));
    assert!(set.insert(2));
    assert!(set.insert(3));
    assert!(!set.insert(2));

    assert!(set.remove(1));
    assert!(!set.remove(1));
    assert!(set.remove(3));

    assert_eq!(set.as_slice(), &[2]);
    assert!(set.contains(2));
    assert!(!set.contains(3));
}

#[test]
fn test_unknown_client_has_no_candidates() {
    let tracker = LifecycleTracker::new();

    assert!(tracker.eligible_for_dispute(42).is_empty());
    assert!(tracker.eligible_for_resolve_or_chargeback(42).is_empty());
    assert!(tracker.client(42).is_none());
    assert!(tracker.is_empty());
}

#[test]
fn test_deposits_are_eligible_for_dispute_in_emission_order() {
    let mut tracker = LifecycleTracker::new();
    tracker.record_deposit(1, 10);
    tracker.record_deposit(1, 11);
    tracker.record_deposit(2, 12);

    assert_eq!(tracker.eligible_for_dispute(1), &[10, 11]);
    assert_eq!(tracker.eligible_for_dispute(2), &[12]);
    assert_eq!(tracker.client(1).map(ClientLedgerState::deposits), Some(&[10, 11][..]));
    assert_eq!(tracker.len(), 2);
}

#[test]
fn test_disputed_deposit_moves_from_eligible_to_disputed() {
    let mut tracker = LifecycleTracker::new();
    tracker.record_deposit(1, 10);
    tracker.record_deposit(1, 11);
    tracker.mark_disputed(1, 10);

    assert_eq!(tracker.eligible_for_dispute(1), &[11]);
    assert_eq!(tracker.eligible_for_resolve_or_chargeback(1), &[10]);
    assert!(tracker.client(1).is_some_and(|state| state.disputed().contains(&10) && state.holds_invariants()));
}

#[test]
fn test_resolved_deposit_is_disputable_again() {
    let mut tracker = LifecycleTracker::new();
    tracker.record_deposit(1, 10);
    tracker.mark_disputed(1, 10);
    tracker.mark_resolved(1, 10);

    assert_eq!(tracker.eligible_for_dispute(1), &[10]);
    assert!(tracker.eligible_for_resolve_or_chargeback(1).is_empty());

    tracker.mark_disputed(1, 10);

    assert_eq!(tracker.eligible_for_resolve_or_chargeback(1), &[10]);
}

#[test]
fn test_charged_back_deposit_is_terminal() {
    let mut tracker = LifecycleTracker::new();
    tracker.record_deposit(1, 7);
    tracker.mark_disputed(1, 7);
    tracker.mark_chargedback(1, 7);

    assert!(tracker.eligible_for_dispute(1).is_empty());
    assert!(tracker.eligible_for_resolve_or_chargeback(1).is_empty());

    let state = tracker.client(1).expect("client 1 has deposited");

    assert!(!state.disputed().contains(&7));
    assert_eq!(state.charged_back_count(), 1);
    assert!(state.holds_invariants());
}

#[test]
fn test_clients_do_not_share_lifecycle_state() {
    let mut tracker = LifecycleTracker::new();
    tracker.record_deposit(1, 1);
    tracker.record_deposit(2, 2);
    tracker.mark_disputed(1, 1);

    assert_eq!(tracker.eligible_for_dispute(2), &[2]);
    assert!(tracker.eligible_for_resolve_or_chargeback(2).is_empty());
}

#[test]
fn test_mixed_lifecycle_preserves_partition_of_deposits() {
    let mut tracker = LifecycleTracker::new();

    for transaction_id in 1..=6 {
        tracker.record_deposit(1, transaction_id);
    }

    tracker.mark_disputed(1, 2);
    tracker.mark_disputed(1, 4);
    tracker.mark_disputed(1, 6);
    tracker.mark_resolved(1, 4);
    tracker.mark_chargedback(1, 6);

    assert_eq!(sorted(tracker.eligible_for_dispute(1)), vec![1, 3, 4, 5]);
    assert_eq!(tracker.eligible_for_resolve_or_chargeback(1), &[2]);
    assert!(tracker.client(1).is_some_and(ClientLedgerState::holds_invariants));
}
