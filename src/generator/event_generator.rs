use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::trace;

use crate::config::{EventWeights, GeneratorConfig};
use crate::ledger::LifecycleTracker;
use crate::models::{Event, EventType};
use crate::sampling::AmountSampler;
use crate::types::{ClientId, TransactionId};

/// Produces a causally valid stream of ledger events.
///
/// Each step picks a client and an event type, then asks the [`LifecycleTracker`] whether the
/// event is currently legal for that client. Disputes, resolves and chargebacks without a legal
/// target are replaced by a deposit, so every step yields exactly one event.
///
/// All randomness comes from the injected `rng`; a seeded generator is fully reproducible.
pub struct EventGenerator<R: Rng> {
    rng: R,
    clients: ClientId,
    weights: EventWeights,
    chargeback_throttle: f64,
    sampler: AmountSampler,
    tracker: LifecycleTracker,
    last_transaction_id: TransactionId,
    fallbacks: usize
}

impl<R: Rng> EventGenerator<R> {
    /// Creates a generator for an already validated configuration.
    pub fn new(config: &GeneratorConfig, rng: R) -> Self {
        Self {
            rng,
            clients: config.clients,
            weights: config.weights,
            chargeback_throttle: config.chargeback_throttle,
            sampler: AmountSampler::new(&config.amounts),
            tracker: LifecycleTracker::new(),
            last_transaction_id: 0,
            fallbacks: 0
        }
    }

    /// Generates the next event for a uniformly chosen client.
    pub fn next_event(&mut self) -> Event {
        let client_id = self.rng.random_range(1..=self.clients);
        let roll: f64 = self.rng.random();
        let event_type = self.weights.select(roll);

        self.emit(client_id, event_type)
    }

    /// Emits `event_type` for `client_id`, substituting a deposit when it has no legal target.
    pub fn emit(&mut self, client_id: ClientId, event_type: EventType) -> Event {
        let attempted = match event_type {
            EventType::Deposit => Some(self.deposit(client_id)),
            EventType::Withdrawal => Some(self.withdrawal(client_id)),
            EventType::Dispute => self.dispute(client_id),
            EventType::Resolve => self.resolve(client_id),
            EventType::Chargeback => self.chargeback(client_id)
        };

        match attempted {
            Some(event) => event,
            None => {
                self.fallbacks += 1;
                trace!("No legal [{event_type}] for client [{client_id}], falling back to deposit");
                self.deposit(client_id)
            }
        }
    }

    /// Number of steps where the selected event was infeasible and a deposit was emitted instead.
    pub fn fallbacks(&self) -> usize {
        self.fallbacks
    }

    /// The highest transaction id minted so far, zero before the first deposit or withdrawal.
    pub fn last_transaction_id(&self) -> TransactionId {
        self.last_transaction_id
    }

    pub fn tracker(&self) -> &LifecycleTracker {
        &self.tracker
    }

    /// Resumes minting after `transaction_id`.
    #[cfg(test)]
    pub(super) fn with_last_transaction_id(mut self, transaction_id: TransactionId) -> Self {
        self.last_transaction_id = transaction_id;
        self
    }

    fn deposit(&mut self, client_id: ClientId) -> Event {
        let transaction_id = self.mint_transaction_id();
        let amount = self.sampler.sample(&mut self.rng);

        self.tracker.record_deposit(client_id, transaction_id);

        Event::deposit(client_id, transaction_id, amount)
    }

    fn withdrawal(&mut self, client_id: ClientId) -> Event {
        let transaction_id = self.mint_transaction_id();
        let amount = self.sampler.sample(&mut self.rng);

        Event::withdrawal(client_id, transaction_id, amount)
    }

    fn dispute(&mut self, client_id: ClientId) -> Option<Event> {
        let transaction_id = *self.tracker.eligible_for_dispute(client_id).choose(&mut self.rng)?;
        self.tracker.mark_disputed(client_id, transaction_id);

        Some(Event::dispute(client_id, transaction_id))
    }

    fn resolve(&mut self, client_id: ClientId) -> Option<Event> {
        let transaction_id = *self.tracker.eligible_for_resolve_or_chargeback(client_id).choose(&mut self.rng)?;
        self.tracker.mark_resolved(client_id, transaction_id);

        Some(Event::resolve(client_id, transaction_id))
    }

    fn chargeback(&mut self, client_id: ClientId) -> Option<Event> {
        let disputed = self.tracker.eligible_for_resolve_or_chargeback(client_id);

        if disputed.is_empty() || !self.rng.random_bool(self.chargeback_throttle) {
            return None;
        }

        let transaction_id = *disputed.choose(&mut self.rng)?;
        self.tracker.mark_chargedback(client_id, transaction_id);

        Some(Event::chargeback(client_id, transaction_id))
    }

    fn mint_transaction_id(&mut self) -> TransactionId {
        self.last_transaction_id += 1;
        self.last_transaction_id
    }
}

/// An unbounded stream of events; take as many as the run requires.
///
/// The stream only ends once the transaction id space is exhausted, which a validated
/// configuration never reaches.
impl<R: Rng> Iterator for EventGenerator<R> {
    type Item = Event;

    fn next(&mut self) -> Option<Self::Item> {
        if self.last_transaction_id == TransactionId::MAX {
            return None;
        }

        Some(self.next_event())
    }
}
