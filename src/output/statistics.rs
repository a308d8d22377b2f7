use std::collections::{BTreeMap, HashSet};

use rand::Rng;
use tracing::info;

use crate::generator::EventGenerator;
use crate::models::{Event, EventType};
use crate::types::ClientId;

/// Summary of a generated stream, reported once the run completes.
#[derive(Debug, Default)]
pub struct EventStatistics {
    counts: BTreeMap<EventType, usize>,
    clients: HashSet<ClientId>,
    total: usize
}

impl EventStatistics {
    pub fn record(&mut self, event: &Event) {
        *self.counts.entry(event.event_type).or_default() += 1;
        self.clients.insert(event.client_id);
        self.total += 1;
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn count(&self, event_type: EventType) -> usize {
        self.counts.get(&event_type).copied().unwrap_or_default()
    }

    /// Share of the stream taken by `event_type`, in percent.
    pub fn percentage(&self, event_type: EventType) -> f64 {
        if self.total == 0 {
            return 0.0;
        }

        self.count(event_type) as f64 * 100.0 / self.total as f64
    }

    pub fn distinct_clients(&self) -> usize {
        self.clients.len()
    }

    pub fn report<R: Rng>(&self, generator: &EventGenerator<R>) {
        let tracker = generator.tracker();

        info!("Generated {} events", self.total);

        for event_type in EventType::ALL {
            info!("  {event_type}: {} ({:.1}%)", self.count(event_type), self.percentage(event_type));
        }

        let deposits: usize = tracker.clients().map(|state| state.deposits().len()).sum();
        let open_disputes: usize = tracker.clients().map(|state| state.disputed().len()).sum();
        let charged_back: usize = tracker.clients().map(|state| state.charged_back_count()).sum();

        info!("Clients with transactions: {}", self.distinct_clients());
        info!("Clients with deposits: {}, deposits tracked: {deposits}", tracker.len());
        info!("Total transaction IDs used: {}", generator.last_transaction_id());
        info!("Fallback deposits: {}", generator.fallbacks());
        info!("Disputes left open: {open_disputes}, deposits charged back: {charged_back}");
    }
}
