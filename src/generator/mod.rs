mod event_generator;

pub use event_generator::EventGenerator;
