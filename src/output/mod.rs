mod errors;
mod event_writer;
mod statistics;

pub use errors::OutputError;
pub use event_writer::EventWriter;
pub use statistics::EventStatistics;
