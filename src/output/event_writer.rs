use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::{Writer, WriterBuilder};

use crate::models::Event;
use crate::output::OutputError;

const HEADER: [&str; 4] = ["type", "client", "tx", "amount"];

/// Serializes events as `type,client,tx,amount` rows.
///
/// The header is written up front so that an empty run still produces a readable file.
pub struct EventWriter<W: Write> {
    writer: Writer<W>
}

impl EventWriter<BufWriter<File>> {
    /// Creates (or truncates) the file at `path`, creating missing parent directories.
    pub fn create(path: &Path) -> Result<Self, OutputError> {
        let create_error = |source| OutputError::Create { path: path.to_path_buf(), source };

        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            create_dir_all(parent).map_err(create_error)?;
        }

        let file = File::create(path).map_err(create_error)?;

        Self::new(BufWriter::new(file))
    }
}

impl<W: Write> EventWriter<W> {
    pub fn new(output: W) -> Result<Self, OutputError> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_writer(output);

        writer.write_record(HEADER)?;

        Ok(Self { writer })
    }

    pub fn write(&mut self, event: &Event) -> Result<(), OutputError> {
        self.writer.serialize(event)?;
        Ok(())
    }

    /// Flushes buffered rows and hands back the underlying output.
    pub fn finish(self) -> Result<W, OutputError> {
        self.writer.into_inner().map_err(|error| OutputError::Io(error.into_error()))
    }
}
