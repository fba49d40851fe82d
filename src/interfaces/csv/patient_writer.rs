use crate::domain::patient::PatientRecord;
use crate::error::Result;
use std::io::Write;

/// Writes patient records as CSV with a `name,age,tier` header.
pub struct PatientWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> PatientWriter<W> {
    /// Creates a new `PatientWriter` over any `Write` sink (e.g., File, Stdout).
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Writes every record in order and returns how many were written.
    pub fn write_patients(
        &mut self,
        patients: impl IntoIterator<Item = PatientRecord>,
    ) -> Result<usize> {
        let mut written = 0;
        for patient in patients {
            self.writer.serialize(&patient)?;
            written += 1;
        }
        self.writer.flush()?;
        Ok(written)
    }
}
