//! End-of-session roster export. Files are written once and never read back.

use super::csv::patient_writer::PatientWriter;
use crate::application::admission::PatientListing;
use crate::domain::patient::PatientRecord;
use crate::error::Result;
use clap::ValueEnum;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

/// Writes every admitted patient to `sink` and returns the count.
///
/// An empty listing produces an empty CSV file or an empty JSON array.
pub fn export_patients<W: Write>(
    listing: PatientListing<'_>,
    format: ExportFormat,
    mut sink: W,
) -> Result<usize> {
    let patients: Vec<PatientRecord> = match listing {
        PatientListing::NoPatients => Vec::new(),
        PatientListing::Patients(roster) => roster.iter().collect(),
    };

    match format {
        ExportFormat::Csv => PatientWriter::new(sink).write_patients(patients),
        ExportFormat::Json => {
            let count = patients.len();
            serde_json::to_writer_pretty(&mut sink, &patients)?;
            writeln!(sink)?;
            sink.flush()?;
            Ok(count)
        }
    }
}
