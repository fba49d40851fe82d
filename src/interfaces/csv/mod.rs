pub mod patient_writer;
