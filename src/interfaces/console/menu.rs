use crate::application::admission::{AdmissionService, PatientListing};
use crate::domain::billing::base_amount;
use crate::domain::patient::Tier;
use crate::error::{AdmissionError, Result};
use std::io::{BufRead, Write};
use tracing::warn;

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Presentation settings for the console.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Printed in front of every amount.
    pub currency: String,
    /// Emit ANSI clear-screen sequences between screens.
    pub clear_screen: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            currency: "₹".to_string(),
            clear_screen: false,
        }
    }
}

/// Menu-driven front end for an `AdmissionService`.
///
/// Reads raw lines from any `BufRead` source (stdin, a byte slice in tests)
/// and writes screens to any `Write` sink. End of input ends the session.
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
    config: ConsoleConfig,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, config: ConsoleConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Runs the main menu until the user exits or input runs out.
    pub fn run(&mut self, service: &mut AdmissionService) -> Result<()> {
        loop {
            self.clear()?;
            writeln!(self.output, "====================================")?;
            writeln!(self.output, "   HOSPITAL MANAGEMENT SYSTEM")?;
            writeln!(self.output, "====================================")?;
            writeln!(self.output, "\n1. Admit Patient")?;
            writeln!(self.output, "2. View All Patients")?;
            writeln!(self.output, "3. Exit")?;

            let Some(choice) = self.prompt("\nEnter Choice: ")? else {
                break;
            };

            match choice.as_str() {
                "1" => self.admit_patient(service)?,
                "2" => self.view_patients(service)?,
                "3" => {
                    writeln!(self.output, "\nThank you!")?;
                    break;
                }
                _ => {
                    writeln!(self.output, "Invalid choice!")?;
                    self.pause()?;
                }
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn admit_patient(&mut self, service: &mut AdmissionService) -> Result<()> {
        self.clear()?;
        writeln!(self.output, "=== ADMIT PATIENT ===\n")?;

        let name = self.prompt("Enter Name: ")?.unwrap_or_default();
        let age = self.prompt("Enter Age: ")?.unwrap_or_default();

        writeln!(self.output, "\nSelect Type:")?;
        writeln!(self.output, "1. Regular")?;
        writeln!(self.output, "2. Emergency")?;
        writeln!(self.output, "3. ICU")?;
        let tier_choice = self.prompt("Choice: ")?.unwrap_or_default();

        writeln!(
            self.output,
            "\nBase Bill: {}{}",
            self.config.currency,
            base_amount(Tier::from_choice(&tier_choice))
        )?;
        writeln!(self.output, "\nSelect Billing Type:")?;
        writeln!(self.output, "1. Normal")?;
        writeln!(self.output, "2. Insurance (20% off)")?;
        let billing_choice = self.prompt("Choice: ")?.unwrap_or_default();
        self.output.flush()?;

        match service.admit(&name, &age, &tier_choice, &billing_choice) {
            Ok(bill) => {
                writeln!(self.output, "\n--- BILL DETAILS ---")?;
                writeln!(self.output, "Patient-Name: {}", bill.patient_name)?;
                writeln!(self.output, "Type: {}", bill.tier)?;
                writeln!(
                    self.output,
                    "Final Bill: {}{}",
                    self.config.currency, bill.final_amount
                )?;
                writeln!(self.output, "\n✓ Patient admitted successfully!")?;
            }
            Err(e @ AdmissionError::ValidationError { .. }) => {
                warn!(error = %e, "admission rejected");
                writeln!(self.output, "\nAdmission rejected: {e}")?;
            }
            Err(e) => return Err(e),
        }

        self.pause()
    }

    fn view_patients(&mut self, service: &AdmissionService) -> Result<()> {
        self.clear()?;
        writeln!(self.output, "=== ALL PATIENTS ===\n")?;

        match service.list_patients() {
            PatientListing::NoPatients => writeln!(self.output, "No patients found.")?,
            PatientListing::Patients(roster) => {
                for (i, patient) in roster.iter().enumerate() {
                    writeln!(
                        self.output,
                        "{}. Name: {} | Age: {} | Type: {}",
                        i + 1,
                        patient.name(),
                        patient.age(),
                        patient.tier()
                    )?;
                }
            }
        }

        self.pause()
    }

    /// Writes `label` and reads one line, without its line ending.
    /// Returns `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn pause(&mut self) -> Result<()> {
        self.prompt("\nPress Enter to continue...")?;
        writeln!(self.output)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        if self.config.clear_screen {
            write!(self.output, "{CLEAR_SCREEN}")?;
        }
        Ok(())
    }
}
