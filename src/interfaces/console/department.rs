use crate::domain::billing::Amount;
use crate::domain::ports::NotificationPort;
use crate::error::Result;
use std::io::Write;

/// Listener that announces admissions and bills on a text sink.
pub struct DepartmentNotifier<W: Write> {
    sink: W,
    currency: String,
}

impl<W: Write> DepartmentNotifier<W> {
    pub fn new(sink: W, currency: impl Into<String>) -> Self {
        Self {
            sink,
            currency: currency.into(),
        }
    }
}

impl<W: Write> NotificationPort for DepartmentNotifier<W> {
    fn on_patient_admitted(&mut self, name: &str) -> Result<()> {
        writeln!(self.sink, "\n[NOTIFICATION] Patient {name} has been admitted.")?;
        self.sink.flush()?;
        Ok(())
    }

    fn on_bill_generated(&mut self, name: &str, final_amount: Amount) -> Result<()> {
        writeln!(
            self.sink,
            "[NOTIFICATION] Bill of {}{final_amount} generated for {name}",
            self.currency
        )?;
        self.sink.flush()?;
        Ok(())
    }
}
