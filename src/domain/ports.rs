use super::billing::Amount;
use super::patient::PatientRecord;
use crate::error::Result;

/// Ordered, append-only storage for admitted patients.
pub trait PatientRegistry {
    fn add(&mut self, record: PatientRecord);
    /// Live view of every record in insertion order.
    fn all(&self) -> Box<dyn Iterator<Item = &PatientRecord> + '_>;
    fn count(&self) -> usize;
}

/// Observer of admission events.
///
/// Listeners run synchronously on the admitting thread. An `Err` is logged by
/// the publisher and does not stop delivery to the remaining listeners.
pub trait NotificationPort {
    fn on_patient_admitted(&mut self, name: &str) -> Result<()>;
    fn on_bill_generated(&mut self, name: &str, final_amount: Amount) -> Result<()>;
}

pub type PatientRegistryBox = Box<dyn PatientRegistry>;
pub type NotificationPortBox = Box<dyn NotificationPort>;
