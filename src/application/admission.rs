use crate::domain::billing::{Amount, BillResult, BillingStrategy};
use crate::domain::patient::PatientRecord;
use crate::domain::ports::{NotificationPortBox, PatientRegistry, PatientRegistryBox};
use crate::error::Result;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy)]
enum Event<'a> {
    PatientAdmitted { name: &'a str },
    BillGenerated { name: &'a str, amount: Amount },
}

impl Event<'_> {
    fn kind(&self) -> &'static str {
        match self {
            Event::PatientAdmitted { .. } => "patient_admitted",
            Event::BillGenerated { .. } => "bill_generated",
        }
    }
}

/// Result of `AdmissionService::list_patients`.
pub enum PatientListing<'a> {
    NoPatients,
    Patients(Roster<'a>),
}

/// A restartable view over the registry in admission order.
///
/// Each call to `iter` starts from the first patient and yields owned
/// snapshots.
#[derive(Clone, Copy)]
pub struct Roster<'a> {
    registry: &'a dyn PatientRegistry,
}

impl<'a> Roster<'a> {
    pub fn iter(&self) -> impl Iterator<Item = PatientRecord> + 'a {
        self.registry.all().cloned()
    }

    pub fn len(&self) -> usize {
        self.registry.count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Orchestrates admissions: builds the record, bills it, stores it and tells
/// every registered listener.
///
/// The service holds no state besides the registry and its listeners.
pub struct AdmissionService {
    registry: PatientRegistryBox,
    listeners: Vec<NotificationPortBox>,
}

impl AdmissionService {
    /// Creates a new `AdmissionService` over the given registry with no
    /// listeners.
    pub fn new(registry: PatientRegistryBox) -> Self {
        Self {
            registry,
            listeners: Vec::new(),
        }
    }

    /// Listeners are notified in registration order.
    pub fn register_listener(&mut self, listener: NotificationPortBox) {
        self.listeners.push(listener);
    }

    /// Admits a patient and returns the bill.
    ///
    /// Input is validated and the bill computed before anything is stored, so
    /// a `ValidationError` leaves the registry untouched.
    pub fn admit(
        &mut self,
        name: &str,
        age: &str,
        tier_choice: &str,
        billing_choice: &str,
    ) -> Result<BillResult> {
        let record = PatientRecord::new(name, age, tier_choice)?;
        let bill = BillResult::compute(
            record.name(),
            record.tier(),
            BillingStrategy::from_choice(billing_choice),
        );

        self.registry.add(record);
        info!(
            patient = %bill.patient_name,
            tier = %bill.tier,
            registered = self.registry.count(),
            "patient admitted"
        );
        self.publish(Event::PatientAdmitted {
            name: &bill.patient_name,
        });

        info!(
            patient = %bill.patient_name,
            strategy = %bill.strategy,
            base = %bill.base_amount,
            amount = %bill.final_amount,
            "bill generated"
        );
        self.publish(Event::BillGenerated {
            name: &bill.patient_name,
            amount: bill.final_amount,
        });

        Ok(bill)
    }

    pub fn list_patients(&self) -> PatientListing<'_> {
        if self.registry.count() == 0 {
            PatientListing::NoPatients
        } else {
            PatientListing::Patients(Roster {
                registry: &*self.registry,
            })
        }
    }

    pub fn patient_count(&self) -> usize {
        self.registry.count()
    }

    fn publish(&mut self, event: Event<'_>) {
        for (index, listener) in self.listeners.iter_mut().enumerate() {
            let outcome = match event {
                Event::PatientAdmitted { name } => listener.on_patient_admitted(name),
                Event::BillGenerated { name, amount } => listener.on_bill_generated(name, amount),
            };
            if let Err(e) = outcome {
                warn!(listener = index, event = event.kind(), error = %e, "listener failed");
            }
        }
    }
}
