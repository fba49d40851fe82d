use hospital_admissions::application::admission::AdmissionService;
use hospital_admissions::domain::billing::Amount;
use hospital_admissions::domain::ports::NotificationPort;
use hospital_admissions::error::{AdmissionError, Result};
use hospital_admissions::infrastructure::in_memory::InMemoryPatientRegistry;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    Admitted(String),
    Billed(String, Amount),
}

pub type Inbox = Rc<RefCell<Vec<Notification>>>;

/// Records every event it receives into a shared inbox.
pub struct RecordingListener {
    pub inbox: Inbox,
}

impl NotificationPort for RecordingListener {
    fn on_patient_admitted(&mut self, name: &str) -> Result<()> {
        self.inbox
            .borrow_mut()
            .push(Notification::Admitted(name.to_string()));
        Ok(())
    }

    fn on_bill_generated(&mut self, name: &str, final_amount: Amount) -> Result<()> {
        self.inbox
            .borrow_mut()
            .push(Notification::Billed(name.to_string(), final_amount));
        Ok(())
    }
}

/// Fails on every event.
pub struct BrokenListener;

impl NotificationPort for BrokenListener {
    fn on_patient_admitted(&mut self, _name: &str) -> Result<()> {
        Err(AdmissionError::NotificationError("pager offline".into()))
    }

    fn on_bill_generated(&mut self, _name: &str, _final_amount: Amount) -> Result<()> {
        Err(AdmissionError::NotificationError("pager offline".into()))
    }
}

#[allow(dead_code)]
pub fn service_with_inbox() -> (AdmissionService, Inbox) {
    let inbox = Inbox::default();
    let mut service = AdmissionService::new(Box::new(InMemoryPatientRegistry::new()));
    service.register_listener(Box::new(RecordingListener {
        inbox: Rc::clone(&inbox),
    }));
    (service, inbox)
}
