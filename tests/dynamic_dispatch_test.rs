use hospital_admissions::application::admission::{AdmissionService, PatientListing};
use hospital_admissions::domain::patient::PatientRecord;
use hospital_admissions::domain::ports::{PatientRegistry, PatientRegistryBox};
use hospital_admissions::infrastructure::in_memory::InMemoryPatientRegistry;

/// Registry backed by a plain `Vec`, defined outside the crate.
#[derive(Default)]
struct VecRegistry(Vec<PatientRecord>);

impl PatientRegistry for VecRegistry {
    fn add(&mut self, record: PatientRecord) {
        self.0.push(record);
    }

    fn all(&self) -> Box<dyn Iterator<Item = &PatientRecord> + '_> {
        Box::new(self.0.iter())
    }

    fn count(&self) -> usize {
        self.0.len()
    }
}

#[test]
fn test_registry_as_trait_object() {
    let mut registry: PatientRegistryBox = Box::new(InMemoryPatientRegistry::new());
    registry.add(PatientRecord::new("Asha", "34", "2").unwrap());

    assert_eq!(registry.count(), 1);
    assert_eq!(registry.all().next().unwrap().name(), "Asha");
}

#[test]
fn test_service_accepts_custom_registry() {
    let mut service = AdmissionService::new(Box::new(VecRegistry::default()));
    service.admit("Asha", "34", "2", "2").unwrap();
    service.admit("Raj", "70", "3", "1").unwrap();

    assert_eq!(service.patient_count(), 2);
    match service.list_patients() {
        PatientListing::Patients(roster) => assert_eq!(roster.len(), 2),
        PatientListing::NoPatients => panic!("expected two patients"),
    }
}

#[test]
fn test_boxed_registry_view_reflects_later_adds() {
    let mut registry: PatientRegistryBox = Box::new(InMemoryPatientRegistry::new());
    registry.add(PatientRecord::new("Asha", "34", "2").unwrap());
    let before: Vec<_> = registry.all().cloned().collect();

    registry.add(PatientRecord::new("Raj", "70", "1").unwrap());
    let after: Vec<_> = registry.all().cloned().collect();

    assert_eq!(before.len(), 1);
    assert_eq!(after.len(), 2);
    assert_eq!(after.last().unwrap().name(), "Raj");
}
