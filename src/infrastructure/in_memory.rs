use crate::domain::patient::PatientRecord;
use crate::domain::ports::PatientRegistry;

/// A `Vec`-backed patient registry.
///
/// Keeps admission order and allows duplicate names. Nothing survives the
/// process.
#[derive(Default, Clone, Debug)]
pub struct InMemoryPatientRegistry {
    patients: Vec<PatientRecord>,
}

impl InMemoryPatientRegistry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PatientRegistry for InMemoryPatientRegistry {
    fn add(&mut self, record: PatientRecord) {
        self.patients.push(record);
    }

    fn all(&self) -> Box<dyn Iterator<Item = &PatientRecord> + '_> {
        Box::new(self.patients.iter())
    }

    fn count(&self) -> usize {
        self.patients.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_registry_keeps_order() {
        let mut registry = InMemoryPatientRegistry::new();
        let first = PatientRecord::new("Asha", "34", "2").unwrap();
        let second = PatientRecord::new("Raj", "70", "3").unwrap();

        registry.add(first.clone());
        registry.add(second.clone());

        let all: Vec<_> = registry.all().cloned().collect();
        assert_eq!(all, vec![first, second]);
        assert_eq!(registry.count(), 2);
    }

    #[test]
    fn test_in_memory_registry_allows_duplicates() {
        let mut registry = InMemoryPatientRegistry::new();
        let record = PatientRecord::new("Asha", "34", "1").unwrap();

        registry.add(record.clone());
        registry.add(record);

        assert_eq!(registry.count(), 2);
        assert!(registry.all().all(|p| p.name() == "Asha"));
    }

    #[test]
    fn test_in_memory_registry_all_sees_later_adds() {
        let mut registry = InMemoryPatientRegistry::new();
        registry.add(PatientRecord::new("Asha", "34", "2").unwrap());
        assert_eq!(registry.all().count(), 1);

        registry.add(PatientRecord::new("Raj", "70", "3").unwrap());

        let names: Vec<_> = registry.all().map(|p| p.name().to_string()).collect();
        assert_eq!(names, vec!["Asha", "Raj"]);
    }

    #[test]
    fn test_in_memory_registry_empty() {
        let registry = InMemoryPatientRegistry::new();
        assert_eq!(registry.count(), 0);
        assert!(registry.all().next().is_none());
    }
}
