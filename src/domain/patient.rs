use crate::error::{AdmissionError, Field, Result};
use serde::Serialize;
use std::fmt;

/// Patient classification that drives the base billing rate.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
pub enum Tier {
    Regular,
    Emergency,
    #[serde(rename = "ICU")]
    Icu,
}

impl Tier {
    /// Maps a raw menu choice to a tier.
    ///
    /// Only the exact strings "1" and "2" are recognized; every other input,
    /// including "3", blank, padded and garbage, falls through to `Icu`.
    pub fn from_choice(choice: &str) -> Self {
        match choice {
            "1" => Tier::Regular,
            "2" => Tier::Emergency,
            _ => Tier::Icu,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Regular => f.write_str("Regular"),
            Tier::Emergency => f.write_str("Emergency"),
            Tier::Icu => f.write_str("ICU"),
        }
    }
}

/// An admitted patient. Immutable once built.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct PatientRecord {
    name: String,
    age: u32,
    tier: Tier,
}

impl PatientRecord {
    /// Builds a record from raw console input.
    ///
    /// The name is stored exactly as given and must not be empty. The age
    /// must parse as a non-negative integer once surrounding whitespace is
    /// removed.
    pub fn new(name: &str, age: &str, tier_choice: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(AdmissionError::ValidationError { field: Field::Name });
        }

        let age = age
            .trim()
            .parse::<u32>()
            .map_err(|_| AdmissionError::ValidationError { field: Field::Age })?;

        Ok(Self {
            name: name.to_string(),
            age,
            tier: Tier::from_choice(tier_choice),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }
}
