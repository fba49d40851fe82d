use super::patient::Tier;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::fmt;

/// A non-negative monetary amount.
///
/// Wraps `rust_decimal::Decimal` so the 0.80 insurance multiplier never
/// introduces binary rounding artifacts.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Amount(Decimal);

impl Amount {
    pub const REGULAR_RATE: Self = Self(dec!(1000));
    pub const EMERGENCY_RATE: Self = Self(dec!(3000));
    pub const ICU_RATE: Self = Self(dec!(5000));

    /// Returns `None` for negative values.
    pub fn new(value: Decimal) -> Option<Self> {
        (value >= Decimal::ZERO).then_some(Self(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

// Printed without trailing zeros: 2400.00 reads as 2400.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
pub enum BillingStrategy {
    Normal,
    Insurance,
}

impl BillingStrategy {
    const INSURANCE_FACTOR: Decimal = dec!(0.80);

    /// Exactly "2" selects insurance; anything else bills normally.
    pub fn from_choice(choice: &str) -> Self {
        match choice {
            "2" => BillingStrategy::Insurance,
            _ => BillingStrategy::Normal,
        }
    }

    pub fn apply(self, amount: Amount) -> Amount {
        match self {
            BillingStrategy::Normal => amount,
            // Both factors are non-negative so the product is too.
            BillingStrategy::Insurance => Amount(amount.0 * Self::INSURANCE_FACTOR),
        }
    }
}

impl fmt::Display for BillingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BillingStrategy::Normal => f.write_str("Normal"),
            BillingStrategy::Insurance => f.write_str("Insurance"),
        }
    }
}

/// Base rate charged for a tier.
pub fn base_amount(tier: Tier) -> Amount {
    match tier {
        Tier::Regular => Amount::REGULAR_RATE,
        Tier::Emergency => Amount::EMERGENCY_RATE,
        Tier::Icu => Amount::ICU_RATE,
    }
}

pub fn apply_strategy(amount: Amount, strategy: BillingStrategy) -> Amount {
    strategy.apply(amount)
}

/// Outcome of a single admission's billing. Not stored anywhere.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct BillResult {
    pub patient_name: String,
    pub tier: Tier,
    pub base_amount: Amount,
    pub final_amount: Amount,
    pub strategy: BillingStrategy,
}

impl BillResult {
    pub fn compute(patient_name: &str, tier: Tier, strategy: BillingStrategy) -> Self {
        let base_amount = base_amount(tier);
        Self {
            patient_name: patient_name.to_string(),
            tier,
            base_amount,
            final_amount: apply_strategy(base_amount, strategy),
            strategy,
        }
    }
}
