use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

/// One logical numeric input exposed to the user through a precise field and
/// a coarse slider. Immutable once the calculator is configured.
#[derive(Debug, Clone, PartialEq)]
pub struct InputSpec {
    pub name: String,
    pub default_value: f64,
}

impl InputSpec {
    pub fn new(name: impl Into<String>, default_value: f64) -> Self {
        Self {
            name: name.into(),
            default_value,
        }
    }
}

/// Current numeric value of every configured input. Mutated only by the
/// harness in response to a change event; unknown names read as zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueStore {
    values: BTreeMap<String, f64>,
}

impl ValueStore {
    pub fn get(&self, name: &str) -> f64 {
        self.values.get(name).copied().unwrap_or(0.0)
    }

    pub fn set(&mut self, name: &str, value: f64) {
        self.values.insert(name.to_string(), value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmiBreakdown {
    pub emi: f64,
    pub total_payment: f64,
    pub total_interest: f64,
    pub principal: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SipOutcome {
    pub invested_amount: f64,
    pub returns: f64,
    pub future_value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("loan tenure must be at least one month")]
    InvalidTenure,
}
