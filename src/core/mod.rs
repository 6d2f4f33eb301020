mod chart;
mod format;
mod formulas;
mod harness;
mod residency;
mod types;

pub use chart::{
    ChartHost, ChartRegion, SegmentSplit, proportional_split, render_breakdown,
    render_breakdown_by_key,
};
pub use format::{format_currency, format_number};
pub use formulas::{calculate_cagr, calculate_emi, calculate_sip, calculate_step_up_sip};
pub use harness::{BoundInput, Calculator, CalculatorConfig, Control, SharedControl};
pub use residency::{ResidencyAnswers, ResidencyStatus, determine_residency};
pub use types::{CalcError, EmiBreakdown, InputSpec, SipOutcome, ValueStore};
