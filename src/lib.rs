//! Computation and input-binding engine for Indian-market financial
//! calculators (EMI, SIP, step-up SIP, CAGR, residency status).
//!
//! The crate owns no UI: a host page supplies control handles, a calculation
//! closure, and a render closure, and the [`core::Calculator`] harness keeps
//! them synchronized.

pub mod core;
