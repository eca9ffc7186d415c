//! Domain records for the routine tracker.
//!
//! # Responsibility
//! - Define the canonical data structures persisted per slice.
//! - Keep field names aligned with the stored JSON contract.
//!
//! # Invariants
//! - Records carry no behavior beyond construction and serde.
//! - The slices are siloed: no record references another slice.

pub mod activity;
pub mod goal;
pub mod wellness;
