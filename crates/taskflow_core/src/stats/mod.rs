//! Derived statistics over the task collection.
//!
//! # Responsibility
//! - Compute statistics page and dashboard aggregates.
//! - Keep date-dependent classification testable by injecting the date.

pub mod summary;
