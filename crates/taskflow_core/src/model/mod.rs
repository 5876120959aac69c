//! Domain model for tasks and settings.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Validate untrusted view-layer input before it reaches a store.
//!
//! # Invariants
//! - Every task is identified by a stable, non-nil `TaskId`.
//! - Enum-valued fields are closed types; strings never reach a store.

pub mod settings;
pub mod task;
