//! Repository layer abstractions and store implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate collection bookkeeping from service orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Task::validate()` before mutation.
//! - Repository APIs return semantic errors (`NotFound`, `DuplicateId`) in
//!   addition to validation errors.

pub mod task_repo;
