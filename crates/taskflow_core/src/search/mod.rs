//! Task list search, filtering and ordering.
//!
//! # Responsibility
//! - Expose the pure predicate behind the task list search box.
//! - Keep result shaping (filter then sort) inside core.

pub mod filter;
pub mod order;
