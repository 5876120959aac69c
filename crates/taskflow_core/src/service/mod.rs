//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep view callers decoupled from store details.

pub mod settings_service;
pub mod task_service;
