//! Simulado Core - domain entities, services, and traits.
//!
//! This crate contains the core business logic for Simulado: users,
//! ambitions (weighted target goals) and score simulations. It is
//! database-agnostic and defines traits that are implemented by the
//! `storage-sqlite` crate.

pub mod ambitions;
pub mod constants;
pub mod errors;
pub mod simulations;
pub mod users;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
