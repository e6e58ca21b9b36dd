//! SQLite storage implementation for Simulado.
//!
//! Implements the repository traits defined in `simulado-core` on top of
//! Diesel + SQLite. Reads go through an r2d2 pool; every mutation is funneled
//! through a single writer actor that wraps each job in an immediate
//! transaction.

pub mod ambitions;
pub mod db;
pub mod errors;
pub mod schema;
pub mod simulations;
pub mod users;

pub use errors::StorageError;
