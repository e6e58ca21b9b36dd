//! SQLite storage implementation for ambitions.

mod model;
mod repository;

pub use model::{AmbitionDB, NewAmbitionDB};
pub use repository::AmbitionRepository;
