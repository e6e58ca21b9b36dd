//! Ambitions module - domain models, services, and traits.
//!
//! An ambition is a user-defined target (city, course, college) with five
//! subject weights used to score simulations against it.

mod ambitions_model;
mod ambitions_service;
mod ambitions_traits;

// Re-export the public interface
pub use ambitions_model::{Ambition, AmbitionUpdate, NewAmbition};
pub use ambitions_service::AmbitionService;
pub use ambitions_traits::{AmbitionRepositoryTrait, AmbitionServiceTrait};
