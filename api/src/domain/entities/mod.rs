//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod beer;

pub use beer::{Beer, BeerId, BeerInput, BeerStyle};
