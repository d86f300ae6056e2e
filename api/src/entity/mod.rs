//! SeaORM entities
//!
//! Database table models. Adapters convert these into domain entities.

pub mod beers;
