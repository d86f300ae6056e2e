//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod beer_repo;

pub use beer_repo::PostgresBeerRepository;
