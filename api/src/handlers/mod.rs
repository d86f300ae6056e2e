//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod beers;

pub use beers::{get_beer_by_id, save_new_beer, update_beer_by_id, BeerDto};
