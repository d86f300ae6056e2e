//! Beer service
//!
//! Handles lookup, creation and replacement of beers.

use std::sync::Arc;

use crate::domain::entities::{Beer, BeerId, BeerInput};
use crate::domain::ports::BeerRepository;
use crate::error::AppError;

/// Service for managing beers
pub struct BeerService<BR>
where
    BR: BeerRepository,
{
    beers: Arc<BR>,
}

impl<BR> BeerService<BR>
where
    BR: BeerRepository,
{
    pub fn new(beers: Arc<BR>) -> Self {
        Self { beers }
    }

    /// Get a beer by ID, failing with `NotFound` when it does not exist
    pub async fn get_by_id(&self, id: &BeerId) -> Result<Beer, AppError> {
        self.beers
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Beer {} not found", id)))
    }

    /// Create a new beer
    pub async fn save_new(&self, input: &BeerInput) -> Result<Beer, AppError> {
        let beer = self.beers.create(input).await?;
        tracing::info!(beer_id = %beer.id, beer_name = %beer.beer_name, "Created beer");
        Ok(beer)
    }

    /// Replace the editable attributes of a beer
    ///
    /// Updating an unknown beer is not an error; the miss is only logged.
    pub async fn update(&self, id: &BeerId, input: &BeerInput) -> Result<(), AppError> {
        match self.beers.update(id, input).await? {
            Some(beer) => {
                tracing::info!(beer_id = %id, version = beer.version, "Updated beer");
            }
            None => {
                tracing::debug!(beer_id = %id, "Update skipped, beer not found");
            }
        }
        Ok(())
    }
}
