//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{Beer, BeerId, BeerInput};
use crate::error::DomainError;

/// Repository for Beer entities
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BeerRepository: Send + Sync {
    /// Find a beer by ID
    async fn find_by_id(&self, id: &BeerId) -> Result<Option<Beer>, DomainError>;

    /// Create a new beer with server-assigned identity and timestamps
    async fn create(&self, beer: &BeerInput) -> Result<Beer, DomainError>;

    /// Replace the editable attributes of an existing beer
    ///
    /// Returns `None` when no beer has the given ID.
    async fn update(&self, id: &BeerId, beer: &BeerInput) -> Result<Option<Beer>, DomainError>;
}
