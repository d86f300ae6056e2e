//! PostgreSQL adapter for BeerRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use uuid::Uuid;

use crate::domain::entities::{Beer, BeerId, BeerInput, BeerStyle};
use crate::domain::ports::BeerRepository;
use crate::entity::beers;
use crate::error::DomainError;

/// PostgreSQL implementation of BeerRepository
pub struct PostgresBeerRepository {
    db: DatabaseConnection,
}

impl PostgresBeerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BeerRepository for PostgresBeerRepository {
    async fn find_by_id(&self, id: &BeerId) -> Result<Option<Beer>, DomainError> {
        let result = beers::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn create(&self, beer: &BeerInput) -> Result<Beer, DomainError> {
        let now = Utc::now().fixed_offset();

        let model = beers::ActiveModel {
            id: Set(Uuid::new_v4()),
            version: Set(0),
            created_date: Set(now),
            last_modified_date: Set(now),
            beer_name: Set(beer.beer_name.clone()),
            beer_style: Set(beer.beer_style.to_string()),
            upc: Set(beer.upc),
            price: Set(beer.price),
            quantity_on_hand: Set(0),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update(&self, id: &BeerId, beer: &BeerInput) -> Result<Option<Beer>, DomainError> {
        let Some(existing) = beers::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?
        else {
            return Ok(None);
        };

        let version = existing.version + 1;
        let mut model: beers::ActiveModel = existing.into();
        model.beer_name = Set(beer.beer_name.clone());
        model.beer_style = Set(beer.beer_style.to_string());
        model.upc = Set(beer.upc);
        model.price = Set(beer.price);
        model.version = Set(version);
        model.last_modified_date = Set(Utc::now().fixed_offset());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(Some(result.into()))
    }
}

/// Convert SeaORM model to domain entity
impl From<beers::Model> for Beer {
    fn from(model: beers::Model) -> Self {
        Beer {
            id: BeerId(model.id),
            version: model.version,
            created_date: model.created_date.with_timezone(&Utc),
            last_modified_date: model.last_modified_date.with_timezone(&Utc),
            beer_name: model.beer_name,
            beer_style: model.beer_style.parse().unwrap_or(BeerStyle::Ale),
            upc: model.upc,
            price: model.price,
            quantity_on_hand: model.quantity_on_hand,
        }
    }
}
