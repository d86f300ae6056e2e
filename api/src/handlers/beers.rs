//! Beer handlers
//!
//! Endpoints for reading, creating and updating beers.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constraints::{Constrained, Constraint};
use crate::domain::entities::{Beer, BeerId, BeerInput, BeerStyle};
use crate::domain::ports::BeerRepository;
use crate::error::{AppError, DomainError};
use crate::{AppState, BEER_PATH};

/// Wire representation of a beer, used for request and response bodies.
///
/// Every field is optional so the same shape serves reads (all fields set)
/// and writes (server-assigned fields left empty). Absent fields serialize
/// as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeerDto {
    pub id: Option<Uuid>,
    pub version: Option<i32>,
    pub created_date: Option<DateTime<Utc>>,
    pub last_modified_date: Option<DateTime<Utc>>,
    pub beer_name: Option<String>,
    pub beer_style: Option<BeerStyle>,
    pub upc: Option<i64>,
    /// Serialized as a decimal string to keep its exact scale
    pub price: Option<Decimal>,
    pub quantity_on_hand: Option<i32>,
}

impl Constrained for BeerDto {
    const CONSTRAINTS: &'static [(&'static str, &'static [Constraint])] = &[
        ("id", &[Constraint::Null]),
        ("version", &[Constraint::Null]),
        ("createdDate", &[Constraint::Null]),
        ("lastModifiedDate", &[Constraint::Null]),
        ("beerName", &[Constraint::NotBlank]),
        ("beerStyle", &[Constraint::NotNull]),
        ("upc", &[Constraint::NotNull, Constraint::Positive]),
        ("price", &[Constraint::NotNull, Constraint::Positive]),
        ("quantityOnHand", &[Constraint::Positive]),
    ];
}

impl From<Beer> for BeerDto {
    fn from(beer: Beer) -> Self {
        BeerDto {
            id: Some(beer.id.0),
            version: Some(beer.version),
            created_date: Some(beer.created_date),
            last_modified_date: Some(beer.last_modified_date),
            beer_name: Some(beer.beer_name),
            beer_style: Some(beer.beer_style),
            upc: Some(beer.upc),
            price: Some(beer.price),
            quantity_on_hand: Some(beer.quantity_on_hand),
        }
    }
}

/// Server-assigned fields in the body are ignored.
impl TryFrom<BeerDto> for BeerInput {
    type Error = DomainError;

    fn try_from(dto: BeerDto) -> Result<Self, Self::Error> {
        let missing = |field: &str| DomainError::Validation(format!("{} is required", field));

        Ok(BeerInput {
            beer_name: dto.beer_name.ok_or_else(|| missing("beerName"))?,
            beer_style: dto.beer_style.ok_or_else(|| missing("beerStyle"))?,
            upc: dto.upc.ok_or_else(|| missing("upc"))?,
            price: dto.price.ok_or_else(|| missing("price"))?,
        })
    }
}

/// Query parameters for fetching a beer
#[derive(Debug, Deserialize)]
pub struct GetBeerParams {
    /// Whether the caller wants the beer cold; accepted but not acted on
    pub iscold: Option<String>,
}

/// GET /api/v1/beer/:beer_id
///
/// Get a beer by ID.
pub async fn get_beer_by_id<BR>(
    State(state): State<AppState<BR>>,
    Path(beer_id): Path<Uuid>,
    Query(params): Query<GetBeerParams>,
) -> Result<Json<BeerDto>, AppError>
where
    BR: BeerRepository,
{
    tracing::debug!(beer_id = %beer_id, iscold = ?params.iscold, "Fetching beer");

    let beer = state.beer_service.get_by_id(&BeerId(beer_id)).await?;

    Ok(Json(beer.into()))
}

/// POST /api/v1/beer/
///
/// Create a new beer. Responds with 201 and the location of the new beer.
pub async fn save_new_beer<BR>(
    State(state): State<AppState<BR>>,
    Json(request): Json<BeerDto>,
) -> Result<Response, AppError>
where
    BR: BeerRepository,
{
    let input = BeerInput::try_from(request)?;
    let beer = state.beer_service.save_new(&input).await?;

    let location = format!("{}/{}", BEER_PATH, beer.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)]).into_response())
}

/// PUT /api/v1/beer/:beer_id
///
/// Replace a beer's name, style, UPC and price. Always answers 204.
pub async fn update_beer_by_id<BR>(
    State(state): State<AppState<BR>>,
    Path(beer_id): Path<Uuid>,
    Json(request): Json<BeerDto>,
) -> Result<StatusCode, AppError>
where
    BR: BeerRepository,
{
    let input = BeerInput::try_from(request)?;
    state
        .beer_service
        .update(&BeerId(beer_id), &input)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
