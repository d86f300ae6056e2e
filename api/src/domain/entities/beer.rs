//! Beer domain entity
//!
//! Represents a beer in the brewery catalogue.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a beer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BeerId(pub Uuid);

impl BeerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BeerId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for BeerId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for BeerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Style of a beer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BeerStyle {
    Lager,
    Pilsner,
    Stout,
    Gose,
    Porter,
    Ale,
    Wheat,
    Ipa,
    PaleAle,
    Saison,
}

impl std::fmt::Display for BeerStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BeerStyle::Lager => write!(f, "LAGER"),
            BeerStyle::Pilsner => write!(f, "PILSNER"),
            BeerStyle::Stout => write!(f, "STOUT"),
            BeerStyle::Gose => write!(f, "GOSE"),
            BeerStyle::Porter => write!(f, "PORTER"),
            BeerStyle::Ale => write!(f, "ALE"),
            BeerStyle::Wheat => write!(f, "WHEAT"),
            BeerStyle::Ipa => write!(f, "IPA"),
            BeerStyle::PaleAle => write!(f, "PALE_ALE"),
            BeerStyle::Saison => write!(f, "SAISON"),
        }
    }
}

impl std::str::FromStr for BeerStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LAGER" => Ok(BeerStyle::Lager),
            "PILSNER" => Ok(BeerStyle::Pilsner),
            "STOUT" => Ok(BeerStyle::Stout),
            "GOSE" => Ok(BeerStyle::Gose),
            "PORTER" => Ok(BeerStyle::Porter),
            "ALE" => Ok(BeerStyle::Ale),
            "WHEAT" => Ok(BeerStyle::Wheat),
            "IPA" => Ok(BeerStyle::Ipa),
            "PALE_ALE" => Ok(BeerStyle::PaleAle),
            "SAISON" => Ok(BeerStyle::Saison),
            _ => Err(format!("Unknown beer style: {}", s)),
        }
    }
}

/// A beer in the catalogue
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Beer {
    pub id: BeerId,
    /// Optimistic-lock counter, bumped on every update
    pub version: i32,
    pub created_date: DateTime<Utc>,
    pub last_modified_date: DateTime<Utc>,
    pub beer_name: String,
    pub beer_style: BeerStyle,
    /// Universal product code
    pub upc: i64,
    pub price: Decimal,
    pub quantity_on_hand: i32,
}

impl Beer {
    /// Replace the client-editable attributes and bump the version
    pub fn apply(&mut self, input: &BeerInput, now: DateTime<Utc>) {
        self.beer_name = input.beer_name.clone();
        self.beer_style = input.beer_style;
        self.upc = input.upc;
        self.price = input.price;
        self.version += 1;
        self.last_modified_date = now;
    }
}

/// Client-supplied attributes of a beer, used for creation and full updates.
///
/// Identity, versioning, timestamps and stock levels are owned by the server.
#[derive(Debug, Clone, PartialEq)]
pub struct BeerInput {
    pub beer_name: String,
    pub beer_style: BeerStyle,
    pub upc: i64,
    pub price: Decimal,
}
