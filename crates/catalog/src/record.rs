//! Airport record types.

use std::fmt;
use std::str::FromStr;

use nearport_geo::Coordinate;
use serde::{Deserialize, Serialize};

/// Airport classification as published by the catalog source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AirportType {
    /// Major commercial airport
    LargeAirport,
    /// Regional commercial airport
    MediumAirport,
    /// General-aviation or minor airfield
    SmallAirport,
    /// Heliport
    Heliport,
    /// Seaplane base
    SeaplaneBase,
    /// Balloonport
    Balloonport,
    /// Closed facility
    Closed,
    /// Any classification not listed above
    Other,
}

impl AirportType {
    /// True for the classifications that serve scheduled commercial
    /// traffic (large and medium airports).
    #[must_use]
    pub fn is_commercial(self) -> bool {
        matches!(self, Self::LargeAirport | Self::MediumAirport)
    }

    /// The catalog's string form of this classification.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LargeAirport => "large_airport",
            Self::MediumAirport => "medium_airport",
            Self::SmallAirport => "small_airport",
            Self::Heliport => "heliport",
            Self::SeaplaneBase => "seaplane_base",
            Self::Balloonport => "balloonport",
            Self::Closed => "closed",
            Self::Other => "other",
        }
    }
}

impl FromStr for AirportType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "large_airport" => Self::LargeAirport,
            "medium_airport" => Self::MediumAirport,
            "small_airport" => Self::SmallAirport,
            "heliport" => Self::Heliport,
            "seaplane_base" => Self::SeaplaneBase,
            "balloonport" => Self::Balloonport,
            "closed" => Self::Closed,
            _ => Self::Other,
        })
    }
}

impl fmt::Display for AirportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One airport from the catalog, immutable once parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportRecord {
    /// Catalog row identifier
    pub id: String,
    /// Airport name
    pub name: String,
    /// Serving municipality (may be empty)
    pub municipality: String,
    /// ISO 3166-1 country code (may be empty)
    pub iso_country: String,
    /// Catalog classification
    pub airport_type: AirportType,
    /// Three-letter IATA code
    pub iata_code: String,
    /// Airport position
    pub coordinate: Coordinate,
}
