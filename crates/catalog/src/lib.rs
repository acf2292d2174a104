//! Airport catalog handling for Nearport.
//!
//! This crate provides:
//! - A delimited-text parser for the OurAirports catalog dump
//! - The [`AirportRecord`] value type and [`AirportType`] taxonomy
//! - Filtering of raw catalog rows down to commercial airports
//!
//! # Example
//!
//! ```
//! use nearport_catalog::{filter_commercial, parse};
//!
//! let csv = "id,type,name,latitude_deg,longitude_deg,iata_code,municipality,iso_country\n\
//!            2434,large_airport,\"London Heathrow\",51.4706,-0.461941,LHR,London,GB\n";
//!
//! let records = parse(csv).unwrap();
//! let airports = filter_commercial(&records);
//! assert_eq!(airports[0].iata_code, "LHR");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod csv;
mod error;
mod filter;
mod record;

pub use csv::{parse, Record};
pub use error::{CatalogError, Result};
pub use filter::filter_commercial;
pub use record::{AirportRecord, AirportType};
