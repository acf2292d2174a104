//! Commercial-airport filtering.

use nearport_geo::Coordinate;
use tracing::debug;

use crate::csv::Record;
use crate::record::{AirportRecord, AirportType};

/// Narrows raw catalog rows down to commercial airport candidates.
///
/// A row is kept iff its IATA code has exactly three characters, its type
/// is `large_airport` or `medium_airport`, and both coordinate fields are
/// present and parse as finite numbers. Input order is preserved; no
/// sorting happens here.
#[must_use]
pub fn filter_commercial(records: &[Record]) -> Vec<AirportRecord> {
    let airports: Vec<AirportRecord> = records.iter().filter_map(airport_from_record).collect();

    debug!(
        total = records.len(),
        commercial = airports.len(),
        "filtered catalog to commercial airports"
    );

    airports
}

fn airport_from_record(record: &Record) -> Option<AirportRecord> {
    let iata_code = field(record, "iata_code");
    if iata_code.chars().count() != 3 {
        return None;
    }

    let airport_type: AirportType = field(record, "type").parse().ok()?;
    if !airport_type.is_commercial() {
        return None;
    }

    let coordinate = parse_coordinate(record)?;

    Some(AirportRecord {
        id: field(record, "id").to_string(),
        name: field(record, "name").to_string(),
        municipality: field(record, "municipality").to_string(),
        iso_country: field(record, "iso_country").to_string(),
        airport_type,
        iata_code: iata_code.to_string(),
        coordinate,
    })
}

fn parse_coordinate(record: &Record) -> Option<Coordinate> {
    let lat_field = field(record, "latitude_deg");
    let lon_field = field(record, "longitude_deg");
    if lat_field.is_empty() || lon_field.is_empty() {
        return None;
    }

    let latitude: f64 = lat_field.parse().ok()?;
    let longitude: f64 = lon_field.parse().ok()?;
    if !latitude.is_finite() || !longitude.is_finite() {
        return None;
    }

    Some(Coordinate::new(latitude, longitude))
}

fn field<'a>(record: &'a Record, name: &str) -> &'a str {
    record.get(name).map_or("", String::as_str)
}
