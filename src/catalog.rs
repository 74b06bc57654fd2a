use crate::flight::Flight;
use crate::time::TIMESTAMP_FORMAT;
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

const REQUIRED_COLUMNS: [&str; 8] = [
    "flight_no",
    "origin",
    "destination",
    "departure",
    "arrival",
    "base_price",
    "bag_price",
    "bags_allowed",
];

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("file {} does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("cannot read {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("the csv file must contain the following fields: {}; missing: {}", REQUIRED_COLUMNS.join(", "), .0.join(", "))]
    MissingColumns(Vec<&'static str>),
}

/// Why a row was left out of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowRejection {
    #[error("origin and destination are the same")]
    SameAirport,

    #[error("{0} is not in format YYYY-MM-DDTHH:MM:SS")]
    BadTimestamp(&'static str),

    #[error("arrival is before departure")]
    ArrivesBeforeDeparture,

    #[error("{0} is not a number")]
    NotANumber(&'static str),

    #[error("{0} is not an integer")]
    NotAnInteger(&'static str),

    #[error("{0} is negative")]
    Negative(&'static str),
}

#[derive(Debug, Deserialize)]
struct FlightRow {
    flight_no: String,
    origin: String,
    destination: String,
    departure: String,
    arrival: String,
    base_price: String,
    bag_price: String,
    bags_allowed: String,
}

impl FlightRow {
    fn into_flight(self) -> Result<Flight, RowRejection> {
        if self.origin == self.destination {
            return Err(RowRejection::SameAirport);
        }
        let departure = parse_timestamp(&self.departure, "departure")?;
        let arrival = parse_timestamp(&self.arrival, "arrival")?;
        if departure > arrival {
            return Err(RowRejection::ArrivesBeforeDeparture);
        }
        let base_price = parse_price(&self.base_price, "base_price")?;
        let bag_price = parse_price(&self.bag_price, "bag_price")?;
        let bags_allowed = parse_bags(&self.bags_allowed)?;

        Ok(Flight {
            flight_no: Arc::from(self.flight_no),
            origin: Arc::from(self.origin),
            destination: Arc::from(self.destination),
            departure,
            arrival,
            base_price,
            bag_price,
            bags_allowed,
        })
    }
}

fn parse_timestamp(value: &str, field: &'static str) -> Result<NaiveDateTime, RowRejection> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|_| RowRejection::BadTimestamp(field))
}

fn parse_price(value: &str, field: &'static str) -> Result<f64, RowRejection> {
    let price = value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .ok_or(RowRejection::NotANumber(field))?;
    if price < 0.0 {
        return Err(RowRejection::Negative(field));
    }
    Ok(price)
}

fn parse_bags(value: &str) -> Result<u32, RowRejection> {
    let bags = value
        .trim()
        .parse::<i64>()
        .map_err(|_| RowRejection::NotAnInteger("bags_allowed"))?;
    u32::try_from(bags).map_err(|_| RowRejection::Negative("bags_allowed"))
}

/// Validated flights in file order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    flights: Vec<Arc<Flight>>,
}

impl Catalog {
    pub fn new(flights: Vec<Flight>) -> Catalog {
        Catalog {
            flights: flights.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn flights(&self) -> &[Arc<Flight>] {
        &self.flights
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let file = File::open(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => CatalogError::NotFound(path.to_path_buf()),
            _ => CatalogError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, CatalogError> {
        let mut reader = csv::Reader::from_reader(reader);

        let headers = reader.headers()?;
        let missing = REQUIRED_COLUMNS
            .iter()
            .filter(|column| !headers.iter().any(|h| h == **column))
            .copied()
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(CatalogError::MissingColumns(missing));
        }

        let mut flights = vec![];
        for row in reader.deserialize::<FlightRow>() {
            let row = row?;
            let (flight_no, departure) = (row.flight_no.clone(), row.departure.clone());
            match row.into_flight() {
                Ok(flight) => flights.push(flight),
                Err(reason) => info!(
                    "Flight {} departing at {} is invalid because {}",
                    flight_no, departure, reason
                ),
            }
        }

        Ok(Catalog::new(flights))
    }
}
