use crate::flight::Flight;
use crate::itinerary::Trip;
use crate::time::format_duration;
use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tabled::Table;
use tabled::settings::{Alignment, Style};

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("cannot write {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("cannot encode results: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn flights_table(flights: &[Arc<Flight>]) -> String {
    let mut table = Table::new(flights.iter().map(Arc::as_ref));
    table.with(Style::rounded());
    table.with(Alignment::left());
    table.to_string()
}

pub fn trip_summary<T: Trip>(trip: &T) -> String {
    format!(
        "{} {} -> {}  {} {}  {} {}  {} {}/{}",
        "Trip".bold(),
        trip.origin(),
        trip.destination(),
        "price".dimmed(),
        format!("{:.2}", trip.total_price()).green().bold(),
        "travel time".dimmed(),
        format_duration(trip.travel_time()).cyan(),
        "bags".dimmed(),
        trip.bags_count(),
        trip.bags_allowed(),
    )
}

pub fn print_trips<T: Trip>(trips: &[T]) {
    if trips.is_empty() {
        println!("{}", "No matching itineraries found.".yellow());
        return;
    }
    for trip in trips {
        println!("{}", trip_summary(trip));
        println!("{}\n", flights_table(trip.flights()));
    }
    println!("{} itineraries", trips.len());
}

pub fn to_json<T: Serialize>(trips: &[T]) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(trips)?)
}

pub fn write_json<T: Serialize>(trips: &[T], path: &Path) -> Result<(), RenderError> {
    let mut json = to_json(trips)?;
    json.push('\n');
    fs::write(path, json).map_err(|source| RenderError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itinerary::Itinerary;
    use chrono::NaiveDateTime;
    use serde_json::Value;

    fn itinerary() -> Itinerary {
        let at = |s| NaiveDateTime::parse_from_str(s, crate::time::TIMESTAMP_FORMAT).unwrap();
        let flights = vec![
            Flight {
                flight_no: Arc::from("AC1"),
                origin: Arc::from("AAA"),
                destination: Arc::from("CCC"),
                departure: at("2021-09-01T07:00:00"),
                arrival: at("2021-09-01T10:00:00"),
                base_price: 50.0,
                bag_price: 5.0,
                bags_allowed: 3,
            },
            Flight {
                flight_no: Arc::from("CB1"),
                origin: Arc::from("CCC"),
                destination: Arc::from("BBB"),
                departure: at("2021-09-01T11:30:00"),
                arrival: at("2021-09-02T08:15:00"),
                base_price: 70.0,
                bag_price: 8.0,
                bags_allowed: 1,
            },
        ];
        Itinerary::new(flights.into_iter().map(Arc::new).collect(), 1)
    }

    #[test]
    fn test_json_shape() {
        let json = to_json(&[itinerary()]).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        let trip = &value[0];

        assert_eq!("AAA", trip["origin"]);
        assert_eq!("BBB", trip["destination"]);
        assert_eq!(1, trip["bags_allowed"]);
        assert_eq!(1, trip["bags_count"]);
        assert_eq!(133.0, trip["total_price"]);
        assert_eq!("1 day, 1:15:00", trip["travel_time"]);
        assert_eq!("AC1", trip["flights"][0]["flight_no"]);
        assert_eq!("2021-09-01T07:00:00", trip["flights"][0]["departure"]);
        assert_eq!("2021-09-02T08:15:00", trip["flights"][1]["arrival"]);
        assert_eq!(8.0, trip["flights"][1]["bag_price"]);
    }

    #[test]
    fn test_flights_table_lists_every_leg() {
        let table = flights_table(&itinerary().flights);

        assert!(table.contains("flight_no"));
        assert!(table.contains("AC1"));
        assert!(table.contains("CB1"));
        assert!(table.contains("2021-09-02 08:15:00"));
    }

    #[test]
    fn test_summary() {
        colored::control::set_override(false);
        let summary = trip_summary(&itinerary());

        assert!(summary.contains("AAA -> BBB"));
        assert!(summary.contains("133"));
        assert!(summary.contains("1 day, 1:15:00"));
        assert!(summary.contains("1/1"));
    }
}
