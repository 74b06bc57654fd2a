use crate::constraints::{SearchConstraints, SearchLimits};
use crate::time::{hours, DepartureWindow, DAY_FORMAT, TIME_OF_DAY_FORMAT};
use chrono::{NaiveDate, NaiveTime, TimeDelta};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Find every flight itinerary between two airports in a CSV dataset")]
pub struct Args {
    /// Path of the csv dataset file
    pub csv_file_path: PathBuf,

    /// Origin airport code
    pub origin: String,

    /// Destination airport code
    pub destination: String,

    /// Number of bags
    #[arg(short, long, default_value_t = 0)]
    pub bags: u32,

    /// Also search the way back and combine both into round trips
    #[arg(short = 'R', long = "return")]
    pub round_trip: bool,

    /// Minimum layover in hours
    #[arg(short = 'l', long = "min-layover-time", default_value_t = 1)]
    pub min_layover: u32,

    /// Maximum layover in hours
    #[arg(short = 'L', long = "max-layover-time", default_value_t = 6)]
    pub max_layover: u32,

    /// Outbound departure day, YYYY-MM-DD
    #[arg(short, long, value_name = "DAY")]
    pub depart_day: Option<String>,

    /// Return departure day, YYYY-MM-DD (round trips only)
    #[arg(short, long, value_name = "DAY")]
    pub return_day: Option<String>,

    /// Maximum number of stops
    #[arg(short, long)]
    pub stops: Option<u32>,

    /// Accepted outbound departure times, HH:MM:SS-HH:MM:SS
    #[arg(long, value_name = "RANGE")]
    pub outbound_range: Option<String>,

    /// Accepted return departure times, HH:MM:SS-HH:MM:SS (round trips only)
    #[arg(long, value_name = "RANGE")]
    pub return_range: Option<String>,

    /// Maximum duration of a single direction in hours
    #[arg(short, long, value_name = "HOURS")]
    pub trip_duration: Option<f64>,

    /// Write the results as JSON
    #[arg(short, long)]
    pub file: bool,

    /// Where --file writes the JSON results
    #[arg(short, long, value_name = "FILE", default_value = "results.json")]
    pub output: PathBuf,

    /// Give up on paths longer than this many legs (raised to fit --stops)
    #[arg(long, default_value_t = SearchLimits::DEFAULT_MAX_LEGS)]
    pub max_legs: usize,

    /// Give up after emitting this many itineraries per direction
    #[arg(long, default_value_t = SearchLimits::DEFAULT_MAX_ITINERARIES)]
    pub max_results: usize,

    /// Never land on an airport the itinerary already left from
    #[arg(long)]
    pub no_revisit: bool,

    /// More diagnostics on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("--{flag} must be in format YYYY-MM-DD, got {value:?}")]
    BadDay { flag: &'static str, value: String },

    #[error("--{flag} must be in format HH:MM:SS-HH:MM:SS, got {value:?}")]
    BadRange { flag: &'static str, value: String },

    #[error("--trip-duration must be a positive number of hours, got {0}")]
    BadTripDuration(f64),

    #[error("--{0} only applies to round trips, add --return")]
    ReturnOnly(&'static str),
}

fn parse_day(flag: &'static str, value: &str) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(value, DAY_FORMAT).map_err(|_| ConfigError::BadDay {
        flag,
        value: value.to_string(),
    })
}

fn parse_range(flag: &'static str, value: &str) -> Result<(NaiveTime, NaiveTime), ConfigError> {
    let bad = || ConfigError::BadRange {
        flag,
        value: value.to_string(),
    };
    let (from, to) = value.split_once('-').ok_or_else(bad)?;
    let from = NaiveTime::parse_from_str(from, TIME_OF_DAY_FORMAT).map_err(|_| bad())?;
    let to = NaiveTime::parse_from_str(to, TIME_OF_DAY_FORMAT).map_err(|_| bad())?;
    Ok((from, to))
}

/// A day anchors the window to dates; a bare time range matches any day.
fn departure_window(
    day: Option<NaiveDate>,
    range: Option<(NaiveTime, NaiveTime)>,
) -> Option<DepartureWindow> {
    match (day, range) {
        (Some(day), Some((from, to))) => Some(DepartureWindow::on_day(day, from, to)),
        (Some(day), None) => Some(DepartureWindow::whole_day(day)),
        (None, Some((from, to))) => Some(DepartureWindow::time_of_day(from, to)),
        (None, None) => None,
    }
}

fn trip_duration(value: f64) -> Result<TimeDelta, ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::BadTripDuration(value));
    }
    TimeDelta::try_milliseconds((value * 3_600_000.0).round() as i64)
        .ok_or(ConfigError::BadTripDuration(value))
}

impl TryFrom<&Args> for SearchConstraints {
    type Error = ConfigError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        if !args.round_trip {
            if args.return_day.is_some() {
                return Err(ConfigError::ReturnOnly("return-day"));
            }
            if args.return_range.is_some() {
                return Err(ConfigError::ReturnOnly("return-range"));
            }
        }

        let depart_day = args.depart_day.as_deref().map(|d| parse_day("depart-day", d)).transpose()?;
        let return_day = args.return_day.as_deref().map(|d| parse_day("return-day", d)).transpose()?;
        let outbound_range = args
            .outbound_range
            .as_deref()
            .map(|r| parse_range("outbound-range", r))
            .transpose()?;
        let return_range = args
            .return_range
            .as_deref()
            .map(|r| parse_range("return-range", r))
            .transpose()?;

        let max_stops = args.stops.map(|s| s as usize);
        // an explicit stop limit always fits under the leg ceiling
        let max_legs = max_stops.map_or(args.max_legs, |stops| args.max_legs.max(stops + 1));

        Ok(SearchConstraints {
            bags: args.bags,
            min_layover: Some(hours(args.min_layover)),
            max_layover: Some(hours(args.max_layover)),
            max_stops,
            max_trip_duration: args.trip_duration.map(trip_duration).transpose()?,
            outbound_window: departure_window(depart_day, outbound_range),
            return_window: departure_window(return_day, return_range),
            forbid_revisits: args.no_revisit,
            limits: SearchLimits {
                max_legs,
                max_itineraries: args.max_results,
            },
        })
    }
}
