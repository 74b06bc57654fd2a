use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::Serializer;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
pub const TIME_OF_DAY_FORMAT: &str = "%H:%M:%S";
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Inclusive range of accepted departures for the next leg.
///
/// `Absolute` compares full timestamps; `TimeOfDay` ignores the date and is
/// used when a time range is given without an anchoring day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepartureWindow {
    Absolute {
        earliest: Option<NaiveDateTime>,
        latest: Option<NaiveDateTime>,
    },
    TimeOfDay {
        earliest: NaiveTime,
        latest: NaiveTime,
    },
}

impl DepartureWindow {
    pub fn between(earliest: NaiveDateTime, latest: NaiveDateTime) -> Self {
        DepartureWindow::Absolute {
            earliest: Some(earliest),
            latest: Some(latest),
        }
    }

    pub fn whole_day(day: NaiveDate) -> Self {
        Self::on_day(day, NaiveTime::MIN, end_of_day())
    }

    pub fn on_day(day: NaiveDate, earliest: NaiveTime, latest: NaiveTime) -> Self {
        Self::between(day.and_time(earliest), day.and_time(latest))
    }

    pub fn time_of_day(earliest: NaiveTime, latest: NaiveTime) -> Self {
        DepartureWindow::TimeOfDay { earliest, latest }
    }

    /// Departures allowed after landing at `arrival`. A missing minimum still
    /// forbids leaving before landing; a missing maximum leaves it open.
    pub fn layover(
        arrival: NaiveDateTime,
        min_layover: Option<TimeDelta>,
        max_layover: Option<TimeDelta>,
    ) -> Self {
        DepartureWindow::Absolute {
            earliest: Some(arrival + min_layover.unwrap_or(TimeDelta::zero())),
            latest: max_layover.map(|max| arrival + max),
        }
    }

    pub fn contains(&self, departure: NaiveDateTime) -> bool {
        match self {
            DepartureWindow::Absolute { earliest, latest } => {
                earliest.is_none_or(|from| departure >= from)
                    && latest.is_none_or(|to| departure <= to)
            }
            DepartureWindow::TimeOfDay { earliest, latest } => {
                let time = departure.time();
                time >= *earliest && time <= *latest
            }
        }
    }
}

fn end_of_day() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN)
}

pub fn hours(h: u32) -> TimeDelta {
    TimeDelta::hours(i64::from(h))
}

/// Renders a duration as `H:MM:SS`, prefixed with `N day(s), ` past 24 hours.
pub fn format_duration(duration: TimeDelta) -> String {
    let total = duration.num_seconds();
    let (days, rest) = (total.div_euclid(86_400), total.rem_euclid(86_400));
    let clock = format!("{}:{:02}:{:02}", rest / 3600, rest % 3600 / 60, rest % 60);
    match days {
        0 => clock,
        1 | -1 => format!("{} day, {}", days, clock),
        _ => format!("{} days, {}", days, clock),
    }
}

pub fn serialize_duration<S: Serializer>(duration: &TimeDelta, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_duration(*duration))
}
