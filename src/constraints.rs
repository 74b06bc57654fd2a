use crate::time::DepartureWindow;
use chrono::TimeDelta;

/// Ceilings that stop a runaway search instead of letting it enumerate forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    pub max_legs: usize,
    pub max_itineraries: usize,
}

impl SearchLimits {
    pub const DEFAULT_MAX_LEGS: usize = 12;
    pub const DEFAULT_MAX_ITINERARIES: usize = 100_000;
}

impl Default for SearchLimits {
    fn default() -> Self {
        SearchLimits {
            max_legs: Self::DEFAULT_MAX_LEGS,
            max_itineraries: Self::DEFAULT_MAX_ITINERARIES,
        }
    }
}

/// Limits for a single search call. Any `None` bound is unconstrained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchConstraints {
    pub bags: u32,
    pub min_layover: Option<TimeDelta>,
    pub max_layover: Option<TimeDelta>,
    pub max_stops: Option<usize>,
    pub max_trip_duration: Option<TimeDelta>,
    pub outbound_window: Option<DepartureWindow>,
    pub return_window: Option<DepartureWindow>,
    /// Reject any leg that lands on an airport the path already left from.
    pub forbid_revisits: bool,
    pub limits: SearchLimits,
}

impl SearchConstraints {
    pub fn within_stops(&self, stops: usize) -> bool {
        self.max_stops.is_none_or(|max| stops <= max)
    }

    pub fn within_duration(&self, elapsed: TimeDelta) -> bool {
        self.max_trip_duration.is_none_or(|max| elapsed <= max)
    }

    pub fn return_layover(&self) -> TimeDelta {
        self.min_layover.unwrap_or(TimeDelta::zero())
    }
}
