use crate::airport::AirportId;
use crate::flight::Flight;
use crate::time::DepartureWindow;
use std::sync::Arc;

/// Narrows a candidate list to flights that may extend the current path.
/// A flight is dropped as soon as any configured rule rejects it.
#[derive(Debug, Clone, Default)]
pub struct FlightFilter<'a> {
    bags: Option<u32>,
    departing_from: Option<&'a AirportId>,
    excluded_origin: Option<&'a AirportId>,
    excluded_destination: Option<&'a AirportId>,
    window: Option<DepartureWindow>,
}

impl<'a> FlightFilter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bags(mut self, bags: u32) -> Self {
        self.bags = Some(bags);
        self
    }

    pub fn departing_from(mut self, airport: &'a AirportId) -> Self {
        self.departing_from = Some(airport);
        self
    }

    pub fn exclude_origin(mut self, airport: &'a AirportId) -> Self {
        self.excluded_origin = Some(airport);
        self
    }

    pub fn exclude_destination(mut self, airport: &'a AirportId) -> Self {
        self.excluded_destination = Some(airport);
        self
    }

    pub fn window(mut self, window: Option<DepartureWindow>) -> Self {
        self.window = window;
        self
    }

    pub fn admits(&self, flight: &Flight) -> bool {
        self.bags.is_none_or(|bags| flight.bags_allowed >= bags)
            && self.departing_from.is_none_or(|ap| flight.origin == *ap)
            && self.excluded_origin.is_none_or(|ap| flight.origin != *ap)
            && self.excluded_destination.is_none_or(|ap| flight.destination != *ap)
            && self.window.is_none_or(|w| w.contains(flight.departure))
    }

    /// Indices from `candidates` (into `flights`) that pass, in their original order.
    pub fn apply<I>(&self, flights: &[Arc<Flight>], candidates: I) -> Vec<usize>
    where
        I: IntoIterator<Item = usize>,
    {
        candidates
            .into_iter()
            .filter(|idx| self.admits(&flights[*idx]))
            .collect()
    }
}
