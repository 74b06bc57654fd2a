use crate::airport::AirportId;
use crate::flight::Flight;
use chrono::TimeDelta;
use serde::Serialize;
use std::sync::Arc;

/// Anything the ranking and the renderers can work with.
pub trait Trip {
    fn flights(&self) -> &[Arc<Flight>];
    fn origin(&self) -> &AirportId;
    fn destination(&self) -> &AirportId;
    fn bags_allowed(&self) -> u32;
    fn bags_count(&self) -> u32;
    fn total_price(&self) -> f64;
    fn travel_time(&self) -> TimeDelta;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    pub flights: Vec<Arc<Flight>>,
    pub origin: AirportId,
    pub destination: AirportId,
    pub bags_allowed: u32,
    pub bags_count: u32,
    pub total_price: f64,
    #[serde(serialize_with = "crate::time::serialize_duration")]
    pub travel_time: TimeDelta,
}

impl Itinerary {
    /// `flights` must be a non-empty connected chain.
    pub fn new(flights: Vec<Arc<Flight>>, bags_count: u32) -> Itinerary {
        debug_assert!(!flights.is_empty());
        let first = &flights[0];
        let last = &flights[flights.len() - 1];

        Itinerary {
            origin: first.origin.clone(),
            destination: last.destination.clone(),
            bags_allowed: flights.iter().map(|f| f.bags_allowed).min().unwrap_or(0),
            bags_count,
            total_price: flights.iter().map(|f| f.price_for(bags_count)).sum(),
            travel_time: last.arrival - first.departure,
            flights,
        }
    }
}

impl Trip for Itinerary {
    fn flights(&self) -> &[Arc<Flight>] {
        &self.flights
    }

    fn origin(&self) -> &AirportId {
        &self.origin
    }

    fn destination(&self) -> &AirportId {
        &self.destination
    }

    fn bags_allowed(&self) -> u32 {
        self.bags_allowed
    }

    fn bags_count(&self) -> u32 {
        self.bags_count
    }

    fn total_price(&self) -> f64 {
        self.total_price
    }

    fn travel_time(&self) -> TimeDelta {
        self.travel_time
    }
}

/// Outbound and inbound itineraries flown as one booking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundTrip {
    pub flights: Vec<Arc<Flight>>,
    pub origin: AirportId,
    pub destination: AirportId,
    pub bags_allowed: u32,
    pub bags_count: u32,
    pub total_price: f64,
    /// The longer of the two directions, not their sum.
    #[serde(serialize_with = "crate::time::serialize_duration")]
    pub travel_time: TimeDelta,
}

impl RoundTrip {
    pub fn new(outbound: &Itinerary, inbound: &Itinerary) -> RoundTrip {
        RoundTrip {
            flights: outbound.flights.iter().chain(&inbound.flights).cloned().collect(),
            origin: outbound.origin.clone(),
            destination: outbound.destination.clone(),
            bags_allowed: outbound.bags_allowed.min(inbound.bags_allowed),
            bags_count: outbound.bags_count,
            total_price: outbound.total_price + inbound.total_price,
            travel_time: outbound.travel_time.max(inbound.travel_time),
        }
    }
}

impl Trip for RoundTrip {
    fn flights(&self) -> &[Arc<Flight>] {
        &self.flights
    }

    fn origin(&self) -> &AirportId {
        &self.origin
    }

    fn destination(&self) -> &AirportId {
        &self.destination
    }

    fn bags_allowed(&self) -> u32 {
        self.bags_allowed
    }

    fn bags_count(&self) -> u32 {
        self.bags_count
    }

    fn total_price(&self) -> f64 {
        self.total_price
    }

    fn travel_time(&self) -> TimeDelta {
        self.travel_time
    }
}
