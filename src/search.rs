//! Itinerary search over a static flight catalog and round-trip composition.

mod filter;
mod rank;
mod round_trip;
#[allow(clippy::module_inception)]
mod search;

pub use filter::FlightFilter;
pub use rank::rank_by_price;
pub use round_trip::compose;
pub use search::ItinerarySearch;

use crate::airport::AirportId;
use crate::catalog::Catalog;
use crate::constraints::SearchConstraints;
use crate::itinerary::{Itinerary, RoundTrip};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("excess search space: {0}")]
    ExcessSearchSpace(String),
}

pub fn one_way(
    catalog: &Catalog,
    constraints: &SearchConstraints,
    origin: AirportId,
    destination: AirportId,
) -> Result<Vec<Itinerary>, SearchError> {
    let itineraries = ItinerarySearch::new(catalog, constraints, origin, destination)
        .run(constraints.outbound_window)?;
    info!("{} one-way itineraries", itineraries.len());
    Ok(itineraries)
}

pub fn round_trip(
    catalog: &Catalog,
    constraints: &SearchConstraints,
    origin: AirportId,
    destination: AirportId,
) -> Result<Vec<RoundTrip>, SearchError> {
    let outbound = ItinerarySearch::new(catalog, constraints, origin.clone(), destination.clone())
        .run(constraints.outbound_window)?;
    let inbound = ItinerarySearch::new(catalog, constraints, destination, origin)
        .run(constraints.return_window)?;
    info!("{} outbound and {} inbound itineraries", outbound.len(), inbound.len());

    let trips = compose(&outbound, &inbound, constraints.return_layover(), &constraints.limits)?;
    info!("{} round trips", trips.len());
    Ok(trips)
}
