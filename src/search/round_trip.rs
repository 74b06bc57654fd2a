use crate::constraints::SearchLimits;
use crate::itinerary::{Itinerary, RoundTrip};
use crate::search::{rank_by_price, SearchError};
use chrono::TimeDelta;

/// Pairs every outbound with every inbound that leaves at least `min_layover`
/// after the outbound lands. There is no upper bound on the stay.
///
/// Fails once more than `limits.max_itineraries` pairs would be built.
pub fn compose(
    outbound: &[Itinerary],
    inbound: &[Itinerary],
    min_layover: TimeDelta,
    limits: &SearchLimits,
) -> Result<Vec<RoundTrip>, SearchError> {
    let mut trips = Vec::new();
    for there in outbound {
        for back in inbound.iter().filter(|back| is_connected(there, back, min_layover)) {
            if trips.len() >= limits.max_itineraries {
                return Err(SearchError::ExcessSearchSpace(format!(
                    "more than {} round trips",
                    limits.max_itineraries
                )));
            }
            trips.push(RoundTrip::new(there, back));
        }
    }
    Ok(rank_by_price(trips))
}

fn is_connected(there: &Itinerary, back: &Itinerary, min_layover: TimeDelta) -> bool {
    match (there.flights.last(), back.flights.first()) {
        (Some(landing), Some(leaving)) => leaving.departure >= landing.arrival + min_layover,
        _ => false,
    }
}
