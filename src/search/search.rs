use crate::airport::AirportId;
use crate::catalog::Catalog;
use crate::constraints::SearchConstraints;
use crate::flight::Flight;
use crate::itinerary::Itinerary;
use crate::search::{rank_by_price, FlightFilter, SearchError};
use crate::time::DepartureWindow;
use std::sync::Arc;
use tracing::debug;

/// Depth-first enumeration of every itinerary from `origin` to `destination`.
///
/// Candidate lists are index snapshots into the catalog; each level builds its
/// own list, so siblings never see each other's filtering. The committed path
/// is a stack of indices pushed before descending and popped on the way back.
pub struct ItinerarySearch<'a> {
    flights: &'a [Arc<Flight>],
    constraints: &'a SearchConstraints,
    origin: AirportId,
    destination: AirportId,
}

impl<'a> ItinerarySearch<'a> {
    pub fn new(
        catalog: &'a Catalog,
        constraints: &'a SearchConstraints,
        origin: AirportId,
        destination: AirportId,
    ) -> Self {
        ItinerarySearch {
            flights: catalog.flights(),
            constraints,
            origin,
            destination,
        }
    }

    /// `window` applies to the first leg only; later legs follow the layover bounds.
    pub fn run(&self, window: Option<DepartureWindow>) -> Result<Vec<Itinerary>, SearchError> {
        // never leave from the target or land back at the start, at any depth
        let remaining = FlightFilter::new()
            .bags(self.constraints.bags)
            .exclude_origin(&self.destination)
            .exclude_destination(&self.origin)
            .apply(self.flights, 0..self.flights.len());

        let first_legs = FlightFilter::new()
            .departing_from(&self.origin)
            .window(window)
            .apply(self.flights, remaining.iter().copied());

        debug!(
            "Searching {} -> {}: {} usable flights, {} first legs",
            self.origin,
            self.destination,
            remaining.len(),
            first_legs.len()
        );

        let mut path = Vec::new();
        let mut found = Vec::new();
        self.extend(&remaining, &first_legs, &mut path, &mut found)?;

        debug!("Found {} itineraries {} -> {}", found.len(), self.origin, self.destination);
        Ok(rank_by_price(found))
    }

    fn extend(
        &self,
        remaining: &[usize],
        candidates: &[usize],
        path: &mut Vec<usize>,
        found: &mut Vec<Itinerary>,
    ) -> Result<(), SearchError> {
        for &idx in candidates {
            path.push(idx);
            let outcome = self.advance(remaining, path, found);
            path.pop();
            outcome?;
        }
        Ok(())
    }

    fn advance(
        &self,
        remaining: &[usize],
        path: &mut Vec<usize>,
        found: &mut Vec<Itinerary>,
    ) -> Result<(), SearchError> {
        let flight = &self.flights[path[path.len() - 1]];
        let stops = path.len() - 1;
        let elapsed = flight.arrival - self.flights[path[0]].departure;

        if flight.destination == self.destination {
            if self.constraints.within_stops(stops) && self.constraints.within_duration(elapsed) {
                if found.len() >= self.constraints.limits.max_itineraries {
                    return Err(SearchError::ExcessSearchSpace(format!(
                        "more than {} itineraries",
                        self.constraints.limits.max_itineraries
                    )));
                }
                let legs = path.iter().map(|i| self.flights[*i].clone()).collect();
                found.push(Itinerary::new(legs, self.constraints.bags));
            }
            // nothing leaves the target, so there is no continuation
            return Ok(());
        }

        // any longer path would break a limit it already touches
        if !self.constraints.within_stops(stops + 1) || !self.constraints.within_duration(elapsed) {
            return Ok(());
        }

        let layover = DepartureWindow::layover(
            flight.arrival,
            self.constraints.min_layover,
            self.constraints.max_layover,
        );
        let mut next = FlightFilter::new()
            .departing_from(&flight.destination)
            .exclude_origin(&flight.origin)
            .exclude_destination(&flight.origin)
            .window(Some(layover))
            .apply(self.flights, remaining.iter().copied());
        if self.constraints.forbid_revisits {
            let visited: &[usize] = path;
            next.retain(|idx| !self.revisits(visited, &self.flights[*idx]));
        }

        if next.is_empty() {
            return Ok(());
        }
        if path.len() >= self.constraints.limits.max_legs {
            return Err(SearchError::ExcessSearchSpace(format!(
                "paths longer than {} legs",
                self.constraints.limits.max_legs
            )));
        }

        self.extend(remaining, &next, path, found)
    }

    fn revisits(&self, path: &[usize], flight: &Flight) -> bool {
        path.iter().any(|i| self.flights[*i].origin == flight.destination)
    }
}
