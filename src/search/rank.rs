use crate::itinerary::Trip;

/// Stable ascending sort by total price; equal prices keep discovery order.
pub fn rank_by_price<T: Trip>(mut trips: Vec<T>) -> Vec<T> {
    trips.sort_by(|a, b| a.total_price().total_cmp(&b.total_price()));
    trips
}
