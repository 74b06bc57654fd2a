use crate::catalog::Catalog;
use crate::constraints::{SearchConstraints, SearchLimits};
use crate::flight::Flight;
use crate::itinerary::Trip;
use crate::time::{hours, TIMESTAMP_FORMAT};
use chrono::{NaiveDateTime, TimeDelta};
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;
use std::sync::Arc;

pub fn id(s: &str) -> Arc<str> {
    Arc::from(s)
}

pub fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).unwrap()
}

#[allow(clippy::too_many_arguments)]
pub fn add_flight(
    flights: &mut Vec<Flight>,
    flight_no: &str,
    origin: &str,
    destination: &str,
    departure: &str,
    arrival: &str,
    base_price: f64,
    bag_price: f64,
    bags_allowed: u32,
) {
    flights.push(Flight {
        flight_no: id(flight_no),
        origin: id(origin),
        destination: id(destination),
        departure: at(departure),
        arrival: at(arrival),
        base_price,
        bag_price,
        bags_allowed,
    });
}

/// One-hour minimum and six-hour maximum layover, nothing else set.
pub fn layovers() -> SearchConstraints {
    SearchConstraints {
        min_layover: Some(hours(1)),
        max_layover: Some(hours(6)),
        ..SearchConstraints::default()
    }
}

pub fn numbers<T: Trip>(trip: &T) -> Vec<&str> {
    trip.flights().iter().map(|f| &*f.flight_no).collect()
}

pub fn arb_airport() -> impl Strategy<Value = Arc<str>> {
    prop_oneof![
        Just(id("AP_1")),
        Just(id("AP_2")),
        Just(id("AP_3")),
        Just(id("AP_4")),
    ]
}

pub fn arb_flight() -> impl Strategy<Value = Flight> {
    (
        0..1000u32,
        arb_airport(),
        arb_airport(),
        0..(3 * 24 * 60i64),
        30..600i64,
        0..400u32,
        0..60u32,
        0..4u32,
    )
        .prop_filter("origin and destination differ", |(_, org, dst, ..)| org != dst)
        .prop_map(|(n, org, dst, dep, dur, base, bag, bags)| {
            let departure = at("2021-09-01T00:00:00") + TimeDelta::minutes(dep);
            Flight {
                flight_no: id(&format!("FL{}", n)),
                origin: org,
                destination: dst,
                departure,
                arrival: departure + TimeDelta::minutes(dur),
                base_price: f64::from(base) + 0.5,
                bag_price: f64::from(bag),
                bags_allowed: bags,
            }
        })
}

pub fn arb_catalog() -> impl Strategy<Value = Catalog> {
    proptest::collection::vec(arb_flight(), 1..25).prop_map(Catalog::new)
}

pub fn arb_constraints() -> impl Strategy<Value = SearchConstraints> {
    (
        0..3u32,
        0..3u32,
        2..8u32,
        proptest::option::of(0..3usize),
        proptest::option::of(1..30i64),
    )
        .prop_map(|(bags, min, max, stops, duration)| SearchConstraints {
            bags,
            min_layover: Some(hours(min)),
            max_layover: Some(hours(max)),
            max_stops: stops,
            max_trip_duration: duration.map(TimeDelta::hours),
            limits: SearchLimits {
                max_legs: 32,
                ..SearchLimits::default()
            },
            ..SearchConstraints::default()
        })
}
