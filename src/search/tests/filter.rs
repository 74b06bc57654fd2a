use crate::flight::Flight;
use crate::search::FlightFilter;
use crate::search::tests::utils::{add_flight, at, id};
use crate::time::DepartureWindow;
use chrono::NaiveTime;
use std::sync::Arc;

fn flights() -> Vec<Arc<Flight>> {
    let mut flights = Vec::new();
    add_flight(&mut flights, "F1", "WAW", "KRK", "2021-09-01T08:00:00", "2021-09-01T09:00:00", 50.0, 10.0, 2);
    add_flight(&mut flights, "F2", "KRK", "WAW", "2021-09-01T10:00:00", "2021-09-01T11:00:00", 50.0, 10.0, 1);
    add_flight(&mut flights, "F3", "KRK", "GDN", "2021-09-02T13:00:00", "2021-09-02T14:00:00", 50.0, 10.0, 0);
    add_flight(&mut flights, "F4", "GDN", "WAW", "2021-09-03T09:30:00", "2021-09-03T10:30:00", 50.0, 10.0, 3);
    flights.into_iter().map(Arc::new).collect()
}

fn all(flights: &[Arc<Flight>]) -> std::ops::Range<usize> {
    0..flights.len()
}

#[test]
fn test_no_rules_keeps_everything() {
    let flights = flights();
    assert_eq!(vec![0, 1, 2, 3], FlightFilter::new().apply(&flights, all(&flights)));
}

#[test]
fn test_bags_below_request_are_removed() {
    let flights = flights();
    assert_eq!(vec![0, 3], FlightFilter::new().bags(2).apply(&flights, all(&flights)));
    assert_eq!(vec![0, 1, 2, 3], FlightFilter::new().bags(0).apply(&flights, all(&flights)));
}

#[test]
fn test_airport_exclusions() {
    let flights = flights();
    let krk = id("KRK");
    let waw = id("WAW");

    assert_eq!(vec![0, 3], FlightFilter::new().exclude_origin(&krk).apply(&flights, all(&flights)));
    assert_eq!(vec![0, 2], FlightFilter::new().exclude_destination(&waw).apply(&flights, all(&flights)));
    assert_eq!(
        vec![2],
        FlightFilter::new()
            .departing_from(&krk)
            .exclude_destination(&waw)
            .apply(&flights, all(&flights))
    );
}

#[test]
fn test_absolute_window_compares_dates() {
    let flights = flights();
    let window = DepartureWindow::between(at("2021-09-01T09:00:00"), at("2021-09-02T23:59:59"));

    assert_eq!(vec![1, 2], FlightFilter::new().window(Some(window)).apply(&flights, all(&flights)));
}

#[test]
fn test_time_of_day_window_ignores_dates() {
    let flights = flights();
    let window = DepartureWindow::time_of_day(
        NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
    );

    assert_eq!(vec![1, 3], FlightFilter::new().window(Some(window)).apply(&flights, all(&flights)));
}

#[test]
fn test_only_given_candidates_are_considered() {
    let flights = flights();
    assert_eq!(vec![3, 1], FlightFilter::new().bags(1).apply(&flights, [3, 2, 1]));
    assert_eq!(vec![3], FlightFilter::new().bags(3).apply(&flights, [3, 1, 0]));
}
