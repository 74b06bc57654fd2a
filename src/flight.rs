use crate::airport::AirportId;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::sync::Arc;
use tabled::Tabled;

pub type FlightId = Arc<str>;

#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct Flight {
    pub flight_no: FlightId,
    pub origin: AirportId,
    pub destination: AirportId,
    pub departure: NaiveDateTime,
    pub arrival: NaiveDateTime,
    pub base_price: f64,
    pub bag_price: f64,
    pub bags_allowed: u32,
}

impl Flight {
    pub fn price_for(&self, bags: u32) -> f64 {
        self.base_price + self.bag_price * f64::from(bags)
    }
}
