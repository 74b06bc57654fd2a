use std::sync::Arc;

pub type AirportId = Arc<str>;
