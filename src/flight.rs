use crate::time::Time;
use serde::Deserialize;
use std::sync::Arc;

pub type FlightId = Arc<str>;
pub type CityId = Arc<str>;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Flight {
    #[serde(rename = "no")]
    pub id: FlightId,
    pub departure: Time,
    #[serde(rename = "from")]
    pub origin: CityId,
    #[serde(rename = "to")]
    pub destination: CityId,
    pub duration: i64,
}
