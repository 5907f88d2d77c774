use crate::status::FlightStatus;
use crate::time::Time;
use serde::Deserialize;
use std::collections::BTreeMap;

/// A single weather observation as it appears in the input file.
///
/// All three fields are required; unknown fields are skipped and field order
/// does not matter.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ForecastEntry {
    pub time: Time,
    pub wind: i64,
    pub visibility: i64,
}

/// Flight availability per time of day for one city.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Vec<ForecastEntry>")]
pub struct Forecast {
    statuses: BTreeMap<Time, FlightStatus>,
}

impl Forecast {
    pub const MAX_WIND: i64 = 30;
    pub const MIN_VISIBILITY: i64 = 200;

    pub fn new() -> Forecast {
        Forecast::default()
    }

    pub fn status_for(wind: i64, visibility: i64) -> FlightStatus {
        FlightStatus::from_flyable(wind <= Self::MAX_WIND && visibility >= Self::MIN_VISIBILITY)
    }

    /// Later entries for the same time replace earlier ones.
    pub fn add_forecast(&mut self, time: Time, wind: i64, visibility: i64) {
        self.statuses.insert(time, Self::status_for(wind, visibility));
    }

    pub fn get_status(&self, time: Time) -> Option<FlightStatus> {
        self.statuses.get(&time).copied()
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    /// Entries in ascending time order.
    pub fn iter(&self) -> impl Iterator<Item = (Time, FlightStatus)> + '_ {
        self.statuses.iter().map(|(time, status)| (*time, *status))
    }
}

impl From<Vec<ForecastEntry>> for Forecast {
    fn from(entries: Vec<ForecastEntry>) -> Self {
        let mut forecast = Forecast::new();
        for e in entries {
            forecast.add_forecast(e.time, e.wind, e.visibility);
        }
        forecast
    }
}
