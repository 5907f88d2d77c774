use crate::error::{LoadError, LookupMiss};
use crate::flight::{CityId, Flight};
use crate::forecast::Forecast;
use crate::status::FlightStatus;
use crate::status::FlightStatus::Scheduled;
use crate::time::Time;
use crate::timezone::TimezoneTable;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};

/// Outcome of checking one flight against the forecasts.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict<'a> {
    pub flight: &'a Flight,
    pub departure_time: Time,
    pub arrival_time: Option<Time>,
    pub outcome: Result<FlightStatus, LookupMiss>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schedule {
    pub flights: Vec<Flight>,
    pub forecasts: HashMap<CityId, Forecast>,
}

impl Schedule {
    pub fn new(flights: Vec<Flight>, forecasts: HashMap<CityId, Forecast>) -> Schedule {
        Schedule { flights, forecasts }
    }

    pub fn load_from_file(path: &Path) -> Result<Self, LoadError> {
        let file = File::open(path).map_err(|e| LoadError::open(path.to_path_buf(), e))?;
        let schedule = Schedule::from_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            flights = schedule.flights.len(),
            cities = schedule.forecasts.len(),
            entries = schedule.forecasts.values().map(Forecast::len).sum::<usize>(),
            "loaded schedule"
        );
        for (city, forecast) in &schedule.forecasts {
            if forecast.is_empty() {
                warn!(%city, "empty forecast");
                continue;
            }
            let scheduled = forecast.iter().filter(|(_, s)| *s == Scheduled).count();
            debug!(%city, slots = forecast.len(), scheduled, "forecast");
        }
        Ok(schedule)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        #[derive(Deserialize)]
        struct RawData {
            flights: Vec<Flight>,
            forecast: HashMap<CityId, Forecast>,
        }
        let raw: RawData = serde_json::from_reader(reader)?;

        Ok(Schedule::new(raw.flights, raw.forecast))
    }

    fn lookup(
        &self,
        flight: &Flight,
        city: &CityId,
        time: Time,
    ) -> Result<FlightStatus, LookupMiss> {
        let forecast = self.forecasts.get(city).ok_or_else(|| LookupMiss::MissingCity {
            flight: flight.id.clone(),
            city: city.clone(),
        })?;
        forecast.get_status(time).ok_or_else(|| LookupMiss::MissingTime {
            flight: flight.id.clone(),
            city: city.clone(),
            time,
        })
    }

    /// Departure plus duration plus the destination's offset from the origin.
    pub fn arrival_time(flight: &Flight, timezones: &TimezoneTable) -> Result<Time, LookupMiss> {
        timezones
            .checked_difference(&flight.destination, &flight.origin)
            .and_then(|offset| flight.duration.checked_add(offset))
            .and_then(|shift| flight.departure.checked_add(shift))
            .ok_or_else(|| LookupMiss::TimeOutOfRange {
                flight: flight.id.clone(),
            })
    }

    pub fn check(
        &self,
        flight: &Flight,
        departure_time: Time,
        arrival_time: Time,
    ) -> Result<FlightStatus, LookupMiss> {
        let departure = self.lookup(flight, &flight.origin, departure_time)?;
        let arrival = self.lookup(flight, &flight.destination, arrival_time)?;
        Ok(FlightStatus::from_flyable(
            departure == Scheduled && arrival == Scheduled,
        ))
    }

    /// One verdict per flight, in input order. A missing forecast or an
    /// unrepresentable arrival time only affects the flight it belongs to.
    pub fn evaluate(&self, timezones: &TimezoneTable) -> Vec<Verdict<'_>> {
        self.flights
            .iter()
            .map(|flight| {
                let departure_time = flight.departure;
                let arrival = Schedule::arrival_time(flight, timezones);
                let arrival_time = arrival.as_ref().ok().copied();
                let outcome = arrival.and_then(|at| self.check(flight, departure_time, at));
                match &outcome {
                    Ok(status) => debug!(
                        flight = %flight.id,
                        %departure_time,
                        ?arrival_time,
                        %status,
                        "evaluated"
                    ),
                    Err(miss) => warn!("{}", miss),
                }
                Verdict {
                    flight,
                    departure_time,
                    arrival_time,
                    outcome,
                }
            })
            .collect()
    }
}
