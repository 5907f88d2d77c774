use crate::flight::{CityId, Flight};
use crate::forecast::Forecast;
use crate::time::Time;
use crate::timezone::TimezoneTable;
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;
use std::collections::HashMap;
use std::sync::Arc;

pub fn id(s: &str) -> Arc<str> {
    Arc::from(s)
}

pub fn add_flight(
    flights: &mut Vec<Flight>,
    flight_id: &str,
    origin_id: &str,
    destination_id: &str,
    departure: i64,
    duration: i64,
) {
    flights.push(Flight {
        id: id(flight_id),
        departure: Time(departure),
        origin: id(origin_id),
        destination: id(destination_id),
        duration,
    });
}

pub fn add_forecast(
    forecasts: &mut HashMap<CityId, Forecast>,
    city: &str,
    time: i64,
    wind: i64,
    visibility: i64,
) {
    forecasts
        .entry(id(city))
        .or_default()
        .add_forecast(Time(time), wind, visibility);
}

pub fn timezones(offsets: &[(&str, i64)]) -> TimezoneTable {
    let mut table = TimezoneTable::new();
    for (city, offset) in offsets {
        table.add_city(city, *offset);
    }
    table
}

pub fn arb_city() -> impl Strategy<Value = Arc<str>> {
    prop_oneof![
        Just(Arc::from("moscow")),
        Just(Arc::from("omsk")),
        Just(Arc::from("irkutsk")),
    ]
}

pub fn arb_flight() -> impl Strategy<Value = Flight> {
    (arb_city(), arb_city(), 0..1440i64, 10..600i64, 0..1000u32).prop_map(
        |(org, dst, dep, dur, n)| Flight {
            id: id(&format!("FL{}", n)),
            departure: Time(dep),
            origin: org,
            destination: dst,
            duration: dur,
        },
    )
}
