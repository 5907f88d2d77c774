use crate::error::LoadError;
use crate::flight::CityId;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

/// UTC offsets in whole hours, keyed by city name.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct TimezoneTable {
    offsets: HashMap<CityId, i64>,
}

impl TimezoneTable {
    const BUILTIN: [(&'static str, i64); 13] = [
        ("kaliningrad", 2),
        ("moscow", 3),
        ("saint-petersburg", 3),
        ("samara", 4),
        ("yekaterinburg", 5),
        ("omsk", 6),
        ("novosibirsk", 7),
        ("krasnoyarsk", 7),
        ("irkutsk", 8),
        ("yakutsk", 9),
        ("vladivostok", 10),
        ("magadan", 11),
        ("petropavlovsk-kamchatsky", 12),
    ];

    pub fn new() -> TimezoneTable {
        TimezoneTable::default()
    }

    pub fn builtin() -> TimezoneTable {
        let mut table = TimezoneTable::new();
        for (city, offset) in Self::BUILTIN {
            table.add_city(city, offset);
        }
        table
    }

    /// Reads a JSON object of `"city": offset` pairs.
    pub fn load_from_file(path: &Path) -> Result<Self, LoadError> {
        let file = File::open(path).map_err(|e| LoadError::open(path.to_path_buf(), e))?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    pub fn add_city(&mut self, city: &str, utc_offset: i64) {
        self.offsets.insert(Arc::from(city), utc_offset);
    }

    pub fn offset(&self, city: &str) -> i64 {
        self.offsets.get(city).copied().unwrap_or(0)
    }

    /// Offset of `city_a` relative to `city_b`; unknown cities sit at UTC.
    /// Saturates at the `i64` bounds.
    pub fn get_difference(&self, city_a: &str, city_b: &str) -> i64 {
        self.offset(city_a).saturating_sub(self.offset(city_b))
    }

    pub fn checked_difference(&self, city_a: &str, city_b: &str) -> Option<i64> {
        self.offset(city_a).checked_sub(self.offset(city_b))
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }
}
