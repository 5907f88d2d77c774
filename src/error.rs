use crate::flight::{CityId, FlightId};
use crate::time::Time;
use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("read error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed input: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl LoadError {
    pub fn open(path: PathBuf, e: io::Error) -> LoadError {
        match e.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound { path },
            _ => LoadError::Io(e),
        }
    }

    /// Text shown to the user on stdout.
    pub fn user_message(&self) -> &'static str {
        match self {
            LoadError::NotFound { .. } => "Файл не найден",
            LoadError::Io(_) | LoadError::Malformed(_) => "Ошибка чтения",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupMiss {
    #[error("flight {flight}: no forecast for {city}")]
    MissingCity { flight: FlightId, city: CityId },
    #[error("flight {flight}: no forecast for {city} at {time}")]
    MissingTime {
        flight: FlightId,
        city: CityId,
        time: Time,
    },
    #[error("flight {flight}: arrival time out of range")]
    TimeOutOfRange { flight: FlightId },
}

impl LookupMiss {
    pub fn user_message(&self) -> String {
        match self {
            LookupMiss::MissingCity { city, .. } => format!("нет прогноза: {}", city),
            LookupMiss::MissingTime { city, time, .. } => {
                format!("нет прогноза: {} ({})", city, time)
            }
            LookupMiss::TimeOutOfRange { .. } => "время прибытия вне диапазона".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_open_error_kinds() {
        let missing = LoadError::open(
            PathBuf::from("nowhere.json"),
            io::Error::from(io::ErrorKind::NotFound),
        );
        assert!(matches!(missing, LoadError::NotFound { .. }));
        assert_eq!("Файл не найден", missing.user_message());

        let denied = LoadError::open(
            PathBuf::from("locked.json"),
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(denied, LoadError::Io(_)));
        assert_eq!("Ошибка чтения", denied.user_message());
    }

    #[test]
    fn test_lookup_miss_names_flight() {
        let miss = LookupMiss::MissingTime {
            flight: Arc::from("A1"),
            city: Arc::from("omsk"),
            time: Time(163),
        };
        assert_eq!("flight A1: no forecast for omsk at 163", miss.to_string());
        assert_eq!("нет прогноза: omsk (163)", miss.user_message());
    }
}
