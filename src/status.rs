use std::fmt;
use std::fmt::Formatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightStatus {
    Scheduled,
    Canceled,
}

impl FlightStatus {
    const LABELS: [(FlightStatus, &'static str); 2] = [
        (FlightStatus::Scheduled, "по расписанию"),
        (FlightStatus::Canceled, "отменен"),
    ];

    pub fn label(self) -> &'static str {
        Self::LABELS
            .iter()
            .find(|(status, _)| *status == self)
            .map(|(_, label)| *label)
            .unwrap_or_default()
    }

    pub fn from_flyable(flyable: bool) -> FlightStatus {
        if flyable {
            FlightStatus::Scheduled
        } else {
            FlightStatus::Canceled
        }
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
