use crate::schedule::schedule::Verdict;
use crate::status::FlightStatus;
use colored::Colorize;
use std::io;
use std::io::Write;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

pub fn line(verdict: &Verdict) -> String {
    let flight = verdict.flight;
    let label = match &verdict.outcome {
        Ok(status) => status.label().to_string(),
        Err(miss) => miss.user_message(),
    };
    format!("{} | {} -> {} | {}", flight.id, flight.origin, flight.destination, label)
}

pub fn write_lines<W: Write>(out: &mut W, verdicts: &[Verdict]) -> io::Result<()> {
    for verdict in verdicts {
        writeln!(out, "{}", line(verdict))?;
    }
    Ok(())
}

#[derive(Tabled)]
struct Row {
    #[tabled(rename = "Flight")]
    flight: String,
    #[tabled(rename = "Route")]
    route: String,
    #[tabled(rename = "Departure")]
    departure: String,
    #[tabled(rename = "Arrival")]
    arrival: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&Verdict<'_>> for Row {
    fn from(v: &Verdict<'_>) -> Self {
        let status = match &v.outcome {
            Ok(FlightStatus::Scheduled) => FlightStatus::Scheduled.label().green().to_string(),
            Ok(FlightStatus::Canceled) => FlightStatus::Canceled.label().red().to_string(),
            Err(miss) => miss.user_message().yellow().to_string(),
        };
        Row {
            flight: v.flight.id.to_string(),
            route: format!("{} -> {}", v.flight.origin, v.flight.destination),
            departure: v.departure_time.to_string(),
            arrival: v
                .arrival_time
                .map(|t| t.to_string())
                .unwrap_or_else(|| "-".to_string()),
            status,
        }
    }
}

pub fn table(verdicts: &[Verdict]) -> String {
    let rows: Vec<Row> = verdicts.iter().map(Row::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.with(Alignment::left());
    table.to_string()
}
