use crate::schedule::schedule::Schedule;
use crate::timezone::TimezoneTable;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

mod error;
mod flight;
mod forecast;
mod report;
mod schedule;
mod status;
mod time;
mod timezone;

#[derive(Parser)]
struct Args {
    /// Path to the JSON file with flights and forecasts
    #[arg(short, long, value_name = "FILE", default_value = "flights_and_forecast.json")]
    file: PathBuf,

    /// JSON object mapping city names to UTC offsets, replaces the built-in table
    #[arg(short, long, value_name = "FILE")]
    timezones: Option<PathBuf>,

    /// Render the results as a table
    #[arg(long)]
    table: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let timezones = match &args.timezones {
        Some(path) => match TimezoneTable::load_from_file(path) {
            Ok(table) => table,
            Err(e) => {
                error!("failed to load timezones from {}: {}", path.display(), e);
                println!("{}", e.user_message());
                return;
            }
        },
        None => TimezoneTable::builtin(),
    };
    debug!(cities = timezones.len(), "timezone table ready");

    let schedule = match Schedule::load_from_file(&args.file) {
        Ok(schedule) => schedule,
        Err(e) => {
            error!("{}", e);
            println!("{}", e.user_message());
            return;
        }
    };

    let verdicts = schedule.evaluate(&timezones);
    if args.table {
        println!("{}", report::table(&verdicts));
    } else if let Err(e) = report::write_lines(&mut io::stdout().lock(), &verdicts) {
        if e.kind() != io::ErrorKind::BrokenPipe {
            error!("failed to write report: {}", e);
        }
    }
}
