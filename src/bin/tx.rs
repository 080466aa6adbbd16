extern crate timex as lib;

use chrono::{DateTime, Utc};
use flexi_logger::{FileSpec, Logger};
use itertools::Itertools;
use lib::{Adjustor, Zone};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "tx",
    about = "Applies calendar adjustors to a date-time, e.g. `tx -a 2015-01-01 nth:mon:3`."
)]
pub struct Args {
    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,

    #[structopt(
        short = "z",
        long = "zone",
        help = "timezone: 'local', an IANA name or an offset like +05:30"
    )]
    pub zone: Option<Zone>,

    #[structopt(
        short = "a",
        long = "at",
        help = "start as YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS[.f], defaults to now"
    )]
    pub at: Option<String>,

    #[structopt(short = "v", long = "verbose", help = "print every intermediate step")]
    pub verbose: bool,

    #[structopt(
        name = "ADJUSTOR",
        help = "first-day-of-month, first-day-of-next-month, first-day-of-year, \
                last-day-of-month, last-day-of-year, first-in-month:<wd>, last-in-month:<wd>, \
                next:<wd>[:wrap], prev:<wd>[:wrap], nth:<wd>:<n>, beginning-of-day, end-of-day"
    )]
    pub adjustors: Vec<Adjustor>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &'static str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }

    let _logger = logger.start()?;

    std::panic::set_hook(Box::new(|info| {
        println!("tx ran into a fatal error!");
        println!(
            "Consider filing an issue with a log file and the backtrace below at {}",
            env!("CARGO_PKG_REPOSITORY")
        );
        println!("{}", info);
        println!("{:?}", backtrace::Backtrace::new());
    }));

    let config = lib::config::load_suitable_config(args.configfile.as_deref())?;
    let zone = args.zone.unwrap_or(config.timezone);

    let start: DateTime<Zone> = match args.at.as_deref() {
        Some(at) => zone.parse_local(at)?,
        None => Utc::now().with_timezone(&zone),
    };

    log::info!(
        "Applying [{}] to {} ({})",
        args.adjustors.iter().join(", "),
        start.naive_local(),
        zone
    );

    let format = config.format.as_str();
    let verbose = args.verbose;
    if verbose {
        println!("{:<28} {}", "start", start.format(format));
    }

    let end = Adjustor::apply_each(&args.adjustors, &start, |adjustor, current| {
        if verbose {
            println!("{:<28} {}", adjustor.to_string(), current.format(format));
        }
    });

    if !verbose {
        println!("{}", end.format(format));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panic_hook_has_a_repository() {
        assert!(env!("CARGO_PKG_REPOSITORY").starts_with("https://"));
    }

    #[test]
    fn parse_arguments() {
        let args = Args::from_iter(&["tx", "-z", "Europe/Berlin", "-a", "2015-01-01", "nth:mon:3"]);

        assert_eq!(args.zone, Some(Zone::Iana(chrono_tz::Europe::Berlin)));
        assert_eq!(args.at.as_deref(), Some("2015-01-01"));
        assert_eq!(
            args.adjustors,
            vec![Adjustor::NthDayOfWeek(chrono::Weekday::Mon, 3)]
        );
    }
}
