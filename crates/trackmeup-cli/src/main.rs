use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use chrono::{NaiveDate, Weekday};
use clap::Parser;
use trackmeup_core::{DateRangeSpec, WeekdaySet, parse_date};
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "trackmeup",
    about = "Print one time report line per day in a date range"
)]
struct Cli {
    /// Start date (YYYY-MM-DD, prompted for if omitted)
    #[arg(long)]
    start: Option<String>,

    /// End date (YYYY-MM-DD, prompted for if omitted)
    #[arg(long)]
    end: Option<String>,

    /// Name printed at the start of every line
    #[arg(long, env = "TRACKMEUP_OWNER")]
    owner: String,

    /// Text printed after every date
    #[arg(long, env = "TRACKMEUP_LABEL", default_value = "time report")]
    label: String,

    /// Weekdays to leave out (comma-separated, e.g. sat,sun)
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "sat,sun",
        conflicts_with = "no_skip"
    )]
    skip: Vec<Weekday>,

    /// Report every day, weekends included
    #[arg(long)]
    no_skip: bool,

    /// Refuse ranges spanning more than this many days
    #[arg(long)]
    max_days: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn excluded(&self) -> WeekdaySet {
        if self.no_skip {
            WeekdaySet::new()
        } else {
            self.skip.iter().copied().collect()
        }
    }
}

/// Ask for one date on `output` and read the answer from `input`.
///
/// The answer is checked right away so a typo in the start date is reported
/// before the end date is asked for.
fn prompt_date<R: BufRead, W: Write>(input: &mut R, output: &mut W, which: &str) -> Result<String> {
    write!(output, "Enter {which} date (YYYY-MM-DD): ")?;
    output.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .with_context(|| format!("failed to read {which} date"))?;
    if read == 0 {
        bail!("no {which} date given");
    }

    let answer = line.trim().to_string();
    parse_date(&answer).with_context(|| format!("invalid {which} date"))?;
    Ok(answer)
}

/// Flag values get the same immediate check as prompted answers.
fn checked_flag_date(value: &str, which: &str) -> Result<String> {
    parse_date(value).with_context(|| format!("invalid {which} date"))?;
    Ok(value.to_string())
}

fn report_line(owner: &str, date: NaiveDate, label: &str) -> String {
    format!("{owner}  {} - {label}", date.format("%Y-%m-%d %a"))
}

fn run<R: BufRead, W: Write>(cli: &Cli, input: &mut R, output: &mut W) -> Result<usize> {
    let start = match &cli.start {
        Some(s) => checked_flag_date(s, "start")?,
        None => prompt_date(input, output, "start")?,
    };
    let end = match &cli.end {
        Some(s) => checked_flag_date(s, "end")?,
        None => prompt_date(input, output, "end")?,
    };

    let excluded = cli.excluded();
    let spec = DateRangeSpec::build(&start, &end, excluded)
        .with_context(|| format!("cannot build range {start} to {end}"))?;

    let candidates = spec.candidate_count();
    if let Some(max) = cli.max_days
        && candidates > max
    {
        bail!("range {start} to {end} spans {candidates} day(s), more than --max-days {max}");
    }

    debug!("excluding {:?}", excluded.iter().collect::<Vec<_>>());

    let days = spec.generate();
    info!(
        "{start} to {end}: {} of {candidates} day(s) reported",
        days.len()
    );

    for day in &days {
        writeln!(output, "{}", report_line(&cli.owner, *day, &cli.label))?;
    }

    Ok(days.len())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&cli, &mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}
