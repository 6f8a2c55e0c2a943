use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use eventide::cli::print_help;
use eventide::config::Config;
use eventide::export;
use eventide::model::parse_event;
use eventide::store::Calendar;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

fn main() -> Result<()> {
    TermLogger::init(
        LevelFilter::Info,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .ok();

    let config = Config::load_or_default();

    let mut from: NaiveDate = Utc::now().date_naive();
    let mut horizon_days = config.horizon_days;
    let mut export_path = Some(PathBuf::from(&config.export_file));
    let mut messages_file: Option<PathBuf> = None;

    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" | "help" => {
                print_help();
                return Ok(());
            }
            "--from" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| anyhow::anyhow!("--from requires a date"))?;
                from = NaiveDate::parse_from_str(value, "%Y-%m-%d")
                    .map_err(|e| anyhow::anyhow!("invalid --from date '{}': {}", value, e))?;
                i += 1;
            }
            "--horizon" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| anyhow::anyhow!("--horizon requires a day count"))?;
                horizon_days = value
                    .parse()
                    .map_err(|e| anyhow::anyhow!("invalid --horizon '{}': {}", value, e))?;
                i += 1;
            }
            "--export" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| anyhow::anyhow!("--export requires a path"))?;
                export_path = Some(PathBuf::from(value));
                i += 1;
            }
            "--no-export" => {
                export_path = None;
            }
            other if other.starts_with('-') => {
                anyhow::bail!("unknown option '{}' (see --help)", other);
            }
            other => {
                messages_file = Some(PathBuf::from(other));
            }
        }
        i += 1;
    }

    let reader: Box<dyn BufRead> = match &messages_file {
        Some(path) => Box::new(BufReader::new(File::open(path).with_context(|| {
            format!("could not open messages file '{}'", path.display())
        })?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    // Per-message failures are reported and skipped; one bad message never
    // aborts the batch.
    let mut calendar = Calendar::new();
    for line in reader.lines() {
        let line = line.context("failed reading messages")?;
        let msg = line.trim();
        if msg.is_empty() {
            continue;
        }
        match parse_event(msg) {
            Ok(event) => {
                println!("stored: {}", event);
                calendar.append(event);
            }
            Err(e) => log::warn!("skipping message '{}': {}", msg, e),
        }
    }

    if let Some(path) = &export_path {
        export::write_events(&calendar, path)?;
    }

    let todays = calendar.today_events(from);
    if !todays.is_empty() {
        println!("today:");
        for event in &todays {
            println!("  {}", event);
        }
    }

    println!("upcoming within {} days of {}:", horizon_days, from);
    for event in calendar.upcoming(from, horizon_days) {
        println!("  {}", event);
    }

    Ok(())
}
