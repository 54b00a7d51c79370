// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use feedstats::config::{load_config, Config};
use feedstats::errors::{IngestError, StatsError};
use feedstats::feed::record::DATE_FORMAT;
use feedstats::feed::{FlatFeedIngestor, NewsFeed, Record};
use feedstats::geo::{CityCoordinateCache, Coordinates};
use feedstats::ingest::{JobDescriptor, JobDocumentProcessor};
use feedstats::merge::{generate_random_dicts, merge_dicts, Dict};
use feedstats::observability::messages::ingest::{DocumentFailed, DocumentNotFound, InputFileMissing};
use feedstats::observability::messages::StructuredLog;
use feedstats::stats::run_job;
use feedstats::store::{SqliteStatisticsStore, StatisticsSink};

#[derive(Parser, Debug)]
#[command(name = "feedstats", version, about = "Word and letter statistics for text files and job documents")]
struct Cli {
    /// Configuration file (YAML, TOML or JSON)
    #[arg(long, env = "FEEDSTATS_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Base directory for every relative path
    #[arg(long, env = "FEEDSTATS_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// Do not write statistics to the database
    #[arg(long, global = true)]
    no_db: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute statistics for one text file
    Stats {
        input: Option<PathBuf>,
        #[arg(long)]
        word_csv: Option<PathBuf>,
        #[arg(long)]
        letter_csv: Option<PathBuf>,
    },
    /// Run every job in the given JSON/XML documents (defaults to the configured ones)
    Jobs { documents: Vec<PathBuf> },
    #[command(subcommand)]
    Feed(FeedCommand),
    #[command(subcommand)]
    City(CityCommand),
    /// Straight-line distance between two stored cities
    Distance { from: String, to: String },
    /// Clean up a text file, or stdin when no file is given
    Rewrite { file: Option<PathBuf> },
    /// Merge a JSON array of string-to-integer objects, or random ones when no file is given
    Merge { file: Option<PathBuf> },
}

#[derive(Subcommand, Debug)]
enum FeedCommand {
    /// Load a flat feed document into the feed file
    Ingest { file: Option<PathBuf> },
    #[command(subcommand)]
    Add(AddRecord),
}

#[derive(Subcommand, Debug)]
enum AddRecord {
    News {
        text: String,
        city: String,
    },
    Ad {
        text: String,
        /// Expiration date, YYYY-MM-DD
        #[arg(value_parser = parse_date)]
        expires_on: NaiveDate,
    },
    Quote {
        text: String,
        author: String,
    },
}

#[derive(Subcommand, Debug)]
enum CityCommand {
    /// Store or replace the coordinates of a city
    Add {
        name: String,
        #[arg(allow_negative_numbers = true)]
        latitude: f64,
        #[arg(allow_negative_numbers = true)]
        longitude: f64,
    },
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(data_dir) = &cli.data_dir {
        config.data_dir = data_dir.clone();
    }
    if cli.no_db {
        config.persist = false;
    }
    Ok(config)
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn open_store(config: &Config) -> Result<Option<SqliteStatisticsStore>> {
    if !config.persist {
        return Ok(None);
    }
    let path = config.database();
    let store = SqliteStatisticsStore::open(&path)
        .with_context(|| format!("Failed to open database {}", path.display()))?;
    Ok(Some(store))
}

fn close_store(store: Option<SqliteStatisticsStore>) -> Result<()> {
    if let Some(store) = store {
        store.close()?;
    }
    Ok(())
}

fn run_stats(
    config: &Config,
    input: Option<PathBuf>,
    word_csv: Option<PathBuf>,
    letter_csv: Option<PathBuf>,
) -> Result<()> {
    let mut job = JobDescriptor::from_config(config);
    if let Some(input) = input {
        job.input_file = input;
    }
    if let Some(word_csv) = word_csv {
        job.word_count_csv = word_csv;
    }
    if let Some(letter_csv) = letter_csv {
        job.letter_count_csv = letter_csv;
    }

    let mut store = open_store(config)?;
    let sink = store.as_mut().map(|s| s as &mut dyn StatisticsSink);

    match run_job(&job, sink) {
        Ok(report) => println!(
            "{} distinct words, {} letters -> {}, {}",
            report.words.len(),
            report.letters.total_letters(),
            report.word_count_csv().display(),
            report.letter_count_csv().display()
        ),
        Err(StatsError::MissingInputFile(path)) => InputFileMissing {
            input_file: &path.display().to_string(),
        }
        .log(),
        Err(e) => return Err(e.into()),
    }

    close_store(store)
}

fn run_jobs(config: &Config, documents: Vec<PathBuf>) -> Result<()> {
    let documents = if documents.is_empty() {
        vec![config.json_jobs(), config.xml_jobs()]
    } else {
        documents
    };

    let mut store = open_store(config)?;

    for document in &documents {
        let sink = store.as_mut().map(|s| s as &mut dyn StatisticsSink);
        let mut processor = JobDocumentProcessor::new(config, sink);
        let path = document.display().to_string();

        match processor.process(document) {
            Ok(summary) => println!(
                "{}: {} job(s) processed, {} input file(s) missing, {} record(s) skipped",
                path,
                summary.jobs_processed(),
                summary.inputs_missing,
                summary.records_skipped
            ),
            Err(IngestError::MissingDocument(_)) => DocumentNotFound { path: &path }.log(),
            Err(e) => DocumentFailed {
                path: &path,
                error: &e,
            }
            .log(),
        }
    }

    close_store(store)
}

fn run_feed(config: &Config, command: FeedCommand) -> Result<()> {
    let mut feed = NewsFeed::new(config.feed_file());

    match command {
        FeedCommand::Ingest { file } => {
            let document = file.unwrap_or_else(|| config.feed_input());
            let path = document.display().to_string();

            match FlatFeedIngestor::new(&mut feed).process_file(&document, now()) {
                Ok(summary) => println!(
                    "{}: {} record(s) added, {} line(s) skipped",
                    path, summary.records_added, summary.lines_skipped
                ),
                Err(IngestError::MissingDocument(_)) => DocumentNotFound { path: &path }.log(),
                Err(e) => DocumentFailed {
                    path: &path,
                    error: &e,
                }
                .log(),
            }
        }
        FeedCommand::Add(record) => {
            let now = now();
            let record = match record {
                AddRecord::News { text, city } => Record::news(text, city, now),
                AddRecord::Ad { text, expires_on } => Record::private_ad(text, expires_on, now),
                AddRecord::Quote { text, author } => Record::quote(text, author, now),
            };
            println!("{}", record.render());
            feed.add_record(record);
            feed.save_to_file()
                .with_context(|| format!("Failed to save feed {}", feed.path().display()))?;
        }
    }
    Ok(())
}

fn run_city(config: &Config, command: CityCommand) -> Result<()> {
    let CityCommand::Add {
        name,
        latitude,
        longitude,
    } = command;

    let cache = CityCoordinateCache::open(config.cities_database())?;
    cache.upsert(&name, Coordinates::new(latitude, longitude))?;
    println!("Stored coordinates for {}: {}, {}", name, latitude, longitude);
    Ok(())
}

fn run_distance(config: &Config, from: &str, to: &str) -> Result<()> {
    let cache = CityCoordinateCache::open(config.cities_database())?;
    let distance = cache
        .distance_km(from, to)
        .context("Add missing cities with `feedstats city add NAME LAT LON`")?;
    println!(
        "The straight-line distance between {} and {} is {:.2} kilometers.",
        from, to, distance
    );
    Ok(())
}

fn run_rewrite(file: Option<PathBuf>) -> Result<()> {
    let text = match file {
        Some(path) => fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => io::read_to_string(io::stdin()).context("Failed to read stdin")?,
    };

    let result = feedstats::rewrite::rewrite(&text);
    println!("{}", result.text);
    println!("Number of whitespace characters: {}", result.whitespace_count);
    Ok(())
}

fn run_merge(file: Option<PathBuf>) -> Result<()> {
    let dicts: Vec<Dict> = match file {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("{} is not a JSON array of objects", path.display()))?
        }
        None => {
            let generated = generate_random_dicts(&mut rand::thread_rng());
            println!("{}", serde_json::to_string(&generated)?);
            generated
        }
    };

    println!("{}", serde_json::to_string_pretty(&merge_dicts(&dicts))?);
    Ok(())
}

fn execute(config: &Config, command: Command) -> Result<()> {
    match command {
        Command::Stats {
            input,
            word_csv,
            letter_csv,
        } => run_stats(config, input, word_csv, letter_csv),
        Command::Jobs { documents } => run_jobs(config, documents),
        Command::Feed(command) => run_feed(config, command),
        Command::City(command) => run_city(config, command),
        Command::Distance { from, to } => run_distance(config, &from, &to),
        Command::Rewrite { file } => run_rewrite(file),
        Command::Merge { file } => run_merge(file),
    }
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    // Command failures are reported, not turned into an exit status.
    if let Err(error) = execute(&config, cli.command) {
        tracing::error!(error = %format!("{:#}", error), "Command failed");
    }
    Ok(())
}
