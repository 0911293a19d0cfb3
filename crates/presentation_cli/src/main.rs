//! GooseDB CLI
//!
//! Run SQL against an embedded database while a goose watches.

#![allow(clippy::print_stdout)]

mod demo;

use std::path::PathBuf;

use anyhow::Context;
use application::GooseDb;
use application::ports::SqlConnectionPort;
use clap::{Parser, Subcommand};
use domain::{HonkProbability, SqlParam};
use infrastructure::{EngineKind, GooseConfig};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Built-in honk probability for `demo`, below any file, env or flag value
const DEMO_HONK_PROBABILITY: f64 = 0.5;

/// GooseDB CLI
#[derive(Parser)]
#[command(name = "goosedb")]
#[command(author, version, about = "An embedded database, with a goose", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: ./goosedb.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Database path, or ":memory:"
    #[arg(short, long)]
    database: Option<String>,

    /// Engine to use (duckdb or sqlite)
    #[arg(short, long)]
    engine: Option<EngineKind>,

    /// Chance of goose interference per call
    #[arg(long)]
    honk_probability: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a statement and print the affected row count
    Exec {
        /// SQL statement
        sql: String,

        /// Positional bind parameter (repeatable)
        #[arg(short, long = "param")]
        params: Vec<String>,
    },

    /// Run a query and print the result table
    Query {
        /// SQL query
        sql: String,

        /// Positional bind parameter (repeatable)
        #[arg(short, long = "param")]
        params: Vec<String>,

        /// Print JSON records instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Create the bread crumb table and analyse it (if the goose lets you)
    Demo,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Merge command-line overrides into the loaded configuration
fn apply_overrides(mut config: GooseConfig, cli: &Cli) -> GooseConfig {
    if let Some(database) = &cli.database {
        config.database.path.clone_from(database);
    }
    if let Some(engine) = cli.engine {
        config.database.engine = engine;
    }
    if let Some(p) = cli.honk_probability {
        config.interference.honk_probability = HonkProbability::new(p);
    }
    config
}

/// Honk probability to fall back on when neither file nor environment sets one
fn honk_default(command: &Commands) -> HonkProbability {
    match command {
        // The demo goose is more aggressive unless told otherwise
        Commands::Demo => HonkProbability::new(DEMO_HONK_PROBABILITY),
        Commands::Exec { .. } | Commands::Query { .. } => HonkProbability::default(),
    }
}

fn parse_params(raw: &[String]) -> Vec<SqlParam> {
    raw.iter().map(|p| SqlParam::parse_literal(p)).collect()
}

fn run<C: SqlConnectionPort>(db: &GooseDb<C>, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Exec { sql, params } => {
            let affected = db.execute(&sql, &parse_params(&params))?;
            println!("{affected} rows affected");
        },

        Commands::Query { sql, params, json } => {
            let frame = db.query(&sql, &parse_params(&params))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&frame.to_json_records())?);
            } else {
                println!("{frame}");
            }
        },

        Commands::Demo => {
            demo::create_example_table(db)?;
            println!("\nBread Crumb Analysis (if the goose lets you see it):");
            let result = demo::analyse(db)?;
            println!("{result}");
        },
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity; stdout is reserved for results
    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config =
        GooseConfig::load_with_honk_default(cli.config.as_deref(), honk_default(&cli.command))
            .context("Failed to load configuration")?;
    let config = apply_overrides(config, &cli);
    debug!(?config, "Configuration resolved");

    match config.database.engine {
        EngineKind::DuckDb => {
            let db = infrastructure::open_duckdb(&config)?;
            run(&db, cli.command)
        },
        EngineKind::Sqlite => {
            let db = infrastructure::open_sqlite(&config)?;
            run(&db, cli.command)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn log_filter_levels() {
        assert_eq!(log_filter_from_verbosity(0), "warn");
        assert_eq!(log_filter_from_verbosity(1), "info");
        assert_eq!(log_filter_from_verbosity(2), "debug");
        assert_eq!(log_filter_from_verbosity(9), "trace");
    }

    #[test]
    fn overrides_replace_config_values() {
        let cli = parse(&[
            "goosedb",
            "--database",
            "crumbs.db",
            "--engine",
            "sqlite",
            "--honk-probability",
            "0.9",
            "query",
            "SELECT 1",
        ]);
        let config = apply_overrides(GooseConfig::default(), &cli);
        assert_eq!(config.database.path, "crumbs.db");
        assert_eq!(config.database.engine, EngineKind::Sqlite);
        assert!((config.interference.honk_probability.value() - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn demo_goose_is_more_aggressive_by_default() {
        let cli = parse(&["goosedb", "demo"]);
        assert!((honk_default(&cli.command).value() - 0.5).abs() < f64::EPSILON);

        let cli = parse(&["goosedb", "query", "SELECT 1"]);
        assert_eq!(honk_default(&cli.command), HonkProbability::default());
    }

    #[test]
    fn configured_default_probability_is_kept_for_demo() {
        let config = GooseConfig {
            interference: infrastructure::InterferenceConfig {
                honk_probability: HonkProbability::new(0.3),
                ..Default::default()
            },
            ..Default::default()
        };
        let config = apply_overrides(config, &parse(&["goosedb", "demo"]));
        assert!((config.interference.honk_probability.value() - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn explicit_probability_wins_over_demo_default() {
        let cli = parse(&["goosedb", "--honk-probability", "0", "demo"]);
        let config = apply_overrides(GooseConfig::default(), &cli);
        assert!(config.interference.honk_probability.value().abs() < f64::EPSILON);
    }

    #[test]
    fn params_are_parsed_as_literals() {
        let params = parse_params(&["1".to_string(), "Park Bench".to_string()]);
        assert_eq!(params, vec![SqlParam::Integer(1), SqlParam::Text("Park Bench".into())]);
    }

    #[test]
    fn run_query_against_quiet_goose() {
        let config = GooseConfig {
            interference: infrastructure::InterferenceConfig {
                honk_probability: HonkProbability::NEVER,
                ..Default::default()
            },
            ..Default::default()
        };
        let db = infrastructure::open_duckdb(&config).unwrap();
        let cli = parse(&["goosedb", "query", "SELECT CAST(? AS INTEGER) AS crumbs", "-p", "3"]);
        assert!(run(&db, cli.command).is_ok());
    }

    #[test]
    fn run_surfaces_engine_error() {
        let config = GooseConfig {
            interference: infrastructure::InterferenceConfig {
                honk_probability: HonkProbability::NEVER,
                ..Default::default()
            },
            ..Default::default()
        };
        let db = infrastructure::open_duckdb(&config).unwrap();
        let cli = parse(&["goosedb", "query", "SELECT * FROM nowhere"]);
        let err = run(&db, cli.command).unwrap_err();
        assert!(err.downcast_ref::<duckdb::Error>().is_some());
    }
}
