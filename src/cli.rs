use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "skycat")]
#[command(version, about = "Generate and query a synthetic star catalog in SQLite")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a fresh catalog database
    Generate {
        /// Output SQLite database path
        output_db: PathBuf,

        /// Number of objects (and distance records) to generate
        #[arg(short, long, default_value_t = 100)]
        count: usize,

        /// RNG seed for reproducible catalogs
        #[arg(short, long)]
        seed: Option<u64>,

        /// Right ascension interval, degrees
        #[arg(long, default_value_t = 0.0)]
        ra_min: f64,
        #[arg(long, default_value_t = 360.0)]
        ra_max: f64,

        /// Declination interval, degrees
        #[arg(long, default_value_t = -90.0, allow_hyphen_values = true)]
        dec_min: f64,
        #[arg(long, default_value_t = 90.0, allow_hyphen_values = true)]
        dec_max: f64,

        /// Distance interval
        #[arg(long, default_value_t = 1.0)]
        distance_min: f64,
        #[arg(long, default_value_t = 100.0)]
        distance_max: f64,
    },

    /// Inspect an existing catalog database
    Query {
        /// SQLite database path
        db: PathBuf,

        /// Show the first distance record for this object reference
        #[arg(short, long)]
        object_id: Option<i64>,
    },

    /// Estimate the mean distance of a simulated stellar population
    Estimate {
        /// True distance of the population
        #[arg(short, long, default_value_t = 3.0)]
        distance: f64,

        /// Number of observations
        #[arg(short, long, default_value_t = 10_000_000)]
        count: usize,

        /// Fractional RMS observation error
        #[arg(short, long, default_value_t = 0.1)]
        rms_error: f64,

        /// RNG seed for a reproducible sample
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// List all catalog table names
    ListTables,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
