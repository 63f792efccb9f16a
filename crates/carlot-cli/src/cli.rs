//! CLI argument definitions for the carlot toolkit.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "carlot",
    version,
    about = "Used-car listing structurer and price estimator",
    long_about = "Flatten per-city used-car listing exports into structured datasets.\n\n\
                  Parses the nested detail/overview/feature/spec blobs of each listing,\n\
                  imputes missing values, and can serve price estimates from a\n\
                  pre-trained regression model."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build structured per-city datasets and the combined dataset.
    Build(BuildArgs),

    /// Estimate the price of a single car.
    Predict(PredictArgs),

    /// List the configured cities and their expected filenames.
    Cities,
}

#[derive(Parser)]
pub struct BuildArgs {
    /// Directory containing the per-city export files.
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: PathBuf,

    /// Output directory for structured files (default: DATA_DIR).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// JSON file overriding the built-in city list.
    #[arg(long = "cities-file", value_name = "PATH")]
    pub cities_file: Option<PathBuf>,

    /// One-hot encode categorical columns in the written datasets.
    #[arg(long = "encode")]
    pub encode: bool,
}

#[derive(Parser)]
pub struct PredictArgs {
    /// Path to the exported regression model (JSON).
    #[arg(long = "model", value_name = "PATH")]
    pub model: PathBuf,

    /// Kilometers driven.
    #[arg(long = "km-driven")]
    pub km_driven: i64,

    /// Year of manufacture.
    #[arg(long = "year")]
    pub manufacturing_year: i64,

    /// Seat count.
    #[arg(long = "seats", default_value_t = 5)]
    pub seats: u32,

    /// Fuel type, e.g. Petrol or Diesel.
    #[arg(long = "fuel-type")]
    pub fuel_type: String,

    /// Body type, e.g. Hatchback or SUV.
    #[arg(long = "body-type")]
    pub body_type: String,

    /// Owner category, e.g. "First Owner".
    #[arg(long = "owner")]
    pub owner: String,

    /// Transmission: Automatic or Manual.
    #[arg(long = "transmission")]
    pub transmission: String,

    /// City the car is sold in.
    #[arg(long = "city")]
    pub city: String,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
