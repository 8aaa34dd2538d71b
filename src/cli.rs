use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kreport")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Render cluster and metrics records as status reports")]
#[command(long_about = "Projects JSON or YAML records through a layout file into an aligned table or an indented key-value report, with per-field titles, defaults, formatters, groups and show/hide filtering.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render records as a table, one row per record
    Table {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        visibility: VisibilityArgs,
    },

    /// Render a single record as an indented key-value listing
    Detail {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        visibility: VisibilityArgs,

        /// Which record to show when the input is an array
        #[arg(long, default_value_t = 0)]
        index: usize,
    },

    /// Validate a layout and list the columns it would produce
    Check {
        /// Layout file describing the records
        #[arg(short, long, value_name = "FILE")]
        layout: PathBuf,

        #[command(flatten)]
        visibility: VisibilityArgs,
    },
}

#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Layout file describing the records
    #[arg(short, long, value_name = "FILE")]
    pub layout: PathBuf,

    /// JSON or YAML input (stdin when omitted or `-`)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct VisibilityArgs {
    /// Fields to show (dotted paths, comma separated)
    #[arg(long, value_delimiter = ',')]
    pub show: Vec<String>,

    /// Fields to hide; wins over --show
    #[arg(long, value_delimiter = ',')]
    pub hide: Vec<String>,

    /// Hide everything not listed in --show
    #[arg(long)]
    pub hide_all: bool,
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}
