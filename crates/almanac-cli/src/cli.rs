use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "almanac",
    about = "Almanac: resolve seeds through chained range maps",
    version
)]
pub struct Cli {
    /// Log resolver and loader steps to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the lowest terminal value reachable from the seeds
    Lowest {
        /// Path to the puzzle input
        file: String,

        /// How to read the seed line
        #[arg(long, value_enum, default_value_t = SeedMode::Points)]
        mode: SeedMode,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print every resolved seed value or range
    Resolve {
        /// Path to the puzzle input
        file: String,

        /// How to read the seed line
        #[arg(long, value_enum, default_value_t = SeedMode::Points)]
        mode: SeedMode,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the category path followed from a start category
    Chain {
        /// Path to the puzzle input
        file: String,

        /// Start category
        #[arg(long, default_value = "seed")]
        from: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// How the seed numbers are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeedMode {
    /// Every number is a seed
    Points,
    /// Numbers pair up as (start, length)
    Ranges,
}

impl SeedMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SeedMode::Points => "points",
            SeedMode::Ranges => "ranges",
        }
    }
}
