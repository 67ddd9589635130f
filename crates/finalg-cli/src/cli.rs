//! CLI argument definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "finalg")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Don't load configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Log classification and search details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a report on an algebra
    About {
        /// JSON file describing the algebra
        file: PathBuf,

        /// Largest order whose tables are printed
        #[arg(long)]
        max_size: Option<usize>,

        /// Print tables with element names
        #[arg(long)]
        names: bool,
    },

    /// Print the most specific structure an algebra satisfies
    Classify {
        /// JSON files describing algebras
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Print the direct product of two algebras as JSON
    Product {
        left: PathBuf,
        right: PathBuf,

        /// Separator for product element names
        #[arg(short, long)]
        delimiter: Option<String>,
    },

    /// Search for an isomorphism between two algebras
    Isomorphic { left: PathBuf, right: PathBuf },

    /// List the proper subgroups of a group
    Subgroups {
        file: PathBuf,

        /// One subgroup per isomorphism class
        #[arg(long)]
        unique: bool,
    },

    /// List the closed proper subsets of an algebra
    Closures {
        file: PathBuf,

        /// Include closures of single elements
        #[arg(long)]
        all: bool,
    },

    /// Print a standard algebra as JSON
    Generate {
        #[arg(value_enum)]
        family: Family,

        /// Order (or number of points for symmetric and powerset families)
        n: usize,

        /// Override the default name
        #[arg(long)]
        name: Option<String>,
    },

    /// Configuration file management
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Show configuration file path
    Path,
    /// Initialize default configuration file
    Init,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Family {
    /// Cyclic group Z<n>
    Cyclic,
    /// Symmetric group S<n>
    Symmetric,
    /// Powerset group under symmetric difference
    Powerset,
    /// Multiplication modulo n
    Monoid,
    /// Integers modulo n
    Ring,
    /// Powerset ring (symmetric difference, intersection)
    PowersetRing,
    /// Prime field F<n>
    Field,
}
