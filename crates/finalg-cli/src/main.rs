//! finalg: command-line tool for finite algebras
//!
//! Loads algebras from JSON files, classifies them, builds products and
//! searches for isomorphisms and subgroups.

mod cli;
mod config;
mod output;

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use finalg_core::generators::{
    generate_commutative_monoid, generate_commutative_ring, generate_cyclic_group,
    generate_powerset_group, generate_powerset_ring, generate_prime_field,
    generate_symmetric_group,
};
use finalg_core::{load_algebra, Algebra, IsomorphismResult};
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::{Cli, Commands, ConfigCommand, Family};
use config::Config;
use output::{
    enable_colors, format_kind, format_summary, print_error, print_header, print_info,
    print_success,
};

fn main() {
    if let Err(e) = run() {
        print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = if cli.no_config {
        Config::default()
    } else {
        Config::load_default()
    };

    enable_colors(config.colored && !cli.no_color);
    init_logging(cli.verbose)?;
    debug!(?config, "configuration loaded");

    match cli.command {
        Commands::About {
            file,
            max_size,
            names,
        } => {
            let algebra = load(&file, &config)?;
            let max_size = max_size.unwrap_or(config.algebra.report_max_size);
            print_header(algebra.name());
            println!("{}", algebra.about(max_size, names || config.algebra.use_names));
        }

        Commands::Classify { files } => {
            for file in &files {
                let algebra = load(file, &config)?;
                print_success(&format_summary(&algebra));
            }
        }

        Commands::Product {
            left,
            right,
            delimiter,
        } => {
            let delimiter = delimiter.unwrap_or_else(|| config.algebra.delimiter.clone());
            let left = load(&left, &config)?.with_delimiter(delimiter);
            let right = load(&right, &config)?;
            let product = left.direct_product(&right)?;
            debug!(name = product.name(), kind = %product.kind(), "product built");
            println!("{}", serde_json::to_string_pretty(&product.to_record())?);
        }

        Commands::Isomorphic { left, right } => {
            let left = load(&left, &config)?;
            let right = load(&right, &config)?;
            match left.isomorphic(&right) {
                IsomorphismResult::Isomorphic { mapping } => {
                    print_success(&format!("{} ≅ {}", left.name(), right.name()));
                    for (from, to) in &mapping {
                        println!("  {} -> {}", from, to);
                    }
                }
                IsomorphismResult::NotIsomorphic => {
                    print_info(&format!(
                        "{} and {} are not isomorphic",
                        left.name(),
                        right.name()
                    ));
                }
            }
        }

        Commands::Subgroups { file, unique } => {
            let algebra = load(&file, &config)?;
            print_header(&format!("Proper subgroups of {}", algebra.name()));
            print!("{}", algebra.about_proper_subgroups(unique)?);
        }

        Commands::Closures { file, all } => {
            let algebra = load(&file, &config)?;
            let non_trivial = config.algebra.non_trivial && !all;
            let subsets = algebra.closed_subsets_of_elements(non_trivial);
            print_header(&format!(
                "Closed subsets of {} ({})",
                algebra.name(),
                format_kind(algebra.kind())
            ));
            for subset in &subsets {
                println!("  {{{}}}", subset.join(", "));
            }
            print_info(&format!("{} closed subsets", subsets.len()));
        }

        Commands::Generate { family, n, name } => {
            let mut algebra = generate(family, n)?;
            if let Some(name) = name {
                let description = algebra.description().to_string();
                algebra = algebra.with_name(name, description);
            }
            println!("{}", serde_json::to_string_pretty(&algebra.to_record())?);
        }

        Commands::Config { command } => handle_config_command(command, &config)?,
    }

    Ok(())
}

fn load(path: &Path, config: &Config) -> Result<Algebra> {
    let algebra = load_algebra(path)
        .with_context(|| format!("Failed to load algebra: {}", path.display()))?;
    Ok(algebra.with_delimiter(config.algebra.delimiter.clone()))
}

fn generate(family: Family, n: usize) -> Result<Algebra> {
    let algebra = match family {
        Family::Cyclic => generate_cyclic_group(n, "e", "a"),
        Family::Symmetric => generate_symmetric_group(n, 1),
        Family::Powerset => generate_powerset_group(n),
        Family::Monoid => generate_commutative_monoid(n, "a"),
        Family::Ring => generate_commutative_ring(n, "a"),
        Family::PowersetRing => generate_powerset_ring(n),
        Family::Field => generate_prime_field(n, "a"),
    };
    algebra.with_context(|| format!("Failed to generate {:?} algebra of size {}", family, n))
}

fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}

fn handle_config_command(command: ConfigCommand, config: &Config) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            print_header("Current Configuration");
            let toml = toml::to_string_pretty(config)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Config::config_path();
            println!("{}", path.display());
        }
        ConfigCommand::Init => {
            let path = Config::create_default()?;
            print_success(&format!("Created config file: {}", path.display()));
        }
    }
    Ok(())
}
