//! mapgen CLI - Main entry point
//!
//! This is the main binary for the mapgen-cli tool.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use mapgen_cli::commands::generate::GenerateOptions;
use mapgen_cli::config::{CONFIG_FILE, Config};
use mapgen_cli::error::CliError;
use mapgen_codegen::StageKind;

/// mapgen - Mapper method and SQL statement generator
#[derive(Parser, Debug)]
#[command(name = "mapgen")]
#[command(author, version, about = "Mapper method and SQL statement generator", long_about = None)]
struct Cli {
    /// Path to config file (default: mapgen.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
enum Command {
    /// Generate mapper XML and interfaces from table metadata
    Generate {
        /// Only generate the named table (repeatable)
        #[arg(short, long = "table", value_name = "NAME")]
        tables: Vec<String>,

        /// Comma separated stage list replacing the configured one
        #[arg(long, value_name = "LIST")]
        stages: Option<String>,

        /// Override output directory
        #[arg(long)]
        out: Option<PathBuf>,

        /// Run generation without writing files
        #[arg(long)]
        dry_run: bool,
    },

    /// Validate configuration and metadata
    Check,

    /// Initialize a new mapgen.toml configuration file
    Init {
        /// Package of the generated mapper interfaces
        #[arg(long, default_value = "com.example.mapper")]
        mapper_package: String,

        /// Package of the model classes
        #[arg(long, default_value = "com.example.model")]
        model_package: String,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Init {
            mapper_package,
            model_package,
        } => run_init(&mapper_package, &model_package),
        Command::Generate {
            tables,
            stages,
            out,
            dry_run,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let stages = stages
                .as_deref()
                .map(StageKind::parse_list)
                .transpose()
                .map_err(|e| CliError::Other(e.to_string()))?;
            mapgen_cli::commands::generate::run(
                &config,
                GenerateOptions {
                    tables,
                    stages,
                    out,
                    dry_run,
                },
            )
        }
        Command::Check => {
            let config = load_config(cli.config.as_deref())?;
            mapgen_cli::commands::check::run(&config)
        }
    }
}

/// Load configuration with fallback to default path
fn load_config(custom_path: Option<&std::path::Path>) -> Result<Config, CliError> {
    match custom_path {
        Some(path) => Config::load_from(path).map_err(Into::into),
        None => Config::load().map_err(Into::into),
    }
}

/// Initialize a new mapgen.toml file
fn run_init(mapper_package: &str, model_package: &str) -> Result<(), CliError> {
    let config_path = PathBuf::from(CONFIG_FILE);

    if config_path.exists() {
        return Err(CliError::Other(format!(
            "{} already exists. Delete it first to reinitialize.",
            CONFIG_FILE
        )));
    }

    std::fs::write(&config_path, init_config(mapper_package, model_package))
        .map_err(|e| CliError::IoError(e.to_string()))?;

    println!("{}", format!("Created {}", CONFIG_FILE).bright_green());
    println!();
    println!("Next steps:");
    println!(
        "  1. Export table metadata to {}",
        "tables.json".bright_cyan()
    );
    println!(
        "  2. Run {} to generate mappers",
        "mapgen generate".bright_cyan()
    );

    Ok(())
}

fn init_config(mapper_package: &str, model_package: &str) -> String {
    let stages: Vec<String> = StageKind::ALL
        .iter()
        .map(|s| format!("\"{}\"", s.as_str()))
        .collect();
    format!(
        r#"# mapgen configuration

input = "tables.json"
out = "./generated"
mapper_package = "{mapper_package}"
model_package = "{model_package}"

[generator]
stages = [{stages}]
index_prefix = "idx_"
logical_delete_column = "is_deleted"
not_update_columns = []
primitive_model = false
entity_interface = false
# entity_super_interface = "{model_package}.DbEntity"
root_classes = []

# [[generator.blob_transform]]
# table = "t_player"
# column = "inventory"
# field = "inventoryData"
# type = "com.acme.model.Inventory"
# codec = "binary"
"#,
        stages = stages.join(", ")
    )
}
