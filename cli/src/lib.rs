//! mapgen CLI - Command-line interface for mapper generation
//!
//! Reads already introspected table metadata from a JSON file and writes a
//! MyBatis mapper document and mapper interface per table. No database
//! connection is made.
//!
//! # Configuration
//!
//! Create a `mapgen.toml` file in your project root (or run `mapgen init`):
//!
//! ```toml
//! input = "tables.json"
//! out = "./generated"
//! mapper_package = "com.acme.mapper"
//! model_package = "com.acme.model"
//!
//! [generator]
//! stages = ["base", "select_by_index", "logical_delete"]
//! not_update_columns = ["created_at"]
//! ```
//!
//! # Commands
//!
//! - `mapgen init` - Create a new mapgen.toml configuration file
//! - `mapgen generate` - Generate mapper XML and interfaces
//! - `mapgen check` - Validate configuration and metadata

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use config::{Config, Error as ConfigError};
pub use error::CliError;
