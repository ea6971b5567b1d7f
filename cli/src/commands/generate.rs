//! Generate command
//!
//! Runs the pipeline over the tables of the metadata file and writes
//! `<Domain>Mapper.xml` and `<Domain>Mapper.java` for each of them. A table
//! that fails is reported and skipped; the others are still written.

use std::path::{Path, PathBuf};

use mapgen_codegen::{Pipeline, StageKind, TableOutput};

use crate::config::Config;
use crate::error::CliError;
use crate::input::MetadataFile;
use crate::output;

#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Only these tables, all when empty
    pub tables: Vec<String>,
    /// Replaces the configured stage list
    pub stages: Option<Vec<StageKind>>,
    /// Replaces the configured output directory
    pub out: Option<PathBuf>,
    /// Generate without writing files
    pub dry_run: bool,
}

pub fn run(config: &Config, opts: GenerateOptions) -> Result<(), CliError> {
    let mut generator = config.generator_config();
    if let Some(stages) = opts.stages {
        generator.stages = stages;
    }
    let pipeline = Pipeline::new(generator);
    let out_dir = opts.out.unwrap_or_else(|| config.out_dir());
    let input = MetadataFile::load(&config.input_path())?;

    let selected: Vec<_> = input.select(&opts.tables).collect();
    if selected.is_empty() {
        return Err(CliError::Other(format!(
            "no tables to generate in {}",
            config.input_path().display()
        )));
    }

    println!("{}", output::heading("Generating mappers..."));
    println!();

    if !opts.dry_run {
        std::fs::create_dir_all(&out_dir)
            .map_err(|e| CliError::IoError(format!("{}: {e}", out_dir.display())))?;
    }

    let mut generated = 0usize;
    let mut failed = 0usize;
    for def in selected {
        match pipeline.generate_def(def) {
            Ok(table) => {
                for warning in &table.warnings {
                    println!("  {}", output::table_warning(warning));
                }
                if !opts.dry_run {
                    write_table(&out_dir, &table)?;
                }
                println!(
                    "{}",
                    output::table_generated(
                        &table.table,
                        &table.mapper.short_name(),
                        table.methods.len()
                    )
                );
                generated += 1;
            }
            Err(e) => {
                tracing::warn!(table = %def.name, error = %e, "table skipped");
                println!("{}", output::table_failed(&def.name, &e));
                failed += 1;
            }
        }
    }

    println!();
    let written = (!opts.dry_run).then_some(out_dir.as_path());
    println!("{}", output::generate_summary(generated, failed, written));
    if failed > 0 {
        return Err(CliError::Other(format!("{failed} table(s) failed")));
    }
    Ok(())
}

fn write_table(out_dir: &Path, table: &TableOutput) -> Result<(), CliError> {
    let name = table.mapper.short_name();
    let files = [
        (out_dir.join(format!("{name}.xml")), table.document.to_xml()),
        (out_dir.join(format!("{name}.java")), table.interface_source()),
    ];
    for (path, content) in files {
        std::fs::write(&path, content)
            .map_err(|e| CliError::IoError(format!("{}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), "wrote");
    }
    Ok(())
}
