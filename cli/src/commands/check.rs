//! Check command - validates configuration and metadata

use mapgen_codegen::Pipeline;

use crate::config::Config;
use crate::error::CliError;
use crate::input::MetadataFile;
use crate::output;

pub fn run(config: &Config) -> Result<(), CliError> {
    let generator = config.generator_config();

    println!("{}", output::heading("Checking configuration..."));
    println!();
    println!("{}", output::setting("Input", config.input_path().display()));
    println!("{}", output::setting("Output", config.out_dir().display()));
    let stages: Vec<&str> = generator.stages.iter().map(|s| s.as_str()).collect();
    println!("{}", output::setting("Stages", stages.join(", ")));
    if !generator.mapper_package.is_empty() {
        println!("{}", output::setting("Mapper package", &generator.mapper_package));
    }
    if !generator.model_package.is_empty() {
        println!("{}", output::setting("Model package", &generator.model_package));
    }
    if let Some(interface) = &generator.entity_super_interface {
        println!("{}", output::setting("Entity interface", interface));
    }
    if !generator.blob_transforms.is_empty() {
        println!("{}", output::setting("Blob transforms", generator.blob_transforms.len()));
    }

    println!();
    print!("  Checking metadata... ");
    let input = match MetadataFile::load(&config.input_path()) {
        Ok(input) => {
            println!("{}", output::step_status(true));
            input
        }
        Err(e) => {
            println!("{}", output::step_status(false));
            println!("    {e}");
            println!();
            println!("{}", output::check_summary(true, 0));
            return Err(CliError::Other("config check failed".into()));
        }
    };

    let pipeline = Pipeline::new(generator);
    let mut warnings = 0usize;
    let mut has_errors = false;
    for def in &input.tables {
        match pipeline.generate_def(def) {
            Ok(table) => {
                println!("{}", output::table_checked(&def.name, table.methods.len()));
                for warning in &table.warnings {
                    println!("      {}", output::table_warning(&warning.message));
                    warnings += 1;
                }
            }
            Err(e) => {
                println!("    {} {}", def.name, output::step_status(false));
                println!("      {}", output::table_error(&e));
                has_errors = true;
            }
        }
    }

    println!();
    println!("{}", output::check_summary(has_errors, warnings));
    if has_errors {
        return Err(CliError::Other("config check failed".into()));
    }
    Ok(())
}
