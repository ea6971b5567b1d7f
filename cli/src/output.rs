//! Per-table reporting shared by `generate` and `check`.

use std::fmt::Display;
use std::path::Path;

use colored::Colorize;

pub fn heading(text: &str) -> String {
    format!("{}", text.bright_cyan())
}

/// `  Mapper package: com.acme.mapper`
pub fn setting(name: &str, value: impl Display) -> String {
    format!("  {}: {value}", name.bright_blue())
}

/// Trailing status of a `Checking <what>... ` step.
pub fn step_status(ok: bool) -> String {
    if ok {
        format!("{}", "OK".green())
    } else {
        format!("{}", "ERROR".red())
    }
}

pub fn table_generated(table: &str, mapper: &str, methods: usize) -> String {
    let detail = format!("-> {mapper} ({methods} methods)");
    format!("  {} {} {}", "OK".green(), table.bright_blue(), detail.bright_black())
}

pub fn table_checked(table: &str, methods: usize) -> String {
    let detail = format!("({methods} methods)");
    format!("    {table} {}", detail.bright_black())
}

pub fn table_failed(table: &str, error: impl Display) -> String {
    format!("  {} {}: {error}", "ERROR".red(), table.bright_blue())
}

pub fn table_warning(text: impl Display) -> String {
    format!("[{}] {text}", "Warning".yellow())
}

pub fn table_error(text: impl Display) -> String {
    format!("{} {text}", "Error".red().bold())
}

/// Closing line of `generate`; `out_dir` is `None` on a dry run.
pub fn generate_summary(generated: usize, failed: usize, out_dir: Option<&Path>) -> String {
    if failed > 0 {
        let text = format!("{failed} table(s) failed, {generated} generated.");
        return format!("{}", text.red());
    }
    let text = match out_dir {
        Some(dir) => format!("Generated {generated} mapper(s) in {}", dir.display()),
        None => format!("Checked {generated} table(s), nothing written."),
    };
    format!("{}", text.bright_green())
}

/// Closing line of `check`.
pub fn check_summary(has_errors: bool, warnings: usize) -> String {
    if has_errors {
        format!("{}", "Configuration has errors.".red())
    } else if warnings == 0 {
        format!("{}", "Configuration OK.".bright_green())
    } else {
        format!("{}", format!("{warnings} warning(s).").yellow())
    }
}
