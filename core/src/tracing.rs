//! Tracing utilities for generation observability.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! These macros no-op when the feature is disabled, avoiding `#[cfg]` boilerplate
//! at every call site. The feature check happens in the calling crate, so any
//! crate using them declares its own `tracing` feature.

/// Emit a debug-level event when a stage starts on a table.
///
/// ```ignore
/// mapgen_trace_stage!("select_by_index", table.name());
/// ```
#[macro_export]
macro_rules! mapgen_trace_stage {
    ($stage:expr, $table:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(stage = %$stage, table = %$table, "mapgen.stage");
        #[cfg(not(feature = "tracing"))]
        let _ = (&$stage, &$table);
    };
}

/// Emit a debug-level event when a target is skipped for a table.
///
/// ```ignore
/// mapgen_trace_skip!("deleteBatch", table.name(), "no primary key");
/// ```
#[macro_export]
macro_rules! mapgen_trace_skip {
    ($target:expr, $table:expr, $reason:expr) => {
        #[cfg(feature = "tracing")]
        tracing::debug!(target_name = %$target, table = %$table, reason = %$reason, "mapgen.skip");
        #[cfg(not(feature = "tracing"))]
        let _ = (&$target, &$table, &$reason);
    };
}

/// Emit a warn-level event for a metadata problem that was worked around.
///
/// ```ignore
/// mapgen_trace_warn!(table.name(), "index 'idx_x' names unknown column 'y'");
/// ```
#[macro_export]
macro_rules! mapgen_trace_warn {
    ($table:expr, $message:expr) => {
        #[cfg(feature = "tracing")]
        tracing::warn!(table = %$table, "{}", $message);
        #[cfg(not(feature = "tracing"))]
        let _ = (&$table, &$message);
    };
}
