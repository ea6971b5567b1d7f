//! Method name derivation from index and column names.

use crate::alloc_prelude::*;

/// Conventional prefix stripped from secondary index names.
pub const DEFAULT_INDEX_PREFIX: &str = "idx_";

/// Method name suffix for an index, `idx_user_status` -> `UserStatus`.
///
/// The prefix is removed wherever it occurs, the rest is split on `_`, each
/// non-empty segment gets an upper-case first character, and the segments
/// are concatenated. An empty result falls back to the raw name.
///
/// ```
/// use mapgen_core::naming::index_suffix;
///
/// assert_eq!(index_suffix("idx_name", "idx_"), "Name");
/// assert_eq!(index_suffix("uk_tenant__user", "idx_"), "UkTenantUser");
/// assert_eq!(index_suffix("idx_", "idx_"), "idx_");
/// ```
#[must_use]
pub fn index_suffix(raw: &str, prefix: &str) -> String {
    let stripped = if prefix.is_empty() {
        raw.to_string()
    } else {
        raw.replace(prefix, "")
    };
    let suffix: String = stripped
        .split('_')
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect();
    if suffix.is_empty() {
        raw.to_string()
    } else {
        suffix
    }
}

/// Upper-case the first character, leave the rest untouched.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Keyset parameter name for a composite key column, `userId` -> `lastUserId`.
#[must_use]
pub fn last_param_name(property: &str) -> String {
    format!("last{}", capitalize(property))
}

/// Keyset parameter name for a single-column key.
pub const LAST_ID_PARAM: &str = "lastId";

/// Name of a statement looking rows up through an index.
#[must_use]
pub fn select_by(suffix: &str) -> String {
    format!("selectBy{suffix}")
}

/// Name of a statement deleting rows through an index.
#[must_use]
pub fn delete_by(suffix: &str) -> String {
    format!("deleteBy{suffix}")
}
