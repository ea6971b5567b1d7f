//! Java type names
//!
//! Types are carried by their fully qualified name (`java.lang.Integer`,
//! `java.util.List<com.acme.Role>`, `int`, `byte[]`). Rendering into source
//! uses the short form and the import list derived from the same name.

use crate::alloc_prelude::*;
use crate::primitive;

/// Fully qualified Java type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct JavaType {
    name: String,
}

impl JavaType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn int() -> Self {
        Self::new("int")
    }

    pub fn long() -> Self {
        Self::new("long")
    }

    pub fn string() -> Self {
        Self::new("java.lang.String")
    }

    pub fn object() -> Self {
        Self::new("java.lang.Object")
    }

    /// `java.util.List<element>`
    pub fn list_of(element: &JavaType) -> Self {
        Self::new(format!("java.util.List<{}>", element.name))
    }

    /// Fully qualified name, including generic arguments
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this is a primitive such as `int` or `boolean`
    #[must_use]
    pub fn is_primitive(&self) -> bool {
        primitive::is_primitive(&self.name)
    }

    /// Primitive form of a boxed wrapper, or a clone of `self`
    #[must_use]
    pub fn narrowed(&self) -> Self {
        match primitive::narrow(&self.name) {
            Some(p) => Self::new(p),
            None => self.clone(),
        }
    }

    /// Source form without package qualifiers
    ///
    /// ```
    /// use mapgen_types::JavaType;
    ///
    /// let role = JavaType::new("com.acme.model.Role");
    /// assert_eq!(JavaType::list_of(&role).short_name(), "List<Role>");
    /// assert_eq!(JavaType::new("byte[]").short_name(), "byte[]");
    /// ```
    #[must_use]
    pub fn short_name(&self) -> String {
        shorten(&self.name)
    }

    /// Types that need an `import` line, outer type first
    ///
    /// Primitives, arrays of primitives and `java.lang` types are skipped.
    #[must_use]
    pub fn imports(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect_imports(&self.name, &mut out);
        out
    }
}

impl core::fmt::Display for JavaType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for JavaType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

fn split_generic(name: &str) -> (&str, Option<&str>) {
    match (name.find('<'), name.rfind('>')) {
        (Some(open), Some(close)) if close > open => (&name[..open], Some(&name[open + 1..close])),
        _ => (name, None),
    }
}

fn shorten(name: &str) -> String {
    let (base, args) = split_generic(name);
    let simple = base.rsplit('.').next().unwrap_or(base);
    match args {
        Some(args) => {
            let inner: Vec<String> = args.split(',').map(|a| shorten(a.trim())).collect();
            format!("{}<{}>", simple, inner.join(", "))
        }
        None => simple.to_string(),
    }
}

fn collect_imports(name: &str, out: &mut Vec<String>) {
    let (base, args) = split_generic(name);
    let base = base.trim_end_matches("[]");
    let in_java_lang = base
        .strip_prefix("java.lang.")
        .is_some_and(|rest| !rest.contains('.'));
    if base.contains('.') && !in_java_lang && !out.iter().any(|i| i == base) {
        out.push(base.to_string());
    }
    if let Some(args) = args {
        for arg in args.split(',') {
            collect_imports(arg.trim(), out);
        }
    }
}
