//! Boxed to primitive narrowing
//!
//! A fixed table of the eight `java.lang` wrapper types and their unboxed
//! forms. Matching is exact on the fully qualified name; generic arguments
//! and subtypes are never narrowed.

/// The narrowing table, in wrapper declaration order.
pub const PRIMITIVE_NARROWING: [(&str, &str); 8] = [
    ("java.lang.Long", "long"),
    ("java.lang.Integer", "int"),
    ("java.lang.Double", "double"),
    ("java.lang.Float", "float"),
    ("java.lang.Boolean", "boolean"),
    ("java.lang.Short", "short"),
    ("java.lang.Byte", "byte"),
    ("java.lang.Character", "char"),
];

/// Primitive form of a boxed type, or `None` when the name is not one of the
/// eight wrappers.
///
/// ```
/// use mapgen_types::primitive::narrow;
///
/// assert_eq!(narrow("java.lang.Integer"), Some("int"));
/// assert_eq!(narrow("Integer"), None);
/// assert_eq!(narrow("java.util.List<java.lang.Integer>"), None);
/// ```
#[must_use]
pub fn narrow(fully_qualified: &str) -> Option<&'static str> {
    PRIMITIVE_NARROWING
        .iter()
        .find(|(boxed, _)| *boxed == fully_qualified)
        .map(|(_, primitive)| *primitive)
}

/// Whether `name` is one of the primitive targets of the table.
#[must_use]
pub fn is_primitive(name: &str) -> bool {
    PRIMITIVE_NARROWING.iter().any(|(_, primitive)| *primitive == name)
}
