//! JDBC type tags
//!
//! Introspection reports every column with a JDBC type. The tag is rendered
//! verbatim into `#{property,jdbcType=...}` placeholders and decides the
//! default Java type of a column when the metadata does not name one.

use crate::alloc_prelude::*;
use crate::JavaType;

/// JDBC type of an introspected column
///
/// # Examples
///
/// ```
/// use mapgen_types::JdbcType;
///
/// assert_eq!(JdbcType::parse("varchar"), Some(JdbcType::Varchar));
/// assert_eq!(JdbcType::parse("INT"), Some(JdbcType::Integer));
/// assert_eq!(JdbcType::Integer.as_str(), "INTEGER");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum JdbcType {
    Bit,
    Boolean,
    Tinyint,
    Smallint,
    Integer,
    Bigint,
    Float,
    Real,
    Double,
    Numeric,
    Decimal,
    Char,
    #[default]
    Varchar,
    Longvarchar,
    Nchar,
    Nvarchar,
    Clob,
    Date,
    Time,
    Timestamp,
    Binary,
    Varbinary,
    Longvarbinary,
    Blob,
    Other,
}

impl JdbcType {
    /// Parse a type name (case-insensitive)
    ///
    /// Accepts the JDBC names plus the common MySQL column type spellings
    /// (`INT`, `DATETIME`, `TEXT`, ...) that driver metadata sometimes
    /// reports instead.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let upper = s.trim().to_ascii_uppercase();
        let ty = match upper.as_str() {
            "BIT" => JdbcType::Bit,
            "BOOLEAN" | "BOOL" => JdbcType::Boolean,
            "TINYINT" => JdbcType::Tinyint,
            "SMALLINT" => JdbcType::Smallint,
            "INTEGER" | "INT" | "MEDIUMINT" => JdbcType::Integer,
            "BIGINT" => JdbcType::Bigint,
            "FLOAT" => JdbcType::Float,
            "REAL" => JdbcType::Real,
            "DOUBLE" => JdbcType::Double,
            "NUMERIC" => JdbcType::Numeric,
            "DECIMAL" => JdbcType::Decimal,
            "CHAR" => JdbcType::Char,
            "VARCHAR" => JdbcType::Varchar,
            "LONGVARCHAR" | "TEXT" | "MEDIUMTEXT" | "LONGTEXT" => JdbcType::Longvarchar,
            "NCHAR" => JdbcType::Nchar,
            "NVARCHAR" => JdbcType::Nvarchar,
            "CLOB" => JdbcType::Clob,
            "DATE" => JdbcType::Date,
            "TIME" => JdbcType::Time,
            "TIMESTAMP" | "DATETIME" => JdbcType::Timestamp,
            "BINARY" => JdbcType::Binary,
            "VARBINARY" => JdbcType::Varbinary,
            "LONGVARBINARY" => JdbcType::Longvarbinary,
            "BLOB" | "LONGBLOB" | "MEDIUMBLOB" => JdbcType::Blob,
            "OTHER" => JdbcType::Other,
            _ => return None,
        };
        Some(ty)
    }

    /// The JDBC name as written into placeholders
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            JdbcType::Bit => "BIT",
            JdbcType::Boolean => "BOOLEAN",
            JdbcType::Tinyint => "TINYINT",
            JdbcType::Smallint => "SMALLINT",
            JdbcType::Integer => "INTEGER",
            JdbcType::Bigint => "BIGINT",
            JdbcType::Float => "FLOAT",
            JdbcType::Real => "REAL",
            JdbcType::Double => "DOUBLE",
            JdbcType::Numeric => "NUMERIC",
            JdbcType::Decimal => "DECIMAL",
            JdbcType::Char => "CHAR",
            JdbcType::Varchar => "VARCHAR",
            JdbcType::Longvarchar => "LONGVARCHAR",
            JdbcType::Nchar => "NCHAR",
            JdbcType::Nvarchar => "NVARCHAR",
            JdbcType::Clob => "CLOB",
            JdbcType::Date => "DATE",
            JdbcType::Time => "TIME",
            JdbcType::Timestamp => "TIMESTAMP",
            JdbcType::Binary => "BINARY",
            JdbcType::Varbinary => "VARBINARY",
            JdbcType::Longvarbinary => "LONGVARBINARY",
            JdbcType::Blob => "BLOB",
            JdbcType::Other => "OTHER",
        }
    }

    /// Java type a column of this JDBC type maps to when none is given
    #[must_use]
    pub fn default_java_type(&self) -> JavaType {
        let name = match self {
            JdbcType::Bit | JdbcType::Boolean => "java.lang.Boolean",
            JdbcType::Tinyint => "java.lang.Byte",
            JdbcType::Smallint => "java.lang.Short",
            JdbcType::Integer => "java.lang.Integer",
            JdbcType::Bigint => "java.lang.Long",
            JdbcType::Real => "java.lang.Float",
            JdbcType::Float | JdbcType::Double => "java.lang.Double",
            JdbcType::Numeric | JdbcType::Decimal => "java.math.BigDecimal",
            JdbcType::Char
            | JdbcType::Varchar
            | JdbcType::Longvarchar
            | JdbcType::Nchar
            | JdbcType::Nvarchar
            | JdbcType::Clob => "java.lang.String",
            JdbcType::Date | JdbcType::Time | JdbcType::Timestamp => "java.util.Date",
            JdbcType::Binary | JdbcType::Varbinary | JdbcType::Longvarbinary | JdbcType::Blob => {
                "byte[]"
            }
            JdbcType::Other => "java.lang.Object",
        };
        JavaType::new(name)
    }
}

impl core::fmt::Display for JdbcType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for JdbcType {
    type Err = JdbcTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JdbcType::parse(s).ok_or_else(|| JdbcTypeParseError(s.to_string()))
    }
}

/// Error returned when parsing an unknown JDBC type name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JdbcTypeParseError(pub String);

impl core::fmt::Display for JdbcTypeParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unknown jdbc type '{}'", self.0)
    }
}

impl core::error::Error for JdbcTypeParseError {}
