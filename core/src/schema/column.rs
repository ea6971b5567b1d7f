use crate::alloc_prelude::*;
use heck::ToLowerCamelCase;
use mapgen_types::{JavaType, JdbcType};

/// An introspected column
///
/// `name` is the actual column name used in SQL text, `property` the entity
/// property bound in placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: String,
    property: String,
    jdbc_type: JdbcType,
    java_type: JavaType,
    identity: bool,
    generated_always: bool,
    updatable: bool,
}

impl Column {
    /// Column with the property name and Java type derived from the column
    /// name and JDBC type.
    pub fn new(name: impl Into<String>, jdbc_type: JdbcType) -> Self {
        let name = name.into();
        Self {
            property: name.to_lower_camel_case(),
            java_type: jdbc_type.default_java_type(),
            name,
            jdbc_type,
            identity: false,
            generated_always: false,
            updatable: true,
        }
    }

    pub fn property(mut self, property: impl Into<String>) -> Self {
        self.property = property.into();
        self
    }

    pub fn java_type(mut self, java_type: JavaType) -> Self {
        self.java_type = java_type;
        self
    }

    /// Mark as auto-increment.
    pub fn identity(mut self, identity: bool) -> Self {
        self.identity = identity;
        self
    }

    /// Mark as computed by the database.
    pub fn generated_always(mut self, generated: bool) -> Self {
        self.generated_always = generated;
        self
    }

    pub fn updatable(mut self, updatable: bool) -> Self {
        self.updatable = updatable;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn property_name(&self) -> &str {
        &self.property
    }

    pub fn jdbc_type(&self) -> JdbcType {
        self.jdbc_type
    }

    pub fn java(&self) -> &JavaType {
        &self.java_type
    }

    pub fn is_identity(&self) -> bool {
        self.identity
    }

    pub fn is_generated_always(&self) -> bool {
        self.generated_always
    }

    pub fn is_updatable(&self) -> bool {
        self.updatable
    }

    /// Written by insert statements: neither identity nor generated.
    pub fn is_insertable(&self) -> bool {
        !self.identity && !self.generated_always
    }

    /// `#{prefix.property,jdbcType=TYPE}`
    ///
    /// ```
    /// use mapgen_core::schema::Column;
    /// use mapgen_types::JdbcType;
    ///
    /// let col = Column::new("user_id", JdbcType::Bigint);
    /// assert_eq!(col.placeholder(""), "#{userId,jdbcType=BIGINT}");
    /// assert_eq!(col.placeholder("item."), "#{item.userId,jdbcType=BIGINT}");
    /// ```
    pub fn placeholder(&self, prefix: &str) -> String {
        format!("#{{{}{},jdbcType={}}}", prefix, self.property, self.jdbc_type)
    }

    /// `#{prefix.property}` without a type hint
    pub fn bare_placeholder(&self, prefix: &str) -> String {
        format!("#{{{}{}}}", prefix, self.property)
    }

    pub(crate) fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_name() {
        let col = Column::new("is_deleted", JdbcType::Tinyint);
        assert_eq!(col.property_name(), "isDeleted");
        assert_eq!(col.java().name(), "java.lang.Byte");
        assert!(col.is_updatable());
        assert!(col.is_insertable());
    }

    #[test]
    fn test_insertable_flags() {
        let id = Column::new("id", JdbcType::Integer).identity(true);
        let total = Column::new("total", JdbcType::Decimal).generated_always(true);
        assert!(!id.is_insertable());
        assert!(!total.is_insertable());
    }

    #[test]
    fn test_placeholders() {
        let col = Column::new("NAME", JdbcType::Varchar).property("name");
        assert_eq!(col.placeholder(""), "#{name,jdbcType=VARCHAR}");
        assert_eq!(col.bare_placeholder("item."), "#{item.name}");
        assert!(col.matches("name"));
    }
}
