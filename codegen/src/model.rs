//! Model class descriptors
//!
//! Fields and accessors of the entity class backing a table. Rendering the
//! class source is left to the host; the descriptors carry everything a
//! template needs.

use mapgen_core::naming::capitalize;
use mapgen_core::schema::Column;
use mapgen_core::{MapgenError, Result};
use mapgen_types::JavaType;

use crate::config::{BlobCodec, BlobTransform};
use crate::context::{TableContext, qualify};

/// Super-interface name used when the configuration names none
pub const DEFAULT_ENTITY_INTERFACE: &str = "DbEntity";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Private,
    /// Root classes expose fields to their subclasses
    Protected,
}

impl Visibility {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Visibility::Private => "private",
            Visibility::Protected => "protected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: JavaType,
    pub visibility: Visibility,
    /// Initialization expression, `new Bag()` for blob objects
    pub initializer: Option<String>,
}

impl Field {
    fn column(column: &Column, ty: JavaType, visibility: Visibility) -> Self {
        Self {
            name: column.property_name().to_string(),
            ty,
            visibility,
            initializer: None,
        }
    }

    fn blob_object(transform: &BlobTransform) -> Self {
        Self {
            name: transform.field.clone(),
            ty: JavaType::new(&transform.ty),
            visibility: Visibility::Private,
            initializer: Some(format!("new {}()", transform.ty)),
        }
    }
}

/// A concrete method of the model, body included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessor {
    pub name: String,
    /// `None` for `void` methods
    pub returns: Option<JavaType>,
    pub params: Vec<(JavaType, String)>,
    /// Body lines joined with `\n`
    pub body: String,
    /// Implements a method of the entity super-interface (`@Override`)
    pub overrides: bool,
}

impl Accessor {
    fn getter(field: &Field) -> Self {
        let prefix = if field.ty.name() == "boolean" { "is" } else { "get" };
        Self {
            name: format!("{prefix}{}", capitalize(&field.name)),
            returns: Some(field.ty.clone()),
            params: Vec::new(),
            body: format!("return {};", field.name),
            overrides: false,
        }
    }

    fn setter(field: &Field) -> Self {
        Self {
            name: format!("set{}", capitalize(&field.name)),
            returns: None,
            params: vec![(field.ty.clone(), field.name.clone())],
            body: format!("this.{0} = {0};", field.name),
            overrides: false,
        }
    }

    fn entity_method(name: &str, returns: Option<JavaType>, body: String) -> Self {
        Self {
            name: name.to_string(),
            returns,
            params: Vec::new(),
            body,
            overrides: true,
        }
    }

    /// `public Role getX() {` style declaration
    pub fn declaration(&self) -> String {
        let returns = self
            .returns
            .as_ref()
            .map_or_else(|| "void".to_string(), JavaType::short_name);
        let params: Vec<String> = self
            .params
            .iter()
            .map(|(ty, name)| format!("{} {}", ty.short_name(), name))
            .collect();
        format!("public {} {}({})", returns, self.name, params.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelClass {
    pub ty: JavaType,
    /// Implemented interfaces, the entity super-interface when enabled
    pub interfaces: Vec<JavaType>,
    pub fields: Vec<Field>,
    pub accessors: Vec<Accessor>,
}

impl ModelClass {
    /// Model of the table in `cx`
    ///
    /// Fails with [`MapgenError::MissingPrimaryKey`] when entity accessors are
    /// enabled and the table has no primary key, and with
    /// [`MapgenError::Metadata`] when a blob transform names a column the
    /// table does not have.
    pub fn build(cx: &TableContext<'_>) -> Result<Self> {
        let config = cx.config;
        let root = config
            .root_classes
            .iter()
            .any(|r| r == cx.table.domain() || r == cx.entity.name());
        let visibility = if root {
            Visibility::Protected
        } else {
            Visibility::Private
        };
        let blobs = blob_columns(cx)?;

        let mut fields = Vec::with_capacity(cx.table.columns().len() + blobs.len());
        let mut accessors = Vec::with_capacity(fields.capacity() * 2 + 3);
        for column in cx.table.columns() {
            let ty = if config.primitive_model {
                column.java().narrowed()
            } else {
                column.java().clone()
            };
            let field = Field::column(column, ty, visibility);
            accessors.push(Accessor::getter(&field));
            let mut setter = Accessor::setter(&field);
            fields.push(field);

            if let Some((_, transform)) = blobs.iter().find(|(c, _)| c.name() == column.name()) {
                setter.body = decode_body(column, transform);
                accessors.push(setter);
                let object = Field::blob_object(transform);
                accessors.push(Accessor::getter(&object));
                accessors.push(Accessor::setter(&object));
                fields.push(object);
            } else {
                accessors.push(setter);
            }
        }

        let mut interfaces = Vec::new();
        if config.entity_interface {
            interfaces.push(entity_super_interface(cx));
        }
        if !blobs.is_empty() {
            let body: Vec<String> = blobs.iter().map(|(c, t)| encode_line(c, t)).collect();
            accessors.push(Accessor::entity_method("beforeSave", None, body.join("\n")));
        }
        if config.entity_interface {
            accessors.extend(entity_accessors(cx)?);
        }

        Ok(Self {
            ty: cx.entity.clone(),
            interfaces,
            fields,
            accessors,
        })
    }

    pub fn accessor(&self, name: &str) -> Option<&Accessor> {
        self.accessors.iter().find(|a| a.name == name)
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

fn entity_super_interface(cx: &TableContext<'_>) -> JavaType {
    match &cx.config.entity_super_interface {
        Some(name) => JavaType::new(name),
        None => JavaType::new(qualify(&cx.config.model_package, DEFAULT_ENTITY_INTERFACE)),
    }
}

/// Configured blob transforms of this table, paired with their columns
fn blob_columns<'c>(cx: &'c TableContext<'_>) -> Result<Vec<(&'c Column, &'c BlobTransform)>> {
    cx.config
        .blob_transforms
        .iter()
        .filter(|t| t.applies_to(cx.table_name()))
        .map(|t| match cx.table.column_by_name(&t.column) {
            Some(column) => Ok((column, t)),
            None => Err(MapgenError::Metadata(format!(
                "blob transform names unknown column '{}' of table '{}'",
                t.column,
                cx.table_name()
            ))),
        })
        .collect()
}

fn codec(column: &Column, transform: &BlobTransform) -> BlobCodec {
    transform.codec.unwrap_or(if column.java().name() == "java.lang.String" {
        BlobCodec::Json
    } else {
        BlobCodec::Binary
    })
}

/// Setter body of the blob column: fills the object field, never leaves it null
fn decode_body(column: &Column, transform: &BlobTransform) -> String {
    let (raw, field, ty) = (column.property_name(), &transform.field, &transform.ty);
    let decode = match codec(column, transform) {
        BlobCodec::Json => format!(
            "this.{field} = com.alibaba.fastjson.JSON.parseObject({raw}, new com.alibaba.fastjson.TypeReference<{ty}>() {{}});"
        ),
        BlobCodec::Binary => format!(
            "if ({raw} != null && {raw}.length > 0) {{\n    this.{field} = ({ty}) util.KryoUtils.deserializeClassAndObjectWithVersion({raw});\n}}"
        ),
    };
    format!("{decode}\nif (this.{field} == null) {{\n    this.{field} = new {ty}();\n}}")
}

/// `beforeSave` line writing the object field back into the blob column
fn encode_line(column: &Column, transform: &BlobTransform) -> String {
    let (raw, field) = (column.property_name(), &transform.field);
    match codec(column, transform) {
        BlobCodec::Json => format!(
            "this.{raw} = com.alibaba.fastjson.JSON.toJSONString(this.{field}, com.alibaba.fastjson.serializer.SerializerFeature.WriteNonStringKeyAsString);"
        ),
        BlobCodec::Binary => {
            format!("this.{raw} = util.KryoUtils.serializeClassAndObjectWithVersion(this.{field});")
        }
    }
}

fn entity_accessors(cx: &TableContext<'_>) -> Result<[Accessor; 2]> {
    let key = cx.primary_key();
    let key_body = match key.as_slice() {
        [] => {
            return Err(MapgenError::MissingPrimaryKey {
                table: cx.table_name().to_string(),
                operation: "primaryKey()",
            });
        }
        [single] => format!("return {};", single.property_name()),
        composite => {
            let parts: Vec<&str> = composite.iter().map(|c| c.property_name()).collect();
            format!("return new Object[] {{ {} }};", parts.join(", "))
        }
    };
    Ok([
        Accessor::entity_method(
            "getMapperClass",
            Some(JavaType::new("java.lang.Class<?>")),
            format!("return {}.class;", cx.mapper.short_name()),
        ),
        Accessor::entity_method("primaryKey", Some(JavaType::object()), key_body),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use mapgen_core::schema::{IntrospectedTable, TableBuilder};
    use mapgen_types::JdbcType;

    fn role() -> IntrospectedTable {
        TableBuilder::new("t_role")
            .domain("Role")
            .column(Column::new("id", JdbcType::Integer).identity(true))
            .column(Column::new("role_name", JdbcType::Varchar))
            .column(Column::new("enabled", JdbcType::Bit))
            .primary_key(["id"])
            .build()
            .table
    }

    #[test]
    fn test_fields_and_accessors() {
        let table = role();
        let config = GeneratorConfig::default();
        let model = ModelClass::build(&TableContext::new(&table, &config)).unwrap();

        assert_eq!(model.fields.len(), 3);
        assert_eq!(model.fields[1].name, "roleName");
        assert_eq!(model.fields[1].visibility, Visibility::Private);
        assert_eq!(model.fields[0].ty.name(), "java.lang.Integer");

        let setter = model.accessor("setRoleName").unwrap();
        assert_eq!(setter.body, "this.roleName = roleName;");
        assert_eq!(setter.declaration(), "public void setRoleName(String roleName)");
        assert!(model.accessor("getEnabled").is_some());
        assert!(model.accessor("getMapperClass").is_none());
    }

    #[test]
    fn test_primitive_model() {
        let table = role();
        let config = GeneratorConfig {
            primitive_model: true,
            ..Default::default()
        };
        let model = ModelClass::build(&TableContext::new(&table, &config)).unwrap();

        assert_eq!(model.fields[0].ty.name(), "int");
        assert_eq!(model.fields[1].ty.name(), "java.lang.String");
        assert_eq!(model.accessor("isEnabled").unwrap().declaration(), "public boolean isEnabled()");
    }

    #[test]
    fn test_root_class_fields_protected() {
        let table = role();
        let config = GeneratorConfig {
            root_classes: vec!["Role".into()],
            ..Default::default()
        };
        let model = ModelClass::build(&TableContext::new(&table, &config)).unwrap();
        assert!(model.fields.iter().all(|f| f.visibility == Visibility::Protected));
    }

    #[test]
    fn test_entity_accessors() {
        let table = role();
        let config = GeneratorConfig {
            entity_interface: true,
            mapper_package: "com.acme.mapper".into(),
            ..Default::default()
        };
        let model = ModelClass::build(&TableContext::new(&table, &config)).unwrap();
        assert_eq!(model.accessor("getMapperClass").unwrap().body, "return RoleMapper.class;");
        assert_eq!(model.accessor("primaryKey").unwrap().body, "return id;");
        assert!(model.accessor("primaryKey").unwrap().overrides);
        assert!(!model.accessor("getRoleName").unwrap().overrides);
        assert_eq!(model.interfaces, vec![JavaType::new("DbEntity")]);
    }

    #[test]
    fn test_configured_super_interface() {
        let table = role();
        let config = GeneratorConfig {
            entity_interface: true,
            entity_super_interface: Some("com.acme.cache.DbEntity".into()),
            ..Default::default()
        };
        let model = ModelClass::build(&TableContext::new(&table, &config)).unwrap();
        assert_eq!(model.interfaces, vec![JavaType::new("com.acme.cache.DbEntity")]);
    }

    #[test]
    fn test_no_super_interface_by_default() {
        let table = role();
        let config = GeneratorConfig::default();
        let model = ModelClass::build(&TableContext::new(&table, &config)).unwrap();
        assert!(model.interfaces.is_empty());
    }

    fn player() -> IntrospectedTable {
        TableBuilder::new("t_player")
            .domain("Player")
            .column(Column::new("id", JdbcType::Bigint))
            .column(Column::new("bag_data", JdbcType::Blob))
            .column(Column::new("profile", JdbcType::Longvarchar))
            .primary_key(["id"])
            .build()
            .table
    }

    fn transform(column: &str, field: &str, ty: &str) -> BlobTransform {
        BlobTransform {
            table: "t_player".into(),
            column: column.into(),
            field: field.into(),
            ty: ty.into(),
            codec: None,
        }
    }

    #[test]
    fn test_blob_object_follows_its_column() {
        let table = player();
        let config = GeneratorConfig {
            blob_transforms: vec![transform("bag_data", "bag", "com.acme.Bag")],
            ..Default::default()
        };
        let model = ModelClass::build(&TableContext::new(&table, &config)).unwrap();

        let names: Vec<&str> = model.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["id", "bagData", "bag", "profile"]);
        let bag = model.field("bag").unwrap();
        assert_eq!(bag.initializer.as_deref(), Some("new com.acme.Bag()"));
        assert_eq!(bag.visibility, Visibility::Private);
        assert_eq!(model.accessor("getBag").unwrap().declaration(), "public Bag getBag()");
        assert_eq!(model.accessor("setBag").unwrap().body, "this.bag = bag;");
        assert_eq!(
            model.accessor("setBagData").unwrap().body,
            "if (bagData != null && bagData.length > 0) {\n    this.bag = (com.acme.Bag) util.KryoUtils.deserializeClassAndObjectWithVersion(bagData);\n}\nif (this.bag == null) {\n    this.bag = new com.acme.Bag();\n}"
        );
        let before_save = model.accessor("beforeSave").unwrap();
        assert!(before_save.overrides);
        assert_eq!(before_save.declaration(), "public void beforeSave()");
        assert_eq!(
            before_save.body,
            "this.bagData = util.KryoUtils.serializeClassAndObjectWithVersion(this.bag);"
        );
    }

    #[test]
    fn test_text_blob_uses_json() {
        let table = player();
        let config = GeneratorConfig {
            blob_transforms: vec![
                transform("bag_data", "bag", "com.acme.Bag"),
                transform("profile", "settings", "com.acme.Settings"),
            ],
            ..Default::default()
        };
        let model = ModelClass::build(&TableContext::new(&table, &config)).unwrap();

        assert!(model.accessor("setProfile").unwrap().body.starts_with(
            "this.settings = com.alibaba.fastjson.JSON.parseObject(profile, new com.alibaba.fastjson.TypeReference<com.acme.Settings>() {});\n"
        ));
        let lines: Vec<&str> = model.accessor("beforeSave").unwrap().body.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("this.profile = com.alibaba.fastjson.JSON.toJSONString(this.settings,"));
    }

    #[test]
    fn test_blob_transform_of_other_table_ignored() {
        let table = role();
        let config = GeneratorConfig {
            blob_transforms: vec![transform("bag_data", "bag", "com.acme.Bag")],
            ..Default::default()
        };
        let model = ModelClass::build(&TableContext::new(&table, &config)).unwrap();
        assert!(model.accessor("beforeSave").is_none());
        assert_eq!(model.fields.len(), 3);
    }

    #[test]
    fn test_blob_transform_unknown_column() {
        let table = player();
        let config = GeneratorConfig {
            blob_transforms: vec![transform("inventory", "bag", "com.acme.Bag")],
            ..Default::default()
        };
        let err = ModelClass::build(&TableContext::new(&table, &config)).unwrap_err();
        assert!(matches!(err, MapgenError::Metadata(ref m) if m.contains("'inventory'")));
    }

    #[test]
    fn test_composite_primary_key_accessor() {
        let table = TableBuilder::new("t_user_role")
            .column(Column::new("tenant_id", JdbcType::Bigint))
            .column(Column::new("user_id", JdbcType::Bigint))
            .primary_key(["tenant_id", "user_id"])
            .build()
            .table;
        let config = GeneratorConfig {
            entity_interface: true,
            ..Default::default()
        };
        let model = ModelClass::build(&TableContext::new(&table, &config)).unwrap();
        assert_eq!(
            model.accessor("primaryKey").unwrap().body,
            "return new Object[] { tenantId, userId };"
        );
    }

    #[test]
    fn test_entity_accessors_need_primary_key() {
        let table = TableBuilder::new("t_log")
            .column(Column::new("message", JdbcType::Varchar))
            .build()
            .table;
        let config = GeneratorConfig {
            entity_interface: true,
            ..Default::default()
        };
        let err = ModelClass::build(&TableContext::new(&table, &config)).unwrap_err();
        assert!(matches!(
            err,
            MapgenError::MissingPrimaryKey { ref table, operation: "primaryKey()" } if table == "t_log"
        ));
    }
}
