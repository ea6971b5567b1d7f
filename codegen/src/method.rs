//! Abstract mapper method signatures

use mapgen_types::JavaType;

/// What a mapper method returns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnShape {
    /// A plain value such as affected rows or a key
    Scalar(JavaType),
    SingleEntity,
    ListOfEntity,
    /// A row count, rendered as `long`
    Count,
}

impl ReturnShape {
    /// Java type of the shape for the given entity type
    pub fn java_type(&self, entity: &JavaType) -> JavaType {
        match self {
            ReturnShape::Scalar(ty) => ty.clone(),
            ReturnShape::SingleEntity => entity.clone(),
            ReturnShape::ListOfEntity => JavaType::list_of(entity),
            ReturnShape::Count => JavaType::long(),
        }
    }

    /// Affected row count of a write statement
    pub fn affected_rows() -> Self {
        ReturnShape::Scalar(JavaType::int())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub ty: JavaType,
    pub name: String,
    /// Name the statement binds the argument under, `@Param("...")`
    pub binding: Option<String>,
    pub collection: bool,
}

impl Parameter {
    /// Parameter bound under its own name
    pub fn bound(ty: JavaType, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            ty,
            binding: Some(name.clone()),
            name,
            collection: false,
        }
    }

    /// Unbound parameter, its properties are referenced directly
    pub fn plain(ty: JavaType, name: impl Into<String>) -> Self {
        Self {
            ty,
            name: name.into(),
            binding: None,
            collection: false,
        }
    }

    /// Bound `List<element>` parameter
    pub fn list(element: &JavaType, name: impl Into<String>) -> Self {
        Self {
            collection: true,
            ..Self::bound(JavaType::list_of(element), name)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub name: String,
    pub returns: ReturnShape,
    pub params: Vec<Parameter>,
}

impl MethodDescriptor {
    pub fn new(name: impl Into<String>, returns: ReturnShape) -> Self {
        Self {
            name: name.into(),
            returns,
            params: Vec::new(),
        }
    }

    pub fn param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    pub fn params(mut self, params: impl IntoIterator<Item = Parameter>) -> Self {
        self.params.extend(params);
        self
    }

    pub fn param_names(&self) -> Vec<&str> {
        self.params.iter().map(|p| p.name.as_str()).collect()
    }

    /// Abstract Java declaration, `Role selectByName(@Param("name") String name);`
    pub fn signature(&self, entity: &JavaType) -> String {
        let params: Vec<String> = self
            .params
            .iter()
            .map(|p| match &p.binding {
                Some(binding) => format!("@Param(\"{}\") {} {}", binding, p.ty.short_name(), p.name),
                None => format!("{} {}", p.ty.short_name(), p.name),
            })
            .collect();
        format!(
            "{} {}({});",
            self.returns.java_type(entity).short_name(),
            self.name,
            params.join(", ")
        )
    }
}
