//! Java source of the mapper interface

use std::collections::BTreeSet;
use std::fmt::Write;

use mapgen_types::JavaType;

use crate::method::MethodDescriptor;
use crate::pipeline::TableOutput;

/// Annotation naming a bound parameter
pub const PARAM_ANNOTATION: &str = "org.apache.ibatis.annotations.Param";

fn package_of(ty: &JavaType) -> Option<&str> {
    ty.name().rsplit_once('.').map(|(package, _)| package)
}

/// Sorted imports needed by `methods`, minus types of the mapper's own package
pub fn imports(mapper: &JavaType, entity: &JavaType, methods: &[MethodDescriptor]) -> Vec<String> {
    let own_package = package_of(mapper);
    let mut imports = BTreeSet::new();
    for method in methods {
        imports.extend(method.returns.java_type(entity).imports());
        for param in &method.params {
            imports.extend(param.ty.imports());
            if param.binding.is_some() {
                imports.insert(PARAM_ANNOTATION.to_string());
            }
        }
    }
    imports
        .into_iter()
        .filter(|import| import.rsplit_once('.').map(|(package, _)| package) != own_package)
        .collect()
}

/// Render the interface declaring `methods`
///
/// ```
/// use mapgen_codegen::interface::render;
/// use mapgen_codegen::{MethodDescriptor, Parameter, ReturnShape};
/// use mapgen_types::JavaType;
///
/// let mapper = JavaType::new("com.acme.mapper.RoleMapper");
/// let entity = JavaType::new("com.acme.model.Role");
/// let methods = vec![
///     MethodDescriptor::new("selectByName", ReturnShape::SingleEntity)
///         .param(Parameter::bound(JavaType::string(), "name")),
/// ];
/// let source = render(&mapper, &entity, &methods);
/// assert!(source.starts_with("package com.acme.mapper;\n"));
/// assert!(source.contains("import com.acme.model.Role;\n"));
/// assert!(source.contains("    Role selectByName(@Param(\"name\") String name);\n"));
/// ```
pub fn render(mapper: &JavaType, entity: &JavaType, methods: &[MethodDescriptor]) -> String {
    let mut out = String::new();
    if let Some(package) = package_of(mapper) {
        let _ = writeln!(out, "package {package};");
        out.push('\n');
    }
    let imports = imports(mapper, entity, methods);
    for import in &imports {
        let _ = writeln!(out, "import {import};");
    }
    if !imports.is_empty() {
        out.push('\n');
    }

    let _ = writeln!(out, "public interface {} {{", mapper.short_name());
    for (i, method) in methods.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "    {}", method.signature(entity));
    }
    out.push_str("}\n");
    out
}

impl TableOutput {
    /// Source of the mapper interface for this table
    pub fn interface_source(&self) -> String {
        render(&self.mapper, &self.entity, &self.methods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::{Parameter, ReturnShape};

    #[test]
    fn test_render_without_packages() {
        let mapper = JavaType::new("RoleMapper");
        let entity = JavaType::new("Role");
        let methods = vec![
            MethodDescriptor::new("getTotal", ReturnShape::Count),
            MethodDescriptor::new("insert", ReturnShape::affected_rows())
                .param(Parameter::plain(entity.clone(), "record")),
        ];
        assert_eq!(
            render(&mapper, &entity, &methods),
            "public interface RoleMapper {\n    long getTotal();\n\n    int insert(Role record);\n}\n"
        );
    }

    #[test]
    fn test_imports_sorted_and_filtered() {
        let mapper = JavaType::new("com.acme.mapper.RoleMapper");
        let entity = JavaType::new("com.acme.mapper.Role");
        let methods = vec![
            MethodDescriptor::new("selectAll", ReturnShape::ListOfEntity),
            MethodDescriptor::new("selectByCreatedAt", ReturnShape::ListOfEntity)
                .param(Parameter::bound(JavaType::new("java.util.Date"), "createdAt")),
        ];
        assert_eq!(
            imports(&mapper, &entity, &methods),
            vec![
                "java.util.Date".to_string(),
                "java.util.List".to_string(),
                PARAM_ANNOTATION.to_string(),
            ]
        );
    }
}
