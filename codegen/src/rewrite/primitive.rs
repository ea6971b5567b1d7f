use crate::context::TableContext;
use crate::stage::{DocumentRewrite, Generated};

/// Narrows boxed parameter types of mapper methods to their primitives
///
/// Collection parameters keep their element types, `List<int>` is not Java.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrimitiveClient;

impl DocumentRewrite for PrimitiveClient {
    fn name(&self) -> &'static str {
        "primitive_client"
    }

    fn rewrite(&self, _cx: &TableContext<'_>, out: &mut Generated) {
        for param in out.methods.iter_mut().flat_map(|m| m.params.iter_mut()) {
            if !param.collection {
                param.ty = param.ty.narrowed();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::method::{MethodDescriptor, Parameter, ReturnShape};
    use mapgen_core::Document;
    use mapgen_core::schema::{Column, TableBuilder};
    use mapgen_types::{JavaType, JdbcType};

    #[test]
    fn test_narrows_scalar_params_only() {
        let table = TableBuilder::new("t_role")
            .column(Column::new("id", JdbcType::Bigint))
            .primary_key(["id"])
            .build()
            .table;
        let config = GeneratorConfig::default();
        let cx = TableContext::new(&table, &config);
        let mut out = Generated {
            methods: vec![
                MethodDescriptor::new("selectByPrimaryKey", ReturnShape::SingleEntity)
                    .param(Parameter::bound(JavaType::new("java.lang.Long"), "id")),
                MethodDescriptor::new("deleteBatch", ReturnShape::affected_rows())
                    .param(Parameter::list(&JavaType::new("java.lang.Long"), "records")),
            ],
            document: Document::mapper("RoleMapper"),
        };

        PrimitiveClient.rewrite(&cx, &mut out);

        assert_eq!(out.methods[0].params[0].ty.name(), "long");
        assert_eq!(out.methods[1].params[0].ty.name(), "java.util.List<java.lang.Long>");
    }
}
