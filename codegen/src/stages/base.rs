use mapgen_core::xml::XmlElement;

use super::{entity_select, where_clause};
use crate::compose::{assignment_list, column_list, equality_chain, placeholder_list};
use crate::context::{BASE_COLUMN_LIST, BASE_RESULT_MAP, TableContext};
use crate::method::{MethodDescriptor, Parameter, ReturnShape};
use crate::stage::{MethodSynthesis, SqlSynthesis, requires_primary_key};

/// Result map, column list fragment and the single-row statements:
/// `selectByPrimaryKey`, `deleteByPrimaryKey`, `insert`, `updateByPrimaryKey`
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseStatements;

impl BaseStatements {
    /// Columns of the single-row insert; the soft delete flag is left to the
    /// logical delete rewrite, which adds it back as an optional slot
    fn insert_columns<'a>(cx: &TableContext<'a>) -> Vec<&'a mapgen_core::Column> {
        cx.insert_columns()
            .into_iter()
            .filter(|c| !cx.is_logical_delete_flag(c))
            .collect()
    }

    fn has_insert(cx: &TableContext<'_>) -> bool {
        !Self::insert_columns(cx).is_empty() || cx.logical_delete.is_some()
    }

    fn has_update(cx: &TableContext<'_>) -> bool {
        requires_primary_key(cx, "updateByPrimaryKey") && !cx.update_columns().is_empty()
    }

    fn key_params(cx: &TableContext<'_>) -> Vec<Parameter> {
        cx.primary_key()
            .into_iter()
            .map(|c| Parameter::bound(c.java().clone(), c.property_name()))
            .collect()
    }

    fn result_map(cx: &TableContext<'_>) -> XmlElement {
        let mut map = XmlElement::new("resultMap")
            .attr("id", BASE_RESULT_MAP)
            .attr("type", cx.entity.name());
        for column in cx.table.columns() {
            let tag = if cx.table.is_primary_key(column) { "id" } else { "result" };
            map.push(
                XmlElement::new(tag)
                    .attr("column", column.name())
                    .attr("property", column.property_name())
                    .attr("jdbcType", column.jdbc_type().as_str()),
            );
        }
        map
    }

    fn insert(cx: &TableContext<'_>) -> XmlElement {
        let columns = Self::insert_columns(cx);
        let mut insert = XmlElement::new("insert")
            .attr("id", "insert")
            .attr("parameterType", cx.entity.name());
        if let [key] = cx.primary_key().as_slice() {
            if key.is_identity() {
                insert.set_attr("useGeneratedKeys", "true");
                insert.set_attr("keyProperty", key.property_name());
            }
        }
        let mut names = XmlElement::new("trim")
            .attr("prefix", "(")
            .attr("suffix", ")")
            .attr("prefixOverrides", ",");
        names.extend_text(column_list(&columns));
        let mut values = XmlElement::new("trim")
            .attr("prefix", "values (")
            .attr("suffix", ")")
            .attr("prefixOverrides", ",");
        values.extend_text(placeholder_list(&columns, ""));
        insert
            .text(format!("insert into {}", cx.table_name()))
            .child(names)
            .child(values)
    }
}

impl MethodSynthesis for BaseStatements {
    fn name(&self) -> &'static str {
        "base"
    }

    fn methods(&self, cx: &TableContext<'_>) -> Vec<MethodDescriptor> {
        let mut methods = Vec::new();
        if requires_primary_key(cx, "selectByPrimaryKey") {
            methods.push(
                MethodDescriptor::new("selectByPrimaryKey", ReturnShape::SingleEntity)
                    .params(Self::key_params(cx)),
            );
            methods.push(
                MethodDescriptor::new("deleteByPrimaryKey", ReturnShape::affected_rows())
                    .params(Self::key_params(cx)),
            );
        }
        if Self::has_insert(cx) {
            methods.push(
                MethodDescriptor::new("insert", ReturnShape::affected_rows())
                    .param(Parameter::plain(cx.entity.clone(), "record")),
            );
        }
        if Self::has_update(cx) {
            methods.push(
                MethodDescriptor::new("updateByPrimaryKey", ReturnShape::affected_rows())
                    .param(Parameter::plain(cx.entity.clone(), "record")),
            );
        }
        methods
    }
}

impl SqlSynthesis for BaseStatements {
    fn name(&self) -> &'static str {
        "base"
    }

    fn statements(&self, cx: &TableContext<'_>) -> Vec<XmlElement> {
        let table = cx.table_name();
        let all: Vec<_> = cx.table.columns().iter().collect();
        let mut fragment = XmlElement::new("sql").attr("id", BASE_COLUMN_LIST);
        fragment.extend_text(column_list(&all));

        let mut out = vec![Self::result_map(cx), fragment];

        if requires_primary_key(cx, "selectByPrimaryKey") {
            let key = cx.primary_key();
            let parameter_type = TableContext::key_parameter_type(&key);
            out.push(
                entity_select("selectByPrimaryKey")
                    .attr("parameterType", parameter_type.as_str())
                    .text("select")
                    .child(XmlElement::include(BASE_COLUMN_LIST))
                    .text(format!("from {table}"))
                    .child(where_clause().text(equality_chain(&key, ""))),
            );
            out.push(
                XmlElement::new("delete")
                    .attr("id", "deleteByPrimaryKey")
                    .attr("parameterType", parameter_type)
                    .text(format!("delete from {table}"))
                    .child(where_clause().text(equality_chain(&key, ""))),
            );
        }
        if Self::has_insert(cx) {
            out.push(Self::insert(cx));
        }
        if Self::has_update(cx) {
            let mut set = XmlElement::new("set");
            set.extend_text(assignment_list(&cx.update_columns(), ""));
            out.push(
                XmlElement::new("update")
                    .attr("id", "updateByPrimaryKey")
                    .attr("parameterType", cx.entity.name())
                    .text(format!("update {table}"))
                    .child(set)
                    .child(where_clause().text(equality_chain(&cx.primary_key(), ""))),
            );
        }
        out
    }
}
