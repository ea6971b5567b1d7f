use mapgen_core::xml::XmlElement;

use super::paren_trim;
use crate::compose::{assignment_list, column_list, placeholder_list};
use crate::context::TableContext;
use crate::method::{MethodDescriptor, Parameter, ReturnShape};
use crate::stage::{MethodSynthesis, SqlSynthesis, requires_primary_key};

/// `insertOrUpdate(record)`, an insert followed by `ON DUPLICATE KEY UPDATE`
/// over every updatable non-key column
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertOrUpdate;

impl InsertOrUpdate {
    fn applies(cx: &TableContext<'_>) -> bool {
        requires_primary_key(cx, "insertOrUpdate")
            && !cx.insert_columns().is_empty()
            && !cx.update_columns().is_empty()
    }
}

impl MethodSynthesis for InsertOrUpdate {
    fn name(&self) -> &'static str {
        "insert_or_update"
    }

    fn methods(&self, cx: &TableContext<'_>) -> Vec<MethodDescriptor> {
        if !Self::applies(cx) {
            return Vec::new();
        }
        vec![
            MethodDescriptor::new("insertOrUpdate", ReturnShape::affected_rows())
                .param(Parameter::plain(cx.entity.clone(), "record")),
        ]
    }
}

impl SqlSynthesis for InsertOrUpdate {
    fn name(&self) -> &'static str {
        "insert_or_update"
    }

    fn statements(&self, cx: &TableContext<'_>) -> Vec<XmlElement> {
        if !Self::applies(cx) {
            return Vec::new();
        }
        let columns = cx.insert_columns();
        let mut upsert = XmlElement::new("insert")
            .attr("id", "insertOrUpdate")
            .attr("parameterType", cx.entity.name())
            .text(format!("insert into {}", cx.table_name()))
            .child(paren_trim("(", column_list(&columns)))
            .child(paren_trim("values (", placeholder_list(&columns, "")))
            .text("ON DUPLICATE KEY UPDATE");
        upsert.extend_text(assignment_list(&cx.update_columns(), ""));
        vec![upsert]
    }
}
