//! Multi-row statements driven by a collection of records.

use mapgen_core::Column;
use mapgen_core::xml::XmlElement;
use mapgen_types::JavaType;

use super::{COLUMNS, RECORDS, in_list, paren_trim, where_clause};
use crate::compose::{
    case_arm, column_choice_test, column_list, key_tuple, key_tuple_values, placeholder_list,
};
use crate::context::TableContext;
use crate::method::{MethodDescriptor, Parameter, ReturnShape};
use crate::stage::{MethodSynthesis, SqlSynthesis, requires_primary_key};

fn records_param(cx: &TableContext<'_>) -> Parameter {
    Parameter::list(&cx.entity, RECORDS)
}

fn columns_param() -> Parameter {
    Parameter::list(&JavaType::string(), COLUMNS)
}

/// `<foreach collection="columns" item="column">` with one guarded body per
/// candidate column
fn column_choice(columns: &[&Column], body: impl Fn(&Column) -> XmlElement) -> XmlElement {
    let mut choice = XmlElement::new("foreach")
        .attr("collection", COLUMNS)
        .attr("item", "column");
    for &column in columns {
        choice.push(body(column));
    }
    choice
}

fn guarded(column: &Column) -> XmlElement {
    XmlElement::new("if").attr("test", column_choice_test(column, "column"))
}

/// `insertBatch(records)`, a multi-row `insert .. values (..),(..)`
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchInsert;

impl MethodSynthesis for BatchInsert {
    fn name(&self) -> &'static str {
        "batch_insert"
    }

    fn methods(&self, cx: &TableContext<'_>) -> Vec<MethodDescriptor> {
        if cx.insert_columns().is_empty() {
            return Vec::new();
        }
        vec![MethodDescriptor::new("insertBatch", ReturnShape::affected_rows()).param(records_param(cx))]
    }
}

impl SqlSynthesis for BatchInsert {
    fn name(&self) -> &'static str {
        "batch_insert"
    }

    fn statements(&self, cx: &TableContext<'_>) -> Vec<XmlElement> {
        let columns = cx.insert_columns();
        if columns.is_empty() {
            return Vec::new();
        }
        let rows = XmlElement::new("foreach")
            .attr("collection", RECORDS)
            .attr("item", "item")
            .attr("separator", ",")
            .child(paren_trim("(", placeholder_list(&columns, "item.")));
        vec![
            XmlElement::new("insert")
                .attr("id", "insertBatch")
                .attr("parameterType", "java.util.List")
                .text(format!("insert into {}", cx.table_name()))
                .child(paren_trim("(", column_list(&columns)))
                .text("values")
                .child(rows),
        ]
    }
}

/// `insertBatchSelective(records, columns)`, writing only the named columns
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchInsertSelective;

impl MethodSynthesis for BatchInsertSelective {
    fn name(&self) -> &'static str {
        "batch_insert_selective"
    }

    fn methods(&self, cx: &TableContext<'_>) -> Vec<MethodDescriptor> {
        if cx.insert_columns().is_empty() {
            return Vec::new();
        }
        vec![
            MethodDescriptor::new("insertBatchSelective", ReturnShape::affected_rows())
                .param(records_param(cx))
                .param(columns_param()),
        ]
    }
}

impl SqlSynthesis for BatchInsertSelective {
    fn name(&self) -> &'static str {
        "batch_insert_selective"
    }

    fn statements(&self, cx: &TableContext<'_>) -> Vec<XmlElement> {
        let columns = cx.insert_columns();
        if columns.is_empty() {
            return Vec::new();
        }
        let names = column_choice(&columns, |c| guarded(c).text(format!("{},", c.name())));
        let values = column_choice(&columns, |c| {
            guarded(c).text(format!("{},", c.placeholder("record.")))
        });
        let rows = XmlElement::new("foreach")
            .attr("collection", RECORDS)
            .attr("item", "record")
            .attr("separator", ",")
            .child(paren_trim("(", Vec::new()).child(values));
        vec![
            XmlElement::new("insert")
                .attr("id", "insertBatchSelective")
                .attr("parameterType", "map")
                .text(format!("insert into {}", cx.table_name()))
                .child(paren_trim("(", Vec::new()).child(names))
                .text("values")
                .child(rows),
        ]
    }
}

/// `deleteBatch(records)`, deleting by the primary key of every record
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchDelete;

impl MethodSynthesis for BatchDelete {
    fn name(&self) -> &'static str {
        "batch_delete"
    }

    fn methods(&self, cx: &TableContext<'_>) -> Vec<MethodDescriptor> {
        if !requires_primary_key(cx, "deleteBatch") {
            return Vec::new();
        }
        vec![MethodDescriptor::new("deleteBatch", ReturnShape::affected_rows()).param(records_param(cx))]
    }
}

impl SqlSynthesis for BatchDelete {
    fn name(&self) -> &'static str {
        "batch_delete"
    }

    fn statements(&self, cx: &TableContext<'_>) -> Vec<XmlElement> {
        if !requires_primary_key(cx, "deleteBatch") {
            return Vec::new();
        }
        let key = cx.primary_key();
        vec![
            XmlElement::new("delete")
                .attr("id", "deleteBatch")
                .attr("parameterType", "java.util.List")
                .text(format!("delete from {}", cx.table_name()))
                .child(
                    where_clause()
                        .text(format!("{} in", key_tuple(&key)))
                        .child(in_list(RECORDS, key_tuple_values(&key, "item."))),
                ),
        ]
    }
}

/// `batchUpdate(records)` and `batchUpdateSelective(records, columns)`
///
/// Each updatable column becomes `col = case when <key> then <value> .. end`
/// over the records, limited by `where <key> in (..)` over the same records.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchUpdate;

impl BatchUpdate {
    fn applies(cx: &TableContext<'_>) -> bool {
        requires_primary_key(cx, "batchUpdate") && !cx.update_columns().is_empty()
    }

    fn case_clause(key: &[&Column], column: &Column) -> XmlElement {
        XmlElement::new("trim")
            .attr("prefix", format!("{} = case", column.name()))
            .attr("suffix", "end,")
            .child(
                XmlElement::new("foreach")
                    .attr("collection", RECORDS)
                    .attr("item", "item")
                    .text(case_arm(key, column, "item.")),
            )
    }

    fn statement(cx: &TableContext<'_>, id: &str, selective: bool) -> XmlElement {
        let key = cx.primary_key();
        let columns = cx.update_columns();
        let mut set = XmlElement::new("trim")
            .attr("prefix", "set")
            .attr("suffixOverrides", ",");
        if selective {
            set.push(column_choice(&columns, |c| {
                guarded(c).child(Self::case_clause(&key, c))
            }));
        } else {
            for column in &columns {
                set.push(Self::case_clause(&key, column));
            }
        }
        XmlElement::new("update")
            .attr("id", id)
            .attr("parameterType", if selective { "map" } else { "java.util.List" })
            .text(format!("update {}", cx.table_name()))
            .child(set)
            .child(
                where_clause()
                    .text(format!("{} in", key_tuple(&key)))
                    .child(in_list(RECORDS, key_tuple_values(&key, "item."))),
            )
    }
}

impl MethodSynthesis for BatchUpdate {
    fn name(&self) -> &'static str {
        "batch_update"
    }

    fn methods(&self, cx: &TableContext<'_>) -> Vec<MethodDescriptor> {
        if !Self::applies(cx) {
            return Vec::new();
        }
        vec![
            MethodDescriptor::new("batchUpdate", ReturnShape::affected_rows()).param(records_param(cx)),
            MethodDescriptor::new("batchUpdateSelective", ReturnShape::affected_rows())
                .param(records_param(cx))
                .param(columns_param()),
        ]
    }
}

impl SqlSynthesis for BatchUpdate {
    fn name(&self) -> &'static str {
        "batch_update"
    }

    fn statements(&self, cx: &TableContext<'_>) -> Vec<XmlElement> {
        if !Self::applies(cx) {
            return Vec::new();
        }
        vec![
            Self::statement(cx, "batchUpdate", false),
            Self::statement(cx, "batchUpdateSelective", true),
        ]
    }
}
