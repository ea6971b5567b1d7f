//! Whole-table reads: full scan, offset and keyset pagination, last id of a
//! batch and row count.

use mapgen_core::naming::LAST_ID_PARAM;
use mapgen_core::xml::XmlElement;
use mapgen_types::JavaType;

use super::{entity_select, where_clause};
use crate::compose::{keyset_params, keyset_predicate, order_by};
use crate::context::TableContext;
use crate::method::{MethodDescriptor, Parameter, ReturnShape};
use crate::stage::{MethodSynthesis, SqlSynthesis, requires_primary_key};

fn limit_param() -> Parameter {
    Parameter::bound(JavaType::int(), "limit")
}

/// `selectAll()`
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectAll;

impl MethodSynthesis for SelectAll {
    fn name(&self) -> &'static str {
        "select_all"
    }

    fn methods(&self, _cx: &TableContext<'_>) -> Vec<MethodDescriptor> {
        vec![MethodDescriptor::new("selectAll", ReturnShape::ListOfEntity)]
    }
}

impl SqlSynthesis for SelectAll {
    fn name(&self) -> &'static str {
        "select_all"
    }

    fn statements(&self, cx: &TableContext<'_>) -> Vec<XmlElement> {
        vec![entity_select("selectAll").text(format!("SELECT * FROM {}", cx.table_name()))]
    }
}

/// `getBatchOffset(offset, limit)`, ordered by the primary key when there is one
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOffset;

impl MethodSynthesis for BatchOffset {
    fn name(&self) -> &'static str {
        "batch_offset"
    }

    fn methods(&self, _cx: &TableContext<'_>) -> Vec<MethodDescriptor> {
        vec![
            MethodDescriptor::new("getBatchOffset", ReturnShape::ListOfEntity)
                .param(Parameter::bound(JavaType::int(), "offset"))
                .param(limit_param()),
        ]
    }
}

impl SqlSynthesis for BatchOffset {
    fn name(&self) -> &'static str {
        "batch_offset"
    }

    fn statements(&self, cx: &TableContext<'_>) -> Vec<XmlElement> {
        let mut sql = format!("SELECT * FROM {}", cx.table_name());
        let key = cx.primary_key();
        if !key.is_empty() {
            sql.push_str(" ORDER BY ");
            sql.push_str(&order_by(&key));
        }
        sql.push_str(" LIMIT #{limit} OFFSET #{offset}");
        vec![
            entity_select("getBatchOffset")
                .attr("parameterType", "map")
                .text(sql),
        ]
    }
}

/// `getBatchCursor(lastId.., limit)`, keyset pagination over the primary key
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchCursor;

impl MethodSynthesis for BatchCursor {
    fn name(&self) -> &'static str {
        "batch_cursor"
    }

    fn methods(&self, cx: &TableContext<'_>) -> Vec<MethodDescriptor> {
        if !requires_primary_key(cx, "getBatchCursor") {
            return Vec::new();
        }
        let key = cx.primary_key();
        let params = key
            .iter()
            .zip(keyset_params(&key))
            .map(|(c, name)| Parameter::bound(c.java().clone(), name));
        vec![
            MethodDescriptor::new("getBatchCursor", ReturnShape::ListOfEntity)
                .params(params)
                .param(limit_param()),
        ]
    }
}

impl SqlSynthesis for BatchCursor {
    fn name(&self) -> &'static str {
        "batch_cursor"
    }

    fn statements(&self, cx: &TableContext<'_>) -> Vec<XmlElement> {
        if !requires_primary_key(cx, "getBatchCursor") {
            return Vec::new();
        }
        let key = cx.primary_key();
        vec![
            entity_select("getBatchCursor")
                .attr("parameterType", "map")
                .text(format!("SELECT * FROM {}", cx.table_name()))
                .child(where_clause().text(keyset_predicate(&key)))
                .text(format!("ORDER BY {}", order_by(&key)))
                .text("LIMIT #{limit}"),
        ]
    }
}

/// `getLastIdOfBatch(lastId, limit)`, the key that ends the next batch
///
/// Only for single-column primary keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct LastIdOfBatch;

impl LastIdOfBatch {
    fn key<'a>(cx: &TableContext<'a>) -> Option<&'a mapgen_core::Column> {
        if !requires_primary_key(cx, "getLastIdOfBatch") {
            return None;
        }
        match cx.primary_key().as_slice() {
            [single] => Some(*single),
            _ => {
                mapgen_core::mapgen_trace_skip!("getLastIdOfBatch", cx.table_name(), "composite primary key");
                None
            }
        }
    }
}

impl MethodSynthesis for LastIdOfBatch {
    fn name(&self) -> &'static str {
        "last_id"
    }

    fn methods(&self, cx: &TableContext<'_>) -> Vec<MethodDescriptor> {
        let Some(key) = Self::key(cx) else {
            return Vec::new();
        };
        vec![
            MethodDescriptor::new("getLastIdOfBatch", ReturnShape::Scalar(key.java().clone()))
                .param(Parameter::bound(key.java().clone(), LAST_ID_PARAM))
                .param(limit_param()),
        ]
    }
}

impl SqlSynthesis for LastIdOfBatch {
    fn name(&self) -> &'static str {
        "last_id"
    }

    fn statements(&self, cx: &TableContext<'_>) -> Vec<XmlElement> {
        let Some(key) = Self::key(cx) else {
            return Vec::new();
        };
        vec![
            XmlElement::new("select")
                .attr("id", "getLastIdOfBatch")
                .attr("resultType", key.java().name())
                .attr("parameterType", "map")
                .text(format!("SELECT {} FROM {}", key.name(), cx.table_name()))
                .child(where_clause().text(keyset_predicate(&[key])))
                .text(format!("ORDER BY {}", order_by(&[key])))
                .text("LIMIT ${limit - 1}, 1"),
        ]
    }
}

/// `getTotal()`, the row count
#[derive(Debug, Clone, Copy, Default)]
pub struct Total;

impl MethodSynthesis for Total {
    fn name(&self) -> &'static str {
        "total"
    }

    fn methods(&self, _cx: &TableContext<'_>) -> Vec<MethodDescriptor> {
        vec![MethodDescriptor::new("getTotal", ReturnShape::Count)]
    }
}

impl SqlSynthesis for Total {
    fn name(&self) -> &'static str {
        "total"
    }

    fn statements(&self, cx: &TableContext<'_>) -> Vec<XmlElement> {
        vec![
            XmlElement::new("select")
                .attr("id", "getTotal")
                .attr("resultType", "java.lang.Long")
                .text(format!("SELECT COUNT(*) FROM {}", cx.table_name())),
        ]
    }
}
