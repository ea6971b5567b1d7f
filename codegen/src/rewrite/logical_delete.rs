use mapgen_core::mapgen_trace_skip;
use mapgen_core::xml::{Child, XmlElement};
use mapgen_core::{Column, Document, ElementId};

use crate::context::TableContext;
use crate::stage::{DocumentRewrite, Generated};

/// Fragment filtering out flagged rows
pub const NOT_REMOVED_FRAGMENT: &str = "isDeletedNotRemoved";

/// Fragment assigning the flag
pub const SET_DELETED_FRAGMENT: &str = "setIsDeleted";

const DELETE_MARKER: &str = "deleteBy";
const LOGICAL_DELETE_MARKER: &str = "logicalDeleteBy";

/// Reads expected to hide flagged rows. A read only gets the filter when it
/// already has a `<where>` clause, listed or not.
const FILTERED_SELECTS: [&str; 3] = ["selectAll", "getBatchOffset", "selectByPrimaryKey"];

/// Soft delete: deletes become flag updates, reads skip flagged rows
///
/// Runs only for tables that have the configured flag column. A document
/// that already carries the rewrite is left alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogicalDelete;

impl LogicalDelete {
    /// Whether `doc` already went through the rewrite
    pub fn is_applied(doc: &Document) -> bool {
        doc.find(NOT_REMOVED_FRAGMENT).is_some()
            || doc
                .element_ids()
                .iter()
                .any(|id| id.contains("logicalDelete"))
    }

    fn rewrite_delete(doc: &mut Document, id: ElementId, table: &str) {
        let filter = doc.find_child(id, "where");
        doc.set_name(id, "update");
        if let Some(old) = doc.get(id).id().map(str::to_string) {
            doc.set_attribute(id, "id", old.replace(DELETE_MARKER, LOGICAL_DELETE_MARKER));
        }
        doc.clear_children(id);
        doc.append_text(id, format!("update {table}"));
        doc.append_element(
            id,
            XmlElement::new("set").child(XmlElement::include(SET_DELETED_FRAGMENT)),
        );
        if let Some(filter) = filter {
            doc.adopt(id, filter);
        }
    }

    fn filter_select(doc: &mut Document, id: ElementId, table: &str) {
        let Some(filter) = doc.find_child(id, "where") else {
            if let Some(name) = doc.get(id).id() {
                if FILTERED_SELECTS.iter().any(|listed| *listed == name) {
                    mapgen_trace_skip!(name, table, "no where clause to extend");
                }
            }
            return;
        };
        doc.append_text(filter, "AND");
        doc.append_element(filter, XmlElement::include(NOT_REMOVED_FRAGMENT));
    }

    /// Optional flag slot for inserts listing columns in a `(` trim and
    /// values in a `values (` trim, unless the flag is listed already
    fn add_flag_slot(doc: &mut Document, id: ElementId, flag: &Column) {
        let trim_with = |prefix: &str| {
            doc.get(id).children().iter().find_map(|c| match c {
                Child::Element(e)
                    if doc.get(*e).name() == "trim" && doc.get(*e).attribute("prefix") == Some(prefix) =>
                {
                    Some(*e)
                }
                _ => None,
            })
        };
        let (Some(names), Some(values)) = (trim_with("("), trim_with("values (")) else {
            return;
        };
        let listed = doc
            .to_element(names)
            .text_content()
            .split(',')
            .any(|token| token.trim().eq_ignore_ascii_case(flag.name()));
        if listed {
            return;
        }
        let test = format!("{} != null", flag.property_name());
        doc.append_element(
            names,
            XmlElement::new("if")
                .attr("test", test.as_str())
                .text(format!(", {}", flag.name())),
        );
        doc.append_element(
            values,
            XmlElement::new("if")
                .attr("test", test)
                .text(format!(", {}", flag.placeholder(""))),
        );
    }
}

impl DocumentRewrite for LogicalDelete {
    fn name(&self) -> &'static str {
        "logical_delete"
    }

    fn rewrite(&self, cx: &TableContext<'_>, out: &mut Generated) {
        let Some(flag) = cx.logical_delete else {
            return;
        };
        let table = cx.table_name();
        let doc = &mut out.document;
        if Self::is_applied(doc) {
            mapgen_trace_skip!("logical_delete", table, "already applied");
            return;
        }

        doc.insert(
            0,
            XmlElement::new("sql")
                .attr("id", NOT_REMOVED_FRAGMENT)
                .text(format!("{} = 0", flag.name())),
        );
        doc.insert(
            1,
            XmlElement::new("sql")
                .attr("id", SET_DELETED_FRAGMENT)
                .text(format!("{} = 1", flag.name())),
        );

        for id in doc.elements() {
            let tag = doc.get(id).name().to_string();
            match tag.as_str() {
                "delete" => Self::rewrite_delete(doc, id, table),
                "select" => Self::filter_select(doc, id, table),
                "insert" => Self::add_flag_slot(doc, id, flag),
                _ => {}
            }
        }

        for method in &mut out.methods {
            if method.name.contains(DELETE_MARKER) {
                method.name = method.name.replace(DELETE_MARKER, LOGICAL_DELETE_MARKER);
            }
        }
    }
}
