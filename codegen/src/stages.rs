//! Statement stages
//!
//! Every stage implements [`MethodSynthesis`](crate::stage::MethodSynthesis)
//! and [`SqlSynthesis`](crate::stage::SqlSynthesis) from the same
//! applicability check, so a method exists exactly when its statement does.

mod base;
mod batch;
mod index;
mod scan;
mod upsert;

pub use base::BaseStatements;
pub use batch::{BatchDelete, BatchInsert, BatchInsertSelective, BatchUpdate};
pub use index::{DeleteByIndex, SelectByIndex};
pub use scan::{BatchCursor, BatchOffset, LastIdOfBatch, SelectAll, Total};
pub use upsert::InsertOrUpdate;

use mapgen_core::xml::XmlElement;

use crate::context::BASE_RESULT_MAP;

/// Collection name batch statements iterate
pub const RECORDS: &str = "records";

/// Collection name of caller-chosen columns
pub const COLUMNS: &str = "columns";

fn where_clause() -> XmlElement {
    XmlElement::new("where")
}

fn entity_select(id: &str) -> XmlElement {
    XmlElement::new("select")
        .attr("id", id)
        .attr("resultMap", BASE_RESULT_MAP)
}

/// `<trim prefix=".." suffix=")" suffixOverrides=",">` holding text lines
fn paren_trim(prefix: &str, lines: Vec<String>) -> XmlElement {
    let mut trim = XmlElement::new("trim")
        .attr("prefix", prefix)
        .attr("suffix", ")")
        .attr("suffixOverrides", ",");
    trim.extend_text(lines);
    trim
}

/// `<foreach collection=".." item="item" open="(" separator="," close=")">`
fn in_list(collection: &str, element: String) -> XmlElement {
    XmlElement::new("foreach")
        .attr("collection", collection)
        .attr("item", "item")
        .attr("open", "(")
        .attr("separator", ",")
        .attr("close", ")")
        .text(element)
}
