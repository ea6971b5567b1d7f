//! Stage capabilities
//!
//! A pipeline is an ordered list of stages. Each stage implements the
//! capabilities it has: contributing mapper methods, contributing
//! statements, or rewriting what earlier stages produced.

use mapgen_core::Document;
use mapgen_core::xml::XmlElement;

use crate::context::TableContext;
use crate::method::MethodDescriptor;

/// Methods and document produced for one table so far
#[derive(Debug, Clone)]
pub struct Generated {
    pub methods: Vec<MethodDescriptor>,
    pub document: Document,
}

pub trait MethodSynthesis {
    fn name(&self) -> &'static str;

    /// Method descriptors for the table, empty when the target does not apply
    fn methods(&self, cx: &TableContext<'_>) -> Vec<MethodDescriptor>;
}

pub trait SqlSynthesis {
    fn name(&self) -> &'static str;

    /// Complete statement elements, positioned into the document by the caller
    fn statements(&self, cx: &TableContext<'_>) -> Vec<XmlElement>;
}

pub trait DocumentRewrite {
    fn name(&self) -> &'static str;

    fn rewrite(&self, cx: &TableContext<'_>, out: &mut Generated);
}

/// Whether a key-dependent target applies, tracing the skip otherwise
pub(crate) fn requires_primary_key(cx: &TableContext<'_>, target: &str) -> bool {
    if cx.has_primary_key() {
        return true;
    }
    mapgen_core::mapgen_trace_skip!(target, cx.table_name(), "no primary key");
    false
}
