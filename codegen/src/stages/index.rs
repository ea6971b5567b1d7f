use mapgen_core::naming::{delete_by, select_by};
use mapgen_core::xml::XmlElement;

use super::{entity_select, where_clause};
use crate::compose::equality_chain;
use crate::context::{BASE_COLUMN_LIST, IndexPlan, TableContext};
use crate::method::{MethodDescriptor, Parameter, ReturnShape};
use crate::stage::{MethodSynthesis, SqlSynthesis};

fn key_params(plan: &IndexPlan<'_>) -> Vec<Parameter> {
    plan.columns
        .iter()
        .map(|c| Parameter::bound(c.java().clone(), c.property_name()))
        .collect()
}

/// `selectBy<Index>(..)` per secondary index; unique indexes return one entity
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectByIndex;

impl MethodSynthesis for SelectByIndex {
    fn name(&self) -> &'static str {
        "select_by_index"
    }

    fn methods(&self, cx: &TableContext<'_>) -> Vec<MethodDescriptor> {
        cx.indexes
            .iter()
            .map(|plan| {
                let shape = if plan.unique {
                    ReturnShape::SingleEntity
                } else {
                    ReturnShape::ListOfEntity
                };
                MethodDescriptor::new(select_by(&plan.suffix), shape).params(key_params(plan))
            })
            .collect()
    }
}

impl SqlSynthesis for SelectByIndex {
    fn name(&self) -> &'static str {
        "select_by_index"
    }

    fn statements(&self, cx: &TableContext<'_>) -> Vec<XmlElement> {
        cx.indexes
            .iter()
            .map(|plan| {
                entity_select(&select_by(&plan.suffix))
                    .attr("parameterType", TableContext::key_parameter_type(&plan.columns))
                    .text("select")
                    .child(XmlElement::include(BASE_COLUMN_LIST))
                    .text(format!("from {}", cx.table_name()))
                    .child(where_clause().text(equality_chain(&plan.columns, "")))
            })
            .collect()
    }
}

/// `deleteBy<Index>(..)` per secondary index
#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteByIndex;

impl MethodSynthesis for DeleteByIndex {
    fn name(&self) -> &'static str {
        "delete_by_index"
    }

    fn methods(&self, cx: &TableContext<'_>) -> Vec<MethodDescriptor> {
        cx.indexes
            .iter()
            .map(|plan| {
                MethodDescriptor::new(delete_by(&plan.suffix), ReturnShape::affected_rows())
                    .params(key_params(plan))
            })
            .collect()
    }
}

impl SqlSynthesis for DeleteByIndex {
    fn name(&self) -> &'static str {
        "delete_by_index"
    }

    fn statements(&self, cx: &TableContext<'_>) -> Vec<XmlElement> {
        cx.indexes
            .iter()
            .map(|plan| {
                XmlElement::new("delete")
                    .attr("id", delete_by(&plan.suffix))
                    .attr("parameterType", TableContext::key_parameter_type(&plan.columns))
                    .text(format!("delete from {}", cx.table_name()))
                    .child(where_clause().text(equality_chain(&plan.columns, "")))
            })
            .collect()
    }
}
