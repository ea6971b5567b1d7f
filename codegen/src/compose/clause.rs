use mapgen_core::naming::{LAST_ID_PARAM, last_param_name};
use mapgen_core::schema::Column;

use super::chunk_joined;

/// `a, b, c` over column names, chunked
pub fn column_list(columns: &[&Column]) -> Vec<String> {
    chunk_joined(columns.iter().map(|c| c.name()), ", ")
}

/// `#{a,jdbcType=..}, #{b,jdbcType=..}`, chunked
pub fn placeholder_list(columns: &[&Column], prefix: &str) -> Vec<String> {
    chunk_joined(columns.iter().map(|c| c.placeholder(prefix)), ", ")
}

/// `a = #{a,jdbcType=..}, b = #{b,jdbcType=..}`, chunked
pub fn assignment_list(columns: &[&Column], prefix: &str) -> Vec<String> {
    chunk_joined(
        columns
            .iter()
            .map(|c| format!("{} = {}", c.name(), c.placeholder(prefix))),
        ", ",
    )
}

/// `a = #{a,jdbcType=..} and b = #{b,jdbcType=..}`
pub fn equality_chain(columns: &[&Column], prefix: &str) -> String {
    columns
        .iter()
        .map(|c| format!("{} = {}", c.name(), c.placeholder(prefix)))
        .collect::<Vec<_>>()
        .join(" and ")
}

/// `a ASC, b ASC`
pub fn order_by(columns: &[&Column]) -> String {
    columns
        .iter()
        .map(|c| format!("{} ASC", c.name()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parameter names carrying the last key of the previous page
pub fn keyset_params(key: &[&Column]) -> Vec<String> {
    match key {
        [_] => vec![LAST_ID_PARAM.to_string()],
        _ => key.iter().map(|c| last_param_name(c.property_name())).collect(),
    }
}

/// Rows after the previous page: `id > #{lastId}`, or a tuple comparison
/// `(a, b) > (#{lastA}, #{lastB})` for a composite key
pub fn keyset_predicate(key: &[&Column]) -> String {
    let params = keyset_params(key);
    match key {
        [single] => format!("{} > #{{{}}}", single.name(), params[0]),
        _ => {
            let columns: Vec<&str> = key.iter().map(|c| c.name()).collect();
            let values: Vec<String> = params.iter().map(|p| format!("#{{{p}}}")).collect();
            format!("({}) > ({})", columns.join(", "), values.join(", "))
        }
    }
}

/// Key columns as the left side of an `in` predicate: `id` or `(a,b)`
pub fn key_tuple(key: &[&Column]) -> String {
    match key {
        [single] => single.name().to_string(),
        _ => {
            let names: Vec<&str> = key.iter().map(|c| c.name()).collect();
            format!("({})", names.join(","))
        }
    }
}

/// One element of an `in` list: `#{item.id}` or `(#{item.a},#{item.b})`
pub fn key_tuple_values(key: &[&Column], prefix: &str) -> String {
    match key {
        [single] => single.bare_placeholder(prefix),
        _ => {
            let values: Vec<String> = key.iter().map(|c| c.bare_placeholder(prefix)).collect();
            format!("({})", values.join(","))
        }
    }
}

/// `when <key match> then #{item.col,jdbcType=..}` for one CASE arm
pub fn case_arm(key: &[&Column], column: &Column, prefix: &str) -> String {
    format!(
        "when {} then {}",
        equality_chain(key, prefix),
        column.placeholder(prefix)
    )
}

/// Guard of a data-driven column choice, `'name' == column`
pub fn column_choice_test(column: &Column, variable: &str) -> String {
    format!("'{}' == {}", column.name(), variable)
}
