use crate::alloc_prelude::*;
use super::{Child, Document, ElementId, SQL_FRAGMENT, XmlElement};

/// Insertion index for a new top-level element
///
/// `existing` lists `(tag, id)` of the current top-level elements in order.
/// Reusable `<sql>` fragments go right after the last existing fragment.
/// For statements, an existing id extending the new id claims its own
/// position (first such element only), and an existing id the new id
/// extends claims the position after it (last such element wins). With no
/// related id the element is appended.
///
/// ```
/// use mapgen_core::xml::best_position;
///
/// let existing = [("select", Some("selectAll")), ("select", Some("selectByUserAndStatus"))];
/// assert_eq!(best_position(&existing, "select", Some("selectByUser")), 1);
/// assert_eq!(best_position(&existing, "select", Some("insert")), 2);
/// ```
#[must_use]
pub fn best_position(existing: &[(&str, Option<&str>)], tag: &str, id: Option<&str>) -> usize {
    if tag == SQL_FRAGMENT {
        return existing
            .iter()
            .rposition(|(t, _)| *t == SQL_FRAGMENT)
            .map_or(0, |last| last + 1);
    }
    let Some(new_id) = id else {
        return existing.len();
    };

    let mut index = None;
    for (i, (_, other)) in existing.iter().enumerate() {
        let Some(other) = other else { continue };
        if other.starts_with(new_id) {
            if index.is_none() {
                index = Some(i);
            }
        } else if new_id.starts_with(other) {
            index = Some(i + 1);
        }
    }
    match index {
        Some(i) if i < existing.len() => i,
        _ => existing.len(),
    }
}

impl Document {
    /// Attach `element` at its best position among the top-level elements
    pub fn add_element(&mut self, element: XmlElement) -> ElementId {
        let existing: Vec<(&str, Option<&str>)> = self
            .top_level()
            .iter()
            .map(|c| match c {
                Child::Element(e) => {
                    let record = self.get(*e);
                    (record.name(), record.id())
                }
                Child::Text(_) => ("", None),
            })
            .collect();
        let at = best_position(&existing, element.name(), element.id());
        self.insert(at, element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select(id: &str) -> XmlElement {
        XmlElement::new("select").attr("id", id)
    }

    fn sql(id: &str) -> XmlElement {
        XmlElement::new("sql").attr("id", id)
    }

    fn add_all(ids: &[&str]) -> Vec<String> {
        let mut doc = Document::mapper("ns");
        for id in ids {
            doc.add_element(select(id));
        }
        doc.element_ids()
    }

    #[test]
    fn test_fragments_cluster_at_head() {
        let mut doc = Document::mapper("ns");
        doc.add_element(select("selectAll"));
        doc.add_element(sql("Base_Column_List"));
        doc.add_element(select("getTotal"));
        doc.add_element(sql("Where_Clause"));
        assert_eq!(
            doc.element_ids(),
            vec!["Base_Column_List", "Where_Clause", "selectAll", "getTotal"]
        );
    }

    #[test]
    fn test_prefix_chain() {
        assert_eq!(add_all(&["a", "ab", "abc"]), vec!["a", "ab", "abc"]);
        assert_eq!(add_all(&["abc", "a", "ab"]), vec!["a", "ab", "abc"]);
    }

    #[test]
    fn test_longer_declared_first() {
        assert_eq!(
            add_all(&["selectByUserAndStatus", "selectByUser"]),
            vec!["selectByUser", "selectByUserAndStatus"]
        );
    }

    #[test]
    fn test_unrelated_ids_keep_insertion_order() {
        assert_eq!(add_all(&["insert", "getTotal", "deleteBatch"]), vec!["insert", "getTotal", "deleteBatch"]);
    }

    #[test]
    fn test_prefix_related_adjacent_in_every_order() {
        let ids = ["selectByUser", "selectByUserAndStatus", "selectAll"];
        let orders = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];
        for order in orders {
            let inserted: Vec<&str> = order.iter().map(|&i| ids[i]).collect();
            let result = add_all(&inserted);
            let user = result.iter().position(|id| id == "selectByUser").unwrap();
            assert_eq!(result[user + 1], "selectByUserAndStatus", "order {inserted:?} gave {result:?}");
            assert_eq!(result.len(), 3);
        }
    }

    /// The prefix group sorts internally; unrelated ids keep the order in
    /// which their group first arrived.
    #[test]
    fn test_final_order_per_permutation() {
        let ids = ["selectByUser", "selectByUserAndStatus", "selectAll"];
        let orders = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];
        for order in orders {
            let inserted: Vec<&str> = order.iter().map(|&i| ids[i]).collect();
            let expected = if inserted[0] == "selectAll" {
                ["selectAll", "selectByUser", "selectByUserAndStatus"]
            } else {
                ["selectByUser", "selectByUserAndStatus", "selectAll"]
            };
            assert_eq!(add_all(&inserted), expected, "order {inserted:?}");
        }
    }

    #[test]
    fn test_element_without_id_appended() {
        let mut doc = Document::mapper("ns");
        doc.add_element(select("selectAll"));
        doc.add_element(XmlElement::new("cache"));
        doc.add_element(select("select"));
        let names: Vec<_> = doc.elements().into_iter().map(|e| doc.get(e).name().to_string()).collect();
        assert_eq!(names, vec!["select", "select", "cache"]);
        assert_eq!(doc.element_ids(), vec!["select", "selectAll"]);
    }
}
