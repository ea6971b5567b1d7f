use crate::alloc_prelude::*;
use super::{XmlElement, XmlNode};

/// Stable handle of an element inside one [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

/// Child slot of an element record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    Text(String),
    Element(ElementId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementRecord {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Child>,
}

impl ElementRecord {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn id(&self) -> Option<&str> {
        self.attribute("id")
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }
}

/// Per-table mapper document
///
/// Records are never freed; an element detached by a rewrite stays in the
/// arena but is no longer reachable from the root.
#[derive(Debug, Clone)]
pub struct Document {
    records: Vec<ElementRecord>,
    root: ElementId,
}

impl Document {
    pub fn new(root: XmlElement) -> Self {
        let mut doc = Self {
            records: Vec::new(),
            root: ElementId(0),
        };
        doc.root = doc.alloc(root);
        doc
    }

    /// `<mapper namespace="...">`
    pub fn mapper(namespace: &str) -> Self {
        Self::new(XmlElement::new("mapper").attr("namespace", namespace))
    }

    pub fn root(&self) -> ElementId {
        self.root
    }

    pub fn get(&self, id: ElementId) -> &ElementRecord {
        &self.records[id.0]
    }

    fn get_mut(&mut self, id: ElementId) -> &mut ElementRecord {
        &mut self.records[id.0]
    }

    /// Top-level elements in document order
    pub fn elements(&self) -> Vec<ElementId> {
        self.get(self.root)
            .children
            .iter()
            .filter_map(|c| match c {
                Child::Element(id) => Some(*id),
                Child::Text(_) => None,
            })
            .collect()
    }

    /// `id` attributes of the top-level elements, in order
    pub fn element_ids(&self) -> Vec<String> {
        self.elements()
            .into_iter()
            .filter_map(|e| self.get(e).id().map(str::to_string))
            .collect()
    }

    /// Top-level element with the given `id` attribute
    pub fn find(&self, id: &str) -> Option<ElementId> {
        self.elements()
            .into_iter()
            .find(|&e| self.get(e).id() == Some(id))
    }

    /// Number of top-level child slots
    pub fn len(&self) -> usize {
        self.get(self.root).children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn top_level(&self) -> &[Child] {
        &self.get(self.root).children
    }

    fn alloc(&mut self, element: XmlElement) -> ElementId {
        let id = ElementId(self.records.len());
        self.records.push(ElementRecord {
            name: element.name,
            attributes: element.attributes,
            children: Vec::new(),
        });
        let children = element
            .children
            .into_iter()
            .map(|node| match node {
                XmlNode::Text(t) => Child::Text(t),
                XmlNode::Element(e) => Child::Element(self.alloc(e)),
            })
            .collect();
        self.get_mut(id).children = children;
        id
    }

    /// Insert at a top-level position, clamped to the end
    pub fn insert(&mut self, index: usize, element: XmlElement) -> ElementId {
        let id = self.alloc(element);
        let root = self.root;
        let slots = &mut self.get_mut(root).children;
        let at = index.min(slots.len());
        slots.insert(at, Child::Element(id));
        id
    }

    /// Append at the end of the document
    pub fn push(&mut self, element: XmlElement) -> ElementId {
        let end = self.len();
        self.insert(end, element)
    }

    pub fn set_name(&mut self, id: ElementId, name: impl Into<String>) {
        self.get_mut(id).name = name.into();
    }

    pub fn set_attribute(&mut self, id: ElementId, key: &str, value: impl Into<String>) {
        let value = value.into();
        let record = self.get_mut(id);
        match record.attributes.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value,
            None => record.attributes.push((key.to_string(), value)),
        }
    }

    /// First direct child element with the given tag
    pub fn find_child(&self, id: ElementId, name: &str) -> Option<ElementId> {
        self.get(id).children.iter().find_map(|c| match c {
            Child::Element(e) if self.get(*e).name == name => Some(*e),
            _ => None,
        })
    }

    pub fn append_text(&mut self, id: ElementId, text: impl Into<String>) {
        self.get_mut(id).children.push(Child::Text(text.into()));
    }

    pub fn append_element(&mut self, id: ElementId, element: XmlElement) -> ElementId {
        let child = self.alloc(element);
        self.get_mut(id).children.push(Child::Element(child));
        child
    }

    /// Drop every child of `id`; the records stay in the arena
    pub fn clear_children(&mut self, id: ElementId) {
        self.get_mut(id).children.clear();
    }

    /// Re-attach an existing element as the last child of `parent`
    pub fn adopt(&mut self, parent: ElementId, child: ElementId) {
        self.get_mut(parent).children.push(Child::Element(child));
    }

    /// Owned copy of the subtree rooted at `id`
    pub fn to_element(&self, id: ElementId) -> XmlElement {
        let record = self.get(id);
        XmlElement {
            name: record.name.clone(),
            attributes: record.attributes.clone(),
            children: record
                .children
                .iter()
                .map(|c| match c {
                    Child::Text(t) => XmlNode::Text(t.clone()),
                    Child::Element(e) => XmlNode::Element(self.to_element(*e)),
                })
                .collect(),
        }
    }
}
