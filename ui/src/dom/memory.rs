use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use super::PageDom;
use crate::error::PortalResult;

/// Index of an element inside a [`MemoryDom`], in document order.
pub type NodeId = usize;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryElement {
    pub tag: String,
    pub id: Option<String>,
    pub classes: BTreeSet<String>,
    pub attributes: BTreeMap<String, String>,
    pub inner_html: String,
    pub value: Option<String>,
    pub disabled: bool,
}

impl MemoryElement {
    pub fn new<T: Into<String>>(tag: T) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn id<T: Into<String>>(mut self, id: T) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class<T: Into<String>>(mut self, class: T) -> Self {
        self.classes.insert(class.into());
        self
    }

    pub fn attr<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn value<T: Into<String>>(mut self, value: T) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    fn matches(&self, selector: &str) -> bool {
        let selector = selector.trim();
        if let Some(class) = selector.strip_prefix('.') {
            self.classes.contains(class)
        } else if let Some(id) = selector.strip_prefix('#') {
            self.id.as_deref() == Some(id)
        } else if let Some(attr) = selector.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            self.attributes.contains_key(attr)
        } else {
            self.tag.eq_ignore_ascii_case(selector)
        }
    }
}

/// A flat, ordered document for driving handlers without a browser.
///
/// Selector support is limited to `.class`, `#id`, `[attr]` and bare tag names.
#[derive(Debug, Default)]
pub struct MemoryDom {
    elements: RefCell<Vec<MemoryElement>>,
    navigations: RefCell<Vec<String>>,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, element: MemoryElement) -> NodeId {
        let mut elements = self.elements.borrow_mut();
        elements.push(element);
        elements.len() - 1
    }

    pub fn with(self, element: MemoryElement) -> Self {
        self.push(element);
        self
    }

    /// Snapshot of one element.
    pub fn get(&self, node: NodeId) -> Option<MemoryElement> {
        self.elements.borrow().get(node).cloned()
    }

    pub fn get_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.element_by_id(id).and_then(|node| self.get(node))
    }

    pub fn set_value(&self, node: NodeId, value: &str) {
        self.update(&node, |el| el.value = Some(value.to_string()));
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }

    pub fn last_navigation(&self) -> Option<String> {
        self.navigations.borrow().last().cloned()
    }

    fn read<R>(&self, node: &NodeId, f: impl FnOnce(&MemoryElement) -> R) -> Option<R> {
        self.elements.borrow().get(*node).map(f)
    }

    fn update<R>(&self, node: &NodeId, f: impl FnOnce(&mut MemoryElement) -> R) -> Option<R> {
        self.elements.borrow_mut().get_mut(*node).map(f)
    }
}

impl PageDom for MemoryDom {
    type Node = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.elements
            .borrow()
            .iter()
            .position(|el| el.id.as_deref() == Some(id))
    }

    fn first_with_attribute(&self, attribute: &str) -> Option<NodeId> {
        self.elements
            .borrow()
            .iter()
            .position(|el| el.attributes.contains_key(attribute))
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.read(node, |el| el.attributes.get(name).cloned()).flatten()
    }

    fn remove_attribute(&self, node: &NodeId, name: &str) {
        self.update(node, |el| el.attributes.remove(name));
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.read(node, |el| el.classes.contains(class))
            .unwrap_or(false)
    }

    fn toggle_class(&self, node: &NodeId, class: &str) -> bool {
        self.update(node, |el| {
            if el.classes.remove(class) {
                false
            } else {
                el.classes.insert(class.to_string());
                true
            }
        })
        .unwrap_or(false)
    }

    fn remove_class(&self, node: &NodeId, class: &str) {
        self.update(node, |el| el.classes.remove(class));
    }

    fn matches(&self, node: &NodeId, selector: &str) -> bool {
        self.read(node, |el| el.matches(selector)).unwrap_or(false)
    }

    fn selected_value(&self, node: &NodeId) -> Option<String> {
        self.read(node, |el| el.value.clone()).flatten()
    }

    fn set_disabled(&self, node: &NodeId, disabled: bool) {
        self.update(node, |el| el.disabled = disabled);
    }

    fn set_inner_html(&self, node: &NodeId, html: &str) {
        self.update(node, |el| el.inner_html = html.to_string());
    }

    fn navigate(&self, url: &str) -> PortalResult<()> {
        self.navigations.borrow_mut().push(url.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_cover_class_id_attr_and_tag() {
        let dom = MemoryDom::new();
        let btn = dom.push(
            MemoryElement::new("button")
                .id("menuButton")
                .class("dropbtn")
                .attr("data-x", "1"),
        );
        assert!(dom.matches(&btn, ".dropbtn"));
        assert!(dom.matches(&btn, "#menuButton"));
        assert!(dom.matches(&btn, "[data-x]"));
        assert!(dom.matches(&btn, "BUTTON"));
        assert!(!dom.matches(&btn, ".other"));
    }

    #[test]
    fn attribute_scan_is_document_ordered() {
        let dom = MemoryDom::new()
            .with(MemoryElement::new("p"))
            .with(MemoryElement::new("div").attr("w3-include-html", "a.html"))
            .with(MemoryElement::new("div").attr("w3-include-html", "b.html"));
        assert_eq!(dom.first_with_attribute("w3-include-html"), Some(1));
        dom.remove_attribute(&1, "w3-include-html");
        assert_eq!(dom.first_with_attribute("w3-include-html"), Some(2));
    }

    #[test]
    fn stale_handles_are_inert() {
        let dom = MemoryDom::new();
        assert!(!dom.toggle_class(&7, "show"));
        assert_eq!(dom.selected_value(&7), None);
    }
}
