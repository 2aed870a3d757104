//! The slice of the document the glue layer touches.
//!
//! Handlers never query a global document; they go through a [`PageDom`]
//! carried by the [`PortalContext`](crate::context::PortalContext). The web
//! build implements it over `web_sys` and tests use [`MemoryDom`].

mod memory;
pub use memory::{MemoryDom, MemoryElement, NodeId};

use std::fmt::Debug;

use crate::error::PortalResult;

pub trait PageDom {
    /// Handle to one element. Cheap to clone.
    type Node: Clone + Debug;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// First element in document order carrying `attribute`.
    fn first_with_attribute(&self, attribute: &str) -> Option<Self::Node>;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn remove_attribute(&self, node: &Self::Node, name: &str);

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    /// Flip `class`; returns whether it is present afterwards.
    fn toggle_class(&self, node: &Self::Node, class: &str) -> bool;
    fn remove_class(&self, node: &Self::Node, class: &str);

    /// CSS selector match (`Element.matches`).
    fn matches(&self, node: &Self::Node, selector: &str) -> bool;

    /// Value of the selected option of a `<select>` (or an input's value).
    fn selected_value(&self, node: &Self::Node) -> Option<String>;
    fn set_disabled(&self, node: &Self::Node, disabled: bool);
    fn set_inner_html(&self, node: &Self::Node, html: &str);

    /// Full-page navigation.
    fn navigate(&self, url: &str) -> PortalResult<()>;
}
