use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlInputElement, HtmlSelectElement, Window};

use crate::dom::PageDom;
use crate::error::{PortalError, PortalResult};

/// [`PageDom`] over the live browser document.
pub struct WebDom {
    window: Window,
    document: Document,
}

impl WebDom {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    pub fn current() -> PortalResult<Self> {
        let window = web_sys::window().ok_or(PortalError::Unavailable("window"))?;
        let document = window
            .document()
            .ok_or(PortalError::Unavailable("document"))?;
        Ok(Self::new(window, document))
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl PageDom for WebDom {
    type Node = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn first_with_attribute(&self, attribute: &str) -> Option<Element> {
        self.document
            .query_selector(&format!("[{attribute}]"))
            .ok()
            .flatten()
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn remove_attribute(&self, node: &Element, name: &str) {
        node.remove_attribute(name).ok();
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn toggle_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().toggle(class).unwrap_or(false)
    }

    fn remove_class(&self, node: &Element, class: &str) {
        node.class_list().remove_1(class).ok();
    }

    fn matches(&self, node: &Element, selector: &str) -> bool {
        node.matches(selector).unwrap_or(false)
    }

    fn selected_value(&self, node: &Element) -> Option<String> {
        if let Some(select) = node.dyn_ref::<HtmlSelectElement>() {
            Some(select.value())
        } else {
            node.dyn_ref::<HtmlInputElement>().map(|input| input.value())
        }
    }

    fn set_disabled(&self, node: &Element, disabled: bool) {
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.set_disabled(disabled);
        } else if let Some(select) = node.dyn_ref::<HtmlSelectElement>() {
            select.set_disabled(disabled);
        } else if let Some(button) = node.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
        } else {
            node.toggle_attribute_with_force("disabled", disabled).ok();
        }
    }

    fn set_inner_html(&self, node: &Element, html: &str) {
        node.set_inner_html(html);
    }

    fn navigate(&self, url: &str) -> PortalResult<()> {
        self.window
            .location()
            .set_href(url)
            .map_err(|_| PortalError::Navigation(url.to_string()))
    }
}
