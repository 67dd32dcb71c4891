use crate::dom::{Element, Page};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Default)]
struct ElementData {
    value: String,
    text: String,
    classes: Vec<String>,
}

/// A page element held in memory. Clones share the same element.
#[derive(Debug, Clone, Default)]
pub struct MemoryElement {
    data: Rc<RefCell<ElementData>>,
}

impl MemoryElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        let element = Self::new();
        element.set_value(value);
        element
    }

    pub fn set_value(&self, value: impl Into<String>) {
        self.data.borrow_mut().value = value.into();
    }

    pub fn text_content(&self) -> String {
        self.data.borrow().text.clone()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.data.borrow().classes.iter().any(|c| c == class)
    }

    pub fn classes(&self) -> Vec<String> {
        self.data.borrow().classes.clone()
    }
}

impl Element for MemoryElement {
    fn value(&self) -> String {
        self.data.borrow().value.clone()
    }

    fn set_text_content(&self, text: &str) {
        self.data.borrow_mut().text = text.to_string();
    }

    fn add_class(&self, class: &str) {
        let mut data = self.data.borrow_mut();
        if !data.classes.iter().any(|c| c == class) {
            data.classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.data.borrow_mut().classes.retain(|c| c != class);
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    elements: HashMap<String, MemoryElement>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A page with every element of the default login markup.
    pub fn login_page() -> Self {
        let mut page = Self::new();
        for id in [
            "loginForm",
            "user-name",
            "password",
            "user-name-error",
            "password-error",
        ] {
            page.insert(id, MemoryElement::new());
        }
        page
    }

    pub fn insert(&mut self, id: impl Into<String>, element: MemoryElement) {
        self.elements.insert(id.into(), element);
    }

    pub fn remove(&mut self, id: &str) -> Option<MemoryElement> {
        self.elements.remove(id)
    }

    pub fn get(&self, id: &str) -> Option<&MemoryElement> {
        self.elements.get(id)
    }
}

impl Page for MemoryPage {
    type Element = MemoryElement;

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.elements.get(id).cloned()
    }
}
