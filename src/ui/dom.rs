//! Minimal in-memory element tree.
//!
//! Stands in for a browser document: templates are cloned into fresh
//! elements and attached under host elements found by id.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::rc::Rc;

use crate::error::{Result, TaskdeckError};

#[derive(Debug, Default)]
struct Node {
    tag: String,
    id: Option<String>,
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
    text: String,
    children: Vec<Element>,
}

/// Shared handle to a node; clones refer to the same node
#[derive(Debug, Clone)]
pub struct Element(Rc<RefCell<Node>>);

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self(Rc::new(RefCell::new(Node {
            tag: tag.to_string(),
            ..Node::default()
        })))
    }

    /// Builder form of [`set_id`](Self::set_id)
    pub fn with_id(self, id: &str) -> Self {
        self.set_id(id);
        self
    }

    /// Builder form of [`append_child`](Self::append_child)
    pub fn with_child(self, child: Element) -> Self {
        self.append_child(child);
        self
    }

    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    pub fn id(&self) -> Option<String> {
        self.0.borrow().id.clone()
    }

    pub fn set_id(&self, id: &str) {
        self.0.borrow_mut().id = Some(id.to_string());
    }

    pub fn add_class(&self, class: &str) {
        self.0.borrow_mut().classes.insert(class.to_string());
    }

    pub fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.remove(class);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.contains(class)
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    pub fn set_attribute(&self, name: &str, value: &str) {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    pub fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    pub fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = text.to_string();
    }

    pub fn children(&self) -> Vec<Element> {
        self.0.borrow().children.clone()
    }

    pub fn first_child(&self) -> Option<Element> {
        self.0.borrow().children.first().cloned()
    }

    pub fn append_child(&self, child: Element) {
        self.0.borrow_mut().children.push(child);
    }

    pub fn prepend_child(&self, child: Element) {
        self.0.borrow_mut().children.insert(0, child);
    }

    pub fn clear_children(&self) {
        self.0.borrow_mut().children.clear();
    }

    /// First descendant with the given tag, depth first
    pub fn query_tag(&self, tag: &str) -> Option<Element> {
        self.children().into_iter().find_map(|child| {
            if child.0.borrow().tag == tag {
                Some(child)
            } else {
                child.query_tag(tag)
            }
        })
    }

    /// This element or the first descendant carrying `id`
    pub fn find_by_id(&self, id: &str) -> Option<Element> {
        if self.0.borrow().id.as_deref() == Some(id) {
            return Some(self.clone());
        }
        self.children()
            .into_iter()
            .find_map(|child| child.find_by_id(id))
    }

    /// Copies this node and its whole subtree into new, unshared nodes
    pub fn deep_clone(&self) -> Element {
        let node = self.0.borrow();
        Element(Rc::new(RefCell::new(Node {
            tag: node.tag.clone(),
            id: node.id.clone(),
            classes: node.classes.clone(),
            attributes: node.attributes.clone(),
            text: node.text.clone(),
            children: node.children.iter().map(Element::deep_clone).collect(),
        })))
    }
}

/// A document body plus its registered templates
#[derive(Debug, Clone)]
pub struct Document {
    body: Element,
    templates: Rc<RefCell<HashMap<String, Element>>>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            body: Element::new("body"),
            templates: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    pub fn body(&self) -> &Element {
        &self.body
    }

    /// Registers a template whose first child is the element to clone
    pub fn register_template(&self, id: &str, content: Element) {
        self.templates.borrow_mut().insert(id.to_string(), content);
    }

    pub fn get_element_by_id(&self, id: &str) -> Result<Element> {
        self.body
            .find_by_id(id)
            .ok_or_else(|| TaskdeckError::ElementNotFound(id.to_string()))
    }

    /// Deep copy of the first element inside template `id`
    pub fn import_template(&self, id: &str) -> Result<Element> {
        let templates = self.templates.borrow();
        templates
            .get(id)
            .and_then(Element::first_child)
            .map(|element| element.deep_clone())
            .ok_or_else(|| TaskdeckError::TemplateNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_id_and_query_tag() {
        let list = Element::new("ul").with_id("items");
        let section = Element::new("section")
            .with_child(Element::new("header").with_child(Element::new("h2")))
            .with_child(list.clone());

        assert_eq!(section.find_by_id("items"), Some(list));
        assert!(section.query_tag("h2").is_some());
        assert!(section.query_tag("p").is_none());
    }

    #[test]
    fn test_import_template_clones_first_child() {
        let doc = Document::new();
        let content = Element::new("template").with_child(Element::new("form").with_id("f"));
        doc.register_template("form-template", content.clone());

        let a = doc.import_template("form-template").unwrap();
        let b = doc.import_template("form-template").unwrap();

        assert_eq!(a.tag(), "form");
        assert_ne!(a, b);
        a.set_id("changed");
        assert_eq!(content.first_child().unwrap().id().as_deref(), Some("f"));
    }

    #[test]
    fn test_missing_template_and_element() {
        let doc = Document::new();
        assert!(matches!(
            doc.import_template("nope"),
            Err(TaskdeckError::TemplateNotFound(_))
        ));
        assert!(matches!(
            doc.get_element_by_id("nope"),
            Err(TaskdeckError::ElementNotFound(_))
        ));
    }

    #[test]
    fn test_class_toggling() {
        let element = Element::new("ul");
        element.add_class("droppable");
        assert!(element.has_class("droppable"));
        element.remove_class("droppable");
        assert!(!element.has_class("droppable"));
    }
}
