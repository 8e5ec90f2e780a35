//! Components that present the store: the new-project form and the two
//! status lists, built over a small in-memory document.

pub mod component;
pub mod dom;
pub mod drag;
pub mod project_input;
pub mod project_item;
pub mod project_list;

pub use component::{mount, Component, ComponentBase, InsertPosition};
pub use dom::{Document, Element};
pub use drag::{DataTransfer, DragEvent, DragTarget, Draggable, DROPPABLE_CLASS, PLAIN_TEXT};
pub use project_input::ProjectInput;
pub use project_item::ProjectItem;
pub use project_list::ProjectList;

/// Id of the element every top-level component attaches to
pub const APP_HOST: &str = "app";

/// A document holding the `#app` host and the form, list and item templates
pub fn app_document() -> Document {
    let doc = Document::new();

    let field = |id: &str| {
        Element::new("div")
            .with_child(Element::new("label"))
            .with_child(Element::new("input").with_id(id))
    };
    doc.register_template(
        project_input::PROJECT_INPUT_TEMPLATE,
        Element::new("template").with_child(
            Element::new("form")
                .with_child(field("title"))
                .with_child(field("description"))
                .with_child(field("people"))
                .with_child(Element::new("button")),
        ),
    );

    doc.register_template(
        project_list::PROJECT_LIST_TEMPLATE,
        Element::new("template").with_child(
            Element::new("section")
                .with_child(Element::new("header").with_child(Element::new("h2")))
                .with_child(Element::new("ul")),
        ),
    );

    doc.register_template(
        project_item::PROJECT_ITEM_TEMPLATE,
        Element::new("template").with_child(
            Element::new("li")
                .with_child(Element::new("h2"))
                .with_child(Element::new("h3"))
                .with_child(Element::new("p")),
        ),
    );

    doc.body().append_child(Element::new("div").with_id(APP_HOST));
    doc
}
