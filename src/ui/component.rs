use crate::error::Result;
use crate::ui::dom::{Document, Element};

/// Where a freshly materialized element goes inside its host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    Start,
    End,
}

/// The DOM half of every component: the element cloned from its template
#[derive(Debug, Clone)]
pub struct ComponentBase {
    pub element: Element,
}

impl ComponentBase {
    /// Clones template `template_id`, optionally gives it `new_element_id`
    /// and attaches it to the element with id `host_id`.
    pub fn new(
        document: &Document,
        template_id: &str,
        host_id: &str,
        position: InsertPosition,
        new_element_id: Option<&str>,
    ) -> Result<Self> {
        let host = document.get_element_by_id(host_id)?;
        Self::attach_to(document, template_id, &host, position, new_element_id)
    }

    /// Same as [`new`](Self::new) for a host the caller already holds
    pub fn attach_to(
        document: &Document,
        template_id: &str,
        host: &Element,
        position: InsertPosition,
        new_element_id: Option<&str>,
    ) -> Result<Self> {
        let element = document.import_template(template_id)?;
        if let Some(id) = new_element_id {
            element.set_id(id);
        }

        match position {
            InsertPosition::Start => host.prepend_child(element.clone()),
            InsertPosition::End => host.append_child(element.clone()),
        }

        Ok(Self { element })
    }
}

/// Lifecycle shared by the form and list components
pub trait Component {
    /// Wires listeners and store observers
    fn configure(&mut self);

    /// Fills in static text and structure
    fn render_content(&mut self);
}

/// Runs the lifecycle on a component whose [`ComponentBase`] already exists.
///
/// Materialize, then configure, then render.
pub fn mount<C: Component>(mut component: C) -> C {
    component.configure();
    component.render_content();
    component
}
