use tracing::debug;

use crate::domain::Project;
use crate::error::Result;
use crate::ui::component::{mount, Component, ComponentBase, InsertPosition};
use crate::ui::dom::{Document, Element};
use crate::ui::drag::{DragEvent, Draggable, PLAIN_TEXT};

pub const PROJECT_ITEM_TEMPLATE: &str = "single-project";

/// One rendered project inside a list
#[derive(Debug, Clone)]
pub struct ProjectItem {
    base: ComponentBase,
    project: Project,
}

impl ProjectItem {
    /// Renders `project` at the end of `list`
    pub fn new(document: &Document, list: &Element, project: Project) -> Result<Self> {
        let base = ComponentBase::attach_to(
            document,
            PROJECT_ITEM_TEMPLATE,
            list,
            InsertPosition::End,
            Some(project.id.to_string().as_str()),
        )?;
        Ok(mount(Self { base, project }))
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn base(&self) -> &ComponentBase {
        &self.base
    }
}

impl Component for ProjectItem {
    fn configure(&mut self) {
        self.base.element.set_attribute("draggable", "true");
    }

    fn render_content(&mut self) {
        let element = &self.base.element;
        if let Some(title) = element.query_tag("h2") {
            title.set_text(&self.project.title);
        }
        if let Some(persons) = element.query_tag("h3") {
            persons.set_text(&self.project.persons_label());
        }
        if let Some(description) = element.query_tag("p") {
            description.set_text(&self.project.description);
        }
    }
}

impl Draggable for ProjectItem {
    fn drag_start_handler(&self, event: &mut DragEvent) {
        let data_transfer = event.data_transfer.get_or_insert_with(Default::default);
        data_transfer.set_data(PLAIN_TEXT, &self.project.id.to_string());
        data_transfer.effect_allowed = Some("move".to_string());
    }

    fn drag_end_handler(&self, _event: &mut DragEvent) {
        debug!(id = %self.project.id, "drag ended");
    }
}
