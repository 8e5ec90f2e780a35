use std::rc::Rc;
use tracing::debug;

use crate::domain::{gather_user_input, FormRules, ProjectId};
use crate::error::{Result, TaskdeckError};
use crate::state::ProjectState;
use crate::ui::component::{mount, Component, ComponentBase, InsertPosition};
use crate::ui::dom::{Document, Element};
use crate::ui::APP_HOST;

pub const PROJECT_INPUT_TEMPLATE: &str = "project-input";

/// The new-project form
pub struct ProjectInput {
    base: ComponentBase,
    title_input: Element,
    description_input: Element,
    people_input: Element,
    rules: FormRules,
    state: Rc<ProjectState>,
}

fn input_field(form: &Element, id: &str) -> Result<Element> {
    form.find_by_id(id)
        .ok_or_else(|| TaskdeckError::ElementNotFound(id.to_string()))
}

impl ProjectInput {
    pub fn new(document: &Document, state: Rc<ProjectState>, rules: FormRules) -> Result<Self> {
        let base = ComponentBase::new(
            document,
            PROJECT_INPUT_TEMPLATE,
            APP_HOST,
            InsertPosition::Start,
            Some("user-input"),
        )?;

        let title_input = input_field(&base.element, "title")?;
        let description_input = input_field(&base.element, "description")?;
        let people_input = input_field(&base.element, "people")?;

        Ok(mount(Self {
            base,
            title_input,
            description_input,
            people_input,
            rules,
            state,
        }))
    }

    pub fn element(&self) -> &Element {
        &self.base.element
    }

    /// Puts raw text into the three fields, as typing would
    pub fn fill(&self, title: &str, description: &str, people: &str) {
        self.title_input.set_attribute("value", title);
        self.description_input.set_attribute("value", description);
        self.people_input.set_attribute("value", people);
    }

    /// Current raw (title, description, people) field values
    pub fn values(&self) -> (String, String, String) {
        let read = |input: &Element| input.attribute("value").unwrap_or_default();
        (
            read(&self.title_input),
            read(&self.description_input),
            read(&self.people_input),
        )
    }

    /// Validates the fields and, on success, adds the project and clears the form.
    ///
    /// On failure nothing reaches the store and the fields keep their text.
    pub fn submit_handler(&self) -> Result<ProjectId> {
        let (title, description, people) = self.values();
        let input = gather_user_input(&title, &description, &people, &self.rules)?;

        let id = self
            .state
            .add_project(input.title, input.description, input.people);
        self.clear_inputs();
        Ok(id)
    }

    fn clear_inputs(&self) {
        self.fill("", "", "");
    }
}

impl Component for ProjectInput {
    fn configure(&mut self) {
        self.people_input.set_attribute("type", "number");
        debug!(rules = ?self.rules, "project input configured");
    }

    fn render_content(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::app_document;
    use std::cell::Cell;

    fn form() -> (Document, Rc<ProjectState>, ProjectInput) {
        let doc = app_document();
        let state = ProjectState::new();
        let input = ProjectInput::new(&doc, Rc::clone(&state), FormRules::default()).unwrap();
        (doc, state, input)
    }

    #[test]
    fn test_form_is_attached_first() {
        let (doc, _, input) = form();
        let app = doc.get_element_by_id("app").unwrap();
        assert_eq!(app.first_child().as_ref(), Some(input.element()));
        assert_eq!(input.element().id().as_deref(), Some("user-input"));
    }

    #[test]
    fn test_valid_submit_adds_project_and_clears() {
        let (_, state, input) = form();
        input.fill("Build API", "Design and build REST API", "3");

        let id = input.submit_handler().unwrap();

        let project = state.get(&id).unwrap();
        assert_eq!(project.title, "Build API");
        assert_eq!(project.people, 3);
        assert_eq!(
            input.values(),
            (String::new(), String::new(), String::new())
        );
    }

    #[test]
    fn test_invalid_submit_never_reaches_store() {
        let (_, state, input) = form();
        let notified = Rc::new(Cell::new(false));
        {
            let notified = Rc::clone(&notified);
            state.add_listener(move |_| notified.set(true));
        }

        for (title, description, people) in [
            ("", "Long enough", "2"),
            ("Title", "shrt", "2"),
            ("Title", "Long enough", "0"),
            ("Title", "Long enough", "abc"),
        ] {
            input.fill(title, description, people);
            let err = input.submit_handler().unwrap_err();
            assert!(matches!(err, TaskdeckError::InvalidInput(_)));
            assert_eq!(input.values().0, title);
        }

        assert!(state.is_empty());
        assert!(!notified.get());
    }
}
