use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;
use tracing::{debug, error};

use crate::domain::{filter_by_status, Project, ProjectId, ProjectStatus};
use crate::error::Result;
use crate::state::ProjectState;
use crate::ui::component::{mount, Component, ComponentBase, InsertPosition};
use crate::ui::dom::{Document, Element};
use crate::ui::drag::{DragEvent, DragTarget, DROPPABLE_CLASS, PLAIN_TEXT};
use crate::ui::project_item::ProjectItem;
use crate::ui::APP_HOST;

pub const PROJECT_LIST_TEMPLATE: &str = "project-list";

/// One of the two status lists; also a drop zone requesting its own status
pub struct ProjectList {
    base: ComponentBase,
    status: ProjectStatus,
    heading: String,
    document: Document,
    state: Rc<ProjectState>,
    items: Rc<RefCell<Vec<ProjectItem>>>,
}

impl ProjectList {
    pub fn new(
        document: &Document,
        state: Rc<ProjectState>,
        status: ProjectStatus,
        heading: &str,
    ) -> Result<Self> {
        let base = ComponentBase::new(
            document,
            PROJECT_LIST_TEMPLATE,
            APP_HOST,
            InsertPosition::End,
            Some(format!("{}-projects", status.list_id()).as_str()),
        )?;

        Ok(mount(Self {
            base,
            status,
            heading: heading.to_string(),
            document: document.clone(),
            state,
            items: Rc::new(RefCell::new(Vec::new())),
        }))
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    pub fn list_element_id(&self) -> String {
        format!("{}-projects-list", self.status.list_id())
    }

    /// Projects currently shown, in store order
    pub fn assigned_projects(&self) -> Vec<Project> {
        self.items
            .borrow()
            .iter()
            .map(|item| item.project().clone())
            .collect()
    }

    pub fn items(&self) -> Vec<ProjectItem> {
        self.items.borrow().clone()
    }

    pub fn element(&self) -> &Element {
        &self.base.element
    }

    /// The `<ul>` that receives items and carries the droppable class
    pub fn list_element(&self) -> Option<Element> {
        self.base.element.query_tag("ul")
    }

    pub fn is_droppable(&self) -> bool {
        self.list_element()
            .map(|list| list.has_class(DROPPABLE_CLASS))
            .unwrap_or(false)
    }

    fn set_droppable(&self, on: bool) {
        if let Some(list) = self.list_element() {
            if on {
                list.add_class(DROPPABLE_CLASS);
            } else {
                list.remove_class(DROPPABLE_CLASS);
            }
        }
    }
}

fn render_projects(
    document: &Document,
    list: &Element,
    projects: Vec<Project>,
    items: &RefCell<Vec<ProjectItem>>,
) {
    list.clear_children();
    let mut rendered = Vec::with_capacity(projects.len());
    for project in projects {
        match ProjectItem::new(document, list, project) {
            Ok(item) => rendered.push(item),
            Err(e) => error!(error = %e, "cannot render project item"),
        }
    }
    *items.borrow_mut() = rendered;
}

impl Component for ProjectList {
    fn configure(&mut self) {
        let Some(list) = self.list_element() else {
            error!(status = %self.status, "project list template has no <ul>");
            return;
        };
        let status = self.status;
        let document = self.document.clone();
        let items = Rc::clone(&self.items);

        self.state.add_listener(move |projects| {
            let relevant = filter_by_status(&projects, status);
            debug!(%status, count = relevant.len(), "rendering project list");
            render_projects(&document, &list, relevant, &items);
        });
    }

    fn render_content(&mut self) {
        if let Some(list) = self.list_element() {
            list.set_id(&self.list_element_id());
        }
        if let Some(heading) = self.base.element.query_tag("h2") {
            heading.set_text(&self.heading);
        }
    }
}

impl DragTarget for ProjectList {
    fn drag_over_handler(&self, event: &mut DragEvent) {
        if event.carries_plain_text() {
            event.prevent_default();
            self.set_droppable(true);
        }
    }

    fn drop_handler(&self, event: &mut DragEvent) {
        self.set_droppable(false);

        let payload = event
            .data_transfer
            .as_ref()
            .and_then(|dt| dt.get_data(PLAIN_TEXT))
            .unwrap_or_default();

        match ProjectId::from_str(payload) {
            Ok(id) => self.state.move_project(&id, self.status),
            Err(_) => debug!(payload, "ignoring drop without a project id"),
        }
    }

    fn drag_leave_handler(&self, _event: &mut DragEvent) {
        self.set_droppable(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::app_document;
    use crate::ui::drag::{DataTransfer, Draggable};

    fn board() -> (Rc<ProjectState>, ProjectList, ProjectList) {
        let doc = app_document();
        let state = ProjectState::new();
        let active =
            ProjectList::new(&doc, Rc::clone(&state), ProjectStatus::Active, "ACTIVE PROJECTS")
                .unwrap();
        let finished = ProjectList::new(
            &doc,
            Rc::clone(&state),
            ProjectStatus::Finished,
            "FINISHED PROJECTS",
        )
        .unwrap();
        (state, active, finished)
    }

    fn add_sample(state: &ProjectState) -> ProjectId {
        state.add_project(
            "Build API".to_string(),
            "Design and build REST API".to_string(),
            3,
        )
    }

    fn payload(id: &str) -> DragEvent {
        let mut dt = DataTransfer::new();
        dt.set_data(PLAIN_TEXT, id);
        DragEvent::new(dt)
    }

    #[test]
    fn test_render_content_sets_ids_and_heading() {
        let (_, active, finished) = board();

        assert_eq!(active.element().id().as_deref(), Some("active-projects"));
        assert_eq!(
            active.list_element().unwrap().id().as_deref(),
            Some("active-projects-list")
        );
        assert_eq!(
            finished.element().query_tag("h2").unwrap().text(),
            "FINISHED PROJECTS"
        );
    }

    #[test]
    fn test_lists_filter_by_status() {
        let (state, active, finished) = board();

        let id = add_sample(&state);
        assert_eq!(active.assigned_projects().len(), 1);
        assert!(finished.assigned_projects().is_empty());
        assert_eq!(active.list_element().unwrap().children().len(), 1);

        state.move_project(&id, ProjectStatus::Finished);
        assert!(active.assigned_projects().is_empty());
        assert_eq!(finished.assigned_projects()[0].id, id);
        assert!(active.list_element().unwrap().children().is_empty());
        assert_eq!(finished.list_element().unwrap().children().len(), 1);
    }

    #[test]
    fn test_rerender_replaces_items_in_store_order() {
        let (state, active, _) = board();
        let first = add_sample(&state);
        let second = add_sample(&state);

        let list = active.list_element().unwrap();
        let ids: Vec<Option<String>> = list.children().iter().map(Element::id).collect();
        assert_eq!(ids, vec![Some(first.to_string()), Some(second.to_string())]);
        assert_eq!(active.items()[1].base().element, list.children()[1]);
    }

    #[test]
    fn test_render_uses_held_list_element() {
        let doc = app_document();
        let state = ProjectState::new();
        let active =
            ProjectList::new(&doc, Rc::clone(&state), ProjectStatus::Active, "ACTIVE PROJECTS")
                .unwrap();
        doc.get_element_by_id("app").unwrap().clear_children();

        add_sample(&state);

        assert_eq!(active.list_element().unwrap().children().len(), 1);
        assert_eq!(active.assigned_projects().len(), 1);
    }

    #[test]
    fn test_drag_over_with_plain_text_arms_zone() {
        let (_, active, _) = board();
        let mut event = payload("anything");

        active.drag_over_handler(&mut event);

        assert!(event.default_prevented());
        assert!(active.is_droppable());
    }

    #[test]
    fn test_drag_over_with_other_type_is_ignored() {
        let (_, active, _) = board();
        let mut dt = DataTransfer::new();
        dt.set_data("text/html", "<p>hi</p>");
        let mut event = DragEvent::new(dt);

        active.drag_over_handler(&mut event);

        assert!(!event.default_prevented());
        assert!(!active.is_droppable());
    }

    #[test]
    fn test_drag_leave_disarms_without_mutation() {
        let (state, _, finished) = board();
        let id = add_sample(&state);

        finished.drag_over_handler(&mut payload(&id.to_string()));
        assert!(finished.is_droppable());

        finished.drag_leave_handler(&mut DragEvent::empty());
        assert!(!finished.is_droppable());
        assert_eq!(state.get(&id).unwrap().status, ProjectStatus::Active);
    }

    #[test]
    fn test_drop_moves_project_and_disarms() {
        let (state, active, finished) = board();
        let id = add_sample(&state);

        let mut event = DragEvent::empty();
        active.items()[0].drag_start_handler(&mut event);

        finished.drag_over_handler(&mut event);
        finished.drop_handler(&mut event);

        assert!(!finished.is_droppable());
        assert_eq!(state.get(&id).unwrap().status, ProjectStatus::Finished);
        assert_eq!(finished.assigned_projects().len(), 1);
    }

    #[test]
    fn test_drop_on_own_list_is_noop() {
        let (state, active, _) = board();
        let id = add_sample(&state);
        let calls = Rc::new(RefCell::new(0));
        {
            let calls = Rc::clone(&calls);
            state.add_listener(move |_| *calls.borrow_mut() += 1);
        }

        active.drop_handler(&mut payload(&id.to_string()));

        assert_eq!(*calls.borrow(), 0);
        assert_eq!(state.get(&id).unwrap().status, ProjectStatus::Active);
    }

    #[test]
    fn test_drop_with_garbage_payload_is_noop() {
        let (state, _, finished) = board();
        let id = add_sample(&state);

        finished.drop_handler(&mut payload("not-an-id"));
        finished.drop_handler(&mut DragEvent::empty());

        assert_eq!(state.get(&id).unwrap().status, ProjectStatus::Active);
    }
}
