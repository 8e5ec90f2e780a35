//! The project store.
//!
//! `ProjectState` owns every project and the list of observers. Each
//! committed mutation synchronously hands every observer, in registration
//! order, its own copy of the full project sequence. Observers are
//! append-only and live as long as the store.

use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info};

use crate::domain::{Project, ProjectId, ProjectStatus};
use crate::error::Result;

/// Observer callback receiving a full snapshot of the store
pub type Listener = Rc<dyn Fn(Vec<Project>)>;

thread_local! {
    static INSTANCE: Rc<ProjectState> = Rc::new(ProjectState::default());
}

/// In-memory project store with change notification
#[derive(Default)]
pub struct ProjectState {
    projects: RefCell<Vec<Project>>,
    listeners: RefCell<Vec<Listener>>,
}

impl ProjectState {
    /// Creates a store to be shared by every component of one application
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Returns this thread's shared store, creating it on first access
    pub fn instance() -> Rc<Self> {
        INSTANCE.with(Rc::clone)
    }

    /// Registers an observer. There is no deduplication and no removal.
    pub fn add_listener<F>(&self, listener: F)
    where
        F: Fn(Vec<Project>) + 'static,
    {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }

    /// Appends a new active project and notifies every observer.
    ///
    /// Input is not validated here; callers go through
    /// [`gather_user_input`](crate::domain::gather_user_input) first.
    pub fn add_project(&self, title: String, description: String, people: u32) -> ProjectId {
        let project = Project::new(title, description, people);
        let id = project.id;

        info!(%id, title = %project.title, people, "project added");
        self.projects.borrow_mut().push(project);
        self.update_listeners();
        id
    }

    /// Moves a project to `new_status` in place.
    ///
    /// Unknown ids and moves to the current status are silent no-ops and
    /// send no notification.
    pub fn move_project(&self, id: &ProjectId, new_status: ProjectStatus) {
        let moved = {
            let mut projects = self.projects.borrow_mut();
            match projects.iter_mut().find(|project| &project.id == id) {
                Some(project) => project.transition_to(new_status),
                None => {
                    debug!(%id, "ignoring move of unknown project");
                    return;
                }
            }
        };

        if !moved {
            debug!(%id, status = %new_status, "project already in requested status");
            return;
        }

        info!(%id, status = %new_status, "project moved");
        self.update_listeners();
    }

    /// Independent copy of the current sequence
    pub fn projects(&self) -> Vec<Project> {
        self.projects.borrow().clone()
    }

    pub fn get(&self, id: &ProjectId) -> Option<Project> {
        self.projects
            .borrow()
            .iter()
            .find(|project| &project.id == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.projects.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.borrow().is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Exports the current sequence as pretty-printed JSON
    pub fn snapshot_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&*self.projects.borrow())?)
    }

    fn update_listeners(&self) {
        // No borrow is held across a call. Each observer gets a fresh copy,
        // so a mutation made by one observer reaches every later observer.
        let listeners: Vec<Listener> = self.listeners.borrow().clone();

        debug!(
            listeners = listeners.len(),
            projects = self.len(),
            "notifying listeners"
        );
        for listener in listeners {
            listener(self.projects());
        }
    }
}
