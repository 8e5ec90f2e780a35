//! # Taskdeck Core
//!
//! Project state and status-transition logic for the Taskdeck board.
//!
//! Projects are added through a validated form and shown in one of two
//! lists, active and finished. Dragging a project onto the other list moves
//! it there. Every change to the [`ProjectState`] store is pushed to its
//! observers as a full snapshot; the list components re-filter that
//! snapshot and re-render.

pub mod config;
pub mod domain;
pub mod error;
pub mod state;
pub mod ui;

// Re-export commonly used types
pub use config::TaskdeckConfig;
pub use domain::{
    project::{Project, ProjectId, ProjectStatus},
    validation::{validate, FormRules, Validatable, Value},
};
pub use error::{Result, TaskdeckError};
pub use state::ProjectState;
