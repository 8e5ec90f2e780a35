use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

use crate::error::TaskdeckError;

/// Unique identifier for a project, assigned once at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(Uuid);

impl ProjectId {
    /// Generates a fresh identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for ProjectId {
    type Err = TaskdeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| TaskdeckError::InvalidProjectId(s.to_string()))
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which of the two lists a project belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Finished,
}

impl ProjectStatus {
    /// Lowercase key used for list element ids ("active-projects-list")
    pub fn list_id(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }

    /// A move is only a transition when the status actually changes
    pub fn can_transition_to(&self, target: &ProjectStatus) -> bool {
        self != target
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Finished => write!(f, "Finished"),
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = TaskdeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "finished" => Ok(Self::Finished),
            _ => Err(TaskdeckError::InvalidStatus(s.to_string())),
        }
    }
}

/// A tracked project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub people: u32,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new active project with a fresh identifier
    pub fn new(title: String, description: String, people: u32) -> Self {
        let now = Utc::now();
        Self {
            id: ProjectId::new(),
            title,
            description,
            people,
            status: ProjectStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Moves the project to `new_status`.
    ///
    /// Returns `false` and leaves the project untouched when it is already
    /// in that status.
    pub fn transition_to(&mut self, new_status: ProjectStatus) -> bool {
        if !self.status.can_transition_to(&new_status) {
            return false;
        }

        self.status = new_status;
        self.updated_at = Utc::now();
        true
    }

    /// "1 person assigned" / "3 persons assigned"
    pub fn persons_label(&self) -> String {
        if self.people == 1 {
            "1 person assigned".to_string()
        } else {
            format!("{} persons assigned", self.people)
        }
    }
}

/// Keeps the projects in `snapshot` whose status is `status`, in store order
pub fn filter_by_status(snapshot: &[Project], status: ProjectStatus) -> Vec<Project> {
    snapshot
        .iter()
        .filter(|project| project.status == status)
        .cloned()
        .collect()
}
