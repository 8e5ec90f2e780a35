pub mod project;
pub mod validation;

pub use project::{filter_by_status, Project, ProjectId, ProjectStatus};
pub use validation::{
    gather_user_input, validate, FieldRules, FormRules, Validatable, ValidatedInput, Value,
};
