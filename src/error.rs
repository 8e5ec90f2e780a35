use thiserror::Error;

pub type Result<T> = std::result::Result<T, TaskdeckError>;

#[derive(Debug, Error)]
pub enum TaskdeckError {
    #[error("Invalid input, please try again! ({0})")]
    InvalidInput(String),

    #[error("Invalid project ID: {0}")]
    InvalidProjectId(String),

    #[error("Invalid project status: {0}")]
    InvalidStatus(String),

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
