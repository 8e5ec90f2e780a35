//! Declarative field validation and the form submission boundary.
//!
//! Lower bounds (`min_length`, `min`) are inclusive, upper bounds
//! (`max_length`, `max`) are exclusive. Length bounds only apply to text
//! values and numeric bounds only to numbers; a constraint that does not
//! apply to the value's kind is skipped. Text length is measured in UTF-16
//! code units, matching how browser form fields report it.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use crate::error::{Result, TaskdeckError};

/// A scalar form value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{}", text),
            Self::Number(number) => write!(f, "{}", number),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

/// A value together with the constraints it has to satisfy
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub value: Value,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Validatable {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    pub fn min(mut self, bound: f64) -> Self {
        self.min = Some(bound);
        self
    }

    pub fn max(mut self, bound: f64) -> Self {
        self.max = Some(bound);
        self
    }
}

/// Returns true iff every configured constraint holds
pub fn validate(input: &Validatable) -> bool {
    if input.required && input.value.to_string().trim().is_empty() {
        return false;
    }

    match &input.value {
        Value::Text(text) => {
            let len = text.encode_utf16().count();
            if input.min_length.is_some_and(|min| len < min) {
                return false;
            }
            if input.max_length.is_some_and(|max| len >= max) {
                return false;
            }
        }
        Value::Number(number) => {
            let number = *number;
            if input.min.is_some_and(|min| number.is_nan() || number < min) {
                return false;
            }
            if input.max.is_some_and(|max| number.is_nan() || number >= max) {
                return false;
            }
        }
    }

    true
}

/// Constraint set for one form field, as read from configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl FieldRules {
    /// Attaches these rules to a concrete value
    pub fn apply(&self, value: impl Into<Value>) -> Validatable {
        Validatable {
            value: value.into(),
            required: self.required,
            min_length: self.min_length,
            max_length: self.max_length,
            min: self.min,
            max: self.max,
        }
    }
}

/// Rules for the three fields of the new-project form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormRules {
    pub title: FieldRules,
    pub description: FieldRules,
    pub people: FieldRules,
}

impl Default for FormRules {
    fn default() -> Self {
        Self {
            title: FieldRules {
                required: true,
                ..FieldRules::default()
            },
            description: FieldRules {
                required: true,
                min_length: Some(5),
                ..FieldRules::default()
            },
            people: FieldRules {
                required: true,
                min: Some(1.0),
                ..FieldRules::default()
            },
        }
    }
}

/// Form input that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInput {
    pub title: String,
    pub description: String,
    pub people: u32,
}

/// Reads a raw people field the way a browser number coercion does:
/// surrounding whitespace is ignored, empty means zero and anything
/// unparsable is NaN.
fn parse_people(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Validates the three raw form strings against `rules`.
///
/// Nothing is trimmed or rewritten on success; the caller gets the title
/// and description exactly as entered.
pub fn gather_user_input(
    title: &str,
    description: &str,
    people: &str,
    rules: &FormRules,
) -> Result<ValidatedInput> {
    let people_count = parse_people(people);

    let checks = [
        ("title", rules.title.apply(title)),
        ("description", rules.description.apply(description)),
        ("people", rules.people.apply(people_count)),
    ];

    if let Some((field, _)) = checks.iter().find(|(_, check)| !validate(check)) {
        warn!(field = *field, "rejected project input");
        return Err(TaskdeckError::InvalidInput(format!("{} is not valid", field)));
    }

    if people_count.fract() != 0.0 || people_count < 0.0 || people_count > f64::from(u32::MAX) {
        warn!(people = people_count, "rejected non-integral people count");
        return Err(TaskdeckError::InvalidInput(
            "people must be a whole number".to_string(),
        ));
    }

    Ok(ValidatedInput {
        title: title.to_string(),
        description: description.to_string(),
        people: people_count as u32,
    })
}
