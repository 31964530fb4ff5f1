use crate::models::{NewNote, NotePatch, CONTENT_MAX_LEN, TITLE_MAX_LEN};
use serde_json::{Map, Value};
use std::str::FromStr;
use thiserror::Error;

const CREATE_RULES_MESSAGE: &str = "Title and content are required and must be non-empty strings";
const UPDATE_RULES_MESSAGE: &str =
    "At least one field (title or content) must be provided as a non-empty string";

/// Request payload violated a note rule. The message is safe to show to clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Turns raw JSON request bodies into store input.
///
/// Implementations must agree on what they accept: both `title` and
/// `content` required for create, at least one of them for update, every
/// present field a string that is non-empty after trimming and within its
/// length limit. Accepted values are returned trimmed.
pub trait NoteValidator: Send + Sync {
    fn validate_create(&self, body: &Value) -> Result<NewNote, ValidationError>;
    fn validate_update(&self, body: &Value) -> Result<NotePatch, ValidationError>;
}

/// Which validator the server runs with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationStrategy {
    Manual,
    #[default]
    Schema,
}

impl ValidationStrategy {
    pub fn into_validator(self) -> Box<dyn NoteValidator> {
        match self {
            ValidationStrategy::Manual => Box::new(ManualValidator),
            ValidationStrategy::Schema => Box::new(SchemaValidator),
        }
    }
}

/// `NOTES_VALIDATION` named neither strategy
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown validation strategy '{0}', expected 'manual' or 'schema'")]
pub struct UnknownStrategy(pub String);

impl FromStr for ValidationStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manual" => Ok(ValidationStrategy::Manual),
            "schema" => Ok(ValidationStrategy::Schema),
            other => Err(UnknownStrategy(other.to_string())),
        }
    }
}

enum Field<'a> {
    Absent,
    Text(&'a str),
    NotText,
}

// A key set to null is present, and not a string.
fn field<'a>(body: &'a Map<String, Value>, name: &str) -> Field<'a> {
    match body.get(name) {
        None => Field::Absent,
        Some(Value::String(text)) => Field::Text(text),
        Some(_) => Field::NotText,
    }
}

fn non_empty_trimmed(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn exceeds(text: &str, max_len: usize) -> bool {
    text.chars().count() > max_len
}

// ---------------------------------------------------------------------------
// Hand-written checks
// ---------------------------------------------------------------------------

/// Imperative validator with one general message per operation
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualValidator;

impl ManualValidator {
    fn check_length(value: String, label: &str, max_len: usize) -> Result<String, ValidationError> {
        if exceeds(&value, max_len) {
            return Err(ValidationError::new(format!(
                "{label} must not exceed {max_len} characters"
            )));
        }
        Ok(value)
    }

    fn required(body: &Map<String, Value>, name: &str) -> Result<String, ValidationError> {
        match field(body, name) {
            Field::Text(text) => {
                non_empty_trimmed(text).ok_or_else(|| ValidationError::new(CREATE_RULES_MESSAGE))
            }
            Field::Absent | Field::NotText => Err(ValidationError::new(CREATE_RULES_MESSAGE)),
        }
    }

    fn optional(body: &Map<String, Value>, name: &str) -> Result<Option<String>, ValidationError> {
        match field(body, name) {
            Field::Absent => Ok(None),
            Field::Text(text) => non_empty_trimmed(text)
                .map(Some)
                .ok_or_else(|| ValidationError::new(UPDATE_RULES_MESSAGE)),
            Field::NotText => Err(ValidationError::new(UPDATE_RULES_MESSAGE)),
        }
    }
}

impl NoteValidator for ManualValidator {
    fn validate_create(&self, body: &Value) -> Result<NewNote, ValidationError> {
        let body = body
            .as_object()
            .ok_or_else(|| ValidationError::new(CREATE_RULES_MESSAGE))?;

        let title = Self::required(body, "title")?;
        let content = Self::required(body, "content")?;

        Ok(NewNote {
            title: Self::check_length(title, "Title", TITLE_MAX_LEN)?,
            content: Self::check_length(content, "Content", CONTENT_MAX_LEN)?,
        })
    }

    fn validate_update(&self, body: &Value) -> Result<NotePatch, ValidationError> {
        let body = body
            .as_object()
            .ok_or_else(|| ValidationError::new(UPDATE_RULES_MESSAGE))?;

        let title = Self::optional(body, "title")?;
        let content = Self::optional(body, "content")?;

        if title.is_none() && content.is_none() {
            return Err(ValidationError::new(UPDATE_RULES_MESSAGE));
        }

        Ok(NotePatch {
            title: title
                .map(|t| Self::check_length(t, "Title", TITLE_MAX_LEN))
                .transpose()?,
            content: content
                .map(|c| Self::check_length(c, "Content", CONTENT_MAX_LEN))
                .transpose()?,
        })
    }
}

// ---------------------------------------------------------------------------
// Declarative schema
// ---------------------------------------------------------------------------

/// Constraint on a single string field
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    /// Used in error messages
    pub label: &'static str,
    pub max_len: usize,
}

/// How the fields of an [`ObjectSchema`] must be present
#[derive(Debug, Clone, Copy)]
pub enum Presence {
    /// Every field must be present
    All,
    /// Fields are optional but at least one must be present
    AtLeastOne { message: &'static str },
}

/// A JSON object made of trimmed, length-limited string fields
#[derive(Debug, Clone, Copy)]
pub struct ObjectSchema {
    pub fields: &'static [FieldRule],
    pub presence: Presence,
}

const NOTE_FIELDS: [FieldRule; 2] = [
    FieldRule {
        name: "title",
        label: "Title",
        max_len: TITLE_MAX_LEN,
    },
    FieldRule {
        name: "content",
        label: "Content",
        max_len: CONTENT_MAX_LEN,
    },
];

pub const CREATE_SCHEMA: ObjectSchema = ObjectSchema {
    fields: &NOTE_FIELDS,
    presence: Presence::All,
};

pub const UPDATE_SCHEMA: ObjectSchema = ObjectSchema {
    fields: &NOTE_FIELDS,
    presence: Presence::AtLeastOne {
        message: "At least one field (title or content) must be provided",
    },
};

/// Field values accepted by an [`ObjectSchema`], trimmed, keyed by field name
#[derive(Debug, Default)]
pub struct CheckedFields(Vec<(&'static str, String)>);

impl CheckedFields {
    pub fn take(&mut self, name: &str) -> Option<String> {
        let index = self.0.iter().position(|(field, _)| *field == name)?;
        Some(self.0.swap_remove(index).1)
    }
}

impl ObjectSchema {
    pub fn check(&self, body: &Value) -> Result<CheckedFields, ValidationError> {
        let body = body
            .as_object()
            .ok_or_else(|| ValidationError::new("Request body must be a JSON object"))?;

        let mut checked = CheckedFields::default();

        for rule in self.fields {
            let text = match field(body, rule.name) {
                Field::Absent => match self.presence {
                    Presence::All => {
                        return Err(ValidationError::new(format!("{} is required", rule.label)))
                    }
                    Presence::AtLeastOne { .. } => continue,
                },
                Field::NotText => {
                    return Err(ValidationError::new(format!(
                        "{} must be a string",
                        rule.label
                    )))
                }
                Field::Text(text) => text,
            };

            let value = non_empty_trimmed(text).ok_or_else(|| {
                ValidationError::new(match self.presence {
                    Presence::All => format!("{} is required", rule.label),
                    Presence::AtLeastOne { .. } => format!("{} cannot be empty", rule.label),
                })
            })?;

            if exceeds(&value, rule.max_len) {
                return Err(ValidationError::new(format!("{} too long", rule.label)));
            }

            checked.0.push((rule.name, value));
        }

        if let Presence::AtLeastOne { message } = self.presence {
            if checked.0.is_empty() {
                return Err(ValidationError::new(message));
            }
        }

        Ok(checked)
    }
}

/// Validator driven by [`CREATE_SCHEMA`] and [`UPDATE_SCHEMA`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaValidator;

impl NoteValidator for SchemaValidator {
    fn validate_create(&self, body: &Value) -> Result<NewNote, ValidationError> {
        let mut fields = CREATE_SCHEMA.check(body)?;

        match (fields.take("title"), fields.take("content")) {
            (Some(title), Some(content)) => Ok(NewNote { title, content }),
            _ => Err(ValidationError::new(CREATE_RULES_MESSAGE)),
        }
    }

    fn validate_update(&self, body: &Value) -> Result<NotePatch, ValidationError> {
        let mut fields = UPDATE_SCHEMA.check(body)?;

        Ok(NotePatch {
            title: fields.take("title"),
            content: fields.take("content"),
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use serde_json::json;

    fn validators() -> Vec<(&'static str, Box<dyn NoteValidator>)> {
        vec![
            ("manual", ValidationStrategy::Manual.into_validator()),
            ("schema", ValidationStrategy::Schema.into_validator()),
        ]
    }

    fn invalid_create_bodies() -> Vec<Value> {
        vec![
            json!({}),
            json!({ "title": "only title" }),
            json!({ "content": "only content" }),
            json!({ "title": "", "content": "body" }),
            json!({ "title": "   ", "content": "body" }),
            json!({ "title": "title", "content": "\n\t " }),
            json!({ "title": 42, "content": "body" }),
            json!({ "title": "title", "content": null }),
            json!({ "title": "x".repeat(TITLE_MAX_LEN + 1), "content": "body" }),
            json!({ "title": "title", "content": "y".repeat(CONTENT_MAX_LEN + 1) }),
            json!(["title", "content"]),
            json!("title"),
            Value::Null,
        ]
    }

    fn invalid_update_bodies() -> Vec<Value> {
        vec![
            json!({}),
            json!({ "other": "field" }),
            json!({ "title": "" }),
            json!({ "content": "  " }),
            json!({ "title": "ok", "content": "" }),
            json!({ "title": null }),
            json!({ "content": ["list"] }),
            json!({ "title": "x".repeat(TITLE_MAX_LEN + 1) }),
            json!({ "content": "y".repeat(CONTENT_MAX_LEN + 1) }),
            json!(1),
            Value::Null,
        ]
    }

    #[test]
    fn test_create_trims_values() {
        for (name, validator) in validators() {
            let note = validator
                .validate_create(&json!({ "title": "  Groceries ", "content": "\tMilk, eggs\n" }))
                .unwrap();

            assert_eq!(note.title, "Groceries", "{name}");
            assert_eq!(note.content, "Milk, eggs", "{name}");
        }
    }

    #[test]
    fn test_create_accepts_limits_and_ignores_extra_keys() {
        let body = json!({
            "title": "x".repeat(TITLE_MAX_LEN),
            "content": "y".repeat(CONTENT_MAX_LEN),
            "tags": ["ignored"],
        });

        for (name, validator) in validators() {
            assert!(validator.validate_create(&body).is_ok(), "{name}");
        }
    }

    #[test]
    fn test_length_is_measured_after_trim_in_characters() {
        let title = format!("  {}  ", "é".repeat(TITLE_MAX_LEN));
        let body = json!({ "title": title, "content": "c" });

        for (name, validator) in validators() {
            let note = validator.validate_create(&body).unwrap();
            assert_eq!(note.title.chars().count(), TITLE_MAX_LEN, "{name}");
        }
    }

    #[test]
    fn test_create_rejects_invalid_bodies() {
        for (name, validator) in validators() {
            for body in invalid_create_bodies() {
                assert!(
                    validator.validate_create(&body).is_err(),
                    "{name} accepted {body}"
                );
            }
        }
    }

    #[test]
    fn test_update_rejects_invalid_bodies() {
        for (name, validator) in validators() {
            for body in invalid_update_bodies() {
                assert!(
                    validator.validate_update(&body).is_err(),
                    "{name} accepted {body}"
                );
            }
        }
    }

    #[test]
    fn test_update_keeps_absent_fields_absent() {
        for (name, validator) in validators() {
            let patch = validator
                .validate_update(&json!({ "content": " Milk, eggs, bread " }))
                .unwrap();

            assert_eq!(
                patch,
                NotePatch {
                    title: None,
                    content: Some("Milk, eggs, bread".to_string()),
                },
                "{name}"
            );
        }
    }

    #[test]
    fn test_manual_messages() {
        let validator = ManualValidator;

        let err = validator.validate_create(&json!({ "title": "" })).unwrap_err();
        assert_eq!(err.message(), CREATE_RULES_MESSAGE);

        let err = validator.validate_update(&json!({})).unwrap_err();
        assert_eq!(err.message(), UPDATE_RULES_MESSAGE);

        let err = validator
            .validate_update(&json!({ "title": "x".repeat(TITLE_MAX_LEN + 1) }))
            .unwrap_err();
        assert_eq!(err.message(), "Title must not exceed 200 characters");
    }

    #[test]
    fn test_schema_messages() {
        let validator = SchemaValidator;

        let err = validator
            .validate_create(&json!({ "content": "body" }))
            .unwrap_err();
        assert_eq!(err.to_string(), "Title is required");

        let err = validator
            .validate_create(&json!({ "title": "t", "content": "y".repeat(CONTENT_MAX_LEN + 1) }))
            .unwrap_err();
        assert_eq!(err.to_string(), "Content too long");

        let err = validator.validate_update(&json!({ "title": " " })).unwrap_err();
        assert_eq!(err.to_string(), "Title cannot be empty");

        let err = validator.validate_update(&json!({ "title": 7 })).unwrap_err();
        assert_eq!(err.to_string(), "Title must be a string");

        let err = validator.validate_update(&json!({})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "At least one field (title or content) must be provided"
        );

        let err = validator.validate_update(&json!("text")).unwrap_err();
        assert_eq!(err.to_string(), "Request body must be a JSON object");
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!(
            "manual".parse::<ValidationStrategy>().unwrap(),
            ValidationStrategy::Manual
        );
        assert_eq!(
            " Schema ".parse::<ValidationStrategy>().unwrap(),
            ValidationStrategy::Schema
        );
        assert_eq!(
            "Zod".parse::<ValidationStrategy>(),
            Err(UnknownStrategy("zod".to_string()))
        );
        assert_eq!(ValidationStrategy::default(), ValidationStrategy::Schema);
    }
}
