use thiserror::Error;

/// Errors raised by schema mutations that receive an index the schema cannot satisfy.
///
/// Shape mismatches and duplicate keys are never reported here; they are
/// handled by silently dropping the value or by flagging the field invalid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Section index {index} is out of range (schema has {len} sections)")]
    SectionIndexOutOfRange { index: usize, len: usize },

    #[error("Section {0} is the entity section, not a repeatable group")]
    NotARepeatableGroup(usize),

    #[error("Field index {index} is out of range (section has {len} fields)")]
    FieldIndexOutOfRange { index: usize, len: usize },

    #[error("Instance index {index} is out of range (group '{subject}' has {len} instances)")]
    InstanceIndexOutOfRange {
        subject: String,
        index: usize,
        len: usize,
    },

    #[error("Field {0} has a fixed key and cannot be renamed")]
    NotAFreeFormField(usize),
}

/// Errors that can occur while loading a property object from JSON.
#[derive(Error, Debug, Clone)]
pub enum PropertyError {
    #[error("Failed to parse property JSON: {0}")]
    InvalidJson(String),

    #[error("Step properties must be a JSON object, but found {found}")]
    NotAnObject { found: String },
}

/// Errors surfaced by an editor session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("Step '{0}' was not found in the workflow definition")]
    StepNotFound(String),

    #[error("No step is currently selected for editing")]
    NoStepSelected,

    #[error(transparent)]
    Schema(#[from] SchemaError),
}
