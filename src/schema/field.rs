use serde::{Deserialize, Serialize};

/// An editable value together with its validity flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputModel {
    pub value: String,
    pub is_valid: bool,
}

impl InputModel {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            is_valid: true,
        }
    }
}

impl Default for InputModel {
    fn default() -> Self {
        Self::new("")
    }
}

/// A field whose label comes from a known source key. The label is never renamed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputField {
    pub title: String,
    pub model: InputModel,
}

impl InputField {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            model: InputModel::new(value),
        }
    }
}

/// A user-added field where both the key and the value are editable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValueField {
    pub title: InputModel,
    pub model: InputModel,
}

/// One entry of the entity section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "context", rename_all = "camelCase")]
pub enum EntityField {
    #[serde(rename = "input")]
    Fixed(InputField),
    #[serde(rename = "keyValueInput")]
    FreeForm(KeyValueField),
}

impl EntityField {
    /// The field's current key.
    pub fn key(&self) -> &str {
        match self {
            EntityField::Fixed(field) => &field.title,
            EntityField::FreeForm(field) => &field.title.value,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            EntityField::Fixed(field) => &field.model.value,
            EntityField::FreeForm(field) => &field.model.value,
        }
    }

    pub fn model_mut(&mut self) -> &mut InputModel {
        match self {
            EntityField::Fixed(field) => &mut field.model,
            EntityField::FreeForm(field) => &mut field.model,
        }
    }

    pub fn is_free_form(&self) -> bool {
        matches!(self, EntityField::FreeForm(_))
    }
}
