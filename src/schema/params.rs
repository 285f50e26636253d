use super::field::InputField;
use crate::error::SchemaError;
use crate::property::FixedParams;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const PATH_PARAMS_SUBJECT: &str = "Path_Params";
pub const QUERY_PARAMS_SUBJECT: &str = "Query_Params";

/// A fixed list of parameter fields. Entries can be edited but not added or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamsSection {
    pub subject: String,
    fields: Vec<InputField>,
}

impl ParamsSection {
    fn from_map(subject: &str, params: &IndexMap<String, String>) -> Self {
        Self {
            subject: subject.to_string(),
            fields: params
                .iter()
                .map(|(key, value)| InputField::new(key.as_str(), value.as_str()))
                .collect(),
        }
    }

    pub fn fields(&self) -> &[InputField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.title == key)
            .map(|f| f.model.value.as_str())
    }

    pub fn set_value(&mut self, index: usize, value: impl Into<String>) -> Result<(), SchemaError> {
        let len = self.fields.len();
        let field = self
            .fields
            .get_mut(index)
            .ok_or(SchemaError::FieldIndexOutOfRange { index, len })?;
        field.model.value = value.into();
        Ok(())
    }

    /// Sets the value of the parameter named `key`. Returns `false` if no such parameter exists.
    pub fn set_value_by_key(&mut self, key: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|f| f.title == key) {
            Some(field) => {
                field.model.value = value.into();
                true
            }
            None => false,
        }
    }

    fn to_map(&self) -> IndexMap<String, String> {
        self.fields
            .iter()
            .map(|f| (f.title.clone(), f.model.value.clone()))
            .collect()
    }
}

/// The editable form of a step's path and query parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamsSchema {
    pub path_params: ParamsSection,
    pub query_params: ParamsSection,
}

impl ParamsSchema {
    pub fn to_fixed_params(&self) -> FixedParams {
        FixedParams {
            path_params: self.path_params.to_map(),
            query_params: self.query_params.to_map(),
        }
    }
}

pub fn parse_fixed_params(params: &FixedParams) -> ParamsSchema {
    ParamsSchema {
        path_params: ParamsSection::from_map(PATH_PARAMS_SUBJECT, &params.path_params),
        query_params: ParamsSection::from_map(QUERY_PARAMS_SUBJECT, &params.query_params),
    }
}
