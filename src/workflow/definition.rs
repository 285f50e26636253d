use crate::property::{FixedParams, PropertyObject};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The configuration carried by a task step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepProperties {
    #[serde(default)]
    pub model: PropertyObject,
    #[serde(default)]
    pub fixed_model: FixedParams,
    #[serde(default)]
    pub is_deletable: bool,
    /// Keys this crate does not interpret. Kept so a save does not lose them.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single step of a sequential workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub id: String,
    pub component_type: String,
    #[serde(rename = "type")]
    pub step_type: String,
    pub name: String,
    #[serde(default)]
    pub properties: StepProperties,
}

impl Step {
    pub fn task(id: impl Into<String>, name: impl Into<String>, properties: StepProperties) -> Self {
        Self {
            id: id.into(),
            component_type: "task".to_string(),
            step_type: "task".to_string(),
            name: name.into(),
            properties,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefinitionProperties {
    pub workflow: String,
}

/// A workflow definition: its name and its top-level step sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    pub properties: DefinitionProperties,
    pub sequence: Vec<Step>,
}

impl Definition {
    pub fn new(workflow_name: impl Into<String>, sequence: Vec<Step>) -> Self {
        Self {
            properties: DefinitionProperties {
                workflow: workflow_name.into(),
            },
            sequence,
        }
    }

    pub fn find_step(&self, id: &str) -> Option<&Step> {
        self.sequence.iter().find(|step| step.id == id)
    }

    pub fn find_step_mut(&mut self, id: &str) -> Option<&mut Step> {
        self.sequence.iter_mut().find(|step| step.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_designer_step_json() {
        let step: Step = serde_json::from_value(json!({
            "id": "s1",
            "componentType": "task",
            "type": "beetle",
            "name": "recommend",
            "properties": {
                "isDeletable": true,
                "model": {"name": "vm01"},
                "fixedModel": {"path_params": {"nsId": "ns01"}},
                "description": "kept"
            }
        }))
        .unwrap();

        assert_eq!(step.step_type, "beetle");
        assert!(step.properties.is_deletable);
        assert_eq!(step.properties.model["name"], json!("vm01"));
        assert_eq!(step.properties.fixed_model.path_params["nsId"], "ns01");
        assert!(step.properties.fixed_model.query_params.is_empty());
        assert_eq!(step.properties.extra["description"], json!("kept"));
    }

    #[test]
    fn finds_steps_by_id() {
        let definition = Definition::new(
            "wf",
            vec![
                Step::task("a", "first", StepProperties::default()),
                Step::task("b", "second", StepProperties::default()),
            ],
        );
        assert_eq!(definition.find_step("b").map(|s| s.name.as_str()), Some("second"));
        assert!(definition.find_step("c").is_none());
    }
}
