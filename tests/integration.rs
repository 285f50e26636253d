//! Integration tests for step-schema
//!
//! End-to-end tests over a workflow definition loaded from JSON.
//!
use serde_json::json;
use step_schema::prelude::*;

const DEFINITION_JSON: &str = r#"{
    "properties": {"workflow": "migrate-infra"},
    "sequence": [
        {
            "id": "a1b2",
            "componentType": "task",
            "type": "beetle",
            "name": "infra",
            "properties": {
                "isDeletable": true,
                "model": {
                    "name": "mci01",
                    "installMonAgent": "no",
                    "vm": [
                        {"commonImage": "ubuntu22.04", "commonSpec": "aws+t3.small"}
                    ],
                    "retries": 3
                },
                "fixedModel": {
                    "path_params": {"nsId": "ns01"},
                    "query_params": {}
                }
            }
        }
    ]
}"#;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_full_edit_cycle_from_json() {
        let mut definition: Definition =
            serde_json::from_str(DEFINITION_JSON).expect("Failed to parse definition");
        assert_eq!(definition.properties.workflow, "migrate-infra");

        let mut editor = TaskEditor::new();
        editor
            .on_selection_changed(&definition, "a1b2")
            .expect("Failed to select step");

        let form = editor.form_mut().unwrap();
        form.add_group_instance(1).unwrap();
        let vm = form.repeatable_group_mut(1).unwrap();
        let added = vm.instance_mut(1).unwrap();
        added.set_value(0, "rocky9").unwrap();
        added.set_value(1, "gcp+e2-small").unwrap();

        editor.save(&mut definition).expect("Failed to save");

        let saved = serde_json::to_value(&definition).unwrap();
        let properties = &saved["sequence"][0]["properties"];
        assert_eq!(
            properties["model"],
            json!({
                "name": "mci01",
                "installMonAgent": "no",
                "vm": [
                    {"commonImage": "ubuntu22.04", "commonSpec": "aws+t3.small"},
                    {"commonImage": "rocky9", "commonSpec": "gcp+e2-small"}
                ]
            })
        );
        assert!(properties["model"].get("retries").is_none());
        assert_eq!(properties["fixedModel"]["path_params"], json!({"nsId": "ns01"}));
        assert_eq!(properties["isDeletable"], json!(true));
        assert_eq!(saved["sequence"][0]["componentType"], json!("task"));
    }

    #[test]
    fn test_unedited_save_keeps_supported_model() {
        let mut definition: Definition = serde_json::from_str(DEFINITION_JSON).unwrap();
        let original = definition.clone();

        let mut editor = TaskEditor::new();
        editor.on_selection_changed(&definition, "a1b2").unwrap();
        editor.save(&mut definition).unwrap();

        let before = &original.sequence[0].properties;
        let after = &definition.sequence[0].properties;
        assert_eq!(after.model.key_list(), vec!["name", "installMonAgent", "vm"]);
        assert_eq!(after.model["vm"], before.model["vm"]);
        assert_eq!(after.fixed_model, before.fixed_model);
    }
}
