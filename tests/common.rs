//! Common test utilities for building property objects and workflow definitions.
use serde_json::json;
use step_schema::prelude::*;

/// Creates a property object with only string values.
#[allow(dead_code)]
pub fn create_flat_properties() -> PropertyObject {
    PropertyObject::from_value(json!({
        "name": "recommend-vm",
        "description": "",
        "connectionName": "aws-ap-northeast-2",
    }))
    .expect("fixture must be an object")
}

/// Creates a property object mixing scalars and object sequences.
///
/// Layout: `name`, `vm` (2 elements), `label`, `disks` (1 element).
#[allow(dead_code)]
pub fn create_nested_properties() -> PropertyObject {
    PropertyObject::from_value(json!({
        "name": "mci01",
        "vm": [
            {"commonImage": "ubuntu22.04", "commonSpec": "aws+t3.small", "subGroupSize": "1"},
            {"commonImage": "ubuntu20.04", "commonSpec": "aws+t3.large", "subGroupSize": "3"},
        ],
        "label": "prod",
        "disks": [{"size": "100", "type": "gp3"}],
    }))
    .expect("fixture must be an object")
}

/// Creates a property object where some values have shapes the schema cannot edit.
#[allow(dead_code)]
pub fn create_mixed_properties() -> PropertyObject {
    PropertyObject::from_value(json!({
        "name": "mci01",
        "count": 3,
        "enabled": true,
        "owner": null,
        "tags": ["a", "b"],
        "nested": {"inner": "x"},
        "servers": [{"x": "1"}, {"x": "2"}],
    }))
    .expect("fixture must be an object")
}

/// Creates a workflow definition with two task steps.
#[allow(dead_code)]
pub fn create_definition() -> Definition {
    let first = StepProperties {
        model: create_nested_properties(),
        fixed_model: FixedParams::new()
            .with_path_param("nsId", "ns01")
            .with_query_param("option", "refine"),
        is_deletable: true,
        ..StepProperties::default()
    };
    let second = StepProperties {
        model: create_flat_properties(),
        ..StepProperties::default()
    };
    Definition::new(
        "migration",
        vec![
            Step::task("step-1", "infra", first),
            Step::task("step-2", "recommend", second),
        ],
    )
}
