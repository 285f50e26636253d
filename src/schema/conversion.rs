use super::FormSchema;
use super::field::{EntityField, InputField};
use super::section::{EntitySection, GroupInstance, RepeatableGroup};
use crate::property::PropertyObject;
use ahash::AHashSet;
use log::debug;
use serde_json::{Map, Value};

impl FormSchema {
    /// Converts the schema back into a property object.
    ///
    /// Free-form fields with an empty key, a key flagged invalid, or a key that
    /// an earlier field or a repeatable group already owns are left out. Keys
    /// present in the source keep their source position; keys added by the
    /// user follow.
    pub fn to_property_object(&self) -> PropertyObject {
        let mut emitted = Map::new();
        entity_entries(&self.entity, &self.groups, &mut emitted);
        for group in &self.groups {
            emitted.insert(group.subject.clone(), group_value(group));
        }

        let mut ordered = Map::new();
        for key in &self.key_order {
            if let Some(value) = emitted.get(key) {
                ordered.insert(key.clone(), value.clone());
            }
        }
        for (key, value) in emitted {
            if !ordered.contains_key(&key) {
                ordered.insert(key, value);
            }
        }

        PropertyObject::from(ordered)
    }
}

fn entity_entries(
    section: &EntitySection,
    groups: &[RepeatableGroup],
    out: &mut Map<String, Value>,
) {
    let reserved: AHashSet<&str> = groups.iter().map(|g| g.subject.as_str()).collect();
    let mut seen: AHashSet<&str> = AHashSet::new();
    for field in &section.fields {
        match field {
            EntityField::Fixed(input) => {
                seen.insert(&input.title);
                out.insert(input.title.clone(), Value::String(input.model.value.clone()));
            }
            EntityField::FreeForm(pair) => {
                let key = pair.title.value.as_str();
                if key.is_empty()
                    || !pair.title.is_valid
                    || seen.contains(key)
                    || reserved.contains(key)
                {
                    debug!("excluding free-form field with key '{}'", key);
                    continue;
                }
                seen.insert(key);
                out.insert(key.to_string(), Value::String(pair.model.value.clone()));
            }
        }
    }
}

fn group_value(group: &RepeatableGroup) -> Value {
    Value::Array(group.instances.iter().map(instance_object).collect())
}

fn instance_object(instance: &GroupInstance) -> Value {
    Value::Object(
        instance
            .fields
            .iter()
            .map(|InputField { title, model }| (title.clone(), Value::String(model.value.clone())))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use crate::property::PropertyObject;
    use crate::schema::build_schema;
    use serde_json::json;

    fn object(value: serde_json::Value) -> PropertyObject {
        PropertyObject::from_value(value).unwrap()
    }

    #[test]
    fn interleaved_keys_keep_source_order() {
        let source = object(json!({
            "a": "1",
            "list": [{"x": "1"}],
            "b": "2",
        }));
        let output = build_schema(&source).to_property_object();
        assert_eq!(output.key_list(), vec!["a", "list", "b"]);
        assert_eq!(output, source);
    }

    #[test]
    fn new_free_form_keys_follow_source_keys() {
        let source = object(json!({"a": "1", "list": []}));
        let mut schema = build_schema(&source);
        let index = schema.entity_mut().add_free_form_field();
        schema.set_free_form_key(index, "c").unwrap();
        schema.entity_mut().set_value(index, "3").unwrap();

        let output = schema.to_property_object();
        assert_eq!(output.key_list(), vec!["a", "list", "c"]);
    }

    #[test]
    fn stale_validity_does_not_admit_duplicates() {
        let source = object(json!({"a": "1"}));
        let mut schema = build_schema(&source);
        let index = schema.entity_mut().add_free_form_field();
        // Key written without going through validation.
        if let Some(crate::schema::EntityField::FreeForm(field)) =
            schema.entity_mut().fields.get_mut(index)
        {
            field.title.value = "a".to_string();
            field.model.value = "2".to_string();
        }
        assert_eq!(schema.to_property_object(), source);
    }

    #[test]
    fn stale_validity_does_not_overwrite_groups() {
        let source = object(json!({"name": "a", "vm": [{"x": "1"}]}));
        let mut schema = build_schema(&source);
        let index = schema.entity_mut().add_free_form_field();
        if let Some(crate::schema::EntityField::FreeForm(field)) =
            schema.entity_mut().fields.get_mut(index)
        {
            field.title.value = "vm".to_string();
            field.model.value = "user-value".to_string();
        }
        assert_eq!(schema.to_property_object()["vm"], json!([{"x": "1"}]));
    }
}
