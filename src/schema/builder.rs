use super::FormSchema;
use super::field::InputField;
use super::section::{EntitySection, GroupInstance, RepeatableGroup};
use crate::property::{PropertyObject, ValueShape, classify, scalar_pairs};
use log::debug;
use serde::{Deserialize, Serialize};

pub const DEFAULT_INSTANCE_ICON: &str = "ic_chevron-down";

/// How a newly added group instance fills its values from the template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateFill {
    /// Template labels with empty values.
    #[default]
    Blank,
    /// Template labels with the first source element's values.
    CopyFirst,
}

/// Options that shape how a schema is built and extended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaOptions {
    pub template_fill: TemplateFill,
    pub instance_icon: String,
}

impl Default for SchemaOptions {
    fn default() -> Self {
        Self {
            template_fill: TemplateFill::default(),
            instance_icon: DEFAULT_INSTANCE_ICON.to_string(),
        }
    }
}

pub struct SchemaBuilder<'a> {
    source: &'a PropertyObject,
    options: SchemaOptions,
}

impl<'a> SchemaBuilder<'a> {
    pub fn new(source: &'a PropertyObject) -> Self {
        Self {
            source,
            options: SchemaOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SchemaOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_template_fill(mut self, fill: TemplateFill) -> Self {
        self.options.template_fill = fill;
        self
    }

    pub fn with_instance_icon(mut self, icon: &str) -> Self {
        self.options.instance_icon = icon.to_string();
        self
    }

    /// Walks the source once, dispatching every top-level value on its shape.
    pub fn build(self) -> FormSchema {
        let mut entity = EntitySection::new();
        let mut groups = Vec::new();
        let mut key_order = Vec::new();

        for (key, value) in self.source.iter() {
            match classify(value) {
                ValueShape::Scalar(scalar) => {
                    entity.push_fixed(key, scalar);
                    key_order.push(key.clone());
                }
                ValueShape::ObjectSequence(elements) => {
                    let instances = elements
                        .iter()
                        .enumerate()
                        .map(|(position, element)| {
                            GroupInstance::new(
                                &self.options.instance_icon,
                                position,
                                element_fields(element),
                            )
                        })
                        .collect();
                    let template = elements
                        .first()
                        .map(|element| element_fields(element))
                        .unwrap_or_default();
                    groups.push(RepeatableGroup {
                        subject: key.clone(),
                        instances,
                        template,
                    });
                    key_order.push(key.clone());
                }
                ValueShape::Unsupported => {
                    debug!("skipping property '{}': unsupported value shape", key);
                }
            }
        }

        debug!(
            "built form schema with {} entity fields and {} groups",
            entity.len(),
            groups.len()
        );

        FormSchema {
            entity,
            groups,
            key_order,
            options: self.options,
        }
    }
}

fn element_fields(element: &serde_json::Map<String, serde_json::Value>) -> Vec<InputField> {
    scalar_pairs(element)
        .map(|(key, value)| InputField::new(key, value))
        .collect()
}

/// Builds a form schema from a property object with default options.
pub fn build_schema(source: &PropertyObject) -> FormSchema {
    SchemaBuilder::new(source).build()
}
