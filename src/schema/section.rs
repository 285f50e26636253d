use super::builder::TemplateFill;
use super::field::{EntityField, InputField, InputModel, KeyValueField};
use crate::error::SchemaError;
use log::trace;
use serde::{Deserialize, Serialize};

pub const ENTITY_SUBJECT: &str = "Entity";

/// The flat key-value portion of a form schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySection {
    pub subject: String,
    pub fields: Vec<EntityField>,
}

impl Default for EntitySection {
    fn default() -> Self {
        Self {
            subject: ENTITY_SUBJECT.to_string(),
            fields: Vec::new(),
        }
    }
}

impl EntitySection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, index: usize) -> Option<&EntityField> {
        self.fields.get(index)
    }

    pub(crate) fn push_fixed(&mut self, title: &str, value: &str) {
        self.fields
            .push(EntityField::Fixed(InputField::new(title, value)));
    }

    /// Appends an empty key-value field for the user to fill in and returns its index.
    ///
    /// Nothing is validated here; the key is checked once the user types it.
    pub fn add_free_form_field(&mut self) -> usize {
        self.fields
            .push(EntityField::FreeForm(KeyValueField::default()));
        trace!("added free-form field at index {}", self.fields.len() - 1);
        self.fields.len() - 1
    }

    /// Removes the field at `index`, keeping the order of the remaining fields.
    ///
    /// Free-form keys are re-validated afterwards, since the removed field may
    /// have been the one they collided with. `reserved` holds keys owned by
    /// other sections.
    pub fn remove_field(
        &mut self,
        index: usize,
        reserved: &[String],
    ) -> Result<EntityField, SchemaError> {
        self.check_index(index)?;
        trace!("removing entity field {}", index);
        let removed = self.fields.remove(index);
        self.revalidate_free_form_keys(reserved);
        Ok(removed)
    }

    /// Replaces the value of the field at `index`.
    pub fn set_value(&mut self, index: usize, value: impl Into<String>) -> Result<(), SchemaError> {
        self.check_index(index)?;
        self.fields[index].model_mut().value = value.into();
        Ok(())
    }

    /// Checks whether `candidate` is already used as a key by any other field
    /// or by one of the `reserved` keys.
    ///
    /// Returns `true` when a duplicate exists and stores the negation in the
    /// key's validity flag of the free-form field at `index`. Fixed fields are
    /// never renamed and cannot be validated this way.
    pub fn validate_key_uniqueness(
        &mut self,
        index: usize,
        candidate: &str,
        reserved: &[String],
    ) -> Result<bool, SchemaError> {
        self.check_index(index)?;
        let exists = reserved.iter().any(|key| key == candidate)
            || self
                .fields
                .iter()
                .enumerate()
                .any(|(i, field)| i != index && field.key() == candidate);

        match &mut self.fields[index] {
            EntityField::FreeForm(field) => {
                field.title.is_valid = !exists;
                Ok(exists)
            }
            EntityField::Fixed(_) => Err(SchemaError::NotAFreeFormField(index)),
        }
    }

    /// Stores a new key for the free-form field at `index` and validates it.
    ///
    /// Returns `true` when the key duplicates another field's key or a reserved key.
    pub fn set_free_form_key(
        &mut self,
        index: usize,
        key: impl Into<String>,
        reserved: &[String],
    ) -> Result<bool, SchemaError> {
        self.check_index(index)?;
        let key = key.into();
        match &mut self.fields[index] {
            EntityField::FreeForm(field) => field.title.value = key.clone(),
            EntityField::Fixed(_) => return Err(SchemaError::NotAFreeFormField(index)),
        }
        self.validate_key_uniqueness(index, &key, reserved)
    }

    /// Recomputes every free-form key's validity flag.
    ///
    /// A free-form key is invalid when it matches a reserved key, a fixed
    /// field, or an earlier free-form field.
    pub fn revalidate_free_form_keys(&mut self, reserved: &[String]) {
        for index in 0..self.fields.len() {
            let (before, rest) = self.fields.split_at_mut(index);
            let Some((EntityField::FreeForm(field), after)) = rest.split_first_mut() else {
                continue;
            };
            let key = field.title.value.as_str();
            let taken_before = before.iter().any(|other| other.key() == key);
            let taken_after = after
                .iter()
                .any(|other| !other.is_free_form() && other.key() == key);
            let exists = reserved.iter().any(|r| r == key) || taken_before || taken_after;
            field.title.is_valid = !exists;
        }
    }

    fn check_index(&self, index: usize) -> Result<(), SchemaError> {
        if index < self.fields.len() {
            Ok(())
        } else {
            Err(SchemaError::FieldIndexOutOfRange {
                index,
                len: self.fields.len(),
            })
        }
    }
}

/// Display information for one group instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceHeader {
    pub icon: String,
    pub title: String,
}

/// One element of a repeatable group: a flat list of fixed-label fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupInstance {
    pub header: InstanceHeader,
    pub fields: Vec<InputField>,
}

impl GroupInstance {
    pub(crate) fn new(icon: &str, position: usize, fields: Vec<InputField>) -> Self {
        Self {
            header: InstanceHeader {
                icon: icon.to_string(),
                title: position.to_string(),
            },
            fields,
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
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

    /// Removes the field at `index` from this instance.
    pub fn remove_field(&mut self, index: usize) -> Result<InputField, SchemaError> {
        if index >= self.fields.len() {
            return Err(SchemaError::FieldIndexOutOfRange {
                index,
                len: self.fields.len(),
            });
        }
        trace!("removing group instance field {}", index);
        Ok(self.fields.remove(index))
    }
}

/// A named sequence of group instances mirroring an array-valued property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatableGroup {
    pub subject: String,
    pub instances: Vec<GroupInstance>,
    /// Fields of the first source element, recorded at build time.
    pub template: Vec<InputField>,
}

impl RepeatableGroup {
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn instance(&self, index: usize) -> Option<&GroupInstance> {
        self.instances.get(index)
    }

    pub fn instance_mut(&mut self, index: usize) -> Option<&mut GroupInstance> {
        self.instances.get_mut(index)
    }

    /// Appends a new instance shaped after the recorded template.
    pub fn push_from_template(&mut self, fill: TemplateFill, icon: &str) {
        let fields = self
            .template
            .iter()
            .map(|field| InputField {
                title: field.title.clone(),
                model: match fill {
                    TemplateFill::Blank => InputModel::default(),
                    TemplateFill::CopyFirst => InputModel::new(field.model.value.clone()),
                },
            })
            .collect();
        let position = self.instances.len();
        self.instances.push(GroupInstance::new(icon, position, fields));
        trace!("group '{}' now has {} instances", self.subject, self.len());
    }

    /// Removes the instance at `index` and renumbers the remaining headers.
    pub fn remove_instance(&mut self, index: usize) -> Result<GroupInstance, SchemaError> {
        if index >= self.instances.len() {
            return Err(SchemaError::InstanceIndexOutOfRange {
                subject: self.subject.clone(),
                index,
                len: self.instances.len(),
            });
        }
        let removed = self.instances.remove(index);
        self.relabel();
        Ok(removed)
    }

    fn relabel(&mut self) {
        for (position, instance) in self.instances.iter_mut().enumerate() {
            instance.header.title = position.to_string();
        }
    }
}
