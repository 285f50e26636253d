//! The editable form representation of a step's properties.
//!
//! A [`FormSchema`] is built fresh from a [`PropertyObject`](crate::property::PropertyObject)
//! whenever a step is opened, mutated in place by the editor, and converted back
//! with [`FormSchema::to_property_object`] when the step is saved.
//!
//! Section index `0` always addresses the entity section. Index `i >= 1`
//! addresses the `i - 1`th repeatable group.

use crate::error::SchemaError;
use crate::property::PropertyObject;
use log::trace;
use serde::{Deserialize, Serialize};

pub mod builder;
mod conversion;
pub mod field;
pub mod params;
pub mod section;

pub use builder::{SchemaBuilder, SchemaOptions, TemplateFill, build_schema};
pub use field::{EntityField, InputField, InputModel, KeyValueField};
pub use params::{ParamsSchema, ParamsSection, parse_fixed_params};
pub use section::{EntitySection, GroupInstance, InstanceHeader, RepeatableGroup};

/// The editable schema derived from one step's property object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSchema {
    pub(crate) entity: EntitySection,
    pub(crate) groups: Vec<RepeatableGroup>,
    /// Supported top-level keys in source order.
    pub(crate) key_order: Vec<String>,
    pub(crate) options: SchemaOptions,
}

/// A borrowed view over one section of a schema.
#[derive(Debug, Clone, Copy)]
pub enum SectionRef<'a> {
    Entity(&'a EntitySection),
    Group(&'a RepeatableGroup),
}

impl SectionRef<'_> {
    pub fn subject(&self) -> &str {
        match self {
            SectionRef::Entity(section) => &section.subject,
            SectionRef::Group(group) => &group.subject,
        }
    }
}

/// A mutable view over one section of a schema.
#[derive(Debug)]
pub enum SectionMut<'a> {
    Entity(&'a mut EntitySection),
    Group(&'a mut RepeatableGroup),
}

impl FormSchema {
    pub fn builder(source: &PropertyObject) -> SchemaBuilder<'_> {
        SchemaBuilder::new(source)
    }

    pub fn options(&self) -> &SchemaOptions {
        &self.options
    }

    pub fn entity(&self) -> &EntitySection {
        &self.entity
    }

    pub fn entity_mut(&mut self) -> &mut EntitySection {
        &mut self.entity
    }

    pub fn groups(&self) -> &[RepeatableGroup] {
        &self.groups
    }

    pub fn group(&self, subject: &str) -> Option<&RepeatableGroup> {
        self.groups.iter().find(|g| g.subject == subject)
    }

    pub fn group_mut(&mut self, subject: &str) -> Option<&mut RepeatableGroup> {
        self.groups.iter_mut().find(|g| g.subject == subject)
    }

    /// Total number of sections, including the leading entity section.
    pub fn section_count(&self) -> usize {
        self.groups.len() + 1
    }

    pub fn section(&self, index: usize) -> Option<SectionRef<'_>> {
        match index {
            0 => Some(SectionRef::Entity(&self.entity)),
            i => self.groups.get(i - 1).map(SectionRef::Group),
        }
    }

    pub fn section_mut(&mut self, index: usize) -> Option<SectionMut<'_>> {
        match index {
            0 => Some(SectionMut::Entity(&mut self.entity)),
            i => self.groups.get_mut(i - 1).map(SectionMut::Group),
        }
    }

    pub fn sections(&self) -> impl Iterator<Item = SectionRef<'_>> {
        std::iter::once(SectionRef::Entity(&self.entity))
            .chain(self.groups.iter().map(SectionRef::Group))
    }

    /// Appends a group instance to the repeatable group at `section_index`,
    /// shaped after the first source element recorded when the schema was built.
    pub fn add_group_instance(&mut self, section_index: usize) -> Result<(), SchemaError> {
        let fill = self.options.template_fill;
        let icon = self.options.instance_icon.clone();
        self.repeatable_group_mut(section_index)?
            .push_from_template(fill, &icon);
        Ok(())
    }

    /// Removes the entity field at `index` and re-validates the free-form keys.
    pub fn remove_entity_field(&mut self, index: usize) -> Result<EntityField, SchemaError> {
        let subjects = self.group_subjects();
        self.entity.remove_field(index, &subjects)
    }

    /// Checks a free-form key against every entity field and every group subject.
    ///
    /// Returns `true` when `candidate` is already taken and flags the field at
    /// `index` invalid accordingly.
    pub fn validate_key_uniqueness(
        &mut self,
        index: usize,
        candidate: &str,
    ) -> Result<bool, SchemaError> {
        let subjects = self.group_subjects();
        self.entity
            .validate_key_uniqueness(index, candidate, &subjects)
    }

    /// Renames the free-form field at `index` and validates the new key.
    pub fn set_free_form_key(
        &mut self,
        index: usize,
        key: impl Into<String>,
    ) -> Result<bool, SchemaError> {
        let subjects = self.group_subjects();
        self.entity.set_free_form_key(index, key, &subjects)
    }

    /// The keys owned by repeatable groups, in section order.
    pub fn group_subjects(&self) -> Vec<String> {
        self.groups.iter().map(|g| g.subject.clone()).collect()
    }

    /// Returns the repeatable group at `section_index`, rejecting the entity section.
    pub fn repeatable_group_mut(
        &mut self,
        section_index: usize,
    ) -> Result<&mut RepeatableGroup, SchemaError> {
        let len = self.section_count();
        match self.section_mut(section_index) {
            Some(SectionMut::Group(group)) => Ok(group),
            Some(SectionMut::Entity(_)) => Err(SchemaError::NotARepeatableGroup(section_index)),
            None => {
                trace!("section {} requested from {} sections", section_index, len);
                Err(SchemaError::SectionIndexOutOfRange {
                    index: section_index,
                    len,
                })
            }
        }
    }
}
