//! # step-schema - Editable Form Schemas for Workflow Steps
//!
//! **step-schema** turns the property object of a sequential-workflow step into an
//! editable form schema, lets an editor mutate that schema, and turns the result
//! back into a property object. The conversion is order-preserving and round-trips
//! every value it understands.
//!
//! ## Core Workflow
//!
//! 1.  **Load Properties**: Parse a step's configuration into a `PropertyObject`.
//! 2.  **Build**: Use `build_schema` (or `FormSchema::builder` for custom options). String
//!     values become entity fields; arrays of objects become repeatable groups; any other
//!     shape is dropped.
//! 3.  **Edit**: Add free-form fields, add or remove group instances, edit values. Free-form
//!     keys are validated for uniqueness and flagged, never rejected.
//! 4.  **Save**: Call `FormSchema::to_property_object` to get the edited configuration back.
//!
//! The `workflow` module wraps these steps in a `TaskEditor` session that rebuilds the
//! schema whenever the selected step changes.
//!
//! ## Quick Start
//!
//! ```rust
//! use step_schema::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let source = PropertyObject::from_json_str(
//!         r#"{"name": "vm01", "disks": [{"size": "10"}, {"size": "20"}], "count": 3}"#,
//!     )?;
//!
//!     let mut schema = build_schema(&source);
//!     assert_eq!(schema.entity().len(), 1); // "count" is not a string and is dropped
//!
//!     // Add a third disk shaped like the first one, then a custom key.
//!     schema.add_group_instance(1)?;
//!     let index = schema.entity_mut().add_free_form_field();
//!     let duplicate = schema.set_free_form_key(index, "zone")?;
//!     assert!(!duplicate);
//!     schema.entity_mut().set_value(index, "a1")?;
//!
//!     let saved = schema.to_property_object();
//!     assert_eq!(saved["disks"].as_array().map(Vec::len), Some(3));
//!     assert_eq!(saved["zone"], "a1");
//!     assert_eq!(saved.key_list(), vec!["name", "disks", "zone"]);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod prelude;
pub mod property;
pub mod render;
pub mod schema;
pub mod workflow;
