//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the
//! step-schema crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use step_schema::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let json = std::fs::read_to_string("path/to/step_model.json")?;
//! let source = PropertyObject::from_json_str(&json)?;
//!
//! let schema = build_schema(&source);
//! println!("{}", SchemaFormatter::format_schema(&schema));
//!
//! // For a source of strings and arrays of flat objects, the unedited output
//! // equals the source. `==` ignores key order, so order is checked separately.
//! let saved = schema.to_property_object();
//! assert_eq!(saved, source);
//! assert_eq!(saved.key_list(), source.key_list());
//! # Ok(())
//! # }
//! ```

// Property boundary
pub use crate::property::{FixedParams, PropertyObject, ValueShape, classify};

// Schema types and operations
pub use crate::schema::{
    EntityField, EntitySection, FormSchema, GroupInstance, InputField, InputModel, KeyValueField,
    ParamsSchema, ParamsSection, RepeatableGroup, SchemaBuilder, SchemaOptions, SectionRef,
    TemplateFill, build_schema, parse_fixed_params,
};

// Editor session
pub use crate::workflow::{Definition, Step, StepProperties, TaskEditor};

// Error types
pub use crate::error::{EditorError, PropertyError, SchemaError};

// Rendering
pub use crate::render::SchemaFormatter;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
