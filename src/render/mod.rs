pub mod formatter;

pub use formatter::SchemaFormatter;
