use crate::schema::{EntityField, FormSchema, ParamsSchema, ParamsSection, SectionRef};
use itertools::Itertools;
use std::fmt::Write;

/// Formats schemas into an indented, human-readable outline.
pub struct SchemaFormatter;

impl SchemaFormatter {
    /// Formats every section of a form schema, entity section first.
    pub fn format_schema(schema: &FormSchema) -> String {
        let mut output = String::new();
        for section in schema.sections() {
            match section {
                SectionRef::Entity(entity) => {
                    let _ = writeln!(output, "[{}]", entity.subject);
                    for field in &entity.fields {
                        Self::format_entity_field(&mut output, field);
                    }
                }
                SectionRef::Group(group) => {
                    let noun = if group.len() == 1 { "instance" } else { "instances" };
                    let _ = writeln!(output, "[{}] {} {}", group.subject, group.len(), noun);
                    for instance in &group.instances {
                        let _ = writeln!(output, "  #{}", instance.header.title);
                        for field in &instance.fields {
                            let _ = writeln!(output, "    {} = {}", field.title, field.model.value);
                        }
                    }
                }
            }
        }
        output
    }

    /// Formats both parameter groups, one line each.
    pub fn format_params(params: &ParamsSchema) -> String {
        format!(
            "{}\n{}\n",
            Self::format_params_section(&params.path_params),
            Self::format_params_section(&params.query_params)
        )
    }

    fn format_params_section(section: &ParamsSection) -> String {
        let pairs = section
            .fields()
            .iter()
            .map(|f| format!("{}={}", f.title, f.model.value))
            .join(", ");
        format!("[{}] {}", section.subject, pairs).trim_end().to_string()
    }

    fn format_entity_field(output: &mut String, field: &EntityField) {
        match field {
            EntityField::Fixed(input) => {
                let _ = writeln!(output, "  {} = {}", input.title, input.model.value);
            }
            EntityField::FreeForm(pair) => {
                let marker = if pair.title.is_valid { "" } else { " (invalid)" };
                let _ = writeln!(
                    output,
                    "  + {} = {}{}",
                    pair.title.value, pair.model.value, marker
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::{FixedParams, PropertyObject};
    use crate::schema::{build_schema, parse_fixed_params};
    use serde_json::json;

    #[test]
    fn formats_sections_in_order() {
        let source = PropertyObject::from_value(json!({
            "name": "vm01",
            "disks": [{"size": "10"}],
        }))
        .unwrap();
        let mut schema = build_schema(&source);
        let index = schema.entity_mut().add_free_form_field();
        schema.set_free_form_key(index, "name").unwrap();

        let text = SchemaFormatter::format_schema(&schema);
        assert_eq!(
            text,
            "[Entity]\n  name = vm01\n  + name =  (invalid)\n[disks] 1 instance\n  #0\n    size = 10\n"
        );
    }

    #[test]
    fn formats_params() {
        let params = FixedParams::new()
            .with_path_param("nsId", "ns01")
            .with_path_param("mciId", "mci01");
        let text = SchemaFormatter::format_params(&parse_fixed_params(&params));
        assert_eq!(text, "[Path_Params] nsId=ns01, mciId=mci01\n[Query_Params]\n");
    }
}
