use crate::values::{Instance, Value};

/// Renders an instance as `UnionName.variant(field, ...)`. Nested instances go
/// through their own `Display` so that custom renderers apply to them.
pub fn format_instance(instance: &Instance) -> String {
    format!(
        "{}.{}({})",
        instance.union().name(),
        instance.tag(),
        instance
            .payload()
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    )
}

/// Renders an instance with one field per line for deep recursive structures.
pub fn format_instance_pretty(instance: &Instance) -> String {
    let fields = instance
        .payload()
        .iter()
        .map(|value| indent(&format_value_pretty(value)))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{}.{}({})",
        instance.union().name(),
        instance.tag(),
        if fields.is_empty() {
            "".into()
        } else {
            "\n".to_owned() + &fields + "\n"
        }
    )
}

fn format_value_pretty(value: &Value) -> String {
    if let Some(instance) = value.to_instance() {
        format_instance_pretty(instance)
    } else {
        value.to_string()
    }
}

fn indent(string: &str) -> String {
    regex::Regex::new("^|\n")
        .unwrap()
        .replace_all(string, "${0}  ")
        .into()
}
