//! Canonical flat-text encoding for property values.

use serde_json::Value;

/// Encode a property value for a flat destination (CSV cell, XML attribute,
/// SVG label line).
///
/// Strings render bare, scalars render as their JSON token, null renders
/// empty, and sequences/mappings fall back to compact JSON text. Every
/// exporter that needs flat output goes through this one function so the
/// encoding cannot drift between formats.
pub fn property_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => {
            serde_json::to_string(value).unwrap_or_default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn scalars_render_as_tokens() {
        assert_eq!(property_text(&json!("plain")), "plain");
        assert_eq!(property_text(&json!(true)), "true");
        assert_eq!(property_text(&json!(42)), "42");
        assert_eq!(property_text(&json!(1.5)), "1.5");
        assert_eq!(property_text(&Value::Null), "");
    }

    #[test]
    fn nested_values_fall_back_to_compact_json() {
        assert_eq!(property_text(&json!(["a", "b"])), r#"["a","b"]"#);
        assert_eq!(property_text(&json!({"k": 1})), r#"{"k":1}"#);
        assert_eq!(
            property_text(&json!({"outer": {"inner": [1, 2]}})),
            r#"{"outer":{"inner":[1,2]}}"#
        );
    }

    #[test]
    fn strings_are_not_quoted() {
        // A bare string must not pick up JSON quoting on its way to a cell.
        assert_eq!(property_text(&json!("has \"quotes\"")), "has \"quotes\"");
    }
}
