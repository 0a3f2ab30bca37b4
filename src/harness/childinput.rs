use serde_json::{Map, Value};

/// An input component driven by a harness.
///
/// `input_value` is the harness's current form data; the child calls `handle_change` for
/// every value it wants to report.
pub trait ChildInput {
    fn render(&mut self, input_value: &Value, handle_change: &mut dyn FnMut(Value));
}

/// A single text field that reports `{ <field>: <text> }` when typed into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInput {
    field: String,
    pending: Option<String>,
    shown: String,
}

impl FieldInput {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            pending: None,
            shown: String::new(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    /// Queue text to report on the next render.
    pub fn type_text(&mut self, text: impl Into<String>) {
        self.pending = Some(text.into());
    }

    /// The field's value as last received from the harness.
    pub fn shown(&self) -> &str {
        &self.shown
    }
}

impl ChildInput for FieldInput {
    fn render(&mut self, input_value: &Value, handle_change: &mut dyn FnMut(Value)) {
        self.shown = input_value
            .get(&self.field)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        if let Some(text) = self.pending.take() {
            let mut change = Map::new();
            change.insert(self.field.clone(), Value::String(text));
            handle_change(Value::Object(change));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_input_reports_once() {
        let mut input = FieldInput::new("country");
        let mut reported = Vec::new();

        input.type_text("ID");
        input.render(&json!({}), &mut |v| reported.push(v));
        input.render(&json!({}), &mut |v| reported.push(v));

        assert_eq!(reported, vec![json!({"country": "ID"})]);
    }

    #[test]
    fn test_field_input_shows_input_value() {
        let mut input = FieldInput::new("country");
        input.render(&json!({"country": "MY"}), &mut |_| {});
        assert_eq!(input.shown(), "MY");

        input.render(&json!({"other": 1}), &mut |_| {});
        assert_eq!(input.shown(), "");
    }
}
