use crate::harness::childinput::ChildInput;
use serde_json::{Map, Value};

/// Owns form state and echoes child-reported changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildrenInputHarness {
    form_data: Value,
}

impl Default for ChildrenInputHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl ChildrenInputHarness {
    /// Start with an empty object.
    pub fn new() -> Self {
        Self {
            form_data: Value::Object(Map::new()),
        }
    }

    pub fn form_data(&self) -> &Value {
        &self.form_data
    }

    /// Replace the form data with exactly `value` and log it.
    pub fn handle_change(&mut self, value: Value) {
        tracing::info!(target: "countrypick::harness", form_data = %value, "form data changed");
        self.form_data = value;
    }

    /// Render `child` with the current form data, applying what it reports in order.
    pub fn render_child<C: ChildInput + ?Sized>(&mut self, child: &mut C) {
        let mut changes = Vec::new();
        child.render(&self.form_data, &mut |value| changes.push(value));

        for value in changes {
            self.handle_change(value);
        }
    }

    /// Pretty-printed JSON of the current form data.
    pub fn dump(&self) -> String {
        format!("{:#}", self.form_data)
    }
}
