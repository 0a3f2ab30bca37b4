use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Label shown for options without a usable title.
pub const DEFAULT_PLACEHOLDER: &str = "Select an option";

/// Prefix that marks the selected option.
pub const DEFAULT_SELECTED_MARKER: &str = "✓";

/// A `{title, value}` option record with opaque extra fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub value: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SelectOption {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            value: value.into(),
            extra: Map::new(),
        }
    }

    /// Attach an extra field that the helpers carry but never inspect.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Options are the same selection when their `value`s match.
    pub fn same_value(&self, other: &SelectOption) -> bool {
        self.value == other.value
    }
}

impl From<&crate::catalog::country::Country> for SelectOption {
    fn from(country: &crate::catalog::country::Country) -> Self {
        SelectOption::new(country.name.clone(), country.code.clone())
            .with_extra("flag", country.flag.clone())
    }
}

/// An option ready to draw: its label and whether it is the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOption {
    pub label: String,
    pub selected: bool,
    marker: String,
}

impl fmt::Display for RenderedOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.selected {
            write!(f, "{} {}", self.marker, self.label)
        } else {
            f.write_str(&self.label)
        }
    }
}

/// Render settings for option lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRenderer {
    placeholder: String,
    selected_marker: String,
}

impl Default for OptionRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionRenderer {
    pub fn new() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            selected_marker: DEFAULT_SELECTED_MARKER.to_string(),
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn selected_marker(mut self, marker: impl Into<String>) -> Self {
        self.selected_marker = marker.into();
        self
    }

    /// The option's title, or the placeholder when it is missing or empty.
    pub fn display_label(&self, option: &SelectOption) -> String {
        match option.title.as_deref() {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => self.placeholder.clone(),
        }
    }

    /// Render `option`, marking it when its value equals the selected option's value.
    pub fn render_option(
        &self,
        option: &SelectOption,
        selected: Option<&SelectOption>,
    ) -> RenderedOption {
        RenderedOption {
            label: self.display_label(option),
            selected: selected.is_some_and(|s| s.same_value(option)),
            marker: self.selected_marker.clone(),
        }
    }

    /// Render a whole option list against one selection.
    pub fn render_all(
        &self,
        options: &[SelectOption],
        selected: Option<&SelectOption>,
    ) -> Vec<RenderedOption> {
        options
            .iter()
            .map(|option| self.render_option(option, selected))
            .collect()
    }
}

/// [`OptionRenderer::display_label`] with the default placeholder.
pub fn display_label(option: &SelectOption) -> String {
    OptionRenderer::new().display_label(option)
}

/// [`OptionRenderer::render_option`] with the default settings.
pub fn render_option(option: &SelectOption, selected: Option<&SelectOption>) -> RenderedOption {
    OptionRenderer::new().render_option(option, selected)
}
