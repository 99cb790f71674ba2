use serde::{Deserialize, Serialize};

/// What kind of input widget should render a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    /// Plain text entry
    #[default]
    Text,
    /// Masked entry
    Password,
    /// Email entry
    Email,
    /// Numeric entry
    Number,
}

/// Presentation metadata carried by a field for its UI binding.
///
/// Pure configuration: nothing here affects validation or dirtiness.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldMeta {
    /// Label shown next to the widget
    pub label: String,
    /// Longer help text shown near the widget
    pub help_text: String,
    /// Placeholder shown while the value is empty
    pub placeholder: String,
    /// Icon glyph shown as a prefix
    pub icon: String,
    /// Widget kind
    pub kind: InputKind,
    /// Render as a multi-line editor
    pub multiline: bool,
}
