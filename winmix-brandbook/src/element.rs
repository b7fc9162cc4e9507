//! Editable element references

use std::fmt;

/// What kind of leaf element is being edited
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    ColorSwatch,
    Typography,
    Component,
}

impl ElementKind {
    pub fn label(&self) -> &'static str {
        match self {
            ElementKind::ColorSwatch => "color",
            ElementKind::Typography => "typography",
            ElementKind::Component => "component",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identifies the target of an edit
///
/// Built by a leaf element when it is selected. Only `id` outlives the
/// selection, as the key of the element's style record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditableElementRef {
    pub kind: ElementKind,
    pub id: String,
    /// Default classes, used to seed the class editor
    pub base_classes: String,
    /// Visible text, when the element has any
    pub content: Option<String>,
}

impl EditableElementRef {
    pub fn new(kind: ElementKind, id: impl Into<String>, base_classes: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
            base_classes: base_classes.into(),
            content: None,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

/// Lowercase `name` and replace each whitespace run with `-`
pub fn slug(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// `"color"`, `"Primary Neon"` -> `"color-primary-neon"`
pub fn element_id(prefix: &str, name: &str) -> String {
    format!("{}-{}", prefix, slug(name))
}
