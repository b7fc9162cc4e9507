//! Custom style records and the read-side projection leaf elements render from

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::StyleChangeError;
use crate::transform::{build_transform, TransformMap, TransformProperty};

/// A style value as written by the inspector
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Text(String),
}

impl StyleValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            StyleValue::Text(s) => s.trim().parse().ok(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            StyleValue::Text(s) => Some(s),
            StyleValue::Number(_) => None,
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Number(n) => write!(f, "{n}"),
            StyleValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Text(s)
    }
}

/// CSS declarations the brand book knows how to render
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CssProperty {
    Opacity,
    BackgroundColor,
    Color,
    FontSize,
    FontWeight,
    LineHeight,
    LetterSpacing,
    Margin,
    Padding,
    Width,
    Height,
    BorderRadius,
}

impl CssProperty {
    pub const ALL: [CssProperty; 12] = [
        CssProperty::Opacity,
        CssProperty::BackgroundColor,
        CssProperty::Color,
        CssProperty::FontSize,
        CssProperty::FontWeight,
        CssProperty::LineHeight,
        CssProperty::LetterSpacing,
        CssProperty::Margin,
        CssProperty::Padding,
        CssProperty::Width,
        CssProperty::Height,
        CssProperty::BorderRadius,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CssProperty::Opacity => "opacity",
            CssProperty::BackgroundColor => "backgroundColor",
            CssProperty::Color => "color",
            CssProperty::FontSize => "fontSize",
            CssProperty::FontWeight => "fontWeight",
            CssProperty::LineHeight => "lineHeight",
            CssProperty::LetterSpacing => "letterSpacing",
            CssProperty::Margin => "margin",
            CssProperty::Padding => "padding",
            CssProperty::Width => "width",
            CssProperty::Height => "height",
            CssProperty::BorderRadius => "borderRadius",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.name() == name)
    }
}

/// Where a property name is routed inside a [`CustomStyleRecord`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StyleProperty {
    Classes,
    Content,
    Transform(TransformProperty),
    Css(CssProperty),
    /// Unrecognized name, kept verbatim
    Custom(String),
}

impl StyleProperty {
    /// Route a property name
    ///
    /// Empty names and the derived `transform` key are rejected.
    pub fn from_name(name: &str) -> Result<Self, StyleChangeError> {
        match name {
            "" => Err(StyleChangeError::MissingProperty {
                element_id: String::new(),
            }),
            "transform" => Err(StyleChangeError::DerivedProperty {
                property: name.to_string(),
            }),
            "classes" => Ok(StyleProperty::Classes),
            "content" => Ok(StyleProperty::Content),
            other => Ok(TransformProperty::from_name(other)
                .map(StyleProperty::Transform)
                .or_else(|| CssProperty::from_name(other).map(StyleProperty::Css))
                .unwrap_or_else(|| StyleProperty::Custom(other.to_string()))),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            StyleProperty::Classes => "classes",
            StyleProperty::Content => "content",
            StyleProperty::Transform(p) => p.name(),
            StyleProperty::Css(p) => p.name(),
            StyleProperty::Custom(name) => name,
        }
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The style bag of a record
///
/// `transform` is derived from the record's transforms and has no setter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleDeclarations {
    transform: Option<String>,
    declarations: BTreeMap<CssProperty, StyleValue>,
    extra: BTreeMap<String, StyleValue>,
}

impl StyleDeclarations {
    pub fn transform(&self) -> Option<&str> {
        self.transform.as_deref()
    }

    pub fn get(&self, property: CssProperty) -> Option<&StyleValue> {
        self.declarations.get(&property)
    }

    pub fn get_custom(&self, name: &str) -> Option<&StyleValue> {
        self.extra.get(name)
    }

    /// Look up any key by its CSS name, including `transform`
    pub fn get_by_name(&self, name: &str) -> Option<StyleValue> {
        if name == "transform" {
            return self.transform.clone().map(StyleValue::Text);
        }
        match CssProperty::from_name(name) {
            Some(property) => self.declarations.get(&property).cloned(),
            None => self.extra.get(name).cloned(),
        }
    }

    pub fn set(&mut self, property: CssProperty, value: StyleValue) {
        self.declarations.insert(property, value);
    }

    pub fn set_custom(&mut self, name: impl Into<String>, value: StyleValue) {
        self.extra.insert(name.into(), value);
    }

    pub fn len(&self) -> usize {
        usize::from(self.transform.is_some()) + self.declarations.len() + self.extra.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every declaration as `(name, value)`, `transform` first
    pub fn iter(&self) -> impl Iterator<Item = (&str, StyleValue)> + '_ {
        self.transform
            .iter()
            .map(|t| ("transform", StyleValue::Text(t.clone())))
            .chain(self.declarations.iter().map(|(k, v)| (k.name(), v.clone())))
            .chain(self.extra.iter().map(|(k, v)| (k.as_str(), v.clone())))
    }
}

/// Accumulated edits for one element id
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CustomStyleRecord {
    /// Replaces the element's classes wholesale
    pub classes: Option<String>,
    pub content: Option<String>,
    pub transforms: TransformMap,
    style: StyleDeclarations,
}

impl CustomStyleRecord {
    pub fn style(&self) -> &StyleDeclarations {
        &self.style
    }

    /// Fold one edit into the record
    ///
    /// Transform edits recompute `style.transform`; every other style key is
    /// merged shallowly, last write wins.
    pub fn apply(&mut self, property: StyleProperty, value: StyleValue) {
        match property {
            StyleProperty::Classes => self.classes = Some(value.to_string()),
            StyleProperty::Content => self.content = Some(value.to_string()),
            StyleProperty::Transform(prop) => {
                self.transforms.insert(prop, value.to_string());
                self.style.transform = Some(build_transform(&self.transforms));
            }
            StyleProperty::Css(prop) => self.style.set(prop, value),
            StyleProperty::Custom(name) => self.style.set_custom(name, value),
        }
    }

    /// Non-empty classes, non-empty content, or any style key
    pub fn has_custom_styles(&self) -> bool {
        self.classes.as_deref().is_some_and(|c| !c.is_empty())
            || self.content.as_deref().is_some_and(|c| !c.is_empty())
            || !self.style.is_empty()
    }

    /// Stored raw value of a transform property
    pub fn transform_value(&self, property: TransformProperty) -> Option<&str> {
        self.transforms.get(&property).map(String::as_str)
    }

    pub fn projection(&self) -> StyleProjection {
        StyleProjection {
            class_name: self.classes.clone().unwrap_or_default(),
            content: self.content.clone(),
            style: self.style.clone(),
        }
    }
}

/// What a leaf element merges with its own defaults when rendering
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleProjection {
    /// Custom classes, empty when unset
    pub class_name: String,
    /// Content override; the element falls back to its own text when `None`
    pub content: Option<String>,
    pub style: StyleDeclarations,
}

impl StyleProjection {
    pub fn opacity(&self) -> Option<f64> {
        self.style
            .get(CssProperty::Opacity)
            .and_then(StyleValue::as_number)
    }

    pub fn transform_caption(&self) -> Option<&str> {
        self.style.transform().filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prop(name: &str) -> StyleProperty {
        StyleProperty::from_name(name).unwrap()
    }

    #[test]
    fn test_routing() {
        assert_eq!(prop("classes"), StyleProperty::Classes);
        assert_eq!(prop("content"), StyleProperty::Content);
        assert_eq!(prop("rotate"), StyleProperty::Transform(TransformProperty::Rotate));
        assert_eq!(prop("opacity"), StyleProperty::Css(CssProperty::Opacity));
        assert_eq!(prop("filter"), StyleProperty::Custom("filter".into()));
    }

    #[test]
    fn test_rejects_empty_and_derived() {
        assert!(matches!(
            StyleProperty::from_name(""),
            Err(StyleChangeError::MissingProperty { .. })
        ));
        assert_eq!(
            StyleProperty::from_name("transform"),
            Err(StyleChangeError::DerivedProperty {
                property: "transform".into()
            })
        );
    }

    #[test]
    fn test_transform_merge_preserves_siblings() {
        let mut record = CustomStyleRecord::default();
        record.apply(prop("rotate"), "10deg".into());
        record.apply(prop("scale"), "120%".into());

        assert_eq!(record.transform_value(TransformProperty::Rotate), Some("10deg"));
        assert_eq!(record.transform_value(TransformProperty::Scale), Some("120%"));
        assert_eq!(record.style().transform(), Some("rotate(10deg) scale(1.2)"));
    }

    #[test]
    fn test_css_edit_leaves_transforms_alone() {
        let mut record = CustomStyleRecord::default();
        record.apply(prop("translateX"), "50".into());
        record.apply(prop("opacity"), 0.5.into());

        assert_eq!(record.transforms.len(), 1);
        assert_eq!(record.style().transform(), Some("translateX(50px)"));
        assert_eq!(
            record.style().get(CssProperty::Opacity),
            Some(&StyleValue::Number(0.5))
        );
    }

    #[test]
    fn test_last_write_wins() {
        let mut record = CustomStyleRecord::default();
        record.apply(prop("color"), "#BEF264".into());
        record.apply(prop("color"), "#22D3EE".into());
        record.apply(prop("filter"), "blur(2px)".into());

        assert_eq!(record.style().get_by_name("color"), Some("#22D3EE".into()));
        assert_eq!(
            record.style().get_custom("filter"),
            Some(&StyleValue::Text("blur(2px)".into()))
        );
        assert_eq!(record.style().len(), 2);
    }

    #[test]
    fn test_has_custom_styles() {
        let mut record = CustomStyleRecord::default();
        assert!(!record.has_custom_styles());

        record.apply(StyleProperty::Classes, "".into());
        assert!(!record.has_custom_styles());

        record.apply(StyleProperty::Content, "Hello".into());
        assert!(record.has_custom_styles());
    }

    #[test]
    fn test_projection() {
        let empty = CustomStyleRecord::default().projection();
        assert_eq!(empty.class_name, "");
        assert_eq!(empty.content, None);
        assert!(empty.style.is_empty());

        let mut record = CustomStyleRecord::default();
        record.apply(StyleProperty::Classes, "p-6 rounded-xl".into());
        record.apply(prop("opacity"), 0.4.into());
        record.apply(prop("skewX"), "5°".into());
        let projection = record.projection();

        assert_eq!(projection.class_name, "p-6 rounded-xl");
        assert_eq!(projection.opacity(), Some(0.4));
        assert_eq!(projection.transform_caption(), Some("skewX(5deg)"));
        let names: Vec<&str> = projection.style.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["transform", "opacity"]);
    }

    #[test]
    fn test_style_value_display_and_serde() {
        assert_eq!(StyleValue::Number(0.5).to_string(), "0.5");
        assert_eq!(StyleValue::Number(50.0).to_string(), "50");
        assert_eq!(StyleValue::from("15°").to_string(), "15°");

        let parsed: StyleValue = serde_json::from_str("0.25").unwrap();
        assert_eq!(parsed, StyleValue::Number(0.25));
        let parsed: StyleValue = serde_json::from_str("\"12px\"").unwrap();
        assert_eq!(parsed, StyleValue::Text("12px".into()));
        assert_eq!(StyleValue::from("0.7").as_number(), Some(0.7));
    }
}
