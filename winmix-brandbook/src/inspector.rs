//! Element inspection facade
//!
//! [`ElementInspector`] is the read/write surface leaf elements and the
//! property panel use instead of touching the store directly. Reads borrow
//! the current state; writes come back as [`Action`]s for the caller to
//! dispatch, so the store keeps a single writer.

use std::borrow::Cow;

use brandbook_core::Keybindings;
use crossterm::event::{KeyEvent, KeyModifiers};

use crate::action::Action;
use crate::element::EditableElementRef;
use crate::error::StyleChangeError;
use crate::keymap::{self, Command, KeyContext};
use crate::state::BrandBookState;
use crate::style::{CustomStyleRecord, StyleProjection, StyleProperty, StyleValue};

#[derive(Clone, Copy)]
pub struct ElementInspector<'a> {
    state: &'a BrandBookState,
}

impl<'a> ElementInspector<'a> {
    pub fn new(state: &'a BrandBookState) -> Self {
        Self { state }
    }

    pub fn selected_element(&self) -> Option<&'a EditableElementRef> {
        self.state.selected_element.as_ref()
    }

    pub fn inspector_open(&self) -> bool {
        self.state.inspector_open()
    }

    /// Request the inspector for `element`
    ///
    /// The request is debounced by the effect handler; bursts collapse to
    /// the last element.
    pub fn open_inspector(&self, element: EditableElementRef) -> Action {
        tracing::debug!(element_id = %element.id, kind = %element.kind, "open inspector");
        Action::InspectorOpen(element)
    }

    /// Open the inspector for a Shift-click, decline anything else
    ///
    /// `Some` means the click was consumed and the element's own click
    /// behaviour must not run.
    pub fn handle_element_click(
        &self,
        modifiers: KeyModifiers,
        element: EditableElementRef,
    ) -> Option<Action> {
        if modifiers.contains(KeyModifiers::SHIFT) {
            Some(self.open_inspector(element))
        } else {
            None
        }
    }

    pub fn handle_style_change(
        &self,
        element_id: &str,
        property: &str,
        value: impl Into<StyleValue>,
    ) -> Result<Action, StyleChangeError> {
        let property = validate(element_id, property)?;
        Ok(Action::StyleUpdate {
            element_id: element_id.to_string(),
            property,
            value: value.into(),
        })
    }

    /// Validate every change, then emit them in slice order
    ///
    /// Nothing is emitted if any entry is rejected.
    pub fn handle_batch_style_change(
        &self,
        element_id: &str,
        changes: &[(&str, StyleValue)],
    ) -> Result<Vec<Action>, StyleChangeError> {
        let properties = changes
            .iter()
            .map(|(name, _)| validate(element_id, name))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(properties
            .into_iter()
            .zip(changes)
            .map(|(property, (_, value))| Action::StyleUpdate {
                element_id: element_id.to_string(),
                property,
                value: value.clone(),
            })
            .collect())
    }

    /// The stored record, or an empty one
    pub fn get_element_style(&self, element_id: &str) -> Cow<'a, CustomStyleRecord> {
        match self.state.style_record(element_id) {
            Some(record) => Cow::Borrowed(record),
            None => Cow::Owned(CustomStyleRecord::default()),
        }
    }

    pub fn has_custom_styles(&self, element_id: &str) -> bool {
        self.state
            .style_record(element_id)
            .is_some_and(CustomStyleRecord::has_custom_styles)
    }

    /// Delete the element's record
    pub fn reset_element_styles(&self, element_id: &str) -> Action {
        tracing::debug!(element_id, "reset element styles");
        Action::StyleRemove {
            element_id: element_id.to_string(),
        }
    }

    /// What a leaf merges with its defaults
    pub fn apply_custom_styles(&self, element_id: &str) -> StyleProjection {
        self.get_element_style(element_id).projection()
    }

    pub fn is_element_selected(&self, element_id: &str) -> bool {
        self.selected_element().is_some_and(|e| e.id == element_id)
    }

    pub fn close_inspector(&self) -> Action {
        tracing::debug!("close inspector");
        Action::ElementSelect(None)
    }

    pub fn undo(&self) {
        tracing::trace!("undo requested; no edit history is kept");
    }

    /// Inspector-wide shortcuts: Esc closes, Ctrl/Cmd+Z is reserved
    pub fn handle_key(&self, key: KeyEvent, keybindings: &Keybindings<KeyContext>) -> Option<Action> {
        match keymap::resolve(keybindings, key, KeyContext::Inspector) {
            Some(Command::InspectorClose) if self.inspector_open() => Some(self.close_inspector()),
            Some(Command::Undo) => {
                self.undo();
                None
            }
            _ => None,
        }
    }
}

fn validate(element_id: &str, property: &str) -> Result<StyleProperty, StyleChangeError> {
    let result = if element_id.is_empty() {
        Err(StyleChangeError::MissingElementId)
    } else {
        StyleProperty::from_name(property).map_err(|e| match e {
            StyleChangeError::MissingProperty { .. } => StyleChangeError::MissingProperty {
                element_id: element_id.to_string(),
            },
            other => other,
        })
    };
    if let Err(e) = &result {
        tracing::warn!(element_id, property, error = %e, "style change rejected");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementKind;
    use crate::keymap::default_keybindings;
    use crate::style::CssProperty;
    use crate::transform::TransformProperty;
    use brandbook_core::testing::{ctrl_key, key};

    fn card(id: &str) -> EditableElementRef {
        EditableElementRef::new(ElementKind::Component, id, "glass-card p-4")
    }

    fn with_record(id: &str, property: StyleProperty, value: StyleValue) -> BrandBookState {
        let mut state = BrandBookState::default();
        state
            .custom_styles
            .entry(id.to_string())
            .or_default()
            .apply(property, value);
        state
    }

    #[test]
    fn test_shift_click_opens_plain_click_declines() {
        let state = BrandBookState::default();
        let inspector = ElementInspector::new(&state);

        assert_eq!(
            inspector.handle_element_click(KeyModifiers::SHIFT, card("card-1")),
            Some(Action::InspectorOpen(card("card-1")))
        );
        assert_eq!(inspector.handle_element_click(KeyModifiers::NONE, card("card-1")), None);
        assert_eq!(inspector.handle_element_click(KeyModifiers::CONTROL, card("card-1")), None);
    }

    #[test]
    fn test_style_change_validation() {
        let state = BrandBookState::default();
        let inspector = ElementInspector::new(&state);

        assert_eq!(
            inspector.handle_style_change("", "opacity", 0.5),
            Err(StyleChangeError::MissingElementId)
        );
        assert_eq!(
            inspector.handle_style_change("card-1", "", 0.5),
            Err(StyleChangeError::MissingProperty {
                element_id: "card-1".into()
            })
        );
        assert!(matches!(
            inspector.handle_style_change("card-1", "transform", "rotate(1deg)"),
            Err(StyleChangeError::DerivedProperty { .. })
        ));
        assert_eq!(
            inspector.handle_style_change("card-1", "rotate", "15°"),
            Ok(Action::StyleUpdate {
                element_id: "card-1".into(),
                property: StyleProperty::Transform(TransformProperty::Rotate),
                value: StyleValue::from("15°"),
            })
        );
    }

    #[test]
    fn test_batch_keeps_order_and_is_all_or_nothing() {
        let state = BrandBookState::default();
        let inspector = ElementInspector::new(&state);

        let actions = inspector
            .handle_batch_style_change(
                "card-1",
                &[("scale", "120%".into()), ("opacity", 0.4.into())],
            )
            .unwrap();
        assert_eq!(actions.len(), 2);
        assert!(matches!(
            &actions[0],
            Action::StyleUpdate { property: StyleProperty::Transform(TransformProperty::Scale), .. }
        ));

        let rejected = inspector.handle_batch_style_change(
            "card-1",
            &[("scale", "120%".into()), ("", 0.4.into())],
        );
        assert!(rejected.is_err());
    }

    #[test]
    fn test_missing_record_reads_as_empty() {
        let state = BrandBookState::default();
        let inspector = ElementInspector::new(&state);

        assert_eq!(*inspector.get_element_style("never-seen"), CustomStyleRecord::default());
        assert!(!inspector.has_custom_styles("never-seen"));

        let projection = inspector.apply_custom_styles("never-seen");
        assert_eq!(projection.class_name, "");
        assert_eq!(projection.content, None);
        assert!(projection.style.is_empty());
    }

    #[test]
    fn test_projection_reflects_record() {
        let state = with_record(
            "card-1",
            StyleProperty::Css(CssProperty::Opacity),
            StyleValue::Number(0.5),
        );
        let inspector = ElementInspector::new(&state);

        assert!(inspector.has_custom_styles("card-1"));
        let projection = inspector.apply_custom_styles("card-1");
        assert_eq!(projection.opacity(), Some(0.5));
        assert_eq!(projection.class_name, "");
    }

    #[test]
    fn test_selection_queries() {
        let mut state = BrandBookState::default();
        state.selected_element = Some(card("card-1"));
        let inspector = ElementInspector::new(&state);

        assert!(inspector.inspector_open());
        assert!(inspector.is_element_selected("card-1"));
        assert!(!inspector.is_element_selected("card-2"));
        assert_eq!(inspector.close_inspector(), Action::ElementSelect(None));
        assert_eq!(
            inspector.reset_element_styles("card-1"),
            Action::StyleRemove {
                element_id: "card-1".into()
            }
        );
    }

    #[test]
    fn test_escape_closes_only_when_open() {
        let kb = default_keybindings();
        let closed = BrandBookState::default();
        assert_eq!(ElementInspector::new(&closed).handle_key(key("esc"), &kb), None);

        let mut open = BrandBookState::default();
        open.selected_element = Some(card("card-1"));
        let inspector = ElementInspector::new(&open);
        assert_eq!(inspector.handle_key(key("esc"), &kb), Some(Action::ElementSelect(None)));
        assert_eq!(inspector.handle_key(ctrl_key('z'), &kb), None);
    }
}
