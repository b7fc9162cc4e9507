use brandbook_core::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{BrandBookState, BrandBookTab, STATUS_TTL_TICKS};
use crate::tokens::page_items;

pub fn reducer(state: &mut BrandBookState, action: Action) -> DispatchResult<Effect> {
    match action {
        // Tabs
        Action::TabSelect(tab) => select_tab(state, tab),
        Action::TabNext => select_tab(state, state.active_tab.next()),
        Action::TabPrev => select_tab(state, state.active_tab.prev()),

        // Patterns animation
        Action::AnimationToggle => {
            state.animation_playing = !state.animation_playing;
            DispatchResult::changed()
        }

        // Color search
        Action::SearchStart => {
            if state.active_tab != BrandBookTab::Colors {
                state.active_tab = BrandBookTab::Colors;
                state.ui.focused_item = 0;
            }
            state.ui.search_active = true;
            DispatchResult::changed()
        }
        Action::SearchQuerySet(query) => {
            if state.search_query == query {
                return DispatchResult::unchanged();
            }
            state.search_query = query;
            clamp_focus(state);
            DispatchResult::changed()
        }
        Action::SearchEnd => {
            let was_active = std::mem::replace(&mut state.ui.search_active, false);
            DispatchResult::changed_if(was_active)
        }

        // Clipboard (async)
        Action::ClipboardCopy { text, label } => {
            state.copied_color = Some(label.clone());
            DispatchResult::changed_with(Effect::CopyToClipboard { text, label })
                .with(Effect::ScheduleCopiedClear)
        }
        Action::ClipboardDidCopy(label) => {
            state.set_status(format!("Copied {}", label), false);
            DispatchResult::changed()
        }
        Action::ClipboardDidError(error) => {
            state.copied_color = None;
            state.set_status(format!("Copy failed: {}", error), true);
            DispatchResult::changed()
        }
        Action::CopiedColorSet(label) => {
            if state.copied_color == label {
                DispatchResult::unchanged()
            } else {
                state.copied_color = label;
                DispatchResult::changed()
            }
        }

        // Inspector
        Action::InspectorOpen(element) => {
            DispatchResult::effect(Effect::ScheduleInspectorOpen(element))
        }
        Action::InspectorPromptApply { element_id, prompt } => {
            if prompt.trim().is_empty() {
                return DispatchResult::unchanged();
            }
            state.set_status(
                format!("Prompt for #{} noted; AI edits are not connected", element_id),
                false,
            );
            DispatchResult::changed()
        }
        Action::ElementSelect(Some(element)) => {
            if state.selected_element.as_ref() == Some(&element) {
                return DispatchResult::unchanged();
            }
            state.selected_element = Some(element);
            DispatchResult::changed()
        }
        Action::ElementSelect(None) => {
            let was_open = state.selected_element.take().is_some();
            DispatchResult::changed_if(was_open).with(Effect::CancelInspectorOpen)
        }

        // Style store
        Action::StyleUpdate {
            element_id,
            property,
            value,
        } => {
            state
                .custom_styles
                .entry(element_id)
                .or_default()
                .apply(property, value);
            DispatchResult::changed()
        }
        Action::StyleRemove { element_id } => {
            DispatchResult::changed_if(state.custom_styles.remove(&element_id).is_some())
        }

        // UI
        Action::UiFocusNext => {
            let count = item_count(state);
            if count == 0 {
                return DispatchResult::unchanged();
            }
            state.ui.focused_item = (state.ui.focused_item + 1) % count;
            DispatchResult::changed()
        }
        Action::UiFocusPrev => {
            let count = item_count(state);
            if count == 0 {
                return DispatchResult::unchanged();
            }
            state.ui.focused_item = (state.ui.focused_item + count - 1) % count;
            DispatchResult::changed()
        }
        Action::UiFocusSet(index) => {
            if index >= item_count(state) || index == state.ui.focused_item {
                return DispatchResult::unchanged();
            }
            state.ui.focused_item = index;
            DispatchResult::changed()
        }
        Action::UiToggleHelp => {
            state.ui.show_help = !state.ui.show_help;
            DispatchResult::changed()
        }
        Action::UiTerminalResize(width, height) => {
            if state.ui.terminal_size != (width, height) {
                state.ui.terminal_size = (width, height);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // Global
        Action::Tick => {
            state.ui.tick_count = state.ui.tick_count.wrapping_add(1);
            let expired = match &state.ui.status {
                Some(msg) => state.ui.tick_count.saturating_sub(msg.tick_shown) > STATUS_TTL_TICKS,
                None => false,
            };
            if expired {
                state.ui.status = None;
            }
            let animating = state.animation_playing && state.active_tab == BrandBookTab::Patterns;
            DispatchResult::changed_if(expired || animating)
        }
        Action::Quit => DispatchResult::unchanged(),
    }
}

fn select_tab(state: &mut BrandBookState, tab: BrandBookTab) -> DispatchResult<Effect> {
    if state.active_tab == tab {
        return DispatchResult::unchanged();
    }
    state.active_tab = tab;
    state.ui.focused_item = 0;
    state.ui.search_active = false;
    DispatchResult::changed()
}

fn item_count(state: &BrandBookState) -> usize {
    page_items(state.active_tab, &state.search_query).len()
}

fn clamp_focus(state: &mut BrandBookState) {
    let count = item_count(state);
    state.ui.focused_item = state.ui.focused_item.min(count.saturating_sub(1));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{EditableElementRef, ElementKind};
    use crate::style::{CssProperty, StyleProperty, StyleValue};
    use crate::transform::{build_transform, TransformProperty};

    fn update(element_id: &str, property: &str, value: impl Into<StyleValue>) -> Action {
        Action::StyleUpdate {
            element_id: element_id.into(),
            property: StyleProperty::from_name(property).unwrap(),
            value: value.into(),
        }
    }

    fn card() -> EditableElementRef {
        EditableElementRef::new(ElementKind::Component, "card-1", "glass-card p-4")
            .with_content("Card")
    }

    fn assert_invariants(state: &BrandBookState) {
        for record in state.custom_styles.values() {
            if record.transforms.is_empty() {
                assert_eq!(record.style().transform(), None);
            } else {
                assert_eq!(
                    record.style().transform(),
                    Some(build_transform(&record.transforms).as_str())
                );
            }
        }
        assert_eq!(state.inspector_open(), state.selected_element.is_some());
    }

    #[test]
    fn test_tab_select_resets_focus_and_search() {
        let mut state = BrandBookState::default();
        state.ui.focused_item = 3;
        state.ui.search_active = true;

        let result = reducer(&mut state, Action::TabSelect(BrandBookTab::Typography));
        assert!(result.changed);
        assert_eq!(state.active_tab, BrandBookTab::Typography);
        assert_eq!(state.ui.focused_item, 0);
        assert!(!state.ui.search_active);

        let result = reducer(&mut state, Action::TabSelect(BrandBookTab::Typography));
        assert!(!result.changed);
    }

    #[test]
    fn test_tab_cycle() {
        let mut state = BrandBookState::default();
        reducer(&mut state, Action::TabPrev);
        assert_eq!(state.active_tab, BrandBookTab::Patterns);
        reducer(&mut state, Action::TabNext);
        assert_eq!(state.active_tab, BrandBookTab::Overview);
    }

    #[test]
    fn test_animation_toggle() {
        let mut state = BrandBookState::default();
        reducer(&mut state, Action::AnimationToggle);
        assert!(!state.animation_playing);
        reducer(&mut state, Action::AnimationToggle);
        assert!(state.animation_playing);
    }

    #[test]
    fn test_transform_merge_preserves_siblings() {
        let mut state = BrandBookState::default();
        reducer(&mut state, update("card-1", "rotate", "10deg"));
        reducer(&mut state, update("card-1", "scale", "120%"));

        let record = &state.custom_styles["card-1"];
        assert_eq!(record.transforms.len(), 2);
        assert_eq!(record.style().transform(), Some("rotate(10deg) scale(1.2)"));
        assert_invariants(&state);
    }

    #[test]
    fn test_opacity_does_not_touch_transforms() {
        let mut state = BrandBookState::default();
        reducer(&mut state, update("card-1", "translateX", "50"));
        reducer(&mut state, update("card-1", "opacity", 0.5));

        let record = &state.custom_styles["card-1"];
        assert_eq!(
            record.transform_value(TransformProperty::TranslateX),
            Some("50")
        );
        assert_eq!(record.style().transform(), Some("translateX(50px)"));
        assert_eq!(
            record.style().get(CssProperty::Opacity),
            Some(&StyleValue::Number(0.5))
        );
    }

    #[test]
    fn test_unknown_property_is_stored_verbatim() {
        let mut state = BrandBookState::default();
        reducer(&mut state, update("card-1", "mixBlendMode", "screen"));
        assert_eq!(
            state.custom_styles["card-1"].style().get_custom("mixBlendMode"),
            Some(&StyleValue::Text("screen".into()))
        );
    }

    #[test]
    fn test_selection_round_trip_creates_no_record() {
        let mut state = BrandBookState::default();

        let result = reducer(&mut state, Action::ElementSelect(Some(card())));
        assert!(result.changed);
        assert!(state.inspector_open());

        let result = reducer(&mut state, Action::ElementSelect(None));
        assert!(result.changed);
        assert_eq!(result.effects, vec![Effect::CancelInspectorOpen]);
        assert!(!state.inspector_open());
        assert!(state.custom_styles.is_empty());
    }

    #[test]
    fn test_open_request_is_an_effect() {
        let mut state = BrandBookState::default();
        let result = reducer(&mut state, Action::InspectorOpen(card()));
        assert!(!result.changed);
        assert_eq!(result.effects, vec![Effect::ScheduleInspectorOpen(card())]);
        assert!(state.selected_element.is_none());
    }

    #[test]
    fn test_style_remove_deletes_record() {
        let mut state = BrandBookState::default();
        reducer(&mut state, update("card-1", "classes", "p-6"));
        let result = reducer(
            &mut state,
            Action::StyleRemove {
                element_id: "card-1".into(),
            },
        );
        assert!(result.changed);
        assert!(!state.custom_styles.contains_key("card-1"));

        let result = reducer(
            &mut state,
            Action::StyleRemove {
                element_id: "card-1".into(),
            },
        );
        assert!(!result.changed);
    }

    #[test]
    fn test_clipboard_copy_sets_feedback_and_timer() {
        let mut state = BrandBookState::default();
        let result = reducer(
            &mut state,
            Action::ClipboardCopy {
                text: "#BEF264".into(),
                label: "Primary".into(),
            },
        );
        assert_eq!(state.copied_color.as_deref(), Some("Primary"));
        assert_eq!(
            result.effects,
            vec![
                Effect::CopyToClipboard {
                    text: "#BEF264".into(),
                    label: "Primary".into()
                },
                Effect::ScheduleCopiedClear,
            ]
        );
    }

    #[test]
    fn test_copied_clear_is_always_safe() {
        let mut state = BrandBookState::default();
        let result = reducer(&mut state, Action::CopiedColorSet(None));
        assert!(!result.changed);

        state.copied_color = Some("Accent".into());
        let result = reducer(&mut state, Action::CopiedColorSet(None));
        assert!(result.changed);
        assert!(state.copied_color.is_none());
    }

    #[test]
    fn test_search_filters_and_clamps_focus() {
        let mut state = BrandBookState::default();
        reducer(&mut state, Action::SearchStart);
        assert_eq!(state.active_tab, BrandBookTab::Colors);
        assert!(state.ui.search_active);

        state.ui.focused_item = 12;
        reducer(&mut state, Action::SearchQuerySet("primary".into()));
        // 3 swatches + 3 guidelines
        assert_eq!(state.ui.focused_item, 5);

        let result = reducer(&mut state, Action::SearchEnd);
        assert!(result.changed);
        assert!(!state.ui.search_active);
        assert_eq!(state.search_query, "primary");
    }

    #[test]
    fn test_focus_wraps() {
        let mut state = BrandBookState::default();
        let count = page_items(BrandBookTab::Overview, "").len();
        reducer(&mut state, Action::UiFocusPrev);
        assert_eq!(state.ui.focused_item, count - 1);
        reducer(&mut state, Action::UiFocusNext);
        assert_eq!(state.ui.focused_item, 0);

        assert!(!reducer(&mut state, Action::UiFocusSet(count)).changed);
        assert!(reducer(&mut state, Action::UiFocusSet(2)).changed);
    }

    #[test]
    fn test_status_expires_after_ttl() {
        let mut state = BrandBookState::default();
        state.animation_playing = false;
        reducer(&mut state, Action::ClipboardDidCopy("Primary".into()));
        assert!(state.ui.status.is_some());

        for _ in 0..STATUS_TTL_TICKS {
            assert!(!reducer(&mut state, Action::Tick).changed);
        }
        assert!(reducer(&mut state, Action::Tick).changed);
        assert!(state.ui.status.is_none());
    }

    #[test]
    fn test_tick_renders_while_patterns_animate() {
        let mut state = BrandBookState {
            active_tab: BrandBookTab::Patterns,
            ..Default::default()
        };
        assert!(reducer(&mut state, Action::Tick).changed);
        state.animation_playing = false;
        assert!(!reducer(&mut state, Action::Tick).changed);
    }

    #[test]
    fn test_prompt_apply_ignores_blank() {
        let mut state = BrandBookState::default();
        let blank = Action::InspectorPromptApply {
            element_id: "card-1".into(),
            prompt: "   ".into(),
        };
        assert!(!reducer(&mut state, blank).changed);

        let prompt = Action::InspectorPromptApply {
            element_id: "card-1".into(),
            prompt: "make it glow".into(),
        };
        assert!(reducer(&mut state, prompt).changed);
        assert!(state.ui.status.is_some());
    }

    #[test]
    fn test_every_action_keeps_invariants() {
        let actions = vec![
            Action::TabSelect(BrandBookTab::Colors),
            Action::TabNext,
            Action::TabPrev,
            Action::AnimationToggle,
            Action::SearchStart,
            Action::SearchQuerySet("zzz".into()),
            Action::SearchEnd,
            Action::ClipboardCopy {
                text: "#22D3EE".into(),
                label: "Secondary".into(),
            },
            Action::ClipboardDidCopy("Secondary".into()),
            Action::ClipboardDidError("no display".into()),
            Action::CopiedColorSet(None),
            Action::InspectorOpen(card()),
            Action::InspectorPromptApply {
                element_id: "card-1".into(),
                prompt: "bigger".into(),
            },
            Action::ElementSelect(Some(card())),
            update("card-1", "perspective", "3"),
            update("card-1", "skewY", "-4°"),
            update("card-1", "opacity", 0.2),
            update("card-2", "content", "Hi"),
            Action::StyleRemove {
                element_id: "card-2".into(),
            },
            Action::ElementSelect(None),
            Action::UiFocusNext,
            Action::UiFocusPrev,
            Action::UiFocusSet(0),
            Action::UiToggleHelp,
            Action::UiTerminalResize(120, 40),
            Action::Tick,
            Action::Quit,
        ];

        let mut state = BrandBookState::default();
        for action in actions {
            reducer(&mut state, action);
            assert_invariants(&state);
        }
        assert_eq!(
            state.custom_styles["card-1"].style().transform(),
            Some("perspective(3px) skewY(-4deg)")
        );
    }
}
