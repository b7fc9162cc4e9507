//! End-to-end flows through the root component and the store
//!
//! Events go through `BrandBook::handle_event`, actions through the real
//! reducer. The debounced open is settled inline the way the effect
//! handler does once the burst ends.

use brandbook_core::testing::{char_key, key};
use brandbook_core::{
    Component, EventKind, Store, assert_emitted, assert_not_emitted, count_emitted, find_emitted,
};
use crossterm::event::KeyEvent;
use winmix_brandbook::components::BrandBookProps;
use winmix_brandbook::keymap::default_keybindings;
use winmix_brandbook::tokens::page_items;
use winmix_brandbook::transform::TransformMap;
use winmix_brandbook::{
    Action, BrandBook, BrandBookState, BrandBookTab, Effect, ElementInspector, StyleValue,
    TransformProperty, reducer,
};

struct App {
    store: Store<BrandBookState, Action, Effect>,
    root: BrandBook,
}

impl App {
    fn new(tab: BrandBookTab) -> Self {
        let state = BrandBookState {
            active_tab: tab,
            ..Default::default()
        };
        Self {
            store: Store::new(state, reducer),
            root: BrandBook::new(default_keybindings()),
        }
    }

    fn state(&self) -> &BrandBookState {
        self.store.state()
    }

    fn dispatch(&mut self, action: Action) {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            if let Effect::ScheduleInspectorOpen(element) = effect {
                self.store.dispatch(Action::ElementSelect(Some(element)));
            }
        }
    }

    fn send(&mut self, event: EventKind) -> Vec<Action> {
        let actions: Vec<Action> = self
            .root
            .handle_event(&event, BrandBookProps { state: self.store.state() })
            .into_iter()
            .collect();
        for action in actions.clone() {
            self.dispatch(action);
        }
        actions
    }

    fn press(&mut self, key: KeyEvent) -> Vec<Action> {
        self.send(EventKind::Key(key))
    }

    fn render(&mut self) -> String {
        let mut harness = brandbook_core::testing::RenderHarness::new(120, 40);
        let state = self.store.state();
        let root = &mut self.root;
        harness.render_to_string_plain(|frame| {
            root.render(frame, frame.area(), BrandBookProps { state });
        })
    }
}

#[test]
fn test_card_edit_sequence_builds_transform() {
    let mut store = Store::new(BrandBookState::default(), reducer);
    let edits: [(&str, StyleValue); 3] = [
        ("translateX", "50".into()),
        ("rotate", "15°".into()),
        ("classes", "p-6 rounded-xl".into()),
    ];
    for (property, value) in edits {
        let action = ElementInspector::new(store.state())
            .handle_style_change("card-1", property, value)
            .unwrap();
        store.dispatch(action);
    }

    let inspector = ElementInspector::new(store.state());
    let record = inspector.get_element_style("card-1");
    assert_eq!(record.classes.as_deref(), Some("p-6 rounded-xl"));
    let expected: TransformMap = [
        (TransformProperty::TranslateX, "50".to_string()),
        (TransformProperty::Rotate, "15°".to_string()),
    ]
    .into_iter()
    .collect();
    assert_eq!(record.transforms, expected);
    assert_eq!(
        record.style().transform(),
        Some("translateX(50px) rotate(15deg)")
    );
    assert!(inspector.has_custom_styles("card-1"));

    let reset = inspector.reset_element_styles("card-1");
    store.dispatch(reset);
    assert!(store.state().style_record("card-1").is_none());
    assert!(!ElementInspector::new(store.state()).has_custom_styles("card-1"));
}

#[test]
fn test_edits_apply_without_a_selection() {
    let mut store = Store::new(BrandBookState::default(), reducer);
    let action = ElementInspector::new(store.state())
        .handle_style_change("never-selected", "opacity", 0.4)
        .unwrap();
    store.dispatch(action);

    assert!(store.state().selected_element.is_none());
    let projection = ElementInspector::new(store.state()).apply_custom_styles("never-selected");
    assert_eq!(projection.opacity(), Some(0.4));
}

#[test]
fn test_inspect_edit_and_close_from_keyboard() {
    let mut app = App::new(BrandBookTab::Colors);
    let items = page_items(BrandBookTab::Colors, "");
    let first = items[0].clone();

    let actions = app.press(char_key('e'));
    assert_emitted!(actions, Action::InspectorOpen(el) if el.id == first.id);
    assert_eq!(app.state().selected_element.as_ref(), Some(&first.element_ref()));

    let output = app.render();
    assert!(output.contains(&format!("COLOR #{}", first.id)));
    assert!(output.contains("Translate X"));

    // Content, Classes, Opacity, then Translate X
    app.press(key("down"));
    app.press(key("down"));
    app.press(key("down"));
    let actions = app.press(key("right"));
    assert_eq!(count_emitted!(actions, Action::StyleUpdate { .. }), 1);
    assert_emitted!(actions, Action::StyleUpdate { element_id, .. } if *element_id == first.id);

    let record = app.state().style_record(&first.id).unwrap();
    assert_eq!(record.transform_value(TransformProperty::TranslateX), Some("1px"));
    assert_eq!(record.style().transform(), Some("translateX(1px)"));

    // Keys belong to the panel while it is open
    let actions = app.press(char_key('q'));
    assert_not_emitted!(actions, Action::Quit);

    let actions = app.press(key("esc"));
    assert_emitted!(actions, Action::ElementSelect(None));
    assert!(!app.state().inspector_open());
    assert!(app.state().style_record(&first.id).is_some());

    let actions = app.press(char_key('r'));
    assert_emitted!(actions, Action::StyleRemove { element_id } if *element_id == first.id);
    assert!(app.state().style_record(&first.id).is_none());
}

#[test]
fn test_search_filters_swatches() {
    let mut app = App::new(BrandBookTab::Colors);

    let actions = app.press(char_key('/'));
    assert_emitted!(actions, Action::SearchStart);
    assert!(app.state().ui.search_active);

    let typed: Vec<Action> = "neon".chars().flat_map(|c| app.press(char_key(c))).collect();
    assert_eq!(count_emitted!(typed, Action::SearchQuerySet(_)), 4);
    assert_emitted!(typed, Action::SearchQuerySet(q) if q == "neon");
    assert_eq!(app.state().search_query, "neon");

    let output = app.render();
    assert!(output.contains("Primary Neon"));
    assert!(!output.contains("Cyan accent"));

    let actions = app.press(key("enter"));
    assert_emitted!(actions, Action::SearchEnd);
    assert!(!app.state().ui.search_active);
    assert_eq!(app.state().search_query, "neon");

    let actions = app.press(char_key('q'));
    assert_emitted!(actions, Action::Quit);
}

#[test]
fn test_copy_marks_swatch() {
    let mut app = App::new(BrandBookTab::Colors);
    app.press(char_key('j'));

    let actions = app.press(key("enter"));
    let copy = find_emitted!(actions, Action::ClipboardCopy { .. });
    assert_eq!(
        copy,
        Some(&Action::ClipboardCopy {
            text: "#CCFF00".into(),
            label: "Primary Neon".into(),
        })
    );
    assert_eq!(app.state().copied_color.as_deref(), Some("Primary Neon"));

    app.dispatch(Action::ClipboardDidCopy("Primary Neon".into()));
    let output = app.render();
    assert!(output.contains("Copied Primary Neon"));
}

#[test]
fn test_help_overlay_swallows_page_keys() {
    let mut app = App::new(BrandBookTab::Overview);
    app.press(char_key('?'));
    assert!(app.state().ui.show_help);

    let actions = app.press(char_key('2'));
    assert!(actions.is_empty());
    assert_eq!(app.state().active_tab, BrandBookTab::Overview);

    app.press(key("esc"));
    assert!(!app.state().ui.show_help);

    app.press(char_key('2'));
    assert_eq!(app.state().active_tab, BrandBookTab::Colors);
}
