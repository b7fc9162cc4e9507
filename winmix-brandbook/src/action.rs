use crate::element::EditableElementRef;
use crate::state::BrandBookTab;
use crate::style::{StyleProperty, StyleValue};

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    // Tabs
    TabSelect(BrandBookTab),
    TabNext,
    TabPrev,

    // Patterns animation
    AnimationToggle,

    // Color search
    SearchStart,
    SearchQuerySet(String),
    SearchEnd,

    // Clipboard (async)
    ClipboardCopy { text: String, label: String },
    ClipboardDidCopy(String),
    ClipboardDidError(String),
    CopiedColorSet(Option<String>),

    // Inspector
    /// Debounced request to select an element
    InspectorOpen(EditableElementRef),
    /// Prompt mode "Apply"; not connected to any backend
    InspectorPromptApply { element_id: String, prompt: String },
    ElementSelect(Option<EditableElementRef>),

    // Style store
    StyleUpdate {
        element_id: String,
        property: StyleProperty,
        value: StyleValue,
    },
    StyleRemove { element_id: String },

    // UI
    UiFocusNext,
    UiFocusPrev,
    UiFocusSet(usize),
    UiToggleHelp,
    UiTerminalResize(u16, u16),

    // Global
    Tick,
    Quit,
}

impl brandbook_core::Action for Action {
    fn name(&self) -> &'static str {
        match self {
            Action::TabSelect(_) => "TabSelect",
            Action::TabNext => "TabNext",
            Action::TabPrev => "TabPrev",
            Action::AnimationToggle => "AnimationToggle",
            Action::SearchStart => "SearchStart",
            Action::SearchQuerySet(_) => "SearchQuerySet",
            Action::SearchEnd => "SearchEnd",
            Action::ClipboardCopy { .. } => "ClipboardCopy",
            Action::ClipboardDidCopy(_) => "ClipboardDidCopy",
            Action::ClipboardDidError(_) => "ClipboardDidError",
            Action::CopiedColorSet(_) => "CopiedColorSet",
            Action::InspectorOpen(_) => "InspectorOpen",
            Action::InspectorPromptApply { .. } => "InspectorPromptApply",
            Action::ElementSelect(_) => "ElementSelect",
            Action::StyleUpdate { .. } => "StyleUpdate",
            Action::StyleRemove { .. } => "StyleRemove",
            Action::UiFocusNext => "UiFocusNext",
            Action::UiFocusPrev => "UiFocusPrev",
            Action::UiFocusSet(_) => "UiFocusSet",
            Action::UiToggleHelp => "UiToggleHelp",
            Action::UiTerminalResize(..) => "UiTerminalResize",
            Action::Tick => "Tick",
            Action::Quit => "Quit",
        }
    }
}
