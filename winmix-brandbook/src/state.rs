use std::collections::HashMap;

use crate::element::EditableElementRef;
use crate::style::CustomStyleRecord;

/// Status messages disappear after this many ticks (~3s at 100ms)
pub const STATUS_TTL_TICKS: u64 = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum BrandBookTab {
    #[default]
    Overview,
    Colors,
    Typography,
    Components,
    Patterns,
}

impl BrandBookTab {
    pub fn label(&self) -> &'static str {
        match self {
            BrandBookTab::Overview => "Overview",
            BrandBookTab::Colors => "Colors",
            BrandBookTab::Typography => "Typography",
            BrandBookTab::Components => "Components",
            BrandBookTab::Patterns => "Patterns",
        }
    }

    pub fn all() -> &'static [BrandBookTab] {
        &[
            BrandBookTab::Overview,
            BrandBookTab::Colors,
            BrandBookTab::Typography,
            BrandBookTab::Components,
            BrandBookTab::Patterns,
        ]
    }

    pub fn index(self) -> usize {
        Self::all().iter().position(|t| *t == self).unwrap_or(0)
    }

    /// Tab at `index`, for the `1`-`5` shortcuts
    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }

    pub fn next(self) -> Self {
        match self {
            BrandBookTab::Overview => BrandBookTab::Colors,
            BrandBookTab::Colors => BrandBookTab::Typography,
            BrandBookTab::Typography => BrandBookTab::Components,
            BrandBookTab::Components => BrandBookTab::Patterns,
            BrandBookTab::Patterns => BrandBookTab::Overview,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            BrandBookTab::Overview => BrandBookTab::Patterns,
            BrandBookTab::Colors => BrandBookTab::Overview,
            BrandBookTab::Typography => BrandBookTab::Colors,
            BrandBookTab::Components => BrandBookTab::Typography,
            BrandBookTab::Patterns => BrandBookTab::Components,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
    pub tick_shown: u64,
}

/// Page chrome that is not part of the style store proper
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Index into the active tab's editable items
    pub focused_item: usize,
    pub search_active: bool,
    pub show_help: bool,
    pub status: Option<StatusMessage>,
    pub tick_count: u64,
    pub terminal_size: (u16, u16),
}

/// The brand book's store state
///
/// There is one instance per session, owned by the runtime's store and
/// changed only by [`reducer`](crate::reducer::reducer).
#[derive(Clone, Debug)]
pub struct BrandBookState {
    pub active_tab: BrandBookTab,
    pub selected_element: Option<EditableElementRef>,
    /// Edits per element id; absent means the element's default look
    pub custom_styles: HashMap<String, CustomStyleRecord>,
    pub search_query: String,
    /// Name of the swatch whose value was just copied
    pub copied_color: Option<String>,
    pub animation_playing: bool,
    pub ui: UiState,
}

impl Default for BrandBookState {
    fn default() -> Self {
        Self {
            active_tab: BrandBookTab::default(),
            selected_element: None,
            custom_styles: HashMap::new(),
            search_query: String::new(),
            copied_color: None,
            animation_playing: true,
            ui: UiState::default(),
        }
    }
}

impl BrandBookState {
    /// Derived from the selection; never stored separately
    pub fn inspector_open(&self) -> bool {
        self.selected_element.is_some()
    }

    pub fn style_record(&self, element_id: &str) -> Option<&CustomStyleRecord> {
        self.custom_styles.get(element_id)
    }

    pub fn set_status(&mut self, text: impl Into<String>, is_error: bool) {
        self.ui.status = Some(StatusMessage {
            text: text.into(),
            is_error,
            tick_shown: self.ui.tick_count,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementKind;

    #[test]
    fn test_tab_cycle_wraps() {
        assert_eq!(BrandBookTab::Patterns.next(), BrandBookTab::Overview);
        assert_eq!(BrandBookTab::Overview.prev(), BrandBookTab::Patterns);
        for tab in BrandBookTab::all() {
            assert_eq!(tab.next().prev(), *tab);
            assert_eq!(BrandBookTab::from_index(tab.index()), Some(*tab));
        }
        assert_eq!(BrandBookTab::from_index(5), None);
    }

    #[test]
    fn test_inspector_open_follows_selection() {
        let mut state = BrandBookState::default();
        assert!(!state.inspector_open());
        assert!(state.animation_playing);

        state.selected_element = Some(EditableElementRef::new(
            ElementKind::Component,
            "showcase-buttons",
            "",
        ));
        assert!(state.inspector_open());
    }
}
