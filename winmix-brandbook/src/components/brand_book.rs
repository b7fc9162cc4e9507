//! Root component: chrome, the active tab, and the floating panels
//!
//! Events go to the topmost layer that wants them: the help overlay, then
//! the inspector (all keys, and mouse events over the panel), then the
//! search box, then the page.

use brandbook_core::{Component, EventKind, Keybindings};
use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Span,
    widgets::Paragraph,
};

use crate::action::Action;
use crate::components::color_palette::ColorPalette;
use crate::components::header::{Header, HeaderProps};
use crate::components::help_bar::{HelpBar, HelpBarProps};
use crate::components::help_overlay::{HelpOverlay, HelpOverlayProps};
use crate::components::overview::OverviewSection;
use crate::components::patterns::PatternsSection;
use crate::components::property_inspector::{PropertyInspector, PropertyInspectorProps};
use crate::components::section::{SectionProps, default_action};
use crate::components::showcase::ShowcaseSection;
use crate::components::styled::LIME;
use crate::components::tab_bar::{TabBar, TabBarProps};
use crate::components::typography::TypographySection;
use crate::inspector::ElementInspector;
use crate::keymap::{self, Command, KeyContext};
use crate::state::{BrandBookState, BrandBookTab};
use crate::tokens::{PageItem, demo_element, page_items};

pub struct BrandBookProps<'a> {
    pub state: &'a BrandBookState,
}

pub struct BrandBook {
    keybindings: Keybindings<KeyContext>,
    header: Header,
    tab_bar: TabBar,
    overview: OverviewSection,
    colors: ColorPalette,
    typography: TypographySection,
    showcase: ShowcaseSection,
    patterns: PatternsSection,
    inspector: PropertyInspector,
    help_bar: HelpBar,
    help_overlay: HelpOverlay,
    header_area: Rect,
    tabs_area: Rect,
    content_area: Rect,
}

impl BrandBook {
    pub fn new(keybindings: Keybindings<KeyContext>) -> Self {
        Self {
            keybindings,
            header: Header::default(),
            tab_bar: TabBar::default(),
            overview: OverviewSection::default(),
            colors: ColorPalette::default(),
            typography: TypographySection::default(),
            showcase: ShowcaseSection::default(),
            patterns: PatternsSection::default(),
            inspector: PropertyInspector::new(),
            help_bar: HelpBar,
            help_overlay: HelpOverlay,
            header_area: Rect::default(),
            tabs_area: Rect::default(),
            content_area: Rect::default(),
        }
    }

    pub fn keybindings(&self) -> &Keybindings<KeyContext> {
        &self.keybindings
    }

    fn section_event(&mut self, event: &EventKind, props: SectionProps<'_>) -> Vec<Action> {
        match props.state.active_tab {
            BrandBookTab::Overview => self.overview.handle_event(event, props).into_iter().collect(),
            BrandBookTab::Colors => self.colors.handle_event(event, props).into_iter().collect(),
            BrandBookTab::Typography => self.typography.handle_event(event, props).into_iter().collect(),
            BrandBookTab::Components => self.showcase.handle_event(event, props).into_iter().collect(),
            BrandBookTab::Patterns => self.patterns.handle_event(event, props).into_iter().collect(),
        }
    }

    fn page_command(&mut self, command: Command, state: &BrandBookState, items: &[PageItem]) -> Vec<Action> {
        let inspector = ElementInspector::new(state);
        let focused = items.get(state.ui.focused_item);

        match command {
            Command::Quit => vec![Action::Quit],
            Command::ToggleHelp => vec![Action::UiToggleHelp],
            Command::TabNext => vec![Action::TabNext],
            Command::TabPrev => vec![Action::TabPrev],
            Command::TabJump(tab) => vec![Action::TabSelect(tab)],
            Command::FocusNext => vec![Action::UiFocusNext],
            Command::FocusPrev => vec![Action::UiFocusPrev],
            Command::Activate => focused.and_then(default_action).into_iter().collect(),
            Command::Inspect => focused
                .map(|item| inspector.open_inspector(item.element_ref()))
                .into_iter()
                .collect(),
            Command::ResetItem => focused
                .map(|item| inspector.reset_element_styles(&item.id))
                .into_iter()
                .collect(),
            Command::SearchStart => {
                self.colors.focus_search(&state.search_query);
                vec![Action::SearchStart]
            }
            Command::AnimationToggle => vec![Action::AnimationToggle],
            Command::InspectorToggle => {
                if inspector.inspector_open() {
                    vec![inspector.close_inspector()]
                } else {
                    vec![inspector.open_inspector(demo_element())]
                }
            }
            // Search and inspector commands never resolve in the page context
            _ => Vec::new(),
        }
    }
}

impl Component<Action> for BrandBook {
    type Props<'a> = BrandBookProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let state = props.state;

        if state.ui.show_help {
            let EventKind::Key(key) = event else {
                return Vec::new();
            };
            return match keymap::resolve(&self.keybindings, *key, KeyContext::Page) {
                Some(Command::Quit) => vec![Action::Quit],
                Some(Command::ToggleHelp) => vec![Action::UiToggleHelp],
                _ if key.code == KeyCode::Esc => vec![Action::UiToggleHelp],
                _ => Vec::new(),
            };
        }

        if state.inspector_open() {
            let to_panel = match event {
                EventKind::Key(_) => true,
                _ => event.position().is_some_and(|pos| self.inspector.contains(pos)),
            };
            if to_panel {
                let props = PropertyInspectorProps {
                    state,
                    keybindings: &self.keybindings,
                };
                return self.inspector.handle_event(event, props).into_iter().collect();
            }
        }

        let items = page_items(state.active_tab, &state.search_query);
        let section_props = SectionProps {
            state,
            items: &items,
        };

        if let EventKind::Key(key) = event {
            if state.ui.search_active {
                if keymap::resolve(&self.keybindings, *key, KeyContext::Search) == Some(Command::SearchEnd) {
                    return vec![Action::SearchEnd];
                }
                return self.colors.handle_event(event, section_props).into_iter().collect();
            }
            return match keymap::resolve(&self.keybindings, *key, KeyContext::Page) {
                Some(command) => self.page_command(command, state, &items),
                None => Vec::new(),
            };
        }

        let Some(pos) = event.position() else {
            return Vec::new();
        };
        if self.header_area.contains(pos) {
            return self
                .header
                .handle_event(event, HeaderProps { state })
                .into_iter()
                .collect();
        }
        if self.tabs_area.contains(pos) {
            return self
                .tab_bar
                .handle_event(event, TabBarProps { active: state.active_tab })
                .into_iter()
                .collect();
        }
        if self.content_area.contains(pos) {
            if let EventKind::Scroll { delta, .. } = event {
                return vec![if *delta > 0 {
                    Action::UiFocusNext
                } else {
                    Action::UiFocusPrev
                }];
            }
            return self.section_event(event, section_props);
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let [header, tabs, _, content, status, help] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);
        self.header_area = header;
        self.tabs_area = tabs;
        self.content_area = content;

        self.header.render(frame, header, HeaderProps { state });
        self.tab_bar.render(frame, tabs, TabBarProps { active: state.active_tab });

        let items = page_items(state.active_tab, &state.search_query);
        let section_props = SectionProps {
            state,
            items: &items,
        };
        match state.active_tab {
            BrandBookTab::Overview => self.overview.render(frame, content, section_props),
            BrandBookTab::Colors => self.colors.render(frame, content, section_props),
            BrandBookTab::Typography => self.typography.render(frame, content, section_props),
            BrandBookTab::Components => self.showcase.render(frame, content, section_props),
            BrandBookTab::Patterns => self.patterns.render(frame, content, section_props),
        }

        if let Some(message) = &state.ui.status {
            let color = if message.is_error { Color::Red } else { LIME };
            frame.render_widget(
                Paragraph::new(Span::styled(message.text.as_str(), Style::default().fg(color))),
                status,
            );
        }

        self.help_bar.render(
            frame,
            help,
            HelpBarProps {
                state,
                keybindings: &self.keybindings,
            },
        );

        if state.inspector_open() {
            let panel_area = Rect {
                height: area.height.saturating_sub(1),
                ..area
            };
            self.inspector.render(
                frame,
                panel_area,
                PropertyInspectorProps {
                    state,
                    keybindings: &self.keybindings,
                },
            );
        }

        if state.ui.show_help {
            self.help_overlay.render(
                frame,
                area,
                HelpOverlayProps {
                    keybindings: &self.keybindings,
                },
            );
        }
    }
}
