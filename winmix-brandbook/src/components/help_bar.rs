use brandbook_core::{Component, Keybindings, format_key_for_display};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::action::Action;
use crate::keymap::{Command, KeyContext};
use crate::state::{BrandBookState, BrandBookTab};

pub struct HelpBarProps<'a> {
    pub state: &'a BrandBookState,
    pub keybindings: &'a Keybindings<KeyContext>,
}

#[derive(Default)]
pub struct HelpBar;

/// `key:desc | key:desc`, keys looked up in `context`
///
/// Commands with no binding are left out.
pub fn hint_line(
    keybindings: &Keybindings<KeyContext>,
    context: KeyContext,
    hints: &[(Command, &'static str)],
) -> Line<'static> {
    let key_style = Style::default().fg(Color::Yellow);
    let sep_style = Style::default().fg(Color::DarkGray);

    let mut spans = Vec::new();
    for (command, desc) in hints {
        let Some(key) = keybindings.get_first_keybinding(command.name(), context) else {
            continue;
        };
        spans.push(Span::styled(format_key_for_display(&key), key_style));
        spans.push(Span::raw(":"));
        spans.push(Span::raw(*desc));
        spans.push(Span::styled(" | ", sep_style));
    }
    spans.pop();
    Line::from(spans)
}

impl Component<Action> for HelpBar {
    type Props<'a> = HelpBarProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let line = if state.ui.show_help {
            hint_line(props.keybindings, KeyContext::Page, &[(Command::ToggleHelp, "close help")])
        } else if state.inspector_open() {
            hint_line(
                props.keybindings,
                KeyContext::Inspector,
                &[
                    (Command::ControlNext, "next field"),
                    (Command::ModeCycle, "mode"),
                    (Command::Apply, "apply"),
                    (Command::InspectorClose, "close"),
                    (Command::Quit, "quit"),
                ],
            )
        } else if state.ui.search_active {
            hint_line(
                props.keybindings,
                KeyContext::Search,
                &[(Command::SearchEnd, "done"), (Command::Quit, "quit")],
            )
        } else {
            let mut hints = vec![
                (Command::FocusNext, "next"),
                (Command::Activate, "copy"),
                (Command::Inspect, "inspect"),
                (Command::TabNext, "tab"),
            ];
            match state.active_tab {
                BrandBookTab::Colors => hints.push((Command::SearchStart, "search")),
                BrandBookTab::Patterns => hints.push((Command::AnimationToggle, "play/pause")),
                _ => {}
            }
            hints.extend([(Command::ToggleHelp, "help"), (Command::Quit, "quit")]);
            hint_line(props.keybindings, KeyContext::Page, &hints)
        };

        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{EditableElementRef, ElementKind};
    use crate::keymap::default_keybindings;
    use brandbook_core::testing::RenderHarness;

    fn render(state: &BrandBookState) -> String {
        let keybindings = default_keybindings();
        let mut bar = HelpBar;
        let mut render = RenderHarness::new(120, 1);
        render.render_to_string_plain(|frame| {
            bar.render(
                frame,
                frame.area(),
                HelpBarProps {
                    state,
                    keybindings: &keybindings,
                },
            );
        })
    }

    #[test]
    fn test_page_hints_follow_tab() {
        let mut state = BrandBookState::default();
        let output = render(&state);
        assert!(output.contains(":inspect"));
        assert!(!output.contains(":search"));

        state.active_tab = BrandBookTab::Colors;
        assert!(render(&state).contains(":search"));

        state.active_tab = BrandBookTab::Patterns;
        assert!(render(&state).contains(":play/pause"));
    }

    #[test]
    fn test_inspector_hints() {
        let state = BrandBookState {
            selected_element: Some(EditableElementRef::new(ElementKind::Component, "card-1", "")),
            ..Default::default()
        };
        let output = render(&state);
        assert!(output.contains("Esc:close"));
        assert!(output.contains("^T:mode"));
    }

    #[test]
    fn test_unbound_commands_are_skipped() {
        let keybindings = Keybindings::<KeyContext>::new();
        let line = hint_line(&keybindings, KeyContext::Page, &[(Command::Quit, "quit")]);
        assert!(line.spans.is_empty());
    }
}
