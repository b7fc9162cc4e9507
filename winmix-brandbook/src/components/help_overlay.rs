use brandbook_components::{OverlayStyle, centered_rect, render_overlay};
use brandbook_core::{Component, Keybindings, format_key_for_display};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::action::Action;
use crate::components::styled::LIME;
use crate::keymap::{Command, KeyContext};

const SECTIONS: &[(&str, KeyContext, &[(Command, &str)])] = &[
    (
        "Page",
        KeyContext::Page,
        &[
            (Command::TabNext, "next tab"),
            (Command::TabPrev, "previous tab"),
            (Command::FocusNext, "next item"),
            (Command::FocusPrev, "previous item"),
            (Command::Activate, "copy value"),
            (Command::Inspect, "inspect item"),
            (Command::ResetItem, "reset item styles"),
            (Command::InspectorToggle, "toggle inspector"),
            (Command::SearchStart, "search colors"),
            (Command::AnimationToggle, "play/pause animations"),
            (Command::Quit, "quit"),
        ],
    ),
    (
        "Inspector",
        KeyContext::Inspector,
        &[
            (Command::ControlNext, "next field"),
            (Command::ControlPrev, "previous field"),
            (Command::ModeEdit, "edit mode"),
            (Command::ModePrompt, "prompt mode"),
            (Command::ModeCode, "code mode"),
            (Command::ModeCycle, "cycle modes"),
            (Command::Apply, "apply"),
            (Command::ResetClasses, "reset classes (code)"),
            (Command::InspectorClose, "close"),
        ],
    ),
];

pub struct HelpOverlayProps<'a> {
    pub keybindings: &'a Keybindings<KeyContext>,
}

/// Every bound command, by context
#[derive(Default)]
pub struct HelpOverlay;

impl HelpOverlay {
    fn lines(keybindings: &Keybindings<KeyContext>) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for (title, context, commands) in SECTIONS {
            lines.push(Line::from(Span::styled(
                *title,
                Style::default().fg(LIME).add_modifier(Modifier::BOLD),
            )));
            for (command, desc) in *commands {
                let Some(key) = keybindings.get_first_keybinding(command.name(), *context) else {
                    continue;
                };
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {:<12}", format_key_for_display(&key)),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::raw(*desc),
                ]));
            }
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            "Shift+click any item to inspect it",
            Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
        )));
        lines
    }
}

impl Component<Action> for HelpOverlay {
    type Props<'a> = HelpOverlayProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let lines = Self::lines(props.keybindings);
        let overlay = centered_rect(48, lines.len() as u16 + 2, area);
        render_overlay(frame, overlay, &OverlayStyle::default());

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(LIME))
            .title(" Keys ");
        frame.render_widget(Paragraph::new(lines).block(block), overlay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::default_keybindings;
    use brandbook_core::testing::RenderHarness;

    #[test]
    fn test_lists_bound_commands() {
        let keybindings = default_keybindings();
        let mut overlay = HelpOverlay;
        let mut render = RenderHarness::new(80, 40);
        let output = render.render_to_string_plain(|frame| {
            overlay.render(
                frame,
                frame.area(),
                HelpOverlayProps {
                    keybindings: &keybindings,
                },
            );
        });

        assert!(output.contains("Keys"));
        assert!(output.contains("inspect item"));
        assert!(output.contains("cycle modes"));
        assert!(output.contains("Shift+click"));
    }
}
