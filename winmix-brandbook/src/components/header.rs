use brandbook_core::{Component, EventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::action::Action;
use crate::components::styled::{LIME, inline_style};
use crate::inspector::ElementInspector;
use crate::state::BrandBookState;
use crate::tokens::demo_element;

pub struct HeaderProps<'a> {
    pub state: &'a BrandBookState,
}

/// Title, subtitle, the demo element and the inspector toggle
#[derive(Default)]
pub struct Header {
    demo_area: Rect,
    toggle_area: Rect,
}

impl Component<Action> for Header {
    type Props<'a> = HeaderProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let inspector = ElementInspector::new(props.state);
        if event.is_left_click_in(self.toggle_area) {
            return Some(if inspector.inspector_open() {
                inspector.close_inspector()
            } else {
                inspector.open_inspector(demo_element())
            });
        }
        if event.is_left_click_in(self.demo_area) {
            return inspector.handle_element_click(event.modifiers(), demo_element());
        }
        None
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let inspector = ElementInspector::new(state);
        let demo = demo_element();
        let projection = inspector.apply_custom_styles(&demo.id);
        let demo_text = projection
            .content
            .clone()
            .or_else(|| demo.content.clone())
            .unwrap_or_default();
        let demo_style = inline_style(&projection, &demo.base_classes);
        let demo_text = if demo_style.uppercase {
            demo_text.to_uppercase()
        } else {
            demo_text
        };
        let hidden = projection.opacity().is_some_and(|o| o <= 0.0);

        let toggle_text = if inspector.inspector_open() {
            " ● Inspector "
        } else {
            " ○ Inspector "
        };
        let demo_width = demo_text.chars().count() as u16 + 4;
        let [title_area, demo_area, toggle_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(demo_width),
            Constraint::Length(toggle_text.chars().count() as u16),
        ])
        .areas(Rect { height: 1, ..area });
        self.demo_area = demo_area;
        self.toggle_area = toggle_area;

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(
                    "WinMix Pro Brand Book",
                    Style::default().fg(LIME).add_modifier(Modifier::BOLD),
                ),
                Span::styled("  v1.0", Style::default().fg(Color::DarkGray)),
            ])),
            title_area,
        );

        let demo_border = if inspector.is_element_selected(&demo.id) {
            Style::default().fg(Color::Magenta)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let mut demo_spans = vec![Span::styled("[ ", demo_border)];
        if !hidden {
            demo_spans.push(Span::styled(
                demo_text,
                Style::default().fg(Color::White).patch(demo_style.style),
            ));
        }
        demo_spans.push(Span::styled(" ]", demo_border));
        frame.render_widget(Paragraph::new(Line::from(demo_spans)), demo_area);

        let toggle_style = if inspector.inspector_open() {
            Style::default().fg(Color::Black).bg(LIME)
        } else {
            Style::default().fg(Color::Gray)
        };
        frame.render_widget(Paragraph::new(Span::styled(toggle_text, toggle_style)), toggle_area);

        if area.height > 1 {
            let animation = if state.animation_playing {
                Span::styled("▶ Playing", Style::default().fg(LIME))
            } else {
                Span::styled("❚❚ Paused", Style::default().fg(Color::Yellow))
            };
            let subtitle_area = Rect {
                y: area.y + 1,
                height: 1,
                ..area
            };
            let [subtitle, status] =
                Layout::horizontal([Constraint::Min(0), Constraint::Length(10)]).areas(subtitle_area);
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "Design system for the WinMix Pro football analytics platform",
                    Style::default().fg(Color::Gray),
                )),
                subtitle,
            );
            frame.render_widget(Paragraph::new(animation), status);
        }
    }
}
