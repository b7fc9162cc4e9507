use brandbook_core::{Component, EventKind};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::action::Action;
use crate::components::styled::LIME;
use crate::state::BrandBookTab;

pub struct TabBarProps {
    pub active: BrandBookTab,
}

/// One row of tab labels; a click selects
#[derive(Default)]
pub struct TabBar {
    tab_areas: Vec<(Rect, BrandBookTab)>,
}

impl Component<Action> for TabBar {
    type Props<'a> = TabBarProps;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        self.tab_areas
            .iter()
            .find(|(area, _)| event.is_left_click_in(*area))
            .filter(|(_, tab)| *tab != props.active)
            .map(|(_, tab)| Action::TabSelect(*tab))
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.tab_areas.clear();
        let mut spans = Vec::new();
        let mut x = area.x;

        for (i, tab) in BrandBookTab::all().iter().enumerate() {
            let label = format!(" {} {} ", i + 1, tab.label());
            let width = label.chars().count() as u16;
            let style = if *tab == props.active {
                Style::default()
                    .fg(Color::Black)
                    .bg(LIME)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            self.tab_areas.push((Rect::new(x, area.y, width, 1), *tab));
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
            x = x.saturating_add(width + 1);
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandbook_core::testing::{RenderHarness, click};

    #[test]
    fn test_click_selects_tab() {
        let mut bar = TabBar::default();
        let mut render = RenderHarness::new(80, 1);
        let output = render.render_to_string_plain(|frame| {
            bar.render(frame, frame.area(), TabBarProps { active: BrandBookTab::Overview });
        });
        assert!(output.contains("1 Overview"));
        assert!(output.contains("5 Patterns"));

        let (area, tab) = bar.tab_areas[2];
        assert_eq!(tab, BrandBookTab::Typography);
        let actions: Vec<_> = bar
            .handle_event(
                &EventKind::Mouse(click(area.x + 1, area.y)),
                TabBarProps { active: BrandBookTab::Overview },
            )
            .into_iter()
            .collect();
        assert_eq!(actions, vec![Action::TabSelect(BrandBookTab::Typography)]);

        let (area, _) = bar.tab_areas[0];
        let actions: Vec<_> = bar
            .handle_event(
                &EventKind::Mouse(click(area.x + 1, area.y)),
                TabBarProps { active: BrandBookTab::Overview },
            )
            .into_iter()
            .collect();
        assert!(actions.is_empty());
    }
}
