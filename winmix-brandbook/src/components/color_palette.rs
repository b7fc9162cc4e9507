use brandbook_components::{TextInput, TextInputProps};
use brandbook_core::{Component, EventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::action::Action;
use crate::components::section::{PageBlock, SectionProps, SectionView};
use crate::tokens::{GUIDELINES, filtered_color_groups};

/// Swatches by group with a search box, then usage guidelines
#[derive(Default)]
pub struct ColorPalette {
    view: SectionView,
    search: TextInput,
}

impl ColorPalette {
    /// Put the search cursor after the current query
    pub fn focus_search(&mut self, query: &str) {
        self.search.move_to_end(query);
    }

    fn search_props<'a>(&self, props: &SectionProps<'a>) -> TextInputProps<'a, Action> {
        TextInputProps {
            value: &props.state.search_query,
            placeholder: "Search colors... (/)",
            title: Some("Search"),
            is_focused: props.state.ui.search_active,
            show_border: true,
            bg_color: None,
            on_change: Action::SearchQuerySet,
            on_submit: |_| Action::SearchEnd,
        }
    }
}

impl Component<Action> for ColorPalette {
    type Props<'a> = SectionProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if props.state.ui.search_active {
            if let EventKind::Key(_) = event {
                let search_props = self.search_props(&props);
                return Component::<Action>::handle_event(&mut self.search, event, search_props)
                    .into_iter()
                    .collect::<Vec<_>>();
            }
        }
        self.view.handle_event(event, props)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let [search_area, body] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
        let search_props = self.search_props(&props);
        let search_area = search_area.intersection(Rect {
            width: 48,
            ..search_area
        });
        Component::<Action>::render(&mut self.search, frame, search_area, search_props);

        let groups = filtered_color_groups(&props.state.search_query);
        let mut blocks = Vec::new();
        let mut start = 0;
        if groups.is_empty() {
            blocks.push(PageBlock::Text(vec![Line::from(Span::styled(
                "No colors match",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ))]));
        }
        for (title, colors) in &groups {
            blocks.push(PageBlock::Heading(*title));
            blocks.push(PageBlock::Cards {
                range: start..start + colors.len(),
                columns: 3,
            });
            start += colors.len();
        }
        blocks.push(PageBlock::Heading("Usage Guidelines"));
        blocks.push(PageBlock::Cards {
            range: start..start + GUIDELINES.len(),
            columns: 1,
        });

        self.view.render(frame, body, &blocks, props);
    }
}
