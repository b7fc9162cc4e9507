use brandbook_core::{Component, EventKind};
use ratatui::{Frame, layout::Rect};

use crate::action::Action;
use crate::components::section::{PageBlock, SectionProps, SectionView};

/// Component showcase cards
#[derive(Default)]
pub struct ShowcaseSection {
    view: SectionView,
}

impl Component<Action> for ShowcaseSection {
    type Props<'a> = SectionProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        self.view.handle_event(event, props)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let blocks = [
            PageBlock::Heading("Component Library"),
            PageBlock::Cards {
                range: 0..props.items.len(),
                columns: 2,
            },
        ];
        self.view.render(frame, area, &blocks, props);
    }
}
