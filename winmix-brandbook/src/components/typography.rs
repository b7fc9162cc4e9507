use brandbook_core::{Component, EventKind};
use ratatui::{Frame, layout::Rect};

use crate::action::Action;
use crate::components::section::{PageBlock, SectionProps, SectionView};
use crate::tokens::{BEST_PRACTICES, FONT_FAMILIES, TYPE_SCALE};

/// Font families, the type scale and typography practices
#[derive(Default)]
pub struct TypographySection {
    view: SectionView,
}

impl Component<Action> for TypographySection {
    type Props<'a> = SectionProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        self.view.handle_event(event, props)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let families = FONT_FAMILIES.len();
        let scale = families + TYPE_SCALE.len();
        let blocks = [
            PageBlock::Heading("Font Families"),
            PageBlock::Cards {
                range: 0..families,
                columns: 2,
            },
            PageBlock::Heading("Type Scale"),
            PageBlock::Cards {
                range: families..scale,
                columns: 1,
            },
            PageBlock::Heading("Best Practices"),
            PageBlock::Cards {
                range: scale..scale + BEST_PRACTICES.len(),
                columns: 2,
            },
        ];
        self.view.render(frame, area, &blocks, props);
    }
}
