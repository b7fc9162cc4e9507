use brandbook_core::{Component, EventKind};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
};

use crate::action::Action;
use crate::components::section::{PageBlock, SectionProps, SectionView};
use crate::tokens::{FEATURES, PRINCIPLES};

const INTRO: &str = "WinMix Pro combines glassmorphism, neon accents and dense data \
                     visualization into a dark analytics interface.";

/// Design principles and feature highlights
#[derive(Default)]
pub struct OverviewSection {
    view: SectionView,
}

impl Component<Action> for OverviewSection {
    type Props<'a> = SectionProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        self.view.handle_event(event, props)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let principles = PRINCIPLES.len();
        let blocks = [
            PageBlock::Text(vec![Line::from(Span::styled(
                INTRO,
                Style::default().fg(Color::Gray),
            ))]),
            PageBlock::Heading("Design Principles"),
            PageBlock::Cards {
                range: 0..principles,
                columns: 3,
            },
            PageBlock::Heading("Features"),
            PageBlock::Cards {
                range: principles..principles + FEATURES.len(),
                columns: 4,
            },
        ];
        self.view.render(frame, area, &blocks, props);
    }
}
