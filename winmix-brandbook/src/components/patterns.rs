use brandbook_core::{Component, EventKind};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
};

use crate::action::Action;
use crate::components::section::{PageBlock, SectionProps, SectionView, token_rows};
use crate::components::styled::LIME;
use crate::tokens::{DURATIONS, GRID_COLUMNS, RADIUS, SHADOWS, SPACING};

const TRACK_WIDTH: u64 = 24;
/// Approximate tick length; the marker pace only needs to be relative
const TICK_MS: u64 = 100;

/// Marker column on the animation track after `tick` ticks
///
/// One pass of the track takes four times the duration.
pub fn marker_position(tick: u64, duration_ms: u64, playing: bool) -> u64 {
    if !playing || duration_ms == 0 {
        return 0;
    }
    (tick * TICK_MS * TRACK_WIDTH / (duration_ms * 4)) % TRACK_WIDTH
}

fn duration_lines(tick: u64, playing: bool) -> Vec<Line<'static>> {
    DURATIONS
        .iter()
        .map(|(name, ms)| {
            let pos = marker_position(tick, *ms, playing) as usize;
            let track: String = (0..TRACK_WIDTH as usize)
                .map(|i| if i == pos { '●' } else { '─' })
                .collect();
            Line::from(vec![
                Span::styled(format!("  {:<8}", name), Style::default().fg(Color::Cyan)),
                Span::styled(format!("{:>5}ms  ", ms), Style::default().fg(Color::Gray)),
                Span::styled(track, Style::default().fg(LIME)),
            ])
        })
        .collect()
}

/// Spacing, radius, shadows, animation timing and grid layouts
#[derive(Default)]
pub struct PatternsSection {
    view: SectionView,
}

impl Component<Action> for PatternsSection {
    type Props<'a> = SectionProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        self.view.handle_event(event, props)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let status = if state.animation_playing {
            "▶ Playing  (space to pause)"
        } else {
            "❚❚ Paused  (space to play)"
        };
        let mut animation = vec![Line::from(Span::styled(status, Style::default().fg(Color::Yellow)))];
        animation.extend(duration_lines(state.ui.tick_count, state.animation_playing));

        let blocks = [
            PageBlock::Heading("Spacing Scale"),
            PageBlock::Text(token_rows(SPACING)),
            PageBlock::Heading("Border Radius"),
            PageBlock::Text(token_rows(RADIUS)),
            PageBlock::Heading("Shadows"),
            PageBlock::Text(token_rows(SHADOWS)),
            PageBlock::Heading("Animation Durations"),
            PageBlock::Text(animation),
            PageBlock::Heading("12-Column Grid"),
            PageBlock::Cards {
                range: 0..GRID_COLUMNS,
                columns: GRID_COLUMNS as u16,
            },
            PageBlock::Heading("Stats Row"),
            PageBlock::Cards {
                range: GRID_COLUMNS..props.items.len(),
                columns: 4,
            },
        ];
        self.view.render(frame, area, &blocks, props);
    }
}
