//! Scrolling layout shared by the tab sections
//!
//! A section is a column of [`PageBlock`]s laid out on a virtual canvas as
//! wide as the viewport. The view scrolls just enough to keep the focused
//! card visible and remembers where each card landed for mouse hit-testing.

use std::ops::Range;

use brandbook_core::EventKind;
use crossterm::event::{MouseButton, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::action::Action;
use crate::components::styled::{CardProps, LIME, card_height, render_card, translate_values};
use crate::inspector::ElementInspector;
use crate::state::BrandBookState;
use crate::tokens::{DefaultAction, PageItem};

pub enum PageBlock<'a> {
    /// Section heading with a blank line below
    Heading(&'a str),
    /// Static lines; not focusable
    Text(Vec<Line<'a>>),
    /// `items[range]` as a grid of cards
    Cards { range: Range<usize>, columns: u16 },
}

/// Props for a section: the state and the active tab's items
#[derive(Clone, Copy)]
pub struct SectionProps<'a> {
    pub state: &'a BrandBookState,
    pub items: &'a [PageItem],
}

pub fn heading_line(text: &str) -> Line<'_> {
    Line::from(Span::styled(
        text,
        Style::default().fg(LIME).add_modifier(Modifier::BOLD),
    ))
}

/// Dim `key  value` rows for token tables
pub fn token_rows<'a>(rows: &'a [(&'a str, &'a str)]) -> Vec<Line<'a>> {
    rows.iter()
        .map(|(name, value)| {
            Line::from(vec![
                Span::styled(format!("  {:<8}", name), Style::default().fg(Color::Cyan)),
                Span::styled(*value, Style::default().fg(Color::Gray)),
            ])
        })
        .collect()
}

/// The default action of a plain click or Enter on `item`
pub fn default_action(item: &PageItem) -> Option<Action> {
    match item.action {
        DefaultAction::Copy { text, label } => Some(Action::ClipboardCopy {
            text: text.to_string(),
            label: label.to_string(),
        }),
        DefaultAction::FocusOnly => None,
    }
}

#[derive(Default)]
pub struct SectionView {
    scroll: u16,
    /// Screen area and item index of every card drawn last frame
    hits: Vec<(Rect, usize)>,
}

struct Placed {
    /// Virtual canvas rows
    top: u16,
    height: u16,
    kind: PlacedKind,
}

enum PlacedKind {
    Lines(usize),
    Card { index: usize, x: u16, width: u16 },
}

impl SectionView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Item under `pos` in the last frame
    pub fn hit(&self, pos: Position) -> Option<usize> {
        self.hits
            .iter()
            .find(|(area, _)| area.contains(pos))
            .map(|(_, index)| *index)
    }

    /// Card clicks: Shift-click inspects, a plain click focuses and runs
    /// the default action
    pub fn handle_event(&self, event: &EventKind, props: SectionProps<'_>) -> Vec<Action> {
        let EventKind::Mouse(mouse) = event else {
            return Vec::new();
        };
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return Vec::new();
        }
        let Some((index, item)) = self
            .hit(Position::new(mouse.column, mouse.row))
            .and_then(|i| props.items.get(i).map(|item| (i, item)))
        else {
            return Vec::new();
        };

        let inspector = ElementInspector::new(props.state);
        let mut actions = vec![Action::UiFocusSet(index)];
        match inspector.handle_element_click(mouse.modifiers, item.element_ref()) {
            Some(open) => actions.push(open),
            None => actions.extend(default_action(item)),
        }
        actions
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        blocks: &[PageBlock<'_>],
        props: SectionProps<'_>,
    ) {
        self.hits.clear();
        if area.width == 0 || area.height == 0 {
            return;
        }

        let placed = layout(blocks, props.items, area.width);
        self.follow_focus(&placed, props.state.ui.focused_item, area.height);

        let inspector = ElementInspector::new(props.state);
        let view_top = self.scroll;
        let view_bottom = self.scroll + area.height;

        for block in &placed {
            match block.kind {
                PlacedKind::Lines(block_index) => {
                    let lines: Vec<Line<'_>> = match &blocks[block_index] {
                        PageBlock::Heading(text) => vec![heading_line(text)],
                        PageBlock::Text(lines) => lines.clone(),
                        PageBlock::Cards { .. } => Vec::new(),
                    };
                    for (offset, line) in lines.into_iter().enumerate() {
                        let row = block.top + offset as u16;
                        if row >= view_top && row < view_bottom {
                            let y = area.y + row - view_top;
                            frame.render_widget(Paragraph::new(line), Rect::new(area.x, y, area.width, 1));
                        }
                    }
                }
                PlacedKind::Card { index, x, width } => {
                    if block.top < view_top || block.top + block.height > view_bottom {
                        continue;
                    }
                    let Some(item) = props.items.get(index) else {
                        continue;
                    };
                    let cell = Rect::new(area.x + x, area.y + block.top - view_top, width, block.height);
                    let record = inspector.get_element_style(&item.id);
                    let projection = record.projection();
                    render_card(
                        frame,
                        cell,
                        CardProps {
                            item,
                            projection: &projection,
                            translate: translate_values(&record),
                            has_custom_styles: record.has_custom_styles(),
                            is_focused: props.state.ui.focused_item == index,
                            is_selected: inspector.is_element_selected(&item.id),
                            is_copied: matches!(
                                item.action,
                                DefaultAction::Copy { label, .. }
                                    if props.state.copied_color.as_deref() == Some(label)
                            ),
                        },
                    );
                    self.hits.push((cell, index));
                }
            }
        }
    }

    /// Scroll the least amount that shows the focused card whole
    fn follow_focus(&mut self, placed: &[Placed], focused: usize, view_height: u16) {
        let total = placed.iter().map(|p| p.top + p.height).max().unwrap_or(0);
        let focused_card = placed.iter().find(|p| matches!(p.kind, PlacedKind::Card { index, .. } if index == focused));

        match focused_card {
            Some(card) if card.top < self.scroll => self.scroll = card.top,
            Some(card) if card.top + card.height > self.scroll + view_height => {
                self.scroll = (card.top + card.height).saturating_sub(view_height);
            }
            None => self.scroll = 0,
            _ => {}
        }
        self.scroll = self.scroll.min(total.saturating_sub(view_height));
    }
}

fn layout(blocks: &[PageBlock<'_>], items: &[PageItem], width: u16) -> Vec<Placed> {
    let mut placed = Vec::new();
    let mut top = 0u16;

    for (block_index, block) in blocks.iter().enumerate() {
        match block {
            PageBlock::Heading(_) => {
                placed.push(Placed {
                    top,
                    height: 1,
                    kind: PlacedKind::Lines(block_index),
                });
                top += 2;
            }
            PageBlock::Text(lines) => {
                let height = lines.len() as u16;
                placed.push(Placed {
                    top,
                    height,
                    kind: PlacedKind::Lines(block_index),
                });
                top += height + 1;
            }
            PageBlock::Cards { range, columns } => {
                let cards: Vec<usize> = range.clone().filter(|i| *i < items.len()).collect();
                if cards.is_empty() {
                    continue;
                }
                let columns = (*columns).clamp(1, (width / 12).max(1));
                let col_width = width / columns;
                for row in cards.chunks(columns as usize) {
                    let height = row.iter().map(|i| card_height(&items[*i])).max().unwrap_or(3);
                    for (col, index) in row.iter().enumerate() {
                        let x = col as u16 * col_width;
                        let card_width = if col as u16 == columns - 1 {
                            width - x
                        } else {
                            col_width.saturating_sub(1)
                        };
                        placed.push(Placed {
                            top,
                            height,
                            kind: PlacedKind::Card {
                                index: *index,
                                x,
                                width: card_width,
                            },
                        });
                    }
                    top += height;
                }
                top += 1;
            }
        }
    }
    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::BrandBookTab;
    use crate::tokens::page_items;
    use brandbook_core::testing::{RenderHarness, click, shift_click};

    fn colors_state() -> BrandBookState {
        BrandBookState {
            active_tab: BrandBookTab::Colors,
            ..Default::default()
        }
    }

    fn render(view: &mut SectionView, state: &BrandBookState, items: &[PageItem], height: u16) -> String {
        let blocks = [
            PageBlock::Heading("Colors"),
            PageBlock::Cards {
                range: 0..items.len(),
                columns: 3,
            },
        ];
        let mut harness = RenderHarness::new(90, height);
        harness.render_to_string_plain(|frame| {
            view.render(frame, frame.area(), &blocks, SectionProps { state, items });
        })
    }

    #[test]
    fn test_plain_click_focuses_and_copies() {
        let state = colors_state();
        let items = page_items(BrandBookTab::Colors, "");
        let mut view = SectionView::new();
        render(&mut view, &state, &items, 40);

        let (area, index) = view.hits[1];
        let actions = view.handle_event(
            &EventKind::Mouse(click(area.x + 2, area.y + 1)),
            SectionProps { state: &state, items: &items },
        );
        assert_eq!(
            actions,
            vec![
                Action::UiFocusSet(index),
                Action::ClipboardCopy {
                    text: "#CCFF00".into(),
                    label: "Primary Neon".into()
                }
            ]
        );
    }

    #[test]
    fn test_shift_click_opens_inspector_instead() {
        let state = colors_state();
        let items = page_items(BrandBookTab::Colors, "");
        let mut view = SectionView::new();
        render(&mut view, &state, &items, 40);

        let (area, index) = view.hits[0];
        let actions = view.handle_event(
            &EventKind::Mouse(shift_click(area.x + 2, area.y + 1)),
            SectionProps { state: &state, items: &items },
        );
        assert_eq!(
            actions,
            vec![Action::UiFocusSet(index), Action::InspectorOpen(items[0].element_ref())]
        );
    }

    #[test]
    fn test_scrolls_to_keep_focus_visible() {
        let mut state = colors_state();
        let items = page_items(BrandBookTab::Colors, "");
        let last = items.len() - 1;
        state.ui.focused_item = last;

        let mut view = SectionView::new();
        let output = render(&mut view, &state, &items, 12);

        assert!(view.hits.iter().any(|(_, i)| *i == last));
        assert!(output.contains(&items[last].title));
        assert!(!output.contains("Colors"));
    }

    #[test]
    fn test_click_outside_cards_is_ignored() {
        let state = colors_state();
        let items = page_items(BrandBookTab::Colors, "");
        let mut view = SectionView::new();
        render(&mut view, &state, &items, 40);

        let actions = view.handle_event(
            &EventKind::Mouse(click(0, 0)),
            SectionProps { state: &state, items: &items },
        );
        assert!(actions.is_empty());
    }
}
