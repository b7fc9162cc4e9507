//! Bounded numeric slider rendered as a gauge

use brandbook_core::{Component, EventKind};
use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
    Frame,
};

const LABEL_WIDTH: u16 = 13;
const VALUE_WIDTH: u16 = 8;
const COARSE_STEP: i32 = 10;

/// Props for Slider component
pub struct SliderProps<'a, A> {
    pub label: &'a str,
    pub value: i32,
    pub min: i32,
    pub max: i32,
    /// Appended to the value in the label ("px", "°", "%", or "")
    pub unit: &'a str,
    /// Replaces the numeric label when set (e.g. "Default")
    pub value_label: Option<&'a str>,
    pub is_focused: bool,
    /// Called with the new value; only when it actually changes
    pub on_change: fn(i32) -> A,
}

/// One-line slider: label, gauge, value
///
/// Keys (when focused): ←/→ step 1, Shift+←/→ and PgUp/PgDn step 10,
/// Home/End jump to the bounds. A left click on the gauge sets the value
/// proportionally to the click column, focused or not.
#[derive(Default)]
pub struct Slider {
    /// Gauge area from the last render, for mouse hit-testing
    gauge_area: Rect,
}

impl Slider {
    pub fn new() -> Self {
        Self::default()
    }

    fn value_at_column(&self, column: u16, min: i32, max: i32) -> i32 {
        let area = self.gauge_area;
        if area.width <= 1 {
            return min;
        }
        let offset = i64::from(column.saturating_sub(area.x).min(area.width - 1));
        let span = i64::from(max) - i64::from(min);
        let steps = i64::from(area.width - 1);
        let value = i64::from(min) + (offset * span + steps / 2) / steps;
        value.clamp(i64::from(min), i64::from(max)) as i32
    }
}

/// Fraction of the range covered by `value`, always within [0, 1]
fn ratio(value: i32, min: i32, max: i32) -> f64 {
    if max <= min {
        return 0.0;
    }
    ((f64::from(value) - f64::from(min)) / (f64::from(max) - f64::from(min))).clamp(0.0, 1.0)
}

impl<A> Component<A> for Slider {
    type Props<'a> = SliderProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        if props.max < props.min {
            return None;
        }

        let target = match event {
            EventKind::Key(key) if props.is_focused => {
                let step = if key.modifiers.contains(KeyModifiers::SHIFT) {
                    COARSE_STEP
                } else {
                    1
                };
                match key.code {
                    KeyCode::Left => Some(props.value.saturating_sub(step)),
                    KeyCode::Right => Some(props.value.saturating_add(step)),
                    KeyCode::PageDown => Some(props.value.saturating_sub(COARSE_STEP)),
                    KeyCode::PageUp => Some(props.value.saturating_add(COARSE_STEP)),
                    KeyCode::Home => Some(props.min),
                    KeyCode::End => Some(props.max),
                    _ => None,
                }
            }
            EventKind::Mouse(mouse)
                if matches!(
                    mouse.kind,
                    MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left)
                ) && self.gauge_area.contains(Position::new(mouse.column, mouse.row)) =>
            {
                Some(self.value_at_column(mouse.column, props.min, props.max))
            }
            _ => None,
        };

        target
            .map(|v| v.clamp(props.min, props.max))
            .filter(|v| *v != props.value)
            .map(props.on_change)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let [label_area, gauge_area, value_area] = Layout::horizontal([
            Constraint::Length(LABEL_WIDTH),
            Constraint::Min(4),
            Constraint::Length(VALUE_WIDTH),
        ])
        .areas(area);
        self.gauge_area = Rect {
            height: gauge_area.height.min(1),
            ..gauge_area
        };

        let (marker, label_style) = if props.is_focused {
            (
                "▸ ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("  ", Style::default().fg(Color::Gray))
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(marker, label_style),
                Span::styled(props.label, label_style),
            ])),
            label_area,
        );

        let gauge_style = if props.is_focused {
            Style::default().fg(Color::Yellow).bg(Color::Rgb(30, 30, 30))
        } else {
            Style::default().fg(Color::Gray).bg(Color::Rgb(30, 30, 30))
        };
        frame.render_widget(
            Gauge::default()
                .ratio(ratio(props.value, props.min, props.max))
                .label("")
                .gauge_style(gauge_style),
            self.gauge_area,
        );

        let value_text = match props.value_label {
            Some(label) => label.to_string(),
            None => format!("{}{}", props.value, props.unit),
        };
        frame.render_widget(
            Paragraph::new(value_text)
                .alignment(Alignment::Right)
                .style(label_style),
            value_area,
        );
    }
}
