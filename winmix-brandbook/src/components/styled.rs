//! Terminal rendering of leaf elements merged with their custom styles
//!
//! Classes and style declarations are mapped onto what a cell can show:
//! colors, bold/italic/underline, dimming for low opacity and a shifted
//! card for translations.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::element::ElementKind;
use crate::style::{CssProperty, StyleProjection, StyleValue};
use crate::tokens::{PageItem, color_by_key};
use crate::transform::{TransformProperty, leading_number};

pub const LIME: Color = Color::Rgb(0xBE, 0xF2, 0x64);
pub const CYAN: Color = Color::Rgb(0x22, 0xD3, 0xEE);
pub const PANEL_BG: Color = Color::Rgb(0x11, 0x11, 0x11);

/// `#rrggbb` (or `#rgb`) to a terminal color
pub fn parse_hex(value: &str) -> Option<Color> {
    let hex = value.trim().strip_prefix('#')?;
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some(Color::Rgb(
            channel(hex.get(0..2)?)?,
            channel(hex.get(2..4)?)?,
            channel(hex.get(4..6)?)?,
        )),
        3 => {
            let mut rgb = hex.chars().map(|c| u8::from_str_radix(&c.to_string(), 16).ok().map(|v| v * 17));
            Some(Color::Rgb(rgb.next()??, rgb.next()??, rgb.next()??))
        }
        _ => None,
    }
}

/// Color named by the part of a class after `text-` or `bg-`
///
/// Accepts arbitrary values (`[#BEF264]`) and palette keys (`primary-neon`).
/// Mostly transparent colors (`/20` alpha below 50) are left out.
fn class_color(rest: &str) -> Option<Color> {
    let rest = match rest.split_once('/') {
        Some((color, alpha)) if alpha.parse::<u8>().is_ok_and(|a| a >= 50) => color,
        Some(_) => return None,
        None => rest,
    };
    if let Some(arbitrary) = rest.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
        return parse_hex(arbitrary);
    }
    match rest {
        "white" => Some(Color::White),
        "black" => Some(Color::Black),
        _ => color_by_key(rest).and_then(parse_hex),
    }
}

/// What a class list looks like in a terminal
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClassStyle {
    pub style: Style,
    pub uppercase: bool,
}

pub fn class_style(classes: &str) -> ClassStyle {
    let mut out = ClassStyle::default();
    for class in classes.split_whitespace() {
        // Responsive/state variants (`sm:p-6`, `hover:bg-white`) apply unconditionally
        let class = class.rsplit(':').next().unwrap_or(class);
        match class {
            "font-semibold" | "font-bold" | "font-extrabold" | "font-black" => {
                out.style = out.style.add_modifier(Modifier::BOLD);
            }
            "italic" => out.style = out.style.add_modifier(Modifier::ITALIC),
            "underline" => out.style = out.style.add_modifier(Modifier::UNDERLINED),
            "line-through" => out.style = out.style.add_modifier(Modifier::CROSSED_OUT),
            "uppercase" => out.uppercase = true,
            _ => {
                if let Some(color) = class.strip_prefix("text-").and_then(class_color) {
                    out.style = out.style.fg(color);
                } else if let Some(color) = class.strip_prefix("bg-").and_then(class_color) {
                    out.style = out.style.bg(color);
                }
            }
        }
    }
    out
}

/// Declarations layered over the class style
fn declaration_style(projection: &StyleProjection, mut style: Style) -> Style {
    let text = |p: CssProperty| projection.style.get(p).and_then(StyleValue::as_text);
    if let Some(color) = text(CssProperty::Color).and_then(parse_hex) {
        style = style.fg(color);
    }
    if let Some(color) = text(CssProperty::BackgroundColor).and_then(parse_hex) {
        style = style.bg(color);
    }
    let weight = projection
        .style
        .get(CssProperty::FontWeight)
        .and_then(StyleValue::as_number);
    if weight.is_some_and(|w| w >= 600.0) {
        style = style.add_modifier(Modifier::BOLD);
    }
    if projection.opacity().is_some_and(|o| o > 0.0 && o < 0.6) {
        style = style.add_modifier(Modifier::DIM);
    }
    style
}

/// Classes in effect: the custom list when set, else the element's own
pub fn effective_classes<'a>(projection: &'a StyleProjection, base_classes: &'a str) -> &'a str {
    if projection.class_name.is_empty() {
        base_classes
    } else {
        &projection.class_name
    }
}

/// Style for a one-line element such as the header's demo chip
pub fn inline_style(projection: &StyleProjection, base_classes: &str) -> ClassStyle {
    let classes = class_style(effective_classes(projection, base_classes));
    ClassStyle {
        style: declaration_style(projection, classes.style),
        ..classes
    }
}

/// Column/row offset of a translated card: 8px per column, 16px per row
pub fn translate_offset(translate_x: Option<&str>, translate_y: Option<&str>) -> (i32, i32) {
    let cells = |raw: Option<&str>, per_cell: f64| {
        raw.and_then(leading_number)
            .map_or(0, |px| (px / per_cell).round() as i32)
    };
    (cells(translate_x, 8.0), cells(translate_y, 16.0))
}

/// `cell` moved by `(dx, dy)` and clipped back into `cell`
pub fn shifted_rect(cell: Rect, dx: i32, dy: i32) -> Rect {
    let shift = |start: u16, len: u16, delta: i32| -> (u16, u16) {
        let start = i32::from(start);
        let end = start + i32::from(len);
        let new_start = (start + delta).clamp(start, end);
        let new_end = (end + delta).clamp(start, end);
        (new_start as u16, (new_end - new_start).max(0) as u16)
    };
    let (x, width) = shift(cell.x, cell.width, dx);
    let (y, height) = shift(cell.y, cell.height, dy);
    Rect::new(x, y, width, height)
}

pub struct CardProps<'a> {
    pub item: &'a PageItem,
    pub projection: &'a StyleProjection,
    /// Raw translateX / translateY values of the record
    pub translate: (Option<&'a str>, Option<&'a str>),
    pub has_custom_styles: bool,
    pub is_focused: bool,
    pub is_selected: bool,
    pub is_copied: bool,
}

/// Height a card needs for `item`: borders, title, details, caption
pub fn card_height(item: &PageItem) -> u16 {
    2 + 1 + item.details.len() as u16 + 1
}

/// Draw one editable element as a bordered card inside `cell`
pub fn render_card(frame: &mut Frame, cell: Rect, props: CardProps<'_>) {
    let projection = props.projection;
    let (dx, dy) = translate_offset(props.translate.0, props.translate.1);
    let area = shifted_rect(cell, dx, dy);
    if area.width < 3 || area.height < 2 {
        return;
    }

    let border_style = if props.is_selected {
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
    } else if props.is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(if props.is_selected {
            BorderType::Double
        } else {
            BorderType::Rounded
        })
        .border_style(border_style);
    if props.has_custom_styles {
        block = block.title_top(Line::from(Span::styled(" ✎ ", Style::default().fg(Color::Yellow))).right_aligned());
    }
    if props.is_copied {
        block = block.title_bottom(Line::from(Span::styled(" ✓ Copied ", Style::default().fg(LIME))).right_aligned());
    }

    let hidden = projection.opacity().is_some_and(|o| o <= 0.0);
    if hidden {
        frame.render_widget(block, area);
        return;
    }

    let item = props.item;
    let class = inline_style(projection, item.base_classes);
    let accent = item.accent.and_then(parse_hex);

    let mut title_style = Style::default().add_modifier(Modifier::BOLD);
    if item.kind != ElementKind::ColorSwatch {
        if let Some(color) = accent {
            title_style = title_style.fg(color);
        }
    }
    let title_style = title_style.patch(class.style);

    let text = projection.content.as_deref().unwrap_or(&item.title);
    let text = if class.uppercase {
        text.to_uppercase()
    } else {
        text.to_string()
    };

    let mut title = Vec::new();
    if item.kind == ElementKind::ColorSwatch {
        if let Some(color) = accent {
            title.push(Span::styled("██ ", Style::default().fg(color)));
        }
    }
    title.push(Span::styled(text, title_style));

    let body_style = declaration_style(projection, Style::default().fg(Color::Gray));
    let mut lines = vec![Line::from(title)];
    lines.extend(
        item.details
            .iter()
            .map(|d| Line::from(Span::styled(d.as_str(), body_style))),
    );
    if let Some(caption) = projection.transform_caption() {
        lines.push(Line::from(Span::styled(
            caption.to_string(),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Raw translate values of a record, for [`CardProps::translate`]
pub fn translate_values(record: &crate::style::CustomStyleRecord) -> (Option<&str>, Option<&str>) {
    (
        record.transform_value(TransformProperty::TranslateX),
        record.transform_value(TransformProperty::TranslateY),
    )
}
