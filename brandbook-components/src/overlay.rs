//! Floating panels drawn over the page
//!
//! The help screen is a centered overlay over a dimmed page; the property
//! inspector is docked to the right edge and leaves the page undimmed so
//! live edits stay visible underneath.

use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget, Frame};

/// Configuration for overlay appearance
pub struct OverlayStyle {
    /// Dim factor for the page underneath (0.0 = none, 1.0 = black); `None` leaves it untouched
    pub dim_factor: Option<f32>,
    /// Background color for the overlay area (None = cleared)
    pub bg_color: Option<Color>,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            dim_factor: Some(0.5),
            bg_color: None,
        }
    }
}

impl OverlayStyle {
    /// Dimmed page, filled overlay
    pub fn with_bg(bg_color: Color) -> Self {
        Self {
            bg_color: Some(bg_color),
            ..Default::default()
        }
    }

    /// Undimmed page, filled overlay
    pub fn floating(bg_color: Color) -> Self {
        Self {
            dim_factor: None,
            bg_color: Some(bg_color),
        }
    }
}

/// Prepare an overlay area
///
/// Call this AFTER rendering the page and BEFORE rendering the overlay's
/// content into `area`.
pub fn render_overlay(frame: &mut Frame, area: Rect, style: &OverlayStyle) {
    if let Some(factor) = style.dim_factor {
        dim_buffer(frame.buffer_mut(), factor);
    }

    match style.bg_color {
        Some(bg) => frame.render_widget(BgFill(bg), area),
        None => frame.render_widget(ratatui::widgets::Clear, area),
    }
}

/// Fills an area with a background color
struct BgFill(Color);

impl Widget for BgFill {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                buf[(x, y)].set_bg(self.0);
                buf[(x, y)].set_symbol(" ");
            }
        }
    }
}

/// Scale every cell's colors toward black
pub fn dim_buffer(buffer: &mut Buffer, factor: f32) {
    let scale = 1.0 - factor.clamp(0.0, 1.0);
    for cell in buffer.content.iter_mut() {
        cell.fg = dim_color(cell.fg, scale);
        cell.bg = dim_color(cell.bg, scale);
    }
}

fn dim_color(color: Color, scale: f32) -> Color {
    let scaled = |r: u8, g: u8, b: u8| {
        Color::Rgb(
            (r as f32 * scale) as u8,
            (g as f32 * scale) as u8,
            (b as f32 * scale) as u8,
        )
    };

    match color {
        Color::Rgb(r, g, b) => scaled(r, g, b),
        Color::Red => scaled(205, 0, 0),
        Color::Green => scaled(0, 205, 0),
        Color::Yellow => scaled(205, 205, 0),
        Color::Blue => scaled(0, 0, 238),
        Color::Magenta => scaled(205, 0, 205),
        Color::Cyan => scaled(0, 205, 205),
        Color::Gray => scaled(229, 229, 229),
        Color::DarkGray => scaled(127, 127, 127),
        Color::LightRed => scaled(255, 0, 0),
        Color::LightGreen => scaled(0, 255, 0),
        Color::LightYellow => scaled(255, 255, 0),
        Color::LightBlue => scaled(92, 92, 255),
        Color::LightMagenta => scaled(255, 0, 255),
        Color::LightCyan => scaled(0, 255, 255),
        Color::White => scaled(255, 255, 255),
        // Reset, Black and palette indices are left alone
        other => other,
    }
}

/// Calculate a centered rectangle within an area
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// A full-height panel of `width` columns docked to the right edge of `area`
///
/// One column of margin is kept on the right; narrow terminals shrink the panel.
pub fn docked_rect(width: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(1));
    let x = area.right().saturating_sub(width + 1).max(area.x);
    Rect::new(x, area.y, width, area.height)
}
