//! Design tokens and the editable items of each tab
//!
//! All data is static. [`page_items`] lists what a tab can focus, select and
//! edit, in focus order.

use crate::element::{element_id, EditableElementRef, ElementKind};
use crate::state::BrandBookTab;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorToken {
    pub name: &'static str,
    pub value: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct ColorGroup {
    pub title: &'static str,
    pub colors: &'static [ColorToken],
}

const fn color(name: &'static str, value: &'static str, description: &'static str) -> ColorToken {
    ColorToken {
        name,
        value,
        description,
    }
}

pub const COLOR_GROUPS: &[ColorGroup] = &[
    ColorGroup {
        title: "Primary Colors",
        colors: &[
            color("Primary", "#BEF264", "Main accent color"),
            color("Primary Neon", "#CCFF00", "Bright variant"),
            color("Primary Soft", "#BEF264", "Softer variant"),
        ],
    },
    ColorGroup {
        title: "Secondary Colors",
        colors: &[
            color("Secondary", "#22D3EE", "Cyan accent"),
            color("Accent", "#F97316", "Orange accent"),
            color("Emerald", "#6EE7B7", "Success variant"),
        ],
    },
    ColorGroup {
        title: "Semantic Colors",
        colors: &[
            color("Success", "#22C55E", "Positive states"),
            color("Warning", "#F59E0B", "Caution states"),
            color("Danger", "#EF4444", "Error states"),
            color("Info", "#3B82F6", "Information"),
        ],
    },
    ColorGroup {
        title: "Background & Surfaces",
        colors: &[
            color("Background", "#0A0A0A", "Main background"),
            color("Surface", "#111111", "Card background"),
            color("Surface Elevated", "#141414", "Elevated elements"),
        ],
    },
];

/// Extra accents usable from classes (`text-rose`) but not shown as swatches
const ACCENTS: &[ColorToken] = &[
    color("Rose", "#FB7185", ""),
    color("Amber", "#FBBF24", ""),
    color("Purple", "#8B5CF6", ""),
    color("White", "#FFFFFF", ""),
];

/// Hex value for a class token such as `primary-neon` or `rose`
pub fn color_by_key(key: &str) -> Option<&'static str> {
    COLOR_GROUPS
        .iter()
        .flat_map(|g| g.colors.iter())
        .chain(ACCENTS.iter())
        .find(|c| crate::element::slug(c.name) == key)
        .map(|c| c.value)
}

/// Swatches whose name contains `query`, case-insensitively, by group
///
/// Groups left empty by the filter are dropped.
pub fn filtered_color_groups(query: &str) -> Vec<(&'static str, Vec<ColorToken>)> {
    let query = query.trim().to_lowercase();
    COLOR_GROUPS
        .iter()
        .map(|group| {
            let colors = group
                .colors
                .iter()
                .filter(|c| query.is_empty() || c.name.to_lowercase().contains(&query))
                .copied()
                .collect::<Vec<_>>();
            (group.title, colors)
        })
        .filter(|(_, colors)| !colors.is_empty())
        .collect()
}

#[derive(Clone, Copy, Debug)]
pub struct Guideline {
    pub id: &'static str,
    pub color: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub const GUIDELINES: &[Guideline] = &[
    Guideline {
        id: "guideline-primary-bef264-",
        color: "#BEF264",
        title: "Primary (#BEF264)",
        desc: "Use for primary actions, highlights, active states, and key UI elements.",
    },
    Guideline {
        id: "guideline-secondary-22d3ee-",
        color: "#22D3EE",
        title: "Secondary (#22D3EE)",
        desc: "Use for secondary actions, informational elements, and complementary accents.",
    },
    Guideline {
        id: "guideline-glass-effects",
        color: "#FFFFFF",
        title: "Glass Effects",
        desc: "Use rgba(255, 255, 255, 0.05-0.12) for glassmorphism with backdrop blur.",
    },
];

#[derive(Clone, Copy, Debug)]
pub struct TypeScale {
    pub level: &'static str,
    pub example: &'static str,
    pub font_size: &'static str,
    pub line_height: &'static str,
    pub font_weight: u16,
}

pub const TYPE_SCALE: &[TypeScale] = &[
    TypeScale { level: "4xl", example: "Display Heading - 36px", font_size: "2.25rem", line_height: "2.5rem", font_weight: 800 },
    TypeScale { level: "3xl", example: "Large Heading - 30px", font_size: "1.875rem", line_height: "2.25rem", font_weight: 700 },
    TypeScale { level: "2xl", example: "Section Heading - 24px", font_size: "1.5rem", line_height: "2rem", font_weight: 700 },
    TypeScale { level: "xl", example: "Subsection Heading - 20px", font_size: "1.25rem", line_height: "1.75rem", font_weight: 600 },
    TypeScale { level: "lg", example: "Large Body Text - 18px", font_size: "1.125rem", line_height: "1.75rem", font_weight: 500 },
    TypeScale { level: "base", example: "Body Text - 16px", font_size: "1rem", line_height: "1.5rem", font_weight: 400 },
    TypeScale { level: "sm", example: "Small Text - 14px", font_size: "0.875rem", line_height: "1.25rem", font_weight: 400 },
    TypeScale { level: "xs", example: "Caption Text - 12px", font_size: "0.75rem", line_height: "1rem", font_weight: 400 },
];

#[derive(Clone, Copy, Debug)]
pub struct FontFamily {
    pub label: &'static str,
    pub name: &'static str,
    pub family: &'static str,
    pub usage: &'static str,
}

pub const FONT_FAMILIES: &[FontFamily] = &[
    FontFamily {
        label: "Sans Serif (Primary)",
        name: "Plus Jakarta Sans",
        family: "Plus Jakarta Sans, system-ui, -apple-system, sans-serif",
        usage: "Used for headings, body text, and UI elements",
    },
    FontFamily {
        label: "Monospace (Data)",
        name: "JetBrains Mono",
        family: "JetBrains Mono, ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, monospace",
        usage: "Used for numbers, code, and data display",
    },
];

/// `(title, description)`
pub const BEST_PRACTICES: &[(&str, &str)] = &[
    ("Hierarchy", "Use size, weight, and color to establish clear visual hierarchy"),
    ("Contrast", "Maintain 4.5:1 contrast ratio for body text, 3:1 for large text"),
    ("Line Height", "Use 1.5-1.75 line height for body text for optimal readability"),
    ("Letter Spacing", "Tighten tracking for large headings, increase for small caps"),
    ("Tabular Nums", "Use monospace font for numbers and data to maintain alignment"),
];

/// `(title, description, accent)`
pub const PRINCIPLES: &[(&str, &str, &str)] = &[
    (
        "Glassmorphism",
        "Translucent surfaces with backdrop blur create depth and modern aesthetics",
        "#BEF264",
    ),
    (
        "Neon Accents",
        "Vibrant lime green (#BEF264) primary color with glowing effects",
        "#22D3EE",
    ),
    (
        "Data Visualization",
        "Real-time charts, sparklines, and interactive data displays",
        "#8B5CF6",
    ),
];

/// `(label, value)`
pub const FEATURES: &[(&str, &str)] = &[
    ("Design Tokens", "Centralized design system"),
    ("Grid System", "12-column responsive layout"),
    ("Components", "50+ production-ready components"),
    ("Animations", "Smooth, purposeful motion"),
    ("Accessibility", "WCAG 2.1 AA compliant"),
    ("Dark Mode", "Optimized for dark interfaces"),
    ("TypeScript", "Fully typed components"),
    ("Responsive", "Mobile-first approach"),
];

/// `(title, description, preview)`
pub const SHOWCASES: &[(&str, &str, &str)] = &[
    (
        "Buttons",
        "Primary, secondary, and ghost button variants with multiple sizes",
        "[ Primary ]  [ Secondary ]  [ Ghost ]",
    ),
    (
        "Badges",
        "Status indicators and labels with semantic colors",
        "(Live)  (Win)  (Draw)  (Loss)",
    ),
    (
        "Cards",
        "Glass-effect cards with various layouts and content",
        "┌ Match ┐  ┌ Odds ┐  ┌ Form ┐",
    ),
    (
        "Stat Cards",
        "Analytics cards with sparklines and progress indicators",
        "Possession 64%  ▂▃▄▅▆▅▆▇▆▇   xG 2.42",
    ),
    (
        "Input Fields",
        "Form inputs with glass styling and validation states",
        "[ Search teams...          ]",
    ),
    (
        "Live Indicators",
        "Real-time status indicators with pulse animations",
        "● LIVE   ● 67'   ○ HT",
    ),
];

pub const SPACING: &[(&str, &str)] = &[
    ("xs", "8px"),
    ("sm", "12px"),
    ("md", "16px"),
    ("lg", "24px"),
    ("xl", "32px"),
    ("2xl", "48px"),
    ("3xl", "64px"),
    ("4xl", "80px"),
];

pub const RADIUS: &[(&str, &str)] = &[
    ("none", "0"),
    ("sm", "0.75rem"),
    ("md", "1rem"),
    ("lg", "1.5rem"),
    ("xl", "2rem"),
    ("2xl", "2.5rem"),
    ("full", "9999px"),
];

pub const SHADOWS: &[(&str, &str)] = &[
    ("sm", "0 1px 2px rgba(0, 0, 0, 0.3)"),
    ("md", "0 4px 12px rgba(0, 0, 0, 0.4)"),
    ("lg", "0 10px 30px rgba(0, 0, 0, 0.5)"),
    ("xl", "0 20px 50px rgba(0, 0, 0, 0.6)"),
    ("2xl", "0 25px 60px rgba(0, 0, 0, 0.8)"),
    ("inner", "inset 0 2px 8px rgba(0, 0, 0, 0.4)"),
    ("glow", "0 0 30px rgba(190, 242, 100, 0.4)"),
];

/// Animation durations in milliseconds
pub const DURATIONS: &[(&str, u64)] = &[("fast", 150), ("normal", 250), ("slow", 350), ("slower", 500)];

pub const GRID_COLUMNS: usize = 12;
pub const STATS_ROW: usize = 4;

/// What Enter (or a plain click) does on an item
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DefaultAction {
    /// Copy `text`; `label` names it in the copied feedback
    Copy { text: &'static str, label: &'static str },
    FocusOnly,
}

/// One focusable, editable element of a tab
#[derive(Clone, Debug, PartialEq)]
pub struct PageItem {
    pub kind: ElementKind,
    pub id: String,
    pub base_classes: &'static str,
    /// Default visible text
    pub title: String,
    /// Secondary lines, never overridden
    pub details: Vec<String>,
    /// Hex accent drawn by the card
    pub accent: Option<&'static str>,
    pub action: DefaultAction,
}

impl PageItem {
    fn new(kind: ElementKind, id: String, base_classes: &'static str, title: &str) -> Self {
        Self {
            kind,
            id,
            base_classes,
            title: title.to_string(),
            details: Vec::new(),
            accent: None,
            action: DefaultAction::FocusOnly,
        }
    }

    fn detail(mut self, line: impl Into<String>) -> Self {
        self.details.push(line.into());
        self
    }

    fn accent(mut self, hex: &'static str) -> Self {
        self.accent = Some(hex);
        self
    }

    fn copies(mut self, text: &'static str, label: &'static str) -> Self {
        self.action = DefaultAction::Copy { text, label };
        self
    }

    /// The reference handed to the inspector when this item is selected
    pub fn element_ref(&self) -> EditableElementRef {
        EditableElementRef::new(self.kind, self.id.clone(), self.base_classes)
            .with_content(self.title.clone())
    }
}

/// Editable items of `tab` in focus order
///
/// Only the Colors tab honours `query`.
pub fn page_items(tab: BrandBookTab, query: &str) -> Vec<PageItem> {
    match tab {
        BrandBookTab::Overview => overview_items(),
        BrandBookTab::Colors => color_items(query),
        BrandBookTab::Typography => typography_items(),
        BrandBookTab::Components => showcase_items(),
        BrandBookTab::Patterns => pattern_items(),
    }
}

pub fn overview_items() -> Vec<PageItem> {
    let principles = PRINCIPLES.iter().map(|(title, description, accent)| {
        PageItem::new(
            ElementKind::Component,
            element_id("principle", title),
            "glass-card p-5 sm:p-6",
            title,
        )
        .detail(*description)
        .accent(*accent)
    });
    let features = FEATURES.iter().map(|(label, value)| {
        PageItem::new(
            ElementKind::Component,
            element_id("feature", label),
            "glass-card p-4",
            label,
        )
        .detail(*value)
    });
    principles.chain(features).collect()
}

pub fn color_items(query: &str) -> Vec<PageItem> {
    let swatches = filtered_color_groups(query)
        .into_iter()
        .flat_map(|(_, colors)| colors)
        .map(|c| {
            PageItem::new(
                ElementKind::ColorSwatch,
                element_id("color", c.name),
                "glass-card p-4 sm:p-5",
                c.name,
            )
            .detail(c.value)
            .detail(c.description)
            .accent(c.value)
            .copies(c.value, c.name)
        });
    let guidelines = GUIDELINES.iter().map(|g| {
        PageItem::new(
            ElementKind::Component,
            g.id.to_string(),
            "flex items-start gap-3",
            g.title,
        )
        .detail(g.desc)
        .accent(g.color)
    });
    swatches.chain(guidelines).collect()
}

pub fn typography_items() -> Vec<PageItem> {
    let families = FONT_FAMILIES.iter().map(|f| {
        PageItem::new(
            ElementKind::Typography,
            element_id("font", f.name),
            "glass-card p-5 sm:p-6",
            f.name,
        )
        .detail(f.label)
        .detail(f.family)
        .detail(f.usage)
        .copies(f.family, f.name)
    });
    let scale = TYPE_SCALE.iter().map(|t| {
        PageItem::new(
            ElementKind::Typography,
            format!("typo-{}", t.level),
            "glass-card p-4 sm:p-6 mb-4",
            t.example,
        )
        .detail(format!(
            "{} · {} / {} / {}",
            t.level.to_uppercase(),
            t.font_size,
            t.line_height,
            t.font_weight
        ))
        .copies(t.font_size, t.level)
    });
    let practices = BEST_PRACTICES.iter().map(|(title, desc)| {
        PageItem::new(
            ElementKind::Component,
            element_id("practice", title),
            "flex items-start gap-3 pb-4 border-b border-white/5",
            title,
        )
        .detail(*desc)
    });
    families.chain(scale).chain(practices).collect()
}

pub fn showcase_items() -> Vec<PageItem> {
    SHOWCASES
        .iter()
        .map(|(title, description, preview)| {
            PageItem::new(
                ElementKind::Component,
                element_id("showcase", title),
                "glass-card p-6 sm:p-8 mb-6",
                title,
            )
            .detail(*description)
            .detail(*preview)
        })
        .collect()
}

pub fn pattern_items() -> Vec<PageItem> {
    let columns = (1..=GRID_COLUMNS).map(|i| {
        PageItem::new(
            ElementKind::Component,
            format!("grid-col-{i}"),
            "h-10 sm:h-12 bg-[#BEF264]/20 rounded border border-[#BEF264]/40",
            &i.to_string(),
        )
        .accent("#BEF264")
    });
    let stats = (1..=STATS_ROW).map(|i| {
        PageItem::new(
            ElementKind::Component,
            format!("stat-card-{i}"),
            "h-20 sm:h-24 bg-white/5 rounded-xl border border-white/10",
            &format!("Stat Card {i}"),
        )
    });
    columns.chain(stats).collect()
}

/// Selected by the header's inspector toggle when nothing is selected
pub fn demo_element() -> EditableElementRef {
    EditableElementRef::new(
        ElementKind::Component,
        "demo-element",
        "glass-card p-6 rounded-2xl border border-white/10",
    )
    .with_content("Demo Element")
}
