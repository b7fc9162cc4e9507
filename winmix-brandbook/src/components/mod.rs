pub mod brand_book;
pub mod color_palette;
pub mod header;
pub mod help_bar;
pub mod help_overlay;
pub mod overview;
pub mod patterns;
pub mod property_inspector;
pub mod section;
pub mod showcase;
pub mod styled;
pub mod tab_bar;
pub mod typography;

// Re-export core Component trait
pub use brandbook_core::Component;

pub use brand_book::{BrandBook, BrandBookProps};
pub use color_palette::ColorPalette;
pub use header::{Header, HeaderProps};
pub use help_bar::{HelpBar, HelpBarProps};
pub use help_overlay::{HelpOverlay, HelpOverlayProps};
pub use overview::OverviewSection;
pub use patterns::PatternsSection;
pub use property_inspector::{InspectorMode, PropertyInspector, PropertyInspectorProps};
pub use section::SectionProps;
pub use showcase::ShowcaseSection;
pub use tab_bar::{TabBar, TabBarProps};
pub use typography::TypographySection;
