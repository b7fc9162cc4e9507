//! WinMix Pro brand book with a live style inspector
//!
//! The page is a Redux-style app on `brandbook-core`: [`BrandBookState`] is
//! changed only by [`reducer`], and leaf elements read their edits through
//! [`ElementInspector`], the facade that also turns edits into actions.

pub mod action;
pub mod clipboard;
pub mod components;
pub mod config;
pub mod effect;
pub mod element;
pub mod error;
pub mod inspector;
pub mod keymap;
pub mod logging;
pub mod reducer;
pub mod state;
pub mod style;
pub mod tokens;
pub mod transform;

pub use action::Action;
pub use components::BrandBook;
pub use config::Config;
pub use effect::{Effect, EffectSettings};
pub use element::{EditableElementRef, ElementKind};
pub use error::{AppError, StyleChangeError};
pub use inspector::ElementInspector;
pub use reducer::reducer;
pub use state::{BrandBookState, BrandBookTab};
pub use style::{CustomStyleRecord, StyleProjection, StyleProperty, StyleValue};
pub use transform::{TransformProperty, build_transform};
