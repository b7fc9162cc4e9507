//! Reusable widgets for the WinMix brand book
//!
//! Components implement the `Component<A>` trait and emit actions via callback
//! functions passed through Props.
//!
//! # Components
//!
//! - [`TextInput`] - Single-line text input with cursor
//! - [`Slider`] - Bounded numeric gauge with a unit-suffixed value label
//! - [`render_overlay`] - Floating panel helper, optionally dimming the page
//!
//! # Example
//!
//! ```ignore
//! use brandbook_components::{Slider, SliderProps};
//!
//! let mut rotate = Slider::new();
//! rotate.render(frame, area, SliderProps {
//!     label: "Rotate",
//!     value: 15,
//!     min: -180,
//!     max: 180,
//!     unit: "°",
//!     value_label: None,
//!     is_focused: true,
//!     on_change: |v| Action::StyleUpdate { /* ... */ },
//! });
//! ```

mod overlay;
mod slider;
mod text_input;

pub use overlay::{centered_rect, dim_buffer, docked_rect, render_overlay, OverlayStyle};
pub use slider::{Slider, SliderProps};
pub use text_input::{TextInput, TextInputProps};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        centered_rect, dim_buffer, docked_rect, render_overlay, OverlayStyle, Slider,
        SliderProps, TextInput, TextInputProps,
    };
}
