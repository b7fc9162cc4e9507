//! Dispatch plumbing for the WinMix brand book
//!
//! The brand book follows a Redux/Elm-style loop: terminal events become
//! actions, a single reducer folds actions into state and may emit effects,
//! and the runtime executes those effects as keyed background tasks that
//! report back with more actions.
//!
//! # Core Concepts
//!
//! - **Action**: a named intent to change state
//! - **Store**: the single owner of state, mutated only through `dispatch`
//! - **Middleware**: observers notified around every dispatch (tracing, tests)
//! - **Effect**: a declarative description of work returned by the reducer
//! - **Component**: a UI element rendering from props and emitting actions
//! - **TaskManager**: keyed async tasks with debounce and interval support
//!
//! # Example
//!
//! ```ignore
//! use brandbook_core::prelude::*;
//!
//! #[derive(Clone, Debug)]
//! enum Action {
//!     Select(String),
//!     Close,
//! }
//!
//! impl brandbook_core::Action for Action {
//!     fn name(&self) -> &'static str {
//!         match self {
//!             Action::Select(_) => "Select",
//!             Action::Close => "Close",
//!         }
//!     }
//! }
//!
//! #[derive(Default)]
//! struct State {
//!     selected: Option<String>,
//! }
//!
//! fn reducer(state: &mut State, action: Action) -> DispatchResult<()> {
//!     match action {
//!         Action::Select(id) => state.selected = Some(id),
//!         Action::Close => state.selected = None,
//!     }
//!     DispatchResult::changed()
//! }
//!
//! let mut store = Store::new(State::default(), reducer);
//! store.dispatch(Action::Select("color-primary".into()));
//! ```

pub mod action;
pub mod component;
pub mod effect;
pub mod event;
pub mod keybindings;
pub mod poller;
pub mod runtime;
pub mod store;
pub mod tasks;
pub mod testing;

pub use action::Action;
pub use component::Component;
pub use effect::{DispatchResult, Reducer};
pub use event::EventKind;
pub use keybindings::{format_key_for_display, parse_key_string, BindingContext, Keybindings};
pub use poller::{process_raw_event, spawn_event_poller, RawEvent};
pub use runtime::{EffectContext, EffectRuntime, EventOutcome};
pub use store::{Middleware, NoopMiddleware, Store, TracingMiddleware};
pub use tasks::{TaskKey, TaskManager};

pub use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    Frame,
};

pub use testing::{
    buffer_to_string_plain, char_key, click, ctrl_key, key, shift_click, RenderHarness,
    TestHarness,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::Action;
    pub use crate::component::Component;
    pub use crate::effect::{DispatchResult, Reducer};
    pub use crate::event::EventKind;
    pub use crate::keybindings::{
        format_key_for_display, parse_key_string, BindingContext, Keybindings,
    };
    pub use crate::poller::{process_raw_event, spawn_event_poller, RawEvent};
    pub use crate::runtime::{EffectContext, EffectRuntime, EventOutcome};
    pub use crate::store::{Middleware, NoopMiddleware, Store, TracingMiddleware};
    pub use crate::tasks::{TaskKey, TaskManager};

    pub use ratatui::{
        layout::Rect,
        style::{Color, Modifier, Style},
        text::{Line, Span, Text},
        Frame,
    };
}
