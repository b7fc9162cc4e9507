//! Reducer results carrying side effects
//!
//! A reducer never performs I/O or starts timers itself. It mutates state and
//! returns a [`DispatchResult`] describing whether the state changed and which
//! effects the runtime should execute afterwards:
//!
//! ```ignore
//! fn reducer(state: &mut State, action: Action) -> DispatchResult<Effect> {
//!     match action {
//!         Action::ClipboardCopy { text, label } => {
//!             state.copied_color = Some(label);
//!             DispatchResult::changed_with(Effect::CopyToClipboard { text })
//!                 .with(Effect::ScheduleCopiedClear)
//!         }
//!         Action::Tick => DispatchResult::unchanged(),
//!     }
//! }
//! ```

/// A reducer function that can emit effects.
pub type Reducer<S, A, E> = fn(&mut S, A) -> DispatchResult<E>;

/// Outcome of dispatching one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult<E> {
    /// Whether the state was modified (a re-render is needed).
    pub changed: bool,
    /// Effects to execute after the dispatch, in order.
    pub effects: Vec<E>,
}

impl<E> Default for DispatchResult<E> {
    fn default() -> Self {
        Self::unchanged()
    }
}

impl<E> DispatchResult<E> {
    /// No state change, no effects.
    #[inline]
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            effects: vec![],
        }
    }

    /// State changed, no effects.
    #[inline]
    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: vec![],
        }
    }

    /// A single effect without a state change.
    #[inline]
    pub fn effect(effect: E) -> Self {
        Self {
            changed: false,
            effects: vec![effect],
        }
    }

    /// State changed and a single effect is requested.
    #[inline]
    pub fn changed_with(effect: E) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }

    /// Construct from a change flag; convenient for setters that may be no-ops.
    #[inline]
    pub fn changed_if(changed: bool) -> Self {
        Self {
            changed,
            effects: vec![],
        }
    }

    /// Append an effect.
    #[inline]
    pub fn with(mut self, effect: E) -> Self {
        self.effects.push(effect);
        self
    }

    #[inline]
    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }
}
