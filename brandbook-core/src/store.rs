//! Centralized state store with reducer pattern

use crate::effect::{DispatchResult, Reducer};
use crate::Action;
use std::marker::PhantomData;

/// Centralized state store with Redux-like reducer pattern
///
/// The store holds the application state and provides a single point
/// for state mutations through the `dispatch` method. Every dispatch is
/// bracketed by the middleware's `before`/`after` hooks.
///
/// # Type Parameters
/// * `S` - The application state type
/// * `A` - The action type (must implement `Action`)
/// * `E` - The effect type returned by the reducer
/// * `M` - Middleware observing each dispatch
///
/// # Example
/// ```ignore
/// let mut store = Store::with_middleware(
///     BrandBookState::default(),
///     reducer,
///     TracingMiddleware::new(),
/// );
/// let result = store.dispatch(Action::TabSelect(BrandBookTab::Colors));
/// assert!(result.changed);
/// ```
pub struct Store<S, A: Action, E, M: Middleware<A> = NoopMiddleware> {
    state: S,
    reducer: Reducer<S, A, E>,
    middleware: M,
    _marker: PhantomData<A>,
}

impl<S, A: Action, E> Store<S, A, E, NoopMiddleware> {
    /// Create a new store with initial state and reducer
    pub fn new(state: S, reducer: Reducer<S, A, E>) -> Self {
        Self::with_middleware(state, reducer, NoopMiddleware)
    }
}

impl<S, A: Action, E, M: Middleware<A>> Store<S, A, E, M> {
    /// Create a new store with middleware
    pub fn with_middleware(state: S, reducer: Reducer<S, A, E>, middleware: M) -> Self {
        Self {
            state,
            reducer,
            middleware,
            _marker: PhantomData,
        }
    }

    /// Dispatch an action through middleware and reducer
    ///
    /// Returns the reducer's result: the change flag plus any effects the
    /// caller must execute.
    pub fn dispatch(&mut self, action: A) -> DispatchResult<E> {
        self.middleware.before(&action);
        let result = (self.reducer)(&mut self.state, action.clone());
        self.middleware.after(&action, result.changed);
        result
    }

    /// Get a reference to the current state
    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn middleware(&self) -> &M {
        &self.middleware
    }
}

/// Middleware trait for intercepting actions
///
/// Implement this trait to add logging or other cross-cutting concerns
/// to the store.
pub trait Middleware<A: Action> {
    /// Called before the action is dispatched to the reducer
    fn before(&mut self, action: &A);

    /// Called after the action is processed by the reducer
    fn after(&mut self, action: &A, state_changed: bool);
}

/// A no-op middleware that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMiddleware;

impl<A: Action> Middleware<A> for NoopMiddleware {
    fn before(&mut self, _action: &A) {}
    fn after(&mut self, _action: &A, _state_changed: bool) {}
}

/// Middleware that emits a `tracing` event per dispatched action
#[derive(Debug, Clone, Default)]
pub struct TracingMiddleware {
    /// Whether to log before dispatch
    pub log_before: bool,
    /// Whether to log after dispatch
    pub log_after: bool,
}

impl TracingMiddleware {
    /// Log after dispatch only
    pub fn new() -> Self {
        Self {
            log_before: false,
            log_after: true,
        }
    }

    /// Log both before and after dispatch
    pub fn verbose() -> Self {
        Self {
            log_before: true,
            log_after: true,
        }
    }
}

impl<A: Action> Middleware<A> for TracingMiddleware {
    fn before(&mut self, action: &A) {
        if self.log_before {
            tracing::debug!(action = %action.name(), "Dispatching action");
        }
    }

    fn after(&mut self, action: &A, state_changed: bool) {
        if self.log_after {
            tracing::debug!(
                action = %action.name(),
                state_changed = state_changed,
                "Action processed"
            );
        }
    }
}
