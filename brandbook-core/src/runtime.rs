//! Event/action/render loop
//!
//! [`EffectRuntime`] owns the store, the action queue and the task manager.
//! Each iteration it renders (when something changed), then waits for either
//! a terminal event or a queued action. Events are mapped to actions by the
//! app; actions go through the store; effects returned by the reducer are
//! handed to the app's effect handler together with an [`EffectContext`].

use std::io;
use std::time::Duration;

use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::effect::Reducer;
use crate::event::EventKind;
use crate::poller::{process_raw_event, spawn_event_poller, RawEvent};
use crate::store::{Middleware, NoopMiddleware, Store};
use crate::tasks::TaskManager;
use crate::Action;

/// Timings of the crossterm poller task
#[derive(Debug, Clone, Copy)]
struct PollerConfig {
    /// Passed to each `crossterm::event::poll` call
    poll_timeout: Duration,
    /// Sleep between poll cycles
    loop_sleep: Duration,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            poll_timeout: Duration::from_millis(10),
            loop_sleep: Duration::from_millis(16),
        }
    }
}

/// Result of mapping an event into actions plus an optional render hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventOutcome<A> {
    /// Actions to enqueue.
    pub actions: Vec<A>,
    /// Whether to force a re-render.
    pub needs_render: bool,
}

impl<A> EventOutcome<A> {
    /// No actions and no render.
    pub fn ignored() -> Self {
        Self {
            actions: Vec::new(),
            needs_render: false,
        }
    }

    /// No actions, but request a render (component-local state changed).
    pub fn needs_render() -> Self {
        Self {
            actions: Vec::new(),
            needs_render: true,
        }
    }

    pub fn action(action: A) -> Self {
        Self {
            actions: vec![action],
            needs_render: false,
        }
    }

    /// Create from any iterator of actions, such as the result of
    /// `Component::handle_event`.
    pub fn from_actions(iter: impl IntoIterator<Item = A>) -> Self {
        Self {
            actions: iter.into_iter().collect(),
            needs_render: false,
        }
    }

    pub fn with_render(mut self) -> Self {
        self.needs_render = true;
        self
    }

    pub fn is_ignored(&self) -> bool {
        self.actions.is_empty() && !self.needs_render
    }
}

impl<A> Default for EventOutcome<A> {
    fn default() -> Self {
        Self::ignored()
    }
}

impl<A> From<A> for EventOutcome<A> {
    fn from(action: A) -> Self {
        Self::action(action)
    }
}

impl<A> From<Vec<A>> for EventOutcome<A> {
    fn from(actions: Vec<A>) -> Self {
        Self {
            actions,
            needs_render: false,
        }
    }
}

impl<A> From<Option<A>> for EventOutcome<A> {
    fn from(action: Option<A>) -> Self {
        match action {
            Some(action) => Self::action(action),
            None => Self::ignored(),
        }
    }
}

/// Context passed to effect handlers.
pub struct EffectContext<'a, A: Action> {
    action_tx: &'a mpsc::UnboundedSender<A>,
    tasks: &'a mut TaskManager<A>,
}

impl<'a, A: Action> EffectContext<'a, A> {
    /// Build a context outside the runtime (effect handler tests).
    pub fn new(action_tx: &'a mpsc::UnboundedSender<A>, tasks: &'a mut TaskManager<A>) -> Self {
        Self { action_tx, tasks }
    }

    /// Send an action directly.
    pub fn emit(&self, action: A) {
        let _ = self.action_tx.send(action);
    }

    pub fn tasks(&mut self) -> &mut TaskManager<A> {
        self.tasks
    }
}

/// Runtime for effect-returning stores.
pub struct EffectRuntime<S, A: Action, E, M: Middleware<A> = NoopMiddleware> {
    store: Store<S, A, E, M>,
    action_tx: mpsc::UnboundedSender<A>,
    action_rx: mpsc::UnboundedReceiver<A>,
    poller_config: PollerConfig,
    should_render: bool,
    tasks: TaskManager<A>,
}

impl<S, A: Action, E> EffectRuntime<S, A, E, NoopMiddleware> {
    /// Create a runtime from state + reducer.
    pub fn new(state: S, reducer: Reducer<S, A, E>) -> Self {
        Self::from_store(Store::new(state, reducer))
    }
}

impl<S, A: Action, E, M: Middleware<A>> EffectRuntime<S, A, E, M> {
    /// Create a runtime from an existing store.
    pub fn from_store(store: Store<S, A, E, M>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let tasks = TaskManager::new(action_tx.clone());

        Self {
            store,
            action_tx,
            action_rx,
            poller_config: PollerConfig::default(),
            should_render: true,
            tasks,
        }
    }

    pub fn state(&self) -> &S {
        self.store.state()
    }

    /// Access the task manager (e.g. to start the tick interval).
    pub fn tasks(&mut self) -> &mut TaskManager<A> {
        &mut self.tasks
    }

    /// Run the loop against the real terminal until `should_quit` accepts an action.
    pub async fn run<B, FRender, FEvent, FQuit, FEffect, R>(
        &mut self,
        terminal: &mut Terminal<B>,
        render: FRender,
        map_event: FEvent,
        should_quit: FQuit,
        handle_effect: FEffect,
    ) -> io::Result<()>
    where
        B: Backend,
        FRender: FnMut(&mut Frame, Rect, &S),
        FEvent: FnMut(&EventKind, &S) -> R,
        R: Into<EventOutcome<A>>,
        FQuit: FnMut(&A) -> bool,
        FEffect: FnMut(E, &mut EffectContext<A>),
    {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<RawEvent>();
        let cancel_token = CancellationToken::new();
        let _handle = spawn_event_poller(
            event_tx,
            self.poller_config.poll_timeout,
            self.poller_config.loop_sleep,
            cancel_token.clone(),
        );

        let result = self
            .run_with_events(
                terminal,
                event_rx,
                render,
                map_event,
                should_quit,
                handle_effect,
            )
            .await;

        cancel_token.cancel();
        result
    }

    /// Run the loop with an explicit event source.
    ///
    /// The loop ends when `should_quit` accepts an action or both the event
    /// and action channels are closed. All tasks are cancelled on exit.
    pub async fn run_with_events<B, FRender, FEvent, FQuit, FEffect, R>(
        &mut self,
        terminal: &mut Terminal<B>,
        mut event_rx: mpsc::UnboundedReceiver<RawEvent>,
        mut render: FRender,
        mut map_event: FEvent,
        mut should_quit: FQuit,
        mut handle_effect: FEffect,
    ) -> io::Result<()>
    where
        B: Backend,
        FRender: FnMut(&mut Frame, Rect, &S),
        FEvent: FnMut(&EventKind, &S) -> R,
        R: Into<EventOutcome<A>>,
        FQuit: FnMut(&A) -> bool,
        FEffect: FnMut(E, &mut EffectContext<A>),
    {
        loop {
            if self.should_render {
                let state = self.store.state();
                terminal.draw(|frame| render(frame, frame.area(), state))?;
                self.should_render = false;
            }

            tokio::select! {
                Some(raw_event) = event_rx.recv() => {
                    let event = process_raw_event(raw_event);
                    let outcome: EventOutcome<A> = map_event(&event, self.store.state()).into();
                    if outcome.needs_render {
                        self.should_render = true;
                    }
                    for action in outcome.actions {
                        let _ = self.action_tx.send(action);
                    }
                }

                Some(action) = self.action_rx.recv() => {
                    if should_quit(&action) {
                        break;
                    }

                    let result = self.store.dispatch(action);
                    if result.has_effects() {
                        let mut ctx = EffectContext::new(&self.action_tx, &mut self.tasks);
                        for effect in result.effects {
                            handle_effect(effect, &mut ctx);
                        }
                    }
                    self.should_render |= result.changed;
                }

                else => {
                    break;
                }
            }
        }

        self.tasks.cancel_all();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::DispatchResult;
    use crate::testing::char_key;
    use ratatui::backend::TestBackend;

    #[derive(Default)]
    struct TestState {
        count: usize,
        copied: Vec<String>,
    }

    #[derive(Clone, Debug, PartialEq)]
    enum TestAction {
        Bump,
        Copy(String),
        DidCopy(String),
        Quit,
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            match self {
                TestAction::Bump => "Bump",
                TestAction::Copy(_) => "Copy",
                TestAction::DidCopy(_) => "DidCopy",
                TestAction::Quit => "Quit",
            }
        }
    }

    enum TestEffect {
        Copy(String),
    }

    fn reducer(state: &mut TestState, action: TestAction) -> DispatchResult<TestEffect> {
        match action {
            TestAction::Bump => {
                state.count += 1;
                DispatchResult::changed()
            }
            TestAction::Copy(text) => DispatchResult::effect(TestEffect::Copy(text)),
            TestAction::DidCopy(text) => {
                state.copied.push(text);
                DispatchResult::changed()
            }
            TestAction::Quit => DispatchResult::unchanged(),
        }
    }

    #[test]
    fn test_event_outcome_conversions() {
        let o: EventOutcome<TestAction> = TestAction::Bump.into();
        assert_eq!(o.actions, vec![TestAction::Bump]);
        assert!(!o.needs_render);

        let o: EventOutcome<TestAction> = None.into();
        assert!(o.is_ignored());

        let o: EventOutcome<TestAction> = EventOutcome::needs_render();
        assert!(!o.is_ignored());

        let o = EventOutcome::from_actions(vec![TestAction::Bump, TestAction::Quit]).with_render();
        assert_eq!(o.actions.len(), 2);
        assert!(o.needs_render);
    }

    #[tokio::test]
    async fn test_run_with_events_dispatches_and_runs_effects() {
        let mut runtime = EffectRuntime::new(TestState::default(), reducer);
        let mut terminal = Terminal::new(TestBackend::new(20, 3)).unwrap();
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        event_tx.send(RawEvent::Key(char_key('c'))).unwrap();

        let mut renders = 0;
        runtime
            .run_with_events(
                &mut terminal,
                event_rx,
                |_frame, _area, _state| renders += 1,
                |event, _state: &TestState| match event {
                    EventKind::Key(_) => EventOutcome::from_actions([
                        TestAction::Bump,
                        TestAction::Copy("#BEF264".into()),
                    ]),
                    _ => EventOutcome::ignored(),
                },
                |action| *action == TestAction::Quit,
                |effect, ctx| match effect {
                    TestEffect::Copy(text) => {
                        ctx.emit(TestAction::DidCopy(text));
                        ctx.emit(TestAction::Quit);
                    }
                },
            )
            .await
            .unwrap();

        assert_eq!(runtime.state().count, 1);
        assert_eq!(runtime.state().copied, vec!["#BEF264".to_string()]);
        assert!(renders >= 1);
        assert!(runtime.tasks().is_empty());
    }
}
