use std::time::Duration;

use brandbook_core::{EffectContext, TaskKey};

use crate::action::Action;
use crate::clipboard::{self, ClipboardBackend};
use crate::element::EditableElementRef;

/// Task key of the debounced inspector open
pub const INSPECTOR_OPEN_TASK: &str = "inspector_open";
/// Task key of the copied-feedback timer
pub const COPIED_CLEAR_TASK: &str = "copied_color_clear";

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Select the element once requests stop arriving
    ScheduleInspectorOpen(EditableElementRef),
    /// Drop a pending open, if any
    CancelInspectorOpen,
    CopyToClipboard {
        text: String,
        label: String,
    },
    /// Clear the copied feedback after a delay
    ScheduleCopiedClear,
}

/// Timings and backends used by [`handle_effect`]
#[derive(Debug, Clone)]
pub struct EffectSettings {
    pub open_debounce: Duration,
    pub copied_feedback: Duration,
    pub clipboard: ClipboardBackend,
}

impl Default for EffectSettings {
    fn default() -> Self {
        Self {
            open_debounce: Duration::from_millis(50),
            copied_feedback: Duration::from_millis(2000),
            clipboard: ClipboardBackend::System,
        }
    }
}

pub fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>, settings: &EffectSettings) {
    match effect {
        Effect::ScheduleInspectorOpen(element) => {
            tracing::debug!(element_id = %element.id, "scheduling inspector open");
            ctx.tasks().debounce(INSPECTOR_OPEN_TASK, settings.open_debounce, async move {
                Action::ElementSelect(Some(element))
            });
        }
        Effect::CancelInspectorOpen => {
            ctx.tasks().cancel(&TaskKey::new(INSPECTOR_OPEN_TASK));
        }
        Effect::CopyToClipboard { text, label } => {
            let backend = settings.clipboard;
            ctx.tasks().spawn("clipboard_copy", async move {
                match clipboard::copy(&text, backend) {
                    Ok(()) => Action::ClipboardDidCopy(label),
                    Err(e) => Action::ClipboardDidError(e.to_string()),
                }
            });
        }
        Effect::ScheduleCopiedClear => {
            ctx.tasks()
                .debounce(COPIED_CLEAR_TASK, settings.copied_feedback, async {
                    Action::CopiedColorSet(None)
                });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementKind;
    use crate::reducer::reducer;
    use crate::state::BrandBookState;
    use brandbook_core::{TaskManager, TestHarness};

    fn settings() -> EffectSettings {
        EffectSettings {
            open_debounce: Duration::from_millis(30),
            copied_feedback: Duration::from_millis(40),
            clipboard: ClipboardBackend::Osc52,
        }
    }

    fn card(id: &str) -> EditableElementRef {
        EditableElementRef::new(ElementKind::Component, id, "glass-card p-4")
    }

    fn run(
        tasks: &mut TaskManager<Action>,
        harness: &TestHarness<BrandBookState, Action>,
        effects: Vec<Effect>,
    ) {
        let tx = harness.sender();
        let mut ctx = EffectContext::new(&tx, tasks);
        for effect in effects {
            handle_effect(effect, &mut ctx, &settings());
        }
    }

    #[tokio::test]
    async fn test_open_requests_coalesce_to_last() {
        let mut harness = TestHarness::<BrandBookState, Action>::default();
        let mut tasks = TaskManager::new(harness.sender());

        run(
            &mut tasks,
            &harness,
            vec![
                Effect::ScheduleInspectorOpen(card("card-1")),
                Effect::ScheduleInspectorOpen(card("card-2")),
            ],
        );

        let action = harness
            .next_emitted(Duration::from_millis(200))
            .await
            .expect("debounced open");
        assert_eq!(action, Action::ElementSelect(Some(card("card-2"))));
        assert!(harness.next_emitted(Duration::from_millis(60)).await.is_none());

        reducer(&mut harness.state, action);
        assert!(harness.state.inspector_open());
        assert_eq!(harness.state.selected_element, Some(card("card-2")));
    }

    #[tokio::test]
    async fn test_cancel_drops_pending_open() {
        let mut harness = TestHarness::<BrandBookState, Action>::default();
        let mut tasks = TaskManager::new(harness.sender());

        run(
            &mut tasks,
            &harness,
            vec![
                Effect::ScheduleInspectorOpen(card("card-1")),
                Effect::CancelInspectorOpen,
            ],
        );

        assert!(harness.next_emitted(Duration::from_millis(80)).await.is_none());
        assert!(!tasks.is_running(&TaskKey::new(INSPECTOR_OPEN_TASK)));
    }

    #[tokio::test]
    async fn test_copied_feedback_clears_after_delay() {
        let mut harness = TestHarness::<BrandBookState, Action>::default();
        harness.state.copied_color = Some("Primary".into());
        let mut tasks = TaskManager::new(harness.sender());

        run(&mut tasks, &harness, vec![Effect::ScheduleCopiedClear]);

        assert!(harness.drain_emitted().is_empty());
        let action = harness
            .next_emitted(Duration::from_millis(200))
            .await
            .expect("copied clear");
        assert_eq!(action, Action::CopiedColorSet(None));

        reducer(&mut harness.state, action);
        assert!(harness.state.copied_color.is_none());
    }

    #[tokio::test]
    async fn test_dropping_tasks_cancels_timers() {
        let mut harness = TestHarness::<BrandBookState, Action>::default();
        let mut tasks = TaskManager::new(harness.sender());

        run(&mut tasks, &harness, vec![Effect::ScheduleInspectorOpen(card("card-1"))]);
        drop(tasks);

        assert!(harness.next_emitted(Duration::from_millis(80)).await.is_none());
    }
}
