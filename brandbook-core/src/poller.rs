//! Crossterm event polling on a background task

use crate::event::EventKind;
use crossterm::event::{self, KeyEventKind, MouseEventKind};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Upper bound on events forwarded per poll cycle so rendering is never starved.
const MAX_EVENTS_PER_BATCH: usize = 20;

/// Raw event from crossterm before processing
#[derive(Debug)]
pub enum RawEvent {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize(u16, u16),
}

impl RawEvent {
    /// Convert a crossterm event, dropping kinds the brand book ignores
    ///
    /// Key releases and repeats are dropped (they are only reported on
    /// terminals with the kitty protocol enabled, and would double-fire).
    pub fn from_crossterm(evt: event::Event) -> Option<Self> {
        match evt {
            event::Event::Key(key) if key.kind == KeyEventKind::Press => Some(RawEvent::Key(key)),
            event::Event::Mouse(mouse) => Some(RawEvent::Mouse(mouse)),
            event::Event::Resize(w, h) => Some(RawEvent::Resize(w, h)),
            _ => None,
        }
    }
}

/// Spawn the event polling task with cancellation support
///
/// # Arguments
/// * `tx` - Channel to send raw events
/// * `poll_timeout` - Timeout for each poll operation
/// * `loop_sleep` - Sleep duration between poll cycles
/// * `cancel_token` - Token to cancel the polling task
pub fn spawn_event_poller(
    tx: mpsc::UnboundedSender<RawEvent>,
    poll_timeout: Duration,
    loop_sleep: Duration,
    cancel_token: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => {
                    info!("Event poller cancelled, draining buffer");
                    while event::poll(Duration::ZERO).unwrap_or(false) {
                        let _ = event::read();
                    }
                    break;
                }
                _ = tokio::time::sleep(loop_sleep) => {
                    let mut events_processed = 0;
                    while events_processed < MAX_EVENTS_PER_BATCH
                        && event::poll(poll_timeout).unwrap_or(false)
                    {
                        events_processed += 1;
                        let Ok(evt) = event::read() else {
                            continue;
                        };
                        if let Some(raw) = RawEvent::from_crossterm(evt) {
                            if tx.send(raw).is_err() {
                                debug!("Event channel closed, stopping poller");
                                return;
                            }
                        }
                    }
                }
            }
        }
    })
}

/// Process a raw event into an EventKind
///
/// Wheel motion becomes [`EventKind::Scroll`] with `delta` 1 for down and
/// -1 for up; every other mouse event passes through unchanged.
pub fn process_raw_event(raw: RawEvent) -> EventKind {
    match raw {
        RawEvent::Key(key) => EventKind::Key(key),
        RawEvent::Mouse(mouse) => match mouse.kind {
            MouseEventKind::ScrollDown => EventKind::Scroll {
                column: mouse.column,
                row: mouse.row,
                delta: 1,
            },
            MouseEventKind::ScrollUp => EventKind::Scroll {
                column: mouse.column,
                row: mouse.row,
                delta: -1,
            },
            _ => EventKind::Mouse(mouse),
        },
        RawEvent::Resize(w, h) => EventKind::Resize(w, h),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers, MouseEvent};

    fn key_with_kind(kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn test_from_crossterm_filters_releases() {
        let press = event::Event::Key(key_with_kind(KeyEventKind::Press));
        assert!(matches!(
            RawEvent::from_crossterm(press),
            Some(RawEvent::Key(_))
        ));

        let release = event::Event::Key(key_with_kind(KeyEventKind::Release));
        assert!(RawEvent::from_crossterm(release).is_none());

        assert!(RawEvent::from_crossterm(event::Event::FocusGained).is_none());
        assert!(matches!(
            RawEvent::from_crossterm(event::Event::Resize(100, 40)),
            Some(RawEvent::Resize(100, 40))
        ));
    }

    #[test]
    fn test_process_raw_event_key() {
        let kind = process_raw_event(RawEvent::Key(key_with_kind(KeyEventKind::Press)));
        assert!(matches!(kind, EventKind::Key(_)));
    }

    #[test]
    fn test_process_raw_event_scroll() {
        let scroll_down = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 10,
            row: 20,
            modifiers: KeyModifiers::NONE,
        };

        let kind = process_raw_event(RawEvent::Mouse(scroll_down));
        match kind {
            EventKind::Scroll { column, row, delta } => {
                assert_eq!(column, 10);
                assert_eq!(row, 20);
                assert_eq!(delta, 1);
            }
            _ => panic!("Expected Scroll event"),
        }

        let scroll_up = MouseEvent {
            kind: MouseEventKind::ScrollUp,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert!(matches!(
            process_raw_event(RawEvent::Mouse(scroll_up)),
            EventKind::Scroll { delta: -1, .. }
        ));
    }

    #[test]
    fn test_process_raw_event_resize() {
        let kind = process_raw_event(RawEvent::Resize(80, 24));
        assert!(matches!(kind, EventKind::Resize(80, 24)));
    }
}
