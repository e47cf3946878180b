use log::{debug, warn};
use yew::prelude::*;

use crate::config;
use crate::storage::{BrowserStorage, KeyValueStore};
use crate::timers::{BrowserTimers, TimerHandle, TimerHost};

/// Unreadable storage, or an empty value under the key, counts as a first visit.
pub fn has_visited(store: &impl KeyValueStore) -> bool {
    match store.get(config::VISIT_FLAG_KEY) {
        Ok(value) => matches!(value.as_deref(), Some(v) if !v.is_empty()),
        Err(e) => {
            warn!("Treating visitor as new: {}", e);
            false
        }
    }
}

pub fn mark_visited(store: &impl KeyValueStore) {
    if let Err(e) = store.set(config::VISIT_FLAG_KEY, config::VISIT_FLAG_VALUE) {
        warn!("Could not persist visit flag: {}", e);
    }
}

/// One mount of the first-visit welcome modal.
///
/// Opening reads the visit flag; on a first visit it writes the flag and
/// schedules `dismiss` after [`config::WELCOME_DISMISS_MS`]. Closing (or
/// dropping) cancels a dismissal that has not fired yet, so `dismiss` never
/// runs against a torn-down view.
pub struct WelcomeGate {
    shown: bool,
    timer: Option<TimerHandle>,
}

impl WelcomeGate {
    pub fn open(
        store: &impl KeyValueStore,
        timers: &impl TimerHost,
        dismiss: impl FnOnce() + 'static,
    ) -> Self {
        if has_visited(store) {
            debug!("Returning visitor, skipping welcome modal");
            return Self {
                shown: false,
                timer: None,
            };
        }

        mark_visited(store);
        let timer = timers.schedule(config::WELCOME_DISMISS_MS, Box::new(dismiss));
        Self {
            shown: true,
            timer: Some(timer),
        }
    }

    pub fn shown(&self) -> bool {
        self.shown
    }

    pub fn close(&mut self) {
        if let Some(timer) = self.timer.as_mut() {
            if timer.cancel() {
                debug!("Welcome modal timer cancelled");
            }
        }
    }
}

impl Drop for WelcomeGate {
    fn drop(&mut self) {
        self.close();
    }
}

/// Whether the welcome modal is currently up. Runs the gate once per mount
/// against the browser's localStorage.
#[hook]
pub fn use_welcome_gate() -> bool {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let dismiss = visible.clone();
                let mut gate = WelcomeGate::open(&BrowserStorage, &BrowserTimers, move || {
                    dismiss.set(false)
                });
                visible.set(gate.shown());
                move || gate.close()
            },
            (),
        );
    }

    *visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStorage;
    use crate::timers::manual::ManualTimers;
    use std::cell::Cell;
    use std::rc::Rc;

    fn visibility() -> (Rc<Cell<bool>>, impl FnOnce() + 'static) {
        let visible = Rc::new(Cell::new(true));
        let handle = visible.clone();
        (visible, move || handle.set(false))
    }

    #[test]
    fn first_visit_shows_modal_then_dismisses_after_three_seconds() {
        let store = MemoryStorage::new();
        let timers = ManualTimers::new();
        let (visible, dismiss) = visibility();

        let gate = WelcomeGate::open(&store, &timers, dismiss);
        assert!(gate.shown());
        assert!(visible.get());
        assert_eq!(store.entry("hasVisited").as_deref(), Some("true"));

        timers.advance(2999);
        assert!(visible.get());
        timers.advance(1);
        assert!(!visible.get());
        assert_eq!(store.entry("hasVisited").as_deref(), Some("true"));
    }

    #[test]
    fn returning_visitor_never_sees_modal() {
        let store = MemoryStorage::with_entry("hasVisited", "true");
        let timers = ManualTimers::new();

        for _ in 0..5 {
            let gate = WelcomeGate::open(&store, &timers, || {});
            assert!(!gate.shown());
        }
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn modal_is_shown_exactly_once_across_mounts() {
        let store = MemoryStorage::new();
        let timers = ManualTimers::new();

        let shown: Vec<bool> = (0..4)
            .map(|_| WelcomeGate::open(&store, &timers, || {}).shown())
            .collect();
        assert_eq!(shown, vec![true, false, false, false]);
    }

    #[test]
    fn unmount_before_timeout_cancels_dismissal() {
        let store = MemoryStorage::new();
        let timers = ManualTimers::new();
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();

        let mut gate = WelcomeGate::open(&store, &timers, move || flag.set(true));
        timers.advance(1000);
        gate.close();
        gate.close();
        timers.advance(10_000);

        assert!(!fired.get());
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn dropping_the_gate_cancels_dismissal() {
        let store = MemoryStorage::new();
        let timers = ManualTimers::new();
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();

        drop(WelcomeGate::open(&store, &timers, move || flag.set(true)));
        timers.advance(5000);
        assert!(!fired.get());
    }

    #[test]
    fn empty_flag_counts_as_first_visit() {
        let store = MemoryStorage::with_entry("hasVisited", "");
        let timers = ManualTimers::new();

        let gate = WelcomeGate::open(&store, &timers, || {});
        assert!(gate.shown());
        assert_eq!(store.entry("hasVisited").as_deref(), Some("true"));
        assert!(has_visited(&store));
    }

    #[test]
    fn storage_failure_fails_open() {
        let store = MemoryStorage::unavailable();
        let timers = ManualTimers::new();
        let (visible, dismiss) = visibility();

        let gate = WelcomeGate::open(&store, &timers, dismiss);
        assert!(gate.shown());
        timers.advance(u64::from(config::WELCOME_DISMISS_MS));
        assert!(!visible.get());

        assert!(!has_visited(&store));
    }
}
