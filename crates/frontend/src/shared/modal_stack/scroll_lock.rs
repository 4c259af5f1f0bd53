//! Page scroll suppression tied to modal stack occupancy.

use std::sync::{Arc, Mutex};

use leptos::prelude::*;

use super::service::ModalStackService;

/// Something whose scrolling can be switched off while dialogs are open.
pub trait ScrollTarget {
    fn disable_scroll(&self);
    fn enable_scroll(&self);
}

/// `document.body`, via its inline `overflow` style.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyScroll;

impl BodyScroll {
    fn set_overflow(value: &str) {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            return;
        };
        if let Err(err) = body.style().set_property("overflow", value) {
            log::warn!("failed to set body overflow to {value:?}: {err:?}");
        }
    }
}

impl ScrollTarget for BodyScroll {
    fn disable_scroll(&self) {
        Self::set_overflow("hidden");
    }

    fn enable_scroll(&self) {
        Self::set_overflow("");
    }
}

/// Edge-triggered lock: touches the target only when occupancy flips.
#[derive(Debug)]
pub struct ScrollLock<T: ScrollTarget> {
    target: T,
    locked: bool,
}

impl<T: ScrollTarget> ScrollLock<T> {
    pub fn new(target: T) -> Self {
        Self {
            target,
            locked: false,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Reconcile with the current stack depth.
    pub fn sync(&mut self, depth: usize) {
        match (self.locked, depth > 0) {
            (false, true) => {
                self.target.disable_scroll();
                self.locked = true;
            }
            (true, false) => {
                self.target.enable_scroll();
                self.locked = false;
            }
            _ => {}
        }
    }

    /// Restore scrolling on teardown, whatever the stack still holds.
    pub fn release(&mut self) {
        if self.locked {
            self.target.enable_scroll();
            self.locked = false;
        }
    }
}

/// Keep `target` unscrollable while `modals` holds any entry.
///
/// Scrolling is restored when the calling owner is cleaned up, even if
/// dialogs are still open.
pub fn install_scroll_lock<T>(modals: ModalStackService, target: T)
where
    T: ScrollTarget + Send + 'static,
{
    let lock = Arc::new(Mutex::new(ScrollLock::new(target)));
    if let Ok(mut lock) = lock.lock() {
        lock.sync(modals.len_untracked());
    }

    Effect::new({
        let lock = Arc::clone(&lock);
        move |_| {
            let depth = modals.len();
            if let Ok(mut lock) = lock.lock() {
                lock.sync(depth);
            }
        }
    });

    on_cleanup(move || {
        if let Ok(mut lock) = lock.lock() {
            lock.release();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Call {
        Disable,
        Enable,
    }

    #[derive(Clone, Default)]
    struct Recorder {
        calls: Arc<Mutex<Vec<Call>>>,
    }

    impl Recorder {
        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        /// Scroll state implied by the last call; unlocked before any call.
        fn scroll_enabled(&self) -> bool {
            self.calls.lock().unwrap().last() != Some(&Call::Disable)
        }
    }

    impl ScrollTarget for Recorder {
        fn disable_scroll(&self) {
            self.calls.lock().unwrap().push(Call::Disable);
        }

        fn enable_scroll(&self) {
            self.calls.lock().unwrap().push(Call::Enable);
        }
    }

    #[test]
    fn test_locks_once_on_first_open() {
        let rec = Recorder::default();
        let mut lock = ScrollLock::new(rec.clone());
        lock.sync(1);
        lock.sync(2);
        lock.sync(3);
        assert_eq!(rec.calls(), vec![Call::Disable]);
        assert!(lock.is_locked());
    }

    #[test]
    fn test_unlocks_when_stack_empties() {
        let rec = Recorder::default();
        let mut lock = ScrollLock::new(rec.clone());
        lock.sync(1);
        lock.sync(2);
        lock.sync(1);
        lock.sync(0);
        assert_eq!(rec.calls(), vec![Call::Disable, Call::Enable]);
        assert!(rec.scroll_enabled());
    }

    #[test]
    fn test_no_calls_while_empty() {
        let rec = Recorder::default();
        let mut lock = ScrollLock::new(rec.clone());
        lock.sync(0);
        lock.sync(0);
        assert!(rec.calls().is_empty());
    }

    #[test]
    fn test_final_state_follows_final_depth() {
        let sequences: [&[usize]; 4] = [
            &[1, 0, 1, 0, 1, 2, 1, 0],
            &[1, 0, 1, 0, 1],
            &[2, 3, 0, 0, 4],
            &[0, 1, 0],
        ];
        for depths in sequences {
            let rec = Recorder::default();
            let mut lock = ScrollLock::new(rec.clone());
            for depth in depths {
                lock.sync(*depth);
            }
            let last = *depths.last().unwrap();
            assert_eq!(rec.scroll_enabled(), last == 0, "depths {depths:?}");
            assert_eq!(lock.is_locked(), last > 0);
        }
    }

    #[test]
    fn test_release_restores_scroll_when_torn_down_open() {
        let rec = Recorder::default();
        let mut lock = ScrollLock::new(rec.clone());
        lock.sync(2);
        lock.release();
        assert!(rec.scroll_enabled());
        assert!(!lock.is_locked());

        // second release is harmless
        lock.release();
        assert_eq!(rec.calls(), vec![Call::Disable, Call::Enable]);
    }

    #[test]
    fn test_release_when_unlocked_does_nothing() {
        let rec = Recorder::default();
        let mut lock = ScrollLock::new(rec.clone());
        lock.release();
        assert!(rec.calls().is_empty());
    }

    #[test]
    fn test_owner_cleanup_with_open_dialogs_restores_scroll() {
        let _ = any_spawner::Executor::init_futures_executor();
        let owner = Owner::new();
        owner.set();
        let modals = ModalStackService::new();
        modals.open_modal(|| ().into_any());
        modals.open_modal(|| ().into_any());

        let rec = Recorder::default();
        let host = owner.child();
        host.with(|| install_scroll_lock(modals, rec.clone()));
        assert_eq!(rec.calls(), vec![Call::Disable]);

        host.cleanup();
        assert_eq!(rec.calls(), vec![Call::Disable, Call::Enable]);
        assert_eq!(modals.len(), 2);
    }

    #[test]
    fn test_install_on_empty_stack_leaves_scroll_alone() {
        let _ = any_spawner::Executor::init_futures_executor();
        let owner = Owner::new();
        owner.set();
        let modals = ModalStackService::new();

        let rec = Recorder::default();
        let host = owner.child();
        host.with(|| install_scroll_lock(modals, rec.clone()));
        host.cleanup();
        assert!(rec.calls().is_empty());
    }
}
