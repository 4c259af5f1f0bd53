use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;

use super::stack::{ModalId, ModalStack, StackEntry};

/// Renderable dialog body. Built lazily by `ModalHost`, never inspected by the stack.
pub type ModalContent = Arc<dyn Fn() -> AnyView + Send + Sync>;

/// Session-wide modal stack.
///
/// - `open_modal` pushes, `close_modal` pops the most recent entry
/// - closing an empty stack is a no-op
/// - collapsing N levels is N calls to `close_modal` from the same handler
///
/// Construct once in the app root and hand out through context.
#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<ModalStack<ModalContent>>,
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(ModalStack::new()),
        }
    }

    /// Push a dialog on top of whatever is open.
    pub fn open_modal<F>(&self, content: F)
    where
        F: Fn() -> AnyView + Send + Sync + 'static,
    {
        let content = Arc::new(content) as ModalContent;
        match self.stack.try_update(|s| {
            let id: ModalId = s.push(content);
            (id, s.len())
        }) {
            Some((id, depth)) => log::debug!("modal {} opened, depth {}", id.value(), depth),
            None => log::warn!("open_modal on a disposed modal stack ignored"),
        }
    }

    /// Pop the most recently opened dialog.
    pub fn close_modal(&self) {
        if self.stack.with_untracked(|s| s.is_empty()) {
            log::debug!("close_modal on empty stack ignored");
            return;
        }
        self.stack.update(|s| {
            if let Some(entry) = s.pop() {
                log::debug!("modal {} closed, depth {}", entry.id.value(), s.len());
            }
        });
    }

    /// Pop once the current DOM event has finished dispatching.
    ///
    /// For handlers attached to the frame being removed: the pop runs on the
    /// microtask queue, so it still lands before the next paint.
    pub fn close_modal_after_dispatch(&self) {
        let svc = *self;
        spawn_local(async move {
            svc.close_modal();
        });
    }

    pub fn is_open(&self) -> bool {
        self.stack.with(|s| !s.is_empty())
    }

    pub fn len(&self) -> usize {
        self.stack.with(|s| s.len())
    }

    pub fn is_empty(&self) -> bool {
        !self.is_open()
    }

    /// Whether `id` is the topmost entry. Tracked.
    pub fn is_top(&self, id: ModalId) -> bool {
        self.stack.with(|s| s.is_top(id))
    }

    pub(super) fn len_untracked(&self) -> usize {
        self.stack.with_untracked(|s| s.len())
    }

    pub(super) fn is_open_untracked(&self) -> bool {
        self.stack.with_untracked(|s| !s.is_empty())
    }

    /// Current entries bottom-to-top with their stacking index. Tracked.
    pub(super) fn layers(&self) -> Vec<(i32, StackEntry<ModalContent>)> {
        self.stack
            .with(|s| s.layers().map(|(z, entry)| (z, entry.clone())).collect())
    }
}

/// Fetch the app-wide `ModalStackService`.
pub fn use_modal_stack() -> ModalStackService {
    use_context::<ModalStackService>()
        .expect("ModalStackService not provided in context (provide it in app root)")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank() -> AnyView {
        ().into_any()
    }

    fn service() -> (Owner, ModalStackService) {
        let owner = Owner::new();
        owner.set();
        (owner, ModalStackService::new())
    }

    fn top_id(svc: &ModalStackService) -> Option<ModalId> {
        svc.layers().last().map(|(_, entry)| entry.id)
    }

    #[test]
    fn test_close_on_empty_is_noop() {
        let (_owner, svc) = service();
        svc.close_modal();
        assert_eq!(svc.len(), 0);
        assert!(!svc.is_open());
        assert!(svc.is_empty());
    }

    #[test]
    fn test_depth_tracks_opens_and_closes() {
        let (_owner, svc) = service();
        svc.open_modal(blank);
        svc.open_modal(blank);
        assert_eq!(svc.len(), 2);
        assert!(svc.is_open());

        svc.close_modal();
        assert_eq!(svc.len(), 1);
        svc.close_modal();
        assert_eq!(svc.len(), 0);
        svc.close_modal();
        assert_eq!(svc.len(), 0);
        assert!(!svc.is_open());
    }

    #[test]
    fn test_discard_collapses_composer_and_confirm() {
        let (_owner, svc) = service();
        svc.open_modal(blank); // composer
        svc.open_modal(blank); // discard confirmation

        svc.close_modal();
        svc.close_modal();
        assert!(!svc.is_open());
    }

    #[test]
    fn test_keep_writing_returns_to_composer() {
        let (_owner, svc) = service();
        svc.open_modal(blank);
        let composer = top_id(&svc);
        svc.open_modal(blank);
        assert_ne!(top_id(&svc), composer);

        svc.close_modal();
        assert_eq!(svc.len(), 1);
        assert_eq!(top_id(&svc), composer);
        assert!(composer.is_some_and(|id| svc.is_top(id)));
    }

    #[test]
    fn test_layers_increase_through_service() {
        let (_owner, svc) = service();
        for _ in 0..3 {
            svc.open_modal(blank);
        }
        let z: Vec<i32> = svc.layers().into_iter().map(|(z, _)| z).collect();
        assert!(z.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
