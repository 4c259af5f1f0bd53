//! Nested modal dialogs.
//!
//! `ModalStackService` owns an ordered stack of dialogs; `ModalHost` paints
//! every entry as its own overlay + backdrop layer and keeps page scrolling
//! disabled while the stack is non-empty.
//!
//! ```ignore
//! let modals = use_modal_stack();
//! modals.open_modal(move || view! { <ComposerDialog /> }.into_any());
//! // inside the composer: nest a confirmation
//! modals.open_modal(move || view! { <ConfirmDiscard /> }.into_any());
//! // "discard" collapses both levels
//! modals.close_modal();
//! modals.close_modal();
//! ```

mod host;
pub mod scroll_lock;
mod service;
pub mod stack;

pub use host::ModalHost;
pub use service::{use_modal_stack, ModalContent, ModalStackService};
pub use stack::{z_index_for, ModalId, ModalStack, StackEntry};
