//! Diary pages. Every destructive or authoring action goes through the auth
//! guard and the modal stack.

pub mod composer;
pub mod detail;
pub mod list;
pub mod storage;

use leptos::prelude::*;

use crate::shared::modal::{Modal, ModalActions, ModalVariant};
use crate::shared::modal_stack::ModalStackService;

/// Push the "delete this diary?" confirmation.
///
/// Confirm deletes, pops the confirmation and then runs `on_deleted`; cancel
/// only pops. A failed delete still pops and is logged.
pub fn open_delete_confirm(modals: ModalStackService, id: i64, on_deleted: Callback<()>) {
    modals.open_modal(move || {
        let confirm = Callback::new(move |_| {
            let result = storage::delete(id);
            modals.close_modal();
            match result {
                Ok(()) => on_deleted.run(()),
                Err(err) => log::error!("failed to delete diary {id}: {err}"),
            }
        });
        let cancel = Callback::new(move |_| modals.close_modal());
        view! {
            <Modal
                variant=ModalVariant::Danger
                actions=ModalActions::Dual
                title="Delete diary"
                message="Are you sure you want to delete this diary?"
                confirm_text="Delete"
                cancel_text="Cancel"
                on_confirm=confirm
                on_cancel=cancel
            />
        }
        .into_any()
    });
}
