use leptos::prelude::*;

use crate::services::dates::DatePair;
use crate::web::templates::ModalView;

use super::button::{Button, ButtonVariant};
use super::input::DateRangeInputs;

#[component]
pub fn ReserveModal(
    modal: Signal<Option<ModalView>>,
    pair: RwSignal<DatePair>,
    #[prop(into)] login_href: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_open = move || modal.with(Option::is_some);
    let title = move || {
        modal.with(|m| m.as_ref().map(|m| m.title.clone()).unwrap_or_default())
    };
    let hide_hint = move || !modal.with(|m| m.as_ref().is_some_and(|m| m.auth_hint_visible));
    let submitting = Signal::derive(move || modal.with(|m| m.as_ref().is_some_and(|m| m.submitting)));

    view! {
        <div
            id="modal"
            class="modal"
            class:open=is_open
            hidden=move || !is_open()
            role="dialog"
            aria-modal="true"
            aria-labelledby="carTitle"
        >
            <div class="modal__box">
                <header class="modal__head">
                    <h3 id="carTitle">{title}</h3>
                    <button
                        id="btnClose"
                        type="button"
                        class="icon-btn"
                        aria-label="Close"
                        on:click=move |_| on_cancel.run(())
                    >
                        "✕"
                    </button>
                </header>
                <div class="modal__body">
                    <DateRangeInputs pair start_id="mStart" end_id="mEnd"/>
                    <p id="authHint" class="hint" hidden=hide_hint>
                        "Please "
                        <a href=login_href>"sign in"</a>
                        " to complete your reservation."
                    </p>
                </div>
                <footer class="modal__foot">
                    <Button id="btnCancel" variant=ButtonVariant::Ghost on_click=on_cancel>
                        "Cancel"
                    </Button>
                    <Button
                        id="btnConfirm"
                        loading=submitting
                        loading_text="Reserving…"
                        on_click=on_confirm
                    >
                        "Confirm reservation"
                    </Button>
                </footer>
            </div>
        </div>
    }
}
