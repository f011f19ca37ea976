use dashboard_core::ConfirmDialog;
use leptos::prelude::*;

use crate::components::modal::ModalShell;
use crate::state::AppState;

/// Подтверждение удаления. Сам диалог не знает, что удаляет:
/// `confirm_delete` берёт цель из открытого окна дашборда.
#[component]
pub(crate) fn DeleteDialog(state: AppState) -> impl IntoView {
    let dialog = move || state.dashboard.with(|d| d.confirm_dialog());
    let read = move |f: fn(&ConfirmDialog) -> String| dialog().map(|d| f(&d)).unwrap_or_default();

    let disabled = move || !dialog().is_some_and(|d| d.buttons_enabled(false));

    let title = Signal::derive(move || read(|d| d.title().to_string()));
    let on_close = Callback::new(move |_| state.dashboard.update(|d| d.close_all()));

    view! {
        <Show when=move || dialog().is_some()>
            <ModalShell title=title on_close=on_close>
                <p class="confirm-message">{move || read(|d| d.message().to_string())}</p>
                <div class="form-actions">
                    <button type="button" disabled=disabled on:click=move |_| on_close.run(())>
                        {move || read(|d| d.cancel_text().to_string())}
                    </button>
                    <button
                        type="button"
                        disabled=disabled
                        class=move || read(|d| format!("confirm {}", d.severity()))
                        on:click=move |_| state.apply(|d| d.confirm_delete())
                    >
                        {move || read(|d| d.confirm_label(false).to_string())}
                    </button>
                </div>
            </ModalShell>
        </Show>
    }
}
