use dashboard_core::{UserField, forms::CANCEL_LABEL};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::components::modal::ModalShell;
use crate::state::AppState;

fn field_label(field: UserField) -> &'static str {
    match field {
        UserField::Name => "Name *",
        UserField::Username => "Username *",
        UserField::Email => "Email *",
    }
}

fn controls_disabled(state: AppState) -> bool {
    state
        .dashboard
        .with(|d| d.user_form().map(|form| !form.controls_enabled(false)))
        .unwrap_or(true)
}

fn field_input(state: AppState, field: UserField) -> impl IntoView {
    let input_type = if field == UserField::Email { "email" } else { "text" };
    let value = move || {
        state
            .dashboard
            .with(|d| d.user_form().map(|form| form.value(field).to_string()))
            .unwrap_or_default()
    };
    let error = move || {
        state
            .dashboard
            .with(|d| d.user_form().and_then(|form| form.errors().get(field.as_str())))
    };

    view! {
        <div class="field">
            <label>{field_label(field)}</label>
            <input
                type=input_type
                name=field.as_str()
                class:invalid=move || error().is_some()
                disabled=move || controls_disabled(state)
                prop:value=value
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.dashboard.update(|d| {
                        if let Some(form) = d.user_form_mut() {
                            form.set_field(field, value);
                        }
                    });
                }
            />
            <Show when=move || error().is_some()>
                <p class="field-error">{move || error().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}

#[component]
pub(crate) fn UserFormModal(state: AppState) -> impl IntoView {
    let is_open = move || state.dashboard.with(|d| d.is_user_modal_open());
    let title = Signal::derive(move || {
        state
            .dashboard
            .with(|d| d.user_modal().map(|modal| modal.title().to_string()))
            .unwrap_or_default()
    });
    let submit_label = move || {
        state
            .dashboard
            .with(|d| d.user_form().map(|form| form.submit_label(false)))
            .unwrap_or_default()
    };
    let on_close = Callback::new(move |_| state.dashboard.update(|d| d.close_all()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        state.apply(|d| d.submit_user_form());
    };

    view! {
        <Show when=is_open>
            <ModalShell title=title on_close=on_close>
                <form class="entity-form" on:submit=on_submit>
                    {UserField::ALL.into_iter().map(|field| field_input(state, field)).collect_view()}
                    <div class="form-actions">
                        <button
                            type="button"
                            disabled=move || controls_disabled(state)
                            on:click=move |_| on_close.run(())
                        >
                            {CANCEL_LABEL}
                        </button>
                        <button
                            type="submit"
                            class="primary"
                            disabled=move || controls_disabled(state)
                        >
                            {submit_label}
                        </button>
                    </div>
                </form>
            </ModalShell>
        </Show>
    }
}
