use dashboard_core::{NO_AUTHOR, PostField, author_option_label, forms::CANCEL_LABEL};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::components::modal::ModalShell;
use crate::state::AppState;

fn field_error(state: AppState, field: PostField) -> Option<&'static str> {
    state
        .dashboard
        .with(|d| d.post_form().and_then(|form| form.errors().get(field.as_str())))
}

fn controls_disabled(state: AppState) -> bool {
    state
        .dashboard
        .with(|d| d.post_form().map(|form| !form.controls_enabled(false)))
        .unwrap_or(true)
}

#[component]
pub(crate) fn PostFormModal(state: AppState) -> impl IntoView {
    let is_open = move || state.dashboard.with(|d| d.is_post_modal_open());
    let title = Signal::derive(move || {
        state
            .dashboard
            .with(|d| d.post_modal().map(|modal| modal.title().to_string()))
            .unwrap_or_default()
    });
    let selected_author = move || {
        state
            .dashboard
            .with(|d| d.post_form().map(|form| form.draft().user_id))
            .unwrap_or(NO_AUTHOR)
            .to_string()
    };
    let post_title = move || {
        state
            .dashboard
            .with(|d| d.post_form().map(|form| form.draft().title.clone()))
            .unwrap_or_default()
    };
    let authors = move || {
        state.dashboard.with(|d| {
            d.store()
                .users()
                .iter()
                .map(|user| (user.id, author_option_label(user)))
                .collect::<Vec<_>>()
        })
    };
    let submit_label = move || {
        state
            .dashboard
            .with(|d| d.post_form().map(|form| form.submit_label(false)))
            .unwrap_or_default()
    };
    let on_close = Callback::new(move |_| state.dashboard.update(|d| d.close_all()));

    let set_field = move |field: PostField, raw: String| {
        state.dashboard.update(|d| {
            if let Some(form) = d.post_form_mut() {
                form.set_field(field, &raw);
            }
        });
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        state.apply(|d| d.submit_post_form());
    };

    let author_error = move || field_error(state, PostField::UserId);
    let title_error = move || field_error(state, PostField::Title);

    view! {
        <Show when=is_open>
            <ModalShell title=title on_close=on_close>
                <form class="entity-form" on:submit=on_submit>
                    <div class="field">
                        <label>"Author *"</label>
                        <select
                            name="userId"
                            class:invalid=move || author_error().is_some()
                            disabled=move || controls_disabled(state)
                            prop:value=selected_author
                            on:change=move |ev| set_field(PostField::UserId, event_target_value(&ev))
                        >
                            <option value=NO_AUTHOR.to_string()>"Select a user"</option>
                            {move || {
                                authors()
                                    .into_iter()
                                    .map(|(id, label)| view! { <option value=id.to_string()>{label}</option> })
                                    .collect_view()
                            }}
                        </select>
                        <Show when=move || author_error().is_some()>
                            <p class="field-error">{move || author_error().unwrap_or_default()}</p>
                        </Show>
                    </div>

                    <div class="field">
                        <label>"Title *"</label>
                        <input
                            type="text"
                            name="title"
                            placeholder="Enter post title"
                            class:invalid=move || title_error().is_some()
                            disabled=move || controls_disabled(state)
                            prop:value=post_title
                            on:input=move |ev| set_field(PostField::Title, event_target_value(&ev))
                        />
                        <Show when=move || title_error().is_some()>
                            <p class="field-error">{move || title_error().unwrap_or_default()}</p>
                        </Show>
                    </div>

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
