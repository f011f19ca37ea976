use dashboard_core::{FetchStatus, Tab, fetch_all};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiSource;
use crate::components::confirm_dialog::DeleteDialog;
use crate::components::post_form::PostFormModal;
use crate::components::posts_panel::PostsPanel;
use crate::components::user_form::UserFormModal;
use crate::components::users_panel::UsersPanel;
use crate::state::AppState;

fn load_data(state: AppState) {
    state.clear_error();
    state.dashboard.update(|dashboard| dashboard.reload());

    spawn_local(async move {
        let result = fetch_all(&ApiSource).await;
        if let Err(err) = &result {
            web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(&format!(
                "dashboard load failed: {err}"
            )));
        }
        state.dashboard.update(|dashboard| dashboard.finish_load(result));
    });
}

#[component]
fn TabButton(state: AppState, tab: Tab) -> impl IntoView {
    let label = move || state.dashboard.with(|dashboard| dashboard.tab_label(tab));
    let class = move || {
        if state.dashboard.with(|dashboard| dashboard.tab() == tab) {
            "tab active"
        } else {
            "tab"
        }
    };

    view! {
        <button class=class on:click=move |_| state.dashboard.update(|d| d.set_tab(tab))>
            {label}
        </button>
    }
}

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();

    load_data(state);

    let is_loading =
        move || state.dashboard.with(|d| matches!(d.status(), FetchStatus::Loading));
    let failure = move || {
        state.dashboard.with(|d| match d.status() {
            FetchStatus::Failed { message } => Some(message.clone()),
            _ => None,
        })
    };
    let is_ready = move || state.dashboard.with(|d| d.is_ready());
    let on_users_tab = move || state.dashboard.with(|d| d.tab() == Tab::Users);

    let error_text = move || state.error.get().unwrap_or_default();

    view! {
        <main class="page">
            <section class="container">
                <Show when=is_loading>
                    <div class="loading">"Loading data..."</div>
                </Show>

                <Show when=move || failure().is_some()>
                    <div class="error-box">
                        <h2>"Error"</h2>
                        <p>{move || failure().unwrap_or_default()}</p>
                        <button on:click=move |_| load_data(state)>"Retry"</button>
                    </div>
                </Show>

                <Show when=is_ready>
                    <h1>"User Management Dashboard"</h1>

                    <Show when=move || state.error.get().is_some()>
                        <div class="error-banner">
                            <strong>"Ошибка: "</strong>
                            {error_text}
                        </div>
                    </Show>

                    <nav class="tabs">
                        <TabButton state=state tab=Tab::Users />
                        <TabButton state=state tab=Tab::Posts />
                    </nav>

                    <input
                        class="search"
                        placeholder=move || state.dashboard.with(|d| d.search_placeholder())
                        prop:value=move || state.dashboard.with(|d| d.search_term().to_string())
                        on:input=move |ev| {
                            let term = event_target_value(&ev);
                            state.dashboard.update(|d| d.set_search(term));
                        }
                    />

                    <Show
                        when=on_users_tab
                        fallback=move || view! { <PostsPanel state=state /> }
                    >
                        <UsersPanel state=state />
                    </Show>

                    <UserFormModal state=state />
                    <PostFormModal state=state />
                    <DeleteDialog state=state />
                </Show>
            </section>
        </main>
    }
}
