use dashboard_core::{EntityKind, UserCard};
use leptos::prelude::*;

use crate::state::AppState;

fn user_card(state: AppState, card: UserCard) -> impl IntoView {
    let id = card.id;
    view! {
        <article class="card user-card">
            <div class="avatar">{card.initial.clone()}</div>
            <h3>{card.name.clone()}</h3>
            <p class="handle">{card.handle.clone()}</p>
            <p class="email">{card.email.clone()}</p>
            <p class="post-count">{card.post_count_label()}</p>
            <div class="card-actions">
                <button on:click=move |_| state.apply(|d| d.open_user_form(Some(id)))>"Edit"</button>
                <button
                    class="danger"
                    on:click=move |_| state.apply(|d| d.open_delete_dialog(EntityKind::User, id))
                >
                    "Delete"
                </button>
            </div>
        </article>
    }
}

#[component]
pub(crate) fn UsersPanel(state: AppState) -> impl IntoView {
    let cards = move || state.dashboard.with(|d| d.user_cards());

    view! {
        <div class="panel-header">
            <h2>"Users"</h2>
            <button class="primary" on:click=move |_| state.apply(|d| d.open_user_form(None))>
                "+ Add User"
            </button>
        </div>
        <div class="grid">
            {move || cards().into_iter().map(|card| user_card(state, card)).collect_view()}
        </div>
    }
}
