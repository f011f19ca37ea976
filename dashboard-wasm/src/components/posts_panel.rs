use dashboard_core::{EntityKind, PostCard};
use leptos::prelude::*;

use crate::state::AppState;

fn post_card(state: AppState, card: PostCard) -> impl IntoView {
    let id = card.id;
    view! {
        <article class="card post-card">
            <div class="post-head">
                <h3>{card.title_preview.clone()}</h3>
                <span class="badge">{card.byline()}</span>
            </div>
            <div class="card-actions">
                <button on:click=move |_| state.apply(|d| d.open_post_form(Some(id)))>"Edit"</button>
                <button
                    class="danger"
                    on:click=move |_| state.apply(|d| d.open_delete_dialog(EntityKind::Post, id))
                >
                    "Delete"
                </button>
            </div>
        </article>
    }
}

#[component]
pub(crate) fn PostsPanel(state: AppState) -> impl IntoView {
    let cards = move || state.dashboard.with(|d| d.post_cards());

    view! {
        <div class="panel-header">
            <h2>"Posts"</h2>
            <button class="primary" on:click=move |_| state.apply(|d| d.open_post_form(None))>
                "+ Add Post"
            </button>
        </div>
        <div class="grid">
            {move || cards().into_iter().map(|card| post_card(state, card)).collect_view()}
        </div>
    }
}
