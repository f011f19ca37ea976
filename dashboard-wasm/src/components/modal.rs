use leptos::prelude::*;

/// Оболочка окна: затемнение, заголовок и кнопка закрытия.
/// Сама оболочка закрывается только кнопкой ×, у затемнения обработчика нет.
#[component]
pub(crate) fn ModalShell(
    #[prop(into)] title: Signal<String>,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-overlay">
            <div class="modal">
                <header class="modal-header">
                    <h2>{move || title.get()}</h2>
                    <button class="modal-close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </header>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}
