use crate::state::toast::{use_toasts, Toast};
use leptos::*;

#[component]
pub fn ToastRegion() -> impl IntoView {
    let state = use_toasts();

    view! {
        <div
            class="fixed top-4 right-4 z-50 flex w-80 flex-col gap-2"
            role="status"
            aria-live="polite"
        >
            <For
                each=move || state.toasts.get()
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = format!(
                        "border px-4 py-3 rounded shadow cursor-pointer {}",
                        toast.level.as_class()
                    );
                    view! {
                        <div class=class on:click=move |_| state.dismiss(id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
