use leptos::*;
use std::rc::Rc;

use crate::state::{
    session::{provide_session_store, MemorySessionStore},
    toast::{provide_toasts, ToastState},
};

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Runs `f` with an in-memory session store and a toast stack in context.
pub fn with_app_context<T>(
    store: MemorySessionStore,
    f: impl FnOnce(ToastState) -> T,
) -> T {
    with_runtime(|| {
        provide_session_store(Rc::new(store));
        let toasts = provide_toasts(0);
        f(toasts)
    })
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}
