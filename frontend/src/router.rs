use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;
use std::rc::Rc;

use crate::{
    api::ApiClient,
    components::toast::ToastRegion,
    config::RuntimeConfig,
    pages::login::LoginPage,
    state::{
        session::{provide_session_store, LocalSessionStore},
        toast::provide_toasts,
    },
};

pub const LOGIN_PATH: &str = "/login";
/// Landing page for users who already belong to a team.
pub const HOME_PATH: &str = "/";
/// Team selection / creation.
pub const TEAM_PATH: &str = "/team";

/// Routes rendered by this app; the post-login targets are served elsewhere.
pub const ROUTE_PATHS: &[&str] = &[LOGIN_PATH];

pub const EXTERNAL_ROUTE_PATHS: &[&str] = &[HOME_PATH, TEAM_PATH];

pub fn mount_app(config: RuntimeConfig) {
    mount_to_body(move || app_root(config));
}

pub fn app_root(config: RuntimeConfig) -> impl IntoView {
    provide_meta_context();
    let api = match &config.api_base_url {
        Some(base) => ApiClient::new_with_base_url(base.clone()),
        None => ApiClient::new(),
    };
    provide_context(api);
    provide_session_store(Rc::new(LocalSessionStore));
    provide_toasts(config.toast_timeout_ms());

    view! {
        <Router>
            <Routes>
                <Route path=LOGIN_PATH view=LoginPage/>
            </Routes>
            <ToastRegion/>
        </Router>
    }
}
