pub mod api;
mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

/// Browser entry point: logging, runtime config, then the app.
pub fn run() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    log::info!("starting teamspace frontend");

    leptos::spawn_local(async move {
        let config = config::init().await;
        log::set_max_level(config.log_level().to_level_filter());
        log::info!(
            "runtime config initialized (api: {})",
            config.api_base_url.as_deref().unwrap_or(config::DEFAULT_API_BASE_URL)
        );
        router::mount_app(config);
    });
}
