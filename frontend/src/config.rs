use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use wasm_bindgen::JsValue;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_TOAST_TIMEOUT_MS: u32 = 4000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub log_level: Option<String>,
    pub toast_timeout_ms: Option<u32>,
}

impl RuntimeConfig {
    /// Fields set in `self` win over `other`.
    pub fn or(self, other: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: self.api_base_url.or(other.api_base_url),
            log_level: self.log_level.or(other.log_level),
            toast_timeout_ms: self.toast_timeout_ms.or(other.toast_timeout_ms),
        }
    }

    pub fn log_level(&self) -> log::Level {
        parse_log_level(self.log_level.as_deref())
    }

    pub fn toast_timeout_ms(&self) -> u32 {
        self.toast_timeout_ms.unwrap_or(DEFAULT_TOAST_TIMEOUT_MS)
    }
}

static CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

pub fn parse_log_level(raw: Option<&str>) -> log::Level {
    match raw.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("error") => log::Level::Error,
        Some("warn") | Some("warning") => log::Level::Warn,
        Some("debug") => log::Level::Debug,
        Some("trace") => log::Level::Trace,
        _ => log::Level::Info,
    }
}

fn default_base_url(origin: Option<String>) -> String {
    match origin {
        Some(origin) if origin.starts_with("http") => format!("{}/api", normalize_base_url(&origin)),
        _ => DEFAULT_API_BASE_URL.to_string(),
    }
}

fn read_string(obj: &js_sys::Object, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(obj, &JsValue::from_str(key))
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    })
}

fn read_u32(obj: &js_sys::Object, keys: &[&str]) -> Option<u32> {
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(obj, &JsValue::from_str(key))
            .ok()
            .and_then(|v| v.as_f64())
            .filter(|v| *v >= 0.0)
            .map(|v| v as u32)
    })
}

fn config_from_env_js() -> Option<RuntimeConfig> {
    // Optional global written by env.js: window.__TEAMSPACE_ENV = { API_BASE_URL: "..." }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &JsValue::from_str("__TEAMSPACE_ENV")).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    Some(RuntimeConfig {
        api_base_url: read_string(&obj, &["API_BASE_URL", "api_base_url"]),
        log_level: read_string(&obj, &["LOG_LEVEL", "log_level"]),
        toast_timeout_ms: read_u32(&obj, &["TOAST_TIMEOUT_MS", "toast_timeout_ms"]),
    })
}

async fn fetch_runtime_config(origin: Option<&str>) -> anyhow::Result<RuntimeConfig> {
    let origin = origin.context("no window origin to resolve config.json against")?;
    let url = format!("{}/config.json", normalize_base_url(origin));
    let resp = reqwest::get(&url)
        .await
        .with_context(|| format!("fetching {}", url))?;
    if !resp.status().is_success() {
        bail!("{} returned {}", url, resp.status());
    }
    resp.json::<RuntimeConfig>()
        .await
        .with_context(|| format!("decoding {}", url))
}

fn window_origin() -> Option<String> {
    web_sys::window().and_then(|w| w.location().origin().ok())
}

async fn resolve() -> RuntimeConfig {
    let origin = window_origin();
    let mut resolved = RuntimeConfig::default();
    if let Some(env) = config_from_env_js() {
        log::debug!("runtime config: using window.__TEAMSPACE_ENV");
        resolved = env;
    }
    if resolved.api_base_url.is_none() || resolved.log_level.is_none() {
        match fetch_runtime_config(origin.as_deref()).await {
            Ok(file) => resolved = resolved.or(file),
            Err(err) => log::debug!("runtime config: config.json unavailable: {:#}", err),
        }
    }
    let api_base_url = resolved
        .api_base_url
        .as_deref()
        .map(normalize_base_url)
        .unwrap_or_else(|| default_base_url(origin));
    RuntimeConfig {
        api_base_url: Some(api_base_url),
        ..resolved
    }
}

/// Resolved config, or defaults when `init` has not finished yet.
pub fn current() -> RuntimeConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

pub async fn init() -> RuntimeConfig {
    if let Some(cached) = CONFIG.get() {
        return cached.clone();
    }
    let resolved = resolve().await;
    CONFIG.get_or_init(|| resolved).clone()
}

pub async fn await_api_base_url() -> String {
    init()
        .await
        .api_base_url
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}
