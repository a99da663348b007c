use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

const WINDOW_CONFIG_KEY: &str = "__QUOINSTONE_CONFIG";

/// Deployment-specific branding, layered over the built-in customization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, alias = "companyName")]
    pub company_name: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default, alias = "primaryColor")]
    pub primary_color: Option<String>,
    #[serde(default, alias = "secondaryColor")]
    pub secondary_color: Option<String>,
    #[serde(default, alias = "userName")]
    pub user_name: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("window.__QUOINSTONE_CONFIG could not be read")]
    Global,
    #[error("runtime config is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("failed to fetch config.json: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("config.json request returned HTTP {0}")]
    Status(u16),
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

pub fn parse_runtime_config(raw: &str) -> Result<RuntimeConfig, ConfigError> {
    Ok(serde_json::from_str(raw)?)
}

fn window() -> Result<web_sys::Window, ConfigError> {
    web_sys::window().ok_or(ConfigError::NoWindow)
}

// Expect optional global object: window.__QUOINSTONE_CONFIG = { title: "...", ... }
fn from_window_global() -> Result<Option<RuntimeConfig>, ConfigError> {
    let w = window()?;
    let any = js_sys::Reflect::get(&w, &WINDOW_CONFIG_KEY.into()).map_err(|_| ConfigError::Global)?;
    if any.is_undefined() || any.is_null() {
        return Ok(None);
    }
    let raw: String = js_sys::JSON::stringify(&any)
        .map_err(|_| ConfigError::Global)?
        .into();
    parse_runtime_config(&raw).map(Some)
}

async fn fetch_runtime_config() -> Result<Option<RuntimeConfig>, ConfigError> {
    let origin = window()?.location().origin().map_err(|_| ConfigError::NoWindow)?;
    let resp = reqwest::get(format!("{origin}/config.json")).await?;
    if resp.status() == reqwest::StatusCode::NOT_FOUND {
        return Ok(None);
    }
    if !resp.status().is_success() {
        return Err(ConfigError::Status(resp.status().as_u16()));
    }
    let raw = resp.text().await?;
    parse_runtime_config(&raw).map(Some)
}

fn cache(cfg: RuntimeConfig) -> RuntimeConfig {
    RUNTIME_CONFIG.get_or_init(|| cfg).clone()
}

/// Global object first, then `config.json`; failures fall back to no overrides.
pub async fn load_runtime_config() -> RuntimeConfig {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return cached.clone();
    }
    match from_window_global() {
        Ok(Some(cfg)) => return cache(cfg),
        Ok(None) => {}
        Err(err) => log::warn!("ignoring window.{WINDOW_CONFIG_KEY}: {err}"),
    }
    match fetch_runtime_config().await {
        Ok(Some(cfg)) => cache(cfg),
        Ok(None) => cache(RuntimeConfig::default()),
        Err(err) => {
            log::warn!("runtime config unavailable, using built-in branding: {err}");
            cache(RuntimeConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_snake_and_camel_case_keys() {
        let cfg = parse_runtime_config(
            r##"{"title":"QuoinStone UAT","companyName":"QuoinStone Ltd","primary_color":"#111827"}"##,
        )
        .unwrap();
        assert_eq!(cfg.title.as_deref(), Some("QuoinStone UAT"));
        assert_eq!(cfg.company_name.as_deref(), Some("QuoinStone Ltd"));
        assert_eq!(cfg.primary_color.as_deref(), Some("#111827"));
        assert!(cfg.user_name.is_none());
    }

    #[test]
    fn empty_object_means_no_overrides() {
        assert_eq!(parse_runtime_config("{}").unwrap(), RuntimeConfig::default());
    }

    #[test]
    fn invalid_json_is_a_decode_error() {
        let err = parse_runtime_config("{title:").unwrap_err();
        assert!(matches!(err, ConfigError::Decode(_)));
        assert!(err.to_string().starts_with("runtime config is not valid JSON"));
    }
}
