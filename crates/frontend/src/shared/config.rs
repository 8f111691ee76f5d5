//! Browser-side dashboard configuration.
//!
//! An override TOML document may be stored in localStorage under
//! [`CONFIG_STORAGE_KEY`]; otherwise the embedded default is used.

use contracts::shared::config::{load_config, DashboardConfig};
use web_sys::window;

pub const CONFIG_STORAGE_KEY: &str = "order_dashboard.config";

/// Load override TOML from localStorage.
fn load_override_from_storage() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(CONFIG_STORAGE_KEY).ok().flatten())
        .filter(|s| !s.trim().is_empty())
}

/// Сломанный override не должен ронять дашборд: пишем в консоль и берём дефолт.
pub fn resolve_config(source: Option<&str>) -> DashboardConfig {
    match load_config(source) {
        Ok(config) => {
            if source.is_some() {
                log::info!("Dashboard config loaded from localStorage '{}'", CONFIG_STORAGE_KEY);
            }
            config
        }
        Err(e) => {
            log::warn!("Ignoring dashboard config override: {}", e);
            DashboardConfig::default()
        }
    }
}

pub fn load_dashboard_config() -> DashboardConfig {
    let source = load_override_from_storage();
    resolve_config(source.as_deref())
}
