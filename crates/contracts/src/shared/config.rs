use crate::domain::a025_customer_orders::{
    DispatchRule, OrderDashboardError, OrderId, StatusKind, StatusRegistry, ViewDispatcher,
};
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct DashboardConfig {
    #[serde(default)]
    pub dispatch: DispatchConfig,
    /// Переименование статусов: код статуса -> подпись
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DispatchConfig {
    /// ID заказов, которые открывают страницу отслеживания
    #[serde(default)]
    pub tracking_orders: Vec<String>,
    /// Статусы, заказы в которых открывают страницу отслеживания
    #[serde(default)]
    pub tracking_statuses: Vec<StatusKind>,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            tracking_orders: vec!["003".to_string()],
            tracking_statuses: Vec::new(),
        }
    }
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[dispatch]
tracking_orders = ["003"]
tracking_statuses = []

[labels]
"#;

impl DashboardConfig {
    pub fn dispatcher(&self) -> ViewDispatcher {
        let by_order = self
            .dispatch
            .tracking_orders
            .iter()
            .map(|id| DispatchRule::Order(OrderId::new(id.as_str())));
        let by_status = self
            .dispatch
            .tracking_statuses
            .iter()
            .map(|kind| DispatchRule::Status(*kind));
        ViewDispatcher::new(by_order.chain(by_status).collect())
    }

    pub fn registry(&self) -> Result<StatusRegistry, OrderDashboardError> {
        StatusRegistry::default().with_label_overrides(&self.labels)
    }
}

/// Parse configuration from a TOML document.
///
/// `None` means no override was supplied; the embedded default is used.
pub fn load_config(source: Option<&str>) -> Result<DashboardConfig, OrderDashboardError> {
    let source = source.unwrap_or(DEFAULT_CONFIG);
    let config: DashboardConfig =
        toml::from_str(source).map_err(|e| OrderDashboardError::Config(e.to_string()))?;
    // Неизвестные коды в [labels] отсекаем сразу, а не при первом рендере
    config.registry()?;
    Ok(config)
}
