use contracts::domain::a025_customer_orders::{
    FixtureOrderProvider, Order, OrderDashboardError, OrderProvider, StatusRegistry, ViewDispatcher,
};
use contracts::shared::config::DashboardConfig;
use leptos::prelude::*;
use std::sync::Arc;

/// Данные и правила дашборда заказов, общие для всех страниц
#[derive(Clone)]
pub struct OrderDataContext {
    pub provider: Arc<dyn OrderProvider>,
    pub registry: StatusRegistry,
    pub dispatcher: ViewDispatcher,
}

impl OrderDataContext {
    /// Контекст с демонстрационными заказами
    pub fn from_config(config: &DashboardConfig) -> Self {
        let registry = match config.registry() {
            Ok(registry) => registry,
            Err(e) => {
                log::warn!("Status label overrides rejected: {}", e);
                StatusRegistry::default()
            }
        };
        Self {
            provider: Arc::new(FixtureOrderProvider::new(registry.clone())),
            registry,
            dispatcher: config.dispatcher(),
        }
    }

    pub fn with_provider(mut self, provider: Arc<dyn OrderProvider>) -> Self {
        self.provider = provider;
        self
    }

    pub fn load_orders(&self) -> Result<Vec<Order>, OrderDashboardError> {
        let result = self.provider.fetch_orders();
        if let Err(e) = &result {
            log::error!("Failed to load orders: {}", e);
        }
        result
    }
}

/// Hook to use the order data context provided by `App`.
pub fn use_order_data() -> OrderDataContext {
    use_context::<OrderDataContext>().expect("OrderDataContext not found in context")
}
