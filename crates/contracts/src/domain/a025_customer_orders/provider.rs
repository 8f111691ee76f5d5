use super::aggregate::{Order, OrderRecord};
use super::error::OrderDashboardError;
use super::status::StatusRegistry;

/// Демонстрационные заказы (вместо реального источника данных)
const FIXTURE_ORDERS: &str = r#"[
    { "id": "001", "customer": "John Doe",      "date": "2023-05-15", "status": "delayed_delivery" },
    { "id": "002", "customer": "Jane Smith",    "date": "2023-05-16", "status": "delayed_pickup" },
    { "id": "003", "customer": "Bob Johnson",   "date": "2023-05-17", "status": "new" },
    { "id": "004", "customer": "Alice Brown",   "date": "2023-05-18", "status": "ready_to_ship" },
    { "id": "005", "customer": "Charlie Davis", "date": "2023-05-19", "status": "delayed_delivery" },
    { "id": "006", "customer": "Eva Wilson",    "date": "2023-05-20", "status": "new" },
    { "id": "007", "customer": "Frank Miller",  "date": "2023-05-21", "status": "ready_to_ship" },
    { "id": "008", "customer": "Grace Lee",     "date": "2023-05-22", "status": "delayed_pickup" }
]"#;

/// Источник заказов для дашборда.
///
/// Дашборд получает реализацию извне, поэтому фикстуру можно заменить
/// живым источником, не трогая фильтрацию и агрегацию.
pub trait OrderProvider: Send + Sync {
    /// Заказы в исходном порядке
    fn fetch_orders(&self) -> Result<Vec<Order>, OrderDashboardError>;
}

/// Заказы из JSON-массива `OrderRecord`, статусы проверяются по справочнику
#[derive(Debug, Clone)]
pub struct FixtureOrderProvider {
    json: String,
    registry: StatusRegistry,
}

impl FixtureOrderProvider {
    pub fn new(registry: StatusRegistry) -> Self {
        Self::from_json(FIXTURE_ORDERS, registry)
    }

    pub fn from_json(json: &str, registry: StatusRegistry) -> Self {
        Self {
            json: json.to_string(),
            registry,
        }
    }
}

impl Default for FixtureOrderProvider {
    fn default() -> Self {
        Self::new(StatusRegistry::default())
    }
}

impl OrderProvider for FixtureOrderProvider {
    fn fetch_orders(&self) -> Result<Vec<Order>, OrderDashboardError> {
        let records: Vec<OrderRecord> = serde_json::from_str(&self.json)
            .map_err(|e| OrderDashboardError::Fixture(e.to_string()))?;
        records
            .into_iter()
            .map(|record| Order::from_record(record, &self.registry))
            .collect()
    }
}

/// Готовый список заказов (превью, тесты)
#[derive(Debug, Clone, Default)]
pub struct StaticOrderProvider {
    orders: Vec<Order>,
}

impl StaticOrderProvider {
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }
}

impl OrderProvider for StaticOrderProvider {
    fn fetch_orders(&self) -> Result<Vec<Order>, OrderDashboardError> {
        Ok(self.orders.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a025_customer_orders::status::StatusKind;

    #[test]
    fn test_fixture_loads_in_order() {
        let orders = FixtureOrderProvider::default().fetch_orders().unwrap();
        let ids: Vec<&str> = orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["001", "002", "003", "004", "005", "006", "007", "008"]);
        assert_eq!(orders[2].customer, "Bob Johnson");
        assert_eq!(orders[2].status, StatusKind::New);
    }

    #[test]
    fn test_unknown_status_in_source() {
        let json = r#"[{ "id": "009", "customer": "X", "date": "2023-05-23", "status": "in_transit" }]"#;
        let provider = FixtureOrderProvider::from_json(json, StatusRegistry::default());
        assert_eq!(
            provider.fetch_orders(),
            Err(OrderDashboardError::UnknownStatus {
                code: "in_transit".to_string()
            })
        );
    }

    #[test]
    fn test_malformed_json() {
        let provider = FixtureOrderProvider::from_json("{ not json", StatusRegistry::default());
        assert!(matches!(
            provider.fetch_orders(),
            Err(OrderDashboardError::Fixture(_))
        ));
    }

    #[test]
    fn test_static_provider() {
        let orders = FixtureOrderProvider::default().fetch_orders().unwrap();
        let provider = StaticOrderProvider::new(orders[..2].to_vec());
        assert_eq!(provider.fetch_orders().unwrap().len(), 2);
        assert!(StaticOrderProvider::default().fetch_orders().unwrap().is_empty());
    }
}
