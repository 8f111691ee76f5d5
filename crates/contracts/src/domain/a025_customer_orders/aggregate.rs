use super::error::OrderDashboardError;
use super::status::{StatusKind, StatusRegistry};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// ID заказа (непрозрачная строка, например "003")
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub String);

impl OrderId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Заказ покупателя. После загрузки не изменяется.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer: String,
    pub date: NaiveDate,
    pub status: StatusKind,
}

impl Order {
    pub fn new(id: &str, customer: &str, date: NaiveDate, status: StatusKind) -> Self {
        Self {
            id: OrderId::new(id),
            customer: customer.to_string(),
            date,
            status,
        }
    }

    /// Проверка записи по справочнику статусов
    pub fn from_record(
        record: OrderRecord,
        registry: &StatusRegistry,
    ) -> Result<Self, OrderDashboardError> {
        let status = registry.resolve_code(&record.status)?;
        let date = NaiveDate::parse_from_str(&record.date, "%Y-%m-%d").map_err(|_| {
            OrderDashboardError::InvalidDate {
                value: record.date.clone(),
            }
        })?;
        Ok(Self {
            id: OrderId(record.id),
            customer: record.customer,
            date,
            status,
        })
    }
}

/// Заказ в том виде, в котором его отдаёт источник данных
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: String,
    pub customer: String,
    /// Дата в формате YYYY-MM-DD
    pub date: String,
    /// Код статуса ("new", "ready_to_ship", ...)
    pub status: String,
}

impl From<&Order> for OrderRecord {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.0.clone(),
            customer: order.customer.clone(),
            date: order.date.format("%Y-%m-%d").to_string(),
            status: order.status.code().to_string(),
        }
    }
}
