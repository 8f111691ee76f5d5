use thiserror::Error;

/// Ошибки модуля заказов. Ни одна из них не фатальна для приложения:
/// фронтенд показывает их в блоке предупреждения вместо таблицы.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderDashboardError {
    /// Статус заказа отсутствует в справочнике статусов
    #[error("unknown order status '{code}'")]
    UnknownStatus { code: String },

    /// Значение фильтра не "all" и не код статуса
    #[error("invalid selection '{value}'")]
    InvalidSelection { value: String },

    #[error("invalid order date '{value}', expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("failed to decode orders: {0}")]
    Fixture(String),

    #[error("failed to parse dashboard config: {0}")]
    Config(String),
}
