use super::aggregate::{Order, OrderId};
use super::status::StatusKind;
use serde::{Deserialize, Serialize};

/// Куда вести пользователя по кнопке "View Details"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    Tracking,
    Detail(OrderId),
}

impl NavigationTarget {
    pub fn path(&self) -> String {
        match self {
            NavigationTarget::Tracking => "/tracking".to_string(),
            NavigationTarget::Detail(id) => {
                format!("/order/{}", urlencoding::encode(id.as_str()))
            }
        }
    }
}

/// Правило отправки заказа на страницу отслеживания
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchRule {
    /// Конкретный заказ
    Order(OrderId),
    /// Все заказы в статусе
    Status(StatusKind),
}

impl DispatchRule {
    fn matches(&self, id: &OrderId, status: Option<StatusKind>) -> bool {
        match self {
            DispatchRule::Order(rule_id) => rule_id == id,
            DispatchRule::Status(kind) => status == Some(*kind),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewDispatcher {
    tracking_rules: Vec<DispatchRule>,
}

impl ViewDispatcher {
    pub fn new(tracking_rules: Vec<DispatchRule>) -> Self {
        Self { tracking_rules }
    }

    pub fn rules(&self) -> &[DispatchRule] {
        &self.tracking_rules
    }

    pub fn target_for(&self, order: &Order) -> NavigationTarget {
        self.resolve(&order.id, Some(order.status))
    }

    /// Заказ ищется в списке, чтобы сработали правила по статусу.
    /// Неизвестный ID проверяется только правилами по ID.
    pub fn target_for_id(&self, orders: &[Order], id: &OrderId) -> NavigationTarget {
        let status = orders.iter().find(|o| &o.id == id).map(|o| o.status);
        self.resolve(id, status)
    }

    fn resolve(&self, id: &OrderId, status: Option<StatusKind>) -> NavigationTarget {
        if self.tracking_rules.iter().any(|rule| rule.matches(id, status)) {
            NavigationTarget::Tracking
        } else {
            NavigationTarget::Detail(id.clone())
        }
    }
}
