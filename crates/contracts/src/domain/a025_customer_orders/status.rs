use super::error::OrderDashboardError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Статусы заказа
///
/// Порядок вариантов совпадает с порядком карточек на дашборде.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    DelayedDelivery,
    DelayedPickup,
    New,
    ReadyToShip,
}

impl StatusKind {
    /// Код статуса в данных заказов
    pub fn code(&self) -> &'static str {
        match self {
            StatusKind::DelayedDelivery => "delayed_delivery",
            StatusKind::DelayedPickup => "delayed_pickup",
            StatusKind::New => "new",
            StatusKind::ReadyToShip => "ready_to_ship",
        }
    }

    /// Все статусы в порядке отображения
    pub fn all() -> [StatusKind; 4] {
        [
            StatusKind::DelayedDelivery,
            StatusKind::DelayedPickup,
            StatusKind::New,
            StatusKind::ReadyToShip,
        ]
    }

    /// Парсинг из кода
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "delayed_delivery" => Some(StatusKind::DelayedDelivery),
            "delayed_pickup" => Some(StatusKind::DelayedPickup),
            "new" => Some(StatusKind::New),
            "ready_to_ship" => Some(StatusKind::ReadyToShip),
            _ => None,
        }
    }
}

impl std::fmt::Display for StatusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Цветовая категория бейджа статуса
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorCategory {
    Red,
    Orange,
    Blue,
    Green,
}

/// Категория иконки статуса
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconCategory {
    AlertCircle,
    Clock,
    ShoppingCart,
    Package,
}

impl IconCategory {
    /// Имя иконки для `icon()` во фронтенде
    pub fn icon_name(&self) -> &'static str {
        match self {
            IconCategory::AlertCircle => "alert-circle",
            IconCategory::Clock => "clock",
            IconCategory::ShoppingCart => "shopping-cart",
            IconCategory::Package => "package",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusDescriptor {
    pub label: String,
    pub color: ColorCategory,
    pub icon: IconCategory,
}

impl StatusDescriptor {
    fn new(label: &str, color: ColorCategory, icon: IconCategory) -> Self {
        Self {
            label: label.to_string(),
            color,
            icon,
        }
    }
}

/// Справочник статусов: код статуса -> подпись, цвет, иконка
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRegistry {
    entries: BTreeMap<StatusKind, StatusDescriptor>,
}

impl Default for StatusRegistry {
    fn default() -> Self {
        let entries = BTreeMap::from([
            (
                StatusKind::DelayedDelivery,
                StatusDescriptor::new("Delayed (Delivery)", ColorCategory::Red, IconCategory::AlertCircle),
            ),
            (
                StatusKind::DelayedPickup,
                StatusDescriptor::new("Delayed (Pickup)", ColorCategory::Orange, IconCategory::Clock),
            ),
            (
                StatusKind::New,
                StatusDescriptor::new("New Order", ColorCategory::Blue, IconCategory::ShoppingCart),
            ),
            (
                StatusKind::ReadyToShip,
                StatusDescriptor::new("Ready to Ship", ColorCategory::Green, IconCategory::Package),
            ),
        ]);
        Self { entries }
    }
}

impl StatusRegistry {
    /// Справочник из произвольного набора записей (например, урезанного конфигом)
    pub fn from_entries(entries: impl IntoIterator<Item = (StatusKind, StatusDescriptor)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Переименование статусов. Ключи, не являющиеся кодами статусов, отклоняются.
    pub fn with_label_overrides(
        mut self,
        labels: &BTreeMap<String, String>,
    ) -> Result<Self, OrderDashboardError> {
        for (code, label) in labels {
            let kind = self.resolve_code(code)?;
            if let Some(entry) = self.entries.get_mut(&kind) {
                entry.label = label.clone();
            }
        }
        Ok(self)
    }

    pub fn descriptor(&self, kind: StatusKind) -> Result<&StatusDescriptor, OrderDashboardError> {
        self.entries
            .get(&kind)
            .ok_or_else(|| OrderDashboardError::UnknownStatus {
                code: kind.code().to_string(),
            })
    }

    pub fn label(&self, kind: StatusKind) -> Result<&str, OrderDashboardError> {
        self.descriptor(kind).map(|d| d.label.as_str())
    }

    /// Код статуса -> статус, если он есть в справочнике
    pub fn resolve_code(&self, code: &str) -> Result<StatusKind, OrderDashboardError> {
        StatusKind::from_code(code)
            .filter(|kind| self.entries.contains_key(kind))
            .ok_or_else(|| OrderDashboardError::UnknownStatus {
                code: code.to_string(),
            })
    }

    /// Зарегистрированные статусы в порядке отображения
    pub fn kinds(&self) -> impl Iterator<Item = StatusKind> + '_ {
        self.entries.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_has_every_status() {
        let registry = StatusRegistry::default();
        for kind in StatusKind::all() {
            assert!(registry.descriptor(kind).is_ok(), "{kind} missing");
        }
        assert_eq!(registry.kinds().collect::<Vec<_>>(), StatusKind::all().to_vec());
    }

    #[test]
    fn test_default_labels_and_colors() {
        let registry = StatusRegistry::default();
        let delivery = registry.descriptor(StatusKind::DelayedDelivery).unwrap();
        assert_eq!(delivery.label, "Delayed (Delivery)");
        assert_eq!(delivery.color, ColorCategory::Red);
        assert_eq!(delivery.icon, IconCategory::AlertCircle);
        assert_eq!(registry.label(StatusKind::ReadyToShip).unwrap(), "Ready to Ship");
        assert_eq!(registry.label(StatusKind::New).unwrap(), "New Order");
    }

    #[test]
    fn test_code_round_trip() {
        for kind in StatusKind::all() {
            assert_eq!(StatusKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(StatusKind::from_code("shipped"), None);
    }

    #[test]
    fn test_resolve_unknown_code() {
        let registry = StatusRegistry::default();
        assert_eq!(
            registry.resolve_code("in_transit"),
            Err(OrderDashboardError::UnknownStatus {
                code: "in_transit".to_string()
            })
        );
    }

    #[test]
    fn test_missing_entry_is_lookup_error() {
        let registry = StatusRegistry::from_entries(
            StatusRegistry::default()
                .entries
                .into_iter()
                .filter(|(kind, _)| *kind != StatusKind::New),
        );
        assert!(registry.descriptor(StatusKind::New).is_err());
        assert!(registry.resolve_code("new").is_err());
        assert_eq!(registry.kinds().count(), 3);
    }

    #[test]
    fn test_label_overrides() {
        let labels = BTreeMap::from([("new".to_string(), "Fresh".to_string())]);
        let registry = StatusRegistry::default().with_label_overrides(&labels).unwrap();
        assert_eq!(registry.label(StatusKind::New).unwrap(), "Fresh");
        assert_eq!(registry.label(StatusKind::DelayedPickup).unwrap(), "Delayed (Pickup)");

        let bad = BTreeMap::from([("lost".to_string(), "Lost".to_string())]);
        assert!(StatusRegistry::default().with_label_overrides(&bad).is_err());
    }
}
