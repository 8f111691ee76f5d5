use super::aggregate::Order;
use super::error::OrderDashboardError;
use super::selection::Selection;
use super::status::{StatusKind, StatusRegistry};
use std::collections::BTreeMap;

/// Количество заказов по каждому статусу
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCounts {
    counts: BTreeMap<StatusKind, usize>,
}

impl StatusCounts {
    pub fn get(&self, kind: StatusKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Пары (статус, количество) в порядке отображения
    pub fn iter(&self) -> impl Iterator<Item = (StatusKind, usize)> + '_ {
        self.counts.iter().map(|(kind, count)| (*kind, *count))
    }
}

/// Заказы, подходящие под фильтр, в исходном порядке
pub fn filter_orders(orders: &[Order], selection: Selection) -> Vec<&Order> {
    orders
        .iter()
        .filter(|order| selection.matches(order.status))
        .collect()
}

/// Счётчики считаются по всему списку, а не по отфильтрованному
pub fn count_by_status(orders: &[Order]) -> StatusCounts {
    let mut counts: BTreeMap<StatusKind, usize> =
        StatusKind::all().into_iter().map(|kind| (kind, 0)).collect();
    for order in orders {
        *counts.entry(order.status).or_insert(0) += 1;
    }
    StatusCounts { counts }
}

/// "order" для одного заказа, иначе "orders"
pub fn count_caption(count: usize) -> &'static str {
    if count == 1 {
        "order"
    } else {
        "orders"
    }
}

/// Всё, что нужно дашборду для одного состояния фильтра
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary<'a> {
    pub selection: Selection,
    pub filtered: Vec<&'a Order>,
    pub counts: StatusCounts,
    /// "All orders" или "<подпись статуса> orders"
    pub caption: String,
}

impl OrderSummary<'_> {
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }
}

pub fn summarize<'a>(
    orders: &'a [Order],
    selection: Selection,
    registry: &StatusRegistry,
) -> Result<OrderSummary<'a>, OrderDashboardError> {
    // Каждый статус в списке должен быть в справочнике
    for order in orders {
        registry.descriptor(order.status)?;
    }

    let caption = match selection {
        Selection::All => "All orders".to_string(),
        Selection::Status(kind) => format!("{} orders", registry.label(kind)?),
    };

    Ok(OrderSummary {
        selection,
        filtered: filter_orders(orders, selection),
        counts: count_by_status(orders),
        caption,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a025_customer_orders::provider::{FixtureOrderProvider, OrderProvider};

    fn fixture() -> Vec<Order> {
        FixtureOrderProvider::default().fetch_orders().unwrap()
    }

    fn ids(orders: &[&Order]) -> Vec<String> {
        orders.iter().map(|o| o.id.to_string()).collect()
    }

    #[test]
    fn test_filter_all_keeps_everything_in_order() {
        let orders = fixture();
        let filtered = filter_orders(&orders, Selection::All);
        assert_eq!(filtered.len(), orders.len());
        assert!(filtered.iter().zip(orders.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_filter_by_status() {
        let orders = fixture();
        let cases = [
            (StatusKind::New, vec!["003", "006"]),
            (StatusKind::DelayedDelivery, vec!["001", "005"]),
            (StatusKind::ReadyToShip, vec!["004", "007"]),
            (StatusKind::DelayedPickup, vec!["002", "008"]),
        ];
        for (kind, expected) in cases {
            let filtered = filter_orders(&orders, Selection::Status(kind));
            assert_eq!(ids(&filtered), expected, "status {kind}");
        }
    }

    #[test]
    fn test_filtered_is_subsequence_of_store() {
        let orders = fixture();
        for kind in StatusKind::all() {
            let expected: Vec<&Order> = orders.iter().filter(|o| o.status == kind).collect();
            assert_eq!(filter_orders(&orders, kind.into()), expected);
        }
    }

    #[test]
    fn test_counts_sum_to_total() {
        let orders = fixture();
        let counts = count_by_status(&orders);
        assert_eq!(counts.total(), 8);
        for kind in StatusKind::all() {
            assert_eq!(counts.get(kind), 2);
        }
    }

    #[test]
    fn test_counts_ignore_selection() {
        let orders = fixture();
        let summary = summarize(&orders, Selection::Status(StatusKind::New), &StatusRegistry::default())
            .unwrap();
        assert_eq!(summary.filtered.len(), 2);
        assert_eq!(summary.counts.total(), 8);
        assert_eq!(summary.caption, "New Order orders");
    }

    #[test]
    fn test_zero_count_status_gives_empty_result() {
        let orders: Vec<Order> = fixture()
            .into_iter()
            .filter(|o| o.status != StatusKind::ReadyToShip)
            .collect();
        let summary = summarize(
            &orders,
            Selection::Status(StatusKind::ReadyToShip),
            &StatusRegistry::default(),
        )
        .unwrap();
        assert_eq!(summary.counts.get(StatusKind::ReadyToShip), 0);
        assert!(summary.is_empty());
        assert_eq!(summary.counts.total(), 6);
    }

    #[test]
    fn test_all_caption() {
        let orders = fixture();
        let summary = summarize(&orders, Selection::All, &StatusRegistry::default()).unwrap();
        assert_eq!(summary.caption, "All orders");
        assert_eq!(summary.filtered.len(), 8);
    }

    #[test]
    fn test_summarize_rejects_unregistered_status() {
        let orders = fixture();
        let registry = StatusRegistry::from_entries(
            StatusRegistry::default()
                .kinds()
                .filter(|k| *k != StatusKind::DelayedPickup)
                .map(|k| (k, StatusRegistry::default().descriptor(k).unwrap().clone()))
                .collect::<Vec<_>>(),
        );
        assert_eq!(
            summarize(&orders, Selection::All, &registry),
            Err(OrderDashboardError::UnknownStatus {
                code: "delayed_pickup".to_string()
            })
        );
    }

    #[test]
    fn test_count_caption() {
        assert_eq!(count_caption(0), "orders");
        assert_eq!(count_caption(1), "order");
        assert_eq!(count_caption(2), "orders");
    }

    #[test]
    fn test_empty_store() {
        let counts = count_by_status(&[]);
        assert_eq!(counts.total(), 0);
        assert_eq!(counts.iter().count(), 4);
    }
}
