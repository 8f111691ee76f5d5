use crate::shared::date_utils::format_order_date;
use contracts::domain::a025_customer_orders::{
    summarize, ColorCategory, Order, OrderDashboardError, OrderId, Selection, StatusDescriptor,
    StatusKind, StatusRegistry,
};

/// Карточка статуса в верхней сетке
#[derive(Clone, Debug, PartialEq)]
pub struct StatusCardModel {
    pub kind: StatusKind,
    pub label: String,
    pub icon_name: &'static str,
    pub color: ColorCategory,
    pub count: usize,
}

/// Строка таблицы заказов
#[derive(Clone, Debug, PartialEq)]
pub struct OrderRow {
    pub id: OrderId,
    pub customer: String,
    pub date: String,
    pub status: StatusDescriptor,
}

impl OrderRow {
    fn from_order(order: &Order, registry: &StatusRegistry) -> Result<Self, OrderDashboardError> {
        Ok(Self {
            id: order.id.clone(),
            customer: order.customer.clone(),
            date: format_order_date(order.date),
            status: registry.descriptor(order.status)?.clone(),
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardViewModel {
    pub cards: Vec<StatusCardModel>,
    pub rows: Vec<OrderRow>,
    /// "All orders" / "<label> orders"
    pub caption: String,
    /// Подпись активного фильтра для чипа сброса
    pub filter_label: Option<String>,
}

impl DashboardViewModel {
    pub fn build(
        orders: &[Order],
        selection: Selection,
        registry: &StatusRegistry,
    ) -> Result<Self, OrderDashboardError> {
        let summary = summarize(orders, selection, registry)?;

        let cards = registry
            .kinds()
            .map(|kind| {
                let descriptor = registry.descriptor(kind)?;
                Ok(StatusCardModel {
                    kind,
                    label: descriptor.label.clone(),
                    icon_name: descriptor.icon.icon_name(),
                    color: descriptor.color,
                    count: summary.counts.get(kind),
                })
            })
            .collect::<Result<Vec<_>, OrderDashboardError>>()?;

        let rows = summary
            .filtered
            .iter()
            .map(|order| OrderRow::from_order(order, registry))
            .collect::<Result<Vec<_>, _>>()?;

        let filter_label = match selection {
            Selection::All => None,
            Selection::Status(kind) => Some(registry.label(kind)?.to_string()),
        };

        Ok(Self {
            cards,
            rows,
            caption: summary.caption,
            filter_label,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a025_customer_orders::{FixtureOrderProvider, OrderProvider};

    fn fixture() -> Vec<Order> {
        FixtureOrderProvider::default().fetch_orders().unwrap()
    }

    #[test]
    fn test_cards_follow_display_order() {
        let vm = DashboardViewModel::build(&fixture(), Selection::All, &StatusRegistry::default())
            .unwrap();
        let labels: Vec<&str> = vm.cards.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Delayed (Delivery)", "Delayed (Pickup)", "New Order", "Ready to Ship"]
        );
        assert_eq!(vm.cards.iter().map(|c| c.count).sum::<usize>(), 8);
        assert_eq!(vm.cards[0].icon_name, "alert-circle");
    }

    #[test]
    fn test_all_selection() {
        let vm = DashboardViewModel::build(&fixture(), Selection::All, &StatusRegistry::default())
            .unwrap();
        assert_eq!(vm.rows.len(), 8);
        assert_eq!(vm.caption, "All orders");
        assert_eq!(vm.filter_label, None);
        assert_eq!(vm.rows[0].date, "2023-05-15");
        assert_eq!(vm.rows[0].status.label, "Delayed (Delivery)");
    }

    #[test]
    fn test_status_selection() {
        let vm = DashboardViewModel::build(
            &fixture(),
            Selection::Status(StatusKind::DelayedPickup),
            &StatusRegistry::default(),
        )
        .unwrap();
        let ids: Vec<&str> = vm.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["002", "008"]);
        assert_eq!(vm.caption, "Delayed (Pickup) orders");
        assert_eq!(vm.filter_label.as_deref(), Some("Delayed (Pickup)"));
    }

    #[test]
    fn test_empty_status_has_no_rows() {
        let orders: Vec<Order> = fixture()
            .into_iter()
            .filter(|o| o.status != StatusKind::New)
            .collect();
        let vm = DashboardViewModel::build(
            &orders,
            Selection::Status(StatusKind::New),
            &StatusRegistry::default(),
        )
        .unwrap();
        assert!(vm.rows.is_empty());
        let new_card = vm.cards.iter().find(|c| c.kind == StatusKind::New).unwrap();
        assert_eq!(new_card.count, 0);
    }
}
