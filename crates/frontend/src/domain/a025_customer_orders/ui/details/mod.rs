use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::context::use_order_data;
use crate::shared::date_utils::{format_long_date, format_order_date};
use contracts::domain::a025_customer_orders::{
    NavigationTarget, Order, OrderDashboardError, OrderId, StatusDescriptor, StatusRegistry,
    ViewDispatcher,
};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[derive(Clone, Debug, PartialEq)]
pub struct OrderDetailsViewModel {
    pub id: OrderId,
    pub customer: String,
    pub date_iso: String,
    pub date_long: String,
    pub status: StatusDescriptor,
    /// Заказ ведёт на страницу отслеживания
    pub tracked: bool,
}

impl OrderDetailsViewModel {
    /// `Ok(None)`, если заказа с таким ID нет
    pub fn find(
        orders: &[Order],
        id: &OrderId,
        registry: &StatusRegistry,
        dispatcher: &ViewDispatcher,
    ) -> Result<Option<Self>, OrderDashboardError> {
        let Some(order) = orders.iter().find(|o| &o.id == id) else {
            return Ok(None);
        };
        Ok(Some(Self {
            id: order.id.clone(),
            customer: order.customer.clone(),
            date_iso: format_order_date(order.date),
            date_long: format_long_date(order.date),
            status: registry.descriptor(order.status)?.clone(),
            tracked: dispatcher.target_for(order) == NavigationTarget::Tracking,
        }))
    }
}

#[component]
pub fn OrderDetailsPage() -> impl IntoView {
    let data = use_order_data();
    let params = use_params_map();

    let orders = StoredValue::new(data.load_orders());
    let registry = StoredValue::new(data.registry.clone());
    let dispatcher = StoredValue::new(data.dispatcher.clone());

    let order_id = Memo::new(move |_| OrderId::new(params.with(|p| p.get("id")).unwrap_or_default()));

    let details = Memo::new(move |_| {
        let id = order_id.get();
        orders.with_value(|orders| {
            let orders = orders.as_ref().map_err(Clone::clone)?;
            registry.with_value(|registry| {
                dispatcher.with_value(|dispatcher| {
                    OrderDetailsViewModel::find(orders, &id, registry, dispatcher)
                })
            })
        })
    });

    view! {
        <div class="page order-details">
            <PageHeader
                title="Order Details"
                back_href="/".to_string()
            />
            {move || match details.get() {
                Ok(Some(vm)) => details_card(vm),
                Ok(None) => view! {
                    <p class="orders-panel__empty">
                        {format!("Order {} not found.", order_id.get())}
                    </p>
                }.into_any(),
                Err(e) => view! {
                    <div class="warning-box">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{e.to_string()}</span>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

fn details_card(vm: OrderDetailsViewModel) -> AnyView {
    view! {
        <dl class="details-grid">
            <dt>"Order ID"</dt>
            <dd>{vm.id.to_string()}</dd>
            <dt>"Customer"</dt>
            <dd>{vm.customer}</dd>
            <dt>"Date"</dt>
            <dd title=vm.date_iso>{vm.date_long}</dd>
            <dt>"Status"</dt>
            <dd><StatusBadge descriptor=vm.status /></dd>
        </dl>
        {vm.tracked.then(|| view! {
            <p class="details-grid__note">"This order is followed on the tracking page."</p>
        })}
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a025_customer_orders::{
        DispatchRule, FixtureOrderProvider, OrderProvider, StatusKind,
    };

    #[test]
    fn test_find_existing_order() {
        let orders = FixtureOrderProvider::default().fetch_orders().unwrap();
        let dispatcher = ViewDispatcher::new(vec![DispatchRule::Order(OrderId::new("003"))]);
        let vm = OrderDetailsViewModel::find(
            &orders,
            &OrderId::new("004"),
            &StatusRegistry::default(),
            &dispatcher,
        )
        .unwrap()
        .unwrap();
        assert_eq!(vm.customer, "Alice Brown");
        assert_eq!(vm.date_iso, "2023-05-18");
        assert_eq!(vm.date_long, "May 18, 2023");
        assert_eq!(vm.status.label, "Ready to Ship");
        assert!(!vm.tracked);
    }

    #[test]
    fn test_find_tracked_order() {
        let orders = FixtureOrderProvider::default().fetch_orders().unwrap();
        let dispatcher = ViewDispatcher::new(vec![DispatchRule::Status(StatusKind::New)]);
        let vm = OrderDetailsViewModel::find(
            &orders,
            &OrderId::new("006"),
            &StatusRegistry::default(),
            &dispatcher,
        )
        .unwrap()
        .unwrap();
        assert!(vm.tracked);
    }

    #[test]
    fn test_missing_order() {
        let orders = FixtureOrderProvider::default().fetch_orders().unwrap();
        let found = OrderDetailsViewModel::find(
            &orders,
            &OrderId::new("404"),
            &StatusRegistry::default(),
            &ViewDispatcher::default(),
        )
        .unwrap();
        assert_eq!(found, None);
    }
}
