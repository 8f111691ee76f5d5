use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::context::use_order_data;
use crate::shared::date_utils::format_order_date;
use contracts::domain::a025_customer_orders::{NavigationTarget, Order, ViewDispatcher};
use leptos::prelude::*;

/// Заказы, для которых "View Details" открывает страницу отслеживания
pub fn tracked_orders<'a>(orders: &'a [Order], dispatcher: &ViewDispatcher) -> Vec<&'a Order> {
    orders
        .iter()
        .filter(|order| dispatcher.target_for(order) == NavigationTarget::Tracking)
        .collect()
}

#[component]
pub fn TrackingPage() -> impl IntoView {
    let data = use_order_data();
    let loaded = data.load_orders();

    let body = match loaded {
        Err(e) => view! {
            <div class="warning-box">
                <span class="warning-box__icon">"⚠"</span>
                <span class="warning-box__text">{e.to_string()}</span>
            </div>
        }
        .into_any(),
        Ok(orders) => {
            let tracked = tracked_orders(&orders, &data.dispatcher);
            if tracked.is_empty() {
                view! { <p class="orders-panel__empty">"No orders are being tracked."</p> }.into_any()
            } else {
                let rows = tracked
                    .into_iter()
                    .map(|order| {
                        let status = data.registry.descriptor(order.status).ok().cloned();
                        view! {
                            <tr class="table__row">
                                <td class="table__cell">{order.id.to_string()}</td>
                                <td class="table__cell">{order.customer.clone()}</td>
                                <td class="table__cell">{format_order_date(order.date)}</td>
                                <td class="table__cell">
                                    {status.map(|descriptor| view! { <StatusBadge descriptor=descriptor /> })}
                                </td>
                            </tr>
                        }
                    })
                    .collect_view();
                view! {
                    <div class="table">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"Order ID"</th>
                                    <th class="table__header-cell">"Customer"</th>
                                    <th class="table__header-cell">"Date"</th>
                                    <th class="table__header-cell">"Status"</th>
                                </tr>
                            </thead>
                            <tbody>{rows}</tbody>
                        </table>
                    </div>
                }
                .into_any()
            }
        }
    };

    view! {
        <div class="page order-tracking">
            <PageHeader
                title="Order Tracking"
                subtitle="Orders currently followed for shipment".to_string()
                back_href="/".to_string()
            />
            {body}
        </div>
    }
}
