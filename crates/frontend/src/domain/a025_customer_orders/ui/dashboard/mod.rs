//! Дашборд заказов: карточки статусов сверху, таблица заказов снизу.
//!
//! Клик по карточке фильтрует таблицу, "View Details" переходит на
//! страницу заказа или на страницу отслеживания (решает `ViewDispatcher`).

pub mod state;
pub mod view_model;

use self::state::{create_state, DashboardState};
use self::view_model::{DashboardViewModel, OrderRow, StatusCardModel};
use crate::shared::components::filter_tag::FilterTag;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::components::status_card::{CreateOrderCard, StatusCard};
use crate::shared::context::use_order_data;
use contracts::domain::a025_customer_orders::OrderId;
use leptos::logging::log;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::{Button, ButtonAppearance, ButtonSize};

#[component]
pub fn OrderDashboard() -> impl IntoView {
    let data = use_order_data();
    let navigate = use_navigate();
    let state = create_state();

    let orders = StoredValue::new(data.load_orders());
    let registry = StoredValue::new(data.registry.clone());
    let dispatcher = StoredValue::new(data.dispatcher.clone());

    let view_model = Memo::new(move |_| {
        let selection = state.with(|s| s.selection);
        orders.with_value(|orders| {
            let orders = orders.as_ref().map_err(Clone::clone)?;
            registry.with_value(|registry| DashboardViewModel::build(orders, selection, registry))
        })
    });

    let on_view_details = Callback::new(move |id: OrderId| {
        let target = orders.with_value(|orders| {
            let orders = orders.as_deref().unwrap_or(&[]);
            dispatcher.with_value(|dispatcher| dispatcher.target_for_id(orders, &id))
        });
        let path = target.path();
        log!("View details: order='{}' -> {}", id, path);
        navigate(&path, Default::default());
    });

    view! {
        <div class="page order-dashboard">
            <PageHeader title="Order Dashboard" />
            {move || match view_model.get() {
                Ok(vm) => dashboard_body(vm, state, on_view_details),
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

fn dashboard_body(
    vm: DashboardViewModel,
    state: RwSignal<DashboardState>,
    on_view_details: Callback<OrderId>,
) -> AnyView {
    let DashboardViewModel {
        cards,
        rows,
        caption,
        filter_label,
    } = vm;

    view! {
        <div class="stat-grid">
            {cards.into_iter().map(|card| status_card(card, state)).collect_view()}
            <CreateOrderCard />
        </div>

        <div class="orders-panel">
            <div class="orders-panel__header">
                <h2 class="orders-panel__title">"Orders"</h2>
                <p class="orders-panel__caption">{caption}</p>
                {filter_label.map(|label| view! {
                    <FilterTag
                        label=label
                        on_remove=Callback::new(move |_| state.update(|s| s.reset()))
                    />
                })}
            </div>
            {orders_table(rows, on_view_details)}
        </div>
    }
    .into_any()
}

fn status_card(card: StatusCardModel, state: RwSignal<DashboardState>) -> impl IntoView {
    let kind = card.kind;
    view! {
        <StatusCard
            label=card.label
            icon_name=card.icon_name
            count=card.count
            color=card.color
            active=Signal::derive(move || state.with(|s| s.is_active(kind)))
            on_select=Callback::new(move |_| {
                log!("Status filter: {}", kind);
                state.update(|s| s.select(kind));
            })
        />
    }
}

fn orders_table(rows: Vec<OrderRow>, on_view_details: Callback<OrderId>) -> AnyView {
    if rows.is_empty() {
        return view! {
            <p class="orders-panel__empty">"No orders for the selected status."</p>
        }
        .into_any();
    }

    view! {
        <div class="table">
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">"Order ID"</th>
                        <th class="table__header-cell">"Customer"</th>
                        <th class="table__header-cell">"Date"</th>
                        <th class="table__header-cell">"Status"</th>
                        <th class="table__header-cell">"Action"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows.into_iter().map(|row| {
                        let id = row.id.clone();
                        view! {
                            <tr class="table__row">
                                <td class="table__cell">{row.id.to_string()}</td>
                                <td class="table__cell">{row.customer}</td>
                                <td class="table__cell">{row.date}</td>
                                <td class="table__cell">
                                    <StatusBadge descriptor=row.status />
                                </td>
                                <td class="table__cell">
                                    <Button
                                        size=ButtonSize::Small
                                        appearance=ButtonAppearance::Secondary
                                        on_click=move |_| on_view_details.run(id.clone())
                                    >
                                        "View Details"
                                    </Button>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
    .into_any()
}
