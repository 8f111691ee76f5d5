use crate::shared::icons::icon;
use contracts::domain::a025_customer_orders::{count_caption, ColorCategory};
use leptos::prelude::*;

use super::status_badge::color_modifier;

/// Summary card for one order status: label, icon and order count.
/// Clicking the card selects the status as the list filter.
#[component]
pub fn StatusCard(
    /// Status label displayed above the count
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Number of orders in this status
    count: usize,
    color: ColorCategory,
    /// Whether this status is the active filter
    #[prop(into)]
    active: Signal<bool>,
    on_select: Callback<()>,
) -> impl IntoView {
    let card_class = move || {
        let mut class = format!("stat-card stat-card--clickable {}", color_modifier(color));
        if active.get() {
            class.push_str(" stat-card--active");
        }
        class
    };

    view! {
        <div class=card_class on:click=move |_| on_select.run(())>
            <div class="stat-card__header">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__icon">{icon(&icon_name)}</div>
            </div>
            <div class="stat-card__content">
                <div class="stat-card__value">{count}</div>
                <div class="stat-card__subtitle">{count_caption(count)}</div>
            </div>
        </div>
    }
}

/// "Create New Order" card. Order creation is not wired up; the card is informational.
#[component]
pub fn CreateOrderCard() -> impl IntoView {
    view! {
        <div class="stat-card stat-card--accent">
            <div class="stat-card__header">
                <div class="stat-card__label">"Create New Order"</div>
                <div class="stat-card__icon">{icon("plus")}</div>
            </div>
            <div class="stat-card__content">
                <div class="stat-card__value">"+"</div>
                <div class="stat-card__subtitle">"Click to create"</div>
            </div>
        </div>
    }
}
