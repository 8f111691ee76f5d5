use crate::routes::routes::AppRoutes;
use crate::shared::config::load_dashboard_config;
use crate::shared::context::OrderDataContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_dashboard_config();

    // Provide order data, status registry and dispatch rules to every page.
    provide_context(OrderDataContext::from_config(&config));

    view! {
        <AppRoutes />
    }
}
