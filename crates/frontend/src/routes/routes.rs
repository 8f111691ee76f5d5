use crate::domain::a025_customer_orders::ui::dashboard::OrderDashboard;
use crate::domain::a025_customer_orders::ui::details::OrderDetailsPage;
use crate::domain::a025_customer_orders::ui::tracking::TrackingPage;
use crate::shared::components::page_header::PageHeader;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeader title="Page not found." back_href="/".to_string() />
        </div>
    }
}

/// `/` - дашборд, `/order/:id` - карточка заказа, `/tracking` - отслеживание
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="app-layout">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=OrderDashboard />
                    <Route path=path!("/order/:id") view=OrderDetailsPage />
                    <Route path=path!("/tracking") view=TrackingPage />
                </Routes>
            </main>
        </Router>
    }
}
