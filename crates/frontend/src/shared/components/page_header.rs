use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

/// PageHeader component - title, optional subtitle and optional back link
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Optional subtitle
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Route of the "Back" link; no link when empty
    #[prop(optional, into)]
    back_href: Option<String>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            {back_href.map(|href| view! {
                <A href=href attr:class="page-header__back">
                    {icon("arrow-left")}
                    "Back to orders"
                </A>
            })}
            <h1 class="page-header__title">{title}</h1>
            {move || subtitle.get().map(|s| view! {
                <div class="page-header__subtitle">{s}</div>
            })}
        </div>
    }
}
