use crate::shared::icons::icon;
use contracts::domain::a025_customer_orders::{ColorCategory, StatusDescriptor};
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

/// CSS modifier shared by status cards and badges
pub fn color_modifier(color: ColorCategory) -> &'static str {
    match color {
        ColorCategory::Red => "status--red",
        ColorCategory::Orange => "status--orange",
        ColorCategory::Blue => "status--blue",
        ColorCategory::Green => "status--green",
    }
}

fn badge_color(color: ColorCategory) -> BadgeColor {
    match color {
        ColorCategory::Red => BadgeColor::Danger,
        ColorCategory::Orange => BadgeColor::Warning,
        ColorCategory::Blue => BadgeColor::Brand,
        ColorCategory::Green => BadgeColor::Success,
    }
}

/// Pill with the status icon and label
#[component]
pub fn StatusBadge(descriptor: StatusDescriptor) -> impl IntoView {
    let StatusDescriptor { label, color, icon: icon_kind } = descriptor;

    view! {
        <Badge
            appearance=BadgeAppearance::Tint
            color=badge_color(color)
            class=format!("status-badge {}", color_modifier(color))
        >
            {icon(icon_kind.icon_name())}
            <span class="status-badge__label">{label}</span>
        </Badge>
    }
}
