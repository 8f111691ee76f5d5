use contracts::domain::a025_customer_orders::{Selection, StatusKind};
use leptos::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    /// Фильтр по статусу, по умолчанию все заказы
    pub selection: Selection,
}

impl DashboardState {
    pub fn select(&mut self, kind: StatusKind) {
        self.selection = Selection::Status(kind);
    }

    pub fn reset(&mut self) {
        self.selection = Selection::All;
    }

    pub fn is_active(&self, kind: StatusKind) -> bool {
        self.selection == Selection::Status(kind)
    }
}

/// Create state signal
pub fn create_state() -> RwSignal<DashboardState> {
    RwSignal::new(DashboardState::default())
}
