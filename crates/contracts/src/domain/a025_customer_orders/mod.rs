//! Заказы покупателей: справочник статусов, фильтрация/агрегация
//! и выбор страницы для перехода из дашборда.

pub mod aggregate;
pub mod dispatch;
pub mod error;
pub mod provider;
pub mod selection;
pub mod status;
pub mod summary;

pub use aggregate::{Order, OrderId, OrderRecord};
pub use dispatch::{DispatchRule, NavigationTarget, ViewDispatcher};
pub use error::OrderDashboardError;
pub use provider::{FixtureOrderProvider, OrderProvider, StaticOrderProvider};
pub use selection::Selection;
pub use status::{ColorCategory, IconCategory, StatusDescriptor, StatusKind, StatusRegistry};
pub use summary::{count_by_status, count_caption, filter_orders, summarize, OrderSummary, StatusCounts};
