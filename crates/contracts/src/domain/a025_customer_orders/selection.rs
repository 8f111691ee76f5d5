use super::error::OrderDashboardError;
use super::status::StatusKind;
use std::str::FromStr;

/// Текущий фильтр дашборда
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    #[default]
    All,
    Status(StatusKind),
}

impl Selection {
    pub fn code(&self) -> &'static str {
        match self {
            Selection::All => "all",
            Selection::Status(kind) => kind.code(),
        }
    }

    pub fn matches(&self, status: StatusKind) -> bool {
        match self {
            Selection::All => true,
            Selection::Status(kind) => *kind == status,
        }
    }
}

impl From<StatusKind> for Selection {
    fn from(kind: StatusKind) -> Self {
        Selection::Status(kind)
    }
}

impl FromStr for Selection {
    type Err = OrderDashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Selection::All);
        }
        StatusKind::from_code(s)
            .map(Selection::Status)
            .ok_or_else(|| OrderDashboardError::InvalidSelection {
                value: s.to_string(),
            })
    }
}
