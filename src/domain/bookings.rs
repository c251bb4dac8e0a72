use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifecycle of a cleaning request. Pending until a cleaner claims it;
/// Assigned bookings can be completed, Pending ones cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum BookingStatus {
    Pending,
    Assigned,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Assigned => "Assigned",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
        }
    }

    pub fn parse(s: &str) -> anyhow::Result<Self> {
        match s {
            "Pending" => Ok(BookingStatus::Pending),
            "Assigned" => Ok(BookingStatus::Assigned),
            "Completed" => Ok(BookingStatus::Completed),
            "Cancelled" => Ok(BookingStatus::Cancelled),
            other => Err(anyhow::anyhow!("unknown booking status: {other}")),
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
