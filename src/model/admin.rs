use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Platform-wide counters for the admin overview page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlatformStatsDto {
    pub students: u64,
    pub teachers: u64,
    pub companies: u64,
    pub courses: u64,
    pub orders: u64,
    pub revenue_cents: i64,
}
