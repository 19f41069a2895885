use serde::Deserialize;

use sr_core::services::pickup::PickupSubmission;

/// Request body for POST /api/pickup/request
///
/// String fields default to empty so a missing field surfaces as the
/// workflow's ordered `Required field: ...` error rather than a
/// deserialization failure. Legacy clients send `scrapType`/`pickupDate`;
/// both spellings are accepted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePickupRequest {
    #[serde(default)]
    pub user_id: Option<i64>,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default, alias = "scrapType")]
    pub waste_category: String,

    #[serde(default)]
    pub weight: Option<f64>,

    #[serde(default)]
    pub address: String,

    #[serde(default)]
    pub latitude: Option<f64>,

    #[serde(default)]
    pub longitude: Option<f64>,

    #[serde(default, alias = "pickupDate")]
    pub scheduled_date: String,
}

impl From<CreatePickupRequest> for PickupSubmission {
    fn from(request: CreatePickupRequest) -> Self {
        PickupSubmission {
            user_id: request.user_id,
            name: request.name,
            email: request.email,
            phone: request.phone,
            waste_category: request.waste_category,
            weight: request.weight,
            address: request.address,
            latitude: request.latitude,
            longitude: request.longitude,
            scheduled_date: request.scheduled_date,
        }
    }
}

/// Query parameters for PUT /api/pickup/requests/{id}/status
#[derive(Debug, Clone, Deserialize)]
pub struct StatusUpdateQuery {
    pub status: String,
    pub notes: Option<String>,
}
