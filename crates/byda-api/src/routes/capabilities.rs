use axum::Json;
use byda_types::{CapabilityInfo, CATALOG};

/// The static capability catalog, in display order
#[utoipa::path(
    get,
    path = "/api/capabilities",
    responses(
        (status = 200, description = "Capability catalog", body = [serde_json::Value])
    ),
    tag = "capabilities"
)]
pub async fn list_capabilities() -> Json<&'static [CapabilityInfo]> {
    Json(CATALOG.as_slice())
}
