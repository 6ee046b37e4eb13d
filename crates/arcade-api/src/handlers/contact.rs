//! Contact form handler

use axum::{extract::State, Json};
use arcade_limiter::Quota;
use arcade_service::dto::ContactRequest;
use arcade_service::ContactService;
use serde::Serialize;

use crate::extractors::{ClientIp, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
}

/// Submit a contact form message
///
/// POST /contact
///
/// Keyed by IP since the form is open to signed-out visitors.
pub async fn submit_contact(
    State(state): State<AppState>,
    ip: ClientIp,
    ValidatedJson(request): ValidatedJson<ContactRequest>,
) -> ApiResult<Json<ContactResponse>> {
    state.check_quota(&format!("contact:{}", ip.as_str()), Quota::CONTACT)?;

    let service = ContactService::new(state.service_context());
    service.submit(request).await?;

    Ok(Json(ContactResponse { success: true }))
}
