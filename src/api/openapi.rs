//! OpenAPI document for the public endpoints.

use utoipa::OpenApi;

use super::handlers::{system, waitlist};
use crate::domain::{CompanySize, InsertWaitlistEntry, WaitlistEntry};
use crate::error::ErrorResponse;

/// Generated OpenAPI description of the service.
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "waitlist-gateway", description = "Waitlist sign-up API"),
    paths(waitlist::submit_waitlist_entry, system::health_handler),
    components(schemas(
        InsertWaitlistEntry,
        WaitlistEntry,
        CompanySize,
        ErrorResponse,
        system::HealthResponse
    )),
    tags(
        (name = "Waitlist", description = "Waitlist sign-ups"),
        (name = "System", description = "Operational endpoints"),
    )
)]
pub struct ApiDoc;

/// Swagger UI at `/swagger-ui`, serving the document at
/// `/api-docs/openapi.json`.
#[cfg(feature = "swagger-ui")]
pub fn swagger_ui() -> utoipa_swagger_ui::SwaggerUi {
    utoipa_swagger_ui::SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
