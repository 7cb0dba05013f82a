//! Landing endpoint.

use crate::dto::response::{ApiResponse, IndexResponse};

/// Public paths listed by `GET /`.
pub const PUBLIC_ENDPOINTS: [&str; 6] = [
    "/login",
    "/personal-info",
    "/experiences",
    "/skills",
    "/projects",
    "/projects/groups",
];

/// GET /
pub async fn index() -> ApiResponse<IndexResponse> {
    ApiResponse::ok(
        "Welcome to the portfolio API",
        IndexResponse {
            available_endpoints: PUBLIC_ENDPOINTS.iter().map(|p| p.to_string()).collect(),
        },
    )
}
