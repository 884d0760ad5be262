use axum::{extract::State, response::IntoResponse, Json};

use crate::{model::api::AppInfoDto, server::state::AppState};

/// Tag for grouping service information endpoints in OpenAPI documentation
pub static INDEX_TAG: &str = "index";

/// Report the service name and version.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Application name and version
#[utoipa::path(
    get,
    path = "/",
    tag = INDEX_TAG,
    responses(
        (status = 200, description = "Application name and version", body = AppInfoDto)
    ),
)]
pub async fn app_info(State(state): State<AppState>) -> impl IntoResponse {
    Json(AppInfoDto {
        name: state.app_name,
        version: state.app_version,
    })
}
