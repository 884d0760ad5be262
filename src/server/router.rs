//! Route table, OpenAPI document and HTTP middleware stack.
//!
//! Routes are registered through `utoipa-axum` so every handler's `#[utoipa::path]`
//! lands in the generated OpenAPI document, which Swagger UI serves at `/swagger-ui`.

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    Router,
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        attendance::{self, ATTENDANCE_TAG},
        auth::{self, AUTH_TAG},
        department::{self, DEPARTMENT_TAG},
        device::{self, DEVICE_TAG},
        index::{self, INDEX_TAG},
        leave::{self, LEAVE_TAG},
        monitoring::{self, MONITORING_TAG},
        notification::{self, NOTIFICATION_TAG},
        schedule::{self, SCHEDULE_TAG},
        user::{self, ADMIN_USER_TAG, USER_TAG},
        work_location::{self, WORK_LOCATION_TAG},
    },
    state::AppState,
};

const SWAGGER_UI_PATH: &str = "/swagger-ui";
const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Browsers may cache preflight responses for 12 hours.
const CORS_MAX_AGE: Duration = Duration::from_secs(12 * 60 * 60);

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Attendance API",
        description = "Attendance, leave, scheduling and monitoring for HR teams"
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = INDEX_TAG, description = "Service information"),
        (name = AUTH_TAG, description = "Registration, login and token refresh"),
        (name = USER_TAG, description = "The authenticated user's profile"),
        (name = ADMIN_USER_TAG, description = "User administration"),
        (name = DEPARTMENT_TAG, description = "Departments"),
        (name = ATTENDANCE_TAG, description = "Check-in and check-out events"),
        (name = LEAVE_TAG, description = "Leave requests and approvals"),
        (name = SCHEDULE_TAG, description = "Shift schedules and swaps"),
        (name = NOTIFICATION_TAG, description = "User notifications"),
        (name = WORK_LOCATION_TAG, description = "Work locations"),
        (name = DEVICE_TAG, description = "Attendance devices and their logs"),
        (name = MONITORING_TAG, description = "Summaries, dashboards, reports and exports")
    )
)]
struct ApiDoc;

/// Registers the `bearer` JWT security scheme referenced by protected endpoints.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the complete application router.
///
/// # Arguments
/// - `state` - Shared application state handed to every handler
/// - `allowed_origins` - CORS origins; empty allows any origin
///
/// # Returns
/// Router serving the API, `GET /`, and Swagger UI, wrapped in CORS and tracing layers
pub fn router(state: AppState, allowed_origins: &[String]) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(index::app_info))
        .merge(api_routes())
        .split_for_parts();

    router
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, api))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        // auth
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::refresh_token))
        // user
        .routes(routes!(user::get_profile, user::update_profile))
        .routes(routes!(user::get_users, user::create_user))
        .routes(routes!(user::get_user, user::update_user, user::delete_user))
        // department
        .routes(routes!(department::get_departments))
        .routes(routes!(department::create_department))
        .routes(routes!(
            department::update_department,
            department::delete_department
        ))
        // attendance
        .routes(routes!(
            attendance::create_attendance,
            attendance::get_attendances
        ))
        .routes(routes!(attendance::get_attendance_status))
        .routes(routes!(attendance::get_attendance_history))
        .routes(routes!(
            attendance::get_attendance,
            attendance::update_attendance,
            attendance::delete_attendance
        ))
        // leave
        .routes(routes!(
            leave::create_leave_request,
            leave::get_leave_requests
        ))
        .routes(routes!(
            leave::get_leave_request,
            leave::update_leave_request,
            leave::delete_leave_request
        ))
        .routes(routes!(leave::approve_leave_request))
        .routes(routes!(leave::reject_leave_request))
        .routes(routes!(leave::get_leave_balance))
        // schedule
        .routes(routes!(schedule::create_schedule, schedule::get_schedules))
        .routes(routes!(schedule::get_schedule_rotation))
        .routes(routes!(schedule::get_schedule_calendar))
        .routes(routes!(schedule::swap_schedule))
        .routes(routes!(
            schedule::get_schedule,
            schedule::update_schedule,
            schedule::delete_schedule
        ))
        // notification
        .routes(routes!(
            notification::create_notification,
            notification::get_notifications
        ))
        .routes(routes!(
            notification::get_notification,
            notification::update_notification_status,
            notification::delete_notification
        ))
        // work location
        .routes(routes!(
            work_location::get_work_locations,
            work_location::create_work_location
        ))
        .routes(routes!(
            work_location::get_work_location,
            work_location::update_work_location,
            work_location::delete_work_location
        ))
        // device
        .routes(routes!(device::get_devices, device::create_device))
        .routes(routes!(
            device::get_device,
            device::update_device,
            device::delete_device
        ))
        .routes(routes!(device::create_device_log, device::get_device_logs))
        // monitoring
        .routes(routes!(monitoring::get_reports))
        .routes(routes!(monitoring::get_summary))
        .routes(routes!(monitoring::get_dashboard))
        .routes(routes!(monitoring::get_attendance_report))
        .routes(routes!(monitoring::export_reports))
}

/// CORS policy for browser clients.
///
/// Origins that are not valid header values are skipped with a warning.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let allow_origin = if allowed_origins.is_empty() {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin {}", origin);
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .max_age(CORS_MAX_AGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        response::Response,
    };
    use std::sync::Arc;
    use test_utils::{builder::TestBuilder, factory};
    use tower::ServiceExt;

    use crate::{
        model::user::UserRole,
        server::{cache::memory::MemoryCache, error::AppError, util::token::TokenMaker},
    };

    fn tokens() -> TokenMaker {
        TokenMaker::new("access-secret", "refresh-secret", 15, 60)
    }

    fn app(db: &sea_orm::DatabaseConnection) -> Router {
        let state = AppState::new(
            db.clone(),
            Arc::new(MemoryCache::new()),
            tokens(),
            "attendance".to_string(),
            "1.2.3".to_string(),
        );
        router(state, &[])
    }

    async fn json_body(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Tests the service information endpoint.
    ///
    /// Expected: 200 with the configured name and version
    #[tokio::test]
    async fn serves_app_info() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let response = app(db)
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["name"], "attendance");
        assert_eq!(body["version"], "1.2.3");

        Ok(())
    }

    /// Tests a protected endpoint without an Authorization header.
    ///
    /// Expected: 401 with the JSON error body
    #[tokio::test]
    async fn rejects_missing_authorization() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let response = app(db)
            .oneshot(
                Request::get("/api/v1/user/profile")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = json_body(response).await;
        assert_eq!(body["error"], "authorization header is not provided");

        Ok(())
    }

    /// Tests an employee calling a staff-only endpoint.
    ///
    /// Expected: 403
    #[tokio::test]
    async fn forbids_employee_from_admin_routes() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let (user, _, employee) = factory::helpers::create_user_with_employee(db).await?;
        let token =
            tokens().create_access_token(&user.id, &user.email, UserRole::Employee, &employee.id)?;

        let response = app(db)
            .oneshot(
                Request::get("/api/v1/admin/users")
                    .header("Authorization", format!("Bearer {}", token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        Ok(())
    }

    /// Tests reading the caller's profile with a valid token.
    ///
    /// Expected: 200 with the caller's user record
    #[tokio::test]
    async fn returns_profile_for_token_holder() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let (user, _, employee) = factory::helpers::create_user_with_employee(db).await?;
        let token =
            tokens().create_access_token(&user.id, &user.email, UserRole::Employee, &employee.id)?;

        let response = app(db)
            .oneshot(
                Request::get("/api/v1/user/profile")
                    .header("Authorization", format!("Bearer {}", token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["id"], user.id.as_str());
        assert_eq!(body["email"], user.email.as_str());

        Ok(())
    }

    /// Tests that the OpenAPI document is served and lists the API paths.
    ///
    /// Expected: 200 with the login path and bearer scheme present
    #[tokio::test]
    async fn serves_openapi_document() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let response = app(db)
            .oneshot(
                Request::get(OPENAPI_JSON_PATH)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert!(body["paths"]["/api/v1/auth/login"].is_object());
        assert!(body["components"]["securitySchemes"]["bearer"].is_object());

        Ok(())
    }

    /// Tests the CORS preflight response.
    ///
    /// Expected: allowed methods include PATCH and max age is 12 hours
    #[tokio::test]
    async fn answers_cors_preflight() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let response = app(db)
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/v1/attendance")
                    .header("Origin", "http://client.test")
                    .header("Access-Control-Request-Method", "PATCH")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let headers = response.headers();
        assert_eq!(headers["access-control-allow-origin"], "*");
        assert_eq!(headers["access-control-max-age"], "43200");
        assert!(headers["access-control-allow-methods"]
            .to_str()
            .unwrap()
            .contains("PATCH"));

        Ok(())
    }
}
