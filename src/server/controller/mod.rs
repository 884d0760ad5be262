//! HTTP request handlers.
//!
//! Each handler authenticates the caller through [`AuthGuard`](super::middleware::auth::AuthGuard),
//! delegates to a service and converts the domain result to a DTO. Every handler carries a
//! `#[utoipa::path]` annotation collected into the OpenAPI document by the router.

pub mod attendance;
pub mod auth;
pub mod department;
pub mod device;
pub mod index;
pub mod leave;
pub mod monitoring;
pub mod notification;
pub mod param;
pub mod schedule;
pub mod user;
pub mod work_location;
