//! Data transfer objects shared by the HTTP API.
//!
//! Request and response bodies live here, together with the enumerations that appear on
//! the wire. Enumerations serialize as snake_case strings and parse from the same
//! spelling through `FromStr`, which the service layer uses to validate request input.

pub mod api;
pub mod attendance;
pub mod auth;
pub mod department;
pub mod device;
pub mod leave;
pub mod monitoring;
pub mod notification;
pub mod schedule;
pub mod user;
pub mod work_location;
