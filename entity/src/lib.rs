//! SeaORM entity models for the attendance backend.
//!
//! Every table created by the `migration` crate has a matching module here. Enumerated
//! values (roles, statuses, types) are stored as plain strings and converted to typed
//! domain enums at the repository boundary.

pub mod prelude;

pub mod attendance;
pub mod department;
pub mod device;
pub mod device_log;
pub mod employee;
pub mod leave_request;
pub mod monitoring_report;
pub mod notification;
pub mod schedule;
pub mod schedule_swap_request;
pub mod user;
pub mod work_location;
