//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!
//!     // Create a user with its department and employee record
//!     let (user, department, employee) = factory::helpers::create_user_with_employee(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .email("ada@example.com")
//!     .role("hr")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Users (role, status, soft deletion)
//! - `department` - Departments
//! - `employee` - Employee records attached to a user
//! - `attendance` - Check-in and check-out events
//! - `leave_request` - Leave requests
//! - `schedule` - Shift schedules
//! - `notification` - Notifications
//! - `device` - Attendance devices
//! - `work_location` - Work locations
//! - `monitoring_report` - Stored monitoring reports
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod attendance;
pub mod department;
pub mod device;
pub mod employee;
pub mod helpers;
pub mod leave_request;
pub mod monitoring_report;
pub mod notification;
pub mod schedule;
pub mod user;
pub mod work_location;

pub use attendance::create_attendance;
pub use department::create_department;
pub use device::create_device;
pub use employee::create_employee;
pub use leave_request::create_leave_request;
pub use monitoring_report::create_monitoring_report;
pub use notification::create_notification;
pub use schedule::create_schedule;
pub use user::create_user;
pub use work_location::create_work_location;
