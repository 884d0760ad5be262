pub use super::attendance::Entity as Attendance;
pub use super::department::Entity as Department;
pub use super::device::Entity as Device;
pub use super::device_log::Entity as DeviceLog;
pub use super::employee::Entity as Employee;
pub use super::leave_request::Entity as LeaveRequest;
pub use super::monitoring_report::Entity as MonitoringReport;
pub use super::notification::Entity as Notification;
pub use super::schedule::Entity as Schedule;
pub use super::schedule_swap_request::Entity as ScheduleSwapRequest;
pub use super::user::Entity as User;
pub use super::work_location::Entity as WorkLocation;
