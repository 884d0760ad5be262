mod attendance;
mod department;
mod device;
mod employee;
mod leave_request;
mod monitoring;
mod notification;
mod schedule;
mod user;
mod work_location;
