use crate::server::data::employee::EmployeeRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_active;
mod get_by_user_ids;
