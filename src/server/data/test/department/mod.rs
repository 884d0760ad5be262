use crate::server::{
    data::department::DepartmentRepository,
    model::department::{CreateDepartmentParams, UpdateDepartmentParams},
};
use entity::prelude::Department;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
mod name_taken;
mod update;
