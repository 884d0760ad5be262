use crate::{
    model::attendance::{AttendanceStatus, AttendanceType},
    server::{
        data::attendance::AttendanceRepository,
        model::{
            attendance::{AttendanceFilter, CreateAttendanceParams, UpdateAttendanceParams},
            page::PageParams,
        },
    },
};
use chrono::{NaiveDate, TimeZone, Utc};
use entity::prelude::{Attendance, User};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_by_type_between;
mod create;
mod get_by_user_between;
mod get_paginated;
mod update;
mod user_ids_between;
