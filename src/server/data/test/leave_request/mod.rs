use crate::{
    model::leave::{LeaveStatus, LeaveType},
    server::{
        data::leave_request::LeaveRequestRepository,
        model::{
            leave::{CreateLeaveParams, LeaveFilter, ReviewLeaveParams, UpdateLeaveParams},
            page::PageParams,
        },
    },
};
use chrono::NaiveDate;
use entity::prelude::{LeaveRequest, User};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_by_status;
mod create;
mod get_approved_starting_between;
mod get_paginated;
mod review;
mod update;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
