use crate::{
    model::schedule::ScheduleType,
    server::{
        data::schedule::ScheduleRepository,
        model::schedule::{CreateScheduleParams, UpdateScheduleParams, SWAP_STATUS_PENDING},
    },
};
use chrono::{NaiveDate, NaiveTime};
use entity::prelude::{Schedule, ScheduleSwapRequest, User, WorkLocation};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod create_swap_request;
mod find_next_for_user;
mod get_all;
mod get_for_user_between;
mod update;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

fn builder() -> TestBuilder {
    TestBuilder::new()
        .with_table(User)
        .with_table(WorkLocation)
        .with_table(Schedule)
        .with_table(ScheduleSwapRequest)
}
