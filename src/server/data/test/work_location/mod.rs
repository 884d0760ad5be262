use crate::server::{
    data::work_location::WorkLocationRepository,
    model::work_location::{CreateWorkLocationParams, UpdateWorkLocationParams},
};
use entity::prelude::WorkLocation;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;
