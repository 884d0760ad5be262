use crate::{
    model::device::{DeviceStatus, DeviceType},
    server::{
        data::device::DeviceRepository,
        model::device::{CreateDeviceLogParams, CreateDeviceParams, UpdateDeviceParams},
    },
};
use entity::prelude::{Device, DeviceLog};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod create_log;
mod update;

fn builder() -> TestBuilder {
    TestBuilder::new().with_table(Device).with_table(DeviceLog)
}
