//! Schedule and shift swap domain models and parameters.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::schedule::{ScheduleDto, ScheduleSwapRequestDto, ScheduleType},
    server::model::parse_column,
};

pub const SWAP_STATUS_PENDING: &str = "pending";

/// A planned shift for one user on one date.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    pub id: String,
    pub user_id: String,
    pub date: NaiveDate,
    pub shift_start: NaiveTime,
    pub shift_end: NaiveTime,
    pub break_start: Option<NaiveTime>,
    pub break_end: Option<NaiveTime>,
    pub work_location_id: Option<String>,
    pub schedule_type: ScheduleType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Schedule {
    pub fn from_entity(entity: entity::schedule::Model) -> Result<Self, DbErr> {
        Ok(Self {
            schedule_type: parse_column(&entity.schedule_type)?,
            id: entity.id,
            user_id: entity.user_id,
            date: entity.date,
            shift_start: entity.shift_start,
            shift_end: entity.shift_end,
            break_start: entity.break_start,
            break_end: entity.break_end,
            work_location_id: entity.work_location_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> ScheduleDto {
        ScheduleDto {
            id: self.id,
            user_id: self.user_id,
            date: self.date,
            shift_start: self.shift_start,
            shift_end: self.shift_end,
            break_start: self.break_start,
            break_end: self.break_end,
            work_location_id: self.work_location_id,
            schedule_type: self.schedule_type,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateScheduleParams {
    pub user_id: String,
    pub date: NaiveDate,
    pub shift_start: NaiveTime,
    pub shift_end: NaiveTime,
    pub break_start: Option<NaiveTime>,
    pub break_end: Option<NaiveTime>,
    pub work_location_id: Option<String>,
    pub schedule_type: ScheduleType,
}

/// Full replacement of a schedule's editable fields.
///
/// The service merges a partial request onto the stored schedule and validates the
/// result before building these parameters.
#[derive(Debug, Clone)]
pub struct UpdateScheduleParams {
    pub id: String,
    pub date: NaiveDate,
    pub shift_start: NaiveTime,
    pub shift_end: NaiveTime,
    pub break_start: Option<NaiveTime>,
    pub break_end: Option<NaiveTime>,
    pub work_location_id: Option<String>,
    pub schedule_type: ScheduleType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleSwapRequest {
    pub id: String,
    pub requester_id: String,
    pub schedule_id_1: String,
    pub schedule_id_2: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl ScheduleSwapRequest {
    pub fn from_entity(entity: entity::schedule_swap_request::Model) -> Self {
        Self {
            id: entity.id,
            requester_id: entity.requester_id,
            schedule_id_1: entity.schedule_id_1,
            schedule_id_2: entity.schedule_id_2,
            status: entity.status,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ScheduleSwapRequestDto {
        ScheduleSwapRequestDto {
            id: self.id,
            requester_id: self.requester_id,
            schedule_id_1: self.schedule_id_1,
            schedule_id_2: self.schedule_id_2,
            status: self.status,
            created_at: self.created_at,
        }
    }
}
