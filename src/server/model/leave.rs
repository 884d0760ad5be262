//! Leave request domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DbErr;

use crate::{
    model::leave::{LeaveBalanceDto, LeaveRequestDto, LeaveStatus, LeaveType},
    server::model::parse_column,
};

/// Days of leave granted per type and calendar year.
pub const ANNUAL_ENTITLEMENT: i64 = 12;

#[derive(Debug, Clone, PartialEq)]
pub struct LeaveRequest {
    pub id: String,
    pub user_id: String,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    /// User that approved or rejected the request.
    pub reviewed_by: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,
    /// Reviewer's note, set on rejection.
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LeaveRequest {
    pub fn from_entity(entity: entity::leave_request::Model) -> Result<Self, DbErr> {
        Ok(Self {
            leave_type: parse_column(&entity.leave_type)?,
            status: parse_column(&entity.status)?,
            id: entity.id,
            user_id: entity.user_id,
            start_date: entity.start_date,
            end_date: entity.end_date,
            reason: entity.reason,
            reviewed_by: entity.reviewed_by,
            reviewed_at: entity.reviewed_at,
            note: entity.note,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> LeaveRequestDto {
        LeaveRequestDto {
            id: self.id,
            user_id: self.user_id,
            leave_type: self.leave_type,
            start_date: self.start_date,
            end_date: self.end_date,
            reason: self.reason,
            status: self.status,
            reviewed_by: self.reviewed_by,
            reviewed_at: self.reviewed_at,
            note: self.note,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateLeaveParams {
    pub user_id: String,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

/// Partial leave update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateLeaveParams {
    pub id: String,
    pub leave_type: Option<LeaveType>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub reason: Option<String>,
}

/// Outcome of a review applied to a pending request.
#[derive(Debug, Clone)]
pub struct ReviewLeaveParams {
    pub id: String,
    pub status: LeaveStatus,
    pub reviewed_by: String,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct LeaveFilter {
    pub user_id: Option<String>,
    pub status: Option<LeaveStatus>,
}

/// Remaining leave of one type for one user in one year.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaveBalance {
    pub user_id: String,
    pub leave_type: LeaveType,
    pub year: i32,
    pub entitlement: i64,
    pub used: i64,
    pub remaining: i64,
}

impl LeaveBalance {
    pub fn into_dto(self) -> LeaveBalanceDto {
        LeaveBalanceDto {
            user_id: self.user_id,
            leave_type: self.leave_type,
            year: self.year,
            entitlement: self.entitlement,
            used: self.used,
            remaining: self.remaining,
        }
    }
}
