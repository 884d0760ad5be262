//! Attendance domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DbErr;

use crate::{
    model::attendance::{
        AttendanceDto, AttendanceListItemDto, AttendanceStatus, AttendanceType,
    },
    server::model::parse_column,
};

/// A single check-in or check-out event.
#[derive(Debug, Clone, PartialEq)]
pub struct Attendance {
    pub id: String,
    pub user_id: String,
    pub time: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub selfie_url: String,
    pub attendance_type: AttendanceType,
    pub notes: Option<String>,
    pub status: AttendanceStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Attendance {
    /// Converts an entity model to an attendance domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Attendance)` - The converted domain model
    /// - `Err(DbErr::Custom)` - Stored type or status is not a known value
    pub fn from_entity(entity: entity::attendance::Model) -> Result<Self, DbErr> {
        Ok(Self {
            attendance_type: parse_column(&entity.attendance_type)?,
            status: parse_column(&entity.status)?,
            id: entity.id,
            user_id: entity.user_id,
            time: entity.time,
            latitude: entity.latitude,
            longitude: entity.longitude,
            selfie_url: entity.selfie_url,
            notes: entity.notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> AttendanceDto {
        AttendanceDto {
            id: self.id,
            user_id: self.user_id,
            time: self.time,
            latitude: self.latitude,
            longitude: self.longitude,
            selfie_url: self.selfie_url,
            attendance_type: self.attendance_type,
            notes: self.notes,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Attendance enriched with the owner's display data for listings.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceListItem {
    pub attendance: Attendance,
    /// Employee name, falling back to the user's full name.
    pub name: String,
    pub email: String,
    pub department: Option<String>,
}

impl AttendanceListItem {
    pub fn into_dto(self) -> AttendanceListItemDto {
        let attendance = self.attendance;
        AttendanceListItemDto {
            id: attendance.id,
            user_id: attendance.user_id,
            name: self.name,
            email: self.email,
            department: self.department,
            time: attendance.time,
            latitude: attendance.latitude,
            longitude: attendance.longitude,
            selfie_url: attendance.selfie_url,
            attendance_type: attendance.attendance_type,
            notes: attendance.notes,
            status: attendance.status,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAttendanceParams {
    pub user_id: String,
    pub attendance_type: AttendanceType,
    pub time: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub selfie_url: String,
    pub notes: Option<String>,
    pub status: AttendanceStatus,
}

/// Partial attendance update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateAttendanceParams {
    pub id: String,
    pub attendance_type: Option<AttendanceType>,
    pub time: Option<DateTime<Utc>>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub selfie_url: Option<String>,
    pub notes: Option<String>,
    pub status: Option<AttendanceStatus>,
}

/// Filters for attendance listings.
#[derive(Debug, Clone, Default)]
pub struct AttendanceFilter {
    /// Restrict to one user's records.
    pub user_id: Option<String>,
    /// Restrict to a single UTC day.
    pub date: Option<NaiveDate>,
    pub attendance_type: Option<AttendanceType>,
}
