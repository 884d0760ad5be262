use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleType {
    #[default]
    Office,
    Remote,
    Hybrid,
}

impl ScheduleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Office => "office",
            Self::Remote => "remote",
            Self::Hybrid => "hybrid",
        }
    }
}

impl FromStr for ScheduleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "office" => Ok(Self::Office),
            "remote" => Ok(Self::Remote),
            "hybrid" => Ok(Self::Hybrid),
            _ => Err("invalid schedule type".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScheduleDto {
    pub id: String,
    pub user_id: String,
    pub date: NaiveDate,
    #[schema(value_type = String, example = "08:00:00")]
    pub shift_start: NaiveTime,
    #[schema(value_type = String, example = "17:00:00")]
    pub shift_end: NaiveTime,
    #[schema(value_type = Option<String>)]
    pub break_start: Option<NaiveTime>,
    #[schema(value_type = Option<String>)]
    pub break_end: Option<NaiveTime>,
    pub work_location_id: Option<String>,
    pub schedule_type: ScheduleType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateScheduleDto {
    pub user_id: String,
    pub date: NaiveDate,
    #[schema(value_type = String, example = "08:00")]
    pub shift_start: String,
    #[schema(value_type = String, example = "17:00")]
    pub shift_end: String,
    pub break_start: Option<String>,
    pub break_end: Option<String>,
    pub work_location_id: Option<String>,
    pub schedule_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateScheduleDto {
    pub date: Option<NaiveDate>,
    pub shift_start: Option<String>,
    pub shift_end: Option<String>,
    /// `HH:MM`; an empty string removes the break.
    pub break_start: Option<String>,
    /// `HH:MM`; an empty string removes the break.
    pub break_end: Option<String>,
    pub work_location_id: Option<String>,
    pub schedule_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScheduleSwapDto {
    pub schedule_id_1: String,
    pub schedule_id_2: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScheduleSwapRequestDto {
    pub id: String,
    pub requester_id: String,
    pub schedule_id_1: String,
    pub schedule_id_2: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
