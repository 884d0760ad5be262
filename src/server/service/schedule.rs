//! Schedule service.
//!
//! Shifts assigned to users by managers, with optional break windows and work
//! locations. Users read their own rotation and monthly calendar and may ask to swap
//! one of their shifts with another.

use chrono::{NaiveDate, NaiveTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::schedule::{CreateScheduleDto, ScheduleSwapDto, ScheduleType, UpdateScheduleDto},
    server::{
        data::{
            schedule::ScheduleRepository, user::UserRepository,
            work_location::WorkLocationRepository,
        },
        error::{auth::AuthError, AppError},
        model::{
            actor::Actor,
            schedule::{
                CreateScheduleParams, Schedule, ScheduleSwapRequest, UpdateScheduleParams,
            },
        },
        service::parse_enum,
        util::date::{month_bounds, parse_time},
    },
};

/// Shift and break times of a schedule, validated together.
struct ShiftTimes {
    shift_start: NaiveTime,
    shift_end: NaiveTime,
    break_start: Option<NaiveTime>,
    break_end: Option<NaiveTime>,
}

impl ShiftTimes {
    /// Checks that the shift is ordered and any break lies within it.
    fn validate(&self) -> Result<(), AppError> {
        if self.shift_start >= self.shift_end {
            return Err(AppError::BadRequest(
                "shift start must be before shift end".to_string(),
            ));
        }

        match (self.break_start, self.break_end) {
            (None, None) => Ok(()),
            (Some(start), Some(end)) => {
                if start >= end || start < self.shift_start || end > self.shift_end {
                    return Err(AppError::BadRequest(
                        "break must be within the shift".to_string(),
                    ));
                }
                Ok(())
            }
            _ => Err(AppError::BadRequest(
                "break start and break end must be set together".to_string(),
            )),
        }
    }
}

pub struct ScheduleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScheduleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Assigns a shift to a user.
    ///
    /// # Arguments
    /// - `dto` - User, date, `HH:MM` shift and break times, location and type
    ///
    /// # Returns
    /// - `Ok(Schedule)` - The created schedule
    /// - `Err(AppError::BadRequest)` - Malformed or inconsistent times, or unknown type
    /// - `Err(AppError::NotFound)` - User or work location does not exist
    pub async fn create(&self, dto: CreateScheduleDto) -> Result<Schedule, AppError> {
        let times = ShiftTimes {
            shift_start: parse_shift_time(&dto.shift_start)?,
            shift_end: parse_shift_time(&dto.shift_end)?,
            break_start: dto.break_start.as_deref().map(parse_shift_time).transpose()?,
            break_end: dto.break_end.as_deref().map(parse_shift_time).transpose()?,
        };
        times.validate()?;

        let schedule_type = match dto.schedule_type.as_deref() {
            Some(value) => parse_enum(value)?,
            None => ScheduleType::default(),
        };

        if UserRepository::new(self.db)
            .find_by_id(&dto.user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("user not found".to_string()));
        }
        self.ensure_work_location(dto.work_location_id.as_deref())
            .await?;

        Ok(ScheduleRepository::new(self.db)
            .create(CreateScheduleParams {
                user_id: dto.user_id,
                date: dto.date,
                shift_start: times.shift_start,
                shift_end: times.shift_end,
                break_start: times.break_start,
                break_end: times.break_end,
                work_location_id: dto.work_location_id,
                schedule_type,
            })
            .await?)
    }

    /// Lists schedules ordered by date.
    ///
    /// Managers and staff see every schedule and may filter by user; everyone else
    /// only sees their own.
    pub async fn list(
        &self,
        actor: &Actor,
        user_id: Option<&str>,
    ) -> Result<Vec<Schedule>, AppError> {
        let user_id = if actor.is_manager() {
            user_id
        } else {
            Some(actor.user_id.as_str())
        };

        Ok(ScheduleRepository::new(self.db).get_all(user_id).await?)
    }

    pub async fn get(&self, actor: &Actor, id: &str) -> Result<Schedule, AppError> {
        let schedule = self.find(id).await?;

        if !actor.is_manager() {
            actor.ensure_owner_or_staff(&schedule.user_id, "read schedule")?;
        }

        Ok(schedule)
    }

    /// Applies a partial update, validating the merged shift.
    ///
    /// # Returns
    /// - `Ok(Schedule)` - The updated schedule
    /// - `Err(AppError::BadRequest)` - Merged times are inconsistent or a value is malformed
    /// - `Err(AppError::NotFound)` - Schedule or work location does not exist
    pub async fn update(&self, id: &str, dto: UpdateScheduleDto) -> Result<Schedule, AppError> {
        let existing = self.find(id).await?;

        let times = ShiftTimes {
            shift_start: merge_time(dto.shift_start.as_deref(), existing.shift_start)?,
            shift_end: merge_time(dto.shift_end.as_deref(), existing.shift_end)?,
            break_start: merge_optional_time(dto.break_start.as_deref(), existing.break_start)?,
            break_end: merge_optional_time(dto.break_end.as_deref(), existing.break_end)?,
        };
        times.validate()?;

        let work_location_id = dto.work_location_id.or(existing.work_location_id);
        self.ensure_work_location(work_location_id.as_deref())
            .await?;

        let schedule_type = match dto.schedule_type.as_deref() {
            Some(value) => parse_enum(value)?,
            None => existing.schedule_type,
        };

        ScheduleRepository::new(self.db)
            .update(UpdateScheduleParams {
                id: id.to_string(),
                date: dto.date.unwrap_or(existing.date),
                shift_start: times.shift_start,
                shift_end: times.shift_end,
                break_start: times.break_start,
                break_end: times.break_end,
                work_location_id,
                schedule_type,
            })
            .await?
            .ok_or_else(|| AppError::NotFound("schedule not found".to_string()))
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !ScheduleRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("schedule not found".to_string()));
        }
        Ok(())
    }

    /// Gets the user's next shift dated today or later.
    ///
    /// # Returns
    /// - `Ok(Schedule)` - Earliest upcoming schedule
    /// - `Err(AppError::NotFound)` - Nothing scheduled from today on
    pub async fn rotation(&self, user_id: &str) -> Result<Schedule, AppError> {
        self.rotation_from(user_id, Utc::now().date_naive()).await
    }

    async fn rotation_from(&self, user_id: &str, from: NaiveDate) -> Result<Schedule, AppError> {
        ScheduleRepository::new(self.db)
            .find_next_for_user(user_id, from)
            .await?
            .ok_or_else(|| AppError::NotFound("no upcoming schedule".to_string()))
    }

    /// Gets the user's schedules within one calendar month.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the schedules
    /// - `year` - Calendar year
    /// - `month` - Month number, 1 through 12
    ///
    /// # Returns
    /// - `Ok(Vec<Schedule>)` - Schedules in the month ordered by date
    /// - `Err(AppError::BadRequest)` - Month out of range
    pub async fn calendar(
        &self,
        user_id: &str,
        year: i32,
        month: u32,
    ) -> Result<Vec<Schedule>, AppError> {
        let (first, last) = month_bounds(year, month).ok_or_else(|| {
            AppError::BadRequest("month must be between 1 and 12".to_string())
        })?;

        Ok(ScheduleRepository::new(self.db)
            .get_for_user_between(user_id, first, last)
            .await?)
    }

    /// Records a request to swap one of the caller's shifts with another shift.
    ///
    /// # Arguments
    /// - `actor` - Caller, who must own the first schedule
    /// - `dto` - The caller's schedule and the schedule to swap with
    ///
    /// # Returns
    /// - `Ok(ScheduleSwapRequest)` - The pending swap request
    /// - `Err(AppError::BadRequest)` - Both IDs name the same schedule
    /// - `Err(AppError::NotFound)` - Either schedule does not exist
    /// - `Err(AuthError::AccessDenied)` - First schedule belongs to someone else
    pub async fn swap(
        &self,
        actor: &Actor,
        dto: ScheduleSwapDto,
    ) -> Result<ScheduleSwapRequest, AppError> {
        let own = self.find(&dto.schedule_id_1).await?;
        let other = self.find(&dto.schedule_id_2).await?;

        if own.user_id != actor.user_id {
            return Err(AuthError::AccessDenied(
                actor.user_id.clone(),
                format!("attempted to swap schedule {} owned by user {}", own.id, own.user_id),
            )
            .into());
        }
        if own.id == other.id {
            return Err(AppError::BadRequest(
                "cannot swap a schedule with itself".to_string(),
            ));
        }

        Ok(ScheduleRepository::new(self.db)
            .create_swap_request(&actor.user_id, &own.id, &other.id)
            .await?)
    }

    async fn find(&self, id: &str) -> Result<Schedule, AppError> {
        ScheduleRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("schedule not found".to_string()))
    }

    async fn ensure_work_location(&self, id: Option<&str>) -> Result<(), AppError> {
        if let Some(id) = id {
            if !WorkLocationRepository::new(self.db).exists(id).await? {
                return Err(AppError::NotFound("work location not found".to_string()));
            }
        }
        Ok(())
    }
}

fn parse_shift_time(value: &str) -> Result<NaiveTime, AppError> {
    parse_time(value).map_err(|_| AppError::BadRequest(format!("invalid time format: {}", value)))
}

fn merge_time(value: Option<&str>, current: NaiveTime) -> Result<NaiveTime, AppError> {
    value.map(parse_shift_time).unwrap_or(Ok(current))
}

/// Merges an optional time field. Absent keeps `current`; an empty string clears it.
fn merge_optional_time(
    value: Option<&str>,
    current: Option<NaiveTime>,
) -> Result<Option<NaiveTime>, AppError> {
    match value {
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => parse_shift_time(value).map(Some),
        None => Ok(current),
    }
}
