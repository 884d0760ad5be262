//! Attendance service.
//!
//! Check-in and check-out events with geolocation and a selfie. A check-in is marked
//! late when the user has a schedule that day and checks in after the shift starts.
//! Listing enriches each event with the user's display name, email and department, and
//! non-staff callers only ever see their own events.

use chrono::{Datelike, NaiveDate, Utc};
use sea_orm::DatabaseConnection;
use std::collections::{BTreeMap, HashMap};

use crate::{
    model::attendance::{
        AttendanceStatus, AttendanceType, CreateAttendanceDto, UpdateAttendanceDto,
    },
    server::{
        data::{
            attendance::AttendanceRepository, department::DepartmentRepository,
            employee::EmployeeRepository, schedule::ScheduleRepository, user::UserRepository,
        },
        error::AppError,
        model::{
            actor::Actor,
            attendance::{
                Attendance, AttendanceFilter, AttendanceListItem, CreateAttendanceParams,
                UpdateAttendanceParams,
            },
            page::{Page, PageParams},
        },
        service::{parse_enum, require_text},
        util::date::{day_range, inclusive_range},
    },
};

pub struct AttendanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a check-in or check-out for the authenticated user.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the event
    /// - `dto` - Event type, optional time (defaults to now), coordinates and selfie
    ///
    /// # Returns
    /// - `Ok(Attendance)` - The stored event with its computed status
    /// - `Err(AppError::BadRequest)` - Unknown type, missing selfie or coordinates out of range
    pub async fn create(
        &self,
        user_id: &str,
        dto: CreateAttendanceDto,
    ) -> Result<Attendance, AppError> {
        let attendance_type = parse_enum::<AttendanceType>(&dto.attendance_type)?;
        require_text(&dto.selfie_url, "selfie url is required")?;
        validate_coordinates(dto.latitude, dto.longitude)?;

        let time = dto.time.unwrap_or_else(Utc::now);
        let mut status = AttendanceStatus::Present;

        if attendance_type == AttendanceType::CheckIn {
            let schedule = ScheduleRepository::new(self.db)
                .find_by_user_and_date(user_id, time.date_naive())
                .await?;

            if let Some(schedule) = schedule {
                if time.time() > schedule.shift_start {
                    status = AttendanceStatus::Late;
                }
            }
        }

        let attendance = AttendanceRepository::new(self.db)
            .create(CreateAttendanceParams {
                user_id: user_id.to_string(),
                attendance_type,
                time,
                latitude: dto.latitude,
                longitude: dto.longitude,
                selfie_url: dto.selfie_url,
                notes: dto.notes,
                status,
            })
            .await?;

        tracing::debug!(
            "Recorded {} for user {} as {}",
            attendance.attendance_type,
            user_id,
            attendance.status
        );

        Ok(attendance)
    }

    /// Lists attendance events with the owner's name, email and department.
    ///
    /// # Arguments
    /// - `actor` - Caller; non-staff callers are restricted to their own events
    /// - `date` - Optional UTC day filter
    /// - `attendance_type` - Optional type filter
    /// - `params` - One-based page and page size
    ///
    /// # Returns
    /// - `Ok(Page<AttendanceListItem>)` - Enriched events, newest first
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn list(
        &self,
        actor: &Actor,
        date: Option<NaiveDate>,
        attendance_type: Option<AttendanceType>,
        params: PageParams,
    ) -> Result<Page<AttendanceListItem>, AppError> {
        let filter = AttendanceFilter {
            user_id: (!actor.is_staff()).then(|| actor.user_id.clone()),
            date,
            attendance_type,
        };

        let page = AttendanceRepository::new(self.db)
            .get_paginated(filter, params)
            .await?;

        let mut user_ids: Vec<String> = page.items.iter().map(|a| a.user_id.clone()).collect();
        user_ids.sort();
        user_ids.dedup();

        let users: HashMap<String, _> = UserRepository::new(self.db)
            .get_by_ids(&user_ids)
            .await?
            .into_iter()
            .map(|user| (user.id.clone(), user))
            .collect();
        let employees: HashMap<String, _> = EmployeeRepository::new(self.db)
            .get_by_user_ids(&user_ids)
            .await?
            .into_iter()
            .map(|employee| (employee.user_id.clone(), employee))
            .collect();

        let mut department_ids: Vec<String> = employees
            .values()
            .filter_map(|employee| employee.department_id.clone())
            .collect();
        department_ids.sort();
        department_ids.dedup();
        let departments: HashMap<String, String> = DepartmentRepository::new(self.db)
            .get_by_ids(&department_ids)
            .await?
            .into_iter()
            .map(|department| (department.id, department.name))
            .collect();

        let Page {
            items,
            total,
            page,
            per_page,
            total_pages,
        } = page;

        let items = items
            .into_iter()
            .map(|attendance| {
                let user = users.get(&attendance.user_id);
                let employee = employees.get(&attendance.user_id);

                let name = employee
                    .map(|employee| employee.name.clone())
                    .or_else(|| user.map(|user| user.full_name.clone()))
                    .unwrap_or_default();
                let email = user.map(|user| user.email.clone()).unwrap_or_default();
                let department = employee
                    .and_then(|employee| employee.department_id.as_ref())
                    .and_then(|id| departments.get(id).cloned());

                AttendanceListItem {
                    attendance,
                    name,
                    email,
                    department,
                }
            })
            .collect();

        Ok(Page {
            items,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Gets one event, enforcing the ownership rule.
    ///
    /// # Returns
    /// - `Ok(Attendance)` - The event
    /// - `Err(AppError::NotFound)` - No event with that ID
    /// - `Err(AuthError::AccessDenied)` - Caller is neither the owner nor staff
    pub async fn get(&self, actor: &Actor, id: &str) -> Result<Attendance, AppError> {
        let attendance = self.find(id).await?;
        actor.ensure_owner_or_staff(&attendance.user_id, "read attendance")?;

        Ok(attendance)
    }

    /// Applies a partial update; only given fields change.
    pub async fn update(
        &self,
        actor: &Actor,
        id: &str,
        dto: UpdateAttendanceDto,
    ) -> Result<Attendance, AppError> {
        let existing = self.find(id).await?;
        actor.ensure_owner_or_staff(&existing.user_id, "update attendance")?;

        if let Some(selfie_url) = &dto.selfie_url {
            require_text(selfie_url, "selfie url is required")?;
        }
        validate_coordinates(
            dto.latitude.unwrap_or(existing.latitude),
            dto.longitude.unwrap_or(existing.longitude),
        )?;

        let params = UpdateAttendanceParams {
            id: id.to_string(),
            attendance_type: dto.attendance_type.as_deref().map(parse_enum).transpose()?,
            time: dto.time,
            latitude: dto.latitude,
            longitude: dto.longitude,
            selfie_url: dto.selfie_url,
            notes: dto.notes,
            status: dto.status.as_deref().map(parse_enum).transpose()?,
        };

        AttendanceRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound("attendance not found".to_string()))
    }

    pub async fn delete(&self, actor: &Actor, id: &str) -> Result<(), AppError> {
        let existing = self.find(id).await?;
        actor.ensure_owner_or_staff(&existing.user_id, "delete attendance")?;

        AttendanceRepository::new(self.db).delete(id).await?;

        Ok(())
    }

    /// Maps each active employee's name to whether they recorded anything on `date`.
    ///
    /// # Arguments
    /// - `date` - UTC day to check
    ///
    /// # Returns
    /// - `Ok(BTreeMap<String, bool>)` - Presence by employee name
    pub async fn status_map(&self, date: NaiveDate) -> Result<BTreeMap<String, bool>, AppError> {
        let (start, end) = day_range(date);

        let employees = EmployeeRepository::new(self.db).get_active().await?;
        let present = AttendanceRepository::new(self.db)
            .user_ids_between(start, end)
            .await?;

        Ok(employees
            .into_iter()
            .map(|employee| {
                let is_present = present.contains(&employee.user_id);
                (employee.name, is_present)
            })
            .collect())
    }

    /// Gets a user's events between two dates inclusive, oldest first.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the events
    /// - `start` - First day; defaults to the first of the current month
    /// - `end` - Last day; defaults to today
    ///
    /// # Returns
    /// - `Ok(Vec<Attendance>)` - Events in the range
    /// - `Err(AppError::BadRequest)` - `start` is after `end`
    pub async fn history(
        &self,
        user_id: &str,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<Attendance>, AppError> {
        let today = Utc::now().date_naive();
        let start = start.unwrap_or_else(|| today.with_day(1).unwrap_or(today));
        let end = end.unwrap_or(today);

        if start > end {
            return Err(AppError::BadRequest(
                "start date must be before end date".to_string(),
            ));
        }

        let (from, to) = inclusive_range(start, end);

        Ok(AttendanceRepository::new(self.db)
            .get_by_user_between(user_id, from, to)
            .await?)
    }

    async fn find(&self, id: &str) -> Result<Attendance, AppError> {
        AttendanceRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("attendance not found".to_string()))
    }
}

fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), AppError> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(AppError::BadRequest(
            "latitude must be between -90 and 90".to_string(),
        ));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(AppError::BadRequest(
            "longitude must be between -180 and 180".to_string(),
        ));
    }
    Ok(())
}
