//! Leave request service.
//!
//! Employees submit leave requests that staff approve or reject. Only pending requests
//! can be edited or reviewed. Each submission and review notifies the requester through
//! a background task so the request path never waits on the notification insert.

use chrono::{Datelike, NaiveDate, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        leave::{CreateLeaveRequestDto, LeaveStatus, LeaveType, UpdateLeaveRequestDto},
        notification::NotificationType,
    },
    server::{
        data::{leave_request::LeaveRequestRepository, notification::NotificationRepository},
        error::AppError,
        model::{
            actor::Actor,
            leave::{
                CreateLeaveParams, LeaveBalance, LeaveFilter, LeaveRequest, ReviewLeaveParams,
                UpdateLeaveParams, ANNUAL_ENTITLEMENT,
            },
            notification::CreateNotificationParams,
            page::{Page, PageParams},
        },
        service::{parse_enum, require_text},
        util::date::{inclusive_days, parse_date},
    },
};

pub struct LeaveService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeaveService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits a leave request for the authenticated user.
    ///
    /// The request starts pending. The submission notification is sent in the
    /// background; a failure there is logged and does not fail the request.
    ///
    /// # Arguments
    /// - `user_id` - Requesting user
    /// - `dto` - Leave type, `YYYY-MM-DD` start and end dates, and reason
    ///
    /// # Returns
    /// - `Ok(LeaveRequest)` - The stored pending request
    /// - `Err(AppError::BadRequest)` - Unknown type, malformed date or start after end
    pub async fn submit(
        &self,
        user_id: &str,
        dto: CreateLeaveRequestDto,
    ) -> Result<LeaveRequest, AppError> {
        let leave_type = parse_enum::<LeaveType>(&dto.leave_type)?;
        let start_date = parse_start_date(&dto.start_date)?;
        let end_date = parse_end_date(&dto.end_date)?;
        validate_date_order(start_date, end_date)?;
        require_text(&dto.reason, "reason is required")?;

        let request = LeaveRequestRepository::new(self.db)
            .create(CreateLeaveParams {
                user_id: user_id.to_string(),
                leave_type,
                start_date,
                end_date,
                reason: dto.reason,
            })
            .await?;

        self.notify(
            &request.user_id,
            format!("Your leave request for {} has been submitted.", leave_type),
        );

        Ok(request)
    }

    /// Lists leave requests, newest first.
    ///
    /// # Arguments
    /// - `actor` - Caller; non-staff callers only see their own requests
    /// - `status` - Optional status filter
    /// - `params` - One-based page and page size
    pub async fn list(
        &self,
        actor: &Actor,
        status: Option<LeaveStatus>,
        params: PageParams,
    ) -> Result<Page<LeaveRequest>, AppError> {
        let filter = LeaveFilter {
            user_id: (!actor.is_staff()).then(|| actor.user_id.clone()),
            status,
        };

        Ok(LeaveRequestRepository::new(self.db)
            .get_paginated(filter, params)
            .await?)
    }

    pub async fn get(&self, actor: &Actor, id: &str) -> Result<LeaveRequest, AppError> {
        let request = self.find(id).await?;
        actor.ensure_owner_or_staff(&request.user_id, "read leave request")?;

        Ok(request)
    }

    /// Applies a partial update to a pending request.
    ///
    /// Date order is checked against the merged result, so moving only the start date
    /// past the stored end date is rejected.
    ///
    /// # Returns
    /// - `Ok(LeaveRequest)` - The updated request
    /// - `Err(AppError::BadRequest)` - Request is not pending or a field is invalid
    /// - `Err(AppError::NotFound)` - No request with that ID
    /// - `Err(AuthError::AccessDenied)` - Caller is neither the owner nor staff
    pub async fn update(
        &self,
        actor: &Actor,
        id: &str,
        dto: UpdateLeaveRequestDto,
    ) -> Result<LeaveRequest, AppError> {
        let existing = self.find(id).await?;
        actor.ensure_owner_or_staff(&existing.user_id, "update leave request")?;
        ensure_pending(&existing)?;

        let start_date = dto.start_date.as_deref().map(parse_start_date).transpose()?;
        let end_date = dto.end_date.as_deref().map(parse_end_date).transpose()?;
        validate_date_order(
            start_date.unwrap_or(existing.start_date),
            end_date.unwrap_or(existing.end_date),
        )?;
        if let Some(reason) = &dto.reason {
            require_text(reason, "reason is required")?;
        }

        let params = UpdateLeaveParams {
            id: id.to_string(),
            leave_type: dto.leave_type.as_deref().map(parse_enum).transpose()?,
            start_date,
            end_date,
            reason: dto.reason,
        };

        match LeaveRequestRepository::new(self.db).update(params).await? {
            Some(request) => Ok(request),
            None => Err(self.not_pending_error(id).await),
        }
    }

    pub async fn delete(&self, actor: &Actor, id: &str) -> Result<(), AppError> {
        let existing = self.find(id).await?;
        actor.ensure_owner_or_staff(&existing.user_id, "delete leave request")?;

        LeaveRequestRepository::new(self.db).delete(id).await?;

        Ok(())
    }

    /// Approves a pending request and notifies the requester.
    ///
    /// # Arguments
    /// - `reviewer_id` - Staff user approving the request
    /// - `id` - Leave request ID
    ///
    /// # Returns
    /// - `Ok(LeaveRequest)` - The approved request
    /// - `Err(AppError::BadRequest)` - Request is not pending
    /// - `Err(AppError::NotFound)` - No request with that ID
    pub async fn approve(&self, reviewer_id: &str, id: &str) -> Result<LeaveRequest, AppError> {
        self.review(reviewer_id, id, LeaveStatus::Approved, None)
            .await
    }

    /// Rejects a pending request with an optional note and notifies the requester.
    pub async fn reject(
        &self,
        reviewer_id: &str,
        id: &str,
        note: Option<String>,
    ) -> Result<LeaveRequest, AppError> {
        self.review(reviewer_id, id, LeaveStatus::Rejected, note)
            .await
    }

    /// Computes a user's remaining leave of one type for the current year.
    ///
    /// Every approved request of that type starting this year counts its full inclusive
    /// length against the yearly entitlement. The remainder never goes below zero.
    ///
    /// # Arguments
    /// - `user_id` - User whose balance is computed
    /// - `leave_type` - Leave type to total
    ///
    /// # Returns
    /// - `Ok(LeaveBalance)` - Entitlement, days used and days remaining
    pub async fn balance(
        &self,
        user_id: &str,
        leave_type: LeaveType,
    ) -> Result<LeaveBalance, AppError> {
        let year = Utc::now().year();
        self.balance_for_year(user_id, leave_type, year).await
    }

    async fn balance_for_year(
        &self,
        user_id: &str,
        leave_type: LeaveType,
        year: i32,
    ) -> Result<LeaveBalance, AppError> {
        let (Some(from), Some(to)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        ) else {
            return Err(AppError::InternalError(format!("year {} out of range", year)));
        };

        let used: i64 = LeaveRequestRepository::new(self.db)
            .get_approved_starting_between(user_id, leave_type, from, to)
            .await?
            .iter()
            .map(|request| inclusive_days(request.start_date, request.end_date))
            .sum();

        Ok(LeaveBalance {
            user_id: user_id.to_string(),
            leave_type,
            year,
            entitlement: ANNUAL_ENTITLEMENT,
            used,
            remaining: (ANNUAL_ENTITLEMENT - used).max(0),
        })
    }

    async fn review(
        &self,
        reviewer_id: &str,
        id: &str,
        status: LeaveStatus,
        note: Option<String>,
    ) -> Result<LeaveRequest, AppError> {
        let reviewed = LeaveRequestRepository::new(self.db)
            .review(ReviewLeaveParams {
                id: id.to_string(),
                status,
                reviewed_by: reviewer_id.to_string(),
                note,
            })
            .await?;

        let Some(request) = reviewed else {
            return Err(self.not_pending_error(id).await);
        };

        tracing::info!(
            "Leave request {} {} by {}",
            request.id,
            request.status,
            reviewer_id
        );

        self.notify(
            &request.user_id,
            format!(
                "Your leave request for {} has been {}.",
                request.leave_type, request.status
            ),
        );

        Ok(request)
    }

    /// Explains why a pending-only write matched no row.
    async fn not_pending_error(&self, id: &str) -> AppError {
        match self.find(id).await {
            Ok(request) => match ensure_pending(&request) {
                Err(e) => e,
                Ok(()) => {
                    AppError::Conflict("leave request was modified concurrently".to_string())
                }
            },
            Err(e) => e,
        }
    }

    async fn find(&self, id: &str) -> Result<LeaveRequest, AppError> {
        LeaveRequestRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("leave request not found".to_string()))
    }

    /// Sends an info notification to `user_id` on a background task.
    fn notify(&self, user_id: &str, message: String) {
        let db = self.db.clone();
        let user_id = user_id.to_string();

        tokio::spawn(async move {
            let result = NotificationRepository::new(&db)
                .create(CreateNotificationParams {
                    user_id: user_id.clone(),
                    notification_type: NotificationType::Info,
                    message,
                    send_at: Utc::now(),
                })
                .await;

            if let Err(e) = result {
                tracing::error!("Failed to send leave notification to user {}: {}", user_id, e);
            }
        });
    }
}

fn parse_start_date(value: &str) -> Result<NaiveDate, AppError> {
    parse_date(value).map_err(|_| AppError::BadRequest("invalid start date format".to_string()))
}

fn parse_end_date(value: &str) -> Result<NaiveDate, AppError> {
    parse_date(value).map_err(|_| AppError::BadRequest("invalid end date format".to_string()))
}

fn validate_date_order(start: NaiveDate, end: NaiveDate) -> Result<(), AppError> {
    if start > end {
        return Err(AppError::BadRequest(
            "start date must be before end date".to_string(),
        ));
    }
    Ok(())
}

fn ensure_pending(request: &LeaveRequest) -> Result<(), AppError> {
    if request.status != LeaveStatus::Pending {
        return Err(AppError::BadRequest(
            "leave request is not in pending status".to_string(),
        ));
    }
    Ok(())
}
