//! Leave request data repository.

use chrono::{NaiveDate, Utc};
use entity::leave_request::Column;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, UpdateMany,
};

use crate::{
    model::leave::{LeaveStatus, LeaveType},
    server::{
        data::{fetch_page, new_id},
        model::{
            leave::{
                CreateLeaveParams, LeaveFilter, LeaveRequest, ReviewLeaveParams,
                UpdateLeaveParams,
            },
            page::{Page, PageParams},
        },
    },
};

pub struct LeaveRequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeaveRequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a new leave request in pending status.
    pub async fn create(&self, params: CreateLeaveParams) -> Result<LeaveRequest, DbErr> {
        let now = Utc::now();
        let entity = entity::leave_request::ActiveModel {
            id: ActiveValue::Set(new_id()),
            user_id: ActiveValue::Set(params.user_id),
            leave_type: ActiveValue::Set(params.leave_type.as_str().to_string()),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            reason: ActiveValue::Set(params.reason),
            status: ActiveValue::Set(LeaveStatus::Pending.as_str().to_string()),
            reviewed_by: ActiveValue::Set(None),
            reviewed_at: ActiveValue::Set(None),
            note: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        LeaveRequest::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<LeaveRequest>, DbErr> {
        entity::prelude::LeaveRequest::find_by_id(id.to_string())
            .one(self.db)
            .await?
            .map(LeaveRequest::from_entity)
            .transpose()
    }

    /// Gets leave requests matching a filter with pagination, newest first.
    pub async fn get_paginated(
        &self,
        filter: LeaveFilter,
        params: PageParams,
    ) -> Result<Page<LeaveRequest>, DbErr> {
        let mut select = entity::prelude::LeaveRequest::find();

        if let Some(user_id) = filter.user_id {
            select = select.filter(Column::UserId.eq(user_id));
        }
        if let Some(status) = filter.status {
            select = select.filter(Column::Status.eq(status.as_str()));
        }

        let select = select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id);

        let (entities, total) = fetch_page(self.db, select, params).await?;
        let items = entities
            .into_iter()
            .map(LeaveRequest::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(items, total, params))
    }

    /// Gets a user's approved requests of one type starting within `[from, to]`.
    ///
    /// # Arguments
    /// - `user_id` - Requesting user
    /// - `leave_type` - Leave type to match
    /// - `from` - Earliest start date, inclusive
    /// - `to` - Latest start date, inclusive
    pub async fn get_approved_starting_between(
        &self,
        user_id: &str,
        leave_type: LeaveType,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<LeaveRequest>, DbErr> {
        entity::prelude::LeaveRequest::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::LeaveType.eq(leave_type.as_str()))
            .filter(Column::Status.eq(LeaveStatus::Approved.as_str()))
            .filter(Column::StartDate.gte(from))
            .filter(Column::StartDate.lte(to))
            .order_by_asc(Column::StartDate)
            .all(self.db)
            .await?
            .into_iter()
            .map(LeaveRequest::from_entity)
            .collect()
    }

    /// Counts every leave request in a status.
    pub async fn count_by_status(&self, status: LeaveStatus) -> Result<u64, DbErr> {
        entity::prelude::LeaveRequest::find()
            .filter(Column::Status.eq(status.as_str()))
            .count(self.db)
            .await
    }

    /// Applies a partial update to a pending request's own fields.
    ///
    /// The pending check is part of the `UPDATE` itself, so a request reviewed in the
    /// meantime is left untouched.
    ///
    /// # Returns
    /// - `Ok(Some(LeaveRequest))` - The updated request
    /// - `Ok(None)` - No pending request with that ID
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(&self, params: UpdateLeaveParams) -> Result<Option<LeaveRequest>, DbErr> {
        let mut update = self
            .pending_update(&params.id)
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now()));

        if let Some(leave_type) = params.leave_type {
            update = update.col_expr(Column::LeaveType, Expr::value(leave_type.as_str()));
        }
        if let Some(start_date) = params.start_date {
            update = update.col_expr(Column::StartDate, Expr::value(start_date));
        }
        if let Some(end_date) = params.end_date {
            update = update.col_expr(Column::EndDate, Expr::value(end_date));
        }
        if let Some(reason) = params.reason {
            update = update.col_expr(Column::Reason, Expr::value(reason));
        }

        self.exec_pending_update(&params.id, update).await
    }

    /// Records the outcome of a review on a pending request.
    ///
    /// Stamps the reviewer and review time; the note is only overwritten when given.
    /// Of two concurrent reviews of the same request only the first one matches.
    ///
    /// # Returns
    /// - `Ok(Some(LeaveRequest))` - The reviewed request
    /// - `Ok(None)` - No pending request with that ID
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn review(&self, params: ReviewLeaveParams) -> Result<Option<LeaveRequest>, DbErr> {
        let now = Utc::now();
        let mut update = self
            .pending_update(&params.id)
            .col_expr(Column::Status, Expr::value(params.status.as_str()))
            .col_expr(Column::ReviewedBy, Expr::value(params.reviewed_by))
            .col_expr(Column::ReviewedAt, Expr::value(now))
            .col_expr(Column::UpdatedAt, Expr::value(now));

        if let Some(note) = params.note {
            update = update.col_expr(Column::Note, Expr::value(note));
        }

        self.exec_pending_update(&params.id, update).await
    }

    fn pending_update(&self, id: &str) -> UpdateMany<entity::leave_request::Entity> {
        entity::prelude::LeaveRequest::update_many()
            .filter(Column::Id.eq(id))
            .filter(Column::Status.eq(LeaveStatus::Pending.as_str()))
    }

    async fn exec_pending_update(
        &self,
        id: &str,
        update: UpdateMany<entity::leave_request::Entity>,
    ) -> Result<Option<LeaveRequest>, DbErr> {
        let result = update.exec(self.db).await?;
        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::LeaveRequest::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
