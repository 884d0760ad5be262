//! Employee data repository.
//!
//! Employees are created together with their user by [`super::user::UserRepository`];
//! this repository only reads them.

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};

use crate::{model::user::UserStatus, server::model::employee::Employee};

pub struct EmployeeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmployeeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the employee record of a user.
    ///
    /// # Arguments
    /// - `user_id` - ID of the owning user
    ///
    /// # Returns
    /// - `Ok(Some(Employee))` - Employee record found
    /// - `Ok(None)` - User has no employee record
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_user_id(&self, user_id: &str) -> Result<Option<Employee>, DbErr> {
        entity::prelude::Employee::find()
            .filter(entity::employee::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
            .map(Employee::from_entity)
            .transpose()
    }

    /// Gets the employee records of several users in one query.
    ///
    /// # Arguments
    /// - `user_ids` - IDs of the owning users
    ///
    /// # Returns
    /// - `Ok(Vec<Employee>)` - Records found; users without one are simply absent
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_user_ids(&self, user_ids: &[String]) -> Result<Vec<Employee>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Employee::find()
            .filter(entity::employee::Column::UserId.is_in(user_ids.iter().cloned()))
            .all(self.db)
            .await?
            .into_iter()
            .map(Employee::from_entity)
            .collect()
    }

    /// Gets active employees whose user has not been deleted, ordered by name.
    pub async fn get_active(&self) -> Result<Vec<Employee>, DbErr> {
        entity::prelude::Employee::find()
            .join(JoinType::InnerJoin, entity::employee::Relation::User.def())
            .filter(entity::employee::Column::Status.eq(UserStatus::Active.as_str()))
            .filter(entity::user::Column::DeletedAt.is_null())
            .order_by_asc(entity::employee::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(Employee::from_entity)
            .collect()
    }

    /// Counts active employees whose user has not been deleted.
    pub async fn count_active(&self) -> Result<u64, DbErr> {
        entity::prelude::Employee::find()
            .join(JoinType::InnerJoin, entity::employee::Relation::User.def())
            .filter(entity::employee::Column::Status.eq(UserStatus::Active.as_str()))
            .filter(entity::user::Column::DeletedAt.is_null())
            .count(self.db)
            .await
    }
}
