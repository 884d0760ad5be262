//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts, updates, and deletes are performed through these repositories.

pub mod attendance;
pub mod department;
pub mod device;
pub mod employee;
pub mod leave_request;
pub mod monitoring;
pub mod notification;
pub mod schedule;
pub mod user;
pub mod work_location;

#[cfg(test)]
mod test;

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Select};

use crate::server::model::page::PageParams;

/// Generates a new primary key.
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Fetches one page of a query together with the total number of matching rows.
///
/// # Arguments
/// - `db` - Database connection
/// - `select` - Filtered and ordered query
/// - `params` - Requested page (one-based) and page size
///
/// # Returns
/// - `Ok((models, total))` - Entity models on the page and the total row count
/// - `Err(DbErr)` - Database error during either query
pub(crate) async fn fetch_page<E>(
    db: &DatabaseConnection,
    select: Select<E>,
    params: PageParams,
) -> Result<(Vec<E::Model>, u64), DbErr>
where
    E: EntityTrait,
    E::Model: Sync,
{
    let paginator = select.paginate(db, params.per_page);
    let total = paginator.num_items().await?;
    let models = paginator.fetch_page(params.index()).await?;

    Ok((models, total))
}
