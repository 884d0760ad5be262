//! Work location service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::work_location::WorkLocationRepository,
    error::AppError,
    model::work_location::{CreateWorkLocationParams, UpdateWorkLocationParams, WorkLocation},
    service::require_text,
};

pub struct WorkLocationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WorkLocationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<WorkLocation>, AppError> {
        Ok(WorkLocationRepository::new(self.db).get_all().await?)
    }

    pub async fn get(&self, id: &str) -> Result<WorkLocation, AppError> {
        WorkLocationRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("work location not found".to_string()))
    }

    /// Creates a work location.
    ///
    /// # Returns
    /// - `Ok(WorkLocation)` - The created location
    /// - `Err(AppError::BadRequest)` - Name is blank
    pub async fn create(&self, params: CreateWorkLocationParams) -> Result<WorkLocation, AppError> {
        require_text(&params.name, "work location name is required")?;

        Ok(WorkLocationRepository::new(self.db).create(params).await?)
    }

    pub async fn update(&self, params: UpdateWorkLocationParams) -> Result<WorkLocation, AppError> {
        if let Some(name) = &params.name {
            require_text(name, "work location name is required")?;
        }

        WorkLocationRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound("work location not found".to_string()))
    }

    /// Deletes a work location. Schedules pointing at it lose their location.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !WorkLocationRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("work location not found".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::builder::TestBuilder;

    fn params() -> CreateWorkLocationParams {
        CreateWorkLocationParams {
            name: "Head Office".to_string(),
            address: "Jl. Sudirman 1".to_string(),
            city: "Jakarta".to_string(),
            state: "DKI Jakarta".to_string(),
            country: "Indonesia".to_string(),
            postal_code: "10220".to_string(),
            timezone: "Asia/Jakarta".to_string(),
        }
    }

    /// Tests the create, update and delete lifecycle.
    ///
    /// Expected: updated city returned, then NotFound after delete
    #[tokio::test]
    async fn manages_work_locations() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = WorkLocationService::new(db);
        let location = service.create(params()).await?;
        let updated = service
            .update(UpdateWorkLocationParams {
                id: location.id.clone(),
                name: None,
                address: None,
                city: Some("Bandung".to_string()),
                state: None,
                country: None,
                postal_code: None,
                timezone: None,
            })
            .await?;
        service.delete(&location.id).await?;

        assert_eq!(updated.city, "Bandung");
        assert_eq!(updated.name, "Head Office");
        assert!(matches!(
            service.get(&location.id).await,
            Err(AppError::NotFound(_))
        ));

        Ok(())
    }

    /// Tests that a blank name is rejected.
    ///
    /// Expected: Err(BadRequest)
    #[tokio::test]
    async fn rejects_blank_name() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let mut blank = params();
        blank.name = " ".to_string();
        let result = WorkLocationService::new(db).create(blank).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }
}
