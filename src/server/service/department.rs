//! Department service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::department::DepartmentRepository,
    error::AppError,
    model::department::{CreateDepartmentParams, Department, UpdateDepartmentParams},
    service::require_text,
};

pub struct DepartmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DepartmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every department ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Department>, AppError> {
        Ok(DepartmentRepository::new(self.db).get_all().await?)
    }

    /// Creates a department with a unique name.
    ///
    /// # Arguments
    /// - `params` - Department fields
    ///
    /// # Returns
    /// - `Ok(Department)` - The created department
    /// - `Err(AppError::BadRequest)` - Name or location is blank
    /// - `Err(AppError::Conflict)` - Name already used by another department
    pub async fn create(&self, params: CreateDepartmentParams) -> Result<Department, AppError> {
        require_text(&params.name, "department name is required")?;
        require_text(&params.location, "department location is required")?;

        let repo = DepartmentRepository::new(self.db);
        if repo.name_taken(&params.name, None).await? {
            return Err(AppError::Conflict("department already exist".to_string()));
        }

        Ok(repo.create(params).await?)
    }

    /// Applies a partial update, keeping names unique.
    ///
    /// # Returns
    /// - `Ok(Department)` - The updated department
    /// - `Err(AppError::Conflict)` - New name already used by another department
    /// - `Err(AppError::NotFound)` - No department with that ID
    pub async fn update(&self, params: UpdateDepartmentParams) -> Result<Department, AppError> {
        let repo = DepartmentRepository::new(self.db);

        if let Some(name) = &params.name {
            require_text(name, "department name is required")?;
            if repo.name_taken(name, Some(&params.id)).await? {
                return Err(AppError::Conflict("department already exist".to_string()));
            }
        }

        repo.update(params)
            .await?
            .ok_or_else(|| AppError::NotFound("department not found".to_string()))
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !DepartmentRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("department not found".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    fn params(name: &str) -> CreateDepartmentParams {
        CreateDepartmentParams {
            name: name.to_string(),
            location: "Jakarta".to_string(),
            timezone: "Asia/Jakarta".to_string(),
            wfa_policy: None,
        }
    }

    /// Tests that department names are unique on create and update.
    ///
    /// Expected: Err(Conflict) for both, while renaming to the same name succeeds
    #[tokio::test]
    async fn keeps_names_unique() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = DepartmentService::new(db);
        let finance = service.create(params("Finance")).await?;
        let legal = service.create(params("Legal")).await?;

        let duplicate = service.create(params("Finance")).await;
        let rename_clash = service
            .update(UpdateDepartmentParams {
                id: legal.id.clone(),
                name: Some("Finance".to_string()),
                location: None,
                timezone: None,
                wfa_policy: None,
            })
            .await;
        let rename_same = service
            .update(UpdateDepartmentParams {
                id: finance.id.clone(),
                name: Some("Finance".to_string()),
                location: Some("Bandung".to_string()),
                timezone: None,
                wfa_policy: None,
            })
            .await?;

        assert!(matches!(duplicate, Err(AppError::Conflict(_))));
        assert!(matches!(rename_clash, Err(AppError::Conflict(_))));
        assert_eq!(rename_same.location, "Bandung");

        Ok(())
    }

    /// Tests deleting departments.
    ///
    /// Expected: Ok for an existing department, Err(NotFound) afterwards
    #[tokio::test]
    async fn deletes_department() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let department = factory::create_department(db).await?;

        let service = DepartmentService::new(db);
        service.delete(&department.id).await?;

        assert!(service.get_all().await?.is_empty());
        assert!(matches!(
            service.delete(&department.id).await,
            Err(AppError::NotFound(_))
        ));

        Ok(())
    }
}
