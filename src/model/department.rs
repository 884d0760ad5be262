use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DepartmentDto {
    pub id: String,
    pub name: String,
    pub location: String,
    pub timezone: String,
    #[schema(value_type = Option<Object>)]
    pub wfa_policy: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateDepartmentDto {
    pub name: String,
    pub location: String,
    pub timezone: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub wfa_policy: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateDepartmentDto {
    pub name: Option<String>,
    pub location: Option<String>,
    pub timezone: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub wfa_policy: Option<serde_json::Value>,
}
