use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "devices")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    #[sea_orm(column_name = "type")]
    pub device_type: String,
    pub location: String,
    pub status: String,
    pub last_check: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::device_log::Entity")]
    DeviceLog,
}

impl Related<super::device_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DeviceLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
