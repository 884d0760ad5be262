use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "schedules")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub date: Date,
    pub shift_start: Time,
    pub shift_end: Time,
    pub break_start: Option<Time>,
    pub break_end: Option<Time>,
    pub work_location_id: Option<String>,
    pub schedule_type: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::work_location::Entity",
        from = "Column::WorkLocationId",
        to = "super::work_location::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    WorkLocation,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::work_location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkLocation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
