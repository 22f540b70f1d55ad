use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

use super::{default_now, DEFAULT_PRIORITY, DEFAULT_STATUS};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub project_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub status: String,
    pub priority: String,
    #[sea_orm(column_type = "Double", nullable)]
    pub estimated_hours: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub actual_hours: Option<f64>,
    pub created_at: DateTimeUtc,
    #[sea_orm(nullable)]
    pub due_date: Option<DateTimeUtc>,
    #[sea_orm(nullable)]
    pub completed_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::projects::Entity",
        from = "Column::ProjectId",
        to = "super::projects::Column::Id"
    )]
    Project,
}

impl Related<super::projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert {
            default_now(&mut self.created_at);
            if let NotSet = self.status {
                self.status = Set(DEFAULT_STATUS.to_string());
            }
            if let NotSet = self.priority {
                self.priority = Set(DEFAULT_PRIORITY.to_string());
            }
            if let NotSet = self.actual_hours {
                self.actual_hours = Set(Some(0.0));
            }
        }
        Ok(self)
    }
}
