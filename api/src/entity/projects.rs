use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

use super::{default_now, DEFAULT_PRIORITY, DEFAULT_STATUS};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub business_id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub status: String,
    pub priority: String,
    pub created_at: DateTimeUtc,
    #[sea_orm(nullable)]
    pub deadline: Option<DateTimeUtc>,
    pub progress_percentage: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::businesses::Entity",
        from = "Column::BusinessId",
        to = "super::businesses::Column::Id"
    )]
    Business,
    #[sea_orm(has_many = "super::tasks::Entity")]
    Tasks,
}

impl Related<super::businesses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Business.def()
    }
}

impl Related<super::tasks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tasks.def()
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
            if let NotSet = self.progress_percentage {
                self.progress_percentage = Set(0);
            }
        }
        Ok(self)
    }
}
