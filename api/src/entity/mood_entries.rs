use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::{check_rating, default_now};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "mood_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub mood_rating: i32,
    pub energy_level: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub entry_date: DateTimeUtc,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        check_rating("mood_rating", &self.mood_rating)?;
        check_rating("energy_level", &self.energy_level)?;
        if insert {
            default_now(&mut self.created_at);
        }
        Ok(self)
    }
}
