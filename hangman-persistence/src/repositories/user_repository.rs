use anyhow::Result;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::entities::{prelude::*, users};
use hangman_types::User;

#[derive(Clone)]
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_user(model: users::Model) -> User {
        User {
            id: model.id,
            name: model.name,
            email: model.email,
            wins: model.wins,
            total_games_played: model.total_games_played,
            created_at: model.created_at.to_rfc3339(),
        }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let user_model = Users::find_by_id(id).one(&self.db).await?;
        Ok(user_model.map(Self::model_to_user))
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<User>> {
        let user_model = Users::find()
            .filter(users::Column::Name.eq(name))
            .one(&self.db)
            .await?;

        Ok(user_model.map(Self::model_to_user))
    }

    pub async fn create_user(&self, name: &str, email: Option<String>) -> Result<User> {
        let now: DateTimeWithTimeZone = chrono::Utc::now().into();

        let user_model = users::ActiveModel {
            id: sea_orm::ActiveValue::Set(Uuid::new_v4()),
            name: sea_orm::ActiveValue::Set(name.to_string()),
            email: sea_orm::ActiveValue::Set(email),
            wins: sea_orm::ActiveValue::Set(0),
            total_games_played: sea_orm::ActiveValue::Set(0),
            created_at: sea_orm::ActiveValue::Set(now),
            updated_at: sea_orm::ActiveValue::Set(now),
        };

        let created = user_model.insert(&self.db).await?;
        Ok(Self::model_to_user(created))
    }

    /// Fold one finished game into the owner's cumulative counters.
    pub async fn record_game_result(&self, user_id: Uuid, won: bool) -> Result<()> {
        let user = Users::find_by_id(user_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| anyhow::anyhow!("user {} not found", user_id))?;

        let updated_user = users::ActiveModel {
            id: sea_orm::ActiveValue::Unchanged(user.id),
            name: sea_orm::ActiveValue::Unchanged(user.name),
            email: sea_orm::ActiveValue::Unchanged(user.email),
            wins: sea_orm::ActiveValue::Set(user.wins + if won { 1 } else { 0 }),
            total_games_played: sea_orm::ActiveValue::Set(user.total_games_played + 1),
            created_at: sea_orm::ActiveValue::Unchanged(user.created_at),
            updated_at: sea_orm::ActiveValue::Set(chrono::Utc::now().into()),
        };

        Users::update(updated_user).exec(&self.db).await?;
        Ok(())
    }

    /// Users eligible for the rankings: at least one finished game.
    pub async fn players_with_games(&self) -> Result<Vec<User>> {
        let models = Users::find()
            .filter(users::Column::TotalGamesPlayed.gt(0))
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Self::model_to_user).collect())
    }
}
