use anyhow::{Context, Result};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};
use uuid::Uuid;

use crate::entities::{games, prelude::*};
use hangman_core::Game;
use hangman_types::{GameStatus, GuessEvent};

#[derive(Clone)]
pub struct GameRepository {
    db: DatabaseConnection,
}

impl GameRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn won_flag(game: &Game) -> Option<bool> {
        match game.status {
            GameStatus::InProgress => None,
            GameStatus::Won => Some(true),
            GameStatus::Lost => Some(false),
        }
    }

    fn model_to_game(model: games::Model, user_name: String) -> Result<Game> {
        let status = if !model.game_over {
            GameStatus::InProgress
        } else if model.won == Some(true) {
            GameStatus::Won
        } else {
            GameStatus::Lost
        };
        let history: Vec<GuessEvent> =
            serde_json::from_str(&model.history).context("malformed game history")?;

        Ok(Game {
            id: model.id,
            user_id: model.user_id,
            user_name,
            secret_word: model.secret_word,
            guessed_letters: model.guessed_letters.chars().collect(),
            attempts_allowed: model.attempts_allowed,
            attempts_remaining: model.attempts_remaining,
            status,
            history,
        })
    }

    pub async fn insert(&self, game: &Game) -> Result<()> {
        let now: DateTimeWithTimeZone = chrono::Utc::now().into();

        let game_model = games::ActiveModel {
            id: sea_orm::ActiveValue::Set(game.id),
            user_id: sea_orm::ActiveValue::Set(game.user_id),
            secret_word: sea_orm::ActiveValue::Set(game.secret_word.clone()),
            guessed_letters: sea_orm::ActiveValue::Set(game.guessed_letters_string()),
            attempts_allowed: sea_orm::ActiveValue::Set(game.attempts_allowed),
            attempts_remaining: sea_orm::ActiveValue::Set(game.attempts_remaining),
            game_over: sea_orm::ActiveValue::Set(game.game_over()),
            won: sea_orm::ActiveValue::Set(Self::won_flag(game)),
            history: sea_orm::ActiveValue::Set(serde_json::to_string(&game.history)?),
            created_at: sea_orm::ActiveValue::Set(now),
            updated_at: sea_orm::ActiveValue::Set(now),
        };

        game_model.insert(&self.db).await?;
        Ok(())
    }

    /// Persist the mutable half of a game after a move.
    pub async fn update(&self, game: &Game) -> Result<()> {
        let updated = games::ActiveModel {
            id: sea_orm::ActiveValue::Unchanged(game.id),
            guessed_letters: sea_orm::ActiveValue::Set(game.guessed_letters_string()),
            attempts_remaining: sea_orm::ActiveValue::Set(game.attempts_remaining),
            game_over: sea_orm::ActiveValue::Set(game.game_over()),
            won: sea_orm::ActiveValue::Set(Self::won_flag(game)),
            history: sea_orm::ActiveValue::Set(serde_json::to_string(&game.history)?),
            updated_at: sea_orm::ActiveValue::Set(chrono::Utc::now().into()),
            ..Default::default()
        };

        Games::update(updated).exec(&self.db).await?;
        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Game>> {
        let result = Games::find_by_id(id)
            .find_also_related(Users)
            .one(&self.db)
            .await?;

        match result {
            Some((model, Some(owner))) => Ok(Some(Self::model_to_game(model, owner.name)?)),
            Some((model, None)) => Err(anyhow::anyhow!("game {} has no owner", model.id)),
            None => Ok(None),
        }
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let result = Games::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn find_unfinished_by_user(&self, user_id: Uuid) -> Result<Vec<Game>> {
        let models = Games::find()
            .filter(games::Column::UserId.eq(user_id))
            .filter(games::Column::GameOver.eq(false))
            .find_also_related(Users)
            .all(&self.db)
            .await?;

        let mut games_out = Vec::new();
        for (model, owner) in models {
            let owner = owner.ok_or_else(|| anyhow::anyhow!("game {} has no owner", model.id))?;
            games_out.push(Self::model_to_game(model, owner.name)?);
        }
        Ok(games_out)
    }

    /// Attempts remaining of every in-progress game, for the cached average.
    pub async fn unfinished_attempts_remaining(&self) -> Result<Vec<i32>> {
        let models = Games::find()
            .filter(games::Column::GameOver.eq(false))
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(|m| m.attempts_remaining).collect())
    }
}
