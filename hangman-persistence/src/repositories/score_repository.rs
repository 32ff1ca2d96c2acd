use anyhow::Result;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use sea_orm::ActiveModelTrait;
use uuid::Uuid;

use crate::entities::{prelude::*, scores};
use hangman_types::ScoreRecord;

#[derive(Clone)]
pub struct ScoreRepository {
    db: DatabaseConnection,
}

impl ScoreRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_record(model: scores::Model, user_name: String) -> ScoreRecord {
        ScoreRecord {
            user_name,
            date: model.date.to_string(),
            won: model.won,
            guesses: model.guesses,
        }
    }

    /// Append the immutable result of one finished game.
    pub async fn insert(&self, user_id: Uuid, won: bool, guesses: i32) -> Result<()> {
        let score_model = scores::ActiveModel {
            id: sea_orm::ActiveValue::Set(Uuid::new_v4()),
            user_id: sea_orm::ActiveValue::Set(user_id),
            date: sea_orm::ActiveValue::Set(chrono::Utc::now().date_naive()),
            won: sea_orm::ActiveValue::Set(won),
            guesses: sea_orm::ActiveValue::Set(guesses),
            created_at: sea_orm::ActiveValue::Set(chrono::Utc::now().into()),
        };

        score_model.insert(&self.db).await?;
        Ok(())
    }

    async fn collect(
        &self,
        select: sea_orm::Select<Scores>,
    ) -> Result<Vec<ScoreRecord>> {
        let models = select.find_also_related(Users).all(&self.db).await?;

        let mut records = Vec::new();
        for (model, owner) in models {
            let owner = owner.ok_or_else(|| anyhow::anyhow!("score {} has no owner", model.id))?;
            records.push(Self::model_to_record(model, owner.name));
        }
        Ok(records)
    }

    pub async fn all_scores(&self) -> Result<Vec<ScoreRecord>> {
        self.collect(Scores::find().order_by_asc(scores::Column::CreatedAt))
            .await
    }

    pub async fn winning_scores(&self) -> Result<Vec<ScoreRecord>> {
        self.collect(Scores::find().filter(scores::Column::Won.eq(true)))
            .await
    }

    pub async fn scores_for_user(&self, user_id: Uuid) -> Result<Vec<ScoreRecord>> {
        self.collect(
            Scores::find()
                .filter(scores::Column::UserId.eq(user_id))
                .order_by_asc(scores::Column::CreatedAt),
        )
        .await
    }
}
