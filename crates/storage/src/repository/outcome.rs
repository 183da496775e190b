use sqlx::PgPool;

use crate::dto::common::PaginationParams;
use crate::dto::outcome::CreateResultRequest;
use crate::error::{Result, StorageError};
use crate::models::EventOutcome;

const RESULT_COLUMNS: &str =
    "id, session_id, event_id, player_id, partner_id, pair_number, position, \
     score, percentage, masterpoints_awarded, created_at";

pub struct OutcomeRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OutcomeRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Results for one event in position order.
    pub async fn by_event(
        &self,
        event_id: i32,
        pagination: &PaginationParams,
    ) -> Result<Vec<EventOutcome>> {
        let results = sqlx::query_as::<_, EventOutcome>(&format!(
            "SELECT {RESULT_COLUMNS} FROM results \
             WHERE event_id = $1 \
             ORDER BY position ASC NULLS LAST, id \
             LIMIT $2 OFFSET $3"
        ))
        .bind(event_id)
        .bind(pagination.limit() as i64)
        .bind(pagination.offset() as i64)
        .fetch_all(self.pool)
        .await?;

        Ok(results)
    }

    /// A player's result history, newest first.
    pub async fn by_player(
        &self,
        player_id: i32,
        pagination: &PaginationParams,
    ) -> Result<Vec<EventOutcome>> {
        let results = sqlx::query_as::<_, EventOutcome>(&format!(
            "SELECT {RESULT_COLUMNS} FROM results \
             WHERE player_id = $1 \
             ORDER BY created_at DESC, id DESC \
             LIMIT $2 OFFSET $3"
        ))
        .bind(player_id)
        .bind(pagination.limit() as i64)
        .bind(pagination.offset() as i64)
        .fetch_all(self.pool)
        .await?;

        Ok(results)
    }

    pub async fn create(&self, req: &CreateResultRequest) -> Result<EventOutcome> {
        let outcome = sqlx::query_as::<_, EventOutcome>(&format!(
            "INSERT INTO results \
             (session_id, event_id, player_id, partner_id, pair_number, position, \
              score, percentage, masterpoints_awarded) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {RESULT_COLUMNS}"
        ))
        .bind(req.session_id)
        .bind(req.event_id)
        .bind(req.player_id)
        .bind(req.partner_id)
        .bind(req.pair_number)
        .bind(req.position)
        .bind(req.score)
        .bind(req.percentage)
        .bind(req.masterpoints_awarded)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let err = StorageError::from(e);
            if err.is_foreign_key_violation() {
                StorageError::ConstraintViolation(
                    "Event, player or session does not exist".to_string(),
                )
            } else {
                err
            }
        })?;

        Ok(outcome)
    }
}
