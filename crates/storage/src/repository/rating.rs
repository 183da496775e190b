use sqlx::PgPool;

use crate::error::Result;
use crate::models::RatingSnapshot;

const RATING_COLUMNS: &str =
    "id, player_id, rating_type, event_id, as_of_date, mu, sigma, created_at";

/// Read-only access to the append-only rating history. Snapshots are
/// written by the external rating process, never from here.
pub struct RatingRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RatingRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn by_player(&self, player_id: i32) -> Result<Vec<RatingSnapshot>> {
        let snapshots = sqlx::query_as::<_, RatingSnapshot>(&format!(
            "SELECT {RATING_COLUMNS} FROM ratings \
             WHERE player_id = $1 \
             ORDER BY rating_type, as_of_date, id"
        ))
        .bind(player_id)
        .fetch_all(self.pool)
        .await?;

        Ok(snapshots)
    }

    pub async fn by_player_and_type(
        &self,
        player_id: i32,
        rating_type: &str,
    ) -> Result<Vec<RatingSnapshot>> {
        let snapshots = sqlx::query_as::<_, RatingSnapshot>(&format!(
            "SELECT {RATING_COLUMNS} FROM ratings \
             WHERE player_id = $1 AND rating_type = $2 \
             ORDER BY as_of_date, id"
        ))
        .bind(player_id)
        .bind(rating_type)
        .fetch_all(self.pool)
        .await?;

        Ok(snapshots)
    }
}
