use chrono::NaiveDate;
use sqlx::{PgPool, QueryBuilder};

use crate::dto::leaderboard::LeaderboardAward;
use crate::error::Result;
use crate::models::MasterpointAward;

/// Read-only access to the append-only award log. Awards are written
/// by the external ingestion process, never from here.
pub struct MasterpointRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MasterpointRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn awards_by_player(&self, player_id: i32) -> Result<Vec<MasterpointAward>> {
        let awards = sqlx::query_as::<_, MasterpointAward>(
            "SELECT id, player_id, event_id, organization_id, award_type, points, \
                    awarded_date, created_at \
             FROM masterpoints \
             WHERE player_id = $1 \
             ORDER BY awarded_date, id",
        )
        .bind(player_id)
        .fetch_all(self.pool)
        .await?;

        Ok(awards)
    }

    /// Award rows joined with player identity, optionally scoped to an
    /// organization and a window lower bound. `from_date` is inclusive;
    /// `None` means all-time.
    pub async fn awards_by_org_and_window(
        &self,
        organization_id: Option<i32>,
        from_date: Option<NaiveDate>,
    ) -> Result<Vec<LeaderboardAward>> {
        let mut query = QueryBuilder::new(
            "SELECT m.player_id, p.firstname, p.lastname, p.number AS player_number, \
                    m.points, m.awarded_date \
             FROM masterpoints m \
             INNER JOIN players p ON m.player_id = p.id \
             WHERE 1=1",
        );

        if let Some(org_id) = organization_id {
            query.push(" AND m.organization_id = ");
            query.push_bind(org_id);
        }

        if let Some(from_date) = from_date {
            query.push(" AND m.awarded_date >= ");
            query.push_bind(from_date);
        }

        let rows: Vec<LeaderboardAward> = query.build_query_as().fetch_all(self.pool).await?;

        Ok(rows)
    }
}
