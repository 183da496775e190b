use chrono::NaiveDate;
use sqlx::PgPool;
use storage::{
    dto::leaderboard::{LeaderboardFilter, LeaderboardResponse},
    error::Result,
    repository::masterpoint::MasterpointRepository,
    services::leaderboard,
};

/// Rank masterpoint awards over the requested window. `today` is
/// injected by the handler so window cutoffs are deterministic under
/// test. An organization with no qualifying awards yields an empty
/// board.
pub async fn get_leaderboard(
    pool: &PgPool,
    filter: &LeaderboardFilter,
    today: NaiveDate,
) -> Result<LeaderboardResponse> {
    let cutoff = filter.period.cutoff_from(today);

    let rows = MasterpointRepository::new(pool)
        .awards_by_org_and_window(filter.organization_id, cutoff)
        .await?;

    let entries = leaderboard::rank(&rows, cutoff, filter.limit as usize);

    Ok(LeaderboardResponse {
        period: filter.period,
        leaderboard: entries,
    })
}
