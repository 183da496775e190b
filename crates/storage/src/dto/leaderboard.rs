use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// Trailing window over which masterpoints are summed for ranking.
/// The cutoff is compared against `awarded_date`, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LeaderboardPeriod {
    Week,
    Month,
    Year,
    #[default]
    All,
}

impl LeaderboardPeriod {
    /// Lower bound for `awarded_date`, or `None` for the all-time board.
    /// `today` is injected by the caller so tests can fix it.
    pub fn cutoff_from(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Week => Some(today - Duration::days(7)),
            Self::Month => Some(today - Duration::days(30)),
            Self::Year => Some(today - Duration::days(365)),
            Self::All => None,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct LeaderboardFilter {
    #[serde(default)]
    pub period: LeaderboardPeriod,
    pub organization_id: Option<i32>,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    50
}

impl LeaderboardFilter {
    pub fn validate(&self) -> Result<(), String> {
        if self.limit < 1 || self.limit > 100 {
            return Err("limit must be between 1 and 100".to_string());
        }

        if let Some(org_id) = self.organization_id
            && org_id < 1
        {
            return Err("organization_id must be positive".to_string());
        }

        Ok(())
    }
}

/// One award row joined with the owning player, as fetched for ranking.
#[derive(Debug, Clone, Deserialize, FromRow)]
pub struct LeaderboardAward {
    pub player_id: i32,
    pub firstname: String,
    pub lastname: String,
    pub player_number: i32,
    pub points: Decimal,
    pub awarded_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct LeaderboardEntry {
    pub rank: i64,
    pub player_id: i32,
    pub player_name: String,
    pub player_number: i32,
    pub total_points: Decimal,
    pub events_played: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LeaderboardResponse {
    pub period: LeaderboardPeriod,
    pub leaderboard: Vec<LeaderboardEntry>,
}
