use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::dto::leaderboard::{LeaderboardAward, LeaderboardEntry};

struct PlayerTotals {
    player_name: String,
    player_number: i32,
    total_points: Decimal,
    events_played: i64,
}

/// Rank award rows into an ordered leaderboard.
///
/// Rows dated before `cutoff` are excluded (`None` keeps everything).
/// Points are summed per player in exact decimal arithmetic; ordering
/// is points descending, ties broken by ascending player id. Ranks are
/// consecutive 1-based ordinals with no gaps and no tie-sharing, and
/// the full grouped set is ranked before truncating to `limit`, so an
/// entry's rank never depends on the requested list length.
pub fn rank(
    rows: &[LeaderboardAward],
    cutoff: Option<NaiveDate>,
    limit: usize,
) -> Vec<LeaderboardEntry> {
    // BTreeMap keys keep players in ascending-id order, which a stable
    // sort on points preserves as the tie-break.
    let mut totals: BTreeMap<i32, PlayerTotals> = BTreeMap::new();

    for row in rows {
        if let Some(cutoff) = cutoff
            && row.awarded_date < cutoff
        {
            continue;
        }

        totals
            .entry(row.player_id)
            .and_modify(|t| {
                t.total_points += row.points;
                t.events_played += 1;
            })
            .or_insert_with(|| PlayerTotals {
                player_name: format!("{} {}", row.firstname, row.lastname),
                player_number: row.player_number,
                total_points: row.points,
                events_played: 1,
            });
    }

    let mut entries: Vec<(i32, PlayerTotals)> = totals.into_iter().collect();
    entries.sort_by(|a, b| b.1.total_points.cmp(&a.1.total_points));

    entries
        .into_iter()
        .enumerate()
        .take(limit)
        .map(|(idx, (player_id, t))| LeaderboardEntry {
            rank: idx as i64 + 1,
            player_id,
            player_name: t.player_name,
            player_number: t.player_number,
            total_points: t.total_points,
            events_played: t.events_played,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::leaderboard::LeaderboardPeriod;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn row(player_id: i32, points: i64, awarded: NaiveDate) -> LeaderboardAward {
        LeaderboardAward {
            player_id,
            firstname: format!("P{player_id}"),
            lastname: "Test".to_string(),
            player_number: 1000 + player_id,
            points: Decimal::from(points),
            awarded_date: awarded,
        }
    }

    #[test]
    fn orders_by_points_then_breaks_ties_by_player_id() {
        let awarded = date(2026, 6, 1);
        let rows = vec![
            row(3, 5, awarded),  // C
            row(2, 10, awarded), // B
            row(1, 10, awarded), // A
        ];

        let board = rank(&rows, None, 2);

        assert_eq!(board.len(), 2);
        assert_eq!((board[0].rank, board[0].player_id), (1, 1));
        assert_eq!((board[1].rank, board[1].player_id), (2, 2));
    }

    #[test]
    fn truncation_happens_after_ranking() {
        let awarded = date(2026, 6, 1);
        let rows = vec![
            row(3, 5, awarded),
            row(2, 10, awarded),
            row(1, 10, awarded),
        ];

        let top_two = rank(&rows, None, 2);
        let full = rank(&rows, None, usize::MAX);

        // The visible prefix is identical regardless of limit.
        assert_eq!(full[..2], top_two[..]);
        assert_eq!((full[2].rank, full[2].player_id), (3, 3));
    }

    #[test]
    fn equal_points_get_distinct_consecutive_ranks() {
        let awarded = date(2026, 6, 1);
        let rows = vec![row(1, 10, awarded), row(2, 10, awarded), row(3, 10, awarded)];

        let board = rank(&rows, None, 10);

        let ranks: Vec<i64> = board.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn sums_points_and_counts_rows_per_player() {
        let rows = vec![
            row(1, 3, date(2026, 6, 1)),
            row(1, 4, date(2026, 6, 8)),
            row(2, 5, date(2026, 6, 2)),
        ];

        let board = rank(&rows, None, 10);

        assert_eq!(board[0].player_id, 1);
        assert_eq!(board[0].total_points, Decimal::from(7));
        assert_eq!(board[0].events_played, 2);
        assert_eq!(board[0].player_name, "P1 Test");
    }

    #[test]
    fn week_window_is_seven_days_inclusive() {
        let today = date(2026, 6, 15);
        let cutoff = LeaderboardPeriod::Week.cutoff_from(today);
        assert_eq!(cutoff, Some(date(2026, 6, 8)));

        let rows = vec![
            row(1, 5, date(2026, 6, 7)), // 8 days ago: out
            row(2, 5, date(2026, 6, 9)), // 6 days ago: in
        ];

        let board = rank(&rows, cutoff, 10);

        assert_eq!(board.len(), 1);
        assert_eq!(board[0].player_id, 2);
    }

    #[test]
    fn all_period_has_no_cutoff() {
        assert_eq!(LeaderboardPeriod::All.cutoff_from(date(2026, 6, 15)), None);
        assert_eq!(
            LeaderboardPeriod::Month.cutoff_from(date(2026, 6, 15)),
            Some(date(2026, 5, 16))
        );
        assert_eq!(
            LeaderboardPeriod::Year.cutoff_from(date(2026, 6, 15)),
            Some(date(2025, 6, 15))
        );
    }

    #[test]
    fn no_qualifying_awards_is_an_empty_board() {
        assert!(rank(&[], None, 10).is_empty());

        // Awards exist but all fall outside the window.
        let rows = vec![row(1, 5, date(2026, 1, 1))];
        assert!(rank(&rows, Some(date(2026, 6, 1)), 10).is_empty());
    }

    #[test]
    fn ranking_is_idempotent() {
        let rows = vec![
            row(1, 3, date(2026, 6, 1)),
            row(2, 9, date(2026, 6, 2)),
            row(1, 4, date(2026, 6, 3)),
        ];

        assert_eq!(rank(&rows, None, 10), rank(&rows, None, 10));
    }

    #[test]
    fn decimal_points_sum_exactly() {
        let awarded = date(2026, 6, 1);
        let mut rows = Vec::new();
        for i in 0..10 {
            let mut r = row(1, 0, awarded);
            r.points = Decimal::new(10 + i, 2); // 0.10 .. 0.19
            rows.push(r);
        }

        let board = rank(&rows, None, 1);

        assert_eq!(board[0].total_points, Decimal::new(145, 2));
    }
}
