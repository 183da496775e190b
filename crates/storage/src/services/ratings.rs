use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::dto::ratings::CurrentRating;
use crate::models::RatingSnapshot;

/// Lower confidence bound on a skill estimate: mu - 2*sigma. Always
/// derived from the snapshot at read time, never stored.
pub fn conservative(mu: Decimal, sigma: Decimal) -> Decimal {
    mu - Decimal::TWO * sigma
}

/// Select the current snapshot from a player's history for one rating
/// type: maximum `as_of_date`, ties resolved by highest id (latest
/// write wins). `None` means unrated, which callers must treat as a
/// valid empty state.
pub fn current_rating(snapshots: &[RatingSnapshot]) -> Option<&RatingSnapshot> {
    snapshots.iter().max_by_key(|s| (s.as_of_date, s.id))
}

/// One current rating per type present in the player's history,
/// ordered by type name for deterministic output.
pub fn current_ratings_by_type(snapshots: &[RatingSnapshot]) -> Vec<CurrentRating> {
    let mut latest: BTreeMap<&str, &RatingSnapshot> = BTreeMap::new();

    for snapshot in snapshots {
        latest
            .entry(snapshot.rating_type.as_str())
            .and_modify(|current| {
                if (snapshot.as_of_date, snapshot.id) > (current.as_of_date, current.id) {
                    *current = snapshot;
                }
            })
            .or_insert(snapshot);
    }

    latest.into_values().map(CurrentRating::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn snapshot(id: i32, rating_type: &str, as_of: NaiveDate, mu: i64, sigma: i64) -> RatingSnapshot {
        RatingSnapshot {
            id,
            player_id: 1,
            rating_type: rating_type.to_string(),
            event_id: None,
            as_of_date: as_of,
            mu: Decimal::from(mu),
            sigma: Decimal::from(sigma),
            created_at: as_of.and_hms_opt(12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn conservative_is_mu_minus_two_sigma() {
        assert_eq!(
            conservative(Decimal::from(25), Decimal::from(3)),
            Decimal::from(19)
        );
        assert_eq!(
            conservative(Decimal::new(250, 1), Decimal::new(15, 1)),
            Decimal::from(22)
        );
    }

    #[test]
    fn current_rating_picks_latest_date() {
        let snapshots = vec![
            snapshot(1, "openskill", date(2026, 1, 10), 24, 4),
            snapshot(2, "openskill", date(2026, 3, 2), 26, 3),
            snapshot(3, "openskill", date(2026, 2, 15), 25, 3),
        ];

        assert_eq!(current_rating(&snapshots).unwrap().id, 2);
    }

    #[test]
    fn inserting_older_snapshot_does_not_change_current() {
        let mut snapshots = vec![
            snapshot(1, "openskill", date(2026, 1, 10), 24, 4),
            snapshot(2, "openskill", date(2026, 3, 2), 26, 3),
        ];
        let before = current_rating(&snapshots).unwrap().id;

        // Backfilled history arrives after the fact with a newer id.
        snapshots.push(snapshot(9, "openskill", date(2025, 11, 1), 20, 6));

        assert_eq!(current_rating(&snapshots).unwrap().id, before);
    }

    #[test]
    fn date_tie_resolved_by_highest_id() {
        let snapshots = vec![
            snapshot(5, "elo", date(2026, 3, 2), 26, 3),
            snapshot(7, "elo", date(2026, 3, 2), 27, 2),
        ];

        assert_eq!(current_rating(&snapshots).unwrap().id, 7);
    }

    #[test]
    fn no_snapshots_means_unrated() {
        assert!(current_rating(&[]).is_none());
        assert!(current_ratings_by_type(&[]).is_empty());
    }

    #[test]
    fn one_current_rating_per_type() {
        let snapshots = vec![
            snapshot(1, "openskill", date(2026, 1, 10), 24, 4),
            snapshot(2, "elo", date(2026, 1, 12), 1500, 0),
            snapshot(3, "openskill", date(2026, 2, 1), 25, 3),
            snapshot(4, "ngs", date(2026, 1, 20), 9, 1),
        ];

        let current = current_ratings_by_type(&snapshots);

        assert_eq!(current.len(), 3);
        // Sorted by type name.
        assert_eq!(current[0].rating_type, "elo");
        assert_eq!(current[1].rating_type, "ngs");
        assert_eq!(current[2].rating_type, "openskill");
        assert_eq!(current[2].mu, Decimal::from(25));
        assert_eq!(current[2].conservative_rating, Decimal::from(19));
    }

    #[test]
    fn conservative_reflects_latest_sigma() {
        let snapshots = vec![
            snapshot(1, "openskill", date(2026, 1, 10), 25, 3),
            snapshot(2, "openskill", date(2026, 2, 10), 25, 1),
        ];

        let current = current_ratings_by_type(&snapshots);

        assert_eq!(current[0].conservative_rating, Decimal::from(23));
    }
}
