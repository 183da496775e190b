use crate::dto::masterpoints::MasterpointSummary;
use crate::models::MasterpointAward;

/// Fold a player's award history into per-category totals. Exact
/// decimal arithmetic throughout; award values carry two fractional
/// digits and must not drift.
///
/// `events_played` counts award rows, not distinct events: a player
/// awarded in two categories for the same event counts twice.
pub fn summarize(player_id: i32, awards: &[MasterpointAward]) -> MasterpointSummary {
    let mut summary = MasterpointSummary::empty(player_id);

    for award in awards {
        match award.award_type.as_str() {
            "local" => summary.local_points += award.points,
            "national" => summary.national_points += award.points,
            "regional" => summary.regional_points += award.points,
            "international" => summary.international_points += award.points,
            // Unknown categories still count towards the total below.
            _ => {}
        }

        summary.total_points += award.points;
        summary.events_played += 1;

        if summary.last_award_date.is_none_or(|d| award.awarded_date > d) {
            summary.last_award_date = Some(award.awarded_date);
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn award(id: i32, award_type: &str, points: Decimal, awarded: NaiveDate) -> MasterpointAward {
        MasterpointAward {
            id,
            player_id: 1,
            event_id: 10,
            organization_id: Some(1),
            award_type: award_type.to_string(),
            points,
            awarded_date: awarded,
            created_at: awarded.and_hms_opt(0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn sums_by_category_and_overall() {
        let awards = vec![
            award(1, "local", Decimal::new(150, 2), date(2026, 1, 5)),
            award(2, "national", Decimal::new(200, 2), date(2026, 2, 5)),
            award(3, "local", Decimal::new(50, 2), date(2026, 3, 5)),
        ];

        let summary = summarize(1, &awards);

        assert_eq!(summary.local_points, Decimal::new(200, 2));
        assert_eq!(summary.national_points, Decimal::new(200, 2));
        assert_eq!(summary.regional_points, Decimal::ZERO);
        assert_eq!(summary.international_points, Decimal::ZERO);
        assert_eq!(summary.total_points, Decimal::new(400, 2));
        assert_eq!(summary.events_played, 3);
        assert_eq!(summary.last_award_date, Some(date(2026, 3, 5)));
    }

    #[test]
    fn unknown_category_counts_in_total_only() {
        let awards = vec![
            award(1, "local", Decimal::new(100, 2), date(2026, 1, 5)),
            award(2, "continental", Decimal::new(300, 2), date(2026, 1, 6)),
        ];

        let summary = summarize(1, &awards);

        assert_eq!(summary.local_points, Decimal::new(100, 2));
        assert_eq!(summary.total_points, Decimal::new(400, 2));
        let buckets = summary.local_points
            + summary.national_points
            + summary.regional_points
            + summary.international_points;
        assert!(buckets < summary.total_points);
    }

    #[test]
    fn no_awards_yields_zeroed_summary() {
        let summary = summarize(42, &[]);

        assert_eq!(summary, MasterpointSummary::empty(42));
        assert_eq!(summary.total_points, Decimal::ZERO);
        assert_eq!(summary.events_played, 0);
        assert!(summary.last_award_date.is_none());
    }

    #[test]
    fn duplicate_awards_are_additive() {
        // Same event, same category, entered twice: tolerated, summed.
        let awards = vec![
            award(1, "regional", Decimal::new(75, 2), date(2026, 4, 1)),
            award(2, "regional", Decimal::new(75, 2), date(2026, 4, 1)),
        ];

        let summary = summarize(1, &awards);

        assert_eq!(summary.regional_points, Decimal::new(150, 2));
        assert_eq!(summary.events_played, 2);
    }

    #[test]
    fn last_award_date_is_max_not_last_row() {
        let awards = vec![
            award(1, "local", Decimal::ONE, date(2026, 5, 1)),
            award(2, "local", Decimal::ONE, date(2026, 2, 1)),
        ];

        let summary = summarize(1, &awards);

        assert_eq!(summary.last_award_date, Some(date(2026, 5, 1)));
    }

    #[test]
    fn summation_is_exact_over_many_small_awards() {
        // 0.01 added 1000 times must be exactly 10.00.
        let awards: Vec<MasterpointAward> = (0..1000)
            .map(|i| award(i, "local", Decimal::new(1, 2), date(2026, 1, 1)))
            .collect();

        let summary = summarize(1, &awards);

        assert_eq!(summary.total_points, Decimal::new(1000, 2));
    }
}
