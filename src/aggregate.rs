use std::cmp::Ordering;
use std::collections::HashMap;

use crate::loader::{BOARDING_QUESTION, CHECK_IN_QUESTION, FLIGHT_QUESTION};
use crate::models::{
    AreaRate, DashboardAggregates, GroupSatisfaction, LocationSatisfaction, SatisfactionLevel,
    SurveyRecord,
};

/// Runs all three aggregators over one loaded survey.
pub fn compute(records: &[SurveyRecord]) -> DashboardAggregates {
    DashboardAggregates {
        groups: by_travel_group(records),
        areas: unsatisfaction_rates(records),
        locations: by_arrival_location(records),
    }
}

/// Mean satisfaction and respondent count per travel group, in first-occurrence
/// order. The count includes rows whose score is absent; the mean does not.
pub fn by_travel_group(records: &[SurveyRecord]) -> Vec<GroupSatisfaction> {
    grouped_scores(records, |record| &record.travel_group)
        .into_iter()
        .map(|(travel_group, average_satisfaction, count)| GroupSatisfaction {
            travel_group,
            average_satisfaction,
            count,
        })
        .collect()
}

/// Fraction of non-neutral responses rated unsatisfied, per service area, in
/// fixed area order. Neutral and unrecognized labels count toward neither side;
/// an area with no decided responses has no rate.
pub fn unsatisfaction_rates(records: &[SurveyRecord]) -> Vec<AreaRate> {
    let areas: [(&str, fn(&SurveyRecord) -> &str); 3] = [
        (CHECK_IN_QUESTION, |record| &record.check_in),
        (BOARDING_QUESTION, |record| &record.boarding),
        (FLIGHT_QUESTION, |record| &record.flight),
    ];

    areas
        .into_iter()
        .map(|(area, label_of)| {
            let mut unsatisfied = 0usize;
            let mut decided = 0usize;
            for record in records {
                match SatisfactionLevel::parse(label_of(record)) {
                    Some(SatisfactionLevel::Neutral) | None => {}
                    Some(level) => {
                        decided += 1;
                        if level.is_unsatisfied() {
                            unsatisfied += 1;
                        }
                    }
                }
            }
            AreaRate {
                area: area.to_string(),
                rate: (decided > 0).then(|| unsatisfied as f64 / decided as f64),
            }
        })
        .collect()
}

/// Mean satisfaction per arrival airport, sorted descending. The sort is
/// stable, so airports with equal means keep first-occurrence order; airports
/// with no scored responses sort last.
pub fn by_arrival_location(records: &[SurveyRecord]) -> Vec<LocationSatisfaction> {
    let mut locations: Vec<LocationSatisfaction> =
        grouped_scores(records, |record| &record.arrival_airport)
            .into_iter()
            .map(|(location, average_satisfaction, _)| LocationSatisfaction {
                location,
                average_satisfaction,
            })
            .collect();

    locations.sort_by(|a, b| match (a.average_satisfaction, b.average_satisfaction) {
        (Some(left), Some(right)) => right.partial_cmp(&left).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    locations
}

/// Groups records by an exact string key, preserving first-occurrence order.
/// Returns (key, mean of present scores, row count) per group.
fn grouped_scores<'a>(
    records: &'a [SurveyRecord],
    key_of: impl Fn(&'a SurveyRecord) -> &'a str,
) -> Vec<(String, Option<f64>, usize)> {
    struct Bucket {
        key: String,
        score_sum: f64,
        scored: usize,
        count: usize,
    }

    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut buckets: Vec<Bucket> = Vec::new();

    for record in records {
        let key = key_of(record);
        let slot = *index.entry(key).or_insert_with(|| {
            buckets.push(Bucket {
                key: key.to_string(),
                score_sum: 0.0,
                scored: 0,
                count: 0,
            });
            buckets.len() - 1
        });

        let bucket = &mut buckets[slot];
        bucket.count += 1;
        if let Some(score) = record.satisfaction_score {
            bucket.score_sum += score as f64;
            bucket.scored += 1;
        }
    }

    buckets
        .into_iter()
        .map(|bucket| {
            let mean = (bucket.scored > 0).then(|| bucket.score_sum / bucket.scored as f64);
            (bucket.key, mean, bucket.count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        travel_group: &str,
        arrival_airport: &str,
        flight: &str,
    ) -> SurveyRecord {
        SurveyRecord {
            travel_group: travel_group.to_string(),
            arrival_airport: arrival_airport.to_string(),
            check_in: "Neutral".to_string(),
            boarding: "Neutral".to_string(),
            flight: flight.to_string(),
            satisfaction_score: SatisfactionLevel::parse(flight)
                .map(SatisfactionLevel::score),
        }
    }

    #[test]
    fn groups_in_first_occurrence_order_with_means_and_counts() {
        let records = vec![
            record("Business", "LUX", "Very satisfied"),
            record("Business", "LUX", "Neutral"),
            record("Leisure", "LUX", "Satisfied"),
        ];

        let groups = by_travel_group(&records);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].travel_group, "Business");
        assert_eq!(groups[0].average_satisfaction, Some(4.0));
        assert_eq!(groups[0].count, 2);
        assert_eq!(groups[1].travel_group, "Leisure");
        assert_eq!(groups[1].average_satisfaction, Some(4.0));
        assert_eq!(groups[1].count, 1);
    }

    #[test]
    fn group_counts_include_unscored_rows() {
        let records = vec![
            record("Business", "LUX", "Satisfied"),
            record("Business", "LUX", "no answer"),
        ];

        let groups = by_travel_group(&records);
        assert_eq!(groups[0].count, 2);
        assert_eq!(groups[0].average_satisfaction, Some(4.0));

        let total: usize = groups.iter().map(|g| g.count).sum();
        assert_eq!(total, records.len());
    }

    #[test]
    fn group_with_no_scores_has_no_mean() {
        let records = vec![record("Crew", "LUX", "declined")];
        let groups = by_travel_group(&records);
        assert_eq!(groups[0].average_satisfaction, None);
        assert_eq!(groups[0].count, 1);
    }

    #[test]
    fn unsatisfaction_rate_excludes_neutral_both_sides() {
        let records: Vec<SurveyRecord> = ["Unsatisfied", "Neutral", "Satisfied", "Very unsatisfied"]
            .iter()
            .map(|label| {
                let mut row = record("Business", "LUX", "Neutral");
                row.check_in = label.to_string();
                row
            })
            .collect();

        let rates = unsatisfaction_rates(&records);
        assert_eq!(rates[0].area, CHECK_IN_QUESTION);
        let rate = rates[0].rate.unwrap();
        assert!((rate - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn all_neutral_area_has_no_rate() {
        let records = vec![record("Business", "LUX", "Neutral")];
        let rates = unsatisfaction_rates(&records);
        // check_in and boarding fixtures are all Neutral, flight is too
        assert!(rates.iter().all(|area| area.rate.is_none()));
    }

    #[test]
    fn rates_preserve_area_order_and_stay_in_unit_interval() {
        let mut first = record("Business", "LUX", "Very unsatisfied");
        first.check_in = "Very satisfied".to_string();
        first.boarding = "Unsatisfied".to_string();
        let records = vec![first];

        let rates = unsatisfaction_rates(&records);
        assert_eq!(rates.len(), 3);
        assert_eq!(rates[0].area, CHECK_IN_QUESTION);
        assert_eq!(rates[1].area, BOARDING_QUESTION);
        assert_eq!(rates[2].area, FLIGHT_QUESTION);
        for area in &rates {
            if let Some(rate) = area.rate {
                assert!((0.0..=1.0).contains(&rate));
            }
        }
        assert_eq!(rates[0].rate, Some(0.0));
        assert_eq!(rates[1].rate, Some(1.0));
        assert_eq!(rates[2].rate, Some(1.0));
    }

    #[test]
    fn locations_sort_descending_with_stable_ties() {
        let records = vec![
            record("Business", "A", "Unsatisfied"),
            record("Business", "B", "Very satisfied"),
            record("Business", "B", "Satisfied"),
            record("Business", "C", "Very satisfied"),
            record("Business", "C", "Satisfied"),
        ];

        let locations = by_arrival_location(&records);
        let order: Vec<&str> = locations.iter().map(|l| l.location.as_str()).collect();
        assert_eq!(order, ["B", "C", "A"]);
        assert_eq!(locations[0].average_satisfaction, Some(4.5));
        assert_eq!(locations[2].average_satisfaction, Some(2.0));
    }

    #[test]
    fn unscored_locations_sort_last() {
        let records = vec![
            record("Business", "A", "skipped"),
            record("Business", "B", "Unsatisfied"),
        ];

        let locations = by_arrival_location(&records);
        assert_eq!(locations[0].location, "B");
        assert_eq!(locations[1].location, "A");
        assert_eq!(locations[1].average_satisfaction, None);
    }

    #[test]
    fn compute_is_deterministic() {
        let records = vec![
            record("Business", "LUX", "Satisfied"),
            record("Leisure", "CDG", "Unsatisfied"),
        ];

        let first = serde_json::to_string(&compute(&records)).unwrap();
        let second = serde_json::to_string(&compute(&records)).unwrap();
        assert_eq!(first, second);
    }
}
