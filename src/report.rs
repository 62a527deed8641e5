use std::fmt::Write;

use crate::models::{AreaRate, DashboardAggregates};

/// Normalizes the defined area rates into pie proportions summing to 1.
/// Areas without a rate get no share; if nothing can be normalized (no
/// defined rates, or all defined rates are zero) every share is absent.
pub fn pie_shares(areas: &[AreaRate]) -> Vec<Option<f64>> {
    let total: f64 = areas.iter().filter_map(|area| area.rate).sum();
    if total <= 0.0 {
        return vec![None; areas.len()];
    }
    areas
        .iter()
        .map(|area| area.rate.map(|rate| rate / total))
        .collect()
}

/// Renders the three dashboard tables as markdown. Undefined means and rates
/// render as `n/a`; empty aggregates render a placeholder line.
pub fn build_report(
    source_label: &str,
    response_count: usize,
    aggregates: &DashboardAggregates,
) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# Passenger Satisfaction Dashboard");
    let _ = writeln!(
        output,
        "Computed from {} ({} responses)",
        source_label, response_count
    );

    let _ = writeln!(output);
    let _ = writeln!(output, "## Satisfaction by Travel Group");
    if aggregates.groups.is_empty() {
        let _ = writeln!(output, "No responses loaded.");
    } else {
        let _ = writeln!(output, "| Travel group | Average satisfaction | Responses |");
        let _ = writeln!(output, "| --- | --- | --- |");
        for group in &aggregates.groups {
            let _ = writeln!(
                output,
                "| {} | {} | {} |",
                group.travel_group,
                format_mean(group.average_satisfaction),
                group.count
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Unsatisfactory Rate by Service Area");
    if aggregates.areas.is_empty() {
        let _ = writeln!(output, "No service areas surveyed.");
    } else {
        let shares = pie_shares(&aggregates.areas);
        let _ = writeln!(output, "| Service area | Unsatisfactory rate | Pie share |");
        let _ = writeln!(output, "| --- | --- | --- |");
        for (area, share) in aggregates.areas.iter().zip(shares) {
            let _ = writeln!(
                output,
                "| {} | {} | {} |",
                area.area,
                format_rate(area.rate),
                format_rate(share)
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Satisfaction by Arrival Location");
    if aggregates.locations.is_empty() {
        let _ = writeln!(output, "No responses loaded.");
    } else {
        let _ = writeln!(output, "| Arrival location | Average satisfaction |");
        let _ = writeln!(output, "| --- | --- |");
        for location in &aggregates.locations {
            let _ = writeln!(
                output,
                "| {} | {} |",
                location.location,
                format_mean(location.average_satisfaction)
            );
        }
    }

    output
}

pub fn format_mean(mean: Option<f64>) -> String {
    match mean {
        Some(value) => format!("{value:.2}"),
        None => "n/a".to_string(),
    }
}

pub fn format_rate(rate: Option<f64>) -> String {
    match rate {
        Some(value) => format!("{:.1}%", value * 100.0),
        None => "n/a".to_string(),
    }
}
