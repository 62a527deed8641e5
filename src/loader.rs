use std::path::Path;

use anyhow::Context;

use crate::models::{SatisfactionLevel, SurveyRecord};

pub const PERSONA_COLUMN: &str = "persona";
pub const ARRIVAL_COLUMN: &str = "arrival_airport";
pub const CHECK_IN_QUESTION: &str =
    "Overall, how satisfied were you with the Check-In process at the airport counter";
pub const BOARDING_QUESTION: &str = "Overall, how satisfied were you with the boarding process?";
pub const FLIGHT_QUESTION: &str = "Overall, how satisfied were you with your flight experience?";

/// The export tool emits a metadata row directly under the header; it is not
/// respondent data and is always skipped.
const METADATA_ROWS: usize = 1;
/// Bounded ingest: only the first 50 respondent rows are read.
const ROW_LIMIT: usize = 50;

/// Reads the survey CSV and derives each respondent's overall satisfaction
/// score. Unrecognized answer labels leave the score absent; a missing file
/// or missing required column is fatal.
pub fn load(path: &Path) -> anyhow::Result<Vec<SurveyRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("failed to open survey file {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("failed to read header row from {}", path.display()))?
        .clone();

    let persona_idx = column_index(&headers, PERSONA_COLUMN)?;
    let arrival_idx = column_index(&headers, ARRIVAL_COLUMN)?;
    let check_in_idx = column_index(&headers, CHECK_IN_QUESTION)?;
    let boarding_idx = column_index(&headers, BOARDING_QUESTION)?;
    let flight_idx = column_index(&headers, FLIGHT_QUESTION)?;

    let mut records = Vec::new();

    for result in reader.records().skip(METADATA_ROWS).take(ROW_LIMIT) {
        let row = result.with_context(|| format!("failed to read row from {}", path.display()))?;
        let field = |idx: usize| row.get(idx).unwrap_or("").to_string();

        let flight = field(flight_idx);
        let satisfaction_score =
            SatisfactionLevel::parse(&flight).map(SatisfactionLevel::score);

        records.push(SurveyRecord {
            travel_group: field(persona_idx),
            arrival_airport: field(arrival_idx),
            check_in: field(check_in_idx),
            boarding: field(boarding_idx),
            flight,
            satisfaction_score,
        });
    }

    Ok(records)
}

fn column_index(headers: &csv::StringRecord, name: &str) -> anyhow::Result<usize> {
    headers
        .iter()
        .position(|header| header == name)
        .with_context(|| format!("survey file is missing required column '{name}'"))
}
