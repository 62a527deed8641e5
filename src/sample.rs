use std::path::Path;

use anyhow::Context;

/// A small survey export in the same shape as the production file: header,
/// one metadata row, then respondent rows. Lets the tool be exercised without
/// the real dataset.
const SAMPLE_SURVEY: &str = concat!(
    "persona,arrival_airport,",
    "\"Overall, how satisfied were you with the Check-In process at the airport counter\",",
    "\"Overall, how satisfied were you with the boarding process?\",",
    "\"Overall, how satisfied were you with your flight experience?\"\n",
    "Respondent persona,Destination,Check-in answer,Boarding answer,Flight answer\n",
    "Business traveller,LHR,Satisfied,Neutral,Very satisfied\n",
    "Business traveller,CDG,Very satisfied,Satisfied,Satisfied\n",
    "Leisure traveller,BCN,Neutral,Unsatisfied,Neutral\n",
    "Leisure traveller,LIS,Unsatisfied,Very unsatisfied,Unsatisfied\n",
    "Family trip,FRA,Satisfied,Satisfied,Satisfied\n",
    "Family trip,BCN,Very unsatisfied,Neutral,Unsatisfied\n",
    "Business traveller,FRA,Satisfied,Satisfied,Very satisfied\n",
    "Leisure traveller,LHR,Neutral,Satisfied,Satisfied\n",
    "Commuter,CDG,Satisfied,Neutral,\n",
    "Family trip,LIS,Unsatisfied,Unsatisfied,Neutral\n",
);

pub fn write_sample(path: &Path) -> anyhow::Result<()> {
    std::fs::write(path, SAMPLE_SURVEY)
        .with_context(|| format!("failed to write sample survey to {}", path.display()))?;
    Ok(())
}
