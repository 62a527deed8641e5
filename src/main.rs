use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

mod aggregate;
mod loader;
mod models;
mod report;
mod sample;

#[derive(Parser)]
#[command(name = "satisfaction-dashboard")]
#[command(about = "Passenger satisfaction aggregates for airline survey exports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the three aggregates to stdout
    Summary {
        #[arg(long)]
        csv: PathBuf,
    },
    /// Generate a markdown report with the dashboard tables
    Report {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
    /// Export the aggregates as JSON for a charting layer
    Export {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long, default_value = "aggregates.json")]
        out: PathBuf,
    },
    /// Write an embedded sample survey CSV
    Sample {
        #[arg(long, default_value = "sample_survey.csv")]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Summary { csv } => {
            let records = loader::load(&csv)?;
            if records.is_empty() {
                println!("No responses found in {}.", csv.display());
                return Ok(());
            }
            let aggregates = aggregate::compute(&records);

            println!("Satisfaction by travel group:");
            for group in &aggregates.groups {
                println!(
                    "- {}: average {} across {} responses",
                    group.travel_group,
                    report::format_mean(group.average_satisfaction),
                    group.count
                );
            }

            println!("Unsatisfactory rate by service area:");
            for area in &aggregates.areas {
                println!("- {}: {}", area.area, report::format_rate(area.rate));
            }

            println!("Satisfaction by arrival location:");
            for location in &aggregates.locations {
                println!(
                    "- {}: average {}",
                    location.location,
                    report::format_mean(location.average_satisfaction)
                );
            }
        }
        Commands::Report { csv, out } => {
            let records = loader::load(&csv)?;
            let aggregates = aggregate::compute(&records);
            let source_label = csv.display().to_string();
            let report = report::build_report(&source_label, records.len(), &aggregates);
            std::fs::write(&out, report)
                .with_context(|| format!("failed to write report to {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
        Commands::Export { csv, out } => {
            let records = loader::load(&csv)?;
            let aggregates = aggregate::compute(&records);
            let json = serde_json::to_string_pretty(&aggregates)?;
            std::fs::write(&out, json)
                .with_context(|| format!("failed to write aggregates to {}", out.display()))?;
            println!("Aggregates exported to {}.", out.display());
        }
        Commands::Sample { out } => {
            sample::write_sample(&out)?;
            println!("Sample survey written to {}.", out.display());
        }
    }

    Ok(())
}
