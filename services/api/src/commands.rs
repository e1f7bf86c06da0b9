use clap::Args;
use serde_json::json;
use staff_registry::config::AppConfig;
use staff_registry::error::AppError;
use staff_registry::telemetry;
use staff_registry::workforce::{
    export_csv, merge_into, BatchImporter, DirectoryClient, Employee, EmployeeRegistry,
    ImportOutcome, SyncOutcome, WorkforceSummary,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ImportArgs {
    /// CSV batch to import (first line is treated as a header)
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Write the resulting registry back out as CSV
    #[arg(long)]
    pub(crate) export: Option<PathBuf>,
    /// Print JSON instead of the text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct FetchArgs {
    /// Directory endpoint; falls back to DIRECTORY_API_URL
    #[arg(long)]
    pub(crate) url: Option<String>,
    /// Print JSON instead of the text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// CSV batch to import before reporting
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Only list employees of this organization
    #[arg(long)]
    pub(crate) organization: Option<String>,
    /// List employees by last name instead of insertion order
    #[arg(long)]
    pub(crate) sorted: bool,
    /// Print JSON instead of the text summary
    #[arg(long)]
    pub(crate) json: bool,
}

fn load_config() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    Ok(config)
}

fn print_json(value: &serde_json::Value) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn run_import(args: ImportArgs) -> Result<(), AppError> {
    let ImportArgs { csv, export, json } = args;
    load_config()?;

    let mut registry = EmployeeRegistry::new();
    let outcome = BatchImporter::from_path(&mut registry, &csv);

    if let Some(path) = &export {
        let file = File::create(path)?;
        export_csv(&registry, BufWriter::new(file))?;
    }

    let summary = registry.report().summary();
    if json {
        return print_json(&json!({ "outcome": outcome, "summary": summary }));
    }

    println!("Employee import: {}", csv.display());
    render_import_outcome(&outcome);
    render_summary(&summary);
    if let Some(path) = export {
        println!("\nRegistry exported to {}", path.display());
    }
    Ok(())
}

pub(crate) async fn run_fetch(args: FetchArgs) -> Result<(), AppError> {
    let FetchArgs { url, json } = args;
    let config = load_config()?;

    let url = url
        .or_else(|| config.directory.api_url.clone())
        .ok_or(AppError::MissingDirectoryUrl)?;
    let client = DirectoryClient::new(config.directory.timeout())?;
    let employees = client.fetch_employees(&url).await?;

    let mut registry = EmployeeRegistry::new();
    let outcome = merge_into(&mut registry, employees);
    let summary = registry.report().summary();

    if json {
        return print_json(&json!({
            "source_url": url,
            "outcome": outcome,
            "employees": registry.all(),
            "summary": summary,
        }));
    }

    println!("Directory fetch: {url}");
    render_sync_outcome(&outcome);
    render_employees("Fetched employees", registry.all().iter());
    render_summary(&summary);
    Ok(())
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        csv,
        organization,
        sorted,
        json,
    } = args;
    load_config()?;

    let mut registry = EmployeeRegistry::new();
    let outcome = BatchImporter::from_path(&mut registry, &csv);

    let ordered = if sorted {
        registry.sorted_by_last_name()
    } else {
        registry.all().iter().collect()
    };
    let listed: Vec<&Employee> = ordered
        .into_iter()
        .filter(|employee| {
            organization
                .as_deref()
                .map_or(true, |name| employee.organization() == name)
        })
        .collect();
    let summary = registry.report().summary();

    if json {
        return print_json(&json!({
            "outcome": outcome,
            "employees": listed,
            "summary": summary,
        }));
    }

    println!("Workforce report: {}", csv.display());
    if !outcome.is_clean() {
        println!("{} line(s) rejected during import", outcome.rejected());
    }
    let heading = match &organization {
        Some(name) => format!("Employees of {name}"),
        None => "Employees".to_string(),
    };
    render_employees(&heading, listed.into_iter());
    render_summary(&summary);
    Ok(())
}

fn render_import_outcome(outcome: &ImportOutcome) {
    println!(
        "Imported {} employee(s), skipped {} blank line(s), rejected {}",
        outcome.imported,
        outcome.skipped_blank,
        outcome.rejected()
    );
    if outcome.is_clean() {
        return;
    }

    println!("\nDiagnostics");
    for diagnostic in &outcome.diagnostics {
        println!("- [{}] {}", diagnostic.category(), diagnostic);
    }
}

fn render_sync_outcome(outcome: &SyncOutcome) {
    println!(
        "Fetched {} entries: {} added, {} already present",
        outcome.fetched, outcome.added, outcome.duplicates
    );
}

fn render_employees<'a>(heading: &str, employees: impl Iterator<Item = &'a Employee>) {
    println!("\n{heading}");
    let mut listed = 0;
    for employee in employees {
        println!("- {employee}");
        listed += 1;
    }
    if listed == 0 {
        println!("- none");
    }
}

fn render_summary(summary: &WorkforceSummary) {
    println!("\nWorkforce summary");
    println!("- Headcount: {}", summary.headcount);
    println!(
        "- Average compensation: {:.2} PLN",
        summary.average_compensation
    );
    match &summary.highest_paid {
        Some(employee) => println!("- Highest paid: {employee}"),
        None => println!("- Highest paid: none"),
    }

    println!("\nPositions");
    for entry in &summary.position_counts {
        println!("- {} ({}): {}", entry.position_label, entry.position, entry.count);
    }

    if summary.inconsistent_compensation.is_empty() {
        println!("\nBelow position base pay: none");
    } else {
        println!("\nBelow position base pay");
        for employee in &summary.inconsistent_compensation {
            println!(
                "- {} (base {:.2} PLN)",
                employee,
                employee.position().base_compensation()
            );
        }
    }

    if !summary.organizations.is_empty() {
        println!("\nOrganizations");
        for entry in &summary.organizations {
            println!(
                "- {}: {} member(s), average {:.2} PLN, top earner {}",
                entry.organization,
                entry.statistics.member_count,
                entry.statistics.average_compensation,
                entry.statistics.highest_paid_name
            );
        }
    }
}
