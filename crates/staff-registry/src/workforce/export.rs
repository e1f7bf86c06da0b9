use super::registry::EmployeeRegistry;
use std::io::Write;

const HEADER: [&str; 6] = [
    "firstName",
    "lastName",
    "email",
    "organization",
    "position",
    "compensation",
];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write employee export: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush employee export: {0}")]
    Io(#[from] std::io::Error),
}

/// Write the registry in the same six-column layout the importer accepts.
pub fn export_csv<W: Write>(registry: &EmployeeRegistry, writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(writer);

    csv_writer.write_record(HEADER)?;
    for employee in registry.all() {
        let compensation = employee.compensation().to_string();
        csv_writer.write_record([
            employee.first_name(),
            employee.last_name(),
            employee.email(),
            employee.organization(),
            employee.position().identifier(),
            compensation.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    tracing::debug!(rows = registry.len(), "employee export written");
    Ok(())
}
