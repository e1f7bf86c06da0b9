use super::DirectoryError;
use crate::workforce::catalog::Position;
use crate::workforce::domain::Employee;
use serde::Deserialize;

/// Directory user as decoded from the remote payload. Required fields are
/// optional here so their absence surfaces as a categorized error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectoryEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub company: Option<DirectoryCompany>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectoryCompany {
    #[serde(default)]
    pub name: Option<String>,
}

pub fn decode_entries(body: &str) -> Result<Vec<DirectoryEntry>, DirectoryError> {
    serde_json::from_str(body).map_err(|err| DirectoryError::Payload(err.to_string()))
}

/// Translate every entry or none: the first malformed entry fails the batch.
pub fn translate_entries(entries: Vec<DirectoryEntry>) -> Result<Vec<Employee>, DirectoryError> {
    entries.into_iter().map(translate_entry).collect()
}

fn translate_entry(entry: DirectoryEntry) -> Result<Employee, DirectoryError> {
    let name = entry.name.ok_or(DirectoryError::MissingField { field: "name" })?;
    let email = entry
        .email
        .ok_or(DirectoryError::MissingField { field: "email" })?;
    let company = entry.company.ok_or(DirectoryError::MissingCompany)?;
    let organization = company
        .name
        .ok_or(DirectoryError::MissingField {
            field: "company.name",
        })?;
    let (first_name, last_name) = split_full_name(&name)?;

    let position = Position::directory_default();
    Employee::new(
        first_name,
        last_name,
        email,
        organization,
        position,
        position.base_compensation(),
    )
    .map_err(|err| DirectoryError::Payload(err.to_string()))
}

fn split_full_name(full_name: &str) -> Result<(&str, &str), DirectoryError> {
    let trimmed = full_name.trim();
    if trimmed.is_empty() {
        return Err(DirectoryError::EmptyName);
    }

    Ok(match trimmed.split_once(char::is_whitespace) {
        Some((first, rest)) => (first, rest.trim_start()),
        None => (trimmed, ""),
    })
}
