use super::catalog::Position;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Employee tracked by the registry. Identity is the email address alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "EmployeeRecord")]
pub struct Employee {
    first_name: String,
    last_name: String,
    email: String,
    organization: String,
    position: Position,
    compensation: f64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EmployeeError {
    #[error("compensation must be positive, got: {0}")]
    NonPositiveCompensation(f64),
}

impl Employee {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        organization: impl Into<String>,
        position: Position,
        compensation: f64,
    ) -> Result<Self, EmployeeError> {
        Ok(Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            organization: organization.into(),
            position,
            compensation: validate_compensation(compensation)?,
        })
    }

    /// Identity key used for uniqueness checks and lookups.
    pub fn key(&self) -> &str {
        &self.email
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn compensation(&self) -> f64 {
        self.compensation
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Paid below the catalog floor for the held position.
    pub fn is_below_base(&self) -> bool {
        self.compensation < self.position.base_compensation()
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = last_name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_organization(&mut self, organization: impl Into<String>) {
        self.organization = organization.into();
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn set_compensation(&mut self, compensation: f64) -> Result<(), EmployeeError> {
        self.compensation = validate_compensation(compensation)?;
        Ok(())
    }
}

/// Unvalidated wire shape; decoding goes through [`Employee::new`].
#[derive(Deserialize)]
struct EmployeeRecord {
    first_name: String,
    last_name: String,
    email: String,
    organization: String,
    position: Position,
    compensation: f64,
}

impl TryFrom<EmployeeRecord> for Employee {
    type Error = EmployeeError;

    fn try_from(record: EmployeeRecord) -> Result<Self, Self::Error> {
        Employee::new(
            record.first_name,
            record.last_name,
            record.email,
            record.organization,
            record.position,
            record.compensation,
        )
    }
}

fn validate_compensation(value: f64) -> Result<f64, EmployeeError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(EmployeeError::NonPositiveCompensation(value))
    }
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Employee {}

impl Hash for Employee {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}, {:.2} PLN, {})",
            self.first_name, self.last_name, self.position, self.compensation, self.organization
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan() -> Employee {
        Employee::new(
            "Jan",
            "Kowalski",
            "jan@techcorp.pl",
            "TechCorp",
            Position::Programista,
            8_500.0,
        )
        .expect("valid employee")
    }

    #[test]
    fn equality_follows_email_only() {
        let mut other = jan();
        other.set_first_name("Janusz");
        other.set_organization("DataCorp");
        other.set_position(Position::Manager);
        assert_eq!(jan(), other);

        other.set_email("janusz@datacorp.pl");
        assert_ne!(jan(), other);
    }

    #[test]
    fn rejects_non_positive_compensation() {
        for value in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = Employee::new("A", "B", "a@b.pl", "Org", Position::Stazysta, value);
            assert!(result.is_err(), "{value} should be rejected");
        }

        let mut employee = jan();
        assert!(employee.set_compensation(-10.0).is_err());
        assert_eq!(employee.compensation(), 8_500.0);
        employee.set_compensation(9_000.0).expect("positive accepted");
        assert_eq!(employee.compensation(), 9_000.0);
    }

    #[test]
    fn decoding_enforces_positive_compensation() {
        let payload = |compensation: &str| {
            format!(
                r#"{{"first_name":"Ewa","last_name":"Lis","email":"ewa@x.com","organization":"TechCorp","position":"MANAGER","compensation":{compensation}}}"#
            )
        };

        let error = serde_json::from_str::<Employee>(&payload("-5.0")).expect_err("negative rejected");
        assert!(error.to_string().contains("compensation must be positive"));
        assert!(serde_json::from_str::<Employee>(&payload("0")).is_err());

        let employee: Employee = serde_json::from_str(&payload("12500.0")).expect("valid record");
        assert_eq!(employee.position(), Position::Manager);
        assert_eq!(employee.compensation(), 12_500.0);

        let restored: Employee =
            serde_json::from_str(&serde_json::to_string(&jan()).expect("serialize")).expect("decode");
        assert_eq!(restored.compensation(), 8_500.0);
    }

    #[test]
    fn display_renders_position_and_amount() {
        assert_eq!(
            jan().to_string(),
            "Jan Kowalski (PROGRAMISTA, 8500.00 PLN, TechCorp)"
        );
        assert_eq!(jan().full_name(), "Jan Kowalski");
    }

    #[test]
    fn below_base_compares_against_catalog() {
        let mut employee = jan();
        assert!(!employee.is_below_base());
        employee.set_position(Position::Manager);
        assert!(employee.is_below_base());
    }
}
