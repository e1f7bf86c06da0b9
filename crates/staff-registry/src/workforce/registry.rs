use std::collections::HashSet;

use super::domain::Employee;
use super::report::WorkforceReport;

/// Owned, insertion-ordered collection of employees keyed by email.
#[derive(Debug, Default, Clone)]
pub struct EmployeeRegistry {
    employees: Vec<Employee>,
    emails: HashSet<String>,
}

impl EmployeeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `employee` unless its email is already tracked. First write wins.
    pub fn add(&mut self, employee: Employee) -> bool {
        if self.emails.contains(employee.key()) {
            tracing::debug!(email = employee.key(), "duplicate employee ignored");
            return false;
        }

        self.emails.insert(employee.key().to_string());
        self.employees.push(employee);
        true
    }

    pub fn all(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn contains(&self, email: &str) -> bool {
        self.emails.contains(email)
    }

    pub fn find_by_email(&self, email: &str) -> Option<&Employee> {
        if !self.contains(email) {
            return None;
        }
        self.employees.iter().find(|employee| employee.key() == email)
    }

    pub fn by_organization(&self, organization: &str) -> Vec<&Employee> {
        self.employees
            .iter()
            .filter(|employee| employee.organization() == organization)
            .collect()
    }

    pub fn sorted_by_last_name(&self) -> Vec<&Employee> {
        let mut sorted: Vec<&Employee> = self.employees.iter().collect();
        sorted.sort_by(|left, right| left.last_name().cmp(right.last_name()));
        sorted
    }

    /// Aggregates over the current contents.
    pub fn report(&self) -> WorkforceReport<'_> {
        WorkforceReport::new(&self.employees)
    }
}
