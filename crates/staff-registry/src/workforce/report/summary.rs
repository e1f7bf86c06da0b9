use super::super::catalog::Position;
use super::super::domain::Employee;
use super::views::{
    OrganizationStatistics, OrganizationStatisticsEntry, PositionCountEntry, WorkforceSummary,
};
use std::collections::BTreeMap;

/// Read-only aggregates over a registry snapshot.
///
/// Borrowing the registry keeps every figure consistent with the contents at the
/// time of the call; nothing is cached between reports.
#[derive(Debug, Clone, Copy)]
pub struct WorkforceReport<'a> {
    employees: &'a [Employee],
}

impl<'a> WorkforceReport<'a> {
    pub fn new(employees: &'a [Employee]) -> Self {
        Self { employees }
    }

    /// Mean compensation, `0.0` for an empty registry.
    pub fn average_compensation(&self) -> f64 {
        mean(self.employees.iter())
    }

    /// Top earner; on ties the earliest inserted employee wins.
    pub fn highest_paid(&self) -> Option<&'a Employee> {
        top_earner(self.employees.iter())
    }

    pub fn group_by_position(&self) -> BTreeMap<Position, Vec<&'a Employee>> {
        let mut groups: BTreeMap<Position, Vec<&'a Employee>> = BTreeMap::new();
        for employee in self.employees {
            groups.entry(employee.position()).or_default().push(employee);
        }
        groups
    }

    pub fn count_by_position(&self) -> BTreeMap<Position, usize> {
        let mut counts = BTreeMap::new();
        for employee in self.employees {
            *counts.entry(employee.position()).or_insert(0) += 1;
        }
        counts
    }

    /// Employees paid strictly below their position's base compensation.
    pub fn inconsistent_compensation(&self) -> Vec<&'a Employee> {
        self.employees
            .iter()
            .filter(|employee| employee.is_below_base())
            .collect()
    }

    pub fn organization_statistics(&self) -> BTreeMap<String, OrganizationStatistics> {
        let mut members: BTreeMap<&'a str, Vec<&'a Employee>> = BTreeMap::new();
        for employee in self.employees {
            members
                .entry(employee.organization())
                .or_default()
                .push(employee);
        }

        members
            .into_iter()
            .filter_map(|(organization, employees)| {
                let top = top_earner(employees.iter().copied())?;
                Some((
                    organization.to_string(),
                    OrganizationStatistics {
                        member_count: employees.len(),
                        average_compensation: mean(employees.iter().copied()),
                        highest_paid_name: top.full_name(),
                    },
                ))
            })
            .collect()
    }

    pub fn summary(&self) -> WorkforceSummary {
        let position_counts = self
            .count_by_position()
            .into_iter()
            .map(|(position, count)| PositionCountEntry {
                position,
                position_label: position.label(),
                hierarchy_rank: position.hierarchy_rank(),
                count,
            })
            .collect();

        let organizations = self
            .organization_statistics()
            .into_iter()
            .map(|(organization, statistics)| OrganizationStatisticsEntry {
                organization,
                statistics,
            })
            .collect();

        WorkforceSummary {
            headcount: self.employees.len(),
            average_compensation: self.average_compensation(),
            highest_paid: self.highest_paid().cloned(),
            position_counts,
            inconsistent_compensation: self
                .inconsistent_compensation()
                .into_iter()
                .cloned()
                .collect(),
            organizations,
        }
    }
}

fn mean<'a>(employees: impl Iterator<Item = &'a Employee>) -> f64 {
    let (total, count) = employees.fold((0.0, 0usize), |(total, count), employee| {
        (total + employee.compensation(), count + 1)
    });
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}

fn top_earner<'a>(mut employees: impl Iterator<Item = &'a Employee>) -> Option<&'a Employee> {
    let first = employees.next()?;
    Some(employees.fold(first, |best, candidate| {
        if candidate.compensation() > best.compensation() {
            candidate
        } else {
            best
        }
    }))
}
