use super::super::catalog::Position;
use super::super::domain::Employee;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrganizationStatistics {
    pub member_count: usize,
    pub average_compensation: f64,
    pub highest_paid_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrganizationStatisticsEntry {
    pub organization: String,
    #[serde(flatten)]
    pub statistics: OrganizationStatistics,
}

#[derive(Debug, Clone, Serialize)]
pub struct PositionCountEntry {
    pub position: Position,
    pub position_label: &'static str,
    pub hierarchy_rank: u8,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkforceSummary {
    pub headcount: usize,
    pub average_compensation: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highest_paid: Option<Employee>,
    pub position_counts: Vec<PositionCountEntry>,
    pub inconsistent_compensation: Vec<Employee>,
    pub organizations: Vec<OrganizationStatisticsEntry>,
}
