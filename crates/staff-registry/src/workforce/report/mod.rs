mod summary;
pub mod views;

pub use summary::WorkforceReport;
pub use views::{
    OrganizationStatistics, OrganizationStatisticsEntry, PositionCountEntry, WorkforceSummary,
};
