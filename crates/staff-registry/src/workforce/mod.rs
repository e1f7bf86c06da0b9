//! Employee registry, tolerant CSV intake, directory sync, and workforce statistics.

pub mod catalog;
pub mod directory;
pub mod domain;
pub mod export;
pub mod import;
pub mod registry;
pub mod report;
pub mod router;

pub use catalog::{Position, PositionProfile, UnknownPosition};
pub use directory::{merge_into, DirectoryClient, DirectoryEntry, DirectoryError, SyncOutcome};
pub use domain::{Employee, EmployeeError};
pub use export::{export_csv, ExportError};
pub use import::{BatchImporter, ImportDiagnostic, ImportOutcome, LineRejection};
pub use registry::EmployeeRegistry;
pub use report::{OrganizationStatistics, WorkforceReport, WorkforceSummary};
pub use router::{employee_router, read_registry, write_registry, SharedRegistry};
