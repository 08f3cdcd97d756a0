//! Classification of listed packages.
//!
//! Joins the package list with the installed package map and the usage
//! matcher, producing an [`AuditReport`] with four buckets:
//!
//! - **used**: installed and referenced from source
//! - **unused**: installed but never referenced
//! - **not installed**: absent from the installed map
//! - **installed but not in list**: installed packages no entry names

pub mod audit;
pub mod lookup;

pub use audit::{
    classify, AuditReport, ClassifiedPackage, UnlistedPackage, UsageStatus, PROGRESS_INTERVAL,
};
pub use lookup::{find_installed_package, is_listed, InstallStatus};
