//! Parser module for pkgscope.
//!
//! This module reads the three inputs of an audit: the npm manifest, the npm
//! lockfile and the package list.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use pkgscope::parser::{read_installed_packages, read_package_list};
//!
//! let entries = read_package_list(Path::new("package-list.txt"))?;
//! let installed = read_installed_packages(
//!     Path::new("package-lock.json"),
//!     Path::new("package.json"),
//! );
//!
//! println!("{} listed, {} installed", entries.len(), installed.len());
//! ```

pub mod package_json;
pub mod package_list;
pub mod package_lock;
pub mod types;

// Re-export commonly used types for convenience
pub use package_json::{direct_dependencies, read_direct_dependencies, ParseError, ParseResult};
pub use package_list::{read_package_list, PackageListError};
pub use package_lock::{installed_packages, package_name_from_install_path, read_installed_packages};

pub use types::{DirectDependencyMap, InstalledPackageMap, PackageEntry, PackageJson, PackageLock};
