//! Source code analysis module for pkgscope.
//!
//! This module finds the source files of a project and decides, by textual
//! pattern matching, whether a package is referenced from them.
//!
//! # Features
//!
//! - Depth-first source enumeration that skips `node_modules`, build output
//!   and VCS directories
//! - One walk per run, shared by every package lookup
//! - ES module `from`, CommonJS `require()`, `import` and bare quoted name
//!   patterns, matched case-insensitively
//!
//! # Example
//!
//! ```ignore
//! use pkgscope::analysis::{check_package_usage, SourceFileCache};
//!
//! let sources = SourceFileCache::new("src");
//! if check_package_usage("lodash", &sources) {
//!     println!("lodash is referenced from {} files", sources.files().len());
//! }
//! ```

pub mod scanner;
pub mod usage;

// Re-export main types for convenience
pub use scanner::{collect_source_files, SourceFileCache, IGNORED_DIRS, SOURCE_EXTENSIONS};
pub use usage::{check_package_usage, usage_patterns, UsageMatcher};
