//! Username permutation generator library
//!
//! This library turns a file of full names into a list of candidate
//! usernames built from fixed first/last name rules, with exact duplicates
//! removed in first-seen order.
//!
//! # Examples
//!
//! ```rust
//! use userpermutation::usernames::{NameRecord, dedup_preserving_order};
//!
//! let lines = ["James Ross", "Madonna", "James Ross"];
//! let candidates = lines
//!     .iter()
//!     .filter_map(|line| NameRecord::from_line(line))
//!     .flat_map(|record| record.permutations());
//!
//! let usernames = dedup_preserving_order(candidates);
//! assert_eq!(
//!     usernames,
//!     ["James", "Ross", "James.Ross", "Ross.James", "jross", "j.ross"]
//! );
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod names_file;
pub mod usernames;

// Re-export commonly used types for convenience
pub use app::{RunSummary, run};
pub use config::Config;
pub use error::AppError;
pub use usernames::{NameRecord, UsernameCollector, dedup_preserving_order, make_permutations};
