//! Username candidate generation.
//!
//! This module turns full names into username candidates:
//! - `record`: extracting a (first, last) name record from one input line
//! - `rules`: the fixed permutation rules applied to each record
//! - `collector`: order-preserving deduplication of all generated candidates

mod collector;
mod record;
mod rules;

pub use collector::{UsernameCollector, dedup_preserving_order};
pub use record::NameRecord;
pub use rules::make_permutations;
