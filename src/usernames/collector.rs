//! Order-preserving deduplication of username candidates.
//!
//! Candidates from every name record flow into one collector. The first
//! occurrence of a string keeps its position; later exact repeats are dropped.
//! Comparison is case-sensitive and nothing is trimmed.

use std::collections::HashSet;

/// Accumulates unique username candidates in first-seen order.
///
/// # Example
///
/// ```
/// use userpermutation::usernames::UsernameCollector;
///
/// let mut collector = UsernameCollector::new();
/// assert!(collector.insert("jross".to_string()));
/// assert!(!collector.insert("jross".to_string()));
/// assert_eq!(collector.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct UsernameCollector {
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl UsernameCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a candidate unless an equal string was added before.
    ///
    /// Returns `true` if the candidate was new.
    pub fn insert(&mut self, candidate: String) -> bool {
        if self.seen.contains(&candidate) {
            tracing::trace!(candidate = %candidate, "dropping duplicate username");
            return false;
        }
        self.seen.insert(candidate.clone());
        self.ordered.push(candidate);
        true
    }

    /// Adds every candidate in order and returns how many were new.
    pub fn extend<I>(&mut self, candidates: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        let mut added = 0;
        for candidate in candidates {
            if self.insert(candidate) {
                added += 1;
            }
        }
        added
    }

    /// Number of unique candidates collected so far.
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.ordered
    }

    pub fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}

/// Removes repeated strings while keeping each first occurrence in place.
///
/// # Examples
/// ```
/// use userpermutation::usernames::dedup_preserving_order;
///
/// let input = ["A", "B", "A", "C", "B"].map(String::from);
/// assert_eq!(dedup_preserving_order(input), ["A", "B", "C"]);
/// ```
pub fn dedup_preserving_order<I>(candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut collector = UsernameCollector::new();
    collector.extend(candidates);
    collector.into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_dedup_keeps_first_occurrence_order() {
        let result = dedup_preserving_order(strings(&["A", "B", "A", "C", "B"]));
        assert_eq!(result, strings(&["A", "B", "C"]));
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_dedup_is_idempotent() {
        let input = strings(&["jross", "j.ross", "Ross", "jross", "James", "Ross"]);
        let once = dedup_preserving_order(input);
        let twice = dedup_preserving_order(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_dedup_is_case_sensitive() {
        let result = dedup_preserving_order(strings(&["Ross", "ross", "ROSS", "ross"]));
        assert_eq!(result, strings(&["Ross", "ross", "ROSS"]));
    }

    #[test]
    fn test_dedup_does_not_trim() {
        let result = dedup_preserving_order(strings(&["ross", " ross", "ross "]));
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_dedup_empty_input() {
        assert!(dedup_preserving_order(Vec::new()).is_empty());
    }

    #[test]
    fn test_dedup_is_not_a_sort() {
        let result = dedup_preserving_order(strings(&["c", "a", "b", "a"]));
        assert_eq!(result, strings(&["c", "a", "b"]));
    }

    #[test]
    fn test_collector_insert_reports_novelty() {
        let mut collector = UsernameCollector::new();
        assert!(collector.is_empty());
        assert!(collector.insert("James".to_string()));
        assert!(collector.insert("Ross".to_string()));
        assert!(!collector.insert("James".to_string()));
        assert_eq!(collector.len(), 2);
        assert_eq!(collector.as_slice(), ["James", "Ross"]);
    }

    #[test]
    fn test_collector_extend_counts_new_entries() {
        let mut collector = UsernameCollector::new();
        assert_eq!(collector.extend(strings(&["a", "b", "a"])), 2);
        assert_eq!(collector.extend(strings(&["b", "c"])), 1);
        assert_eq!(collector.into_vec(), strings(&["a", "b", "c"]));
    }
}
