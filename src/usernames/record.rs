use crate::constants::PERMUTATIONS_PER_NAME;

use super::rules::make_permutations;

/// A first and last name taken from one line of the names file.
///
/// Both parts are always non-empty and free of whitespace; lines that cannot
/// produce such a pair never become a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRecord {
    first: String,
    last: String,
}

impl NameRecord {
    /// Builds a record from explicit name parts.
    ///
    /// Returns `None` when either part is empty or contains whitespace.
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Option<Self> {
        let first = first.into();
        let last = last.into();
        if is_name_token(&first) && is_name_token(&last) {
            Some(Self { first, last })
        } else {
            None
        }
    }

    /// Extracts a record from one line of input.
    ///
    /// The line is split on runs of whitespace. The first token becomes the
    /// first name and the last token the last name; anything in between
    /// (middle names) is dropped. Lines with fewer than two tokens yield `None`.
    ///
    /// # Examples
    /// ```
    /// use userpermutation::usernames::NameRecord;
    ///
    /// let record = NameRecord::from_line("Mary Jane Watson").unwrap();
    /// assert_eq!(record.first(), "Mary");
    /// assert_eq!(record.last(), "Watson");
    ///
    /// assert!(NameRecord::from_line("Madonna").is_none());
    /// ```
    pub fn from_line(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let first = tokens.next()?;
        let last = tokens.last()?;
        Some(Self {
            first: first.to_string(),
            last: last.to_string(),
        })
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn last(&self) -> &str {
        &self.last
    }

    /// The six username candidates for this record, in rule order.
    pub fn permutations(&self) -> [String; PERMUTATIONS_PER_NAME] {
        make_permutations(&self.first, &self.last)
    }
}

fn is_name_token(part: &str) -> bool {
    !part.is_empty() && !part.chars().any(char::is_whitespace)
}
