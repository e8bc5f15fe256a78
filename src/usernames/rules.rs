use crate::constants::PERMUTATIONS_PER_NAME;

/// Generates the username candidates for one first/last name pair.
///
/// The candidates are always produced in this order:
/// 1. `first` as given
/// 2. `last` as given
/// 3. `first.last`
/// 4. `last.first`
/// 5. lowercased first initial followed by the lowercased last name
/// 6. lowercased first initial, a dot, then the lowercased last name
///
/// Lowercasing is ASCII-only; other characters are copied unchanged.
///
/// # Panics
/// Panics if `first` is empty. Callers build names through
/// [`NameRecord`](super::NameRecord), which never holds an empty part.
///
/// # Examples
/// ```
/// use userpermutation::usernames::make_permutations;
///
/// let candidates = make_permutations("James", "Ross");
/// assert_eq!(
///     candidates,
///     ["James", "Ross", "James.Ross", "Ross.James", "jross", "j.ross"]
/// );
/// ```
pub fn make_permutations(first: &str, last: &str) -> [String; PERMUTATIONS_PER_NAME] {
    let Some(initial) = first.chars().next() else {
        panic!("make_permutations called with an empty first name");
    };
    let initial = initial.to_ascii_lowercase();
    let last_lower = last.to_ascii_lowercase();

    [
        first.to_string(),
        last.to_string(),
        format!("{first}.{last}"),
        format!("{last}.{first}"),
        format!("{initial}{last_lower}"),
        format!("{initial}.{last_lower}"),
    ]
}
