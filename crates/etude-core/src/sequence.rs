/// Returns the ordered sequence `[1, 2, ..., n]`.
///
/// A non-positive bound is a defined degenerate case and yields an empty
/// vector, never an error.
///
/// # Examples
///
/// ```
/// use etude_core::ascending;
///
/// assert_eq!(ascending(4), vec![1, 2, 3, 4]);
/// assert_eq!(ascending(0), Vec::<i64>::new());
/// assert_eq!(ascending(-3), Vec::<i64>::new());
/// ```
pub fn ascending(n: i64) -> Vec<i64> {
    if n > 0 { (1..=n).collect() } else { Vec::new() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascending_counts_from_one() {
        assert_eq!(ascending(5), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_ascending_single_element() {
        assert_eq!(ascending(1), vec![1]);
    }

    #[test]
    fn test_ascending_non_positive_is_empty() {
        assert!(ascending(0).is_empty());
        assert!(ascending(-1).is_empty());
        assert!(ascending(i64::MIN).is_empty());
    }
}
