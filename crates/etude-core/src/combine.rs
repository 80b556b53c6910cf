/// Combines two sequences position-wise by multiplication.
///
/// Where both sequences have a value the result is their product; where
/// only one still has values, its tail passes through unmultiplied. The
/// result is always as long as the longer input (pad-through-identity, not
/// truncate-to-shortest).
///
/// # Examples
///
/// ```
/// use etude_core::combine;
///
/// assert_eq!(combine(&[1, 2, 3], &[4, 5, 6]), vec![4, 10, 18]);
/// assert_eq!(combine(&[2, 3], &[4, 5, 6]), vec![8, 15, 6]);
/// ```
pub fn combine(a: &[i64], b: &[i64]) -> Vec<i64> {
    // A missing position multiplies as the identity.
    (0..a.len().max(b.len()))
        .map(|i| a.get(i).copied().unwrap_or(1) * b.get(i).copied().unwrap_or(1))
        .collect()
}
