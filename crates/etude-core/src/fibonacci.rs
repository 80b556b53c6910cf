/// Returns every Fibonacci value less than or equal to `n`.
///
/// The sequence starts at 1, 2, 3, 5, 8, ... (the leading 0/1 duplicate is
/// omitted). A non-positive bound yields an empty vector. No state outlives
/// the call.
///
/// # Examples
///
/// ```
/// use etude_core::fibonacci_up_to;
///
/// assert_eq!(fibonacci_up_to(10), vec![1, 2, 3, 5, 8]);
/// assert_eq!(fibonacci_up_to(-1), Vec::<i64>::new());
/// ```
pub fn fibonacci_up_to(n: i64) -> Vec<i64> {
    let mut values = Vec::new();
    let (mut current, mut next) = (1i64, 2i64);

    while current <= n {
        values.push(current);
        let Some(sum) = current.checked_add(next) else {
            break;
        };
        current = next;
        next = sum;
    }

    values
}
