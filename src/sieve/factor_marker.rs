use crate::bits::PackedBitSet;

/// Flags every tracked number that is a proper multiple of `factor`.
///
/// Bit `i` of the result is set iff `to_number(i) % factor == 0` and
/// `to_number(i) > factor`, so `factor` itself is never flagged. Tracked
/// numbers are odd, which leaves only the odd multiples `3f, 5f, ...`;
/// consecutive ones sit exactly `factor` indices apart.
///
/// `factor` must be odd and at least 3. A factor whose first proper
/// multiple lies past the addressable range marks nothing.
///
/// # Examples
/// ```
/// use primetable::sieve::{mark, to_index};
///
/// let marks = mark(5, 20);
/// assert!(!marks.get(to_index(5)));
/// assert!(marks.get(to_index(15)));
/// assert!(marks.get(to_index(25)));
/// assert!(!marks.get(to_index(33)));
/// ```
pub fn mark(factor: u64, size: usize) -> PackedBitSet {
    debug_assert!(factor >= 3 && factor % 2 == 1, "{factor} is not an odd factor");

    let mut marks = PackedBitSet::new(size);

    // 3 * factor sits at index (factor - 3) / 2 + factor.
    let first = ((factor - 3) / 2)
        .checked_add(factor)
        .and_then(|i| usize::try_from(i).ok());
    let (Ok(step), Some(mut index)) = (usize::try_from(factor), first) else {
        return marks;
    };

    while index < size {
        marks.set(index);
        index = index.saturating_add(step);
    }
    marks
}
