use crate::bits::PackedBitSet;

/// Bitwise OR of two equal-capacity tables.
///
/// Commutative, associative and idempotent, which lets marks from any
/// number of factors be folded together in any order.
///
/// # Panics
///
/// Panics if the capacities differ.
///
/// # Examples
/// ```
/// use primetable::bits::PackedBitSet;
/// use primetable::sieve::merge;
///
/// let a = PackedBitSet::from_word(4, 0b0001);
/// let b = PackedBitSet::from_word(4, 0b0100);
/// assert_eq!(merge(&a, &b), PackedBitSet::from_word(4, 0b0101));
/// ```
pub fn merge(a: &PackedBitSet, b: &PackedBitSet) -> PackedBitSet {
    let mut merged = a.clone();
    merged.union_with(b);
    merged
}

/// In-place form of [`merge`]: `acc` becomes `merge(acc, contribution)`.
pub(crate) fn merge_into(acc: &mut PackedBitSet, contribution: &PackedBitSet) {
    acc.union_with(contribution);
}
