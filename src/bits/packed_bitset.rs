use crate::error::ConstructionError;

/// A fixed-capacity sequence of boolean values packed into a contiguous
/// buffer of bytes.
///
/// Bit `i` lives in byte `i / 8` at offset `i % 8`. The capacity is chosen
/// at construction and never changes. Bits can only be set from inside the
/// crate, so a table handed out to callers is effectively immutable.
///
/// # Examples
///
/// ```
/// use primetable::bits::PackedBitSet;
///
/// let bs = PackedBitSet::from_bits(10, [false, false, false, true]).unwrap();
/// assert!(bs.get(3));
/// assert!(!bs.get(9));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PackedBitSet {
    /*private*/ buffer: Box<[u8]>,
    /*private*/ capacity: usize,
}

impl PackedBitSet {
    /// Constructs a new [`PackedBitSet`] with space for `capacity` bits,
    /// all initialized to zero.
    ///
    /// # Examples
    /// ```
    /// use primetable::bits::PackedBitSet;
    ///
    /// let bs = PackedBitSet::new(12);
    /// assert!(!bs.get(0));
    /// ```
    pub fn new(capacity: usize) -> Self {
        let bytes_needed: usize = capacity.div_ceil(8);
        PackedBitSet {
            buffer: vec![0u8; bytes_needed].into_boxed_slice(),
            capacity,
        }
    }

    /// Constructs a [`PackedBitSet`] whose leading bits are taken in order
    /// from `bits`. Positions not covered by the sequence are cleared.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError`] if `bits` yields more than `capacity`
    /// values. Reading stops at the first value past `capacity`, so endless
    /// iterators are rejected too.
    ///
    /// # Examples
    /// ```
    /// use primetable::bits::PackedBitSet;
    ///
    /// assert!(PackedBitSet::from_bits(2, [true, true, true]).is_err());
    /// ```
    pub fn from_bits<I>(capacity: usize, bits: I) -> Result<Self, ConstructionError>
    where
        I: IntoIterator<Item = bool>,
    {
        let mut set = PackedBitSet::new(capacity);
        for (index, bit) in bits.into_iter().enumerate() {
            if index >= capacity {
                return Err(ConstructionError { capacity });
            }
            if bit {
                set.set(index);
            }
        }
        Ok(set)
    }

    /// Constructs a [`PackedBitSet`] from the bits of `word`, least
    /// significant first. Positions past bit 63 are cleared.
    ///
    /// # Examples
    /// ```
    /// use primetable::bits::PackedBitSet;
    ///
    /// let bs = PackedBitSet::from_word(4, 0b1010);
    /// assert!(!bs.get(0));
    /// assert!(bs.get(1));
    /// assert!(bs.get(3));
    /// ```
    pub fn from_word(capacity: usize, word: u64) -> Self {
        let mut set = PackedBitSet::new(capacity);
        for i in 0..capacity.min(u64::BITS as usize) {
            if (word >> i) & 1 == 1 {
                set.set(i);
            }
        }
        set
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the bit at `index` is set.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    pub fn get(&self, index: usize) -> bool {
        assert!(index < self.capacity);

        let byte_index = index / 8;
        let bit_index = index % 8;

        self.buffer[byte_index] & (1u8 << bit_index) != 0
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.buffer.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Iterates over every bit in index order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.capacity).map(move |i| self.get(i))
    }

    /// Sets the bit at the given `index` to `1`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    pub(crate) fn set(&mut self, index: usize) {
        assert!(index < self.capacity);

        let byte_index = index / 8;
        let bit_index = index % 8;

        self.buffer[byte_index] |= 1u8 << bit_index
    }

    /// ORs every bit of `other` into `self`.
    ///
    /// Bits past `capacity` are never set, so the trailing byte can be
    /// combined wholesale.
    ///
    /// # Panics
    ///
    /// Panics if the capacities differ.
    pub(crate) fn union_with(&mut self, other: &PackedBitSet) {
        assert_eq!(self.capacity, other.capacity);

        for (dst, src) in self.buffer.iter_mut().zip(other.buffer.iter()) {
            *dst |= *src;
        }
    }
}

impl std::fmt::Debug for PackedBitSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bits: String = self.iter().map(|b| if b { '1' } else { '0' }).collect();
        f.debug_struct("PackedBitSet")
            .field("capacity", &self.capacity)
            .field("bits", &bits)
            .finish()
    }
}
