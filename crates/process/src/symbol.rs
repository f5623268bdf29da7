//! Binary emission alphabet for the sequence generators.

/// Binary emission symbol.
///
/// Every generated sequence is a string over this two-letter alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Symbol {
    /// The symbol written as `0`.
    Zero = 0,
    /// The symbol written as `1`.
    One = 1,
}

impl Symbol {
    /// Both symbols in index order.
    pub const ALL: [Symbol; 2] = [Self::Zero, Self::One];

    /// Returns the zero-based index of this symbol (matches the `#[repr(u8)]` discriminant).
    pub fn as_index(self) -> usize {
        self as usize
    }
}

impl From<Symbol> for u8 {
    fn from(s: Symbol) -> u8 {
        s as u8
    }
}
