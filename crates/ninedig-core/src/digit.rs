//! Sudoku digit representation.

use std::fmt::{self, Display};

/// A sudoku digit in the range 1-9.
///
/// Invalid digit values are unrepresentable; fallible conversion from raw
/// bytes happens once at the input boundary via [`Digit::new`].
///
/// # Examples
///
/// ```
/// use ninedig_core::Digit;
///
/// let digit = Digit::new(5).unwrap();
/// assert_eq!(digit, Digit::D5);
/// assert_eq!(digit.value(), 5);
/// assert_eq!(Digit::new(0), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl Digit {
    /// All nine digits in ascending order.
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from a raw value, returning `None` outside 1-9.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::D1),
            2 => Some(Self::D2),
            3 => Some(Self::D3),
            4 => Some(Self::D4),
            5 => Some(Self::D5),
            6 => Some(Self::D6),
            7 => Some(Self::D7),
            8 => Some(Self::D8),
            9 => Some(Self::D9),
            _ => None,
        }
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the bit index used by [`DigitSet`](crate::DigitSet) (0-8).
    #[must_use]
    pub(crate) const fn bit_index(self) -> u32 {
        self.value() as u32 - 1
    }

    /// Creates a digit from a bit index (0-8).
    ///
    /// # Panics
    ///
    /// Panics if `index` is 9 or greater.
    #[must_use]
    pub(crate) const fn from_bit_index(index: u32) -> Self {
        assert!(index < 9);
        Self::ALL[index as usize]
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}
