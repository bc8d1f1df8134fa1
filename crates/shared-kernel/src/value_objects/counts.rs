// crates/shared-kernel/src/value_objects/counts.rs
use std::{
    iter::Sum,
    ops::{Add, AddAssign},
};

use serde::{Deserialize, Serialize};

macro_rules! count_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            pub const ZERO: Self = Self(0);

            #[inline]
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            #[inline]
            pub const fn value(self) -> u64 {
                self.0
            }

            #[inline]
            pub const fn is_zero(self) -> bool {
                self.0 == 0
            }
        }

        impl Add for $name {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl AddAssign for $name {
            fn add_assign(&mut self, rhs: Self) {
                self.0 += rhs.0;
            }
        }

        impl AddAssign<u64> for $name {
            fn add_assign(&mut self, rhs: u64) {
                self.0 += rhs;
            }
        }

        impl Sum for $name {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::ZERO, Add::add)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self::new(value)
            }
        }

        impl From<$name> for u64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

count_newtype!(
    /// Number of `'\n'` characters seen.
    LineCount
);
count_newtype!(
    /// Number of maximal non-whitespace runs.
    WordCount
);
count_newtype!(
    /// Number of bytes consumed, multi-byte characters included.
    ByteCount
);

/// Result of one counting pass over a single input.
///
/// `Counts` forms a commutative monoid under [`Counts::merge`] with
/// [`Counts::ZERO`] as identity, which is what lets totals be folded in any
/// completion order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Counts {
    pub lines: LineCount,
    pub words: WordCount,
    pub bytes: ByteCount,
}

impl Counts {
    pub const ZERO: Self = Self {
        lines: LineCount::ZERO,
        words: WordCount::ZERO,
        bytes: ByteCount::ZERO,
    };

    #[inline]
    pub const fn new(lines: u64, words: u64, bytes: u64) -> Self {
        Self {
            lines: LineCount::new(lines),
            words: WordCount::new(words),
            bytes: ByteCount::new(bytes),
        }
    }

    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            lines: self.lines + other.lines,
            words: self.words + other.words,
            bytes: self.bytes + other.bytes,
        }
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.lines.is_zero() && self.words.is_zero() && self.bytes.is_zero()
    }
}

impl Add for Counts {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.merge(rhs)
    }
}

impl AddAssign for Counts {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.merge(rhs);
    }
}

impl Sum for Counts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::merge)
    }
}

impl<'a> Sum<&'a Counts> for Counts {
    fn sum<I: Iterator<Item = &'a Counts>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_default() {
        assert_eq!(Counts::default(), Counts::ZERO);
        assert!(Counts::ZERO.is_zero());
        assert!(!Counts::new(0, 0, 1).is_zero());
    }

    #[test]
    fn merge_adds_fieldwise() {
        let merged = Counts::new(1, 2, 3).merge(Counts::new(10, 20, 30));
        assert_eq!(merged, Counts::new(11, 22, 33));
        assert_eq!(merged.lines.value(), 11);
        assert_eq!(merged.words.value(), 22);
        assert_eq!(merged.bytes.value(), 33);
    }

    #[test]
    fn add_assign_accumulates() {
        let mut total = Counts::ZERO;
        total += Counts::new(1, 1, 12);
        total += Counts::new(0, 3, 9);
        assert_eq!(total, Counts::new(1, 4, 21));
    }
}
