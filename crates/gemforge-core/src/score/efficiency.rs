//! Efficiency - role-dependent gem value

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

/// A real-valued efficiency score with a total ordering.
///
/// Gem option levels are weighted by per-role multipliers, so scores are
/// fractional. Ordering uses [`f64::total_cmp`] which makes `Efficiency`
/// usable as a sort key and as the incumbent bound in the assignment search.
///
/// # Examples
///
/// ```
/// use gemforge_core::Efficiency;
///
/// let a = Efficiency::of(8.3334);
/// let b = Efficiency::of(3.667);
///
/// assert!(a > b);
/// assert_eq!((a + b).value(), 8.3334 + 3.667);
/// ```
#[derive(Clone, Copy, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Efficiency {
    value: f64,
}

impl Efficiency {
    /// The zero score.
    pub const ZERO: Efficiency = Efficiency { value: 0.0 };

    /// Creates a new Efficiency with the given value.
    #[inline]
    pub const fn of(value: f64) -> Self {
        Efficiency { value }
    }

    /// Returns the raw value.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Returns true if this score is strictly better than the other.
    #[inline]
    pub fn is_better_than(&self, other: &Self) -> bool {
        self > other
    }
}

impl PartialEq for Efficiency {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Efficiency {}

impl Ord for Efficiency {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.total_cmp(&other.value)
    }
}

impl PartialOrd for Efficiency {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for Efficiency {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Efficiency::of(self.value + other.value)
    }
}

impl AddAssign for Efficiency {
    fn add_assign(&mut self, other: Self) {
        self.value += other.value;
    }
}

impl Sub for Efficiency {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Efficiency::of(self.value - other.value)
    }
}

impl Sum for Efficiency {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Efficiency::ZERO, Add::add)
    }
}

impl fmt::Debug for Efficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Efficiency({})", self.value)
    }
}

impl fmt::Display for Efficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.value)
    }
}

impl From<f64> for Efficiency {
    fn from(value: f64) -> Self {
        Efficiency::of(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison() {
        let low = Efficiency::of(2.2);
        let high = Efficiency::of(16.6668);

        assert!(high > low);
        assert!(high.is_better_than(&low));
        assert!(!low.is_better_than(&low));
    }

    #[test]
    fn test_arithmetic() {
        let mut total = Efficiency::ZERO;
        total += Efficiency::of(1.5);
        total += Efficiency::of(2.5);

        assert_eq!(total, Efficiency::of(4.0));
        assert_eq!(total - Efficiency::of(1.0), Efficiency::of(3.0));
    }

    #[test]
    fn test_sum() {
        let total: Efficiency = [1.0, 2.0, 3.5].into_iter().map(Efficiency::of).sum();
        assert_eq!(total.value(), 6.5);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Efficiency::of(8.3334)), "8.3334");
        assert_eq!(format!("{:?}", Efficiency::of(1.5)), "Efficiency(1.5)");
    }

    #[test]
    fn test_sort_descending() {
        let mut scores = vec![Efficiency::of(1.0), Efficiency::of(3.0), Efficiency::of(2.0)];
        scores.sort_by(|a, b| b.cmp(a));
        assert_eq!(scores[0], Efficiency::of(3.0));
        assert_eq!(scores[2], Efficiency::of(1.0));
    }
}
