use std::cmp::Ordering;

/// A comparison function for [`SortBy`](super::SortBy), acting as an
/// `FnMut(&T, &T) -> i32`.
///
/// The sign of [`compare(a, b)`](Comparator::compare) tells which argument
/// goes first:
///
/// - positive: `a` must end up **before** `b`,
/// - negative: `b` must end up before `a`,
/// - zero: no preference, the original order is kept.
///
/// This is the reverse of [`Ord::cmp`]'s convention. An ascending sort of numbers
/// therefore compares `b` against `a`; [`ascending`] and [`descending`]
/// build such comparators from an [`Ord`] type.
///
/// # Examples
///
/// ```
/// use myquery::cmp::Comparator;
///
/// let mut smaller_first = |a: &i32, b: &i32| b.cmp(a) as i32;
///
/// assert!(smaller_first.precedes(&1, &2));
/// assert!(!smaller_first.precedes(&2, &1));
/// assert!(!smaller_first.precedes(&2, &2));
/// ```
pub trait Comparator<T> {
    /// Returns a value whose sign says which argument goes first.
    fn compare(&mut self, a: &T, b: &T) -> i32;

    /// Returns whether `a` must end up before `b`.
    #[inline]
    fn precedes(&mut self, a: &T, b: &T) -> bool {
        self.compare(a, b) > 0
    }
}

impl<F, T> Comparator<T> for F
where
    F: FnMut(&T, &T) -> i32,
{
    #[inline]
    fn compare(&mut self, a: &T, b: &T) -> i32 {
        self(a, b)
    }
}

/// Returns a [`Comparator`] that puts smaller items first.
///
/// # Examples
///
/// ```
/// use myquery::cmp::{Comparator, ascending};
///
/// let mut cmp = ascending::<u8>();
///
/// assert_eq!(cmp.compare(&1, &2), 1);
/// assert_eq!(cmp.compare(&2, &1), -1);
/// assert_eq!(cmp.compare(&2, &2), 0);
/// ```
#[inline]
pub fn ascending<T: Ord>() -> impl FnMut(&T, &T) -> i32 + Clone {
    |a: &T, b: &T| precedence(b.cmp(a))
}

/// Returns a [`Comparator`] that puts larger items first.
#[inline]
pub fn descending<T: Ord>() -> impl FnMut(&T, &T) -> i32 + Clone {
    |a: &T, b: &T| precedence(a.cmp(b))
}

#[inline]
fn precedence(ordering: Ordering) -> i32 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}
