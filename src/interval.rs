use std::convert::TryFrom;
use std::fmt::{self, Debug, Display};
use std::ops::{Bound, RangeBounds, RangeInclusive};

use crate::error::{IntervalError, IntervalResult};

/// A closed interval `[left, right]` with `left <= right`.
///
/// Every constructor checks the ordering of the endpoints, so a value of this
/// type is always well formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Interval<N>(RangeInclusive<N>);

// Same `{ start, end }` shape as `RangeInclusive`; decoding goes through `Interval::new`.
#[cfg(feature = "serde_derive")]
impl<N: serde::Serialize> serde::Serialize for Interval<N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.0, serializer)
    }
}

#[cfg(feature = "serde_derive")]
impl<'de, N> serde::Deserialize<'de> for Interval<N>
where
    N: serde::Deserialize<'de> + Ord + Debug,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let range = <RangeInclusive<N> as serde::Deserialize>::deserialize(deserializer)?;
        Interval::try_from(range).map_err(serde::de::Error::custom)
    }
}

impl<N: Ord + Debug> Interval<N> {
    pub fn new(left: N, right: N) -> IntervalResult<Self> {
        if right < left {
            return Err(IntervalError::invalid(&left, &right));
        }
        Ok(Self(left..=right))
    }
}

impl<N: Ord + Debug> TryFrom<RangeInclusive<N>> for Interval<N> {
    type Error = IntervalError;

    fn try_from(range: RangeInclusive<N>) -> IntervalResult<Self> {
        let (left, right) = range.into_inner();
        Self::new(left, right)
    }
}

impl<N: Ord + Debug> TryFrom<(N, N)> for Interval<N> {
    type Error = IntervalError;

    fn try_from((left, right): (N, N)) -> IntervalResult<Self> {
        Self::new(left, right)
    }
}

impl<N> AsRef<Interval<N>> for Interval<N> {
    fn as_ref(&self) -> &Interval<N> {
        self
    }
}

impl<N> RangeBounds<N> for Interval<N> {
    fn start_bound(&self) -> Bound<&N> {
        self.0.start_bound()
    }

    fn end_bound(&self) -> Bound<&N> {
        self.0.end_bound()
    }
}

impl<N: Display> Display for Interval<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {}]", self.left(), self.right())
    }
}

impl<N> Interval<N> {
    pub fn left(&self) -> &N {
        self.0.start()
    }

    pub fn right(&self) -> &N {
        self.0.end()
    }

    pub fn into_inner(self) -> (N, N) {
        self.0.into_inner()
    }
}

impl<N: Clone> Interval<N> {
    pub fn point(value: N) -> Self {
        Self(value.clone()..=value)
    }
}

impl<N: Ord> Interval<N> {
    pub fn contains(&self, other: &Interval<N>) -> bool {
        self.left() <= other.left() && self.right() >= other.right()
    }

    pub fn contains_point(&self, point: &N) -> bool {
        self.left() <= point && self.right() >= point
    }

    /// Closed-interval overlap: the two intervals share at least one point.
    pub fn intersects(&self, other: &Interval<N>) -> bool {
        self.left() <= other.right() && other.left() <= self.right()
    }
}

/// Conversion into a validated [`Interval`], used by the tree operations so
/// callers can pass ranges or endpoint pairs directly.
pub trait IntoInterval<N> {
    fn into_interval(self) -> IntervalResult<Interval<N>>;
}

impl<N> IntoInterval<N> for Interval<N> {
    #[inline(always)]
    fn into_interval(self) -> IntervalResult<Interval<N>> {
        Ok(self)
    }
}

impl<N: Clone> IntoInterval<N> for &'_ Interval<N> {
    #[inline(always)]
    fn into_interval(self) -> IntervalResult<Interval<N>> {
        Ok(self.clone())
    }
}

impl<N: Ord + Debug> IntoInterval<N> for RangeInclusive<N> {
    #[inline(always)]
    fn into_interval(self) -> IntervalResult<Interval<N>> {
        Interval::try_from(self)
    }
}

impl<N: Ord + Debug> IntoInterval<N> for (N, N) {
    #[inline(always)]
    fn into_interval(self) -> IntervalResult<Interval<N>> {
        Interval::try_from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_reversed_endpoints() {
        let err = Interval::new(5, 2).unwrap_err();
        assert_eq!(
            err,
            IntervalError::InvalidInterval { left: "5".into(), right: "2".into() }
        );
        assert!(Interval::try_from(3..=1).is_err());
        assert!((9, 8).into_interval().is_err());
    }

    #[test]
    fn test_point_interval() {
        let p = Interval::point(7);
        assert_eq!(p.left(), &7);
        assert_eq!(p.right(), &7);
        assert!(p.contains_point(&7));
        assert!(!p.contains_point(&8));
        assert_eq!(p, Interval::new(7, 7).unwrap());
    }

    #[test]
    fn test_contains_point_is_closed() {
        let iv = Interval::new(-3, 4).unwrap();
        assert!(iv.contains_point(&-3));
        assert!(iv.contains_point(&4));
        assert!(!iv.contains_point(&-4));
        assert!(!iv.contains_point(&5));
    }

    #[test]
    fn test_intersects() {
        let a = Interval::new(1, 5).unwrap();
        let b = Interval::new(5, 9).unwrap();
        let c = Interval::new(6, 9).unwrap();
        let d = Interval::new(2, 3).unwrap();

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
        assert!(a.intersects(&d));
        assert!(d.intersects(&a));
    }

    #[test]
    fn test_contains_interval() {
        let outer = Interval::new(0, 10).unwrap();
        let inner = Interval::new(2, 10).unwrap();
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
    }

    #[test]
    fn test_display() {
        assert_eq!(Interval::new(-1, 12).unwrap().to_string(), "[-1, 12]");
    }

    #[cfg(feature = "serde_derive")]
    #[test]
    fn test_serde_round_trip() {
        let iv = Interval::new(-4i64, 9).unwrap();
        let json = serde_json::to_string(&iv).unwrap();
        assert_eq!(json, r#"{"start":-4,"end":9}"#);
        assert_eq!(serde_json::from_str::<Interval<i64>>(&json).unwrap(), iv);

        let point: Interval<i64> = serde_json::from_str(r#"{"start":7,"end":7}"#).unwrap();
        assert_eq!(point, Interval::point(7));
    }

    #[cfg(feature = "serde_derive")]
    #[test]
    fn test_deserialize_rejects_reversed_endpoints() {
        let err = serde_json::from_str::<Interval<i64>>(r#"{"start":9,"end":1}"#).unwrap_err();
        assert!(err.to_string().contains("invalid interval"), "{}", err);

        let parsed: Result<Vec<Interval<i64>>, _> =
            serde_json::from_str(r#"[{"start":1,"end":5},{"start":6,"end":2}]"#);
        assert!(parsed.is_err());
    }
}
