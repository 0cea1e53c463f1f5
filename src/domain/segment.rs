use crate::utils::error::{Result, SegmentError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// A closed segment `[start, end]` on the real number line.
///
/// The endpoints are ordered when the segment is built, so `start <= end`
/// holds for every value of this type. Operations that look like they change
/// a segment (intersection, translation, shifting to the origin) return a new
/// segment instead.
///
/// # Examples
///
/// ```rust
/// # use segment_intersect::Segment;
/// let a = Segment::new(10.0, 0.0);
/// assert_eq!((a.start(), a.end()), (0.0, 10.0));
///
/// let overlap = a.intersection(&Segment::new(5.0, 15.0));
/// assert_eq!(overlap, Some(Segment::new(5.0, 10.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "SegmentBounds")]
pub struct Segment {
    start: f64,
    end: f64,
}

/// Raw endpoints as they appear on the wire, before ordering.
#[derive(Debug, Clone, Copy, Deserialize)]
struct SegmentBounds {
    start: f64,
    end: f64,
}

impl From<SegmentBounds> for Segment {
    fn from(bounds: SegmentBounds) -> Self {
        Segment::new(bounds.start, bounds.end)
    }
}

impl Segment {
    /// Creates a segment from two endpoints given in any order.
    ///
    /// Reversed endpoints are swapped, never rejected.
    #[inline]
    pub fn new(a: f64, b: f64) -> Self {
        if a > b {
            Self { start: b, end: a }
        } else {
            Self { start: a, end: b }
        }
    }

    /// Like [`Segment::new`], but refuses NaN and infinite endpoints.
    pub fn try_new(a: f64, b: f64) -> Result<Self> {
        for value in [a, b] {
            if !value.is_finite() {
                return Err(SegmentError::NonFiniteEndpoint { value });
            }
        }
        Ok(Self::new(a, b))
    }

    #[inline]
    pub fn start(&self) -> f64 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Returns `true` if the segment is a single point.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start >= self.end
    }

    /// Returns the overlap of `self` and `other`.
    ///
    /// The overlap must have positive length: segments that only touch at a
    /// point do not intersect, and a degenerate segment intersects nothing,
    /// itself included.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use segment_intersect::Segment;
    /// let a = Segment::new(0.0, 5.0);
    /// assert!(a.intersection(&Segment::new(5.0, 10.0)).is_none());
    /// assert_eq!(
    ///     Segment::new(0.0, 10.0).intersection(&Segment::new(3.0, 7.0)),
    ///     Some(Segment::new(3.0, 7.0))
    /// );
    /// ```
    pub fn intersection(&self, other: &Segment) -> Option<Segment> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);

        if start < end {
            Some(Segment { start, end })
        } else {
            None
        }
    }

    #[inline]
    pub fn intersects(&self, other: &Segment) -> bool {
        self.intersection(other).is_some()
    }

    /// Shifts the segment so it starts at zero, keeping its length.
    pub fn move_to_origin(&self) -> Segment {
        Segment::new(0.0, self.end - self.start)
    }

    /// Length of the segment.
    #[inline]
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Length truncated toward zero. Lengths beyond `i32::MAX` saturate.
    #[inline]
    pub fn length_floor(&self) -> i32 {
        self.length() as i32
    }

    /// Moves both endpoints by `offset`.
    pub fn translate(&self, offset: i32) -> Segment {
        let offset = f64::from(offset);
        Segment::new(self.start + offset, self.end + offset)
    }

    /// Renders the segment as `"<noun>: [start, end]"`.
    pub fn display_as<'a>(&'a self, noun: &'a str) -> SegmentDisplay<'a> {
        SegmentDisplay { segment: self, noun }
    }
}

impl Add<i32> for Segment {
    type Output = Segment;

    fn add(self, offset: i32) -> Segment {
        self.translate(offset)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_as("Segment"), f)
    }
}

/// Borrowed view returned by [`Segment::display_as`].
pub struct SegmentDisplay<'a> {
    segment: &'a Segment,
    noun: &'a str,
}

impl fmt::Display for SegmentDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: [{}, {}]",
            self.noun, self.segment.start, self.segment.end
        )
    }
}
