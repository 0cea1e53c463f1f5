use crate::domain::segment::Segment;
use serde::{Deserialize, Serialize};

/// Outcome of one session: the two segments read and their overlap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntersectionReport {
    pub first: Segment,
    pub second: Segment,
    pub intersection: Option<Segment>,
}

impl IntersectionReport {
    pub fn new(first: Segment, second: Segment) -> Self {
        Self {
            first,
            second,
            intersection: first.intersection(&second),
        }
    }
}
