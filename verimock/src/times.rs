use std::fmt;
use std::ops::{Bound, Range, RangeBounds, RangeFrom, RangeInclusive, RangeTo, RangeToInclusive};

/// How many times a call pattern is expected to appear in the log.
///
/// Plain integers mean "exactly", ranges are taken as they are. The default is
/// "at least once".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Times {
    Exact(usize),
    Range((Bound<usize>, Bound<usize>)),
}

impl Times {
    pub fn exactly(n: usize) -> Self {
        Times::Exact(n)
    }

    pub fn at_least(n: usize) -> Self {
        Times::Range((Bound::Included(n), Bound::Unbounded))
    }

    /// Upper bound only. The lower bound stays at one, so `at_most(3)` still
    /// requires the call to have happened.
    pub fn at_most(n: usize) -> Self {
        Times::Range((Bound::Included(1), Bound::Included(n)))
    }

    pub fn between(min: usize, max: usize) -> Self {
        Times::Range((Bound::Included(min), Bound::Included(max)))
    }

    pub fn never() -> Self {
        Times::Exact(0)
    }

    pub(crate) fn contains(&self, count: &usize) -> bool {
        match self {
            Times::Exact(n) => count == n,
            Times::Range(range) => range.contains(count),
        }
    }
}

impl Default for Times {
    fn default() -> Self {
        Times::at_least(1)
    }
}

impl From<usize> for Times {
    fn from(times: usize) -> Self {
        Times::Exact(times)
    }
}

macro_rules! times_from_range {
    ($($range:ty),*) => {
        $(
            impl From<$range> for Times {
                fn from(range: $range) -> Self {
                    Times::Range((range.start_bound().cloned(), range.end_bound().cloned()))
                }
            }
        )*
    };
}

times_from_range!(
    Range<usize>,
    RangeFrom<usize>,
    RangeTo<usize>,
    RangeInclusive<usize>,
    RangeToInclusive<usize>
);

impl fmt::Display for Times {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Times::Exact(n) => write!(f, "{n}"),
            Times::Range((start, end)) => {
                let start = match start {
                    Bound::Included(n) => format!("{n}<="),
                    Bound::Excluded(n) => format!("{n}<"),
                    Bound::Unbounded => String::from(""),
                };
                let end = match end {
                    Bound::Included(n) => format!("<={n}"),
                    Bound::Excluded(n) => format!("<{n}"),
                    Bound::Unbounded => String::from(""),
                };
                write!(f, "{start}x{end}")
            }
        }
    }
}
