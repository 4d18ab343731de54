//! Byte ranges into a Go source file.

use std::fmt;
use std::ops::Range;

/// An offset range from a host parser that cannot become a [`Span`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanError {
    /// The offset does not fit in 32 bits.
    OffsetOverflow(usize),
    /// `start` lies after `end`.
    Reversed { start: usize, end: usize },
}

impl fmt::Display for SpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SpanError::OffsetOverflow(offset) => {
                write!(f, "offset {offset} is beyond the 4 GiB source limit")
            }
            SpanError::Reversed { start, end } => {
                write!(f, "span starts at {start} but ends at {end}")
            }
        }
    }
}

impl std::error::Error for SpanError {}

/// Half-open byte range `start..end` in one source unit.
///
/// Spans order by start offset, then end offset. Diagnostics are reported in
/// that order.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Convert an offset range produced by a host parser.
    pub fn try_from_range(range: Range<usize>) -> Result<Self, SpanError> {
        if range.start > range.end {
            return Err(SpanError::Reversed {
                start: range.start,
                end: range.end,
            });
        }
        let offset = |o: usize| u32::try_from(o).map_err(|_| SpanError::OffsetOverflow(o));
        Ok(Span::new(offset(range.start)?, offset(range.end)?))
    }

    #[inline]
    pub const fn len(self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start >= self.end
    }

    #[inline]
    pub fn contains(self, offset: u32) -> bool {
        (self.start..self.end).contains(&offset)
    }

    /// Smallest span covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    /// Smallest span covering every span in `spans`; `None` if there are none.
    pub fn cover(spans: impl IntoIterator<Item = Span>) -> Option<Span> {
        spans.into_iter().reduce(Span::merge)
    }

    /// The text under this span. `None` when the span falls outside
    /// `source` or splits a UTF-8 sequence.
    pub fn snippet(self, source: &str) -> Option<&str> {
        source.get(self.start as usize..self.end as usize)
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Span;
    crate::static_assert_size!(Span, 8);
}

#[cfg(test)]
mod tests;
