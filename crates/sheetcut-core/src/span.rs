//! Span and ScanAxis - one-dimensional runs along an image axis

/// Axis along which an image is scanned line by line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanAxis {
    /// Scan rows top to bottom; each line is a full row.
    Rows,
    /// Scan columns left to right; each line is a full column.
    Columns,
}

impl ScanAxis {
    /// The other axis.
    pub fn cross(self) -> Self {
        match self {
            ScanAxis::Rows => ScanAxis::Columns,
            ScanAxis::Columns => ScanAxis::Rows,
        }
    }
}

/// A half-open run `[start, end)` of line indices along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// First line of the run
    pub start: u32,
    /// One past the last line of the run
    pub end: u32,
}

impl Span {
    /// Create a new span. `end` is clamped so it never precedes `start`.
    pub fn new(start: u32, end: u32) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    /// Number of lines in the run
    #[inline]
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Check whether the run covers no lines
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    /// Check whether line `i` lies inside the run
    #[inline]
    pub fn contains(&self, i: u32) -> bool {
        i >= self.start && i < self.end
    }
}
