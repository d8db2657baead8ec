//! Blank span detection
//!
//! Finds runs of near-white rows or columns that separate content blocks.

use sheetcut_core::{IntensityGrid, ScanAxis, Span};
use tracing::trace;

/// Find blank runs along `axis`.
///
/// A line is blank when its mean intensity is `>= threshold`. A run is
/// reported when a non-blank line ends it and it spans at least `min_run`
/// lines; shorter runs are forgotten and the next blank line starts a fresh
/// run. Keeping the short run's start open instead would let a later span
/// cover the content rows between the two runs. A run still open at the
/// last line is not reported, so trailing blank space stays with the final
/// block.
///
/// The returned spans are ascending and never overlap.
pub fn find_blank_spans(
    grid: &IntensityGrid,
    axis: ScanAxis,
    threshold: u8,
    min_run: u32,
) -> Vec<Span> {
    let threshold = threshold as f64;
    let mut spans = Vec::new();
    let mut run_start: Option<u32> = None;

    for (i, mean) in grid.line_means(axis).into_iter().enumerate() {
        let i = i as u32;
        if mean >= threshold {
            if run_start.is_none() {
                run_start = Some(i);
            }
        } else if let Some(start) = run_start.take() {
            if i - start >= min_run {
                spans.push(Span::new(start, i));
            }
        }
    }

    trace!(?axis, count = spans.len(), ?spans, "blank spans");
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Grid whose row `y` has intensity `rows[y]` everywhere.
    fn rows_grid(rows: &[u8]) -> IntensityGrid {
        let w = 4;
        let data = rows
            .iter()
            .flat_map(|&v| std::iter::repeat_n(v, w))
            .collect();
        IntensityGrid::from_parts(w as u32, rows.len() as u32, data).unwrap()
    }

    #[test]
    fn test_single_run() {
        let mut rows = vec![0u8; 20];
        rows[5..12].fill(255);
        let spans = find_blank_spans(&rows_grid(&rows), ScanAxis::Rows, 245, 5);
        assert_eq!(spans, vec![Span::new(5, 12)]);
    }

    #[test]
    fn test_short_run_dropped() {
        let mut rows = vec![0u8; 20];
        rows[3..6].fill(255);
        rows[10..16].fill(250);
        let spans = find_blank_spans(&rows_grid(&rows), ScanAxis::Rows, 245, 5);
        assert_eq!(spans, vec![Span::new(10, 16)]);
    }

    #[test]
    fn test_short_run_does_not_merge_with_later_run() {
        // blank 2..4, content 4..6, blank 6..9, content 9..
        let mut rows = vec![0u8; 12];
        rows[2..4].fill(255);
        rows[6..9].fill(255);
        let spans = find_blank_spans(&rows_grid(&rows), ScanAxis::Rows, 245, 5);
        assert!(spans.is_empty());
    }

    #[test]
    fn test_trailing_run_not_flushed() {
        let mut rows = vec![0u8; 20];
        rows[10..].fill(255);
        let spans = find_blank_spans(&rows_grid(&rows), ScanAxis::Rows, 245, 5);
        assert!(spans.is_empty());
    }

    #[test]
    fn test_leading_run() {
        let mut rows = vec![0u8; 20];
        rows[..6].fill(255);
        let spans = find_blank_spans(&rows_grid(&rows), ScanAxis::Rows, 245, 5);
        assert_eq!(spans, vec![Span::new(0, 6)]);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let mut rows = vec![0u8; 10];
        rows[2..8].fill(245);
        let spans = find_blank_spans(&rows_grid(&rows), ScanAxis::Rows, 245, 5);
        assert_eq!(spans, vec![Span::new(2, 8)]);
        let spans = find_blank_spans(&rows_grid(&rows), ScanAxis::Rows, 246, 5);
        assert!(spans.is_empty());
    }

    #[test]
    fn test_columns() {
        // 10 wide, 3 tall; columns 3..9 white
        let data = (0..3)
            .flat_map(|_| (0..10).map(|x| if (3..9).contains(&x) { 255 } else { 0 }))
            .collect();
        let grid = IntensityGrid::from_parts(10, 3, data).unwrap();
        assert_eq!(
            find_blank_spans(&grid, ScanAxis::Columns, 245, 5),
            vec![Span::new(3, 9)]
        );
        assert!(find_blank_spans(&grid, ScanAxis::Rows, 245, 1).is_empty());
    }

    #[test]
    fn test_spans_ascending_and_long_enough() {
        let rows: Vec<u8> = (0..200u32)
            .map(|i| if (i / 7) % 3 == 0 { 0 } else { 255 })
            .collect();
        let spans = find_blank_spans(&rows_grid(&rows), ScanAxis::Rows, 245, 5);
        assert!(!spans.is_empty());
        for pair in spans.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
        assert!(spans.iter().all(|s| s.len() >= 5));
    }
}
