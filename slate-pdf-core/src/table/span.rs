//! Span ownership.
//!
//! A position belongs to the first cell, in row-major order, whose span
//! rectangle covers it. Every cell spans at least itself, so a position
//! nobody else covers owns itself.
//!
//! Drawing uses a stricter view: a cell that is covered by an earlier span
//! is not drawn, so it claims nothing.

/// Returns the owner of `(row, col)` by scanning candidate anchors at or
/// before the target.
pub(crate) fn find_owner<F>(row: usize, col: usize, span_at: F) -> (usize, usize)
where
    F: Fn(usize, usize) -> (usize, usize),
{
    for r in 0..=row {
        for c in 0..=col {
            let (row_span, col_span) = span_at(r, c);
            if covers(r, c, row_span, col_span, row, col) {
                return (r, c);
            }
        }
    }
    (row, col)
}

/// Drawing owner of every position in a `rows x cols` grid, row-major.
///
/// Only cells that are not themselves covered act as anchors here, so a
/// covered cell never claims the positions its own span reaches and every
/// position ends up owned by a cell that gets drawn.
pub(crate) fn owner_grid<F>(rows: usize, cols: usize, span_at: F) -> Vec<(usize, usize)>
where
    F: Fn(usize, usize) -> (usize, usize),
{
    let mut owners: Vec<Option<(usize, usize)>> = vec![None; rows * cols];
    for r in 0..rows {
        for c in 0..cols {
            if owners[r * cols + c].is_some() {
                continue;
            }
            let (row_span, col_span) = span_at(r, c);
            let row_end = r.saturating_add(row_span.max(1)).min(rows);
            let col_end = c.saturating_add(col_span.max(1)).min(cols);
            for rr in r..row_end {
                for cc in c..col_end {
                    let slot = &mut owners[rr * cols + cc];
                    if slot.is_none() {
                        *slot = Some((r, c));
                    }
                }
            }
        }
    }
    owners
        .into_iter()
        .enumerate()
        .map(|(i, owner)| owner.unwrap_or((i / cols, i % cols)))
        .collect()
}

fn covers(
    anchor_row: usize,
    anchor_col: usize,
    row_span: usize,
    col_span: usize,
    row: usize,
    col: usize,
) -> bool {
    row >= anchor_row
        && row < anchor_row.saturating_add(row_span.max(1))
        && col >= anchor_col
        && col < anchor_col.saturating_add(col_span.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans<'a>(grid: &'a [&'a [(usize, usize)]]) -> impl Fn(usize, usize) -> (usize, usize) + 'a {
        move |r, c| grid[r][c]
    }

    #[test]
    fn test_single_cells_own_themselves() {
        let grid: &[&[(usize, usize)]] = &[&[(1, 1), (1, 1)], &[(1, 1), (1, 1)]];
        assert_eq!(find_owner(1, 1, spans(grid)), (1, 1));
        assert_eq!(
            owner_grid(2, 2, spans(grid)),
            vec![(0, 0), (0, 1), (1, 0), (1, 1)]
        );
    }

    #[test]
    fn test_span_covers_neighbours() {
        // (0,0) spans 2x2 in a 3x3 grid
        let grid: &[&[(usize, usize)]] = &[
            &[(2, 2), (1, 1), (1, 1)],
            &[(1, 1), (1, 1), (1, 1)],
            &[(1, 1), (1, 1), (1, 1)],
        ];
        assert_eq!(find_owner(1, 1, spans(grid)), (0, 0));
        assert_eq!(find_owner(0, 2, spans(grid)), (0, 2));
        assert_eq!(find_owner(2, 0, spans(grid)), (2, 0));

        let owners = owner_grid(3, 3, spans(grid));
        for r in 0..3 {
            for c in 0..3 {
                assert_eq!(owners[r * 3 + c], find_owner(r, c, spans(grid)));
            }
        }
    }

    #[test]
    fn test_overlapping_spans_first_anchor_wins() {
        let grid: &[&[(usize, usize)]] = &[&[(1, 2), (2, 1)], &[(1, 1), (1, 1)]];
        assert_eq!(find_owner(0, 1, spans(grid)), (0, 0));
        assert_eq!(find_owner(1, 1, spans(grid)), (0, 1));
        // (0,1) is covered by (0,0), so it draws nothing and (1,1) draws itself
        assert_eq!(
            owner_grid(2, 2, spans(grid)),
            vec![(0, 0), (0, 0), (1, 0), (1, 1)]
        );
    }

    #[test]
    fn test_covered_cell_does_not_hide_its_neighbours() {
        // (0,0) spans 2x2, (0,1) spans 1x2 in a 2x3 grid
        let grid: &[&[(usize, usize)]] = &[&[(2, 2), (1, 2), (1, 1)], &[(1, 1), (1, 1), (1, 1)]];
        assert_eq!(find_owner(0, 2, spans(grid)), (0, 1));
        let owners = owner_grid(2, 3, spans(grid));
        assert_eq!(owners[2], (0, 2));
        assert_eq!(owners[5], (1, 2));
    }

    #[test]
    fn test_huge_spans_do_not_overflow() {
        let grid: &[&[(usize, usize)]] = &[&[(1, 1), (1, 1)], &[(usize::MAX, usize::MAX), (1, 1)]];
        assert_eq!(find_owner(1, 1, spans(grid)), (1, 0));
        assert_eq!(owner_grid(2, 2, spans(grid))[3], (1, 0));
    }
}
