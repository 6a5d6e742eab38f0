//! Run-length rank expansion.

/// A single square after expansion: `None` is empty, `Some(c)` holds a piece letter.
pub type Cell = Option<char>;

/// Expand one placement rank (`"r3k2r"`) into its squares.
///
/// Each digit `n` becomes `n` empty cells and every other character becomes
/// one occupied cell. The result is not forced to length 8: short or long
/// ranks from a noisy recognizer come back as-is and callers index with `get`.
pub fn expand_rank(rank: &str) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(8);
    for c in rank.chars() {
        match c.to_digit(10) {
            Some(n) => cells.extend(std::iter::repeat(None).take(n as usize)),
            None => cells.push(Some(c)),
        }
    }
    cells
}

/// Symbol at `file` of an expanded rank; out of range reads as empty.
#[inline]
pub fn cell_at(cells: &[Cell], file: usize) -> Cell {
    cells.get(file).copied().flatten()
}
