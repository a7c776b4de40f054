/// Positional weights for VIN positions 1 through 17.
///
/// Position 9 holds the check digit and so contributes nothing to the sum.
pub const WEIGHTS: [u32; 17] = [8, 7, 6, 5, 4, 3, 2, 10, 0, 9, 8, 7, 6, 5, 4, 3, 2];

/// Weight of a 1-indexed VIN position, `None` outside 1..=17.
pub fn weight(position: usize) -> Option<u32> {
    position
        .checked_sub(1)
        .and_then(|idx| WEIGHTS.get(idx))
        .copied()
}
