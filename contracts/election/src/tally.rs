//! Plurality tally.

/// Index of the first entry holding the maximum count.
///
/// Single linear scan in index order: the tracked winner only moves on a
/// strict improvement, so ties resolve to the lowest index. An empty or
/// all-zero sequence yields 0 (the genesis proposal).
pub fn first_max_index<I>(counts: I) -> u32
where
    I: IntoIterator<Item = u32>,
{
    let mut winner = 0u32;
    let mut best = 0u32;
    for (index, count) in counts.into_iter().enumerate() {
        if count > best {
            best = count;
            winner = index as u32;
        }
    }
    winner
}
