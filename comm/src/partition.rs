/// Share of `total` items owned by `rank` in a group of `parts`: as even as
/// possible, with the remainder going to the lowest-ranked participants.
#[inline]
pub fn share(total: u64, parts: usize, rank: usize) -> u64 {
    debug_assert!(rank < parts);
    let base = total / parts as u64;
    let rem = total % parts as u64;
    base + u64::from((rank as u64) < rem)
}

/// Per-rank row counts and start offsets for a block partition of `n` items.
pub fn block_partition(n: usize, parts: usize) -> (Vec<usize>, Vec<usize>) {
    let counts: Vec<usize> = (0..parts)
        .map(|rank| share(n as u64, parts, rank) as usize)
        .collect();
    let mut displs = Vec::with_capacity(parts);
    let mut offset = 0;
    for &count in &counts {
        displs.push(offset);
        offset += count;
    }
    (counts, displs)
}
